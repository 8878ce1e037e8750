//! Loading Component

use leptos::*;

/// Full-page loading gate shown until the first content load finishes
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex flex-col justify-center items-center h-screen space-y-4">
            <div class="loading-spinner w-8 h-8" />
            <p>"Loading data from the server..."</p>
        </div>
    }
}
