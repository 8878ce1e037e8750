//! Page section layout

use leptos::*;

/// Padded content container used by every page except home
#[component]
pub fn PageSection(children: Children) -> impl IntoView {
    view! {
        <section class="container mx-auto px-4 sm:px-6 lg:px-8 py-16 md:py-24">
            {children()}
        </section>
    }
}

/// Centered page heading with an accent underline
#[component]
pub fn SectionTitle(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <div class="text-center">
            <h2 class="text-3xl md:text-4xl font-bold text-center mb-12 text-gray-800 dark:text-white relative inline-block">
                {title}
                <span class="absolute -bottom-2 left-1/2 -translate-x-1/2 w-20 h-1 bg-indigo-500 rounded-full" />
            </h2>
        </div>
    }
}
