//! App Root Component
//!
//! Main application component: global state, the loading gate and the
//! screen switch.

use chrono::Datelike;
use leptos::*;

use folio::Screen;

use crate::components::{Loading, Nav, Toast};
use crate::pages::{About, Admin, Blog, Certifications, Contact, Home, Login, Works};
use crate::state::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    let state = expect_context::<GlobalState>();
    state.load();

    // Mirror the theme onto <html> for the `dark:` styles
    create_effect(move |_| {
        let dark = state.ui.with(|ui| ui.theme().is_dark());
        if let Some(root) = document().document_element() {
            let _ = root.class_list().toggle_with_force("dark", dark);
        }
    });

    // Only a screen change re-renders the page; menu and theme toggles don't
    let screen = create_memo(move |_| state.ui.with(|ui| ui.screen()));

    view! {
        <div class="bg-gray-100 dark:bg-gray-900 text-gray-800 dark:text-gray-200 min-h-screen font-sans transition-colors duration-500 flex flex-col">
            <Nav />

            <main class="pt-20 flex-grow">
                {move || match screen.get() {
                    Screen::Loading => view! { <Loading /> }.into_view(),
                    Screen::Home => view! { <Home /> }.into_view(),
                    Screen::About => view! { <About /> }.into_view(),
                    Screen::Works => view! { <Works /> }.into_view(),
                    Screen::Certifications => view! { <Certifications /> }.into_view(),
                    Screen::Blog => view! { <Blog /> }.into_view(),
                    Screen::Contact => view! { <Contact /> }.into_view(),
                    Screen::AdminLogin => view! { <Login /> }.into_view(),
                    Screen::AdminPanel => view! { <Admin /> }.into_view(),
                }}
            </main>

            <Footer />
            <Toast />
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let line = state
        .profile
        .with_value(|profile| profile.footer_line(chrono::Utc::now().year()));

    view! {
        <footer class="bg-gray-200 dark:bg-gray-800 py-6">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 text-center text-sm text-gray-500 dark:text-gray-400">
                <p>{line}</p>
            </div>
        </footer>
    }
}
