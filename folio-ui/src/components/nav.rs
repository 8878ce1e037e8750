//! Navigation Component
//!
//! Header bar with the logo, page links, theme switch and mobile menu.

use leptos::*;

use folio::Page;

use crate::state::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let initials = state.profile.with_value(|p| p.initials());
    let menu_open = move || state.ui.with(|ui| ui.menu_open());

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-white/70 dark:bg-gray-900/70 backdrop-blur-lg shadow-sm">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-20">
                    // Logo
                    <button
                        class="text-2xl font-extrabold text-indigo-600 dark:text-indigo-400"
                        on:click=move |_| state.navigate(Page::Home)
                    >
                        {initials}
                    </button>

                    // Desktop links
                    <nav class="hidden md:flex items-center space-x-1 lg:space-x-2">
                        {Page::ALL.into_iter().map(|page| view! { <NavLink page=page /> }).collect_view()}
                        <ThemeButton />
                    </nav>

                    // Mobile controls
                    <div class="md:hidden flex items-center">
                        <ThemeButton />
                        <button
                            class="p-2 rounded-md z-50"
                            on:click=move |_| state.ui.update(|ui| ui.toggle_menu())
                        >
                            {move || if menu_open() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>
        </header>

        // Mobile menu overlay
        <Show when=menu_open>
            <div class="md:hidden fixed inset-0 bg-white dark:bg-gray-900 z-40 pt-20">
                <nav class="flex flex-col items-center justify-center h-full space-y-6">
                    {Page::ALL
                        .into_iter()
                        .map(|page| view! {
                            <button
                                class="text-2xl font-semibold text-gray-700 dark:text-gray-300 hover:text-indigo-600 dark:hover:text-indigo-400 transition-colors"
                                on:click=move |_| state.navigate(page)
                            >
                                {page.title()}
                            </button>
                        })
                        .collect_view()}
                </nav>
            </div>
        </Show>
    }
}

/// Desktop navigation link
#[component]
fn NavLink(page: Page) -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <button
            on:click=move |_| state.navigate(page)
            class=move || {
                let base = "px-3 py-2 rounded-md text-sm font-medium transition-all duration-300";
                if state.ui.with(|ui| ui.is_active(page)) {
                    format!("{} text-indigo-600 dark:text-indigo-400", base)
                } else {
                    format!(
                        "{} text-gray-600 dark:text-gray-300 hover:text-indigo-600 dark:hover:text-indigo-400",
                        base
                    )
                }
            }
        >
            {page.title()}
        </button>
    }
}

#[component]
fn ThemeButton() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <button
            class="p-2 rounded-full hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors"
            on:click=move |_| state.ui.update(|ui| ui.toggle_theme())
        >
            {move || if state.ui.with(|ui| ui.theme().is_dark()) { "☀" } else { "☾" }}
        </button>
    }
}
