//! Admin Panel Page
//!
//! Section tabs over the add-form and item list, plus logout.

use leptos::*;

use folio::Section;

use crate::api;
use crate::components::{AdminSection, PageSection, SectionTitle};
use crate::state::GlobalState;

#[component]
pub fn Admin() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let tab = create_memo(move |_| state.ui.with(|ui| ui.admin_tab()));

    view! {
        <PageSection>
            <div class="flex justify-between items-center text-center mb-12">
                <div class="flex-1" />
                <div class="flex-1">
                    <SectionTitle title="Admin Panel" />
                </div>
                <div class="flex-1 flex justify-end">
                    <button
                        class="flex items-center px-4 py-2 bg-red-500 text-white font-bold rounded-md hover:bg-red-600 transition-colors"
                        on:click=move |_| state.logout()
                    >
                        "Logout"
                    </button>
                </div>
            </div>

            <div class="max-w-5xl mx-auto">
                <div class="mb-8 border-b border-gray-300 dark:border-gray-700">
                    <nav class="-mb-px flex space-x-8" aria-label="Tabs">
                        {Section::ALL.into_iter().map(|section| view! {
                            <button
                                on:click=move |_| state.ui.update(|ui| ui.select_admin_tab(section))
                                class=move || {
                                    let base = "whitespace-nowrap py-4 px-1 border-b-2 font-medium text-sm capitalize";
                                    if tab.get() == section {
                                        format!("{} border-indigo-500 text-indigo-600 dark:text-indigo-400", base)
                                    } else {
                                        format!(
                                            "{} border-transparent text-gray-500 hover:text-gray-700 hover:border-gray-300 dark:text-gray-400 dark:hover:text-gray-200",
                                            base
                                        )
                                    }
                                }
                            >
                                {format!("Manage {}", section)}
                            </button>
                        }).collect_view()}
                    </nav>
                </div>

                {move || view! { <AdminSection section=tab.get() /> }}

                <BackendSettings />
            </div>
        </PageSection>
    }
}

/// Backend URL stored in the browser; empty means the embedded content
#[component]
fn BackendSettings() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let (url, set_url) = create_signal(api::get_api_base());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        api::set_api_base(&url.get_untracked());
        state.show_notice("Backend URL saved. Reload the page to apply it.");
    };

    view! {
        <form on:submit=on_submit class="mt-12 flex items-end space-x-4">
            <div class="flex-1">
                <label for="api-url" class="block text-sm font-medium text-gray-700 dark:text-gray-300">
                    "Backend URL"
                </label>
                <input
                    type="text"
                    id="api-url"
                    placeholder="Leave empty to use the built-in content"
                    class="mt-1 w-full p-2 bg-gray-100 dark:bg-gray-700 rounded-md border border-transparent focus:outline-none focus:ring-2 focus:ring-indigo-500"
                    prop:value=url
                    on:input=move |ev| set_url.set(event_target_value(&ev))
                />
            </div>
            <button
                type="submit"
                class="px-4 py-2 bg-gray-600 text-white font-bold rounded-md hover:bg-gray-700 transition-colors"
            >
                "Save"
            </button>
        </form>
    }
}
