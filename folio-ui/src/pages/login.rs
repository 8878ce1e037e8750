//! Admin Login Page

use leptos::*;

use crate::components::{PageSection, SectionTitle};
use crate::state::GlobalState;

#[component]
pub fn Login() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let (password, set_password) = create_signal(String::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        state.login(&password.get_untracked());
    };

    view! {
        <PageSection>
            <div class="max-w-md mx-auto text-center">
                <SectionTitle title="Admin Login" />
                <form on:submit=on_submit class="space-y-6 bg-white dark:bg-gray-800 p-8 rounded-lg shadow-lg">
                    <div>
                        <label for="password" class="block text-sm font-medium text-gray-700 dark:text-gray-300 text-left">
                            "Password"
                        </label>
                        <input
                            type="password"
                            id="password"
                            required
                            class="mt-1 w-full p-3 bg-gray-100 dark:bg-gray-700 rounded-md border border-transparent focus:outline-none focus:ring-2 focus:ring-indigo-500"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>

                    {move || state.ui.with(|ui| ui.login_error().map(str::to_string)).map(|msg| view! {
                        <p class="text-red-500 text-sm">{msg}</p>
                    })}

                    <button
                        type="submit"
                        class="w-full flex items-center justify-center px-4 py-3 bg-indigo-600 text-white font-bold rounded-md hover:bg-indigo-700 transition-colors"
                    >
                        "Login"
                    </button>
                </form>
            </div>
        </PageSection>
    }
}
