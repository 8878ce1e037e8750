//! Home Page

use leptos::*;

use crate::state::GlobalState;

const LINK_CLASS: &str = "text-gray-500 hover:text-indigo-600 dark:hover:text-indigo-400 transition-colors";

/// Hero with name, title and social links
#[component]
pub fn Home() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let profile = state.profile.get_value();
    let words = profile
        .title_words()
        .into_iter()
        .map(|word| view! { <span class="inline-block mr-2">{word.to_string()}</span> })
        .collect_view();

    view! {
        <div class="min-h-[calc(100vh-5rem-4rem)] flex items-center justify-center relative overflow-hidden">
            <div class="text-center z-10 p-4">
                <h1 class="text-5xl md:text-7xl font-extrabold text-gray-900 dark:text-white">
                    "Hi, I'm " <span class="text-indigo-600 dark:text-indigo-400">{profile.name.clone()}</span>
                </h1>
                <h2 class="text-xl md:text-2xl mt-4 text-gray-600 dark:text-gray-300">{words}</h2>
                <div class="mt-8 flex justify-center space-x-6">
                    <a href=profile.socials.github.clone() target="_blank" rel="noopener noreferrer" class=LINK_CLASS>"GitHub"</a>
                    <a href=profile.socials.linkedin.clone() target="_blank" rel="noopener noreferrer" class=LINK_CLASS>"LinkedIn"</a>
                    <a href=profile.socials.twitter.clone() target="_blank" rel="noopener noreferrer" class=LINK_CLASS>"Twitter"</a>
                    <a href=profile.mailto() class=LINK_CLASS>"Email"</a>
                </div>
            </div>
        </div>
    }
}
