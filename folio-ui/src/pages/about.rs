//! About Page
//!
//! Bio with avatar and the skill bars.

use leptos::*;

use folio::Skill;

use crate::components::{PageSection, SectionTitle};
use crate::state::GlobalState;

#[component]
pub fn About() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let profile = state.profile.get_value();
    let skills = state.skills.get_value();

    // Avatar falls back to a placeholder showing the initials
    let fallback = format!(
        "https://placehold.co/300x300/e2e8f0/64748b?text={}",
        profile.initials()
    );
    let avatar = if profile.avatar_url.is_empty() {
        fallback.clone()
    } else {
        profile.avatar_url.clone()
    };
    let on_error = move |ev| {
        let img = event_target::<web_sys::HtmlImageElement>(&ev);
        if img.src() != fallback {
            img.set_src(&fallback);
        }
    };

    view! {
        <PageSection>
            <SectionTitle title="About Me" />
            <div class="grid md:grid-cols-5 gap-12 items-center">
                <div class="md:col-span-2">
                    <div class="w-48 h-48 md:w-64 md:h-64 mx-auto rounded-full bg-gradient-to-br from-indigo-400 to-purple-500 p-1 shadow-lg">
                        <img src=avatar alt=profile.name.clone() class="w-full h-full rounded-full object-cover" on:error=on_error />
                    </div>
                </div>
                <div class="md:col-span-3">
                    <p class="text-lg text-gray-600 dark:text-gray-300 leading-relaxed whitespace-pre-wrap">{profile.bio.clone()}</p>
                </div>
            </div>

            <div class="mt-20">
                <h3 class="text-2xl md:text-3xl font-bold text-center mb-12 text-gray-800 dark:text-white">"My Skills"</h3>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-8">
                    {skills.into_iter().map(|skill| view! { <SkillBar skill=skill /> }).collect_view()}
                </div>
            </div>
        </PageSection>
    }
}

#[component]
fn SkillBar(skill: Skill) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center">
            <div class="w-full bg-gray-200 dark:bg-gray-700 rounded-full h-2.5 mb-2">
                <div class="bg-indigo-600 h-2.5 rounded-full" style=format!("width: {}%", skill.level) />
            </div>
            <p class="font-medium text-gray-700 dark:text-gray-300">{skill.name}</p>
        </div>
    }
}
