//! Blog Page

use leptos::*;

use crate::components::{PageSection, SectionTitle};
use crate::state::GlobalState;

#[component]
pub fn Blog() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <PageSection>
            <SectionTitle title="My Blog" />
            <div class="max-w-3xl mx-auto space-y-8">
                <For
                    each=move || state.collections.with(|c| c.blog.clone())
                    key=|post| post.id.clone()
                    children=|post| {
                        let href = post.href();
                        view! {
                            <div class="bg-white dark:bg-gray-800 rounded-lg shadow-md p-6 hover:shadow-xl transition-shadow duration-300">
                                <p class="text-sm text-gray-500 dark:text-gray-400 mb-2">{post.date}</p>
                                <h3 class="text-2xl font-bold text-gray-800 dark:text-white mb-3">{post.title}</h3>
                                <p class="text-gray-600 dark:text-gray-300 mb-4">{post.excerpt}</p>
                                <a href=href class="font-semibold text-indigo-600 dark:text-indigo-400 hover:underline">"Read More →"</a>
                            </div>
                        }
                    }
                />
            </div>
        </PageSection>
    }
}
