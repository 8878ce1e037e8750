//! Works Page

use leptos::*;

use crate::components::{PageSection, SectionTitle};
use crate::state::GlobalState;

#[component]
pub fn Works() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <PageSection>
            <SectionTitle title="My Works" />
            <div class="grid md:grid-cols-2 gap-8">
                <For
                    each=move || state.collections.with(|c| c.works.clone())
                    key=|work| work.id.clone()
                    children=|work| view! {
                        <div class="group relative overflow-hidden rounded-lg shadow-lg">
                            <img src=work.image_url alt=work.title.clone() class="w-full h-64 object-cover transition-transform duration-500 group-hover:scale-110" />
                            <div class="absolute inset-0 bg-black bg-opacity-50 flex flex-col justify-end p-6 transition-all duration-500 opacity-0 group-hover:opacity-100">
                                <h3 class="text-xl font-bold text-white mb-1">{work.title}</h3>
                                <p class="text-indigo-300 text-sm mb-2">{work.category}</p>
                                <p class="text-gray-200 text-sm">{work.description}</p>
                            </div>
                        </div>
                    }
                />
            </div>
        </PageSection>
    }
}
