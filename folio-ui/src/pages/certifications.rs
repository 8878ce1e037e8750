//! Certifications Page

use leptos::*;

use crate::components::{PageSection, SectionTitle};
use crate::state::GlobalState;

#[component]
pub fn Certifications() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <PageSection>
            <SectionTitle title="Certifications" />
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                <For
                    each=move || state.collections.with(|c| c.certifications.clone())
                    key=|cert| cert.id.clone()
                    children=|cert| view! {
                        <div class="bg-white dark:bg-gray-800 rounded-lg shadow-md overflow-hidden p-6 text-center hover:shadow-xl transition-shadow duration-300">
                            <img src=cert.image_url alt=cert.name.clone() class="w-full h-48 object-cover mb-4 rounded-md" />
                            <h3 class="text-lg font-bold text-gray-800 dark:text-white">{cert.name}</h3>
                            <p class="text-indigo-500 dark:text-indigo-400 mt-1">{cert.issuer}</p>
                            <p class="text-sm text-gray-500 dark:text-gray-400 mt-2">{cert.date}</p>
                        </div>
                    }
                />
            </div>
        </PageSection>
    }
}
