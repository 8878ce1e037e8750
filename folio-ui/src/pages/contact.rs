//! Contact Page
//!
//! The form has no delivery backend: sending waits briefly, clears the
//! fields and shows a success notice that hides itself.

use gloo_timers::callback::Timeout;
use leptos::*;

use folio::view::ContactStatus;
use folio::ContactForm;

use crate::components::{PageSection, SectionTitle};

const SEND_DELAY_MS: u32 = 1500;
const NOTICE_MS: u32 = 3000;

const INPUT_CLASS: &str = "w-full p-3 bg-gray-100 dark:bg-gray-700 rounded-md border \
                           border-transparent focus:outline-none focus:ring-2 focus:ring-indigo-500";

#[component]
pub fn Contact() -> impl IntoView {
    let form = create_rw_signal(ContactForm::new());
    let form_error = create_rw_signal(None::<String>);
    let sending = move || form.with(|f| f.is_sending());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        match form.try_update(|f| f.begin_send()) {
            Some(Ok(())) => {
                form_error.set(None);
                Timeout::new(SEND_DELAY_MS, move || {
                    form.update(|f| f.finish_send());
                    Timeout::new(NOTICE_MS, move || form.update(|f| f.clear_notice())).forget();
                })
                .forget();
            }
            Some(Err(e)) => form_error.set(Some(e.to_string())),
            None => {}
        }
    };

    view! {
        <PageSection>
            <SectionTitle title="Contact Me" />
            <p class="max-w-2xl mx-auto text-center text-gray-600 dark:text-gray-300 -mt-8 mb-12">
                "Have a project in mind or just want to say hi? Feel free to reach out."
            </p>
            <div class="max-w-2xl mx-auto">
                <form on:submit=on_submit class="space-y-6 bg-white dark:bg-gray-800 p-8 rounded-lg shadow-lg">
                    <div class="grid md:grid-cols-2 gap-6">
                        <input
                            type="text" placeholder="Your Name" required class=INPUT_CLASS
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                        <input
                            type="email" placeholder="Your Email" required class=INPUT_CLASS
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </div>
                    <input
                        type="text" placeholder="Subject" required class=INPUT_CLASS
                        prop:value=move || form.with(|f| f.subject.clone())
                        on:input=move |ev| form.update(|f| f.subject = event_target_value(&ev))
                    />
                    <textarea
                        placeholder="Your Message" rows="5" required class=INPUT_CLASS
                        prop:value=move || form.with(|f| f.message.clone())
                        on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                    />

                    {move || form_error.get().map(|msg| view! {
                        <p class="text-center text-red-500">{msg}</p>
                    })}

                    <div class="text-center">
                        <button
                            type="submit"
                            disabled=sending
                            class="inline-flex items-center justify-center px-8 py-3 bg-indigo-600 text-white font-bold rounded-md hover:bg-indigo-700 transition-all duration-300 disabled:bg-indigo-400 w-full md:w-auto"
                        >
                            {move || if sending() { "Sending..." } else { "Send Message" }}
                        </button>
                    </div>

                    <Show when=move || form.with(|f| f.status() == ContactStatus::Sent)>
                        <p class="text-center text-green-500 mt-4">"Message sent successfully!"</p>
                    </Show>
                </form>
            </div>
        </PageSection>
    }
}
