//! Admin Section Component
//!
//! Add-form and item list for one content section, built from the section's
//! form declaration.

use leptos::*;

use folio::view::{form_spec, FieldKind, FieldSpec, FormState, RowAction, EDIT_PLACEHOLDER, EMPTY_LIST_NOTICE};
use folio::{Item, Section};

use crate::state::GlobalState;

const INPUT_CLASS: &str = "mt-1 w-full p-2 bg-gray-100 dark:bg-gray-700 rounded-md border \
                           border-transparent focus:outline-none focus:ring-2 focus:ring-indigo-500";

/// Add-form plus the list of existing items
#[component]
pub fn AdminSection(section: Section) -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let spec = form_spec(section);
    let form = create_rw_signal(FormState::new(section));
    let form_error = create_rw_signal(None::<String>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        match form.try_update(|f| f.submit()) {
            Some(Ok(fields)) => {
                form_error.set(None);
                state.add(section, fields);
            }
            Some(Err(e)) => form_error.set(Some(e.to_string())),
            None => {}
        }
    };

    let items = move || state.collections.with(|c| c.items(section));

    view! {
        <div class="grid lg:grid-cols-3 gap-8">
            <div class="lg:col-span-1">
                <h3 class="text-xl font-bold mb-4 text-gray-800 dark:text-white">{spec.heading()}</h3>
                <form on:submit=on_submit class="space-y-4 bg-white dark:bg-gray-800 p-6 rounded-lg shadow-md">
                    {spec.fields.iter().map(|field| view! { <FormField field=field form=form /> }).collect_view()}

                    {move || form_error.get().map(|msg| view! {
                        <p class="text-red-500 text-sm">{msg}</p>
                    })}

                    <button
                        type="submit"
                        class="w-full flex items-center justify-center px-4 py-2 bg-indigo-600 text-white font-bold rounded-md hover:bg-indigo-700 transition-colors"
                    >
                        {spec.submit_label()}
                    </button>
                </form>
            </div>

            <div class="lg:col-span-2">
                <h3 class="text-xl font-bold mb-4 text-gray-800 dark:text-white">{spec.list_heading()}</h3>
                <div class="space-y-4">
                    <Show
                        when=move || !items().is_empty()
                        fallback=|| view! { <p class="text-gray-500 dark:text-gray-400">{EMPTY_LIST_NOTICE}</p> }
                    >
                        <For
                            each=items
                            key=|item| item.id().to_string()
                            children=move |item| view! { <ItemRow item=item /> }
                        />
                    </Show>
                </div>
            </div>
        </div>
    }
}

/// One labelled input bound to a form field
#[component]
fn FormField(field: &'static FieldSpec, form: RwSignal<FormState>) -> impl IntoView {
    let name = field.name;
    let value = move || form.with(|f| f.value(name).to_string());
    let on_input = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        form.update(|f| {
            let _ = f.set(name, value);
        });
    };

    let input = match field.kind {
        FieldKind::Paragraph => view! {
            <textarea id=name name=name rows="3" required class=INPUT_CLASS prop:value=value on:input=on_input />
        }
        .into_view(),
        FieldKind::Text => view! {
            <input type="text" id=name name=name required class=INPUT_CLASS prop:value=value on:input=on_input />
        }
        .into_view(),
    };

    view! {
        <div>
            <label for=name class="block text-sm font-medium text-gray-700 dark:text-gray-300">
                {field.label}
            </label>
            {input}
        </div>
    }
}

#[component]
fn ItemRow(item: Item) -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let section = item.section();
    let id = item.id().to_string();

    view! {
        <div class="bg-white dark:bg-gray-800 p-4 rounded-lg shadow-md flex items-center justify-between">
            <div>
                <h4 class="font-bold text-gray-800 dark:text-white">{item.headline().to_string()}</h4>
                <p class="text-sm text-gray-500 dark:text-gray-400">{item.subtitle().to_string()}</p>
            </div>
            <div>
                {RowAction::ALL
                    .into_iter()
                    .map(|action| {
                        let id = id.clone();
                        let hover = match action {
                            RowAction::Edit => "hover:text-indigo-600 dark:hover:text-indigo-400",
                            RowAction::Delete => "hover:text-red-600 dark:hover:text-red-400",
                        };
                        view! {
                            <button
                                class=format!("p-2 text-gray-500 transition-colors {}", hover)
                                on:click=move |_| match action {
                                    RowAction::Edit => state.show_notice(EDIT_PLACEHOLDER),
                                    RowAction::Delete => state.remove(section, id.clone()),
                                }
                            >
                                {action.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
