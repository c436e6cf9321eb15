//! Lead editor dialog.
//!
//! Binds a [`LeadEditor`] to form inputs. Submission validates locally first;
//! only a valid form reaches the network, and the dialog stays open with its
//! values intact when the update fails.

use leptos::prelude::*;
use records::{GroupChoice, Lead, LeadEditor, LeadGroup, LeadType, SubmitOutcome, Toast};

use crate::components::toaster::notify;
use crate::state::toasts::ToastState;
use crate::util::palette::lead_type_dot_class;

#[component]
pub fn EditLeadModal(
    lead: Lead,
    #[prop(into)] groups: Signal<Vec<LeadGroup>>,
    on_close: Callback<()>,
    on_saved: Callback<Lead>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let editor = RwSignal::new(LeadEditor::open(&lead));

    let on_backdrop = move |_| on_close.run(());
    let on_cancel = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if editor.with_untracked(LeadEditor::is_pending) {
            return;
        }
        match editor.try_update(LeadEditor::begin_submit) {
            Some(Ok(update)) => {
                #[cfg(feature = "hydrate")]
                {
                    leptos::task::spawn_local(async move {
                        let result = crate::net::api::update_lead(&update).await;
                        if let Err(err) = &result {
                            leptos::logging::warn!("lead update failed: {err}");
                        }
                        if let Some(outcome) = editor.try_update(|e| e.complete_submit(result)) {
                            finish(outcome, toasts, on_saved, on_close);
                        }
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                let _ = update;
            }
            Some(Err(err)) => notify(toasts, Toast::from(&err)),
            None => {}
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog dialog--lead"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <h2>"Edit Lead"</h2>
                <p class="dialog__description">
                    "Update the lead information. Name, email, and contact are required."
                </p>

                <form class="dialog__form" on:submit=on_submit>
                    <label class="dialog__label" for="lead-name">"Name *"</label>
                    <input
                        id="lead-name"
                        class="dialog__input"
                        placeholder="Enter lead's name"
                        prop:value=move || editor.with(|e| e.form().name.clone())
                        on:input=move |ev| editor.update(|e| e.form_mut().name = event_target_value(&ev))
                    />

                    <label class="dialog__label" for="lead-email">"Email *"</label>
                    <input
                        id="lead-email"
                        class="dialog__input"
                        type="email"
                        placeholder="Enter lead's email"
                        prop:value=move || editor.with(|e| e.form().email.clone())
                        on:input=move |ev| editor.update(|e| e.form_mut().email = event_target_value(&ev))
                    />

                    <label class="dialog__label" for="lead-contact">"Contact *"</label>
                    <input
                        id="lead-contact"
                        class="dialog__input"
                        placeholder="Enter phone number or contact info"
                        prop:value=move || editor.with(|e| e.form().contact.clone())
                        on:input=move |ev| editor.update(|e| e.form_mut().contact = event_target_value(&ev))
                    />

                    <label class="dialog__label" for="lead-description">"Description"</label>
                    <textarea
                        id="lead-description"
                        class="dialog__input"
                        rows="3"
                        placeholder="Enter additional notes about this lead"
                        prop:value=move || editor.with(|e| e.form().description.clone())
                        on:input=move |ev| editor.update(|e| e.form_mut().description = event_target_value(&ev))
                    ></textarea>

                    <span class="dialog__label">"Lead Type *"</span>
                    <div class="dialog__lead-types" role="radiogroup">
                        {LeadType::ALL
                            .into_iter()
                            .map(|lead_type| {
                                let checked = move || editor.with(|e| e.form().lead_type == lead_type);
                                view! {
                                    <label class="dialog__lead-type">
                                        <input
                                            type="radio"
                                            name="lead-type"
                                            value=lead_type.as_str()
                                            prop:checked=checked
                                            on:change=move |_| editor.update(|e| e.form_mut().lead_type = lead_type)
                                        />
                                        <span class=lead_type_dot_class(lead_type)></span>
                                        {lead_type.as_str()}
                                    </label>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <label class="dialog__label" for="lead-group">"Group"</label>
                    <select
                        id="lead-group"
                        class="dialog__input"
                        prop:value=move || editor.with(|e| e.form().group.select_value())
                        on:change=move |ev| {
                            let choice = GroupChoice::from_select_value(&event_target_value(&ev));
                            editor.update(|e| e.form_mut().group = choice);
                        }
                    >
                        <option value="">"No group"</option>
                        {move || {
                            groups
                                .get()
                                .into_iter()
                                .map(|group| {
                                    view! { <option value=group.id.to_string()>{group.group_name}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>

                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=on_cancel>"Cancel"</button>
                        <button
                            type="submit"
                            class="btn btn--primary"
                            disabled=move || editor.with(LeadEditor::is_pending)
                        >
                            {move || if editor.with(LeadEditor::is_pending) { "Updating..." } else { "Update Lead" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// Report a settled submission and close on success.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn finish(outcome: SubmitOutcome, toasts: RwSignal<ToastState>, on_saved: Callback<Lead>, on_close: Callback<()>) {
    notify(toasts, outcome.toast());
    if let SubmitOutcome::Saved(lead) = outcome {
        on_saved.run(lead);
        on_close.run(());
    }
}
