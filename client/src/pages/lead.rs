//! Lead detail page with the editor dialog.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use records::{Lead, LeadGroup};

use crate::components::edit_lead_modal::EditLeadModal;
use crate::components::footer::Footer;
use crate::state::query::QueryState;

#[component]
pub fn LeadPage() -> impl IntoView {
    let params = use_params_map();
    let lead_id = move || params.read().get("id").unwrap_or_default();

    let lead = RwSignal::new(QueryState::<Lead>::Idle);
    let groups = RwSignal::new(Vec::<LeadGroup>::new());
    let editing = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let id = lead_id();
            lead.set(QueryState::Loading);
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_lead(&id).await;
                if let Err(err) = &result {
                    leptos::logging::warn!("lead fetch failed: {err}");
                }
                lead.set(QueryState::from_result(result));
            });
        });
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_lead_groups().await {
                Ok(list) => groups.set(list),
                Err(err) => leptos::logging::warn!("lead groups fetch failed: {err}"),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = lead_id;

    let group_name = move |group_id: Option<uuid::Uuid>| {
        group_id.map_or_else(
            || "No group".to_owned(),
            |id| {
                groups.with(|list| {
                    list.iter()
                        .find(|g| g.id == id)
                        .map_or_else(|| "Unknown group".to_owned(), |g| g.group_name.clone())
                })
            },
        )
    };

    let on_close = Callback::new(move |()| editing.set(false));
    let on_saved = Callback::new(move |saved: Lead| lead.set(QueryState::Ready(saved)));

    view! {
        <div class="lead-page">
            <header class="lead-page__header toolbar">
                <a class="btn" href="/">"← Back to Dashboard"</a>
            </header>

            <main class="lead-page__body">
                {move || match lead.get() {
                    QueryState::Idle | QueryState::Loading => view! { <p>"Loading lead..."</p> }.into_any(),
                    QueryState::Failed(_) => view! { <p class="card__error">"Could not load this lead."</p> }.into_any(),
                    QueryState::Ready(current) => {
                        let group = group_name(current.group_id);
                        let editable = current.clone();
                        view! {
                            <section class="card">
                                <div class="card__header">
                                    <h2 class="card__title">{current.name.clone()}</h2>
                                    <span class="lead-list__type">{current.lead_type.as_str()}</span>
                                    <button class="btn" on:click=move |_| editing.set(true)>"Edit"</button>
                                </div>
                                <dl class="lead-details">
                                    <dt>"Email"</dt>
                                    <dd>{current.email.clone()}</dd>
                                    <dt>"Contact"</dt>
                                    <dd>{current.contact.clone()}</dd>
                                    <dt>"Description"</dt>
                                    <dd>{current.description.clone().unwrap_or_default()}</dd>
                                    <dt>"Group"</dt>
                                    <dd>{group}</dd>
                                    <dt>"Created"</dt>
                                    <dd>{current.created_at.date().to_string()}</dd>
                                </dl>
                            </section>
                            <Show when=move || editing.get()>
                                <EditLeadModal lead=editable.clone() groups on_close on_saved/>
                            </Show>
                        }
                            .into_any()
                    }
                }}
            </main>

            <Footer/>
        </div>
    }
}
