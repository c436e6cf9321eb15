//! Dashboard page: sample transcript library, transcript draft and leads.
//!
//! SYSTEM CONTEXT
//! ==============
//! Transcripts and leads are each fetched once per mount. Choosing "Use for
//! Analysis" in the transcript modal fills the draft on this page.

use leptos::prelude::*;
use records::{Lead, TranscriptBrowser};
use uuid::Uuid;

use crate::components::footer::Footer;
use crate::components::sample_transcript_modal::SampleTranscriptModal;
use crate::state::query::QueryState;
use crate::util::guide_content::{BRAND, TAGLINE};
use crate::util::palette::category_badge_class;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let browser = RwSignal::new(TranscriptBrowser::default());
    let library = RwSignal::new(QueryState::<usize>::Idle);
    let leads = RwSignal::new(QueryState::<Vec<Lead>>::Idle);
    let draft = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        library.set(QueryState::Loading);
        leads.set(QueryState::Loading);
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_sample_transcripts().await.map(|list| {
                let count = list.len();
                browser.update(|b| b.load(list));
                count
            });
            if let Err(err) = &result {
                leptos::logging::warn!("sample transcripts fetch failed: {err}");
            }
            library.set(QueryState::from_result(result));
        });
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_leads().await;
            if let Err(err) = &result {
                leptos::logging::warn!("leads fetch failed: {err}");
            }
            leads.set(QueryState::from_result(result));
        });
    }

    let on_use = Callback::new(move |text: String| draft.set(text));
    let open_transcript = move |id: Uuid| {
        browser.update(|b| {
            b.select(id);
        });
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header toolbar">
                <div class="brand">
                    <span class="brand__name">{BRAND}</span>
                    <span class="brand__tagline">{TAGLINE}</span>
                </div>
                <span class="toolbar__spacer"></span>
                <a class="btn" href="/guide">"Analysis Guide"</a>
            </header>

            <main class="dashboard-page__grid">
                <section class="card">
                    <h2 class="card__title">"Sample Transcripts"</h2>
                    {move || match library.get() {
                        QueryState::Idle | QueryState::Loading => {
                            view! { <p class="card__muted">"Loading transcripts..."</p> }.into_any()
                        }
                        QueryState::Failed(_) => {
                            view! { <p class="card__error">"Could not load sample transcripts."</p> }.into_any()
                        }
                        QueryState::Ready(0) => {
                            view! { <p class="card__muted">"No sample transcripts yet."</p> }.into_any()
                        }
                        QueryState::Ready(_) => {
                            view! {
                                <ul class="transcript-list">
                                    {browser
                                        .with(|b| b.transcripts().to_vec())
                                        .into_iter()
                                        .map(|t| {
                                            let id = t.id;
                                            view! {
                                                <li class="transcript-list__item">
                                                    <button class="transcript-list__open" on:click=move |_| open_transcript(id)>
                                                        <span class="transcript-list__title">{t.title}</span>
                                                        <span class=category_badge_class(t.category)>{t.category.as_str()}</span>
                                                    </button>
                                                    <p class="transcript-list__description">{t.description}</p>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                                .into_any()
                        }
                    }}
                </section>

                <section class="card">
                    <h2 class="card__title">"Transcript for Analysis"</h2>
                    <textarea
                        class="draft"
                        rows="10"
                        placeholder="Paste a transcript or pick a sample"
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    ></textarea>
                    <p class="card__muted">{move || format!("{} characters", draft.with(|d| d.chars().count()))}</p>
                </section>

                <section class="card">
                    <h2 class="card__title">"Leads"</h2>
                    {move || match leads.get() {
                        QueryState::Idle | QueryState::Loading => {
                            view! { <p class="card__muted">"Loading leads..."</p> }.into_any()
                        }
                        QueryState::Failed(_) => {
                            view! { <p class="card__error">"Could not load leads."</p> }.into_any()
                        }
                        QueryState::Ready(items) => {
                            view! {
                                <ul class="lead-list">
                                    {items
                                        .into_iter()
                                        .map(|lead| {
                                            view! {
                                                <li class="lead-list__item">
                                                    <a href=format!("/leads/{}", lead.id)>{lead.name}</a>
                                                    <span class="lead-list__type">{lead.lead_type.as_str()}</span>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                                .into_any()
                        }
                    }}
                </section>
            </main>

            <SampleTranscriptModal browser on_use/>
            <Footer/>
        </div>
    }
}
