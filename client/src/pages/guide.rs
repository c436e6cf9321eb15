//! Analysis guide page.
//!
//! Purely static: the only state is the selected tab and the open metric.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::state::guide::{GuideState, GuideTab};
use crate::util::guide_content::*;
use crate::util::palette::{category_badge_class, tone_class};

#[component]
pub fn GuidePage() -> impl IntoView {
    let guide = RwSignal::new(GuideState::default());

    view! {
        <div class="guide-page">
            <header class="guide-page__header toolbar">
                <div class="brand">
                    <span class="brand__name">{BRAND}</span>
                    <span class="brand__tagline">{TAGLINE}</span>
                </div>
                <span class="toolbar__spacer"></span>
                <a class="btn" href="/">"← Back to Dashboard"</a>
            </header>

            <main class="guide-page__body">
                <section class="guide-hero">
                    <span class="badge badge--primary">{HERO_BADGE}</span>
                    <h1>{HERO_TITLE}</h1>
                    <p>{HERO_SUBTITLE}</p>
                </section>

                <nav class="tabs" role="tablist">
                    {GuideTab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    role="tab"
                                    class=move || {
                                        if guide.with(|g| g.tab == tab) {
                                            "tabs__trigger tabs__trigger--active"
                                        } else {
                                            "tabs__trigger"
                                        }
                                    }
                                    on:click=move |_| guide.update(|g| g.select_tab(tab))
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>

                {move || match guide.with(|g| g.tab) {
                    GuideTab::Overview => overview().into_any(),
                    GuideTab::Upload => upload().into_any(),
                    GuideTab::Metrics => metrics(guide).into_any(),
                    GuideTab::Embeddings => embeddings().into_any(),
                    GuideTab::Workflow => workflow().into_any(),
                }}

                <section class="guide-cta">
                    <h3>{CTA_TITLE}</h3>
                    <p>{CTA_BODY}</p>
                    <a class="btn btn--secondary" href="/">"Go to Dashboard"</a>
                </section>
            </main>

            <Footer/>
        </div>
    }
}

fn overview() -> impl IntoView {
    view! {
        <section class="card">
            <h2 class="card__title">{OVERVIEW_TITLE}</h2>
            <p class="card__muted">{OVERVIEW_INTRO}</p>
            <div class="guide-grid">
                {OVERVIEW_HIGHLIGHTS
                    .iter()
                    .map(|h| {
                        view! {
                            <div class="guide-grid__item">
                                <h4>{h.title}</h4>
                                <p>{h.body}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
        <section class="card">
            <h2 class="card__title">"Key Analysis Objectives"</h2>
            <h4>"The AI Analysis Helps Answer:"</h4>
            <ul class="check-list">
                {ANALYSIS_QUESTIONS.iter().map(|q| view! { <li>{*q}</li> }).collect::<Vec<_>>()}
            </ul>
        </section>
    }
}

fn upload() -> impl IntoView {
    view! {
        <section class="card">
            <h2 class="card__title">"How to Upload Call Recordings"</h2>
            <p class="card__muted">"Step-by-step guide to adding recordings for analysis"</p>
            {steps(UPLOAD_STEPS)}
            <div class="callout">
                <h4>"Pro Tip"</h4>
                <p>{UPLOAD_TIP}</p>
            </div>
        </section>
    }
}

fn metrics(guide: RwSignal<GuideState>) -> impl IntoView {
    view! {
        <section class="card">
            <h2 class="card__title">"Understanding Analysis Metrics"</h2>
            <p class="card__muted">"Detailed explanation of each metric and how it's calculated"</p>
            <div class="accordion">
                {METRICS
                    .iter()
                    .map(|metric| {
                        let key = metric.key;
                        let is_open = move || guide.with(|g| g.is_metric_open(key));
                        view! {
                            <div class="accordion__item">
                                <button
                                    class="accordion__trigger"
                                    aria-expanded=move || is_open().to_string()
                                    on:click=move |_| guide.update(|g| g.toggle_metric(key))
                                >
                                    {metric.title}
                                </button>
                                <Show when=is_open>
                                    {metric_body(metric)}
                                </Show>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

fn metric_body(metric: &'static Metric) -> impl IntoView {
    view! {
        <div class="accordion__content">
            <p class="card__muted">{metric.intro}</p>
            {metric
                .bands
                .iter()
                .map(|band| {
                    view! {
                        <div class=tone_class(band.tone)>
                            <span>{band.range}</span>
                            <span class="band__rating">{band.rating}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
            {metric
                .groups
                .iter()
                .map(|group| {
                    let class = group.accent.map_or("bullet-group", category_badge_class);
                    view! {
                        <div class=class>
                            <h5>{group.heading}</h5>
                            <ul>{group.items.iter().map(|item| view! { <li>{*item}</li> }).collect::<Vec<_>>()}</ul>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
            {metric.note.map(|note| view! { <p class="accordion__note">{note}</p> })}
        </div>
    }
}

fn embeddings() -> impl IntoView {
    view! {
        <section class="card">
            <h2 class="card__title">"How AI Embeddings Power Analysis"</h2>
            <p class="card__muted">"Understanding the semantic search and context retrieval system"</p>
            <h4>"What Are Embeddings?"</h4>
            <p>{EMBEDDINGS_INTRO}</p>
            <p class="callout">{EMBEDDINGS_EXAMPLE}</p>
            <h4>"How GrowthLens Uses Embeddings:"</h4>
            {KNOWLEDGE_SOURCES
                .iter()
                .map(|source| {
                    view! {
                        <div class="guide-source">
                            <h5>{source.title}</h5>
                            <p>{source.body}</p>
                            <ul>{source.uses.iter().map(|u| view! { <li>{*u}</li> }).collect::<Vec<_>>()}</ul>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
            <h4>"Technical Details"</h4>
            <dl class="guide-details">
                {TECH_DETAILS
                    .iter()
                    .map(|(label, value)| view! { <dt>{*label}</dt><dd>{*value}</dd> })
                    .collect::<Vec<_>>()}
            </dl>
        </section>
    }
}

fn workflow() -> impl IntoView {
    view! {
        <section class="card">
            <h2 class="card__title">"Complete AI Analysis Pipeline"</h2>
            <p class="card__muted">"End-to-end workflow from upload to insights"</p>
            {steps(PIPELINE_STEPS)}
            <h4>"Processing Time"</h4>
            <div class="guide-grid">
                {PROCESSING_TIMES
                    .iter()
                    .map(|(value, label)| {
                        view! {
                            <div class="guide-grid__item guide-grid__item--stat">
                                <strong>{*value}</strong>
                                <span>{*label}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
        <section class="card">
            <h2 class="card__title">"Backend Architecture"</h2>
            <p class="card__muted">"Powered by n8n workflow automation"</p>
            <p>{BACKEND_INTRO}</p>
            <ul class="check-list">
                {BACKEND_POINTS.iter().map(|p| view! { <li>{*p}</li> }).collect::<Vec<_>>()}
            </ul>
        </section>
    }
}

fn steps(steps: &'static [Step]) -> impl IntoView {
    view! {
        <ol class="steps">
            {steps
                .iter()
                .map(|step| {
                    view! {
                        <li class="steps__item">
                            <span class="steps__number">{step.number}</span>
                            <div>
                                <h4>{step.title}</h4>
                                <p>{step.description}</p>
                                {step.tech.map(|tech| view! { <p class="steps__tech">{tech}</p> })}
                            </div>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ol>
    }
}
