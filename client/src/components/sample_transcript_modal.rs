//! Modal displaying one sample transcript with copy and "use" actions.
//!
//! The owning page holds the [`TranscriptBrowser`]; this component renders
//! its selection and drives copy/use through it. Nothing renders while the
//! browser is closed or has no selection.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use records::COPY_CONFIRM_MS;
use records::TranscriptBrowser;

use crate::components::toaster::notify;
use crate::state::toasts::ToastState;
use crate::util::palette::category_badge_class;
#[cfg(feature = "hydrate")]
use crate::util::web::{now_ms, write_clipboard};

#[component]
pub fn SampleTranscriptModal(
    browser: RwSignal<TranscriptBrowser>,
    /// Receives the transcript text. When absent the "Use for Analysis"
    /// action is not rendered.
    #[prop(optional)]
    on_use: Option<Callback<String>>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_close = move || browser.update(TranscriptBrowser::close);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close();
        }
    };

    let on_copy = move |_| {
        let text = match browser.with_untracked(TranscriptBrowser::copy_text) {
            Ok(text) => text,
            Err(err) => {
                leptos::logging::warn!("transcript copy failed: {err}");
                return;
            }
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let written = write_clipboard(text).await;
                match browser.try_update(|b| b.confirm_copy(written, now_ms())) {
                    Some(Ok(toast)) => {
                        notify(toasts, toast);
                        #[allow(clippy::cast_possible_truncation)]
                        gloo_timers::future::TimeoutFuture::new(COPY_CONFIRM_MS as u32).await;
                        browser.update(|b| b.settle_copy(now_ms()));
                    }
                    Some(Err(err)) => leptos::logging::warn!("transcript copy failed: {err}"),
                    None => {}
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = text;
        }
    };

    let on_use_click = move |_| {
        let Some(consumer) = on_use else { return };
        let handed = browser.try_update(|b| {
            let mut text = None;
            let toast = b.use_selected(Some(|t| text = Some(t)));
            toast.zip(text)
        });
        if let Some(Some((toast, text))) = handed {
            consumer.run(text);
            notify(toasts, toast);
        }
    };

    let copied = move || browser.with(|b| b.copy_indicator().is_showing());

    move || {
        let selected = browser.with(|b| if b.is_open() { b.selected().cloned() } else { None });
        selected.map(|transcript| {
            let character_label = transcript.character_count_label();
            view! {
                <div class="dialog-backdrop" on:click=move |_| on_close()>
                    <div
                        class="dialog dialog--transcript"
                        on:click=move |ev| ev.stop_propagation()
                        on:keydown=on_keydown
                        tabindex="0"
                    >
                        <div class="dialog__header">
                            <div class="dialog__heading">
                                <h2>{transcript.title.clone()}</h2>
                                <p class="dialog__description">{transcript.description.clone()}</p>
                            </div>
                            <span class=category_badge_class(transcript.category)>
                                {transcript.category.as_str()}
                            </span>
                            <button
                                class="btn dialog__copy"
                                on:click=on_copy
                                title=move || if copied() { "Copied!" } else { "Copy transcript" }
                            >
                                {move || if copied() { "✓" } else { "Copy" }}
                            </button>
                        </div>

                        <div class="dialog__tags">
                            {transcript
                                .tags
                                .iter()
                                .map(|tag| view! { <span class="badge badge--secondary">{tag.clone()}</span> })
                                .collect::<Vec<_>>()}
                        </div>

                        <pre class="dialog__transcript">{transcript.transcript.clone()}</pre>

                        <div class="dialog__actions dialog__actions--split">
                            <span class="dialog__meta">{character_label}</span>
                            <Show when=move || on_use.is_some()>
                                <button class="btn btn--primary" on:click=on_use_click>
                                    "Use for Analysis"
                                </button>
                            </Show>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
