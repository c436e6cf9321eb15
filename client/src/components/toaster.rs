//! Toast overlay and the `notify` helper used by pages and dialogs.

use leptos::prelude::*;
use records::Toast;

use crate::state::toasts::{TOAST_DISMISS_MS, ToastState};
use crate::util::palette::toast_class;

/// Queue `toast` and schedule its dismissal.
pub fn notify(toasts: RwSignal<ToastState>, toast: Toast) {
    let id = toasts.try_update(|t| t.push(toast));

    #[cfg(feature = "hydrate")]
    {
        if let Some(id) = id {
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_DISMISS_MS).await;
                toasts.update(|t| t.dismiss(id));
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (id, TOAST_DISMISS_MS);
}

/// Fixed-position stack of active toasts.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .items()
                    .iter()
                    .cloned()
                    .map(|entry| {
                        let id = entry.id;
                        view! {
                            <div class=toast_class(entry.toast.variant)>
                                <div class="toast__body">
                                    <p class="toast__title">{entry.toast.title}</p>
                                    <p class="toast__description">{entry.toast.description}</p>
                                </div>
                                <button
                                    class="btn toast__close"
                                    title="Dismiss"
                                    on:click=move |_| toasts.update(|t| t.dismiss(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
