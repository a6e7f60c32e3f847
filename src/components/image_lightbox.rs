use leptos::ev;
use leptos::prelude::*;

use crate::gallery::{is_backdrop_click, GalleryState};

const CONTROL_STYLE: &str = "position: absolute; background: rgba(255, 255, 255, 0.12); \
     color: #ffffff; border: none; border-radius: 999px; cursor: pointer;";

/// Fullscreen view of the current render. Stacks above the details dialog
/// and shares its carousel index.
#[component]
pub fn ImageLightbox(
    renders: StoredValue<Vec<String>>,
    gallery: RwSignal<GalleryState>,
    unit_number: String,
) -> impl IntoView {
    let close = move || gallery.update(|g| g.close_lightbox());

    move || {
        let state = gallery.get();
        state.is_lightbox_open().then(|| {
            let src = renders.with_value(|r| r.get(state.index()).cloned().unwrap_or_default());
            let alt = format!("Unit {} render {}", unit_number, state.index() + 1);

            let navigation = state.has_navigation().then(|| {
                view! {
                    <span style="position: absolute; top: 20px; left: 24px; color: #d1d5db; \
                                 font-size: 14px; letter-spacing: 0.5px;">
                        {state.position_label()}
                    </span>
                    <button
                        aria-label="Previous image"
                        style=format!("{} left: 24px; top: 50%; width: 48px; height: 48px; font-size: 26px;", CONTROL_STYLE)
                        on:click=move |_| gallery.update(|g| g.prev())
                    >
                        "‹"
                    </button>
                    <button
                        aria-label="Next image"
                        style=format!("{} right: 24px; top: 50%; width: 48px; height: 48px; font-size: 26px;", CONTROL_STYLE)
                        on:click=move |_| gallery.update(|g| g.next())
                    >
                        "›"
                    </button>
                }
            });

            view! {
                <div
                    style="position: fixed; inset: 0; background: rgba(0, 0, 0, 0.92); \
                           display: flex; align-items: center; justify-content: center; \
                           z-index: 1100;"
                    on:click=move |ev: ev::MouseEvent| {
                        if is_backdrop_click(ev.target(), ev.current_target()) {
                            close();
                        }
                    }
                >
                    <button
                        aria-label="Close image viewer"
                        style=format!("{} top: 16px; right: 20px; width: 40px; height: 40px; font-size: 20px;", CONTROL_STYLE)
                        on:click=move |_| close()
                    >
                        "✕"
                    </button>
                    {navigation}
                    <img
                        src=src
                        alt=alt
                        style="max-width: 90vw; max-height: 90vh; object-fit: contain; \
                               border-radius: 8px; box-shadow: 0 0 40px rgba(0, 0, 0, 0.5);"
                    />
                </div>
            }
        })
    }
}
