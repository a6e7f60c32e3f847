use leptos::prelude::*;

use crate::gallery::GalleryState;
use crate::layout::GALLERY_DISCLAIMER;

const NAV_BUTTON_STYLE: &str = "position: absolute; top: 50%; transform: translateY(-50%); \
     width: 40px; height: 40px; border-radius: 999px; border: none; \
     background: rgba(17, 24, 39, 0.6); color: #ffffff; font-size: 22px; cursor: pointer;";

fn dot_style(active: bool) -> &'static str {
    if active {
        "width: 10px; height: 10px; border-radius: 999px; border: none; padding: 0; \
         background: #1f2937; cursor: pointer;"
    } else {
        "width: 10px; height: 10px; border-radius: 999px; border: none; padding: 0; \
         background: #d1d5db; cursor: pointer;"
    }
}

#[component]
pub fn ImageGallery(
    renders: StoredValue<Vec<String>>,
    gallery: RwSignal<GalleryState>,
    heading: &'static str,
    unit_number: String,
) -> impl IntoView {
    let has_navigation = gallery.with_untracked(|g| g.has_navigation());
    let count = gallery.with_untracked(|g| g.len());

    let current_src = move || {
        let index = gallery.with(|g| g.index());
        renders.with_value(|r| r.get(index).cloned().unwrap_or_default())
    };
    let open_lightbox = move || gallery.update(|g| g.open_lightbox());

    let navigation = has_navigation.then(|| {
        view! {
            <button
                aria-label="Previous image"
                style=format!("{} left: 12px;", NAV_BUTTON_STYLE)
                on:click=move |_| gallery.update(|g| g.prev())
            >
                "‹"
            </button>
            <button
                aria-label="Next image"
                style=format!("{} right: 12px;", NAV_BUTTON_STYLE)
                on:click=move |_| gallery.update(|g| g.next())
            >
                "›"
            </button>
        }
    });

    let dots = has_navigation.then(|| {
        let buttons = (0..count)
            .map(|i| {
                view! {
                    <button
                        aria-label=format!("Show image {}", i + 1)
                        style=move || dot_style(gallery.with(|g| g.index()) == i)
                        on:click=move |_| gallery.update(|g| g.select(i))
                    />
                }
            })
            .collect::<Vec<_>>();
        view! {
            <div style="display: flex; justify-content: center; gap: 8px; margin-top: 12px;">
                {buttons}
            </div>
        }
    });

    view! {
        <section style="margin-bottom: 24px;">
            <h3 style="margin: 0 0 12px; font-size: 18px; font-weight: 600;">{heading}</h3>
            <div style="margin-bottom: 12px; padding: 10px 14px; border-radius: 8px; \
                        background: #fef3c7; color: #92400e; font-size: 13px;">
                {GALLERY_DISCLAIMER}
            </div>
            <div style="position: relative; border-radius: 12px; overflow: hidden; background: #f3f4f6;">
                <img
                    src=current_src
                    alt=move || format!("Unit {} render {}", unit_number, gallery.with(|g| g.index()) + 1)
                    loading="lazy"
                    style="display: block; width: 100%; height: 360px; object-fit: cover; cursor: zoom-in;"
                    on:click=move |_| open_lightbox()
                />
                {navigation}
                <button
                    aria-label="View fullscreen"
                    style="position: absolute; bottom: 12px; right: 12px; padding: 6px 12px; \
                           border-radius: 8px; border: none; background: rgba(17, 24, 39, 0.6); \
                           color: #ffffff; font-size: 13px; cursor: pointer;"
                    on:click=move |_| open_lightbox()
                >
                    "⤢ Expand"
                </button>
            </div>
            {dots}
        </section>
    }
}
