use leptos::ev;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{CallToActionPanel, ImageGallery, ImageLightbox, PaymentBreakdown};
use crate::config::ModalConfig;
use crate::gallery::{dispatch_key, is_backdrop_click, GalleryState, KeyOutcome};
use crate::layout::DetailLayout;
use crate::state::{UnitRecord, UnitStatus};

fn overlay_style(entered: bool) -> String {
    format!(
        "position: fixed; inset: 0; background: rgba(10, 14, 20, 0.75); \
         display: flex; align-items: center; justify-content: center; \
         z-index: 1000; padding: 16px; overflow-y: auto; \
         opacity: {}; transition: opacity 200ms ease-out;",
        if entered { 1 } else { 0 }
    )
}

fn panel_style(entered: bool) -> String {
    format!(
        "position: relative; width: 100%; max-width: 760px; max-height: 90vh; \
         overflow-y: auto; background: #ffffff; border-radius: 16px; \
         box-shadow: 0 24px 60px rgba(0, 0, 0, 0.35); padding: 28px; \
         font-family: 'Inter', 'Segoe UI', sans-serif; color: #1f2937; \
         transform: scale({}); transition: transform 200ms ease-out;",
        if entered { "1" } else { "0.95" }
    )
}

fn status_badge_style(status: UnitStatus) -> &'static str {
    match status {
        UnitStatus::Available => {
            "padding: 4px 10px; border-radius: 999px; font-size: 12px; font-weight: 600; \
             background: #dcfce7; color: #166534;"
        }
        UnitStatus::Sold => {
            "padding: 4px 10px; border-radius: 999px; font-size: 12px; font-weight: 600; \
             background: #fee2e2; color: #991b1b;"
        }
    }
}

fn detail_line(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div style="display: flex; flex-direction: column; gap: 2px; padding: 12px; \
                    background: #f9fafb; border-radius: 10px;">
            <span style="font-size: 12px; color: #6b7280;">{label}</span>
            <span style="font-size: 16px; font-weight: 600;">{value}</span>
        </div>
    }
}

/// Details dialog for a single unit with its layout, pricing, renders and a
/// contact call-to-action. `on_close` fires once per dismissal gesture on the outer
/// dialog; dismissing the lightbox never reaches it.
#[component]
pub fn ApartmentDetailModal(
    unit: UnitRecord,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let config = use_context::<ModalConfig>().unwrap_or_default();
    let layout = DetailLayout::for_unit(&unit);
    let title_id = unit.title_id();
    let label_id = title_id.clone();
    let unit_number = unit.number.clone();
    let renders = StoredValue::new(unit.renders);
    let gallery = RwSignal::new(GalleryState::new(renders.with_value(|r| r.len())));
    let (entered, set_entered) = signal(false);

    // Start the entrance transition once the initial frame is painted
    let enter_delay = config.enter_delay_ms;
    Effect::new(move || {
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(enter_delay).await;
            set_entered.try_set(true);
        });
    });

    // Reads live signals, so one subscription covers the whole mounted lifetime
    let unit_id = unit.id.clone();
    log!("unit {}: keyboard listener attached", unit_id);
    let key_listener = window_event_listener(ev::keydown, move |ev| {
        let mut next = gallery.get_untracked();
        match dispatch_key(&ev.key(), &mut next) {
            KeyOutcome::Dismiss => on_close.run(()),
            KeyOutcome::LightboxClosed | KeyOutcome::Navigated => gallery.set(next),
            KeyOutcome::Ignored => {}
        }
    });
    on_cleanup(move || {
        key_listener.remove();
        log!("unit {}: keyboard listener released", unit_id);
    });

    let on_backdrop_click = move |ev: ev::MouseEvent| {
        if is_backdrop_click(ev.target(), ev.current_target()) {
            on_close.run(());
        }
    };

    let DetailLayout {
        title,
        floor,
        unit_type,
        status,
        bedrooms,
        bathrooms,
        area,
        price,
        payment,
        gallery_heading,
        call_to_action,
        ..
    } = layout;

    let gallery_view = gallery_heading.map(|heading| {
        view! {
            <ImageGallery
                renders=renders
                gallery=gallery
                heading=heading
                unit_number=unit_number.clone()
            />
        }
    });

    view! {
        <div style=move || overlay_style(entered.get()) on:click=on_backdrop_click>
            <div
                role="dialog"
                aria-modal="true"
                aria-labelledby=label_id
                style=move || panel_style(entered.get())
            >
                <div style="display: flex; align-items: flex-start; justify-content: space-between; \
                            gap: 16px; margin-bottom: 20px;">
                    <div>
                        <div style="display: flex; align-items: center; gap: 12px;">
                            <h2 id=title_id style="margin: 0; font-size: 24px; font-weight: 700;">
                                {title}
                            </h2>
                            <span style=status_badge_style(status)>{status.label()}</span>
                        </div>
                        <p style="margin: 6px 0 0; color: #6b7280; font-size: 14px;">
                            {format!("{} Floor · {}", floor, unit_type)}
                        </p>
                    </div>
                    <button
                        aria-label="Close details"
                        style="background: transparent; border: none; font-size: 22px; \
                               line-height: 1; color: #6b7280; cursor: pointer; padding: 4px;"
                        on:click=move |_| on_close.run(())
                    >
                        "✕"
                    </button>
                </div>

                <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(140px, 1fr)); \
                            gap: 12px; margin-bottom: 24px;">
                    {bedrooms.map(|value| detail_line("Bedrooms", value))}
                    {bathrooms.map(|value| detail_line("Bathrooms", value))}
                    {detail_line("Area", area)}
                    {price.map(|value| detail_line("Price", value))}
                </div>

                {gallery_view}

                <PaymentBreakdown section=payment />

                <CallToActionPanel cta=call_to_action contact_url=config.contact_url />
            </div>
        </div>
        <ImageLightbox renders=renders gallery=gallery unit_number=unit_number />
    }
}
