use leptos::prelude::*;

use crate::layout::CallToAction;

/// Closing panel of the dialog. Copy follows the unit status; the link
/// target does not.
#[component]
pub fn CallToActionPanel(cta: CallToAction, contact_url: String) -> impl IntoView {
    view! {
        <section style="padding: 20px; border-radius: 12px; background: #111827; color: #f9fafb;">
            <h3 style="margin: 0 0 6px; font-size: 18px; font-weight: 600;">{cta.heading}</h3>
            <p style="margin: 0 0 14px; font-size: 14px; color: #d1d5db;">{cta.body}</p>
            <a
                href=contact_url
                target="_blank"
                rel="noopener noreferrer"
                style="display: inline-block; padding: 10px 18px; border-radius: 8px; \
                       background: #f59e0b; color: #111827; font-weight: 600; \
                       text-decoration: none; font-size: 14px;"
            >
                {cta.action_label}
            </a>
        </section>
    }
}
