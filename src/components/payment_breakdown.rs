use leptos::prelude::*;

use crate::layout::{PaymentSection, PAYMENT_FALLBACK};

#[component]
pub fn PaymentBreakdown(section: PaymentSection) -> impl IntoView {
    match section {
        PaymentSection::Breakdown { lines, total } => {
            let rows = lines
                .into_iter()
                .map(|line| {
                    view! {
                        <div style="display: flex; justify-content: space-between; padding: 6px 0; \
                                    font-size: 14px;">
                            <span style="color: #6b7280;">{line.label}</span>
                            <span style="font-weight: 500;">{line.value}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>();

            view! {
                <section style="margin-bottom: 24px; padding: 16px 20px; border: 1px solid #e5e7eb; \
                                border-radius: 12px;">
                    <h3 style="margin: 0 0 8px; font-size: 18px; font-weight: 600;">"Payment Plan"</h3>
                    {rows}
                    <div style="display: flex; justify-content: space-between; margin-top: 8px; \
                                padding-top: 10px; border-top: 1px solid #d1d5db; \
                                font-size: 16px; font-weight: 700;">
                        <span>"Total"</span>
                        <span>{total}</span>
                    </div>
                </section>
            }
            .into_any()
        }
        PaymentSection::ContactFallback => view! {
            <section style="margin-bottom: 24px; padding: 16px 20px; border-radius: 12px; \
                            background: #eff6ff; color: #1e3a8a; font-size: 14px;">
                {PAYMENT_FALLBACK}
            </section>
        }
        .into_any(),
    }
}
