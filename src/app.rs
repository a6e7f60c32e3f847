use crate::components::ApartmentDetailModal;
use crate::config::ModalConfig;
use crate::error::LoadError;
use crate::state::UnitRecord;
use leptos::logging::{log, warn};
use leptos::prelude::*;
use serde::de::DeserializeOwned;

const UNIT_DATA_ID: &str = "unit-data";
const CONFIG_DATA_ID: &str = "modal-config";

/// Reads a `<script type="application/json">` block embedded in the page.
fn read_inline_json<T: DeserializeOwned>(element_id: &str) -> Result<T, LoadError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(LoadError::NoDocument)?;
    let element = document
        .get_element_by_id(element_id)
        .ok_or_else(|| LoadError::MissingElement(element_id.to_string()))?;
    let text = element
        .text_content()
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| LoadError::EmptyElement(element_id.to_string()))?;
    Ok(serde_json::from_str(&text)?)
}

fn load_unit() -> Result<UnitRecord, LoadError> {
    read_inline_json(UNIT_DATA_ID)
}

fn load_config() -> ModalConfig {
    match read_inline_json::<ModalConfig>(CONFIG_DATA_ID) {
        Ok(config) => config,
        // An absent config block just means defaults
        Err(LoadError::MissingElement(_)) => ModalConfig::default(),
        Err(err) => {
            warn!("modal config ignored: {}", err);
            ModalConfig::default()
        }
    }
}

/// Demo host: shows a unit summary card and opens the details dialog for it.
#[component]
pub fn App() -> impl IntoView {
    provide_context(load_config());

    let unit = match load_unit() {
        Ok(unit) => unit,
        Err(err) => {
            warn!("unit record unavailable: {}", err);
            return view! {
                <p style="font-family: 'Inter', 'Segoe UI', sans-serif; color: #991b1b; padding: 24px;">
                    "Unit details are unavailable."
                </p>
            }
            .into_any();
        }
    };

    let (is_open, set_is_open) = signal(false);
    let heading = format!("Unit {}", unit.number);
    let unit = StoredValue::new(unit);

    let on_close = Callback::new(move |_: ()| {
        log!("details dialog closed");
        set_is_open.set(false);
    });

    view! {
        <main style="min-height: 100vh; display: flex; align-items: center; justify-content: center; \
                     background: #f3f4f6; font-family: 'Inter', 'Segoe UI', sans-serif;">
            <div style="padding: 24px 28px; background: #ffffff; border-radius: 14px; \
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.08); text-align: center;">
                <h1 style="margin: 0 0 12px; font-size: 22px; color: #111827;">{heading}</h1>
                <button
                    style="padding: 10px 18px; border-radius: 8px; border: none; \
                           background: #111827; color: #ffffff; font-size: 14px; cursor: pointer;"
                    on:click=move |_| {
                        log!("details dialog opened");
                        set_is_open.set(true);
                    }
                >
                    "View details"
                </button>
            </div>
            {move || {
                is_open
                    .get()
                    .then(|| view! { <ApartmentDetailModal unit=unit.get_value() on_close=on_close /> })
            }}
        </main>
    }
    .into_any()
}
