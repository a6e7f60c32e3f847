use serde::{Deserialize, Deserializer, Serialize};

/// A monetary value as it arrives from the listing data: either a JSON
/// number or free text such as `"1,250,000"` or `"Contact us"`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount::Number(value)
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Amount::Text(value.to_string())
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UnitStatus {
    #[default]
    Available,
    Sold,
}

impl UnitStatus {
    pub fn label(&self) -> &'static str {
        match self {
            UnitStatus::Available => "Available",
            UnitStatus::Sold => "Sold",
        }
    }
}

/// Layout family derived from the free-text unit type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitKind {
    Commercial,
    Studio,
    Residential,
}

pub fn classify_unit(unit_type: &str) -> UnitKind {
    let lowered = unit_type.to_lowercase();
    match lowered.as_str() {
        "shop" | "office" => UnitKind::Commercial,
        "studio" => UnitKind::Studio,
        _ => UnitKind::Residential,
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstallmentPlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allotment_confirmation: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_installments: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub half_yearly: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_possession: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<Amount>,
}

/// Treats an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Identity labels arrive as either text (`"A-101"`) or bare numbers (`101`).
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Label {
        Text(String),
        Signed(i64),
        Unsigned(u64),
        Float(f64),
    }

    Ok(match Label::deserialize(deserializer)? {
        Label::Text(text) => text,
        Label::Signed(n) => n.to_string(),
        Label::Unsigned(n) => n.to_string(),
        Label::Float(n) => n.to_string(),
    })
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UnitRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub number: String,
    pub floor_id: String,
    #[serde(rename = "type")]
    pub unit_type: String,
    #[serde(default)]
    pub status: UnitStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bedrooms: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installment_plan: Option<InstallmentPlan>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub renders: Vec<String>,
}

impl UnitRecord {
    pub fn new(id: String, number: String, floor_id: String, unit_type: String) -> Self {
        Self {
            id,
            number,
            floor_id,
            unit_type,
            status: UnitStatus::Available,
            bedrooms: 0,
            bathrooms: None,
            area: None,
            price: None,
            installment_plan: None,
            renders: Vec::new(),
        }
    }

    pub fn kind(&self) -> UnitKind {
        classify_unit(&self.unit_type)
    }

    /// DOM id of the dialog heading, used for `aria-labelledby`.
    pub fn title_id(&self) -> String {
        format!("unit-{}-title", self.id)
    }
}
