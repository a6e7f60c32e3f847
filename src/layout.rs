use crate::format::{format_area, format_currency, title_case, NOT_AVAILABLE};
use crate::state::{Amount, InstallmentPlan, UnitKind, UnitRecord, UnitStatus};

pub const GALLERY_HEADING_MANY: &str = "Renders & Image Gallery";
pub const GALLERY_HEADING_ONE: &str = "Render & Image";
pub const GALLERY_DISCLAIMER: &str =
    "Images are for illustration purposes only and may not represent the actual unit.";
pub const PAYMENT_FALLBACK: &str =
    "Contact our sales team for detailed payment plans and installment options.";

#[derive(Clone, Debug, PartialEq)]
pub struct PaymentLine {
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PaymentSection {
    Breakdown {
        lines: Vec<PaymentLine>,
        total: String,
    },
    ContactFallback,
}

impl PaymentSection {
    pub fn for_plan(plan: Option<&InstallmentPlan>) -> Self {
        let Some(plan) = plan else {
            return PaymentSection::ContactFallback;
        };

        let line = |label: &'static str, value: Option<&Amount>| PaymentLine {
            label,
            value: format_currency(value),
        };

        PaymentSection::Breakdown {
            lines: vec![
                line("Booking", plan.booking.as_ref()),
                line("Allotment Confirmation", plan.allotment_confirmation.as_ref()),
                line("Monthly Installments", plan.monthly_installments.as_ref()),
                line("Half-Yearly Installments", plan.half_yearly.as_ref()),
                line("On Possession", plan.on_possession.as_ref()),
            ],
            total: format_currency(plan.total.as_ref()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallToAction {
    pub heading: &'static str,
    pub body: &'static str,
    pub action_label: &'static str,
}

impl CallToAction {
    pub fn for_status(status: UnitStatus) -> Self {
        match status {
            UnitStatus::Available => CallToAction {
                heading: "Interested in this unit?",
                body: "Schedule a viewing with our sales team to see it in person.",
                action_label: "Contact Sales",
            },
            UnitStatus::Sold => CallToAction {
                heading: "This unit has been sold",
                body: "Similar units may still be available. Reach out to explore other options.",
                action_label: "Contact Sales",
            },
        }
    }
}

/// Everything the modal shows that can be worked out from the record alone.
/// Built once per render so the view only switches on ready-made values.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailLayout {
    pub kind: UnitKind,
    pub title: String,
    pub floor: String,
    pub unit_type: String,
    pub status: UnitStatus,
    pub bedrooms: Option<String>,
    pub bathrooms: Option<String>,
    pub area: String,
    pub price: Option<String>,
    pub payment: PaymentSection,
    pub gallery_heading: Option<&'static str>,
    pub call_to_action: CallToAction,
}

impl DetailLayout {
    pub fn for_unit(unit: &UnitRecord) -> Self {
        let kind = unit.kind();

        let bedrooms = (kind == UnitKind::Residential).then(|| unit.bedrooms.to_string());
        let bathrooms = (kind != UnitKind::Commercial).then(|| {
            unit.bathrooms
                .map(|n| n.to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string())
        });
        let price = (kind != UnitKind::Commercial).then(|| format_currency(unit.price.as_ref()));

        let gallery_heading = match unit.renders.len() {
            0 => None,
            1 => Some(GALLERY_HEADING_ONE),
            _ => Some(GALLERY_HEADING_MANY),
        };

        Self {
            kind,
            title: format!("Unit {}", unit.number),
            floor: title_case(&unit.floor_id),
            unit_type: unit.unit_type.clone(),
            status: unit.status,
            bedrooms,
            bathrooms,
            area: format_area(unit.area),
            price,
            payment: PaymentSection::for_plan(unit.installment_plan.as_ref()),
            gallery_heading,
            call_to_action: CallToAction::for_status(unit.status),
        }
    }

    pub fn has_gallery(&self) -> bool {
        self.gallery_heading.is_some()
    }
}
