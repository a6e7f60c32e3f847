mod apartment_detail_modal;
mod call_to_action;
mod image_gallery;
mod image_lightbox;
mod payment_breakdown;

pub use apartment_detail_modal::ApartmentDetailModal;
pub use call_to_action::CallToActionPanel;
pub use image_gallery::ImageGallery;
pub use image_lightbox::ImageLightbox;
pub use payment_breakdown::PaymentBreakdown;
