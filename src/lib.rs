pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod format;
pub mod gallery;
pub mod layout;
pub mod state;

pub use app::App;
pub use components::ApartmentDetailModal;
