//! Interactive catalog for `nexevent browse`

pub mod catalog;
pub mod components;
pub mod theme;

pub use catalog::{EventCatalog, EventCatalogProps};
pub use theme::Theme;
