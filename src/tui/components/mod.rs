//! Shared TUI components
//!
//! Reusable pieces of the catalog screen: cards, the filter sidebar, modals
//! and the header/footer chrome.

pub mod clickable;
pub mod empty_state;
pub mod event_card;
pub mod event_detail;
pub mod filter_panel;
pub mod footer;
pub mod header;
pub mod modal_container;
pub mod modal_overlay;
pub mod search_box;
pub mod shortcuts;
pub mod toast;

pub use clickable::{Clickable, ClickableProps};
pub use empty_state::{EmptyState, EmptyStateKind, EmptyStateProps};
pub use event_card::{EventCardView, EventCardViewProps};
pub use event_detail::{EventDetailModal, EventDetailModalProps};
pub use filter_panel::{FilterPanel, FilterPanelProps};
pub use footer::{
    Footer, FooterProps, Shortcut, catalog_shortcuts, detail_shortcuts, error_shortcuts,
    search_shortcuts,
};
pub use header::{Header, HeaderProps};
pub use modal_container::{ModalContainer, ModalContainerProps};
pub use modal_overlay::{ModalOverlay, ModalOverlayProps};
pub use search_box::{SearchBox, SearchBoxProps};
pub use shortcuts::ShortcutsBuilder;
pub use toast::{Toast, ToastLevel, render_toast};
