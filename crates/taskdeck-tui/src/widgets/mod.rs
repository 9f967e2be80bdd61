//! Widget components for the TUI

mod config_warning;
mod error_banner;
mod footer;
mod header_panel;
mod item_list;
mod key_hints;

pub use config_warning::ConfigWarning;
pub use error_banner::ErrorBanner;
pub use footer::{items_left_label, Footer, CLEAR_COMPLETED};
pub use header_panel::{HeaderPanel, PLACEHOLDER};
pub use item_list::{ItemList, EDITOR_PLACEHOLDER, LOADING_TEXT};
pub use key_hints::KeyHints;
