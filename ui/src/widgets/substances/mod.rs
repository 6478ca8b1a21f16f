//! Controlled substances viewer.
//!
//! - `panel`: mounts the loader and picks which of the three states to render
//! - `status`: error and loading panels
//! - `table`: header and body rendering
//! - `pagination`: footer with the page indicator and navigation buttons

mod pagination;
mod panel;
mod status;
pub mod table;

pub use pagination::{NEXT_LABEL, PREVIOUS_LABEL, PageAction, render_footer};
pub use panel::substances_viewer;
pub use status::{ERROR_HEADING, LOADING_HEADING, error_panel, loading_panel};
