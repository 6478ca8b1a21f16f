//! Loading and shaping of the controlled substances table.
//!
//! Everything here is free of rendering: the UI crate reads [`ViewerState`] and forwards
//! navigation clicks to it, while [`ContentLoader`] feeds it the single fetch outcome.

mod config;
mod error;
pub mod http;
mod loader;
pub mod pagination;
mod schema;
mod table;
mod viewer;

pub use config::{BusinessConfig, DEFAULT_NATIVE_BASE_URL, PARSE_PDF_PATH};
pub use error::{
    ConfigError, LoadError, NETWORK_ERROR_MESSAGE, UNKNOWN_ERROR_MESSAGE, UNPROCESSABLE_MESSAGE,
};
pub use loader::{ContentLoader, LoadOutcome, fetch_pdf_content};
pub use pagination::{EMPTY_CELL, ITEMS_PER_PAGE, Pagination, display_cell};
pub use schema::RawFetchResult;
pub use table::{HEADER_MARKER, NormalizedTable, PAGE_INFO};
pub use viewer::{PageView, ViewerPhase, ViewerState};
