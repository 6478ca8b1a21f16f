//! View model of the substances viewer.
//!
//! One explicit state struct replaces three independent cells (content, page, error):
//! the phase enum makes "error", "loading" and "loaded" mutually exclusive, and the
//! page number is only meaningful (and only mutable) once a table is loaded.

use std::ops::Range;

use log::{debug, info, warn};

use crate::pagination::page_indicator;
use crate::{LoadError, NormalizedTable, Pagination};

/// Lifecycle of one mount: `Idle -> Loading -> {Loaded | Error}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewerPhase {
    /// Not mounted yet; no request has been issued.
    #[default]
    Idle,
    /// The single request is in flight.
    Loading,
    Loaded(NormalizedTable),
    /// Terminal. Recovery requires a remount.
    Error(String),
}

/// Inputs the derived page depends on. The cached result is reused until one changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DerivedKey {
    row_count: usize,
    current_page: usize,
    items_per_page: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Derived {
    key: DerivedKey,
    total_pages: usize,
    range: Range<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct ViewerState {
    phase: ViewerPhase,
    pagination: Pagination,
    derived: Option<Derived>,
}

/// Everything the renderer needs for the loaded state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a> {
    pub title: &'a str,
    pub headers: &'a [String],
    pub rows: &'a [Vec<String>],
    pub current_page: usize,
    pub total_pages: usize,
    pub can_previous: bool,
    pub can_next: bool,
}

impl PageView<'_> {
    /// "Page X of Y"
    pub fn indicator(&self) -> String {
        page_indicator(self.current_page, self.total_pages)
    }
}

impl ViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &ViewerPhase {
        &self.phase
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, ViewerPhase::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, ViewerPhase::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            ViewerPhase::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn table(&self) -> Option<&NormalizedTable> {
        match &self.phase {
            ViewerPhase::Loaded(table) => Some(table),
            _ => None,
        }
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    /// `Idle -> Loading`. Returns `false` (and changes nothing) from any other phase, so
    /// a mount can never issue a second request.
    pub fn begin_loading(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.phase = ViewerPhase::Loading;
        true
    }

    /// `Loading -> Loaded | Error`. Outcomes arriving in any other phase are ignored.
    pub fn finish(&mut self, outcome: Result<NormalizedTable, LoadError>) {
        if !self.is_loading() {
            debug!("Ignoring load outcome outside of the loading phase");
            return;
        }

        self.derived = None;
        self.phase = match outcome {
            Ok(table) => {
                info!(
                    "Loaded {} rows with {} columns",
                    table.row_count(),
                    table.column_count()
                );
                self.pagination
                    .clamp(self.pagination.total_pages(table.row_count()));
                ViewerPhase::Loaded(table)
            }
            Err(err) => {
                warn!("Loading substances failed: {err:?}");
                ViewerPhase::Error(err.user_message())
            }
        };
    }

    pub fn next_page(&mut self) {
        let Some(total) = self.loaded_total_pages() else {
            return;
        };
        self.pagination.clamp(total);
        self.pagination.next(total);
        debug!("Moved to page {} of {total}", self.pagination.current_page());
    }

    pub fn previous_page(&mut self) {
        let Some(total) = self.loaded_total_pages() else {
            return;
        };
        self.pagination.clamp(total);
        self.pagination.previous();
        debug!("Moved to page {} of {total}", self.pagination.current_page());
    }

    /// Derives the visible page, clamping the current page into range first.
    ///
    /// `None` unless a table is loaded.
    pub fn page_view(&mut self) -> Option<PageView<'_>> {
        let ViewerPhase::Loaded(table) = &self.phase else {
            return None;
        };

        let key = DerivedKey {
            row_count: table.row_count(),
            current_page: self.pagination.current_page(),
            items_per_page: self.pagination.items_per_page(),
        };

        let derived = match &self.derived {
            Some(derived) if derived.key == key => derived.clone(),
            _ => {
                let total_pages = self.pagination.total_pages(key.row_count);
                self.pagination.clamp(total_pages);
                let derived = Derived {
                    key: DerivedKey {
                        current_page: self.pagination.current_page(),
                        ..key
                    },
                    total_pages,
                    range: self.pagination.range(key.row_count),
                };
                self.derived = Some(derived.clone());
                derived
            }
        };

        Some(PageView {
            title: table.page_info(),
            headers: table.headers(),
            rows: &table.content()[derived.range],
            current_page: self.pagination.current_page(),
            total_pages: derived.total_pages,
            can_previous: self.pagination.can_previous(),
            can_next: self.pagination.can_next(derived.total_pages),
        })
    }

    fn loaded_total_pages(&self) -> Option<usize> {
        self.table()
            .map(|table| self.pagination.total_pages(table.row_count()))
    }
}
