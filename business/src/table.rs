//! Normalization of raw parser rows into a header/body table.

use crate::RawFetchResult;

/// Cell value that identifies the header row.
pub const HEADER_MARKER: &str = "SUBSTANCE";

/// Title shown above the table.
pub const PAGE_INFO: &str = "Controlled Substances List";

/// Validated view model of the parsed PDF.
///
/// Every row in `content` has exactly `headers.len()` cells. Built once per successful
/// fetch and never mutated afterwards; pagination only re-slices it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTable {
    headers: Vec<String>,
    content: Vec<Vec<String>>,
    page_info: &'static str,
}

impl NormalizedTable {
    /// Locates the first row containing [`HEADER_MARKER`] and keeps the remaining rows
    /// whose width matches it.
    ///
    /// Returns `None` when no row carries the marker; the caller treats that as a
    /// terminal failure of the fetch, not a partial result.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Option<Self> {
        let header_index = rows
            .iter()
            .position(|row| row.iter().any(|cell| cell == HEADER_MARKER))?;

        let mut rows = rows;
        let headers = rows.remove(header_index);
        let content = rows
            .into_iter()
            .filter(|row| {
                row.len() == headers.len()
                    && row.first().map(String::as_str) != Some(HEADER_MARKER)
            })
            .collect();

        Some(Self {
            headers,
            content,
            page_info: PAGE_INFO,
        })
    }

    pub fn from_raw(raw: RawFetchResult) -> Option<Self> {
        Self::from_rows(raw.into_rows())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn content(&self) -> &[Vec<String>] {
        &self.content
    }

    pub fn page_info(&self) -> &'static str {
        self.page_info
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.content.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|row| row.iter().map(|cell| (*cell).to_owned()).collect())
            .collect()
    }

    #[test]
    fn header_row_is_taken_verbatim() {
        let table = NormalizedTable::from_rows(rows(&[
            &["Title page"],
            &["DEA #", "SUBSTANCE", "SCHEDULE"],
            &["9300", "Morphine", "II"],
        ]))
        .expect("marker present");

        assert_eq!(table.headers(), ["DEA #", "SUBSTANCE", "SCHEDULE"]);
        assert_eq!(table.content(), rows(&[&["9300", "Morphine", "II"]]));
        assert_eq!(table.page_info(), PAGE_INFO);
    }

    #[test]
    fn rows_with_wrong_width_are_dropped() {
        let table = NormalizedTable::from_rows(rows(&[
            &["SUBSTANCE", "SCHEDULE"],
            &["Morphine", "II"],
            &["Footnote"],
            &["Codeine", "II", "extra"],
            &["", "III"],
        ]))
        .expect("marker present");

        assert_eq!(table.row_count(), 2);
        assert!(
            table
                .content()
                .iter()
                .all(|row| row.len() == table.column_count())
        );
    }

    #[test]
    fn repeated_header_rows_are_excluded() {
        // Multi-page PDFs repeat the header on every page.
        let table = NormalizedTable::from_rows(rows(&[
            &["SUBSTANCE", "SCHEDULE"],
            &["Morphine", "II"],
            &["SUBSTANCE", "SCHEDULE"],
            &["Heroin", "I"],
        ]))
        .expect("marker present");

        assert_eq!(table.content(), rows(&[&["Morphine", "II"], &["Heroin", "I"]]));
    }

    #[test]
    fn first_marker_row_wins() {
        let table = NormalizedTable::from_rows(rows(&[
            &["SUBSTANCE", "CSA"],
            &["NAME", "SUBSTANCE", "SCHEDULE"],
        ]))
        .expect("marker present");

        assert_eq!(table.headers(), ["SUBSTANCE", "CSA"]);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn missing_marker_yields_no_table() {
        assert!(NormalizedTable::from_rows(Vec::new()).is_none());
        assert!(
            NormalizedTable::from_rows(rows(&[&["Substance", "Schedule"], &["Morphine", "II"]]))
                .is_none()
        );
    }

    #[test]
    fn marker_must_match_a_whole_cell() {
        assert!(NormalizedTable::from_rows(rows(&[&["SUBSTANCES", "SCHEDULE"]])).is_none());
    }
}
