//! Wire schema of the `/parse_pdf` response.

use serde::Deserialize;
use serde_json::Value;

/// Row data as returned by the parser, before normalization.
///
/// Only `pdf_cntnt` is read; any other field the backend sends is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFetchResult {
    /// Missing or `null` means "no rows". That alone is not an error; the loader only
    /// fails later if no header row can be located.
    pub pdf_cntnt: Vec<Vec<String>>,
}

impl RawFetchResult {
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        Self::from_value(serde_json::from_slice(body)?)
    }

    /// Reads `pdf_cntnt` from a decoded body.
    ///
    /// Bodies that are not JSON objects carry no rows. `null` rows collapse to an empty
    /// list and `null` cells to empty strings, both of which end up rendered as "N/A".
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let Value::Object(mut fields) = value else {
            return Ok(Self::default());
        };

        let rows = match fields.remove("pdf_cntnt") {
            None | Some(Value::Null) => Vec::new(),
            Some(rows) => Vec::<Option<Vec<Option<String>>>>::deserialize(rows)?,
        };

        Ok(Self {
            pdf_cntnt: rows
                .into_iter()
                .map(|row| {
                    row.unwrap_or_default()
                        .into_iter()
                        .map(Option::unwrap_or_default)
                        .collect()
                })
                .collect(),
        })
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.pdf_cntnt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_rows_of_strings() {
        let raw = RawFetchResult::from_slice(
            br#"{"pdf_cntnt": [["SUBSTANCE", "SCHEDULE"], ["Morphine", "II"]]}"#,
        )
        .expect("valid payload");

        assert_eq!(
            raw.into_rows(),
            vec![
                vec!["SUBSTANCE".to_owned(), "SCHEDULE".to_owned()],
                vec!["Morphine".to_owned(), "II".to_owned()],
            ]
        );
    }

    #[test]
    fn missing_or_null_field_is_empty() {
        let missing = RawFetchResult::from_slice(br#"{"status": "ok"}"#).expect("object");
        let null = RawFetchResult::from_slice(br#"{"pdf_cntnt": null}"#).expect("object");

        assert!(missing.pdf_cntnt.is_empty());
        assert!(null.pdf_cntnt.is_empty());
    }

    #[test]
    fn null_cells_become_empty_strings() {
        let raw = RawFetchResult::from_slice(br#"{"pdf_cntnt": [["Codeine", null]]}"#)
            .expect("valid payload");

        assert_eq!(raw.pdf_cntnt, vec![vec!["Codeine".to_owned(), String::new()]]);
    }

    #[test]
    fn shape_mismatch_is_a_decode_error() {
        assert!(RawFetchResult::from_slice(br#"{"pdf_cntnt": "SUBSTANCE"}"#).is_err());
        assert!(RawFetchResult::from_slice(br#"{"pdf_cntnt": [[1, 2]]}"#).is_err());
        assert!(RawFetchResult::from_slice(b"<html>502</html>").is_err());
    }

    #[test]
    fn non_object_bodies_carry_no_rows() {
        let string = RawFetchResult::from_slice(br#""hello""#).expect("valid JSON");
        let number = RawFetchResult::from_slice(b"42").expect("valid JSON");
        let wrapped =
            RawFetchResult::from_slice(br#"[[["SUBSTANCE", "SCHEDULE"], ["Morphine", "II"]]]"#)
                .expect("valid JSON");

        assert!(string.pdf_cntnt.is_empty());
        assert!(number.pdf_cntnt.is_empty());
        assert!(wrapped.pdf_cntnt.is_empty());
    }
}
