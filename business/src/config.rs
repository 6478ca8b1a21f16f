use log::info;
use serde::Deserialize;
use ustr::Ustr;

use crate::ConfigError;

/// Path of the backend resource that parses the PDF and returns its rows.
pub const PARSE_PDF_PATH: &str = "/parse_pdf";

/// Backend used by native builds when `API_BASE_URL` is not set.
pub const DEFAULT_NATIVE_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    /// Scheme and authority of the backend, without a trailing slash.
    ///
    /// Empty means "same origin", which is what the wasm build uses: the page and the
    /// parser are served together, so the request goes to the relative `/parse_pdf`.
    pub api_base_url: String,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    api_base_url: Option<String>,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    pub fn parse_pdf_url(&self) -> Ustr {
        if self.api_base_url.is_empty() {
            Ustr::from(PARSE_PDF_PATH)
        } else {
            Ustr::from(format!("{}{PARSE_PDF_PATH}", self.api_base_url).as_str())
        }
    }

    /// Reads `API_BASE_URL` from the process environment, falling back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I, S>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw: RawConfig = serde_env::from_iter(vars)?;

        match raw.api_base_url {
            Some(url) if !url.trim().is_empty() => {
                info!("Using provided API_BASE_URL: {url}");
                Ok(Self::new(url.trim()))
            }
            _ => Ok(Self::default()),
        }
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: if cfg!(target_arch = "wasm32") {
                String::new()
            } else {
                DEFAULT_NATIVE_BASE_URL.to_owned()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pdf_url_joins_base_and_path() {
        let config = BusinessConfig::new("http://localhost:9000/");

        assert_eq!(config.api_base_url, "http://localhost:9000");
        assert_eq!(
            config.parse_pdf_url(),
            Ustr::from("http://localhost:9000/parse_pdf")
        );
    }

    #[test]
    fn empty_base_is_same_origin() {
        let config = BusinessConfig::new("");
        assert_eq!(config.parse_pdf_url(), Ustr::from("/parse_pdf"));
    }

    #[test]
    fn default_matches_target() {
        let config = BusinessConfig::default();

        if cfg!(target_arch = "wasm32") {
            assert_eq!(config.parse_pdf_url(), Ustr::from("/parse_pdf"));
        } else {
            assert_eq!(config.api_base_url, DEFAULT_NATIVE_BASE_URL);
        }
    }

    #[test]
    fn env_override_is_applied() {
        let config = BusinessConfig::from_vars(vec![
            ("API_BASE_URL", "https://parser.example.com"),
            ("HOME", "/root"),
        ])
        .expect("config should deserialize");

        assert_eq!(
            config.parse_pdf_url(),
            Ustr::from("https://parser.example.com/parse_pdf")
        );
    }

    #[test]
    fn blank_env_value_keeps_default() {
        let config = BusinessConfig::from_vars(vec![("API_BASE_URL", "   ")])
            .expect("config should deserialize");

        assert_eq!(config, BusinessConfig::default());
    }
}
