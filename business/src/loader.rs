//! Content Loader: one POST to the parse endpoint per mount.

use log::{debug, info, warn};
use substances_states::{TaskHandle, TaskSlot};

use crate::http::Client;
use crate::{BusinessConfig, LoadError, NormalizedTable, RawFetchResult};

pub type LoadOutcome = Result<NormalizedTable, LoadError>;

/// Issues the request, checks the status, decodes the payload and normalizes it.
pub async fn fetch_pdf_content(config: &BusinessConfig) -> LoadOutcome {
    let url = config.parse_pdf_url();
    info!("Fetching PDF content from {url}");

    let response = Client::post(url.as_str())
        .json_content_type()
        .send()
        .await?;

    if !response.is_success() {
        warn!("Parse endpoint returned status {}", response.status);
        return Err(LoadError::NetworkStatus(response.status));
    }

    let raw = RawFetchResult::from_value(response.json()?)?;
    debug!("Decoded {} raw rows", raw.pdf_cntnt.len());

    NormalizedTable::from_raw(raw).ok_or(LoadError::Unprocessable)
}

/// Owns the in-flight request of one viewer mount.
///
/// Dropping the loader (or calling [`ContentLoader::cancel`]) cancels the request; an
/// outcome that still arrives afterwards is discarded.
#[derive(Debug, Default)]
pub struct ContentLoader {
    slot: TaskSlot<LoadOutcome>,
}

impl ContentLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns the fetch. `on_update` runs after the outcome has been delivered, which is
    /// where the UI requests a repaint.
    pub fn start<F>(&mut self, config: BusinessConfig, on_update: F) -> TaskHandle
    where
        F: Fn() + Send + 'static,
    {
        self.slot.spawn(move |updater, cancel| async move {
            let outcome = tokio::select! {
                biased;
                () = cancel.cancelled() => {
                    debug!("PDF content request cancelled before completion");
                    return;
                }
                outcome = fetch_pdf_content(&config) => outcome,
            };

            match updater.set(outcome) {
                Ok(()) => on_update(),
                Err(err) => debug!("Dropping PDF content outcome: {err}"),
            }
        })
    }

    /// Returns the finished outcome once; `None` while in flight or after cancellation.
    pub fn poll(&mut self) -> Option<LoadOutcome> {
        self.slot.try_latest()
    }

    pub fn cancel(&mut self) {
        self.slot.cancel();
    }

    pub fn is_started(&self) -> bool {
        self.slot.generation() > 0
    }
}
