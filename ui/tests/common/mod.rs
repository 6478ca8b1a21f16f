use std::time::Duration;

use egui_kittest::Harness;
use substances_business::{HEADER_MARKER, PARSE_PDF_PATH};
use substances_ui::state::State;
use substances_ui::widgets::substances_viewer;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Frames to step while waiting for the mocked request to settle.
const MAX_WAIT_FRAMES: usize = 100;

pub struct TestCtx<'a> {
    _mock_server: MockServer,
    harness: Harness<'a, State>,
}

impl<'a> TestCtx<'a> {
    /// Mounts the viewer against a mock server answering `/parse_pdf` with `response`.
    pub async fn new(response: ResponseTemplate) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(PARSE_PDF_PATH))
            .respond_with(response)
            .expect(1)
            .mount(&mock_server)
            .await;

        let state = State::test(mock_server.uri());
        let harness = Harness::builder()
            .with_size(egui::vec2(1024.0, 1400.0))
            .build_ui_state(
                |ui, state: &mut State| {
                    substances_viewer(state, ui);
                },
                state,
            );

        Self {
            _mock_server: mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, State> {
        &mut self.harness
    }

    /// Steps frames until the request has produced a loaded table or an error.
    pub async fn wait_settled(&mut self) {
        for _ in 0..MAX_WAIT_FRAMES {
            self.harness.step();
            if !self.harness.state().viewer.is_loading() {
                // One more frame so the settled state is rendered.
                self.harness.step();
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("viewer did not settle after {MAX_WAIT_FRAMES} frames");
    }
}

pub fn header_row() -> Vec<String> {
    vec![
        HEADER_MARKER.to_owned(),
        "SCHEDULE".to_owned(),
        "CSA CODE".to_owned(),
    ]
}

/// A `/parse_pdf` body with a preamble, the header row, and `rows` data rows.
pub fn pdf_body(rows: usize) -> serde_json::Value {
    let mut content = vec![vec!["Preamble".to_owned()], header_row()];
    content.extend((0..rows).map(|i| {
        vec![
            format!("Substance {i}"),
            "II".to_owned(),
            format!("{}", 9000 + i),
        ]
    }));

    serde_json::json!({ "pdf_cntnt": content })
}
