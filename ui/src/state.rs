use substances_business::{BusinessConfig, ContentLoader, ViewerState};

/// The main application state.
///
/// One mount of the viewer: the view model plus the loader that feeds it. Dropping the
/// state cancels the request if it is still in flight.
#[derive(Debug)]
pub struct State {
    pub config: BusinessConfig,
    pub viewer: ViewerState,
    loader: ContentLoader,
}

impl Default for State {
    fn default() -> Self {
        Self::new(BusinessConfig::default())
    }
}

impl State {
    pub fn new(config: BusinessConfig) -> Self {
        Self {
            config,
            viewer: ViewerState::new(),
            loader: ContentLoader::new(),
        }
    }

    pub fn test(base_url: String) -> Self {
        Self::new(BusinessConfig::new(base_url))
    }

    /// Issues the single request of this mount. Later calls are no-ops.
    pub fn mount(&mut self, ctx: &egui::Context) {
        if !self.viewer.begin_loading() {
            return;
        }

        let ctx = ctx.clone();
        self.loader
            .start(self.config.clone(), move || ctx.request_repaint());
    }

    /// Moves a finished outcome from the loader into the view model.
    pub fn sync(&mut self) {
        if let Some(outcome) = self.loader.poll() {
            self.viewer.finish(outcome);
        }
    }

    pub fn teardown(&mut self) {
        self.loader.cancel();
    }
}
