use std::sync::Arc;

use quiz_core::CourseCatalog;

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<CourseCatalog>;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<CourseCatalog>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &dyn UiApp) -> Self {
        Self {
            catalog: app.catalog(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CourseCatalog> {
        Arc::clone(&self.catalog)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app.as_ref())
}
