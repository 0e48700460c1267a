use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::CourseCatalog;
use ui::{App, UiApp, build_app_context};

struct DesktopApp {
    catalog: Arc<CourseCatalog>,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<CourseCatalog> {
        Arc::clone(&self.catalog)
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Seed the catalog in the binary glue so core and ui stay free of
    // startup concerns. Seed validation failures abort the launch.
    let catalog = CourseCatalog::load()?;

    let app = DesktopApp {
        catalog: Arc::new(catalog),
    };
    let context = build_app_context(Arc::new(app));

    // Dioxus/tao can default to an always-on-top window in some dev setups.
    // Explicitly disable it so the app doesn't behave like a modal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz Academy")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
