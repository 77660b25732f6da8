#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use alignment_quiz::{APP_TITLE, AlignmentApp, AppConfig};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([420.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(AlignmentApp::new(AppConfig::resolve())))),
    )
}

// The browser build starts from `alignment_quiz::start`.
#[cfg(target_arch = "wasm32")]
fn main() {}
