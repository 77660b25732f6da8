pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod loader;
pub mod model;
pub mod scoring;
pub mod ui;
pub mod view_models;

pub use app::AlignmentApp;
pub use config::AppConfig;

pub const APP_TITLE: &str = "Alignment Compass";

/// Browser entry point: mounts the app on the `alignment_canvas` element.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let canvas = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("alignment_canvas"))
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("missing #alignment_canvas"))?
        .dyn_into::<web_sys::HtmlCanvasElement>()?;

    wasm_bindgen_futures::spawn_local(async move {
        let started = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::new(AlignmentApp::new(AppConfig::resolve())))),
            )
            .await;
        if let Err(err) = started {
            log::error!("failed to start app: {err:?}");
        }
    });

    Ok(())
}
