#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, CONFIG_SCRIPT_ID};
use crate::core::{BinMap, CommandQueue, Scene3d, VisualizerConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod camera;
mod canvas2d;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

/// Inline TOML config if the page carries one, defaults otherwise.
fn load_config(document: &web::Document) -> VisualizerConfig {
    match dom::inline_text(document, CONFIG_SCRIPT_ID) {
        Some(text) => match VisualizerConfig::from_toml_str(&text) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::error!("[config] {}; using defaults", e);
                VisualizerConfig::default()
            }
        },
        None => VisualizerConfig::default(),
    }
}

async fn build_surface(
    canvas: &web::HtmlCanvasElement,
    config: &VisualizerConfig,
    bins: BinMap,
) -> anyhow::Result<frame::Surface> {
    if config.mode.is_3d() {
        let scene = Scene3d::build(config.mode, &bins, &config.scene_params());
        let gpu = render::GpuState::new(canvas, scene, config.background).await?;
        Ok(frame::Surface::Gpu(Box::new(gpu)))
    } else {
        let bars = canvas2d::CanvasBars::new(canvas, bins, config.background)?;
        Ok(frame::Surface::Canvas(bars))
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("spectrum-viz starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::wire_canvas_resize(&canvas);

    let config = load_config(&document);
    log::info!(
        "[config] mode={:?} fft_size={} mirrored={} tracks={}",
        config.mode,
        config.fft_size,
        config.mirrored,
        config.tracks.len()
    );

    let audio = audio::AudioGraph::new(config.fft_size)?;
    let bins = BinMap::new(audio.bin_count(), config.mirrored);
    let surface = build_surface(&canvas, &config, bins).await?;

    let commands = CommandQueue::new();
    events::wire_buttons(&document, &commands);
    events::wire_track_ended(&audio, &commands);
    events::wire_global_keydown(commands.clone());

    let session = frame::Session::new(config, audio, surface, canvas, commands);
    if let Some(url) = session.config.tracks.first() {
        session.audio.load(url);
    }
    overlay::update_controls(&document, &session.player, &session.config.tracks);

    frame::start_loop(Rc::new(RefCell::new(session)));
    Ok(())
}
