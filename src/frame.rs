use crate::audio::AudioGraph;
use crate::camera::OrbitCamera;
use crate::canvas2d::CanvasBars;
use crate::constants::{CAMERA_TARGET_Y, MAX_FRAME_DT_SEC};
use crate::core::{
    step_fft_size, AppCommand, AudioSource, BinMap, CommandQueue, MapError, PlayerEffect,
    PlayerState, RenderSurface, Scene3d, SpectrumMapper, VisualizerConfig,
};
use crate::dom;
use crate::overlay;
use crate::render::GpuState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Whichever presentation the configured mode selected.
pub enum Surface {
    Canvas(CanvasBars),
    Gpu(Box<GpuState>),
}

impl RenderSurface for Surface {
    fn element_count(&self) -> usize {
        match self {
            Surface::Canvas(c) => c.element_count(),
            Surface::Gpu(g) => g.element_count(),
        }
    }

    fn set_element_height(&mut self, element: usize, value: f32) {
        match self {
            Surface::Canvas(c) => c.set_element_height(element, value),
            Surface::Gpu(g) => g.set_element_height(element, value),
        }
    }

    fn set_element_magnitude(&mut self, element: usize, magnitude: u8) {
        match self {
            Surface::Canvas(c) => c.set_element_magnitude(element, magnitude),
            Surface::Gpu(g) => g.set_element_magnitude(element, magnitude),
        }
    }

    fn present(&mut self) {
        match self {
            Surface::Canvas(c) => c.present(),
            Surface::Gpu(g) => g.present(),
        }
    }
}

/// Everything one visualizer page owns, passed explicitly to each frame.
pub struct Session {
    pub config: VisualizerConfig,
    pub audio: AudioGraph,
    pub mapper: SpectrumMapper,
    pub surface: Surface,
    pub player: PlayerState,
    pub camera: OrbitCamera,
    pub commands: CommandQueue,
    pub canvas: web::HtmlCanvasElement,
    pub last_instant: Instant,
    last_error: Option<MapError>,
}

impl Session {
    pub fn new(
        config: VisualizerConfig,
        audio: AudioGraph,
        surface: Surface,
        canvas: web::HtmlCanvasElement,
        commands: CommandQueue,
    ) -> Self {
        let bins = BinMap::new(audio.bin_count(), config.mirrored);
        let mapper = SpectrumMapper::new(config.height_mapping(), bins);
        let player = PlayerState::new(config.tracks.len());
        let mut camera = OrbitCamera::new(
            config.camera.distance,
            config.camera.height,
            config.camera.orbit_speed,
        );
        camera.target.y = CAMERA_TARGET_Y;
        Self {
            config,
            audio,
            mapper,
            surface,
            player,
            camera,
            commands,
            canvas,
            last_instant: Instant::now(),
            last_error: None,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        for cmd in self.commands.drain() {
            self.handle_command(cmd);
        }

        if let Surface::Gpu(g) = &mut self.surface {
            self.camera.advance(dt_sec);
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            g.set_camera(&self.camera);
        }

        let snapshot = self.audio.current_frequency_snapshot();
        match self.mapper.apply(snapshot, &mut self.surface) {
            Ok(()) => self.last_error = None,
            Err(e) => {
                if self.last_error.as_ref() != Some(&e) {
                    log::error!("[mapper] frame skipped: {}", e);
                    self.last_error = Some(e);
                }
            }
        }
    }

    fn handle_command(&mut self, cmd: AppCommand) {
        match cmd {
            AppCommand::Player(pc) => {
                let effects = self.player.dispatch(pc);
                for effect in effects {
                    self.apply_effect(effect);
                }
                log::info!(
                    "[player] {:?} -> track={:?} playing={}",
                    pc,
                    self.player.current_track(),
                    self.player.is_playing()
                );
                if let Some(doc) = dom::window_document() {
                    overlay::update_controls(&doc, &self.player, &self.config.tracks);
                }
            }
            AppCommand::ResizeBins { up } => self.resize_bins(up),
            AppCommand::ToggleHint => {
                if let Some(doc) = dom::window_document() {
                    overlay::toggle(&doc);
                }
            }
        }
    }

    fn apply_effect(&self, effect: PlayerEffect) {
        match effect {
            PlayerEffect::Play => self.audio.play(&self.commands),
            PlayerEffect::Pause => self.audio.pause(),
            PlayerEffect::Load(i) => {
                if let Some(url) = self.config.tracks.get(i) {
                    self.audio.load(url);
                }
            }
        }
    }

    /// Live bar-count change: analyser, mapping and elements are rebuilt together.
    fn resize_bins(&mut self, up: bool) {
        let Some(next) = step_fft_size(self.audio.fft_size(), up) else {
            return;
        };
        let bins = match self.audio.set_fft_size(next) {
            Ok(b) => b,
            Err(e) => {
                log::error!("[audio] fft resize failed: {:?}", e);
                return;
            }
        };
        let map = BinMap::new(bins, self.config.mirrored);
        match &mut self.surface {
            Surface::Canvas(c) => c.rebind(map),
            Surface::Gpu(g) => {
                g.set_scene(Scene3d::build(self.config.mode, &map, &self.config.scene_params()))
            }
        }
        self.mapper.rebind(map);
        log::info!("[mapper] rebuilt fft_size={} bins={} elements={}", next, bins, map.element_count());
    }
}

pub fn start_loop(session: Rc<RefCell<Session>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        session.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
