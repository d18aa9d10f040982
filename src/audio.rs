use crate::core::{
    bins_for_fft_size, AppCommand, AudioSource, CommandQueue, FrequencySnapshot, PlayerCommand,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Media element -> analyser -> destination.
pub struct AudioGraph {
    pub ctx: web::AudioContext,
    pub element: web::HtmlAudioElement,
    analyser: web::AnalyserNode,
    snapshot: FrequencySnapshot,
    // Keeps the source node alive alongside the graph.
    _source: web::MediaElementAudioSourceNode,
}

impl AudioGraph {
    pub fn new(fft_size: u32) -> anyhow::Result<Self> {
        let bins = bins_for_fft_size(fft_size)?;
        let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let element = web::HtmlAudioElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        element.set_cross_origin(Some("anonymous"));
        let source = ctx
            .create_media_element_source(&element)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let analyser = web::AnalyserNode::new(&ctx).map_err(|e| anyhow::anyhow!("{:?}", e))?;
        analyser.set_fft_size(fft_size);
        source
            .connect_with_audio_node(&analyser)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        analyser
            .connect_with_audio_node(&ctx.destination())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        log::info!(
            "[audio] analyser fft_size={} bins={}",
            fft_size,
            analyser.frequency_bin_count()
        );
        Ok(Self {
            ctx,
            element,
            analyser,
            snapshot: FrequencySnapshot::new(bins),
            _source: source,
        })
    }

    pub fn bin_count(&self) -> usize {
        self.snapshot.len()
    }

    pub fn fft_size(&self) -> u32 {
        self.analyser.fft_size()
    }

    /// Change the transform size; the snapshot is resized to match.
    pub fn set_fft_size(&mut self, fft_size: u32) -> anyhow::Result<usize> {
        let bins = bins_for_fft_size(fft_size)?;
        self.analyser.set_fft_size(fft_size);
        self.snapshot.resize(bins);
        Ok(bins)
    }

    pub fn load(&self, url: &str) {
        log::info!("[audio] load {}", url);
        self.element.set_src(url);
    }

    /// Start playback; a refusal is reported back through `commands`.
    pub fn play(&self, commands: &CommandQueue) {
        if self.ctx.state() == web::AudioContextState::Suspended {
            _ = self.ctx.resume();
        }
        let failed = AppCommand::Player(PlayerCommand::PlaybackFailed);
        match self.element.play() {
            Ok(promise) => {
                let promise: js_sys::Promise = promise;
                let commands = commands.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::error!("[audio] play rejected: {:?}", e);
                        commands.push(failed);
                    }
                });
            }
            Err(e) => {
                log::error!("[audio] play error: {:?}", e);
                commands.push(failed);
            }
        }
    }

    pub fn pause(&self) {
        _ = self.element.pause();
    }

    pub fn event_target(&self) -> &web::EventTarget {
        self.element.unchecked_ref()
    }
}

impl AudioSource for AudioGraph {
    fn current_frequency_snapshot(&mut self) -> &[u8] {
        self.analyser
            .get_byte_frequency_data(self.snapshot.as_mut_slice());
        self.snapshot.as_slice()
    }
}
