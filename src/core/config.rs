use super::constants::*;
use super::layout::{SceneParams, VisualMode};
use super::mapper::HeightMapping;
use super::spectrum::bins_for_fft_size;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub distance: f32,
    pub height: f32,
    pub orbit_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: DEFAULT_CAMERA_DISTANCE,
            height: DEFAULT_CAMERA_HEIGHT,
            orbit_speed: DEFAULT_ORBIT_SPEED,
        }
    }
}

/// Startup configuration. Every field may be omitted from the TOML document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    pub mode: VisualMode,
    pub fft_size: u32,
    /// Bytes to spatial units; defaults depend on the mode (pixels for `bars2d`).
    pub height_scale: Option<f32>,
    pub height_floor: Option<f32>,
    pub mirrored: bool,
    pub tracks: Vec<String>,
    pub bar_color: [f32; 3],
    pub particle_color: [f32; 3],
    pub background: [f32; 3],
    pub bar_spacing: f32,
    pub particles_per_bin: usize,
    pub camera: CameraConfig,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            mode: VisualMode::default(),
            fft_size: DEFAULT_FFT_SIZE,
            height_scale: None,
            height_floor: None,
            mirrored: false,
            tracks: Vec::new(),
            bar_color: DEFAULT_BAR_COLOR,
            particle_color: DEFAULT_PARTICLE_COLOR,
            background: DEFAULT_BACKGROUND,
            bar_spacing: DEFAULT_BAR_SPACING,
            particles_per_bin: DEFAULT_PARTICLES_PER_BIN,
            camera: CameraConfig::default(),
        }
    }
}

impl VisualizerConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let cfg: VisualizerConfig = toml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        bins_for_fft_size(self.fft_size).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        let non_negative = |name: &str, v: f32| {
            if v.is_finite() && v >= 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid(format!("{name} must be finite and >= 0, got {v}")))
            }
        };
        let mapping = self.height_mapping();
        non_negative("height_scale", mapping.scale)?;
        non_negative("height_floor", mapping.floor)?;
        if !(self.bar_spacing.is_finite() && self.bar_spacing > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "bar_spacing must be > 0, got {}",
                self.bar_spacing
            )));
        }
        if self.particles_per_bin == 0 {
            return Err(ConfigError::Invalid("particles_per_bin must be >= 1".into()));
        }
        if !(self.camera.distance.is_finite() && self.camera.distance > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "camera.distance must be > 0, got {}",
                self.camera.distance
            )));
        }
        Ok(())
    }

    /// Height mapping for the configured mode.
    pub fn height_mapping(&self) -> HeightMapping {
        let (scale, floor) = match self.mode {
            VisualMode::Bars2d => (BAR2D_HEIGHT_SCALE, BAR2D_HEIGHT_FLOOR),
            _ => (DEFAULT_HEIGHT_SCALE, DEFAULT_HEIGHT_FLOOR),
        };
        HeightMapping::new(
            self.height_scale.unwrap_or(scale),
            self.height_floor.unwrap_or(floor),
        )
    }

    pub fn scene_params(&self) -> SceneParams {
        SceneParams {
            spacing: self.bar_spacing,
            particles_per_bin: self.particles_per_bin,
            bar_color: self.bar_color,
            particle_color: self.particle_color,
        }
    }
}
