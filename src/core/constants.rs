// Default tuning for the spectrum mapping and scene layouts.

// Analyser
pub const DEFAULT_FFT_SIZE: u32 = 256; // 128 bins
pub const MIN_FFT_SIZE: u32 = 32;
pub const MAX_FFT_SIZE: u32 = 32768;

// Height mapping: max(floor, byte * scale)
pub const DEFAULT_HEIGHT_SCALE: f32 = 0.05;
pub const DEFAULT_HEIGHT_FLOOR: f32 = 0.1;

// Canvas 2D bars, in backing-store pixels
pub const BAR2D_WIDTH_FACTOR: f32 = 2.5; // bar width = (canvas width / bins) * factor
pub const BAR2D_GAP_PX: f32 = 1.0;
pub const BAR2D_HEIGHT_SCALE: f32 = 0.5; // byte 255 -> 127.5 px
pub const BAR2D_HEIGHT_FLOOR: f32 = 1.0;
pub const BAR2D_RED_OFFSET: u16 = 100; // red channel = byte + offset
pub const BAR2D_GREEN: u8 = 50;
pub const BAR2D_BLUE: u8 = 50;

// 3D scene
pub const DEFAULT_BAR_SPACING: f32 = 0.12;
pub const BAR3D_WIDTH_RATIO: f32 = 0.8; // box width as a fraction of spacing
pub const DEFAULT_PARTICLES_PER_BIN: usize = 6;
pub const PARTICLE_RING_START: f32 = 0.6;
pub const PARTICLE_RING_STEP: f32 = 0.04;
pub const PARTICLE_SIZE: f32 = 0.04;
pub const PARTICLE_JITTER: f32 = 0.15;
pub const PARTICLE_SEED: u64 = 42;

// Colours (linear RGB)
pub const DEFAULT_BAR_COLOR: [f32; 3] = [0.9, 0.25, 0.3];
pub const DEFAULT_PARTICLE_COLOR: [f32; 3] = [0.35, 0.7, 1.0];
pub const DEFAULT_BACKGROUND: [f32; 3] = [0.0, 0.0, 0.0];

// Camera
pub const DEFAULT_CAMERA_DISTANCE: f32 = 12.0;
pub const DEFAULT_CAMERA_HEIGHT: f32 = 4.0;
pub const DEFAULT_ORBIT_SPEED: f32 = 0.15; // radians per second
