use super::constants::*;
use super::mapper::BinMap;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualMode {
    #[default]
    Bars2d,
    Bars3d,
    Particles,
}

impl VisualMode {
    pub fn is_3d(self) -> bool {
        !matches!(self, VisualMode::Bars2d)
    }
}

// ---------------- Canvas 2D ----------------

/// Horizontal placement of one canvas bar, in backing-store pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f32,
    pub width: f32,
}

/// Bars laid out left to right; bars past the right edge stay bound and get clipped.
pub fn bars_2d(canvas_width: f32, bins: &BinMap) -> Vec<BarRect> {
    let n = bins.element_count();
    if n == 0 {
        return Vec::new();
    }
    let width = (canvas_width / bins.bin_count() as f32) * BAR2D_WIDTH_FACTOR;
    match *bins {
        BinMap::Single(_) => (0..n)
            .map(|i| BarRect {
                x: i as f32 * (width + BAR2D_GAP_PX),
                width,
            })
            .collect(),
        BinMap::Mirrored(bin_count) => {
            // Low bins meet in the centre; element i goes right, bin_count + i goes left.
            let centre = canvas_width * 0.5;
            let mut rects = Vec::with_capacity(n);
            for i in 0..bin_count {
                rects.push(BarRect {
                    x: centre + i as f32 * (width + BAR2D_GAP_PX),
                    width,
                });
            }
            for i in 0..bin_count {
                rects.push(BarRect {
                    x: centre - (i + 1) as f32 * (width + BAR2D_GAP_PX),
                    width,
                });
            }
            rects
        }
    }
}

/// Red channel follows the bin's raw magnitude.
pub fn bar_2d_color(magnitude: u8) -> [u8; 3] {
    let red = (magnitude as u16 + BAR2D_RED_OFFSET).min(255) as u8;
    [red, BAR2D_GREEN, BAR2D_BLUE]
}

// ---------------- 3D scene ----------------

/// How an element's mapped height drives its instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drive {
    /// Box Y scale; the box stands on the ground plane.
    ScaleY,
    /// Vertical displacement from the rest position.
    OffsetY,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstanceBase {
    pub position: Vec3,
    pub size: Vec3,
    pub color: [f32; 3],
}

impl InstanceBase {
    /// World translation and scale for a given mapped height.
    pub fn transform(&self, drive: Drive, height: f32) -> (Vec3, Vec3) {
        match drive {
            Drive::ScaleY => (
                self.position + Vec3::new(0.0, height * 0.5, 0.0),
                Vec3::new(self.size.x, height, self.size.z),
            ),
            Drive::OffsetY => (self.position + Vec3::new(0.0, height, 0.0), self.size),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneParams {
    pub spacing: f32,
    pub particles_per_bin: usize,
    pub bar_color: [f32; 3],
    pub particle_color: [f32; 3],
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_BAR_SPACING,
            particles_per_bin: DEFAULT_PARTICLES_PER_BIN,
            bar_color: DEFAULT_BAR_COLOR,
            particle_color: DEFAULT_PARTICLE_COLOR,
        }
    }
}

/// Instanced scene where each element owns a contiguous run of instances.
#[derive(Debug, Clone)]
pub struct Scene3d {
    pub drive: Drive,
    pub instances: Vec<InstanceBase>,
    ranges: Vec<Range<usize>>,
}

impl Scene3d {
    pub fn build(mode: VisualMode, bins: &BinMap, params: &SceneParams) -> Self {
        match mode {
            VisualMode::Particles => Self::particles(bins, params),
            _ => Self::bars(bins, params),
        }
    }

    pub fn element_count(&self) -> usize {
        self.ranges.len()
    }

    pub fn instance_range(&self, element: usize) -> Range<usize> {
        self.ranges.get(element).cloned().unwrap_or(0..0)
    }

    fn bars(bins: &BinMap, params: &SceneParams) -> Self {
        let n = bins.bin_count();
        let w = params.spacing * BAR3D_WIDTH_RATIO;
        let size = Vec3::new(w, 1.0, w);
        let mut instances = Vec::with_capacity(bins.element_count());
        match bins {
            BinMap::Single(_) => {
                let half = (n as f32 - 1.0) * 0.5;
                for i in 0..n {
                    let x = (i as f32 - half) * params.spacing;
                    instances.push(InstanceBase {
                        position: Vec3::new(x, 0.0, 0.0),
                        size,
                        color: params.bar_color,
                    });
                }
            }
            BinMap::Mirrored(_) => {
                for side in [1.0_f32, -1.0] {
                    for i in 0..n {
                        let x = side * (i as f32 + 0.5) * params.spacing;
                        instances.push(InstanceBase {
                            position: Vec3::new(x, 0.0, 0.0),
                            size,
                            color: params.bar_color,
                        });
                    }
                }
            }
        }
        let ranges = (0..instances.len()).map(|i| i..i + 1).collect();
        Self {
            drive: Drive::ScaleY,
            instances,
            ranges,
        }
    }

    fn particles(bins: &BinMap, params: &SceneParams) -> Self {
        let n = bins.bin_count();
        let per = params.particles_per_bin.max(1);
        let mut rng = StdRng::seed_from_u64(PARTICLE_SEED);
        let size = Vec3::splat(PARTICLE_SIZE);
        let cluster = |bin: usize, rng: &mut StdRng| -> Vec<Vec3> {
            let radius = PARTICLE_RING_START + bin as f32 * PARTICLE_RING_STEP;
            (0..per)
                .map(|k| {
                    let base = std::f32::consts::TAU * k as f32 / per as f32;
                    let a = base + rng.gen_range(-0.5_f32..0.5) * std::f32::consts::TAU / per as f32;
                    let r = radius + rng.gen_range(-PARTICLE_JITTER..PARTICLE_JITTER) * PARTICLE_RING_STEP;
                    Vec3::new(r * a.cos(), 0.0, r * a.sin())
                })
                .collect()
        };
        let clusters: Vec<Vec<Vec3>> = (0..n).map(|b| cluster(b, &mut rng)).collect();

        let mut instances = Vec::with_capacity(bins.element_count() * per);
        let mut ranges = Vec::with_capacity(bins.element_count());
        let mut push = |points: &[Vec3], mirror: bool| {
            let start = instances.len();
            for p in points {
                let position = if mirror { Vec3::new(-p.x, p.y, p.z) } else { *p };
                instances.push(InstanceBase {
                    position,
                    size,
                    color: params.particle_color,
                });
            }
            ranges.push(start..instances.len());
        };
        for points in &clusters {
            push(points, false);
        }
        if let BinMap::Mirrored(_) = bins {
            for points in &clusters {
                push(points, true);
            }
        }
        Self {
            drive: Drive::OffsetY,
            instances,
            ranges,
        }
    }
}
