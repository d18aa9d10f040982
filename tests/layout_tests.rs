// Host-side tests for element layouts.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod mapper {
        include!("../src/core/mapper.rs");
    }
    pub mod layout {
        include!("../src/core/layout.rs");
    }
}

use crate::core::constants::*;
use crate::core::layout::*;
use crate::core::mapper::{BinMap, HeightMapping, RenderSurface, SpectrumMapper};
use glam::Vec3;

#[test]
fn canvas_bars_follow_width_factor_and_gap() {
    let rects = bars_2d(300.0, &BinMap::Single(128));
    assert_eq!(rects.len(), 128);
    let w = (300.0 / 128.0) * 2.5;
    assert!((rects[0].width - w).abs() < 1e-5);
    assert_eq!(rects[0].x, 0.0);
    assert!((rects[1].x - (w + 1.0)).abs() < 1e-4);
    // later bars run off the right edge; they are still bound
    assert!(rects[127].x > 300.0);
}

#[test]
fn mirrored_canvas_bars_split_around_the_centre() {
    let rects = bars_2d(400.0, &BinMap::Mirrored(16));
    assert_eq!(rects.len(), 32);
    for i in 0..16 {
        let right = rects[i];
        let left = rects[16 + i];
        assert!(right.x >= 200.0);
        assert!(left.x + left.width <= 200.0);
        let right_offset = right.x - 200.0;
        let left_offset = 200.0 - (left.x + left.width);
        assert!((right_offset + BAR2D_GAP_PX - left_offset).abs() < 1e-3);
    }
}

#[test]
fn empty_bin_map_has_no_canvas_bars() {
    assert!(bars_2d(300.0, &BinMap::Single(0)).is_empty());
}

#[test]
fn canvas_bar_color_tracks_magnitude() {
    assert_eq!(bar_2d_color(0), [100, 50, 50]);
    assert_eq!(bar_2d_color(100), [200, 50, 50]);
    // 255 + 100 saturates
    assert_eq!(bar_2d_color(155), [255, 50, 50]);
    assert_eq!(bar_2d_color(255), [255, 50, 50]);
}

#[derive(Default)]
struct ColorSurface {
    heights: Vec<f32>,
    colors: Vec<[u8; 3]>,
}

impl RenderSurface for ColorSurface {
    fn element_count(&self) -> usize {
        self.heights.len()
    }

    fn set_element_height(&mut self, element: usize, value: f32) {
        self.heights[element] = value;
    }

    fn set_element_magnitude(&mut self, element: usize, magnitude: u8) {
        self.colors[element] = bar_2d_color(magnitude);
    }

    fn present(&mut self) {}
}

#[test]
fn quiet_bins_keep_distinct_colors_under_the_height_floor() {
    let mapping = HeightMapping::new(BAR2D_HEIGHT_SCALE, BAR2D_HEIGHT_FLOOR);
    let mapper = SpectrumMapper::new(mapping, BinMap::Single(4));
    let mut surface = ColorSurface {
        heights: vec![0.0; 4],
        colors: vec![[0; 3]; 4],
    };
    mapper.apply(&[0, 1, 2, 3], &mut surface).unwrap();
    // bytes 0..=2 all clamp to the 1px floor
    assert_eq!(&surface.heights[..3], &[BAR2D_HEIGHT_FLOOR; 3]);
    let reds: Vec<u8> = surface.colors.iter().map(|c| c[0]).collect();
    assert_eq!(reds, vec![100, 101, 102, 103]);
}

#[test]
fn large_floor_does_not_flatten_canvas_colors() {
    let mapper = SpectrumMapper::new(HeightMapping::new(0.5, 10.0), BinMap::Mirrored(3));
    let mut surface = ColorSurface {
        heights: vec![0.0; 6],
        colors: vec![[0; 3]; 6],
    };
    mapper.apply(&[0, 10, 20], &mut surface).unwrap();
    assert!(surface.heights.iter().all(|h| *h == 10.0));
    let reds: Vec<u8> = surface.colors.iter().map(|c| c[0]).collect();
    assert_eq!(reds, vec![100, 110, 120, 100, 110, 120]);
}

#[test]
fn bars3d_has_one_box_per_bin_centred_on_origin() {
    let params = SceneParams::default();
    let scene = Scene3d::build(VisualMode::Bars3d, &BinMap::Single(9), &params);
    assert_eq!(scene.element_count(), 9);
    assert_eq!(scene.instances.len(), 9);
    assert_eq!(scene.drive, Drive::ScaleY);
    assert!(scene.instances[4].position.x.abs() < 1e-6);
    let first = scene.instances[0].position.x;
    let last = scene.instances[8].position.x;
    assert!((first + last).abs() < 1e-5);
    assert!((scene.instances[1].position.x - first - params.spacing).abs() < 1e-5);
}

#[test]
fn mirrored_bars3d_pairs_sit_at_opposite_x() {
    let scene = Scene3d::build(
        VisualMode::Bars3d,
        &BinMap::Mirrored(8),
        &SceneParams::default(),
    );
    assert_eq!(scene.element_count(), 16);
    for i in 0..8 {
        let right = scene.instances[scene.instance_range(i).start].position;
        let left = scene.instances[scene.instance_range(8 + i).start].position;
        assert!(right.x > 0.0);
        assert_eq!(left.x, -right.x);
    }
}

#[test]
fn bars_stand_on_the_ground_plane() {
    let base = InstanceBase {
        position: Vec3::new(1.0, 0.0, 0.0),
        size: Vec3::new(0.1, 1.0, 0.1),
        color: [1.0, 0.0, 0.0],
    };
    let (t, s) = base.transform(Drive::ScaleY, 4.0);
    assert_eq!(s, Vec3::new(0.1, 4.0, 0.1));
    assert_eq!(t, Vec3::new(1.0, 2.0, 0.0));
    let (t, s) = base.transform(Drive::OffsetY, 4.0);
    assert_eq!(s, base.size);
    assert_eq!(t, Vec3::new(1.0, 4.0, 0.0));
}

#[test]
fn particle_clusters_are_contiguous_and_deterministic() {
    let params = SceneParams {
        particles_per_bin: 5,
        ..SceneParams::default()
    };
    let a = Scene3d::build(VisualMode::Particles, &BinMap::Single(32), &params);
    let b = Scene3d::build(VisualMode::Particles, &BinMap::Single(32), &params);
    assert_eq!(a.drive, Drive::OffsetY);
    assert_eq!(a.element_count(), 32);
    assert_eq!(a.instances.len(), 32 * 5);
    let mut next = 0;
    for e in 0..32 {
        let r = a.instance_range(e);
        assert_eq!(r.start, next);
        assert_eq!(r.len(), 5);
        next = r.end;
    }
    assert_eq!(a.instances, b.instances);
}

#[test]
fn particle_rings_grow_with_bin_index() {
    let scene = Scene3d::build(
        VisualMode::Particles,
        &BinMap::Single(64),
        &SceneParams::default(),
    );
    let mean_radius = |e: usize| {
        let r = scene.instance_range(e);
        let n = r.len() as f32;
        r.map(|i| {
            let p = scene.instances[i].position;
            (p.x * p.x + p.z * p.z).sqrt()
        })
        .sum::<f32>()
            / n
    };
    assert!(mean_radius(63) > mean_radius(0));
}

#[test]
fn mirrored_particles_double_the_elements() {
    let scene = Scene3d::build(
        VisualMode::Particles,
        &BinMap::Mirrored(16),
        &SceneParams::default(),
    );
    assert_eq!(scene.element_count(), 32);
    let a = scene.instances[scene.instance_range(3).start].position;
    let b = scene.instances[scene.instance_range(19).start].position;
    assert_eq!(b, Vec3::new(-a.x, a.y, a.z));
}

#[test]
fn rebuilding_keeps_elements_in_step_with_bins() {
    let params = SceneParams::default();
    for bins in [16usize, 32, 64, 128] {
        for map in [BinMap::Single(bins), BinMap::Mirrored(bins)] {
            for mode in [VisualMode::Bars3d, VisualMode::Particles] {
                let scene = Scene3d::build(mode, &map, &params);
                assert_eq!(scene.element_count(), map.element_count());
            }
            assert_eq!(bars_2d(800.0, &map).len(), map.element_count());
        }
    }
}

#[test]
fn out_of_range_element_has_no_instances() {
    let scene = Scene3d::build(VisualMode::Bars3d, &BinMap::Single(4), &SceneParams::default());
    assert!(scene.instance_range(10).is_empty());
}
