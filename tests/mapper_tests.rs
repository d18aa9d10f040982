// Host-side tests for the spectrum-to-geometry mapper.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod mapper {
        include!("../src/core/mapper.rs");
    }
}

use crate::core::mapper::*;

#[derive(Default)]
struct RecordingSurface {
    heights: Vec<f32>,
    presents: usize,
}

impl RecordingSurface {
    fn with_elements(n: usize) -> Self {
        Self {
            heights: vec![-1.0; n],
            presents: 0,
        }
    }
}

impl RenderSurface for RecordingSurface {
    fn element_count(&self) -> usize {
        self.heights.len()
    }

    fn set_element_height(&mut self, element: usize, value: f32) {
        self.heights[element] = value;
    }

    fn present(&mut self) {
        self.presents += 1;
    }
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn four_bin_scenario_matches_expected_heights() {
    let mapper = SpectrumMapper::new(HeightMapping::new(0.05, 0.1), BinMap::Single(4));
    let mut surface = RecordingSurface::with_elements(4);
    mapper.apply(&[0, 100, 255, 10], &mut surface).unwrap();
    let expected = [0.1, 5.0, 12.75, 0.5];
    for (got, want) in surface.heights.iter().zip(expected) {
        assert!(approx(*got, want), "got {got}, want {want}");
    }
    assert_eq!(surface.presents, 1);
}

#[test]
fn silence_clamps_every_element_to_floor_exactly() {
    let mapping = HeightMapping::new(0.05, 0.1);
    let mapper = SpectrumMapper::new(mapping, BinMap::Mirrored(64));
    let heights = mapper.heights(&[0u8; 64]).unwrap();
    assert_eq!(heights.len(), 128);
    assert!(heights.iter().all(|h| *h == 0.1));
}

#[test]
fn every_byte_maps_to_max_of_floor_and_scaled_value() {
    let mapping = HeightMapping::new(0.05, 0.1);
    for v in 0..=255u8 {
        let h = mapping.height(v);
        assert_eq!(h, (v as f32 * 0.05).max(0.1));
        assert!(h >= 0.1);
    }
}

#[test]
fn mapping_is_monotonic_per_bin() {
    let mapping = HeightMapping::default();
    let mut prev = mapping.height(0);
    for v in 1..=255u8 {
        let h = mapping.height(v);
        assert!(h >= prev, "height decreased at byte {v}");
        prev = h;
    }
}

#[test]
fn applying_twice_yields_identical_heights() {
    let mapper = SpectrumMapper::new(HeightMapping::default(), BinMap::Single(8));
    let snapshot = [3u8, 17, 250, 0, 128, 64, 9, 255];
    let mut surface = RecordingSurface::with_elements(8);
    mapper.apply(&snapshot, &mut surface).unwrap();
    let first = surface.heights.clone();
    mapper.apply(&snapshot, &mut surface).unwrap();
    assert_eq!(first, surface.heights);
    assert_eq!(surface.presents, 2);
}

#[test]
fn mirrored_pairs_receive_identical_heights() {
    let bins = BinMap::Mirrored(5);
    let mapper = SpectrumMapper::new(HeightMapping::default(), bins);
    let snapshot = [10u8, 20, 30, 200, 0];
    let mut surface = RecordingSurface::with_elements(bins.element_count());
    mapper.apply(&snapshot, &mut surface).unwrap();
    for e in 0..5 {
        assert_eq!(bins.bin_for(e), bins.bin_for(e + 5));
        assert_eq!(surface.heights[e], surface.heights[e + 5]);
    }
}

#[test]
fn bin_map_counts_and_lookup() {
    assert_eq!(BinMap::new(64, false), BinMap::Single(64));
    assert_eq!(BinMap::new(64, true), BinMap::Mirrored(64));
    assert_eq!(BinMap::Single(64).element_count(), 64);
    assert_eq!(BinMap::Mirrored(64).element_count(), 128);
    assert_eq!(BinMap::Mirrored(64).bin_for(70), 6);
    assert_eq!(BinMap::Single(64).bin_for(7), 7);
    assert_eq!(BinMap::Mirrored(4).bin_for(7), 3);
}

#[test]
fn snapshot_length_mismatch_fails_without_touching_surface() {
    let mapper = SpectrumMapper::new(HeightMapping::default(), BinMap::Single(4));
    let mut surface = RecordingSurface::with_elements(4);
    let err = mapper.apply(&[1, 2, 3], &mut surface).unwrap_err();
    assert_eq!(
        err,
        MapError::LengthMismatch {
            expected: 4,
            actual: 3
        }
    );
    assert!(surface.heights.iter().all(|h| *h == -1.0));
    assert_eq!(surface.presents, 0);
}

#[test]
fn element_count_mismatch_fails_without_touching_surface() {
    let mapper = SpectrumMapper::new(HeightMapping::default(), BinMap::Mirrored(4));
    let mut surface = RecordingSurface::with_elements(4);
    let err = mapper.apply(&[1, 2, 3, 4], &mut surface).unwrap_err();
    assert_eq!(
        err,
        MapError::ElementMismatch {
            expected: 8,
            actual: 4
        }
    );
    assert_eq!(surface.presents, 0);
}

#[test]
fn rebind_follows_a_resized_snapshot() {
    let mut mapper = SpectrumMapper::new(HeightMapping::default(), BinMap::Single(4));
    assert!(mapper.heights(&[0u8; 8]).is_err());
    mapper.rebind(BinMap::Single(8));
    assert_eq!(mapper.heights(&[0u8; 8]).unwrap().len(), 8);
    assert_eq!(mapper.bin_map(), BinMap::Single(8));
}
