use super::constants::{DEFAULT_HEIGHT_FLOOR, DEFAULT_HEIGHT_SCALE};

/// Linear byte-magnitude to spatial-unit conversion with a minimum size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightMapping {
    pub scale: f32,
    pub floor: f32,
}

impl Default for HeightMapping {
    fn default() -> Self {
        Self {
            scale: DEFAULT_HEIGHT_SCALE,
            floor: DEFAULT_HEIGHT_FLOOR,
        }
    }
}

impl HeightMapping {
    pub fn new(scale: f32, floor: f32) -> Self {
        Self { scale, floor }
    }

    #[inline]
    pub fn height(&self, value: u8) -> f32 {
        (value as f32 * self.scale).max(self.floor)
    }
}

/// Fixed correspondence between snapshot bins and visual elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinMap {
    /// Element `i` shows bin `i`.
    Single(usize),
    /// Elements `i` and `bins + i` both show bin `i` (left/right pair).
    Mirrored(usize),
}

impl BinMap {
    pub fn new(bins: usize, mirrored: bool) -> Self {
        if mirrored {
            BinMap::Mirrored(bins)
        } else {
            BinMap::Single(bins)
        }
    }

    pub fn bin_count(&self) -> usize {
        match *self {
            BinMap::Single(n) | BinMap::Mirrored(n) => n,
        }
    }

    pub fn element_count(&self) -> usize {
        match *self {
            BinMap::Single(n) => n,
            BinMap::Mirrored(n) => 2 * n,
        }
    }

    #[inline]
    pub fn bin_for(&self, element: usize) -> usize {
        match *self {
            BinMap::Single(_) => element,
            BinMap::Mirrored(n) => element % n.max(1),
        }
    }
}

/// Presentation side of the mapper: a set of elements with a driven height.
pub trait RenderSurface {
    fn element_count(&self) -> usize;
    fn set_element_height(&mut self, element: usize, value: f32);
    /// Raw byte behind the element's height, before scaling and the floor.
    fn set_element_magnitude(&mut self, _element: usize, _magnitude: u8) {}
    /// Flush the frame.
    fn present(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("snapshot has {actual} bins, mapping expects {expected}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("surface has {actual} elements, mapping expects {expected}")]
    ElementMismatch { expected: usize, actual: usize },
}

/// Maps each frame's snapshot onto the bound elements. Holds no per-frame state.
#[derive(Debug, Clone)]
pub struct SpectrumMapper {
    mapping: HeightMapping,
    bins: BinMap,
}

impl SpectrumMapper {
    pub fn new(mapping: HeightMapping, bins: BinMap) -> Self {
        Self { mapping, bins }
    }

    pub fn mapping(&self) -> HeightMapping {
        self.mapping
    }

    pub fn bin_map(&self) -> BinMap {
        self.bins
    }

    /// Rebind after a layout rebuild (e.g. a new fft size).
    pub fn rebind(&mut self, bins: BinMap) {
        self.bins = bins;
    }

    fn check_snapshot(&self, snapshot: &[u8]) -> Result<(), MapError> {
        let expected = self.bins.bin_count();
        if snapshot.len() != expected {
            return Err(MapError::LengthMismatch {
                expected,
                actual: snapshot.len(),
            });
        }
        Ok(())
    }

    /// Height of every element for `snapshot`, in element order.
    pub fn heights(&self, snapshot: &[u8]) -> Result<Vec<f32>, MapError> {
        self.check_snapshot(snapshot)?;
        Ok((0..self.bins.element_count())
            .map(|e| self.mapping.height(snapshot[self.bins.bin_for(e)]))
            .collect())
    }

    /// Write every element's height into `surface` and present it.
    ///
    /// Mismatched lengths are reported before the surface is touched, so a
    /// failed call leaves the previous frame's attributes in place.
    pub fn apply<S: RenderSurface + ?Sized>(
        &self,
        snapshot: &[u8],
        surface: &mut S,
    ) -> Result<(), MapError> {
        self.check_snapshot(snapshot)?;
        let expected = self.bins.element_count();
        let actual = surface.element_count();
        if actual != expected {
            return Err(MapError::ElementMismatch { expected, actual });
        }
        for e in 0..expected {
            let v = snapshot[self.bins.bin_for(e)];
            surface.set_element_magnitude(e, v);
            surface.set_element_height(e, self.mapping.height(v));
        }
        surface.present();
        Ok(())
    }
}
