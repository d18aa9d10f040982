use crate::core::{bar_2d_color, bars_2d, BarRect, BinMap, RenderSurface};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D bar graph; one rectangle per element, bottom aligned.
pub struct CanvasBars {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    rects: Vec<BarRect>,
    heights: Vec<f32>,
    magnitudes: Vec<u8>,
    background: String,
    laid_out_width: u32,
    bins: BinMap,
}

impl CanvasBars {
    pub fn new(
        canvas: &web::HtmlCanvasElement,
        bins: BinMap,
        background: [f32; 3],
    ) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let width = canvas.width();
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
            rects: bars_2d(width as f32, &bins),
            heights: vec![0.0; bins.element_count()],
            magnitudes: vec![0; bins.element_count()],
            background: css_rgb(background),
            laid_out_width: width,
            bins,
        })
    }

    /// Rebuild the bars for a new bin mapping.
    pub fn rebind(&mut self, bins: BinMap) {
        self.bins = bins;
        self.relayout();
    }

    fn relayout(&mut self) {
        self.laid_out_width = self.canvas.width();
        self.rects = bars_2d(self.laid_out_width as f32, &self.bins);
        self.heights.clear();
        self.heights.resize(self.bins.element_count(), 0.0);
        self.magnitudes.clear();
        self.magnitudes.resize(self.bins.element_count(), 0);
    }
}

impl RenderSurface for CanvasBars {
    fn element_count(&self) -> usize {
        self.rects.len()
    }

    fn set_element_height(&mut self, element: usize, value: f32) {
        if let Some(h) = self.heights.get_mut(element) {
            *h = value;
        }
    }

    fn set_element_magnitude(&mut self, element: usize, magnitude: u8) {
        if let Some(m) = self.magnitudes.get_mut(element) {
            *m = magnitude;
        }
    }

    fn present(&mut self) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.set_fill_style_str(&self.background);
        self.ctx.fill_rect(0.0, 0.0, w, h);
        for ((rect, bar_h), v) in self.rects.iter().zip(&self.heights).zip(&self.magnitudes) {
            let [r, g, b] = bar_2d_color(*v);
            self.ctx.set_fill_style_str(&format!("rgb({}, {}, {})", r, g, b));
            self.ctx.fill_rect(
                rect.x as f64,
                h - *bar_h as f64,
                rect.width as f64,
                *bar_h as f64,
            );
        }
        // Relayout lazily after the canvas backing store changed size.
        if self.canvas.width() != self.laid_out_width {
            self.relayout();
        }
    }
}

fn css_rgb(c: [f32; 3]) -> String {
    let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("rgb({}, {}, {})", to_u8(c[0]), to_u8(c[1]), to_u8(c[2]))
}
