//! GlobeView: composites a textured globe into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Projector, RotationState, ScreenGeometry, Texture};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BACKGROUND_CHAR, GLOBE_RADIUS, SCREEN_HEIGHT, SCREEN_WIDTH, STATUS_LINE};

/// Frame compositor for the globe.
pub struct GlobeView {
    geometry: ScreenGeometry,
    background: char,
    status: String,
    globe_style: CellStyle,
    background_style: CellStyle,
    status_style: CellStyle,
}

impl Default for GlobeView {
    fn default() -> Self {
        Self::new(ScreenGeometry::new(SCREEN_WIDTH, SCREEN_HEIGHT, GLOBE_RADIUS))
    }
}

impl GlobeView {
    pub fn new(geometry: ScreenGeometry) -> Self {
        Self {
            geometry,
            background: BACKGROUND_CHAR,
            status: STATUS_LINE.to_string(),
            globe_style: CellStyle {
                fg: Rgb::new(120, 200, 140),
                bg: Rgb::new(0, 0, 0),
                bold: false,
                },
            background_style: CellStyle::default(),
            status_style: CellStyle {
                fg: Rgb::new(255, 255, 255),
                bg: Rgb::new(0, 0, 0),
                bold: true,
                },
        }
    }

    pub fn with_background(mut self, ch: char) -> Self {
        self.background = ch;
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn geometry(&self) -> ScreenGeometry {
        self.geometry
    }

    /// Render one frame into an existing framebuffer.
    ///
    /// Every cell is rewritten, so nothing from the previous frame survives.
    /// This is the allocation-free hot path once `fb` has the screen size.
    pub fn render_into(&self, texture: &Texture, rotation: RotationState, fb: &mut FrameBuffer) {
        let ScreenGeometry { width, height, .. } = self.geometry;
        fb.resize(width, height);
        fb.clear(self.background_style.cell(self.background));

        let projector = Projector::new(self.geometry, rotation);
        let (tex_w, tex_h) = (texture.width(), texture.height());

        for j in 0..height {
            for i in 0..width {
                let Some(texel) = projector.project(i, j, tex_w, tex_h) else {
                    continue;
                };
                if let Some(ch) = texture.get(texel.x, texel.y) {
                    fb.put_char(i, j, ch, self.globe_style);
                }
            }
        }

        self.draw_status(fb);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, texture: &Texture, rotation: RotationState) -> FrameBuffer {
        let mut fb = FrameBuffer::new(self.geometry.width, self.geometry.height);
        self.render_into(texture, rotation, &mut fb);
        fb
    }

    fn draw_status(&self, fb: &mut FrameBuffer) {
        let Some(y) = fb.height().checked_sub(1) else {
            return;
        };
        let text_w = self.status.chars().count() as i32;
        // Floor division: a status wider than the screen is clipped evenly-ish on both sides.
        let x = (fb.width() as i32 - text_w).div_euclid(2);
        fb.put_str_clipped(x, y, &self.status, self.status_style);
    }
}
