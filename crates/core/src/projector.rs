//! Screen cell → texture coordinate projection.
//!
//! Per cell:
//! 1. normalize the cell into centred screen space (character cells are ~2x taller than wide)
//! 2. cull cells outside the globe disc
//! 3. lift the cell onto the near hemisphere
//! 4. undo the viewing rotation (tilt first, then spin)
//! 5. convert to latitude/longitude and scale into the texture
//!
//! Everything here is total: every input produces a defined output, and every
//! returned [`TexCoord`] is in bounds for the texture size it was computed for.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::rotation::RotationState;

/// Fixed screen geometry for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenGeometry {
    pub width: u16,
    pub height: u16,
    /// Globe radius in normalized units (fraction of the screen height).
    pub radius: f64,
}

impl ScreenGeometry {
    pub fn new(width: u16, height: u16, radius: f64) -> Self {
        Self {
            width,
            height,
            radius,
        }
    }

    /// Map cell `(i, j)` into centred normalized coordinates.
    ///
    /// `y` spans `[-1, 1)` top to bottom; `x` is scaled by half the aspect ratio
    /// so a circle on screen stays round with typical 1:2 glyph cells.
    #[inline(always)]
    pub fn normalize(&self, i: u16, j: u16) -> (f64, f64) {
        let w = self.width as f64;
        let h = self.height as f64;
        let x = (2.0 * i as f64 / w - 1.0) * (w / h) * 0.5;
        let y = 2.0 * j as f64 / h - 1.0;
        (x, y)
    }

    /// Point on the viewer-facing hemisphere under cell `(i, j)`.
    ///
    /// `None` when the cell is on or outside the disc edge.
    #[inline(always)]
    pub fn surface_point(&self, i: u16, j: u16) -> Option<[f64; 3]> {
        let (x, y) = self.normalize(i, j);
        let r2 = self.radius * self.radius;
        let d2 = x * x + y * y;
        if d2 >= r2 {
            return None;
        }
        Some([x, y, (r2 - d2).sqrt()])
    }
}

/// A cell inside the texture: `x < width`, `y < height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TexCoord {
    pub x: usize,
    pub y: usize,
}

/// Undo the viewing rotation: tilt about the screen-horizontal axis, then spin about the vertical axis.
///
/// The order is fixed; swapping it couples tilt into spin.
#[inline(always)]
pub fn inverse_rotate(
    p: [f64; 3],
    (sin_pitch, cos_pitch): (f64, f64),
    (sin_yaw, cos_yaw): (f64, f64),
) -> [f64; 3] {
    let [x, y, z] = p;

    // Tilt.
    let y1 = y * cos_pitch - z * sin_pitch;
    let z1 = y * sin_pitch + z * cos_pitch;

    // Spin.
    let x2 = x * cos_yaw + z1 * sin_yaw;
    let z2 = -x * sin_yaw + z1 * cos_yaw;

    [x2, y1, z2]
}

/// Spherical coordinates `(lat, lon)` of a point on a sphere of `radius`.
///
/// `lat` is in `[-π/2, π/2]` (the asin argument is clamped against float overshoot at
/// the poles), `lon` is in `[-π, π]`.
#[inline(always)]
pub fn to_lat_lon(p: [f64; 3], radius: f64) -> (f64, f64) {
    let lat = (p[1] / radius).clamp(-1.0, 1.0).asin();
    let lon = p[0].atan2(p[2]);
    (lat, lon)
}

/// Scale `(lat, lon)` into a `width` x `height` equirectangular texture.
///
/// Longitude wraps (column `width` is column 0), latitude clamps to the first/last row.
/// Returns `None` only for a zero-sized texture.
#[inline(always)]
pub fn lat_lon_to_texel(lat: f64, lon: f64, width: usize, height: usize) -> Option<TexCoord> {
    if width == 0 || height == 0 {
        return None;
    }
    // Float → usize casts saturate (negative and NaN become 0).
    let x = (((lon + PI) / TAU) * width as f64) as usize % width;
    let y = ((((lat + FRAC_PI_2) / PI) * height as f64) as usize).min(height - 1);
    Some(TexCoord { x, y })
}

/// Per-frame projector: geometry plus the rotation's precomputed sines and cosines.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    geometry: ScreenGeometry,
    pitch: (f64, f64),
    yaw: (f64, f64),
}

impl Projector {
    pub fn new(geometry: ScreenGeometry, rotation: RotationState) -> Self {
        Self {
            geometry,
            pitch: rotation.pitch.sin_cos(),
            yaw: rotation.yaw.sin_cos(),
        }
    }

    pub fn geometry(&self) -> ScreenGeometry {
        self.geometry
    }

    /// Texture coordinate seen through cell `(i, j)`, or `None` for background.
    #[inline]
    pub fn project(&self, i: u16, j: u16, tex_width: usize, tex_height: usize) -> Option<TexCoord> {
        let p = self.geometry.surface_point(i, j)?;
        let p = inverse_rotate(p, self.pitch, self.yaw);
        let (lat, lon) = to_lat_lon(p, self.geometry.radius);
        lat_lon_to_texel(lat, lon, tex_width, tex_height)
    }
}
