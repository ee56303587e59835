//! Core globe module - pure, deterministic, and testable
//!
//! This module contains the projection math and the data it operates on.
//! It has **zero dependencies** on terminals, input devices, or the filesystem, making it:
//!
//! - **Deterministic**: the same `(Texture, RotationState)` always yields the same frame
//! - **Testable**: every projection edge case (poles, wraparound, culling) is unit-testable
//! - **Fast**: the per-cell hot path does no allocation and no I/O
//!
//! # Module Structure
//!
//! - [`texture`]: validated, immutable equirectangular character map
//! - [`rotation`]: yaw/pitch state and the keystroke transition table
//! - [`projector`]: screen cell → visible hemisphere → inverse rotation → texel
//!
//! # Example
//!
//! ```
//! use tui_globe_core::{Projector, RotationState, ScreenGeometry, Texture};
//!
//! let texture = Texture::parse("ABCD\nEFGH\n").unwrap();
//! let geometry = ScreenGeometry::new(8, 4, 0.9);
//! let projector = Projector::new(geometry, RotationState::default());
//!
//! // Centre of the screen looks straight at the middle of the map.
//! let texel = projector
//!     .project(4, 2, texture.width(), texture.height())
//!     .unwrap();
//! assert_eq!((texel.x, texel.y), (2, 1));
//!
//! // Corners fall outside the globe disc.
//! assert!(projector.project(0, 0, texture.width(), texture.height()).is_none());
//! ```

pub mod projector;
pub mod rotation;
pub mod texture;

pub use tui_globe_types as types;

// Re-export commonly used types for convenience
pub use projector::{inverse_rotate, lat_lon_to_texel, to_lat_lon, Projector, ScreenGeometry, TexCoord};
pub use rotation::RotationState;
pub use texture::{Texture, TextureError};
