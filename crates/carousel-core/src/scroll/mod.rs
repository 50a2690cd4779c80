//! Settle animation for the carousel surface
//!
//! ## Atoms
//! - `easing` - Pure easing curves mapping [0, 1] to [0, 1]
//! - `timing` - Progress and interpolation helpers driven by an injected clock
//!
//! ## Molecule
//! - `animation` - `OffsetAnimator`, which interpolates the surface offset
//!   toward a snap target frame by frame
//!
//! # Usage
//!
//! ```ignore
//! use std::time::Instant;
//! use carousel_core::scroll::OffsetAnimator;
//!
//! let mut animator = OffsetAnimator::new(config.scroll.clone());
//! animator.scroll_to(268.0, Instant::now());
//!
//! // In the main loop, once per frame
//! let offset = animator.update(Instant::now());
//! ```

pub mod easing;
pub mod timing;

pub mod animation;

pub use animation::{AnimationFrame, OffsetAnimator};
pub use crate::config::{EasingType, ScrollConfig};
