//! Infinite-looping carousel
//!
//! The controller composes the progress tracker and the loop index mapper,
//! owns the scroll surface and the autoscroll schedule, and pushes page
//! updates to a [`PageControlInput`](crate::page_control::PageControlInput).

mod autoscroll;
mod controller;

pub use autoscroll::AutoscrollTimer;
pub use controller::{CarouselController, CarouselState, SlotFrame};
