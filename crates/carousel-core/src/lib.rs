pub mod carousel;
pub mod color;
pub mod config;
pub mod error;
pub mod mapper;
pub mod page_control;
pub mod progress;
pub mod scroll;

pub use carousel::{AutoscrollTimer, CarouselController, CarouselState, SlotFrame};
pub use color::Color;
pub use config::{AppConfig, CarouselConfig, EasingType, PageControlConfig, ScrollConfig};
pub use error::{Error, Result};
pub use mapper::LoopIndexMapper;
pub use page_control::{PageControlInput, PageControlUpdate, ProgressPageControl};
pub use progress::{Direction, ProgressEvent, ScrollProgressTracker};
