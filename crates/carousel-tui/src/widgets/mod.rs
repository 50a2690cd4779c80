mod carousel;
mod page_control;
mod status_bar;

pub use carousel::CarouselWidget;
pub use page_control::PageControlWidget;
pub use status_bar::StatusBarWidget;
