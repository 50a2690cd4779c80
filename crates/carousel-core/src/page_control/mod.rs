//! Progress-based page indicator
//!
//! `layout` holds the pure rendering function, `control` the stateful
//! indicator that caches its last layout and receives updates through
//! [`PageControlInput`].

pub mod control;
pub mod layout;

use serde::{Deserialize, Serialize};

pub use control::ProgressPageControl;
pub use layout::{render, next_page, Dot, DotLayout, PageControlState, PageControlStyle, Size};

/// Capability the carousel uses to drive a page indicator
pub trait PageControlInput {
    /// Signed progress toward the neighbouring page, in [-1, 1]
    fn set_progress(&mut self, progress: f64);

    /// Logical page the carousel currently shows
    fn set_current_page(&mut self, page: usize);

    /// Number of logical pages
    fn set_number_of_pages(&mut self, count: usize);
}

impl<T: PageControlInput + ?Sized> PageControlInput for &mut T {
    fn set_progress(&mut self, progress: f64) {
        (**self).set_progress(progress);
    }

    fn set_current_page(&mut self, page: usize) {
        (**self).set_current_page(page);
    }

    fn set_number_of_pages(&mut self, count: usize) {
        (**self).set_number_of_pages(count);
    }
}

/// A single push received by a page indicator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PageControlUpdate {
    Progress(f64),
    CurrentPage(usize),
    NumberOfPages(usize),
}

/// Records every push in order
impl PageControlInput for Vec<PageControlUpdate> {
    fn set_progress(&mut self, progress: f64) {
        self.push(PageControlUpdate::Progress(progress));
    }

    fn set_current_page(&mut self, page: usize) {
        self.push(PageControlUpdate::CurrentPage(page));
    }

    fn set_number_of_pages(&mut self, count: usize) {
        self.push(PageControlUpdate::NumberOfPages(count));
    }
}
