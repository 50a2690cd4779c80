//! Mapping between logical pages and loop-padded slots
//!
//! The padded range holds N + 2 slots: slot 0 mirrors the last item, slots
//! 1..=N hold the items in order and slot N + 1 mirrors the first item.

/// Pure index arithmetic for a carousel of `count` logical items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoopIndexMapper {
    count: usize,
}

impl LoopIndexMapper {
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    /// Number of logical items (N)
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Length of the padded range: N + 2, or 0 without items
    #[inline]
    pub fn slot_count(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.count + 2
        }
    }

    /// Clamp a possibly out-of-range page into [0, N-1]
    pub fn clamp_page(&self, page: usize) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(page.min(self.count - 1))
        }
    }

    /// Padded slot showing `page`
    pub fn to_slot(&self, page: usize) -> Option<usize> {
        self.clamp_page(page).map(|page| page + 1)
    }

    /// Logical page of a real slot; phantoms and out-of-range slots give None
    pub fn to_logical(&self, slot: usize) -> Option<usize> {
        if slot >= 1 && slot <= self.count {
            Some(slot - 1)
        } else {
            None
        }
    }

    /// Item mirrored by any slot of the padded range, phantoms included
    pub fn content_index(&self, slot: usize) -> Option<usize> {
        if slot >= self.slot_count() {
            return None;
        }
        Some((slot + self.count - 1) % self.count)
    }

    #[inline]
    pub fn is_leading_phantom(&self, slot: usize) -> bool {
        !self.is_empty() && slot == 0
    }

    #[inline]
    pub fn is_trailing_phantom(&self, slot: usize) -> bool {
        !self.is_empty() && slot == self.count + 1
    }

    #[inline]
    pub fn is_phantom(&self, slot: usize) -> bool {
        self.is_leading_phantom(slot) || self.is_trailing_phantom(slot)
    }

    /// Real slot showing the same item as a phantom
    pub fn wrap_target(&self, slot: usize) -> Option<usize> {
        if self.is_leading_phantom(slot) {
            Some(self.count)
        } else if self.is_trailing_phantom(slot) {
            Some(1)
        } else {
            None
        }
    }

    /// Every padded slot paired with the item it displays
    pub fn slots(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.slot_count()).filter_map(move |slot| Some((slot, self.content_index(slot)?)))
    }
}
