//! "See all / show fewer" state for long lists.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealToggle {
    expanded: bool,
    collapsed_len: usize,
}

impl RevealToggle {
    pub fn new(collapsed_len: usize) -> Self {
        Self {
            expanded: false,
            collapsed_len,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Leading slice to render; never reorders.
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        if self.expanded {
            items
        } else {
            &items[..items.len().min(self.collapsed_len)]
        }
    }

    /// Whether the toggle button is worth showing at all.
    pub fn has_hidden(&self, total: usize) -> bool {
        total > self.collapsed_len
    }

    /// Flip the state. When collapsing, returns the scroll offset to restore:
    /// the offset before the toggle minus an estimate of the height that just
    /// disappeared (`hidden entries × per_entry_px`), never above the page top.
    pub fn toggle(&mut self, total: usize, scroll_y: f64, per_entry_px: f64) -> Option<f64> {
        let collapsing = self.expanded;
        self.expanded = !self.expanded;
        if !collapsing {
            return None;
        }
        let hidden = total.saturating_sub(self.collapsed_len) as f64;
        Some((scroll_y - hidden * per_entry_px).max(0.0))
    }
}
