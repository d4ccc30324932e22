//! In-memory list host and adapter for exercising swipe gestures without a
//! real widget tree.

use std::cell::RefCell;

use swipelist_foundation::{DismissHandler, ListHost, RowId, VisibleRow};
use swipelist_ui_graphics::{Point, Rect, Size};

/// A vertically scrolling list of equally sized rows.
///
/// Row views are recycled the way a real list recycles them: the [`RowId`]
/// of a row is its view slot, so after scrolling the same id can show a
/// different data-position.
pub struct FakeListHost {
    origin: Point,
    row_size: Size,
    viewport_height: f32,
    item_count: usize,
    scroll_offset: f32,
    first_visible: usize,
    rows: Vec<VisibleRow>,
}

impl FakeListHost {
    pub fn new(item_count: usize, row_size: Size, viewport_height: f32) -> Self {
        let mut host = Self {
            origin: Point::ZERO,
            row_size,
            viewport_height,
            item_count,
            scroll_offset: 0.0,
            first_visible: 0,
            rows: Vec::new(),
        };
        host.relayout();
        host
    }

    /// Places the list's top-left corner at `origin` on screen.
    pub fn at(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.scroll_to(self.scroll_offset);
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Scrolls to `offset` pixels from the top, clamped to the content.
    pub fn scroll_to(&mut self, offset: f32) {
        let content_height = self.item_count as f32 * self.row_size.height;
        let max_offset = (content_height - self.viewport_height).max(0.0);
        self.scroll_offset = offset.clamp(0.0, max_offset);
        self.relayout();
    }

    pub fn scroll_by(&mut self, delta: f32) {
        self.scroll_to(self.scroll_offset + delta);
    }

    /// Screen coordinates of the center of the `visible_index`-th visible row.
    pub fn row_center(&self, visible_index: usize) -> Option<Point> {
        self.rows.get(visible_index).map(|row| {
            let rect = row.hit_rect;
            self.origin + Point::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0)
        })
    }

    /// Row id currently showing `position`, if it is on screen.
    pub fn row_for_position(&self, position: usize) -> Option<RowId> {
        position
            .checked_sub(self.first_visible)
            .and_then(|index| self.rows.get(index))
            .map(|row| row.id)
    }

    fn slot_count(&self) -> usize {
        if self.row_size.height <= 0.0 {
            return 1;
        }
        (self.viewport_height / self.row_size.height).ceil() as usize + 1
    }

    fn relayout(&mut self) {
        self.rows.clear();
        let height = self.row_size.height;
        if height <= 0.0 || self.item_count == 0 {
            self.first_visible = 0;
            return;
        }
        let slots = self.slot_count();
        self.first_visible = (self.scroll_offset / height).floor() as usize;
        let mut position = self.first_visible;
        while position < self.item_count {
            let top = position as f32 * height - self.scroll_offset;
            if top >= self.viewport_height {
                break;
            }
            let slot = (position % slots) as u64;
            self.rows.push(VisibleRow::new(
                RowId(slot),
                Rect::new(0.0, top, self.row_size.width, height),
            ));
            position += 1;
        }
    }
}

impl ListHost for FakeListHost {
    fn location_on_screen(&self) -> Point {
        self.origin
    }

    fn visible_rows(&self) -> &[VisibleRow] {
        &self.rows
    }

    fn first_visible_position(&self) -> usize {
        self.first_visible
    }
}

/// Data source that removes items when the list dismisses them.
#[derive(Default)]
pub struct FakeAdapter {
    items: RefCell<Vec<String>>,
    dismissed: RefCell<Vec<usize>>,
}

impl FakeAdapter {
    pub fn new(items: impl IntoIterator<Item = String>) -> Self {
        Self {
            items: RefCell::new(items.into_iter().collect()),
            dismissed: RefCell::new(Vec::new()),
        }
    }

    /// `"Item 0"` through `"Item {count - 1}"`.
    pub fn numbered(count: usize) -> Self {
        Self::new((0..count).map(|i| format!("Item {i}")))
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    pub fn items(&self) -> Vec<String> {
        self.items.borrow().clone()
    }

    /// Positions reported by the list, in call order.
    pub fn dismissed(&self) -> Vec<usize> {
        self.dismissed.borrow().clone()
    }
}

impl DismissHandler for FakeAdapter {
    fn on_dismiss(&self, position: usize) {
        self.dismissed.borrow_mut().push(position);
        let mut items = self.items.borrow_mut();
        if position < items.len() {
            items.remove(position);
        }
    }
}
