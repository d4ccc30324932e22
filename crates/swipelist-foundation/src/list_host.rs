//! Contract between the gesture tracker and the list widget hosting it.
//!
//! The tracker caches row *identity* between events and re-resolves geometry
//! from the host every time, so a hit test always reflects the current scroll
//! offset and layout.

use swipelist_ui_graphics::{Point, Rect};

/// Stable identity of a row view, assigned by the host.
///
/// Hosts recycle row views, so the same `RowId` may show different
/// data-positions over time; the data-position is resolved per hit test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub u64);

/// A row currently laid out on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleRow {
    pub id: RowId,
    /// Bounds relative to the list's top-left corner.
    pub hit_rect: Rect,
}

impl VisibleRow {
    pub const fn new(id: RowId, hit_rect: Rect) -> Self {
        Self { id, hit_rect }
    }
}

/// What the list widget exposes to the swipe tracker.
pub trait ListHost {
    /// Screen position of the list's top-left corner.
    fn location_on_screen(&self) -> Point;

    /// Rows currently on screen, in display order.
    fn visible_rows(&self) -> &[VisibleRow];

    /// Data-position of the first entry of [`visible_rows`](Self::visible_rows).
    fn first_visible_position(&self) -> usize;
}

/// Result of resolving a screen point to a row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowHit {
    pub row: RowId,
    /// Absolute index of the row within the data source.
    pub position: usize,
    /// Bounds of the row relative to the list.
    pub bounds: Rect,
}

/// Resolves a raw screen point to the first visible row containing it.
pub fn hit_test<H: ListHost + ?Sized>(host: &H, screen_point: Point) -> Option<RowHit> {
    let local = screen_point - host.location_on_screen();
    host.visible_rows()
        .iter()
        .enumerate()
        .find(|(_, row)| row.hit_rect.contains_point(local))
        .map(|(index, row)| RowHit {
            row: row.id,
            position: host.first_visible_position() + index,
            bounds: row.hit_rect,
        })
}
