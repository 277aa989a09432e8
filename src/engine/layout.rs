//! Scene geometry: bounds, rectangles and the target grid layout

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Scene extent in surface-local pixels (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.size() / 2.0
    }

    /// Point lies inside the scene (edges inclusive)
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }

    /// Any part of the circle is still inside the scene
    pub fn overlaps_circle(&self, center: Vec2, radius: f32) -> bool {
        center.x + radius >= 0.0
            && center.x - radius <= self.width
            && center.y + radius >= 0.0
            && center.y - radius <= self.height
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.min.x && p.x <= max.x && p.y >= self.min.y && p.y <= max.y
    }
}

/// Square cells of the target grid, fitted and centred in the scene
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotLayout {
    cells: Vec<Rect>,
}

impl SlotLayout {
    /// Lay out `slot_count` cells in rows of `columns`, separated by `gap`.
    ///
    /// Cells are as large as possible while keeping them square. If the scene
    /// is too small to fit any cell the layout is empty.
    pub fn fit(bounds: Bounds, slot_count: usize, columns: usize, gap: f32) -> Self {
        if slot_count == 0 || columns == 0 {
            return Self::default();
        }
        let columns = columns.min(slot_count);
        let rows = slot_count.div_ceil(columns);

        let cell_w = (bounds.width - gap * (columns as f32 + 1.0)) / columns as f32;
        let cell_h = (bounds.height - gap * (rows as f32 + 1.0)) / rows as f32;
        let cell = cell_w.min(cell_h);
        if cell <= 0.0 {
            return Self::default();
        }

        let grid = Vec2::new(
            columns as f32 * cell + (columns as f32 - 1.0) * gap,
            rows as f32 * cell + (rows as f32 - 1.0) * gap,
        );
        let origin = bounds.center() - grid / 2.0;

        let cells = (0..slot_count)
            .map(|i| {
                let col = (i % columns) as f32;
                let row = (i / columns) as f32;
                Rect::new(
                    origin + Vec2::new(col * (cell + gap), row * (cell + gap)),
                    Vec2::splat(cell),
                )
            })
            .collect();

        Self { cells }
    }

    pub fn cells(&self) -> &[Rect] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn rect(&self, slot: usize) -> Option<Rect> {
        self.cells.get(slot).copied()
    }

    /// Slot under the point, if any (gaps belong to no slot)
    pub fn slot_at(&self, p: Vec2) -> Option<usize> {
        self.cells.iter().position(|cell| cell.contains(p))
    }
}
