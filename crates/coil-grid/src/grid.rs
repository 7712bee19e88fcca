//! Bounded rectangular grid with 4-connected neighbourhood.

use crate::error::GridError;
use crate::point::Point;
use smallvec::SmallVec;

/// A rectangular grid of `width * height` cells.
///
/// Cells are addressed by [`Point`] with `0 <= x < width` and
/// `0 <= y < height`, and by a row-major cell index `y * width + x`.
/// Neighbours are the four cardinal directions, bounds-checked (edge cells
/// have fewer neighbours, corners have two). Distance is Manhattan (L1).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
}

impl Grid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Maximum total cell count: cell indices travel as `u32`, so the
    /// product of the dimensions must fit as well.
    pub const MAX_CELLS: u32 = u32::MAX;

    /// Neighbour offsets, in the fixed order west, east, north, south.
    const OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

    /// Create a grid with `width * height` cells.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0,
    /// `Err(GridError::DimensionTooLarge)` if either exceeds
    /// [`Grid::MAX_DIM`], or `Err(GridError::TooManyCells)` if the total
    /// cell count exceeds [`Grid::MAX_CELLS`].
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        if width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        let cells = width as u64 * height as u64;
        if cells > Self::MAX_CELLS as u64 {
            return Err(GridError::TooManyCells {
                cells,
                max: Self::MAX_CELLS,
            });
        }
        Ok(Self { width, height })
    }

    /// The grid with both dimensions doubled.
    ///
    /// This is the full-resolution grid corresponding to a base grid.
    /// Returns `Err(GridError::DimensionTooLarge)` if a doubled dimension
    /// would exceed [`Grid::MAX_DIM`], or `Err(GridError::TooManyCells)` if
    /// the doubled grid would have more than [`Grid::MAX_CELLS`] cells.
    pub fn doubled(&self) -> Result<Self, GridError> {
        if self.width > Self::MAX_DIM / 2 {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: self.width,
                max: Self::MAX_DIM / 2,
            });
        }
        if self.height > Self::MAX_DIM / 2 {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: self.height,
                max: Self::MAX_DIM / 2,
            });
        }
        Self::new(self.width * 2, self.height * 2)
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether `p` lies within the grid bounds.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && (p.x as u32) < self.width && p.y >= 0 && (p.y as u32) < self.height
    }

    /// Row-major cell index of `p`, or `None` if out of bounds.
    pub fn index_of(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some(p.y as usize * self.width as usize + p.x as usize)
        } else {
            None
        }
    }

    /// The point at cell index `index`, or `None` if out of range.
    pub fn point_at(&self, index: usize) -> Option<Point> {
        if index < self.cell_count() {
            let w = self.width as usize;
            Some(Point::new((index % w) as i32, (index / w) as i32))
        } else {
            None
        }
    }

    /// The in-bounds 4-connected neighbours of `p`.
    ///
    /// Offsets are applied in the fixed order west, east, north, south, so
    /// the result order is deterministic.
    pub fn neighbours(&self, p: Point) -> SmallVec<[Point; 4]> {
        let mut result = SmallVec::new();
        for (dx, dy) in Self::OFFSETS {
            let n = p.offset(dx, dy);
            if self.contains(n) {
                result.push(n);
            }
        }
        result
    }

    /// The in-bounds 4-connected neighbours of the cell at `index`, as
    /// cell indices.
    pub fn neighbour_indices(&self, index: usize) -> SmallVec<[u32; 4]> {
        let Some(p) = self.point_at(index) else {
            return SmallVec::new();
        };
        self.neighbours(p)
            .into_iter()
            .map(|n| {
                // In bounds by construction.
                (n.y as u32) * self.width + (n.x as u32)
            })
            .collect()
    }
}
