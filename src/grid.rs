//! A rectangular grid addressed by `(x, y)`.
//!
//! Cells are stored row by row in a single `Vec`, so a board of any
//! `width × height` fits as long as the product does not overflow `usize`.
//! All accessors are bounds checked and report [`GridError`] instead of
//! panicking.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use thiserror::Error;

/// Errors returned by grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// Column or row index is outside `[0..width) × [0..height)`.
    #[error("({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// Offsets of the eight cells surrounding a cell (Moore neighbourhood).
const NEIGHBOR_DELTAS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A `width × height` grid of `T`.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `value`.
    ///
    /// The caller guarantees `width * height` does not overflow.
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Grid {
            width,
            height,
            cells: vec![value; width * height],
        }
    }
}

impl<T> Grid<T> {
    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true for a grid without cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns true if `(x, y)` lies on the grid.
    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if self.contains(x, y) {
            Ok(y * self.width + x)
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Shared reference to the cell at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<&T, GridError> {
        let idx = self.index(x, y)?;
        Ok(&self.cells[idx])
    }

    /// Mutable reference to the cell at `(x, y)`.
    pub fn get_mut(&mut self, x: usize, y: usize) -> Result<&mut T, GridError> {
        let idx = self.index(x, y)?;
        Ok(&mut self.cells[idx])
    }

    /// Overwrite the cell at `(x, y)`, returning the previous value.
    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<T, GridError> {
        let cell = self.get_mut(x, y)?;
        Ok(core::mem::replace(cell, value))
    }

    /// Map a flat storage index back to `(x, y)`.
    pub fn coords_of(&self, index: usize) -> Option<(usize, usize)> {
        if index < self.cells.len() {
            Some((index % self.width, index / self.width))
        } else {
            None
        }
    }

    /// Iterate over `((x, y), &cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| ((i % width, i / width), cell))
    }

    /// Bounds-clipped neighbours of `(x, y)`, excluding the cell itself.
    pub fn neighbors(&self, x: usize, y: usize) -> Neighbors {
        Neighbors {
            center: (x, y),
            bounds: (self.width, self.height),
            next: 0,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{} {{", self.width, self.height)?;
        for row in self.cells.chunks(self.width.max(1)) {
            writeln!(f, "  {:?}", row)?;
        }
        write!(f, "}}")
    }
}

/// Iterator over the in-bounds neighbours of a cell.
#[derive(Debug, Clone)]
pub struct Neighbors {
    center: (usize, usize),
    bounds: (usize, usize),
    next: usize,
}

impl Iterator for Neighbors {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&(dx, dy)) = NEIGHBOR_DELTAS.get(self.next) {
            self.next += 1;
            let x = self.center.0.checked_add_signed(dx);
            let y = self.center.1.checked_add_signed(dy);
            if let (Some(x), Some(y)) = (x, y) {
                if x < self.bounds.0 && y < self.bounds.1 {
                    return Some((x, y));
                }
            }
        }
        None
    }
}
