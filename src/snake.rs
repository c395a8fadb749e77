use std::collections::VecDeque;

use crate::grid::Cell;
use Direction::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Left | Right)
    }

    /// True for the same direction and for its reversal.
    pub fn same_axis(&self, other: Direction) -> bool {
        self.is_horizontal() == other.is_horizontal()
    }

    pub fn offset(&self, (x, y): Cell) -> Cell {
        let (dx, dy) = self.delta();
        (x + dx, y + dy)
    }
}

/// The snake body, head at index 0 and tail at the back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Builds a straight snake of `size` cells whose head sits at `head`
    /// and whose body trails away from `direction`.
    pub fn new(head: Cell, size: i16, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();

        let body = (0..size.max(1))
            .map(|i| (head.0 - dx * i, head.1 - dy * i))
            .collect();
        Snake { body }
    }

    /// Builds a snake from explicit cells, head first. Returns `None` for an
    /// empty body or one that overlaps itself.
    pub fn from_cells(cells: &[Cell]) -> Option<Self> {
        let distinct = cells.iter().enumerate().all(|(i, c)| !cells[..i].contains(c));
        if cells.is_empty() || !distinct {
            return None;
        }

        Some(Snake { body: cells.iter().copied().collect() })
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    // Never empty: both constructors guarantee at least one cell.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn body(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.body.iter()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Adds a new head and keeps the tail (eating).
    pub fn grow_front(&mut self, cell: Cell) {
        self.body.push_front(cell);
    }

    /// Adds a new head and drops the tail, so the length stays the same.
    pub fn advance_front(&mut self, cell: Cell) {
        self.body.push_front(cell);
        self.body.pop_back();
    }

    pub fn head_char(direction: Direction) -> char {
        match direction {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}
