/// A grid coordinate. Signed so that a step off the edge stays representable.
pub type Cell = (i16, i16);

/// Static playing field: a `width` x `height` rectangle whose outer ring is wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: i16,
    height: i16,
}

impl Grid {
    pub fn new(width: i16, height: i16) -> Self {
        Grid { width, height }
    }

    pub fn width(&self) -> i16 {
        self.width
    }

    pub fn height(&self) -> i16 {
        self.height
    }

    pub fn in_bounds(&self, (x, y): Cell) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    pub fn is_wall(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.is_interior(cell)
    }

    /// Strictly inside the wall ring, i.e. a cell the snake may occupy.
    pub fn is_interior(&self, (x, y): Cell) -> bool {
        (1..self.width - 1).contains(&x) && (1..self.height - 1).contains(&y)
    }

    pub fn interior_cells(&self) -> impl Iterator<Item = Cell> {
        let (w, h) = (self.width, self.height);
        (1..h - 1).flat_map(move |y| (1..w - 1).map(move |x| (x, y)))
    }
}
