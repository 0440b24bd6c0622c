use crate::config::GridSize;
use crate::snake::Position;

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Cell {
    Empty,
    Snake,
    Food,
}

/// Rectangular grid of cells in row-major order.
#[derive(Debug, Clone)]
pub struct Board {
    size: GridSize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a board of the given size with every cell empty.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.total_cells()],
        }
    }

    /// Returns the board dimensions.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the cell at `position`, or `None` when it lies outside
    /// the bounds.
    #[must_use]
    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.index(position).map(|index| self.cells[index])
    }

    /// Writes `cell` at `position`.
    ///
    /// Callers only write positions they have already bounds-checked,
    /// so an out-of-bounds write is a logic error.
    pub fn set(&mut self, position: Position, cell: Cell) {
        let index = self
            .index(position)
            .expect("board writes must stay inside the bounds");
        self.cells[index] = cell;
    }

    /// Collects every empty cell position in row-major order.
    #[must_use]
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| self.position_of(index))
            .collect()
    }

    /// Counts cells currently holding `cell`.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|candidate| **candidate == cell).count()
    }

    fn index(&self, position: Position) -> Option<usize> {
        if !position.is_within_bounds(self.size) {
            return None;
        }
        let row = usize::try_from(position.row).ok()?;
        let col = usize::try_from(position.col).ok()?;
        Some(row * usize::from(self.size.cols) + col)
    }

    fn position_of(&self, index: usize) -> Position {
        let cols = usize::from(self.size.cols);
        Position::new((index / cols) as i32, (index % cols) as i32)
    }
}
