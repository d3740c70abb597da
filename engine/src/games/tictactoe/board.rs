use std::fmt;
use std::str::FromStr;

use super::error::{BoardParseError, InvalidMove};
use super::types::{BOARD_SIZE, Cell, Player};

/// 3x3 grid in row-major order: row = index / 3, column = index % 3.
///
/// Boards are small `Copy` values. A move produces a new board, so hypothetical
/// boards explored by the bots never alias the session's live board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// False for out-of-range indices as well as occupied cells.
    pub fn is_cell_empty(&self, index: usize) -> bool {
        self.cell(index) == Some(Cell::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn with_move(&self, index: usize, player: Player) -> Result<Board, InvalidMove> {
        match self.cell(index) {
            None => Err(InvalidMove::OutOfRange { index }),
            Some(Cell::Empty) => {
                let mut next = *self;
                next.cells[index] = player.mark();
                Ok(next)
            }
            Some(_) => Err(InvalidMove::Occupied { index }),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(3).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            let symbols: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            write!(f, "{}", symbols.join(" "))?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(BOARD_SIZE);
        for character in s.chars() {
            if character.is_whitespace() || character == '|' {
                continue;
            }
            let cell = match character {
                'X' | 'x' => Cell::X,
                'O' | 'o' => Cell::O,
                '.' | '-' | '_' => Cell::Empty,
                _ => {
                    return Err(BoardParseError::InvalidCharacter {
                        character,
                        position: cells.len(),
                    });
                }
            };
            cells.push(cell);
        }

        let got = cells.len();
        let cells: [Cell; BOARD_SIZE] = cells
            .try_into()
            .map_err(|_| BoardParseError::WrongCellCount { got })?;
        Ok(Board::from_cells(cells))
    }
}
