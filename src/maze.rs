use std::fmt::Display;

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All moves in the order the search explores them.
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ];

        &ALL_DIRECTIONS
    }

    fn offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    r: isize,
    c: isize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: isize, c: isize) -> Self {
        Self { r, c }
    }

    pub fn r(&self) -> isize {
        self.r
    }

    pub fn c(&self) -> isize {
        self.c
    }

    pub fn neighbor(&self, dir: Direction) -> Self {
        let (dr, dc) = dir.offset();
        Self::new(self.r + dr, self.c + dc)
    }

    pub fn manhattan_dist(&self, other: &Position) -> usize {
        self.r.abs_diff(other.r) + self.c.abs_diff(other.c)
    }
}

/// Rectangular maze of cell values in `0..=9`, stored row by row.
///
/// A zero cell is a wall, anything else can be walked through. The value
/// carries no cost.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<u8>,
    row_n: usize,
    col_n: usize,
}

impl Grid {
    pub const MAX_CELL_VALUE: i64 = 9;

    pub fn new(row_n: i64, col_n: i64, cells: &[i64]) -> Result<Self, Error> {
        if row_n <= 0 || col_n <= 0 {
            return Err(Error::InvalidDimensions(row_n, col_n));
        }

        let (row_n, col_n) = (row_n as usize, col_n as usize);
        if row_n.checked_mul(col_n) != Some(cells.len()) {
            return Err(Error::InvalidGridShape {
                row: cells.len() / col_n + 1,
                expect: col_n,
                given: cells.len() % col_n,
            });
        }

        let cells = cells
            .iter()
            .enumerate()
            .map(|(ind, &value)| {
                if (0..=Self::MAX_CELL_VALUE).contains(&value) {
                    Ok(value as u8)
                } else {
                    Err(Error::InvalidCellValue {
                        row: ind / col_n + 1,
                        value,
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            cells,
            row_n,
            col_n,
        })
    }

    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn cell_n(&self) -> usize {
        self.cells.len()
    }

    pub fn cell(&self, pos: &Position) -> Option<u8> {
        self.pos_to_ind(pos).map(|ind| self.cells[ind])
    }

    pub fn is_passable(&self, pos: &Position) -> bool {
        self.cell(pos).is_some_and(|value| value != 0)
    }

    /// Index of `pos` into any row-major table sized like this grid.
    pub fn pos_to_ind(&self, pos: &Position) -> Option<usize> {
        if self.is_inside(pos) {
            Some(pos.r as usize * self.col_n + pos.c as usize)
        } else {
            None
        }
    }

    fn is_inside(&self, pos: &Position) -> bool {
        pos.r >= 0
            && pos.c >= 0
            && (pos.r as usize) < self.row_n
            && (pos.c as usize) < self.col_n
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.col_n) {
            let text = row
                .iter()
                .map(|value| value.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", text)?;
        }

        Ok(())
    }
}
