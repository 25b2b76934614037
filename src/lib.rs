use std::{
    error,
    fmt::Display,
    io::{self, Write},
    path::PathBuf,
};

use clap::Parser;

pub mod input;
pub mod maze;
pub mod path;

pub use input::{parse_maze, read_maze, read_maze_from, MazeInput};
pub use maze::{Direction, Grid, Position};
pub use path::shortest_path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::End => write!(f, "end"),
        }
    }
}

#[derive(Debug)]
pub enum Error {
    MalformedDimensions(String), // Text of the dimension line
    InvalidDimensions(i64, i64), // (row number, column number)
    MissingGridRow(usize),
    InvalidGridShape {
        row: usize,
        expect: usize,
        given: usize,
    },
    InvalidCellText {
        row: usize,
        text: String,
    },
    InvalidCellValue {
        row: usize,
        value: i64,
    },
    MalformedPoint(Endpoint),
    InvalidCoordinate(Endpoint, Position),
    NoPathExists(Position, Position), // (start, end)
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MalformedDimensions(text) => write!(
                f,
                "Expect two integers for maze dimensions, given \"{}\".",
                text
            ),
            Error::InvalidDimensions(row_n, col_n) => write!(
                f,
                "Maze dimensions must be positive, given {}x{}.",
                row_n, col_n
            ),
            Error::MissingGridRow(row) => write!(f, "Missing row {} of maze.", row),
            Error::InvalidGridShape { row, expect, given } => write!(
                f,
                "Expect {} cell(s) in row {}, given {}.",
                expect, row, given
            ),
            Error::InvalidCellText { row, text } => {
                write!(f, "Invalid cell text({}) in row {}.", text, row)
            }
            Error::InvalidCellValue { row, value } => write!(
                f,
                "Cell value({}) in row {} is out of range 0-{}.",
                value,
                row,
                Grid::MAX_CELL_VALUE
            ),
            Error::MalformedPoint(endpoint) => {
                write!(f, "Expect two integers for {} point.", endpoint)
            }
            Error::InvalidCoordinate(endpoint, pos) => write!(
                f,
                "The {} point {} is outside the maze or on a wall.",
                endpoint, pos
            ),
            Error::NoPathExists(start, end) => {
                write!(f, "There's no path from {} to {}.", start, end)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    /// Maze file to read, standard input if absent.
    pub input_path: Option<PathBuf>,
    /// Log search progress at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Write one `row col` line per position, then a terminating `.` line.
pub fn write_path<W: Write>(path: &[Position], mut writer: W) -> io::Result<()> {
    for pos in path {
        writeln!(writer, "{} {}", pos.r(), pos.c())?;
    }
    writeln!(writer, ".")?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_path_with_terminator() {
        let mut out = Vec::new();
        write_path(&[Position::new(0, 0), Position::new(0, 1)], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0 0\n0 1\n.\n");
    }

    #[test]
    fn error_messages_carry_context() {
        let err = Error::InvalidCoordinate(Endpoint::End, Position::new(3, -1));
        assert_eq!(
            err.to_string(),
            "The end point (3, -1) is outside the maze or on a wall."
        );
        let err = Error::InvalidGridShape {
            row: 2,
            expect: 4,
            given: 3,
        };
        assert_eq!(err.to_string(), "Expect 4 cell(s) in row 2, given 3.");
    }
}
