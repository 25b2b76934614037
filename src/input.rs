use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use anyhow::{Context, Result};
use log::{debug, info};

use crate::{
    maze::{Grid, Position},
    Endpoint, Error,
};

/// A parsed maze together with validated start and end positions.
#[derive(Debug)]
pub struct MazeInput {
    pub grid: Grid,
    pub start: Position,
    pub end: Position,
}

pub fn read_maze<P: AsRef<Path>>(path: P) -> Result<MazeInput> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    read_maze_from(BufReader::new(file)).with_context(|| {
        format!(
            "Failed to read maze from given file({}).",
            path.as_ref().display()
        )
    })
}

pub fn read_maze_from<R: BufRead>(reader: R) -> Result<MazeInput> {
    let lines = reader
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("Failed to read lines of maze.")?;

    Ok(parse_maze(lines.iter().map(String::as_str))?)
}

/// Parse the line protocol: `rows cols`, `rows` lines of cells, then the
/// start and end lines as `row col`.
pub fn parse_maze<'a, I: IntoIterator<Item = &'a str>>(lines: I) -> Result<MazeInput, Error> {
    let mut lines = lines.into_iter();
    let dims_text = lines.next().unwrap_or_default();
    let (row_n, col_n) = parse_int_pair(dims_text)
        .ok_or_else(|| Error::MalformedDimensions(dims_text.trim().to_string()))?;
    if row_n <= 0 || col_n <= 0 {
        return Err(Error::InvalidDimensions(row_n, col_n));
    }

    let mut cells = Vec::new();
    for row in 1..=row_n as usize {
        let line = lines.next().ok_or(Error::MissingGridRow(row))?;
        let fields = line.split_whitespace().collect::<Vec<_>>();
        if fields.len() != col_n as usize {
            return Err(Error::InvalidGridShape {
                row,
                expect: col_n as usize,
                given: fields.len(),
            });
        }

        for field in fields {
            let value = field.parse::<i64>().map_err(|_| Error::InvalidCellText {
                row,
                text: field.to_string(),
            })?;
            if !(0..=Grid::MAX_CELL_VALUE).contains(&value) {
                return Err(Error::InvalidCellValue { row, value });
            }
            cells.push(value);
        }
    }
    let grid = Grid::new(row_n, col_n, &cells)?;
    debug!("Read {}x{} maze:\n{}", row_n, col_n, grid);

    let start = parse_point(lines.next(), Endpoint::Start)?;
    let end = parse_point(lines.next(), Endpoint::End)?;
    for (endpoint, pos) in [(Endpoint::Start, start), (Endpoint::End, end)] {
        if !grid.is_passable(&pos) {
            return Err(Error::InvalidCoordinate(endpoint, pos));
        }
    }
    info!("Searching {}x{} maze from {} to {}.", row_n, col_n, start, end);

    Ok(MazeInput { grid, start, end })
}

fn parse_point(line: Option<&str>, endpoint: Endpoint) -> Result<Position, Error> {
    line.and_then(parse_int_pair)
        .and_then(|(r, c)| {
            Some(Position::new(
                isize::try_from(r).ok()?,
                isize::try_from(c).ok()?,
            ))
        })
        .ok_or(Error::MalformedPoint(endpoint))
}

fn parse_int_pair(text: &str) -> Option<(i64, i64)> {
    let mut fields = text.split_whitespace();
    let first = fields.next()?.parse().ok()?;
    let second = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }

    Some((first, second))
}
