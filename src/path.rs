use std::collections::VecDeque;

use log::debug;

use crate::{
    maze::{Direction, Grid, Position},
    Error,
};

/// Find one of the shortest paths from `start` to `end`, both included.
///
/// Both endpoints are expected to be passable in `grid`. Among paths of equal
/// length the one found by exploring up, down, left, right first wins.
pub fn shortest_path(
    grid: &Grid,
    start: &Position,
    end: &Position,
) -> Result<Vec<Position>, Error> {
    let mut visited = vec![false; grid.cell_n()];
    let mut prev_positions: Vec<Option<Position>> = vec![None; grid.cell_n()];
    let Some(start_ind) = grid.pos_to_ind(start) else {
        return Err(Error::NoPathExists(*start, *end));
    };
    visited[start_ind] = true;

    let mut search_positions = VecDeque::from([*start]);
    let mut expanded_n = 0usize;
    while let Some(cur_pos) = search_positions.pop_front() {
        if cur_pos == *end {
            let path = reconstruct_path(grid, &prev_positions, start, end);
            debug!(
                "Found path of {} step(s) from {} to {} after expanding {} cell(s).",
                path.len() - 1,
                start,
                end,
                expanded_n
            );
            return Ok(path);
        }

        expanded_n += 1;
        for next_pos in Direction::all_dirs()
            .iter()
            .map(|dir| cur_pos.neighbor(*dir))
            .filter(|pos| grid.is_passable(pos))
        {
            let Some(next_ind) = grid.pos_to_ind(&next_pos) else {
                continue;
            };
            if !visited[next_ind] {
                visited[next_ind] = true;
                prev_positions[next_ind] = Some(cur_pos);
                search_positions.push_back(next_pos);
            }
        }
    }

    debug!(
        "No path from {} to {} after expanding {} cell(s).",
        start, end, expanded_n
    );
    Err(Error::NoPathExists(*start, *end))
}

fn reconstruct_path(
    grid: &Grid,
    prev_positions: &[Option<Position>],
    start: &Position,
    end: &Position,
) -> Vec<Position> {
    let mut path = vec![*end];
    let mut cur_pos = *end;
    while cur_pos != *start {
        match grid.pos_to_ind(&cur_pos).and_then(|ind| prev_positions[ind]) {
            Some(prev_pos) => {
                path.push(prev_pos);
                cur_pos = prev_pos;
            }
            None => break,
        }
    }
    path.reverse();

    path
}
