//! Breadth-first search across a grid maze, used to rank wizards with
//! different speeds by when they reach the exit.

use serde::Serialize;
use std::collections::VecDeque;
use std::str::FromStr;
use thiserror::Error;

/// Returned by [`find_shortest_path`] when the exit cannot be reached.
pub const UNREACHABLE: f64 = -1.0;

const WALL: char = '#';

/// Example labyrinth. Its `E` exit is sealed off from the `S` half by a wall row.
pub const EXAMPLE_GRID: &str = "\
##########
#S   #   #
#### # # #
#  # # # #
## # ### #
#        #
##########
#        #
# ###### #
#      E #
##########";

/// (row, column)
pub type Position = (usize, usize);

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MazeError {
    #[error("Grid is empty")]
    EmptyGrid,

    #[error("Position ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Speed must be a positive number, got {0}")]
    InvalidSpeed(f64),

    #[error("Invalid position '{0}', expected ROW,COL")]
    InvalidPosition(String),

    #[error("Invalid wizard '{0}', expected ROW,COL,SPEED")]
    InvalidWizard(String),
}

/// Rectangular grid of cells; `#` is a wall, anything else is open.
///
/// Short rows are padded with walls up to the widest row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<char>>,
    cols: usize,
}

impl FromStr for Grid {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.trim_end_matches('\r').chars().collect())
            .collect();
        let cols = cells.iter().map(Vec::len).max().unwrap_or(0);
        if cols == 0 {
            return Err(MazeError::EmptyGrid);
        }
        Ok(Self { cells, cols })
    }
}

impl Grid {
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn cell(&self, (row, col): Position) -> char {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(WALL)
    }

    pub fn is_open(&self, pos: Position) -> bool {
        self.cell(pos) != WALL
    }

    /// First cell holding `marker`, scanning row by row.
    pub fn find(&self, marker: char) -> Option<Position> {
        self.cells.iter().enumerate().find_map(|(row, cells)| {
            cells.iter().position(|&c| c == marker).map(|col| (row, col))
        })
    }

    fn check_bounds(&self, (row, col): Position) -> Result<(), MazeError> {
        if row >= self.rows() || col >= self.cols {
            return Err(MazeError::OutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols,
            });
        }
        Ok(())
    }

    fn neighbors(&self, (row, col): Position) -> impl Iterator<Item = Position> + '_ {
        let up = row.checked_sub(1).map(|r| (r, col));
        let down = Some((row + 1, col)).filter(|&(r, _)| r < self.rows());
        let left = col.checked_sub(1).map(|c| (row, c));
        let right = Some((row, col + 1)).filter(|&(_, c)| c < self.cols);
        [up, down, left, right]
            .into_iter()
            .flatten()
            .filter(|&p| self.is_open(p))
    }

    /// Number of 4-directional steps from `start` to `end`, if reachable.
    ///
    /// The start cell itself is not required to be open.
    pub fn shortest_distance(&self, start: Position, end: Position) -> Result<Option<usize>, MazeError> {
        self.check_bounds(start)?;
        self.check_bounds(end)?;

        let mut visited = vec![vec![false; self.cols]; self.rows()];
        let mut queue = VecDeque::new();
        visited[start.0][start.1] = true;
        queue.push_back((start, 0));

        while let Some((current, distance)) = queue.pop_front() {
            if current == end {
                return Ok(Some(distance));
            }
            for next in self.neighbors(current) {
                if !visited[next.0][next.1] {
                    visited[next.0][next.1] = true;
                    queue.push_back((next, distance + 1));
                }
            }
        }

        Ok(None)
    }
}

/// Steps to the exit divided by `speed`, or [`UNREACHABLE`].
pub fn find_shortest_path(grid: &Grid, start: Position, speed: f64, end: Position) -> Result<f64, MazeError> {
    if !(speed.is_finite() && speed > 0.0) {
        return Err(MazeError::InvalidSpeed(speed));
    }
    Ok(grid
        .shortest_distance(start, end)?
        .map_or(UNREACHABLE, |steps| steps as f64 / speed))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Wizard {
    pub position: Position,
    pub speed: f64,
}

impl FromStr for Wizard {
    type Err = MazeError;

    /// `ROW,COL,SPEED`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MazeError::InvalidWizard(s.to_string());
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [row, col, speed] = parts.as_slice() else {
            return Err(invalid());
        };
        Ok(Self {
            position: (row.parse().map_err(|_| invalid())?, col.parse().map_err(|_| invalid())?),
            speed: speed.parse().map_err(|_| invalid())?,
        })
    }
}

/// Parse `ROW,COL`.
pub fn parse_position(s: &str) -> Result<Position, MazeError> {
    let invalid = || MazeError::InvalidPosition(s.to_string());
    let (row, col) = s.split_once(',').ok_or_else(invalid)?;
    Ok((
        row.trim().parse().map_err(|_| invalid())?,
        col.trim().parse().map_err(|_| invalid())?,
    ))
}

/// Example wizards for [`EXAMPLE_GRID`].
pub fn example_wizards() -> Vec<Wizard> {
    vec![
        Wizard { position: (1, 1), speed: 2.0 },
        Wizard { position: (2, 1), speed: 3.0 },
        Wizard { position: (1, 2), speed: 1.0 },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ranking {
    /// Index into the input wizards.
    pub index: usize,
    pub wizard: Wizard,
    pub time: f64,
}

/// Arrival time of every wizard, in input order.
pub fn arrival_times(grid: &Grid, wizards: &[Wizard], exit: Position) -> Result<Vec<f64>, MazeError> {
    wizards
        .iter()
        .map(|w| find_shortest_path(grid, w.position, w.speed, exit))
        .collect()
}

/// The wizard with the earliest arrival; ties go to the earlier wizard.
///
/// The minimum is taken over reachable wizards only: an [`UNREACHABLE`]
/// result (−1) never counts as the fastest arrival.
pub fn fastest_wizard(grid: &Grid, wizards: &[Wizard], exit: Position) -> Result<Option<Ranking>, MazeError> {
    let times = arrival_times(grid, wizards, exit)?;

    let mut best: Option<Ranking> = None;
    for (index, (wizard, time)) in wizards.iter().zip(times).enumerate() {
        if time == UNREACHABLE {
            continue;
        }
        if best.map_or(true, |b| time < b.time) {
            best = Some(Ranking {
                index,
                wizard: *wizard,
                time,
            });
        }
    }

    Ok(best)
}
