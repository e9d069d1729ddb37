use std::fmt;

use fastrand::Rng;
use itertools::Itertools;
use log::debug;
use thiserror::Error;

use crate::{
    notation::{self, Algorithm, Direction, Turn},
    rotation, scramble,
    state::{self, Color, FACELETS_PER_FACE, Face, Facelets, STRIP_LEN},
};

pub const NET_ROWS: usize = 9;
pub const NET_COLS: usize = 12;

/// A cube in some state reachable from solved. Always holds exactly nine
/// facelets of each color.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    facelets: Facelets<Color>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidStateError {
    #[error("Expected {expected} {color:?} facelets but found {actual}")]
    ColorCount {
        color: Color,
        expected: usize,
        actual: usize,
    },
}

impl Cube {
    /// A solved cube.
    #[must_use]
    pub fn new() -> Self {
        Self {
            facelets: state::solved_facelets(),
        }
    }

    /// The 54 facelets in storage order.
    #[must_use]
    pub fn facelets(&self) -> &Facelets<Color> {
        &self.facelets
    }

    #[must_use]
    pub fn face(&self, face: Face) -> [Color; FACELETS_PER_FACE] {
        state::face(&self.facelets, face)
    }

    /// # Panics
    ///
    /// Panics if `row` is not 0, 1, or 2.
    #[must_use]
    pub fn row(&self, face: Face, row: usize) -> [Color; STRIP_LEN] {
        state::row(&self.facelets, face, row)
    }

    /// # Panics
    ///
    /// Panics if `col` is not 0, 1, or 2.
    #[must_use]
    pub fn column(&self, face: Face, col: usize) -> [Color; STRIP_LEN] {
        state::column(&self.facelets, face, col)
    }

    pub fn rotate(&mut self, face: Face, direction: Direction) {
        rotation::rotate(&mut self.facelets, face, direction);
    }

    pub fn apply_turn(&mut self, turn: Turn) {
        self.rotate(turn.face, turn.direction);
    }

    pub fn apply(&mut self, algorithm: &Algorithm) {
        for &turn in algorithm {
            self.apply_turn(turn);
        }
    }

    /// Parse `notation` and apply it, returning the quarter turns performed.
    pub fn apply_notation(&mut self, notation: &str) -> Algorithm {
        let algorithm = notation::parse(notation);
        self.apply(&algorithm);
        algorithm
    }

    /// Generate a scramble of `length` tokens and apply it. The returned
    /// string is exactly what was applied.
    pub fn scramble(&mut self, rng: &mut Rng, length: usize) -> String {
        let scramble = scramble::generate(rng, length);
        let algorithm = self.apply_notation(&scramble);
        debug!("Scrambled with {} quarter turns", algorithm.len());
        scramble
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.facelets == state::solved_facelets()
    }

    /// Number of facelets of each color, indexed by `Color as usize`.
    #[must_use]
    pub fn color_counts(&self) -> [usize; 6] {
        color_counts(&self.facelets)
    }

    /// Lay the facelets out as a cross shaped net: Up on top, then Left,
    /// Front, Right, Back in a band, then Down. Empty cells are `None`.
    #[must_use]
    pub fn net(&self) -> [[Option<Color>; NET_COLS]; NET_ROWS] {
        let mut grid = [[None; NET_COLS]; NET_ROWS];
        let placements = [
            (Face::Up, 0, 3),
            (Face::Left, 3, 0),
            (Face::Front, 3, 3),
            (Face::Right, 3, 6),
            (Face::Back, 3, 9),
            (Face::Down, 6, 3),
        ];

        for (face, top, left) in placements {
            for (i, color) in self.face(face).into_iter().enumerate() {
                grid[top + i / STRIP_LEN][left + i % STRIP_LEN] = Some(color);
            }
        }

        grid
    }
}

fn color_counts(facelets: &Facelets<Color>) -> [usize; 6] {
    let mut counts = [0; 6];
    for color in facelets {
        counts[color.index()] += 1;
    }
    counts
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Facelets<Color>> for Cube {
    type Error = InvalidStateError;

    fn try_from(facelets: Facelets<Color>) -> Result<Self, Self::Error> {
        let counts = color_counts(&facelets);
        if let Some(color) = Color::ALL
            .into_iter()
            .find(|color| counts[color.index()] != FACELETS_PER_FACE)
        {
            return Err(InvalidStateError::ColorCount {
                color,
                expected: FACELETS_PER_FACE,
                actual: counts[color.index()],
            });
        }
        Ok(Self { facelets })
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.net() {
            let line = row
                .iter()
                .map(|cell| cell.map_or(' ', Color::letter))
                .join(" ");
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
