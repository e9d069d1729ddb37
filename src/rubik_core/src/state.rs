//! The facelet vector and its face, row, and column accessors.
//!
//! A state is 54 facelets stored face by face in the order Up, Front, Left,
//! Back, Right, Down. Each face occupies nine consecutive entries in row major
//! order, as seen when looking straight at that face. The accessors here are
//! generic over the facelet type so the rotation machinery can run on colors
//! as well as on position labels.

use std::{fmt, str::FromStr};

use thiserror::Error;

pub const FACELET_COUNT: usize = 54;
pub const FACELETS_PER_FACE: usize = 9;
pub const STRIP_LEN: usize = 3;

/// A full cube worth of facelets in the canonical layout.
pub type Facelets<T> = [T; FACELET_COUNT];

/// The six faces, in storage order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Face {
    Up,
    Front,
    Left,
    Back,
    Right,
    Down,
}

/// The six facelet colors. The discriminant is the color index.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Blue,
    Red,
    Green,
    Orange,
    Yellow,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown face `{0}`, expected one of U, F, L, B, R, D")]
pub struct ParseFaceError(pub String);

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [Up, Front, Left, Back, Right, Down];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The index of this face's first facelet.
    #[must_use]
    pub const fn offset(self) -> usize {
        self as usize * FACELETS_PER_FACE
    }

    /// The color this face carries when the cube is solved.
    #[must_use]
    pub const fn solved_color(self) -> Color {
        Color::ALL[self as usize]
    }

    /// The notation letter for this face.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Front => 'F',
            Face::Left => 'L',
            Face::Back => 'B',
            Face::Right => 'R',
            Face::Down => 'D',
        }
    }
}

impl FromStr for Face {
    type Err = ParseFaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" | "u" => Ok(Face::Up),
            "F" | "f" => Ok(Face::Front),
            "L" | "l" => Ok(Face::Left),
            "B" | "b" => Ok(Face::Back),
            "R" | "r" => Ok(Face::Right),
            "D" | "d" => Ok(Face::Down),
            _ => Err(ParseFaceError(s.to_owned())),
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl Color {
    pub const ALL: [Self; 6] = {
        use Color::*;
        let v = [White, Blue, Red, Green, Orange, Yellow];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single letter abbreviation, used when printing nets.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Blue => 'B',
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Orange => 'O',
            Color::Yellow => 'Y',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StripKind {
    Row,
    Column,
}

/// Three facelets in a line on one face.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Strip {
    pub face: Face,
    pub kind: StripKind,
    pub index: usize,
}

impl Strip {
    #[must_use]
    pub const fn row(face: Face, index: usize) -> Self {
        Strip {
            face,
            kind: StripKind::Row,
            index,
        }
    }

    #[must_use]
    pub const fn column(face: Face, index: usize) -> Self {
        Strip {
            face,
            kind: StripKind::Column,
            index,
        }
    }
}

/// The solved facelet vector: every face filled with its own color.
#[must_use]
pub fn solved_facelets() -> Facelets<Color> {
    std::array::from_fn(|i| Face::ALL[i / FACELETS_PER_FACE].solved_color())
}

/// Read the nine facelets of `face` in row major order.
#[must_use]
pub fn face<T: Copy>(facelets: &Facelets<T>, face: Face) -> [T; FACELETS_PER_FACE] {
    let start = face.offset();
    std::array::from_fn(|i| facelets[start + i])
}

/// Read row `row` of `face`, left to right.
///
/// # Panics
///
/// Panics if `row` is not 0, 1, or 2.
#[must_use]
pub fn row<T: Copy>(facelets: &Facelets<T>, face: Face, row: usize) -> [T; STRIP_LEN] {
    assert!(row < STRIP_LEN, "Row index {row} out of range for face {face:?}");
    let start = face.offset() + row * STRIP_LEN;
    std::array::from_fn(|i| facelets[start + i])
}

/// Read column `col` of `face`, top to bottom.
///
/// # Panics
///
/// Panics if `col` is not 0, 1, or 2.
#[must_use]
pub fn column<T: Copy>(facelets: &Facelets<T>, face: Face, col: usize) -> [T; STRIP_LEN] {
    assert!(col < STRIP_LEN, "Column index {col} out of range for face {face:?}");
    let base = face.offset() + col;
    std::array::from_fn(|i| facelets[base + i * STRIP_LEN])
}

/// Write row `row` of `face`, left to right.
///
/// # Panics
///
/// Panics if `row` is not 0, 1, or 2.
pub fn set_row<T: Copy>(facelets: &mut Facelets<T>, face: Face, row: usize, values: [T; STRIP_LEN]) {
    assert!(row < STRIP_LEN, "Row index {row} out of range for face {face:?}");
    let start = face.offset() + row * STRIP_LEN;
    facelets[start..start + STRIP_LEN].copy_from_slice(&values);
}

/// Write column `col` of `face`, top to bottom.
///
/// # Panics
///
/// Panics if `col` is not 0, 1, or 2.
pub fn set_column<T: Copy>(
    facelets: &mut Facelets<T>,
    face: Face,
    col: usize,
    values: [T; STRIP_LEN],
) {
    assert!(col < STRIP_LEN, "Column index {col} out of range for face {face:?}");
    let base = face.offset() + col;
    for (i, value) in values.into_iter().enumerate() {
        facelets[base + i * STRIP_LEN] = value;
    }
}

#[must_use]
pub fn read_strip<T: Copy>(facelets: &Facelets<T>, strip: Strip) -> [T; STRIP_LEN] {
    match strip.kind {
        StripKind::Row => row(facelets, strip.face, strip.index),
        StripKind::Column => column(facelets, strip.face, strip.index),
    }
}

pub fn write_strip<T: Copy>(facelets: &mut Facelets<T>, strip: Strip, values: [T; STRIP_LEN]) {
    match strip.kind {
        StripKind::Row => set_row(facelets, strip.face, strip.index, values),
        StripKind::Column => set_column(facelets, strip.face, strip.index, values),
    }
}
