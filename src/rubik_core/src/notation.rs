//! Move notation: quarter turns, notation tokens, and algorithms.
//!
//! Parsing is lenient. A token is a face letter (either case)
//! with an optional `'`, `2`, `2'`, or `'2` modifier, and it must be followed
//! by whitespace, the end of the input, or the next face letter. Input that
//! does not form a token is skipped without error, so `"X R @ U1 F"` parses
//! to `R F`.

use std::{convert::Infallible, fmt, ops::Deref, str::FromStr};

use itertools::Itertools;
use log::{debug, warn};
use pest::{Parser, iterators::Pair};
use pest_derive::Parser;

use crate::state::Face;

#[derive(Parser)]
#[grammar = "notation.pest"]
struct NotationParser;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

/// A single quarter turn of one face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Turn {
    pub face: Face,
    pub direction: Direction,
}

/// One notation token such as `R`, `U'`, or `F2`. Half turns are kept as a
/// count of quarter turns so that every rotation stays a quarter turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Token {
    pub face: Face,
    pub direction: Direction,
    pub count: u8,
}

/// An ordered sequence of quarter turns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Algorithm(Vec<Turn>);

impl Direction {
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    #[must_use]
    pub fn is_clockwise(self) -> bool {
        self == Direction::Clockwise
    }

    fn suffix(self) -> &'static str {
        match self {
            Direction::Clockwise => "",
            Direction::CounterClockwise => "'",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Clockwise => write!(f, "clockwise"),
            Direction::CounterClockwise => write!(f, "counter-clockwise"),
        }
    }
}

impl Turn {
    #[must_use]
    pub fn new(face: Face, direction: Direction) -> Self {
        Self { face, direction }
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            face: self.face,
            direction: self.direction.inverse(),
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.direction.suffix())
    }
}

impl Token {
    /// Expand the token into its quarter turns.
    pub fn turns(self) -> impl Iterator<Item = Turn> {
        std::iter::repeat_n(Turn::new(self.face, self.direction), usize::from(self.count))
    }

    fn from_pair(pair: Pair<'_, Rule>) -> Option<Self> {
        let mut inner = pair.into_inner();
        let face = inner.next()?.as_str().parse::<Face>().ok()?;
        let (direction, count) = match inner.next().map_or("", |modifier| modifier.as_str()) {
            "" => (Direction::Clockwise, 1),
            "'" => (Direction::CounterClockwise, 1),
            "2" => (Direction::Clockwise, 2),
            "2'" | "'2" => (Direction::CounterClockwise, 2),
            _ => return None,
        };
        Some(Token {
            face,
            direction,
            count,
        })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face)?;
        if self.count == 2 {
            write!(f, "2")?;
        }
        write!(f, "{}", self.direction.suffix())
    }
}

/// Scan `input` for notation tokens, left to right.
#[must_use]
pub fn parse_tokens(input: &str) -> Vec<Token> {
    let pairs = match NotationParser::parse(Rule::algorithm, input) {
        Ok(pairs) => pairs,
        Err(e) => {
            // The grammar accepts any input, so this is not expected to happen
            warn!("Could not scan move notation {input:?}: {e}");
            return Vec::new();
        }
    };

    pairs
        .flatten()
        .filter(|pair| pair.as_rule() == Rule::token)
        .filter_map(Token::from_pair)
        .collect()
}

/// Parse `input` into quarter turns, skipping anything that is not a move.
#[must_use]
pub fn parse(input: &str) -> Algorithm {
    let tokens = parse_tokens(input);
    let algorithm: Algorithm = tokens.iter().copied().flat_map(Token::turns).collect();
    debug!(
        "Parsed {} tokens into {} quarter turns from {input:?}",
        tokens.len(),
        algorithm.len()
    );
    algorithm
}

impl Algorithm {
    #[must_use]
    pub fn new(turns: Vec<Turn>) -> Self {
        Self(turns)
    }

    #[must_use]
    pub fn parse(input: &str) -> Self {
        parse(input)
    }

    /// The algorithm that undoes this one.
    #[must_use]
    pub fn inverse(&self) -> Self {
        self.0.iter().rev().map(|turn| turn.inverse()).collect()
    }

    #[must_use]
    pub fn into_turns(self) -> Vec<Turn> {
        self.0
    }
}

impl Deref for Algorithm {
    type Target = [Turn];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<Turn> for Algorithm {
    fn from_iter<I: IntoIterator<Item = Turn>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Algorithm {
    type Item = &'a Turn;
    type IntoIter = std::slice::Iter<'a, Turn>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromStr for Algorithm {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse(s))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}
