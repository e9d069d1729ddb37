//! A facelet model of the 3x3x3 Rubik's Cube: the 54 facelet state, the
//! table driven face rotations that act on it, and the move notation used to
//! describe sequences of rotations.

#![warn(clippy::pedantic)]

pub mod cube;
pub mod notation;
pub mod rotation;
pub mod scramble;
pub mod state;

pub use cube::{Cube, InvalidStateError};
pub use notation::{Algorithm, Direction, Token, Turn};
pub use state::{Color, Face, ParseFaceError};

#[macro_export]
macro_rules! start {
    ($msg:expr) => {
        concat!("⏳ ", $msg)
    };
}

#[macro_export]
macro_rules! working {
    ($msg:expr) => {
        concat!("🛠  ", $msg)
    };
}

#[macro_export]
macro_rules! success {
    ($msg:expr) => {
        concat!("✅ ", $msg)
    };
}
