//! Table driven quarter turns.
//!
//! Every face turn is the same two step permutation: the four strips on the
//! neighbouring faces that touch the turning face shift one place around a
//! cycle, and the nine facelets of the turning face itself rotate in place.
//! What differs between faces is only which strips take part and which of
//! them have to be reversed as they move, and that lives in [`ROTATION_CONFIGS`].

use log::trace;

use crate::{
    notation::Direction,
    state::{self, Face, Facelets, STRIP_LEN, Strip},
};

/// The neighbour strips carried around by a clockwise turn of one face.
#[derive(Debug, Clone, Copy)]
pub struct RotationConfig {
    pub face: Face,
    /// A clockwise turn moves the contents of `cycle[i - 1]` into `cycle[i]`.
    pub cycle: [Strip; 4],
    /// Whether a strip arriving at `cycle[i]` during a clockwise turn is
    /// written in reverse order. Rows and columns run in opposite visual
    /// directions on some adjacent faces.
    pub reverse: [bool; 4],
}

const TOP_ROW: usize = 0;
const BOTTOM_ROW: usize = 2;
const LEFT_COL: usize = 0;
const RIGHT_COL: usize = 2;

/// Rotation geometry for every face, indexed by `Face as usize`.
pub static ROTATION_CONFIGS: [RotationConfig; 6] = {
    let configs = [
        RotationConfig {
            face: Face::Up,
            cycle: [
                Strip::row(Face::Front, TOP_ROW),
                Strip::row(Face::Left, TOP_ROW),
                Strip::row(Face::Back, TOP_ROW),
                Strip::row(Face::Right, TOP_ROW),
            ],
            reverse: [false, false, false, false],
        },
        RotationConfig {
            face: Face::Front,
            cycle: [
                Strip::row(Face::Up, BOTTOM_ROW),
                Strip::column(Face::Right, LEFT_COL),
                Strip::row(Face::Down, TOP_ROW),
                Strip::column(Face::Left, RIGHT_COL),
            ],
            reverse: [true, false, true, false],
        },
        RotationConfig {
            face: Face::Left,
            cycle: [
                Strip::column(Face::Up, LEFT_COL),
                Strip::column(Face::Front, LEFT_COL),
                Strip::column(Face::Down, LEFT_COL),
                Strip::column(Face::Back, RIGHT_COL),
            ],
            reverse: [true, false, false, true],
        },
        RotationConfig {
            face: Face::Back,
            cycle: [
                Strip::row(Face::Up, TOP_ROW),
                Strip::column(Face::Left, LEFT_COL),
                Strip::row(Face::Down, BOTTOM_ROW),
                Strip::column(Face::Right, RIGHT_COL),
            ],
            reverse: [false, true, false, true],
        },
        RotationConfig {
            face: Face::Right,
            cycle: [
                Strip::column(Face::Up, RIGHT_COL),
                Strip::column(Face::Back, LEFT_COL),
                Strip::column(Face::Down, RIGHT_COL),
                Strip::column(Face::Front, RIGHT_COL),
            ],
            reverse: [false, true, true, false],
        },
        RotationConfig {
            face: Face::Down,
            cycle: [
                Strip::row(Face::Front, BOTTOM_ROW),
                Strip::row(Face::Right, BOTTOM_ROW),
                Strip::row(Face::Back, BOTTOM_ROW),
                Strip::row(Face::Left, BOTTOM_ROW),
            ],
            reverse: [false, false, false, false],
        },
    ];

    let mut i = 0;
    while i < configs.len() {
        assert!(configs[i].face as usize == i);
        i += 1;
    }

    configs
};

#[must_use]
pub fn rotation_config(face: Face) -> &'static RotationConfig {
    &ROTATION_CONFIGS[face as usize]
}

fn reversed<T>(mut strip: [T; STRIP_LEN]) -> [T; STRIP_LEN] {
    strip.reverse();
    strip
}

/// Turn `face` a quarter turn in `direction`, in place.
pub fn rotate<T: Copy>(facelets: &mut Facelets<T>, face: Face, direction: Direction) {
    trace!("Rotating {face:?} {direction}");

    let config = rotation_config(face);

    // Every strip is read before any is written
    let snapshot = config.cycle.map(|strip| state::read_strip(facelets, strip));

    for (i, &strip) in config.cycle.iter().enumerate() {
        let values = match direction {
            Direction::Clockwise => {
                let prev = (i + 3) % 4;
                if config.reverse[i] {
                    reversed(snapshot[prev])
                } else {
                    snapshot[prev]
                }
            }
            Direction::CounterClockwise => {
                let next = (i + 1) % 4;
                if config.reverse[next] {
                    reversed(snapshot[next])
                } else {
                    snapshot[next]
                }
            }
        };
        state::write_strip(facelets, strip, values);
    }

    rotate_face_facelets(facelets, face, direction);
}

/// Rotate the 3x3 grid of the turning face itself. The center never moves.
fn rotate_face_facelets<T: Copy>(facelets: &mut Facelets<T>, face: Face, direction: Direction) {
    let left_col = state::column(facelets, face, LEFT_COL);
    let top_row = state::row(facelets, face, TOP_ROW);
    let right_col = state::column(facelets, face, RIGHT_COL);
    let bottom_row = state::row(facelets, face, BOTTOM_ROW);

    match direction {
        Direction::Clockwise => {
            state::set_row(facelets, face, TOP_ROW, reversed(left_col));
            state::set_column(facelets, face, RIGHT_COL, top_row);
            state::set_row(facelets, face, BOTTOM_ROW, reversed(right_col));
            state::set_column(facelets, face, LEFT_COL, bottom_row);
        }
        Direction::CounterClockwise => {
            state::set_row(facelets, face, TOP_ROW, right_col);
            state::set_column(facelets, face, RIGHT_COL, reversed(bottom_row));
            state::set_row(facelets, face, BOTTOM_ROW, left_col);
            state::set_column(facelets, face, LEFT_COL, reversed(top_row));
        }
    }
}
