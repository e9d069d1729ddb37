use log::{debug, info};
use rubik_core::{
    Cube, Direction, Face,
    rotation::{self, rotation_config},
    state::{FACELET_COUNT, Facelets},
    working,
};

pub const DIRECTIONS: [Direction; 2] = [Direction::Clockwise, Direction::CounterClockwise];

/// Outcome of checking one face turned in one direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationCheck {
    pub face: Face,
    pub direction: Direction,
    pub failures: Vec<String>,
}

impl RotationCheck {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Every facelet tagged with its own position.
fn labelled() -> Facelets<usize> {
    std::array::from_fn(|i| i)
}

fn check_rotation(face: Face, direction: Direction) -> RotationCheck {
    let mut failures = vec![];
    let start = labelled();

    let mut once = start;
    rotation::rotate(&mut once, face, direction);
    let moved = (0..FACELET_COUNT).filter(|&i| once[i] != i).count();
    if moved != 20 {
        failures.push(format!("moved {moved} facelets instead of 20"));
    }
    if once[face.offset() + 4] != face.offset() + 4 {
        failures.push("moved the center facelet".to_owned());
    }

    let mut facelets = once;
    for turns in 2..=4 {
        rotation::rotate(&mut facelets, face, direction);
        if (facelets == start) != (turns == 4) {
            failures.push(format!("returned to start after {turns} turns"));
        }
    }
    if facelets != start {
        failures.push("did not return to start after 4 turns".to_owned());
    }

    let mut undone = once;
    rotation::rotate(&mut undone, face, direction.inverse());
    if undone != start {
        failures.push("is not undone by the opposite turn".to_owned());
    }

    let mut cube = Cube::new();
    cube.rotate(face, direction);
    if cube.color_counts() != [9; 6] {
        failures.push(format!("changed color counts to {:?}", cube.color_counts()));
    }

    debug!(
        "{face:?} {direction} cycles {:?}: {} failures",
        rotation_config(face).cycle.map(|strip| strip.face),
        failures.len()
    );

    RotationCheck {
        face,
        direction,
        failures,
    }
}

/// Check every face in both directions.
pub fn check_rotations() -> Vec<RotationCheck> {
    info!(working!("Checking all face rotations"));
    Face::ALL
        .into_iter()
        .flat_map(|face| DIRECTIONS.map(|direction| check_rotation(face, direction)))
        .collect()
}
