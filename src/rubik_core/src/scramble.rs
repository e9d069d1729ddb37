//! Random move sequences for scrambling.

use fastrand::Rng;
use itertools::Itertools;
use log::debug;

use crate::state::Face;

const MODIFIERS: [&str; 3] = ["", "'", "2"];

/// Generate `length` random tokens, space separated. Faces and modifiers are
/// drawn uniformly, except that a face is never drawn twice in a row.
#[must_use]
pub fn generate(rng: &mut Rng, length: usize) -> String {
    let mut tokens = Vec::with_capacity(length);
    let mut last_face = None;

    for _ in 0..length {
        let candidates = Face::ALL
            .into_iter()
            .filter(|&face| Some(face) != last_face)
            .collect_vec();
        let face = candidates[rng.usize(..candidates.len())];
        let modifier = MODIFIERS[rng.usize(..MODIFIERS.len())];

        tokens.push(format!("{}{modifier}", face.letter()));
        last_face = Some(face);
    }

    let scramble = tokens.join(" ");
    debug!("Generated scramble of length {length}: {scramble}");
    scramble
}

/// [`generate`] with a freshly seeded generator.
#[must_use]
pub fn random(length: usize) -> String {
    generate(&mut Rng::new(), length)
}
