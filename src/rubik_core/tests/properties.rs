use fastrand::Rng;
use itertools::Itertools;
use rubik_core::{
    Algorithm, Color, Cube, Direction, Face, Turn,
    notation::{parse, parse_tokens},
    scramble,
};

const DIRECTIONS: [Direction; 2] = [Direction::Clockwise, Direction::CounterClockwise];

fn random_turn(rng: &mut Rng) -> Turn {
    Turn::new(
        Face::ALL[rng.usize(..Face::ALL.len())],
        DIRECTIONS[rng.usize(..DIRECTIONS.len())],
    )
}

fn scrambled(seed: u64) -> Cube {
    let mut cube = Cube::new();
    cube.scramble(&mut Rng::with_seed(seed), 30);
    cube
}

#[test_log::test]
fn test_colors_are_conserved() {
    let mut rng = Rng::with_seed(2024);
    let mut cube = Cube::new();
    for _ in 0..1000 {
        cube.apply_turn(random_turn(&mut rng));
        assert_eq!(cube.color_counts(), [9; 6]);
    }
    // The multiset survives even though the cube is almost surely scrambled
    let sorted = cube.facelets().iter().copied().sorted().collect_vec();
    let solved = Cube::new().facelets().iter().copied().sorted().collect_vec();
    assert_eq!(sorted, solved);
}

#[test_log::test]
fn test_four_quarter_turns_are_identity() {
    for seed in 0..4 {
        let start = scrambled(seed);
        for face in Face::ALL {
            for direction in DIRECTIONS {
                let mut cube = start.clone();
                for _ in 0..4 {
                    cube.rotate(face, direction);
                }
                assert_eq!(cube, start, "{face:?} {direction}");
            }
        }
    }
}

#[test_log::test]
fn test_quarter_turns_have_order_exactly_four() {
    for face in Face::ALL {
        for direction in DIRECTIONS {
            let mut cube = Cube::new();
            for i in 1..=4 {
                cube.rotate(face, direction);
                assert_eq!(cube.is_solved(), i == 4, "{face:?} {direction} after {i} turns");
            }
        }
    }
}

#[test_log::test]
fn test_opposite_turns_cancel() {
    let start = scrambled(5);
    for face in Face::ALL {
        for direction in DIRECTIONS {
            let mut cube = start.clone();
            cube.rotate(face, direction);
            cube.rotate(face, direction.inverse());
            assert_eq!(cube, start, "{face:?} {direction}");
        }
    }
}

#[test_log::test]
fn test_any_single_turn_unsolves() {
    for face in Face::ALL {
        for direction in DIRECTIONS {
            let mut cube = Cube::new();
            cube.rotate(face, direction);
            assert!(!cube.is_solved(), "{face:?} {direction}");
        }
    }
}

#[test_log::test]
fn test_front_then_front_prime() {
    let mut cube = Cube::new();
    cube.apply_notation("F");
    assert!(!cube.is_solved());
    cube.apply_notation("F'");
    assert!(cube.is_solved());
}

#[test_log::test]
fn test_sexy_move_has_order_six() {
    let mut cube = Cube::new();
    for i in 1..=6 {
        cube.apply_notation("R U R' U'");
        assert_eq!(cube.is_solved(), i == 6, "after {i} repetitions");
    }
}

#[test_log::test]
fn test_r_f_has_order_105() {
    let algorithm = parse("R F");
    let mut cube = Cube::new();
    for _ in 0..104 {
        cube.apply(&algorithm);
        assert!(!cube.is_solved());
    }
    cube.apply(&algorithm);
    assert!(cube.is_solved());
}

#[test_log::test]
fn test_half_turns_are_self_inverse() {
    for face in Face::ALL {
        let mut cube = Cube::new();
        let notation = format!("{face}2 {face}2");
        assert_eq!(cube.apply_notation(&notation).len(), 4);
        assert!(cube.is_solved());
    }
}

#[test_log::test]
fn test_superflip_touches_only_edges() {
    let mut cube = Cube::new();
    cube.apply_notation("U R2 F B R B2 R U2 L B2 R U' D' R2 F R' L B2 U2 F2");
    assert!(!cube.is_solved());
    for face in Face::ALL {
        let colors = cube.face(face);
        // Corners and centers keep the face color, every edge is flipped away
        for i in [0, 2, 4, 6, 8] {
            assert_eq!(colors[i], face.solved_color(), "{face:?} facelet {i}");
        }
        for i in [1, 3, 5, 7] {
            assert_ne!(colors[i], face.solved_color(), "{face:?} facelet {i}");
        }
    }
}

#[test_log::test]
fn test_inverse_algorithm_restores() {
    for seed in 0..20 {
        let notation = scramble::generate(&mut Rng::with_seed(seed), 25);
        let algorithm = parse(&notation);
        let mut cube = Cube::new();
        cube.apply(&algorithm);
        cube.apply(&algorithm.inverse());
        assert!(cube.is_solved(), "{notation}");
    }
}

#[test_log::test]
fn test_parser_repetition_equivalences() {
    assert_eq!(parse("R2"), parse("R R"));
    assert_eq!(parse("R2'"), parse("R'2"));

    let mut a = Cube::new();
    a.apply_notation("R2 U2' F'2");
    let mut b = Cube::new();
    b.apply_notation("R R U' U' F' F'");
    assert_eq!(a, b);
}

#[test_log::test]
fn test_permissive_parsing() {
    let algorithm = parse("X R @ U1 F");
    assert_eq!(
        algorithm.into_turns(),
        vec![
            Turn::new(Face::Right, Direction::Clockwise),
            Turn::new(Face::Front, Direction::Clockwise),
        ]
    );

    for garbage in ["", "   ", "!!!", "1234", "xyz", "R3", "U''", "\u{1F600}", "R\u{e9}"] {
        let mut cube = Cube::new();
        cube.apply_notation(garbage);
        assert!(cube.is_solved(), "{garbage:?}");
    }
}

#[test_log::test]
fn test_noisy_input_applies_recognized_moves() {
    let mut noisy = Cube::new();
    noisy.apply_notation("(R) x2, then: u'");
    let mut clean = Cube::new();
    clean.apply_notation("U'");
    assert_eq!(noisy, clean);
}

#[test_log::test]
fn test_scramble_adjacency() {
    let mut rng = Rng::with_seed(31337);
    for length in 2..50 {
        let scramble = scramble::generate(&mut rng, length);
        let faces = parse_tokens(&scramble).iter().map(|token| token.face).collect_vec();
        assert_eq!(faces.len(), length);
        assert!(faces.iter().tuple_windows().all(|(a, b)| a != b), "{scramble}");
    }
}

#[test_log::test]
fn test_scrambled_state_round_trips_through_raw_facelets() {
    let cube = scrambled(77);
    let raw = *cube.facelets();
    assert_eq!(Cube::try_from(raw), Ok(cube));

    let mut broken = raw;
    broken[4] = if raw[4] == Color::White { Color::Blue } else { Color::White };
    assert!(Cube::try_from(broken).is_err());
}

#[test_log::test]
fn test_algorithm_display_round_trips() {
    let algorithm: Algorithm = "F2 B' L R2' D'2 U".parse().unwrap();
    assert_eq!(parse(&algorithm.to_string()), algorithm);
}
