// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
use echo_cardinal::{CompareMode, IntVec3, MatrixError, Orientation, SnapConfig};

const Q_LEFT: Orientation = Orientation::look_rotation_xyz(-1, 0, 0);
const Q_RIGHT: Orientation = Orientation::look_rotation_xyz(1, 0, 0);
const Q_DOWN: Orientation = Orientation::look_rotation_xyz(0, -1, 0);
const Q_UP: Orientation = Orientation::look_rotation_xyz(0, 1, 0);
const Q_BACK: Orientation = Orientation::look_rotation_xyz(0, 0, -1);
const Q_FORWARD: Orientation = Orientation::look_rotation_xyz(0, 0, 1);

const FACES: [Orientation; 6] = [Q_LEFT, Q_RIGHT, Q_DOWN, Q_UP, Q_BACK, Q_FORWARD];

fn same_frame(a: Orientation, b: Orientation) -> bool {
    a.equals(&b, CompareMode::Orientation)
}

#[test]
fn float_factory_matches_named_constants() {
    assert_eq!(Orientation::LEFT, Orientation::look_rotation_f32([-1.0, 0.0, 0.0]));
    assert_eq!(Orientation::RIGHT, Orientation::look_rotation_f32([1.0, 0.0, 0.0]));
    assert_eq!(Orientation::DOWN, Orientation::look_rotation_f32([0.0, -1.0, 0.0]));
    assert_eq!(Orientation::UP, Orientation::look_rotation_f32([0.0, 1.0, 0.0]));
    assert_eq!(Orientation::BACK, Orientation::look_rotation_f32([0.0, 0.0, -1.0]));
    assert_eq!(Orientation::FORWARD, Orientation::look_rotation_f32([0.0, 0.0, 1.0]));
}

#[test]
fn float_factory_snaps_into_sixty_degree_cones() {
    assert_eq!(
        Orientation::look_rotation_xyz(1, 0, 0),
        Orientation::look_rotation_f32_xyz(0.85, 0.0, 0.05)
    );
    assert_eq!(
        Orientation::look_rotation_xyz(1, 0, 1),
        Orientation::look_rotation_f32_xyz(0.5, 0.0, 0.5)
    );
    assert_eq!(
        Orientation::look_rotation_xyz(0, 0, 1),
        Orientation::look_rotation_f32_xyz(0.05, 0.0, 0.85)
    );
    // 70° from +X and 20° from +Y: only the Y cone contains it.
    let (s, c) = 70.0_f32.to_radians().sin_cos();
    assert_eq!(
        Orientation::look_rotation_f32_xyz(c, s, 0.0).forward(),
        IntVec3::UP
    );
}

#[test]
fn float_factory_honours_custom_cone() {
    let wide = SnapConfig::new(80.0).unwrap();
    // 70° from +X is inside an 80° cone.
    let (s, c) = 70.0_f32.to_radians().sin_cos();
    assert_eq!(
        Orientation::look_rotation_f32_with(&wide, [c, s, 0.0]).forward(),
        IntVec3::new(1, 1, 0)
    );
}

#[test]
fn float_factory_handles_extreme_magnitudes() {
    assert!(same_frame(
        Orientation::look_rotation_f32([1.0e20, 0.0, 0.0]),
        Orientation::RIGHT
    ));
    assert_eq!(
        Orientation::look_rotation_f32([0.0, -f32::MAX, f32::MAX]).forward(),
        IntVec3::new(0, -1, 1)
    );
    assert_eq!(
        Orientation::look_rotation_f32([0.0, 0.0, 1.0e-40]).forward(),
        IntVec3::FORWARD
    );
}

#[test]
fn float_zero_snaps_to_zero_orientation() {
    assert!(same_frame(
        Orientation::look_rotation_f32([0.0, 0.0, 0.0]),
        Orientation::ZERO
    ));
}

#[test]
fn composition_cases() {
    assert_eq!(Q_FORWARD, Q_FORWARD * Q_FORWARD);
    assert_eq!(Q_FORWARD, Q_LEFT * Q_RIGHT);
    assert_eq!(Q_LEFT, Q_BACK * Q_RIGHT);
    assert_eq!(Q_BACK, Q_LEFT * Q_LEFT);
    assert_eq!(Q_RIGHT, Q_BACK * Q_LEFT);
    assert_eq!(Q_FORWARD, Q_BACK * Q_BACK);
}

#[test]
fn composition_is_not_commutative() {
    let a = Q_UP * Q_RIGHT;
    let b = Q_RIGHT * Q_UP;
    assert!(!same_frame(a, b));
}

#[test]
fn composition_is_associative_for_faces() {
    for a in FACES {
        for b in FACES {
            for c in FACES {
                assert!(same_frame((a * b) * c, a * (b * c)));
            }
        }
    }
}

#[test]
fn union_of_forwards() {
    assert_eq!(Orientation::look_rotation_xyz(1, 0, -1), Q_RIGHT | Q_BACK);
    assert_eq!(Orientation::look_rotation_xyz(1, 1, -1), Q_RIGHT | Q_UP | Q_BACK);
    assert_eq!(Orientation::look_rotation_xyz(1, 1, 1), Q_RIGHT | Q_UP | Q_FORWARD);
    assert_eq!(Orientation::look_rotation_xyz(-1, -1, -1), Q_LEFT | Q_DOWN | Q_BACK);
}

#[test]
fn union_of_opposites_cancels() {
    let u = Q_LEFT | Q_RIGHT;
    assert_eq!(u.forward(), IntVec3::ZERO);
    assert!(same_frame(u, Orientation::ZERO));
}

#[test]
fn rotating_vectors() {
    assert_eq!(IntVec3::LEFT, Q_LEFT * IntVec3::FORWARD);
    assert_eq!(IntVec3::RIGHT, Q_RIGHT * IntVec3::FORWARD);
    assert_eq!(IntVec3::DOWN, Q_DOWN * IntVec3::FORWARD);
    assert_eq!(IntVec3::BACK, Q_BACK * IntVec3::FORWARD);
    assert_eq!(IntVec3::RIGHT, Q_BACK * IntVec3::LEFT);
    assert_eq!(IntVec3::new(-1, 1, 2), Q_LEFT * IntVec3::new(2, 1, 1));
}

#[test]
fn inverse_of_identity() {
    let inv = Orientation::IDENTITY.inverse().unwrap();
    assert!(same_frame(inv, Orientation::IDENTITY));
    assert!(same_frame(Orientation::invert(Orientation::RIGHT).unwrap(), Orientation::LEFT));
}

#[test]
fn inverse_cancels_for_every_face() {
    for r in FACES {
        let inv = r.inverse().unwrap();
        assert!(same_frame(inv * r, Orientation::IDENTITY), "{r}");
        assert!(same_frame(r * inv, Orientation::IDENTITY), "{r}");
    }
}

#[test]
fn inverse_of_right_is_left() {
    let inv = Orientation::RIGHT.inverse().unwrap();
    assert_eq!(inv, Orientation::LEFT);
    assert!(same_frame(inv, Orientation::LEFT));
}

#[test]
fn inverse_of_zero_is_singular() {
    assert_eq!(Orientation::ZERO.inverse(), Err(MatrixError::Singular));
}

#[test]
fn composing_does_not_alias_copies() {
    let original = [Orientation::FORWARD, Orientation::FORWARD];
    let mut copy = original;
    copy[0] = copy[0] * Orientation::RIGHT;
    assert_ne!(original[0], copy[0]);
}

#[test]
fn default_equality_ignores_roll() {
    let a = Orientation::look_rotation_with_up(IntVec3::RIGHT, IntVec3::UP);
    let b = Orientation::look_rotation_with_up(IntVec3::RIGHT, IntVec3::DOWN);
    assert!(a == b);
    assert!(a.equals(&b, CompareMode::Direction));
    assert!(a.equals(&b, CompareMode::default()));
    assert!(!a.equals(&b, CompareMode::Orientation));
}

#[test]
fn negation_reflects_whole_frame() {
    for r in FACES {
        let n = -r;
        assert_eq!(n.forward(), -r.forward());
        assert_eq!(n.up(), -r.up());
        assert_eq!(n.right(), -r.right());
    }
}

#[test]
fn forward_is_sign_of_input() {
    let o = Orientation::look_rotation(IntVec3::new(7, -3, 0));
    assert_eq!(o.forward(), IntVec3::new(1, -1, 0));
    assert!(o.right().is_sign_vector());
    assert!(o.up().is_sign_vector());
}

#[test]
fn zero_orientation_has_empty_basis() {
    let z = Orientation::ZERO;
    assert_eq!(z.right(), IntVec3::ZERO);
    assert_eq!(z.up(), IntVec3::ZERO);
    assert_eq!(z.forward(), IntVec3::ZERO);
}
