// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! echo-cardinal: exact integer algebra for cardinal 3D orientations.
//!
//! An [`Orientation`] faces one of the 26 non-zero sign vectors (cube faces,
//! edges and corners) or the degenerate zero vector. It is stored as a 3×3
//! `i8` matrix whose columns are sign vectors, so composition, inversion and
//! application to [`IntVec3`] values are exact and platform independent.
//!
//! Forward vectors encode into a [`DirectionMask`] (one bit per non-zero
//! [`Direction`]); masks combine with `|` and decode back into orientations
//! in a fixed traversal order.
//!
//! ```
//! use echo_cardinal::{DirectionMask, Orientation};
//! let corner = Orientation::RIGHT | Orientation::UP | Orientation::FORWARD;
//! assert_eq!(corner, Orientation::look_rotation_xyz(1, 1, 1));
//! assert_eq!(Orientation::LEFT * Orientation::RIGHT, Orientation::FORWARD);
//! assert_eq!(DirectionMask::encode(&-Orientation::FORWARD), DirectionMask::BACK);
//! ```
#![forbid(unsafe_code)]

mod direction;
mod mat3;
mod orientation;
mod snap;
mod vec3;

pub use direction::{DecodeMany, Direction, DirectionKind, DirectionMask, Directions};
pub use mat3::{ByteMat3, Cell, IntMat3, Mat3, MatrixError};
pub use orientation::{CompareMode, Orientation};
pub use snap::{SnapConfig, SnapConfigError, DEFAULT_CONE_HALF_ANGLE_DEG};
pub use vec3::IntVec3;
