// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{BitOr, BitOrAssign, Mul, MulAssign, Neg};

use crate::{ByteMat3, IntVec3, MatrixError, SnapConfig};

/// How two orientations are compared by [`Orientation::equals`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum CompareMode {
    /// Compare only the forward vectors.
    #[default]
    Direction,
    /// Compare the full basis (forward, up and right).
    Orientation,
}

/// A cardinal rotation in 3D.
///
/// Backed by a [`ByteMat3`] whose columns are the right (0), up (1) and
/// forward (2) basis vectors, each a sign vector. The forward column is
/// always the sign of whatever vector built the orientation; right and up
/// are derived from it and, for edge and vertex forwards, need not be
/// orthonormal.
///
/// # Equality
/// `==` and [`Hash`] look at the **forward vector only**
/// ([`CompareMode::Direction`]). Two orientations facing the same way with a
/// different roll are `==`. Use
/// [`Orientation::equals`] with [`CompareMode::Orientation`] to compare the
/// whole frame.
///
/// ```
/// use echo_cardinal::{CompareMode, IntVec3, Orientation};
/// let a = Orientation::look_rotation_with_up(IntVec3::RIGHT, IntVec3::UP);
/// let b = Orientation::look_rotation_with_up(IntVec3::RIGHT, IntVec3::DOWN);
/// assert!(a == b);
/// assert!(!a.equals(&b, CompareMode::Orientation));
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Orientation {
    matrix: ByteMat3,
}

impl Orientation {
    /// The default orientation: right, up and forward along the world axes.
    pub const IDENTITY: Self = Self {
        matrix: ByteMat3::IDENTITY,
    };
    /// The null orientation, built from the zero vector. Every basis is zero.
    pub const ZERO: Self = Self::look_rotation(IntVec3::ZERO);
    /// Faces −X.
    pub const LEFT: Self = Self::look_rotation(IntVec3::LEFT);
    /// Faces +X.
    pub const RIGHT: Self = Self::look_rotation(IntVec3::RIGHT);
    /// Faces −Y.
    pub const DOWN: Self = Self::look_rotation(IntVec3::DOWN);
    /// Faces +Y.
    pub const UP: Self = Self::look_rotation(IntVec3::UP);
    /// Faces −Z.
    pub const BACK: Self = Self::look_rotation(IntVec3::BACK);
    /// Faces +Z.
    pub const FORWARD: Self = Self::look_rotation(IntVec3::FORWARD);

    /// Builds an orientation from three basis vectors; each is reduced to
    /// its sign first.
    pub const fn from_basis(right: IntVec3, up: IntVec3, forward: IntVec3) -> Self {
        Self {
            matrix: ByteMat3::from_sign_columns(right, up, forward),
        }
    }

    /// Creates an orientation facing `forward`.
    ///
    /// World up is used as the auxiliary up vector, except when `forward`
    /// points straight up or down, where `forward × RIGHT` is used instead so
    /// the cross products stay non-degenerate.
    pub const fn look_rotation(forward: IntVec3) -> Self {
        let forward = forward.sign();
        let collinear = forward.x() == 0 && forward.z() == 0 && forward.y() != 0;
        let up = if collinear {
            forward.cross(IntVec3::RIGHT)
        } else {
            IntVec3::UP
        };
        Self::look_rotation_with_up(forward, up)
    }

    /// Creates an orientation facing `forward` with `upwards` as the
    /// reference up vector.
    ///
    /// `forward' = sign(forward)`, `right = sign(upwards × forward')`,
    /// `up = sign(forward' × right)`.
    pub const fn look_rotation_with_up(forward: IntVec3, upwards: IntVec3) -> Self {
        let b2 = forward.sign();
        let b0 = upwards.cross(b2).sign();
        let b1 = b2.cross(b0).sign();
        Self::from_basis(b0, b1, b2)
    }

    /// Integer-component shorthand for [`Orientation::look_rotation`].
    pub const fn look_rotation_xyz(x: i32, y: i32, z: i32) -> Self {
        Self::look_rotation(IntVec3::new(x, y, z))
    }

    /// Snaps a float direction with the default 60° cones, then calls
    /// [`Orientation::look_rotation`].
    ///
    /// ```
    /// use echo_cardinal::Orientation;
    /// assert_eq!(
    ///     Orientation::look_rotation_f32([0.5, 0.0, 0.5]),
    ///     Orientation::look_rotation_xyz(1, 0, 1),
    /// );
    /// ```
    pub fn look_rotation_f32(forward: [f32; 3]) -> Self {
        Self::look_rotation_f32_with(&SnapConfig::default(), forward)
    }

    /// Float-component shorthand for [`Orientation::look_rotation_f32`].
    pub fn look_rotation_f32_xyz(x: f32, y: f32, z: f32) -> Self {
        Self::look_rotation_f32([x, y, z])
    }

    /// Snaps a float direction using `config`, then calls
    /// [`Orientation::look_rotation`].
    pub fn look_rotation_f32_with(config: &SnapConfig, forward: [f32; 3]) -> Self {
        Self::look_rotation(config.snap(forward))
    }

    /// Right basis vector (column 0).
    pub fn right(&self) -> IntVec3 {
        self.matrix.column(0)
    }

    /// Up basis vector (column 1).
    pub fn up(&self) -> IntVec3 {
        self.matrix.column(1)
    }

    /// Forward basis vector (column 2).
    pub fn forward(&self) -> IntVec3 {
        self.matrix.column(2)
    }

    /// The backing matrix.
    pub const fn matrix(&self) -> ByteMat3 {
        self.matrix
    }

    /// Exact inverse of this orientation.
    ///
    /// For the face orientations this is the transpose. Edge and vertex
    /// frames are not orthonormal and their inverse truncates.
    ///
    /// # Errors
    /// [`MatrixError::Singular`] for [`Orientation::ZERO`] or any frame with
    /// a zero determinant.
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        self.matrix.inverse().map(|matrix| Self { matrix })
    }

    /// Free-function form of [`Orientation::inverse`].
    pub fn invert(orientation: Self) -> Result<Self, MatrixError> {
        orientation.inverse()
    }

    /// Compares two orientations under `mode`.
    pub fn equals(&self, other: &Self, mode: CompareMode) -> bool {
        match mode {
            CompareMode::Direction => self.forward() == other.forward(),
            CompareMode::Orientation => self.matrix == other.matrix,
        }
    }

    /// Applies this orientation to `vector`.
    pub fn rotate(&self, vector: IntVec3) -> IntVec3 {
        self.matrix.multiply_point(vector)
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<ByteMat3> for Orientation {
    /// Wraps `matrix` after quantising each column to its sign.
    fn from(matrix: ByteMat3) -> Self {
        Self::from_basis(matrix.column(0), matrix.column(1), matrix.column(2))
    }
}

/// Forward-only equality; see [`Orientation`].
impl PartialEq for Orientation {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other, CompareMode::Direction)
    }
}

impl Eq for Orientation {}

impl Hash for Orientation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.forward().hash(state);
    }
}

/// Composition: `a * b` applies `a` to each basis vector of `b`.
impl Mul for Orientation {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::from_basis(
            self.rotate(rhs.right()),
            self.rotate(rhs.up()),
            self.rotate(rhs.forward()),
        )
    }
}

impl MulAssign for Orientation {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<IntVec3> for Orientation {
    type Output = IntVec3;

    fn mul(self, rhs: IntVec3) -> Self::Output {
        self.rotate(rhs)
    }
}

/// Union: faces the sum of both forward sign vectors. Roll is discarded.
impl BitOr for Orientation {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::look_rotation(self.forward().sign() + rhs.forward().sign())
    }
}

impl BitOrAssign for Orientation {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

/// Point reflection: negates every basis vector.
impl Neg for Orientation {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            matrix: -self.matrix,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.forward(), f)
    }
}
