// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::fmt;
use core::ops::{Add, AddAssign, Div, Index, Mul, Neg, Sub, SubAssign};

/// Exact integer 3D vector.
///
/// * Components are full-width `i32`; free vectors carry no range invariant.
/// * Matrix columns inside an [`crate::Orientation`] are always *sign vectors*
///   (every component in `{-1, 0, 1}`); use [`IntVec3::sign`] to quantise.
/// * Axis convention is right-handed: `RIGHT × UP == FORWARD`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct IntVec3 {
    data: [i32; 3],
}

impl IntVec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0, 0, 0);
    /// All components set to one.
    pub const ONE: Self = Self::new(1, 1, 1);
    /// Unit step along −X.
    pub const LEFT: Self = Self::new(-1, 0, 0);
    /// Unit step along +X.
    pub const RIGHT: Self = Self::new(1, 0, 0);
    /// Unit step along −Y.
    pub const DOWN: Self = Self::new(0, -1, 0);
    /// Unit step along +Y.
    pub const UP: Self = Self::new(0, 1, 0);
    /// Unit step along −Z.
    pub const BACK: Self = Self::new(0, 0, -1);
    /// Unit step along +Z.
    pub const FORWARD: Self = Self::new(0, 0, 1);

    /// Creates a vector from components.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { data: [x, y, z] }
    }

    /// X component.
    pub const fn x(self) -> i32 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(self) -> i32 {
        self.data[1]
    }

    /// Z component.
    pub const fn z(self) -> i32 {
        self.data[2]
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [i32; 3] {
        self.data
    }

    /// Returns a copy with the selected components replaced.
    ///
    /// ```
    /// use echo_cardinal::IntVec3;
    /// let v = IntVec3::new(1, 2, 3).with(None, Some(9), None);
    /// assert_eq!(v, IntVec3::new(1, 9, 3));
    /// ```
    pub fn with(self, x: Option<i32>, y: Option<i32>, z: Option<i32>) -> Self {
        Self::new(
            x.unwrap_or(self.data[0]),
            y.unwrap_or(self.data[1]),
            z.unwrap_or(self.data[2]),
        )
    }

    /// Component-wise signum: every component becomes `-1`, `0` or `1`.
    pub const fn sign(self) -> Self {
        Self::new(
            self.data[0].signum(),
            self.data[1].signum(),
            self.data[2].signum(),
        )
    }

    /// Returns `true` if every component is `-1`, `0` or `1`.
    pub const fn is_sign_vector(self) -> bool {
        self.data[0].abs() <= 1 && self.data[1].abs() <= 1 && self.data[2].abs() <= 1
    }

    /// Dot product with another vector.
    pub const fn dot(self, other: Self) -> i32 {
        self.data[0] * other.data[0] + self.data[1] * other.data[1] + self.data[2] * other.data[2]
    }

    /// Dot product that wraps on `i32` overflow instead of panicking.
    pub const fn wrapping_dot(self, other: Self) -> i32 {
        self.data[0]
            .wrapping_mul(other.data[0])
            .wrapping_add(self.data[1].wrapping_mul(other.data[1]))
            .wrapping_add(self.data[2].wrapping_mul(other.data[2]))
    }

    /// Cross product with another vector (right-handed).
    pub const fn cross(self, other: Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Squared magnitude of the vector.
    pub const fn length_squared(self) -> i32 {
        self.dot(self)
    }

    /// Reduces the vector to its smallest integer multiple pointing the same
    /// way, by dividing through the gcd of the absolute components.
    ///
    /// The zero vector reduces to itself.
    ///
    /// ```
    /// use echo_cardinal::IntVec3;
    /// assert_eq!(IntVec3::new(4, -6, 8).reduce(), IntVec3::new(2, -3, 4));
    /// ```
    pub fn reduce(self) -> Self {
        self.reduce_with_scale().0
    }

    /// Like [`IntVec3::reduce`], also returning the factor that rebuilds the
    /// original vector: every component equals `reduced * scale` in wide
    /// arithmetic.
    ///
    /// The scale is unsigned because `(i32::MIN, 0, 0)` reduces by `2^31`.
    /// Zero yields `(ZERO, 0)`.
    pub fn reduce_with_scale(self) -> (Self, u32) {
        let [x, y, z] = self.data.map(i32::unsigned_abs);
        let divisor = gcd(gcd(x, y), z);
        if divisor == 0 {
            return (Self::ZERO, 0);
        }
        // |component / divisor| <= |component|, so the quotient always fits.
        let shrink = |c: i32| i32::try_from(i64::from(c) / i64::from(divisor)).unwrap_or_default();
        (self.map(shrink), divisor)
    }

    fn map(self, f: impl Fn(i32) -> i32) -> Self {
        Self {
            data: self.data.map(f),
        }
    }
}

/// Greatest common divisor; `gcd(0, 0) == 0`.
fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl From<[i32; 3]> for IntVec3 {
    fn from(value: [i32; 3]) -> Self {
        Self { data: value }
    }
}

impl From<IntVec3> for [i32; 3] {
    fn from(value: IntVec3) -> Self {
        value.data
    }
}

impl Index<usize> for IntVec3 {
    type Output = i32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl Add for IntVec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.data[0] + rhs.data[0],
            self.data[1] + rhs.data[1],
            self.data[2] + rhs.data[2],
        )
    }
}

impl AddAssign for IntVec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for IntVec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            self.data[0] - rhs.data[0],
            self.data[1] - rhs.data[1],
            self.data[2] - rhs.data[2],
        )
    }
}

impl SubAssign for IntVec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for IntVec3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.data[0], -self.data[1], -self.data[2])
    }
}

impl Mul<i32> for IntVec3 {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self::Output {
        Self::new(self.data[0] * rhs, self.data[1] * rhs, self.data[2] * rhs)
    }
}

/// Truncating component-wise division.
impl Div<i32> for IntVec3 {
    type Output = Self;

    fn div(self, rhs: i32) -> Self::Output {
        Self::new(self.data[0] / rhs, self.data[1] / rhs, self.data[2] / rhs)
    }
}

impl fmt::Display for IntVec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.data[0], self.data[1], self.data[2])
    }
}
