// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Sign-vector directions and the 27-value direction mask codec.
//!
//! Every direction is named by one letter per axis in x, y, z order:
//! `N` (−1), `Z` (0) or `P` (+1). Traversal order is x-major, then y, then z,
//! with `N < Z < P` on each axis. The 26 non-zero directions own bits
//! `1..=26` of a [`DirectionMask`] in that order; [`Direction::Zzz`] owns no
//! bit and encodes as [`DirectionMask::ZERO`].
//!
//! Decoding always walks bits from low to high, so when several bits are set
//! [`DirectionMask::decode`] deterministically picks the first direction in
//! traversal order.

use core::fmt;
use core::iter::FusedIterator;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::{IntVec3, Orientation};

/// One of the 27 sign vectors in `{-1, 0, 1}³`.
///
/// Variant names spell the x, y and z signs: `N` is −1, `Z` is 0, `P` is +1.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Direction {
    /// `(-1, -1, -1)`
    Nnn = 0,
    /// `(-1, -1, 0)`
    Nnz,
    /// `(-1, -1, 1)`
    Nnp,
    /// `(-1, 0, -1)`
    Nzn,
    /// `(-1, 0, 0)`
    Nzz,
    /// `(-1, 0, 1)`
    Nzp,
    /// `(-1, 1, -1)`
    Npn,
    /// `(-1, 1, 0)`
    Npz,
    /// `(-1, 1, 1)`
    Npp,
    /// `(0, -1, -1)`
    Znn,
    /// `(0, -1, 0)`
    Znz,
    /// `(0, -1, 1)`
    Znp,
    /// `(0, 0, -1)`
    Zzn,
    /// `(0, 0, 0)`
    Zzz,
    /// `(0, 0, 1)`
    Zzp,
    /// `(0, 1, -1)`
    Zpn,
    /// `(0, 1, 0)`
    Zpz,
    /// `(0, 1, 1)`
    Zpp,
    /// `(1, -1, -1)`
    Pnn,
    /// `(1, -1, 0)`
    Pnz,
    /// `(1, -1, 1)`
    Pnp,
    /// `(1, 0, -1)`
    Pzn,
    /// `(1, 0, 0)`
    Pzz,
    /// `(1, 0, 1)`
    Pzp,
    /// `(1, 1, -1)`
    Ppn,
    /// `(1, 1, 0)`
    Ppz,
    /// `(1, 1, 1)`
    Ppp,
}

/// Shape of a direction by its count of non-zero components.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DirectionKind {
    /// The zero vector.
    Zero,
    /// One non-zero component: a cube face centre.
    Face,
    /// Two non-zero components: a cube edge midpoint.
    Edge,
    /// Three non-zero components: a cube corner.
    Vertex,
}

impl Direction {
    /// Faces −X.
    pub const LEFT: Self = Self::Nzz;
    /// Faces +X.
    pub const RIGHT: Self = Self::Pzz;
    /// Faces −Y.
    pub const DOWN: Self = Self::Znz;
    /// Faces +Y.
    pub const UP: Self = Self::Zpz;
    /// Faces −Z.
    pub const BACK: Self = Self::Zzn;
    /// Faces +Z.
    pub const FORWARD: Self = Self::Zzp;

    /// All 27 directions in traversal order, including [`Direction::Zzz`].
    pub const ALL: [Self; 27] = [
        Self::Nnn,
        Self::Nnz,
        Self::Nnp,
        Self::Nzn,
        Self::Nzz,
        Self::Nzp,
        Self::Npn,
        Self::Npz,
        Self::Npp,
        Self::Znn,
        Self::Znz,
        Self::Znp,
        Self::Zzn,
        Self::Zzz,
        Self::Zzp,
        Self::Zpn,
        Self::Zpz,
        Self::Zpp,
        Self::Pnn,
        Self::Pnz,
        Self::Pnp,
        Self::Pzn,
        Self::Pzz,
        Self::Pzp,
        Self::Ppn,
        Self::Ppz,
        Self::Ppp,
    ];

    /// The 26 non-zero directions in bit order.
    pub const NON_ZERO: [Self; 26] = [
        Self::Nnn,
        Self::Nnz,
        Self::Nnp,
        Self::Nzn,
        Self::Nzz,
        Self::Nzp,
        Self::Npn,
        Self::Npz,
        Self::Npp,
        Self::Znn,
        Self::Znz,
        Self::Znp,
        Self::Zzn,
        Self::Zzp,
        Self::Zpn,
        Self::Zpz,
        Self::Zpp,
        Self::Pnn,
        Self::Pnz,
        Self::Pnp,
        Self::Pzn,
        Self::Pzz,
        Self::Pzp,
        Self::Ppn,
        Self::Ppz,
        Self::Ppp,
    ];

    /// Position in [`Direction::ALL`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Looks up the direction for an exact sign vector.
    ///
    /// Returns `None` if any component is outside `{-1, 0, 1}`; call
    /// [`IntVec3::sign`] first to quantise arbitrary vectors.
    pub fn from_vector(vector: IntVec3) -> Option<Self> {
        if !vector.is_sign_vector() {
            return None;
        }
        let index = (vector.x() + 1) * 9 + (vector.y() + 1) * 3 + (vector.z() + 1);
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    /// The sign vector this direction names.
    pub const fn to_vector(self) -> IntVec3 {
        let index = self as i32;
        IntVec3::new(index / 9 - 1, (index / 3) % 3 - 1, index % 3 - 1)
    }

    /// Bit position in a [`DirectionMask`], or `None` for [`Direction::Zzz`].
    pub const fn bit(self) -> Option<u32> {
        let index = self as u32;
        match self {
            Self::Zzz => None,
            _ if index < Self::Zzz as u32 => Some(index + 1),
            _ => Some(index),
        }
    }

    /// Inverse of [`Direction::bit`].
    pub const fn from_bit(bit: u32) -> Option<Self> {
        let index = match bit {
            1..=13 => bit - 1,
            14..=26 => bit,
            _ => return None,
        };
        Some(Self::ALL[index as usize])
    }

    /// The single-bit mask for this direction; [`DirectionMask::ZERO`] for
    /// [`Direction::Zzz`].
    pub const fn mask(self) -> DirectionMask {
        match self.bit() {
            Some(bit) => DirectionMask(1 << bit),
            None => DirectionMask::ZERO,
        }
    }

    /// The direction pointing the other way.
    pub const fn opposite(self) -> Self {
        Self::ALL[26 - self as usize]
    }

    /// Face, edge, vertex or zero.
    pub const fn kind(self) -> DirectionKind {
        let v = self.to_vector();
        let count = (v.x() != 0) as u8 + (v.y() != 0) as u8 + (v.z() != 0) as u8;
        match count {
            0 => DirectionKind::Zero,
            1 => DirectionKind::Face,
            2 => DirectionKind::Edge,
            _ => DirectionKind::Vertex,
        }
    }

    /// The orientation facing this direction.
    pub const fn orientation(self) -> Orientation {
        Orientation::look_rotation(self.to_vector())
    }

    const fn name(self) -> &'static str {
        const NAMES: [&str; 27] = [
            "NNN", "NNZ", "NNP", "NZN", "NZZ", "NZP", "NPN", "NPZ", "NPP", "ZNN", "ZNZ", "ZNP",
            "ZZN", "ZZZ", "ZZP", "ZPN", "ZPZ", "ZPP", "PNN", "PNZ", "PNP", "PZN", "PZZ", "PZP",
            "PPN", "PPZ", "PPP",
        ];
        NAMES[self as usize]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Direction> for IntVec3 {
    fn from(direction: Direction) -> Self {
        direction.to_vector()
    }
}

/// A set of [`Direction`]s packed into bits `1..=26` of a `u32`.
///
/// The value `0` is [`DirectionMask::ZERO`], which is also the encoding of
/// [`Direction::Zzz`]. Bits outside `1..=26` never come out of the encoder
/// and are ignored by every decoding path, so any `u32` is safe to decode.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DirectionMask(u32);

impl DirectionMask {
    /// No directions.
    pub const ZERO: Self = Self(0);
    /// Every non-zero direction.
    pub const ALL: Self = Self(0x07FF_FFFE);
    /// The −X face bit.
    pub const LEFT: Self = Direction::LEFT.mask();
    /// The +X face bit.
    pub const RIGHT: Self = Direction::RIGHT.mask();
    /// The −Y face bit.
    pub const DOWN: Self = Direction::DOWN.mask();
    /// The +Y face bit.
    pub const UP: Self = Direction::UP.mask();
    /// The −Z face bit.
    pub const BACK: Self = Direction::BACK.mask();
    /// The +Z face bit.
    pub const FORWARD: Self = Direction::FORWARD.mask();
    /// The six face bits.
    pub const FACES: Self = Self(
        Self::LEFT.0 | Self::RIGHT.0 | Self::DOWN.0 | Self::UP.0 | Self::BACK.0 | Self::FORWARD.0,
    );

    /// Raw bits, including any bits outside `1..=26` retained by
    /// [`DirectionMask::from_bits_retain`].
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Wraps `bits` if every set bit names a direction.
    pub const fn from_bits(bits: u32) -> Option<Self> {
        if bits & !Self::ALL.0 == 0 {
            Some(Self(bits))
        } else {
            None
        }
    }

    /// Wraps `bits`, dropping any bit outside `1..=26`.
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Self(bits & Self::ALL.0)
    }

    /// Wraps `bits` verbatim.
    pub const fn from_bits_retain(bits: u32) -> Self {
        Self(bits)
    }

    /// `true` when no direction bit is set.
    pub const fn is_empty(self) -> bool {
        self.0 & Self::ALL.0 == 0
    }

    /// Number of directions in the set.
    pub const fn len(self) -> usize {
        (self.0 & Self::ALL.0).count_ones() as usize
    }

    /// `true` when every bit of `other` is also set here.
    ///
    /// Like a flag test, `contains(ZERO)` is always `true`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// `true` when `direction`'s bit is set. [`Direction::Zzz`] is always
    /// contained.
    pub const fn has(self, direction: Direction) -> bool {
        self.contains(direction.mask())
    }

    /// `true` when the two sets share a direction.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 & Self::ALL.0 != 0
    }

    /// Adds `direction` to the set.
    pub fn insert(&mut self, direction: Direction) {
        self.0 |= direction.mask().0;
    }

    /// Removes `direction` from the set.
    pub fn remove(&mut self, direction: Direction) {
        self.0 &= !direction.mask().0;
    }

    /// Iterates over the set directions in bit order.
    pub const fn iter(self) -> Directions {
        Directions {
            remaining: self.0 & Self::ALL.0,
        }
    }

    /// Encodes `orientation`'s forward vector as a single bit.
    ///
    /// The zero forward encodes as [`DirectionMask::ZERO`].
    pub fn encode(orientation: &Orientation) -> Self {
        Direction::from_vector(orientation.forward()).map_or(Self::ZERO, Direction::mask)
    }

    /// ORs together the encoding of every orientation; empty input yields
    /// [`DirectionMask::ZERO`].
    pub fn encode_many<'a, I>(orientations: I) -> Self
    where
        I: IntoIterator<Item = &'a Orientation>,
    {
        orientations
            .into_iter()
            .fold(Self::ZERO, |mask, o| mask | Self::encode(o))
    }

    /// The orientation for the first set bit in bit order, or
    /// [`Orientation::IDENTITY`] when the mask is empty.
    ///
    /// ```
    /// use echo_cardinal::{DirectionMask, Orientation};
    /// let mask = DirectionMask::UP | DirectionMask::RIGHT;
    /// // UP (bit 16) comes before RIGHT (bit 22).
    /// assert_eq!(mask.decode(), Orientation::UP);
    /// assert_eq!(DirectionMask::ZERO.decode(), Orientation::IDENTITY);
    /// ```
    pub fn decode(self) -> Orientation {
        self.iter()
            .next()
            .map_or(Orientation::IDENTITY, Direction::orientation)
    }

    /// Lazily yields the orientation for every set bit in bit order.
    pub const fn decode_many(self) -> DecodeMany {
        DecodeMany { inner: self.iter() }
    }
}

impl From<Direction> for DirectionMask {
    fn from(direction: Direction) -> Self {
        direction.mask()
    }
}

impl From<DirectionMask> for u32 {
    fn from(mask: DirectionMask) -> Self {
        mask.0
    }
}

impl BitOr for DirectionMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for DirectionMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for DirectionMask {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for DirectionMask {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitXor for DirectionMask {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for DirectionMask {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

/// Complement within [`DirectionMask::ALL`].
impl Not for DirectionMask {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self(!self.0 & Self::ALL.0)
    }
}

impl FromIterator<Direction> for DirectionMask {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::ZERO, |mask, d| mask | d.mask())
    }
}

impl FromIterator<Orientation> for DirectionMask {
    fn from_iter<I: IntoIterator<Item = Orientation>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::ZERO, |mask, o| mask | Self::encode(&o))
    }
}

impl Extend<Direction> for DirectionMask {
    fn extend<I: IntoIterator<Item = Direction>>(&mut self, iter: I) {
        for direction in iter {
            self.insert(direction);
        }
    }
}

impl IntoIterator for DirectionMask {
    type Item = Direction;
    type IntoIter = Directions;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for DirectionMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("ZERO");
        }
        for (i, direction) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            fmt::Display::fmt(&direction, f)?;
        }
        Ok(())
    }
}

/// Iterator over the directions of a [`DirectionMask`], lowest bit first.
#[derive(Debug, Clone)]
pub struct Directions {
    remaining: u32,
}

impl Iterator for Directions {
    type Item = Direction;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let bit = self.remaining.trailing_zeros();
        self.remaining &= self.remaining - 1;
        Direction::from_bit(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Directions {}

impl FusedIterator for Directions {}

/// Lazy decoder returned by [`DirectionMask::decode_many`].
///
/// Finite and single-pass; clone it or call `decode_many` again to restart.
#[derive(Debug, Clone)]
pub struct DecodeMany {
    inner: Directions,
}

impl Iterator for DecodeMany {
    type Item = Orientation;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Direction::orientation)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for DecodeMany {}

impl FusedIterator for DecodeMany {}
