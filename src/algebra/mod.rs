//! Capability traits describing which operations an element type
//! supports.
//!
//! None of these traits need to be implemented by hand. Each comes
//! with a blanket impl for every type that has the required operator
//! set, so plain integers, [`BigInt`](num::BigInt),
//! [`Fraction`](crate::fraction::Fraction), and
//! [`Polynomial`](crate::polynomial::Polynomial) pick up whichever
//! traits they qualify for automatically. Algorithms state their
//! requirements through their trait bounds.

use num::{Zero, One};

use std::fmt::Display;
use std::ops::{Add, Sub, Mul, Div, Rem, Neg};
use std::str::FromStr;

/// Ring operations: addition, subtraction, multiplication, negation,
/// and the constants zero and one.
///
/// This is enough for matrix arithmetic, matrix powers, the Leibniz
/// determinant, and the characteristic polynomial.
pub trait Ring: Clone + PartialEq + Zero + One + Add<Output=Self> + Sub<Output=Self> + Mul<Output=Self> + Neg<Output=Self> {}

/// A [`Ring`] whose elements can be compared.
pub trait OrderedRing: Ring + PartialOrd {}

/// A [`Ring`] with division.
///
/// Elimination-based algorithms assume that division is exact. Plain
/// integers satisfy this trait structurally, but integer division
/// truncates, so row reduction over integers produces meaningless
/// results. Use [`Fraction`](crate::fraction::Fraction) for those.
pub trait Field: Ring + Div<Output=Self> {}

/// An [`OrderedRing`] with a sign-comparable remainder, as required
/// by [`gcd`].
pub trait EuclideanRing: OrderedRing + Div<Output=Self> + Rem<Output=Self> {}

/// The full capability contract: comparable, field operations, and
/// text input and output.
pub trait Numeric: OrderedRing + Field + FromStr + Display {}

impl<T> Ring for T
where T: Clone + PartialEq + Zero + One + Add<Output=T> + Sub<Output=T> + Mul<Output=T> + Neg<Output=T> {}

impl<T> OrderedRing for T where T: Ring + PartialOrd {}

impl<T> Field for T where T: Ring + Div<Output=T> {}

impl<T> EuclideanRing for T where T: OrderedRing + Div<Output=T> + Rem<Output=T> {}

impl<T> Numeric for T where T: OrderedRing + Field + FromStr + Display {}

/// Absolute value in terms of the ordering and negation of `T`.
pub fn abs<T: OrderedRing>(x: T) -> T {
  if x < T::zero() {
    -x
  } else {
    x
  }
}

/// Whether `x` is strictly less than zero.
pub fn is_negative<T: OrderedRing>(x: &T) -> bool {
  *x < T::zero()
}

/// Greatest common divisor by repeated remainder.
///
/// The result is always non-negative. `gcd(a, 0)` is `|a|`, and in
/// particular `gcd(0, 0)` is zero.
pub fn gcd<T: EuclideanRing>(a: T, b: T) -> T {
  let mut a = abs(a);
  let mut b = abs(b);
  while !b.is_zero() {
    let r = abs(a % b.clone());
    a = b;
    b = r;
  }
  a
}
