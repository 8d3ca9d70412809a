//! Exact rational numbers over an arbitrary Euclidean ring.

use crate::algebra::{self, EuclideanRing};
use crate::error::Error;

use num::{BigInt, Zero, One};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Deserialize};
use thiserror::Error;

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Sub, Mul, Div, Rem, Neg, AddAssign, SubAssign, MulAssign, DivAssign};
use std::str::FromStr;

/// A fraction `numer / denom` of elements of `T`.
///
/// A `Fraction` is always stored in lowest terms: the denominator is
/// strictly positive and shares no common factor with the numerator.
/// Every constructor and every arithmetic operation restores this
/// canonical form, which is what makes the derived equality and the
/// cross-multiplication ordering correct.
///
/// Since `Fraction<T>` is itself a [`EuclideanRing`], fractions can
/// be nested (`Fraction<Fraction<i64>>`), though this gains nothing
/// mathematically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(T, T)", into = "(T, T)")]
#[serde(bound(
  serialize = "T: Clone + Serialize",
  deserialize = "T: EuclideanRing + Deserialize<'de>",
))]
pub struct Fraction<T> {
  numer: T,
  denom: T,
}

/// Fractions of machine integers.
pub type Rational = Fraction<i64>;

/// Fractions of arbitrary-precision integers.
pub type BigFraction = Fraction<BigInt>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseFractionError {
  #[error("Invalid fraction syntax: {0:?}")]
  InvalidSyntax(String),
  #[error("Invalid fraction component: {0:?}")]
  InvalidComponent(String),
  #[error("Zero denominator")]
  ZeroDenominator,
}

impl<T: EuclideanRing> Fraction<T> {
  /// Constructs the fraction `numer / denom` in lowest terms.
  ///
  /// Panics if `denom == 0`. See [`Fraction::try_new`] for a
  /// non-panicking variant.
  pub fn new(numer: T, denom: T) -> Self {
    Self::try_new(numer, denom).unwrap_or_else(|err| panic!("{err}"))
  }

  pub fn try_new(numer: T, denom: T) -> Result<Self, Error> {
    if denom.is_zero() {
      return Err(Error::DivisionByZero);
    }
    Ok(Self::normalized(numer, denom))
  }

  pub fn from_integer(numer: T) -> Self {
    Self { numer, denom: T::one() }
  }

  /// Reduces by the gcd and moves the sign into the numerator. The
  /// denominator must be nonzero.
  fn normalized(mut numer: T, mut denom: T) -> Self {
    if algebra::is_negative(&denom) {
      numer = -numer;
      denom = -denom;
    }
    let g = algebra::gcd(numer.clone(), denom.clone());
    if !g.is_zero() && !g.is_one() {
      numer = numer / g.clone();
      denom = denom / g;
    }
    Self { numer, denom }
  }

  pub fn numer(&self) -> &T {
    &self.numer
  }

  pub fn denom(&self) -> &T {
    &self.denom
  }

  pub fn into_parts(self) -> (T, T) {
    (self.numer, self.denom)
  }

  pub fn is_integer(&self) -> bool {
    self.denom.is_one()
  }

  pub fn abs(&self) -> Self {
    Self { numer: algebra::abs(self.numer.clone()), denom: self.denom.clone() }
  }

  /// Division that fails with [`Error::DivisionByZero`] instead of
  /// panicking.
  pub fn try_div(self, other: Fraction<T>) -> Result<Fraction<T>, Error> {
    if other.numer.is_zero() {
      return Err(Error::DivisionByZero);
    }
    Ok(Self::normalized(self.numer * other.denom, self.denom * other.numer))
  }

  /// The reciprocal `denom / numer`, or an error if this fraction is
  /// zero.
  pub fn try_recip(&self) -> Result<Self, Error> {
    Self::try_new(self.denom.clone(), self.numer.clone())
  }

  /// Panics if this fraction is zero.
  pub fn recip(&self) -> Self {
    self.try_recip().unwrap_or_else(|err| panic!("{err}"))
  }
}

impl<T: EuclideanRing> From<T> for Fraction<T> {
  fn from(numer: T) -> Self {
    Self::from_integer(numer)
  }
}

impl<T: EuclideanRing> TryFrom<(T, T)> for Fraction<T> {
  type Error = Error;

  fn try_from((numer, denom): (T, T)) -> Result<Self, Error> {
    Self::try_new(numer, denom)
  }
}

impl<T> From<Fraction<T>> for (T, T) {
  fn from(fraction: Fraction<T>) -> Self {
    (fraction.numer, fraction.denom)
  }
}

impl<T: EuclideanRing> Add for Fraction<T> {
  type Output = Fraction<T>;

  fn add(self, other: Fraction<T>) -> Fraction<T> {
    Self::normalized(
      self.numer * other.denom.clone() + other.numer * self.denom.clone(),
      self.denom * other.denom,
    )
  }
}

impl<T: EuclideanRing> Sub for Fraction<T> {
  type Output = Fraction<T>;

  fn sub(self, other: Fraction<T>) -> Fraction<T> {
    Self::normalized(
      self.numer * other.denom.clone() - other.numer * self.denom.clone(),
      self.denom * other.denom,
    )
  }
}

impl<T: EuclideanRing> Mul for Fraction<T> {
  type Output = Fraction<T>;

  fn mul(self, other: Fraction<T>) -> Fraction<T> {
    Self::normalized(self.numer * other.numer, self.denom * other.denom)
  }
}

/// Panics on division by zero. See [`Fraction::try_div`] for a
/// non-panicking variant.
impl<T: EuclideanRing> Div for Fraction<T> {
  type Output = Fraction<T>;

  fn div(self, other: Fraction<T>) -> Fraction<T> {
    self.try_div(other).unwrap_or_else(|err| panic!("{err}"))
  }
}

/// Fractions form a field, so every division by a nonzero fraction is
/// exact and the remainder is always zero. Panics on division by
/// zero.
impl<T: EuclideanRing> Rem for Fraction<T> {
  type Output = Fraction<T>;

  fn rem(self, other: Fraction<T>) -> Fraction<T> {
    if other.is_zero() {
      panic!("{}", Error::DivisionByZero);
    }
    Fraction::zero()
  }
}

impl<T: EuclideanRing> Neg for Fraction<T> {
  type Output = Fraction<T>;

  fn neg(self) -> Fraction<T> {
    Fraction { numer: -self.numer, denom: self.denom }
  }
}

impl<T: EuclideanRing> AddAssign for Fraction<T> {
  fn add_assign(&mut self, other: Fraction<T>) {
    *self = self.clone() + other;
  }
}

impl<T: EuclideanRing> SubAssign for Fraction<T> {
  fn sub_assign(&mut self, other: Fraction<T>) {
    *self = self.clone() - other;
  }
}

impl<T: EuclideanRing> MulAssign for Fraction<T> {
  fn mul_assign(&mut self, other: Fraction<T>) {
    *self = self.clone() * other;
  }
}

impl<T: EuclideanRing> DivAssign for Fraction<T> {
  fn div_assign(&mut self, other: Fraction<T>) {
    *self = self.clone() / other;
  }
}

impl<T: EuclideanRing> Zero for Fraction<T> {
  fn zero() -> Self {
    Self::from_integer(T::zero())
  }

  fn is_zero(&self) -> bool {
    self.numer.is_zero()
  }
}

impl<T: EuclideanRing> One for Fraction<T> {
  fn one() -> Self {
    Self::from_integer(T::one())
  }
}

impl<T: EuclideanRing> PartialOrd for Fraction<T> {
  fn partial_cmp(&self, other: &Fraction<T>) -> Option<Ordering> {
    let left = self.numer.clone() * other.denom.clone();
    let right = other.numer.clone() * self.denom.clone();
    left.partial_cmp(&right)
  }
}

impl<T: EuclideanRing + Ord> Ord for Fraction<T> {
  fn cmp(&self, other: &Fraction<T>) -> Ordering {
    let left = self.numer.clone() * other.denom.clone();
    let right = other.numer.clone() * self.denom.clone();
    left.cmp(&right)
  }
}

impl<T: EuclideanRing + FromStr> FromStr for Fraction<T> {
  type Err = ParseFractionError;

  fn from_str(s: &str) -> Result<Self, ParseFractionError> {
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*([^/\s]+)\s*(?:/\s*([^/\s]+))?\s*$").unwrap());
    let caps = RE.captures(s).ok_or_else(|| ParseFractionError::InvalidSyntax(s.to_owned()))?;
    let parse_component = |text: &str| {
      T::from_str(text).map_err(|_| ParseFractionError::InvalidComponent(text.to_owned()))
    };
    // unwrap: Group 1 is not optional in the regex.
    let numer = parse_component(caps.get(1).unwrap().as_str())?;
    let denom = match caps.get(2) {
      Some(denom) => parse_component(denom.as_str())?,
      None => T::one(),
    };
    Self::try_new(numer, denom).map_err(|_| ParseFractionError::ZeroDenominator)
  }
}

impl<T: EuclideanRing + Display> Display for Fraction<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.numer)?;
    if !self.denom.is_one() {
      write!(f, "/{}", self.denom)?;
    }
    Ok(())
  }
}
