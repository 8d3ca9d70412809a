//! Dense univariate polynomials over a generic coefficient type.

mod display;

pub use display::{PolynomialDisplay, DisplayPolynomial};

use crate::algebra::{Ring, Field};
use crate::error::Error;
use crate::util::remove_suffix;

use itertools::{Itertools, EitherOrBoth};
use num::{Zero, One};
use serde::{Serialize, Deserialize};

use std::ops::{Add, Sub, Mul, Div, Rem, Neg, AddAssign, SubAssign, MulAssign};

/// A polynomial in one variable, stored as its coefficients from the
/// constant term upward, so that `coefficients()[i]` is the
/// coefficient of `x^i`.
///
/// Polynomials are always kept in canonical form: the leading
/// coefficient is nonzero, except for the zero polynomial, which is
/// stored as the single coefficient `0`. Consequently, derived
/// equality is equality of polynomials.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<T>", into = "Vec<T>")]
#[serde(bound(
  serialize = "T: Clone + Serialize",
  deserialize = "T: Ring + Deserialize<'de>",
))]
pub struct Polynomial<T> {
  coeffs: Vec<T>,
}

impl<T: Ring> Polynomial<T> {
  pub fn new(coeffs: Vec<T>) -> Self {
    let mut poly = Polynomial { coeffs };
    poly.normalize();
    poly
  }

  pub fn constant(value: T) -> Self {
    Self::new(vec![value])
  }

  /// The polynomial `coeff * x^degree`.
  pub fn monomial(coeff: T, degree: usize) -> Self {
    let mut coeffs = vec![T::zero(); degree];
    coeffs.push(coeff);
    Self::new(coeffs)
  }

  /// The polynomial `x`.
  pub fn x() -> Self {
    Self::monomial(T::one(), 1)
  }

  fn normalize(&mut self) {
    remove_suffix(&mut self.coeffs, T::is_zero);
    if self.coeffs.is_empty() {
      self.coeffs.push(T::zero());
    }
  }

  /// The degree of the polynomial, or `None` for the zero
  /// polynomial, which has no degree.
  pub fn degree(&self) -> Option<usize> {
    if self.is_zero() {
      None
    } else {
      Some(self.coeffs.len() - 1)
    }
  }

  /// The coefficient of `x^i`. This is zero for any `i` beyond the
  /// degree.
  pub fn coefficient(&self, i: usize) -> T {
    self.coeffs.get(i).cloned().unwrap_or_else(T::zero)
  }

  pub fn coefficients(&self) -> &[T] {
    &self.coeffs
  }

  pub fn into_coefficients(self) -> Vec<T> {
    self.coeffs
  }

  /// The coefficient of the highest-degree term, or `None` for the
  /// zero polynomial.
  pub fn leading_coefficient(&self) -> Option<&T> {
    if self.is_zero() {
      None
    } else {
      self.coeffs.last()
    }
  }

  /// Multiplies every coefficient by `factor`.
  pub fn scale(&self, factor: &T) -> Self {
    self.coeffs.iter()
      .map(|c| c.clone() * factor.clone())
      .collect()
  }

  /// Evaluates the polynomial at `x`, accumulating a running power of
  /// `x` so that only `O(degree)` multiplications are needed.
  pub fn evaluate(&self, x: &T) -> T {
    let mut coeffs = self.coeffs.iter();
    // unwrap: A canonical polynomial always has at least one
    // coefficient.
    let mut result = coeffs.next().unwrap().clone();
    let mut power = x.clone();
    for coeff in coeffs {
      result = result + coeff.clone() * power.clone();
      power = power * x.clone();
    }
    result
  }

  /// Substitutes `inner` for the variable, producing
  /// `self(inner(x))`.
  ///
  /// This is Horner's rule carried out on polynomials, so it performs
  /// `O(degree)` polynomial multiplications, each of which grows with
  /// the degree of the partial result. It is not fast.
  pub fn compose(&self, inner: &Polynomial<T>) -> Polynomial<T> {
    self.coeffs.iter().rev().fold(Polynomial::zero(), |acc, coeff| {
      acc * inner.clone() + Polynomial::constant(coeff.clone())
    })
  }
}

impl<T: Field> Polynomial<T> {
  /// Long division of `self` by `divisor`, producing a quotient and
  /// remainder such that `self = quotient * divisor + remainder` and
  /// the remainder has smaller degree than the divisor.
  ///
  /// Fails if `divisor` is the zero polynomial. The result is only
  /// meaningful if `T` divides exactly.
  pub fn div_rem(&self, divisor: &Polynomial<T>) -> Result<(Polynomial<T>, Polynomial<T>), Error> {
    let (Some(divisor_degree), Some(divisor_lead)) = (divisor.degree(), divisor.leading_coefficient()) else {
      return Err(Error::DivisionByZero);
    };
    let mut remainder = self.clone();
    let quotient_len = self.coeffs.len().saturating_sub(divisor_degree);
    let mut quotient = vec![T::zero(); quotient_len];
    while let Some(degree) = remainder.degree().filter(|&d| d >= divisor_degree) {
      let shift = degree - divisor_degree;
      // unwrap: remainder has a degree, so it is nonzero.
      let ratio = remainder.leading_coefficient().unwrap().clone() / divisor_lead.clone();
      let step = Polynomial::monomial(ratio.clone(), shift) * divisor.clone();
      remainder = remainder - step;
      quotient[shift] = ratio;
      if remainder.degree() == Some(degree) {
        // Inexact division left the leading term behind. Drop it so
        // the loop terminates.
        remainder.coeffs[degree] = T::zero();
        remainder.normalize();
      }
    }
    Ok((Polynomial::new(quotient), remainder))
  }

  pub fn try_div(self, other: Polynomial<T>) -> Result<Polynomial<T>, Error> {
    self.div_rem(&other).map(|(quotient, _)| quotient)
  }

  pub fn try_rem(self, other: Polynomial<T>) -> Result<Polynomial<T>, Error> {
    self.div_rem(&other).map(|(_, remainder)| remainder)
  }

  /// Greatest common divisor by repeated remainder, normalized to be
  /// monic. The gcd of two zero polynomials is zero.
  pub fn gcd(&self, other: &Polynomial<T>) -> Polynomial<T> {
    let mut a = self.clone();
    let mut b = other.clone();
    while !b.is_zero() {
      // unwrap: b is nonzero.
      let (_, r) = a.div_rem(&b).unwrap();
      a = b;
      b = r;
    }
    match a.leading_coefficient() {
      None => a,
      Some(lead) => {
        let inverse = T::one() / lead.clone();
        a.scale(&inverse)
      }
    }
  }

  /// Least common multiple, as `self * other / gcd(self, other)`. If
  /// either polynomial is zero, the result is zero.
  pub fn lcm(&self, other: &Polynomial<T>) -> Polynomial<T> {
    if self.is_zero() || other.is_zero() {
      return Polynomial::zero();
    }
    let product = self.clone() * other.clone();
    // unwrap: Neither operand is zero, so neither is their gcd.
    let (quotient, _) = product.div_rem(&self.gcd(other)).unwrap();
    quotient
  }
}

impl<T: Ring> From<Vec<T>> for Polynomial<T> {
  fn from(coeffs: Vec<T>) -> Self {
    Self::new(coeffs)
  }
}

impl<T> From<Polynomial<T>> for Vec<T> {
  fn from(poly: Polynomial<T>) -> Self {
    poly.coeffs
  }
}

impl<T: Ring> FromIterator<T> for Polynomial<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self::new(iter.into_iter().collect())
  }
}

impl<T: Ring> Add for Polynomial<T> {
  type Output = Polynomial<T>;

  fn add(self, other: Polynomial<T>) -> Polynomial<T> {
    self.coeffs.into_iter()
      .zip_longest(other.coeffs)
      .map(|pair| match pair {
        EitherOrBoth::Both(a, b) => a + b,
        EitherOrBoth::Left(a) => a,
        EitherOrBoth::Right(b) => b,
      })
      .collect()
  }
}

impl<T: Ring> Sub for Polynomial<T> {
  type Output = Polynomial<T>;

  fn sub(self, other: Polynomial<T>) -> Polynomial<T> {
    self.coeffs.into_iter()
      .zip_longest(other.coeffs)
      .map(|pair| match pair {
        EitherOrBoth::Both(a, b) => a - b,
        EitherOrBoth::Left(a) => a,
        EitherOrBoth::Right(b) => -b,
      })
      .collect()
  }
}

impl<T: Ring> Mul for Polynomial<T> {
  type Output = Polynomial<T>;

  fn mul(self, other: Polynomial<T>) -> Polynomial<T> {
    let mut coeffs = vec![T::zero(); self.coeffs.len() + other.coeffs.len() - 1];
    for (i, a) in self.coeffs.iter().enumerate() {
      for (j, b) in other.coeffs.iter().enumerate() {
        coeffs[i + j] = coeffs[i + j].clone() + a.clone() * b.clone();
      }
    }
    Polynomial::new(coeffs)
  }
}

impl<T: Ring> Neg for Polynomial<T> {
  type Output = Polynomial<T>;

  fn neg(self) -> Polynomial<T> {
    Polynomial { coeffs: self.coeffs.into_iter().map(|c| -c).collect() }
  }
}

/// Panics on division by the zero polynomial.
impl<T: Field> Div for Polynomial<T> {
  type Output = Polynomial<T>;

  fn div(self, other: Polynomial<T>) -> Polynomial<T> {
    self.try_div(other).unwrap_or_else(|err| panic!("{err}"))
  }
}

/// Panics on division by the zero polynomial.
impl<T: Field> Rem for Polynomial<T> {
  type Output = Polynomial<T>;

  fn rem(self, other: Polynomial<T>) -> Polynomial<T> {
    self.try_rem(other).unwrap_or_else(|err| panic!("{err}"))
  }
}

impl<T: Ring> AddAssign for Polynomial<T> {
  fn add_assign(&mut self, other: Polynomial<T>) {
    *self = self.clone() + other;
  }
}

impl<T: Ring> SubAssign for Polynomial<T> {
  fn sub_assign(&mut self, other: Polynomial<T>) {
    *self = self.clone() - other;
  }
}

impl<T: Ring> MulAssign for Polynomial<T> {
  fn mul_assign(&mut self, other: Polynomial<T>) {
    *self = self.clone() * other;
  }
}

impl<T: Ring> Zero for Polynomial<T> {
  fn zero() -> Self {
    Polynomial { coeffs: vec![T::zero()] }
  }

  fn is_zero(&self) -> bool {
    self.coeffs.len() == 1 && self.coeffs[0].is_zero()
  }
}

impl<T: Ring> One for Polynomial<T> {
  fn one() -> Self {
    Polynomial { coeffs: vec![T::one()] }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fraction::Rational;

  fn poly(coeffs: &[i64]) -> Polynomial<Rational> {
    coeffs.iter().map(|&c| Rational::from(c)).collect()
  }

  #[test]
  fn test_canonical_form() {
    assert_eq!(poly(&[1, 2, 0, 0]).coefficients(), poly(&[1, 2]).coefficients());
    assert_eq!(poly(&[0, 0, 0]).coefficients(), &[Rational::zero()]);
    assert_eq!(poly(&[]), Polynomial::zero());
  }

  #[test]
  fn test_degree() {
    assert_eq!(poly(&[0]).degree(), None);
    assert_eq!(poly(&[5]).degree(), Some(0));
    assert_eq!(poly(&[1, 0, 3]).degree(), Some(2));
    assert_eq!(Polynomial::<i64>::x().degree(), Some(1));
  }

  #[test]
  fn test_coefficient_beyond_degree() {
    let p = poly(&[1, 2]);
    assert_eq!(p.coefficient(1), Rational::from(2));
    assert_eq!(p.coefficient(7), Rational::zero());
    assert_eq!(p.leading_coefficient(), Some(&Rational::from(2)));
    assert_eq!(poly(&[]).leading_coefficient(), None);
  }

  #[test]
  fn test_add_and_sub() {
    assert_eq!(poly(&[1, 2]) + poly(&[3, 4, 5]), poly(&[4, 6, 5]));
    assert_eq!(poly(&[1, 2, 5]) - poly(&[3, 4, 5]), poly(&[-2, -2]));
    assert_eq!(poly(&[1, 2]) - poly(&[1, 2]), Polynomial::zero());
  }

  #[test]
  fn test_mul() {
    // (x + 1)(x - 1) = x^2 - 1
    assert_eq!(poly(&[1, 1]) * poly(&[-1, 1]), poly(&[-1, 0, 1]));
    assert_eq!(poly(&[1, 1]) * Polynomial::zero(), Polynomial::zero());
  }

  #[test]
  fn test_assign_operators() {
    let mut p = poly(&[1, 1]);
    p *= poly(&[1, 1]);
    assert_eq!(p, poly(&[1, 2, 1]));
    p -= poly(&[1]);
    assert_eq!(p, poly(&[0, 2, 1]));
    p += poly(&[0, -2, -1]);
    assert!(p.is_zero());
  }

  #[test]
  fn test_division() {
    // (x^3 - 1) / (x - 1) = x^2 + x + 1
    let (q, r) = poly(&[-1, 0, 0, 1]).div_rem(&poly(&[-1, 1])).unwrap();
    assert_eq!(q, poly(&[1, 1, 1]));
    assert!(r.is_zero());
  }

  #[test]
  fn test_division_with_remainder() {
    let a = poly(&[1, 2, 3, 4]);
    let b = poly(&[1, 0, 2]);
    let (q, r) = a.div_rem(&b).unwrap();
    assert_eq!(q, Polynomial::new(vec![Rational::new(3, 2), Rational::from(2)]));
    assert_eq!(r, Polynomial::new(vec![Rational::new(-1, 2), Rational::from(0)]));
    assert_eq!(q * b + r, a);
  }

  #[test]
  fn test_division_by_lower_degree_dividend() {
    let (q, r) = poly(&[1, 1]).div_rem(&poly(&[0, 0, 1])).unwrap();
    assert!(q.is_zero());
    assert_eq!(r, poly(&[1, 1]));
  }

  #[test]
  fn test_division_by_zero() {
    assert_eq!(poly(&[1, 1]).div_rem(&Polynomial::zero()), Err(Error::DivisionByZero));
    assert_eq!(poly(&[1, 1]).try_rem(Polynomial::zero()), Err(Error::DivisionByZero));
  }

  #[test]
  fn test_operators() {
    assert_eq!(poly(&[-1, 0, 1]) / poly(&[1, 1]), poly(&[-1, 1]));
    assert_eq!(poly(&[0, 0, 1]) % poly(&[1, 1]), poly(&[1]));
  }

  #[test]
  #[should_panic]
  fn test_division_by_zero_operator_panics() {
    let _ = poly(&[1, 1]) / Polynomial::zero();
  }

  #[test]
  fn test_gcd() {
    // (x - 1)(x + 2) and (x - 1)(x + 3), scaled, have gcd x - 1.
    let a = poly(&[-2, 1, 1]).scale(&Rational::from(3));
    let b = poly(&[-3, 2, 1]).scale(&Rational::from(-2));
    assert_eq!(a.gcd(&b), poly(&[-1, 1]));
    assert_eq!(b.gcd(&a), poly(&[-1, 1]));
  }

  #[test]
  fn test_gcd_of_coprime_and_zero() {
    assert_eq!(poly(&[1, 1]).gcd(&poly(&[2, 1])), poly(&[1]));
    assert_eq!(poly(&[2, 4]).gcd(&Polynomial::zero()), Polynomial::new(vec![Rational::new(1, 2), Rational::one()]));
    assert_eq!(Polynomial::<Rational>::zero().gcd(&Polynomial::zero()), Polynomial::zero());
  }

  #[test]
  fn test_lcm() {
    let a = poly(&[-2, 1, 1]);
    let b = poly(&[-3, 2, 1]);
    // (x - 1)(x + 2)(x + 3)
    assert_eq!(a.lcm(&b), poly(&[-6, 1, 4, 1]));
    assert_eq!(a.lcm(&Polynomial::zero()), Polynomial::zero());
  }

  #[test]
  fn test_evaluate() {
    let p = poly(&[1, -3, 2]);
    assert_eq!(p.evaluate(&Rational::from(0)), Rational::from(1));
    assert_eq!(p.evaluate(&Rational::from(2)), Rational::from(3));
    assert_eq!(p.evaluate(&Rational::new(1, 2)), Rational::from(0));
    assert_eq!(Polynomial::<Rational>::zero().evaluate(&Rational::from(9)), Rational::zero());
  }

  #[test]
  fn test_compose() {
    // p(x) = x^2 + 1, q(x) = x + 1, p(q(x)) = x^2 + 2x + 2
    let p = poly(&[1, 0, 1]);
    let q = poly(&[1, 1]);
    assert_eq!(p.compose(&q), poly(&[2, 2, 1]));
    assert_eq!(q.compose(&p), poly(&[2, 0, 1]));
    assert_eq!(poly(&[7]).compose(&q), poly(&[7]));
  }

  #[test]
  fn test_integer_coefficients() {
    let p: Polynomial<i64> = Polynomial::new(vec![1, 1]);
    assert_eq!(p.clone() * p, Polynomial::new(vec![1, 2, 1]));
  }

  #[test]
  fn test_roundtrip_serialize() {
    let p = poly(&[1, 0, -2]);
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(serde_json::from_str::<Polynomial<Rational>>(&json).unwrap(), p);
    let padded: Polynomial<i64> = serde_json::from_str("[3,0,0]").unwrap();
    assert_eq!(padded, Polynomial::constant(3));
  }
}
