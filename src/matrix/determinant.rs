//! Determinants and the characteristic polynomial.

use super::{Matrix, MatrixIndex};
use crate::algebra::{Ring, OrderedRing, Field};
use crate::error::Error;
use crate::mode::DeterminantMethod;
use crate::permutation::Permutation;
use crate::polynomial::Polynomial;

use num::Zero;
use tracing::debug;

impl<T: OrderedRing + Field> Matrix<T> {
  /// The determinant of a square matrix, by forward elimination.
  ///
  /// Elimination only swaps and negates rows and adds multiples of
  /// one row to another, so the determinant of the echelon form
  /// (the product of its diagonal) differs from ours by the sign the
  /// elimination recorded.
  pub fn determinant(&self) -> Result<T, Error> {
    self.require_square("determinant")?;
    let echelon = self.echelon_form();
    let diagonal = (0..self.height())
      .map(|i| echelon.matrix()[MatrixIndex { y: i, x: i }].clone())
      .fold(T::one(), |acc, x| acc * x);
    Ok(diagonal / echelon.determinant_multiplier().clone())
  }

  pub fn determinant_with(&self, method: DeterminantMethod) -> Result<T, Error> {
    debug!(?method, shape = ?self.shape(), "computing determinant");
    match method {
      DeterminantMethod::Elimination => self.determinant(),
      DeterminantMethod::Leibniz => self.determinant_leibniz(),
    }
  }

  /// Whether the matrix is square with a nonzero determinant.
  pub fn is_invertible(&self) -> bool {
    self.determinant().is_ok_and(|det| !det.is_zero())
  }
}

impl<T: Ring> Matrix<T> {
  /// The determinant of a square matrix, as the signed sum over all
  /// permutations of products of entries.
  ///
  /// This takes `n!` steps but needs nothing beyond ring operations,
  /// so it works for entries that cannot be divided, such as
  /// polynomials.
  pub fn determinant_leibniz(&self) -> Result<T, Error> {
    self.require_square("determinant")?;
    let n = self.height();
    let det = Permutation::all(n).fold(T::zero(), |acc, perm| {
      let term = (0..n).fold(perm.sign().into_ring::<T>(), |prod, i| {
        prod * self.body[i][perm[i] - 1].clone()
      });
      acc + term
    });
    Ok(det)
  }

  /// The polynomial `det(xI - A)`. Its roots are the eigenvalues of
  /// `A`.
  pub fn characteristic_polynomial(&self) -> Result<Polynomial<T>, Error> {
    self.require_square("characteristic polynomial")?;
    let n = self.height();
    debug!(size = n, "building characteristic polynomial");
    let shifted = Matrix::from_generator(n, n, |MatrixIndex { y, x }| {
      let entry = Polynomial::constant(- self.body[y][x].clone());
      if y == x {
        entry + Polynomial::x()
      } else {
        entry
      }
    });
    shifted.determinant_leibniz()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::matrix::test_utils::rational_matrix;
  use crate::fraction::Rational;

  #[test]
  fn test_determinant_2x2() {
    let matrix = rational_matrix(&[&[2, 4], &[1, 3]]);
    assert_eq!(matrix.determinant(), Ok(Rational::from(2)));
    assert_eq!(matrix.determinant_leibniz(), Ok(Rational::from(2)));
  }

  #[test]
  fn test_determinant_sign_after_swap() {
    // A single row swap is needed to find a pivot.
    let matrix = rational_matrix(&[&[0, 1], &[1, 0]]);
    assert_eq!(matrix.determinant(), Ok(Rational::from(-1)));
    assert_eq!(matrix.determinant_leibniz(), Ok(Rational::from(-1)));
  }

  #[test]
  fn test_determinant_3x3_agrees() {
    let matrix = rational_matrix(&[&[3, 1, 4], &[1, 5, 9], &[2, 6, 5]]);
    assert_eq!(matrix.determinant(), Ok(Rational::from(-90)));
    assert_eq!(matrix.determinant_with(DeterminantMethod::Leibniz), Ok(Rational::from(-90)));
  }

  #[test]
  fn test_determinant_of_singular_matrix() {
    let matrix = rational_matrix(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]);
    assert_eq!(matrix.determinant(), Ok(Rational::from(0)));
    assert!(!matrix.is_invertible());
  }

  #[test]
  fn test_determinant_of_empty_matrix() {
    let matrix = Matrix::<Rational>::empty();
    assert_eq!(matrix.determinant(), Ok(Rational::from(1)));
    assert_eq!(matrix.determinant_leibniz(), Ok(Rational::from(1)));
  }

  #[test]
  fn test_determinant_requires_square() {
    let matrix = rational_matrix(&[&[1, 2, 3]]);
    assert_eq!(matrix.determinant(), Err(Error::invalid_shape("determinant", (1, 3))));
    assert_eq!(matrix.determinant_leibniz(), Err(Error::invalid_shape("determinant", (1, 3))));
    assert!(!matrix.is_invertible());
  }

  #[test]
  fn test_leibniz_over_integers() {
    let matrix = Matrix::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
    assert_eq!(matrix.determinant_leibniz(), Ok(-2));
  }

  #[test]
  fn test_characteristic_polynomial() {
    let matrix = Matrix::new(vec![vec![2, 1], vec![1, 2]]).unwrap();
    assert_eq!(matrix.characteristic_polynomial(), Ok(Polynomial::new(vec![3, -4, 1])));
    assert_eq!(matrix.characteristic_polynomial().unwrap().to_string(), "x^2-4*x+3");
  }

  #[test]
  fn test_characteristic_polynomial_at_zero_is_signed_determinant() {
    let matrix = rational_matrix(&[&[3, 1, 4], &[1, 5, 9], &[2, 6, 5]]);
    let poly = matrix.characteristic_polynomial().unwrap();
    assert_eq!(poly.degree(), Some(3));
    // det(0 - A) = (-1)^3 det(A)
    assert_eq!(poly.evaluate(&Rational::from(0)), Rational::from(90));
  }

  #[test]
  fn test_characteristic_polynomial_requires_square() {
    let matrix = Matrix::new(vec![vec![1, 2]]).unwrap();
    assert_eq!(
      matrix.characteristic_polynomial(),
      Err(Error::invalid_shape("characteristic polynomial", (1, 2))),
    );
  }
}
