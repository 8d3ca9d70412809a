//! Ring arithmetic on matrices.
//!
//! Each fallible operation has a `try_*` method. The ordinary
//! operators delegate to it and panic on a dimension mismatch, just
//! as integer division panics on a zero divisor.

use super::{Matrix, MatrixIndex};
use crate::algebra::Ring;
use crate::error::Error;
use crate::vector::MathVector;

use std::ops::{Add, Sub, Mul, Neg, AddAssign, SubAssign, MulAssign};

impl<T: Ring> Matrix<T> {
  fn zip_with<F>(self, other: Matrix<T>, operation: &'static str, mut f: F) -> Result<Matrix<T>, Error>
  where F: FnMut(T, T) -> T {
    if self.shape() != other.shape() {
      return Err(Error::dimension_mismatch(operation, self.shape(), other.shape()));
    }
    let body = self.body.into_iter()
      .zip(other.body)
      .map(|(left, right)| left.into_iter().zip(right).map(|(a, b)| f(a, b)).collect())
      .collect();
    Ok(Matrix { body })
  }

  pub fn try_add(self, other: Matrix<T>) -> Result<Matrix<T>, Error> {
    self.zip_with(other, "addition", |a, b| a + b)
  }

  pub fn try_sub(self, other: Matrix<T>) -> Result<Matrix<T>, Error> {
    self.zip_with(other, "subtraction", |a, b| a - b)
  }

  pub fn try_mul(self, other: Matrix<T>) -> Result<Matrix<T>, Error> {
    if self.width() != other.height() {
      return Err(Error::dimension_mismatch("multiplication", self.shape(), other.shape()));
    }
    let inner = self.width();
    Ok(Matrix::from_generator(self.height(), other.width(), |MatrixIndex { y, x }| {
      (0..inner).fold(T::zero(), |acc, k| acc + self.body[y][k].clone() * other.body[k][x].clone())
    }))
  }

  /// Multiplies every entry by `coef`.
  pub fn scale(&self, coef: &T) -> Matrix<T> {
    self.clone().map(|x| x * coef.clone())
  }

  /// Adds `coef` times the identity-like matrix of the same shape.
  /// For a square matrix, this is the matrix `A + cI`.
  pub fn add_scalar(&self, coef: &T) -> Matrix<T> {
    let (height, width) = self.shape();
    let offset = Matrix::identity_like(height, width).scale(coef);
    // unwrap: The offset has the same shape as self.
    self.clone().try_add(offset).unwrap()
  }

  /// Subtracts `coef` times the identity-like matrix of the same
  /// shape. For a square matrix, this is the matrix `A - cI`.
  pub fn sub_scalar(&self, coef: &T) -> Matrix<T> {
    self.add_scalar(&-coef.clone())
  }

  /// Applies the matrix to a column vector.
  pub fn apply(&self, vector: &MathVector<T>) -> Result<MathVector<T>, Error> {
    if self.width() != vector.len() {
      return Err(Error::dimension_mismatch("matrix-vector product", self.shape(), (vector.len(), 1)));
    }
    Ok(
      self.rows()
        .map(|row| {
          row.iter().zip(vector.iter()).fold(T::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
        })
        .collect()
    )
  }

  /// Raises a square matrix to a non-negative integer power by
  /// repeated squaring.
  pub fn pow(&self, mut exponent: u64) -> Result<Matrix<T>, Error> {
    self.require_square("power")?;
    let mut result = Matrix::identity(self.height());
    let mut base = self.clone();
    while exponent > 0 {
      if exponent & 1 == 1 {
        result = result * base.clone();
      }
      exponent >>= 1;
      if exponent > 0 {
        base = base.clone() * base;
      }
    }
    Ok(result)
  }
}

impl<T: Ring> Add for Matrix<T> {
  type Output = Matrix<T>;

  fn add(self, other: Matrix<T>) -> Matrix<T> {
    self.try_add(other).unwrap_or_else(|err| panic!("{err}"))
  }
}

impl<T: Ring> Sub for Matrix<T> {
  type Output = Matrix<T>;

  fn sub(self, other: Matrix<T>) -> Matrix<T> {
    self.try_sub(other).unwrap_or_else(|err| panic!("{err}"))
  }
}

impl<T: Ring> Mul for Matrix<T> {
  type Output = Matrix<T>;

  fn mul(self, other: Matrix<T>) -> Matrix<T> {
    self.try_mul(other).unwrap_or_else(|err| panic!("{err}"))
  }
}

impl<T: Ring> Neg for Matrix<T> {
  type Output = Matrix<T>;

  fn neg(self) -> Matrix<T> {
    self.map(|x| -x)
  }
}

impl<T: Ring> AddAssign for Matrix<T> {
  fn add_assign(&mut self, other: Matrix<T>) {
    *self = std::mem::take(self) + other;
  }
}

impl<T: Ring> SubAssign for Matrix<T> {
  fn sub_assign(&mut self, other: Matrix<T>) {
    *self = std::mem::take(self) - other;
  }
}

impl<T: Ring> MulAssign for Matrix<T> {
  fn mul_assign(&mut self, other: Matrix<T>) {
    *self = std::mem::take(self) * other;
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::matrix::test_utils::rational_matrix;
  use crate::fraction::Rational;

  fn matrix(rows: Vec<Vec<i64>>) -> Matrix<i64> {
    Matrix::new(rows).unwrap()
  }

  #[test]
  fn test_add_and_sub() {
    let a = matrix(vec![vec![1, 2], vec![3, 4]]);
    let b = matrix(vec![vec![10, 20], vec![30, 40]]);
    assert_eq!(a.clone() + b.clone(), matrix(vec![vec![11, 22], vec![33, 44]]));
    assert_eq!(b - a, matrix(vec![vec![9, 18], vec![27, 36]]));
  }

  #[test]
  fn test_add_mismatch() {
    let a = matrix(vec![vec![1, 2]]);
    let b = matrix(vec![vec![1], vec![2]]);
    assert_eq!(a.try_add(b), Err(Error::dimension_mismatch("addition", (1, 2), (2, 1))));
  }

  #[test]
  #[should_panic]
  fn test_add_mismatch_operator_panics() {
    let _ = matrix(vec![vec![1, 2]]) + matrix(vec![vec![1]]);
  }

  #[test]
  fn test_mul() {
    let a = matrix(vec![vec![1, 2, 3], vec![4, 5, 6]]);
    let b = matrix(vec![vec![7, 8], vec![9, 10], vec![11, 12]]);
    assert_eq!(a * b, matrix(vec![vec![58, 64], vec![139, 154]]));
  }

  #[test]
  fn test_mul_mismatch() {
    let a = matrix(vec![vec![1, 2, 3]]);
    let b = matrix(vec![vec![1, 2, 3]]);
    assert_eq!(a.try_mul(b), Err(Error::dimension_mismatch("multiplication", (1, 3), (1, 3))));
  }

  #[test]
  fn test_assign_operators() {
    let mut a = matrix(vec![vec![1, 1], vec![0, 1]]);
    a *= matrix(vec![vec![1, 1], vec![0, 1]]);
    assert_eq!(a, matrix(vec![vec![1, 2], vec![0, 1]]));
    a += Matrix::identity(2);
    assert_eq!(a, matrix(vec![vec![2, 2], vec![0, 2]]));
    a -= matrix(vec![vec![2, 2], vec![0, 2]]);
    assert_eq!(a, Matrix::zeros(2, 2));
  }

  #[test]
  fn test_scalar_operations() {
    let a = rational_matrix(&[&[1, 2], &[3, 4]]);
    let two = Rational::from(2);
    assert_eq!(a.scale(&two), rational_matrix(&[&[2, 4], &[6, 8]]));
    assert_eq!(a.add_scalar(&two), rational_matrix(&[&[3, 2], &[3, 6]]));
    assert_eq!(a.sub_scalar(&two), rational_matrix(&[&[-1, 2], &[3, 2]]));
    assert_eq!(-a, rational_matrix(&[&[-1, -2], &[-3, -4]]));
  }

  #[test]
  fn test_apply() {
    let a = matrix(vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
    let v = MathVector::new(vec![1, -1]);
    assert_eq!(a.apply(&v), Ok(MathVector::new(vec![-1, -1, -1])));
    assert!(a.apply(&MathVector::new(vec![1, 2, 3])).is_err());
  }

  #[test]
  fn test_pow() {
    let fib = matrix(vec![vec![1, 1], vec![1, 0]]);
    assert_eq!(fib.pow(0), Ok(Matrix::identity(2)));
    assert_eq!(fib.pow(1), Ok(fib.clone()));
    assert_eq!(fib.pow(10), Ok(matrix(vec![vec![89, 55], vec![55, 34]])));
  }

  #[test]
  fn test_pow_requires_square() {
    let a = matrix(vec![vec![1, 2, 3]]);
    assert_eq!(a.pow(2), Err(Error::invalid_shape("power", (1, 3))));
  }
}
