use super::{Matrix, MatrixIndex};
use crate::algebra::Ring;
use crate::util::double_borrow_mut;

/// A mutable reference to a [`Matrix`], on which elementary row
/// operations can be applied.
///
/// Alongside the matrix, this tracks the product of the factors by
/// which the row operations have scaled the determinant, so that
/// `det(current) = determinant_multiplier * det(original)`.
pub struct ReducibleMatrix<'a, T> {
  matrix: &'a mut Matrix<T>,
  determinant_multiplier: T,
}

impl<'a, T: Ring> ReducibleMatrix<'a, T> {
  pub fn new(matrix: &'a mut Matrix<T>) -> Self {
    Self {
      matrix,
      determinant_multiplier: T::one(),
    }
  }

  pub fn height(&self) -> usize {
    self.matrix.height()
  }

  pub fn width(&self) -> usize {
    self.matrix.width()
  }

  pub fn determinant_multiplier(&self) -> &T {
    &self.determinant_multiplier
  }

  pub fn into_determinant_multiplier(self) -> T {
    self.determinant_multiplier
  }

  pub fn get(&self, y: usize, x: usize) -> &T {
    &self.matrix[MatrixIndex { y, x }]
  }

  /// Swaps two rows of the matrix. Panics on out of bounds.
  pub fn swap_rows(&mut self, a: usize, b: usize) {
    if a == b {
      return; // No-op
    }
    self.matrix.body.swap(a, b);
    self.determinant_multiplier = - self.determinant_multiplier.clone();
  }

  /// Multiplies a row of the matrix by a nonzero scalar. It is the
  /// caller's responsibility to ensure that the scalar is nonzero.
  pub fn multiply(&mut self, row_index: usize, multiplier: T) {
    for elem in &mut self.matrix.body[row_index] {
      *elem = elem.clone() * multiplier.clone();
    }
    self.determinant_multiplier = multiplier * self.determinant_multiplier.clone();
  }

  /// Adds a scalar multiple of a row to another row. Leaves the
  /// determinant unchanged.
  ///
  /// Panics if the two row indices are equal.
  pub fn add_to_row(&mut self, row_index: usize, multiplier: T, addend_index: usize) {
    assert!(row_index != addend_index, "add_to_row cannot add a row to itself");
    let (row, addend_row) = double_borrow_mut(&mut self.matrix.body, row_index, addend_index);

    for (elem, addend) in row.iter_mut().zip(addend_row.iter()) {
      *elem = elem.clone() + multiplier.clone() * addend.clone();
    }
  }
}

impl<T> AsRef<Matrix<T>> for ReducibleMatrix<'_, T> {
  fn as_ref(&self) -> &Matrix<T> {
    self.matrix
  }
}
