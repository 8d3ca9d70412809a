use super::{Matrix, MatrixIndex};
use crate::vector::MathVector;

use std::ops::Index;

/// A (borrowed) column of a [`Matrix`]. It can be assumed that a
/// [`Column`] is always in-bounds.
#[derive(Debug, Clone, Copy)]
pub struct Column<'a, T> {
  pub(super) matrix: &'a Matrix<T>,
  pub(super) column_index: usize,
}

impl<'a, T> Column<'a, T> {
  pub fn column_index(&self) -> usize {
    self.column_index
  }

  pub fn get(&self, index: usize) -> Option<&'a T> {
    self.matrix.get(MatrixIndex { y: index, x: self.column_index })
  }

  pub fn len(&self) -> usize {
    self.matrix.height()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  pub fn iter(&self) -> impl Iterator<Item = &'a T> + 'a {
    let column_index = self.column_index;
    self.matrix.body.iter().map(move |row| &row[column_index])
  }

  pub fn to_owned(&self) -> Vec<T>
  where T: Clone {
    self.iter().cloned().collect()
  }

  /// Copies the column out as a vector.
  pub fn to_vector(&self) -> MathVector<T>
  where T: Clone {
    MathVector::new(self.to_owned())
  }
}

impl<'a, T> Index<usize> for Column<'a, T> {
  type Output = T;

  fn index(&self, index: usize) -> &Self::Output {
    &self.matrix[MatrixIndex { y: index, x: self.column_index }]
  }
}
