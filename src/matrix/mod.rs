//! Rectangular matrices and the exact linear-algebra algorithms
//! defined on them.
//!
//! The base type [`Matrix<T>`] places no requirements on `T`. Each
//! family of algorithms lives in its own submodule and states the
//! capability traits from [`crate::algebra`] it needs:
//!
//! * [`arith`]: sums, products, scalar offsets, and powers over any
//!   [`Ring`].
//! * [`echelon`]: row reduction, rank, and inverse over an ordered
//!   [`Field`](crate::algebra::Field).
//! * [`determinant`]: elimination and Leibniz determinants, and the
//!   characteristic polynomial.
//! * [`space`]: null space and column space.
//! * [`io`]: text parsing and display.

pub mod arith;
pub mod determinant;
pub mod echelon;
pub mod io;
pub mod space;

mod column;
mod row_reduction;

pub use column::Column;
pub use echelon::Echelon;
pub use io::ParseMatrixError;
pub use row_reduction::ReducibleMatrix;

use crate::algebra::Ring;
use crate::error::{Error, Shape};
use crate::util::transpose;

use thiserror::Error;
use serde::{Serialize, Deserialize};

use std::fmt::{self, Debug};
use std::ops::{Index, IndexMut};

/// A `Matrix<T>` is a vector of vectors of `T` in which each
/// constituent vector has the same length.
///
/// Matrices are plain values. Every algorithm that transforms a
/// matrix works on its own copy and returns a new matrix, leaving the
/// receiver untouched; only the compound assignment operators (`+=`
/// and friends) modify a matrix in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "Vec<Vec<T>>")]
pub struct Matrix<T> {
  body: Vec<Vec<T>>,
}

/// An index into a matrix. Matrix indices are 0-based, like all Rust
/// data structures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatrixIndex {
  pub y: usize,
  pub x: usize,
}

#[derive(Clone, Error)]
#[error("The dimensions of the matrix are inconsistent")]
pub struct MatrixDimsError<T> {
  original_data: Vec<Vec<T>>,
}

impl<T> Matrix<T> {
  pub fn new(body: Vec<Vec<T>>) -> Result<Matrix<T>, MatrixDimsError<T>> {
    if body.is_empty() {
      return Ok(Matrix { body });
    }
    if body.iter().any(|row| row.len() != body[0].len()) {
      return Err(MatrixDimsError { original_data: body });
    }
    Ok(Matrix { body })
  }

  /// Calls `generator` for each index in a new `height * width`
  /// matrix to produce elements for that matrix. The generator will
  /// be called in row-major order.
  pub fn from_generator<F>(height: usize, width: usize, mut generator: F) -> Self
  where F: FnMut(MatrixIndex) -> T {
    let body = (0..height)
      .map(|y| (0..width).map(|x| generator(MatrixIndex { y, x })).collect())
      .collect();
    Matrix { body }
  }

  pub fn of_value(height: usize, width: usize, value: T) -> Self
  where T: Clone {
    Matrix::from_generator(height, width, |_| value.clone())
  }

  pub fn empty() -> Self {
    Matrix { body: Vec::new() }
  }

  pub fn into_row_major(self) -> Vec<Vec<T>> {
    self.body
  }

  pub fn row(&self, index: usize) -> Option<&[T]> {
    self.body.get(index).map(|row| row.as_slice())
  }

  pub fn row_mut(&mut self, index: usize) -> Option<&mut [T]> {
    self.body.get_mut(index).map(|row| row.as_mut_slice())
  }

  pub fn column(&self, index: usize) -> Option<Column<'_, T>> {
    if index < self.width() {
      Some(Column { matrix: self, column_index: index })
    } else {
      None
    }
  }

  /// Mutable references to the entries of a column, top to bottom.
  pub fn column_mut(&mut self, index: usize) -> Option<impl Iterator<Item = &mut T> + '_> {
    if index < self.width() {
      Some(self.body.iter_mut().map(move |row| &mut row[index]))
    } else {
      None
    }
  }

  pub fn columns(&self) -> impl Iterator<Item = Column<'_, T>> + '_ {
    (0..self.width()).map(|column_index| Column { matrix: self, column_index })
  }

  pub fn get(&self, index: MatrixIndex) -> Option<&T> {
    self.body
      .get(index.y)
      .and_then(|row| row.get(index.x))
  }

  pub fn get_mut(&mut self, index: MatrixIndex) -> Option<&mut T> {
    self.body
      .get_mut(index.y)
      .and_then(|row| row.get_mut(index.x))
  }

  pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
    self.body.iter().map(|row| row.as_slice())
  }

  pub fn items(&self) -> impl Iterator<Item = &T> + '_ {
    self.body.iter().flat_map(|row| row.iter())
  }

  pub fn into_items(self) -> impl Iterator<Item = T> {
    self.body.into_iter().flatten()
  }

  pub fn width(&self) -> usize {
    self.body
      .first()
      .map(|row| row.len())
      .unwrap_or_default()
  }

  pub fn height(&self) -> usize {
    self.body.len()
  }

  /// The shape of the matrix, as `(height, width)`.
  pub fn shape(&self) -> Shape {
    (self.height(), self.width())
  }

  pub fn is_square(&self) -> bool {
    self.height() == self.width()
  }

  /// Fails with [`Error::InvalidShape`] unless the matrix is square.
  pub fn require_square(&self, operation: &'static str) -> Result<(), Error> {
    if self.is_square() {
      Ok(())
    } else {
      Err(Error::invalid_shape(operation, self.shape()))
    }
  }

  pub fn map<F, U>(self, mut f: F) -> Matrix<U>
  where F: FnMut(T) -> U {
    Matrix {
      body: self
        .body
        .into_iter()
        .map(|row| row.into_iter().map(&mut f).collect())
        .collect(),
    }
  }

  pub fn transpose(self) -> Self {
    Matrix { body: transpose(self.body) }
  }

  /// Joins `other` to the right of `self`. The two matrices must have
  /// the same number of rows.
  pub fn concat(self, other: Matrix<T>) -> Result<Self, Error> {
    if self.height() != other.height() {
      return Err(Error::dimension_mismatch("concatenation", self.shape(), other.shape()));
    }
    let body = self.body.into_iter()
      .zip(other.body)
      .map(|(mut left, right)| {
        left.extend(right);
        left
      })
      .collect();
    Ok(Matrix { body })
  }
}

impl<T: Ring> Matrix<T> {
  pub fn zeros(height: usize, width: usize) -> Self {
    Matrix::from_generator(height, width, |_| T::zero())
  }

  /// The `height * width` matrix with ones on the main diagonal and
  /// zeros elsewhere. The matrix need not be square.
  pub fn identity_like(height: usize, width: usize) -> Self {
    Matrix::from_generator(height, width, |index| {
      if index.x == index.y { T::one() } else { T::zero() }
    })
  }

  pub fn identity(n: usize) -> Self {
    Matrix::identity_like(n, n)
  }

  /// The square matrix with `elements` on its diagonal.
  pub fn diagonal(elements: Vec<T>) -> Self {
    // from_generator calls its function in row-major order, so we
    // can pull the diagonal entries from the iterator as we meet
    // them.
    let len = elements.len();
    let mut iter = elements.into_iter();
    Matrix::from_generator(len, len, move |index| {
      if index.x == index.y {
        // unwrap: We know we have `len` elements in the iterator.
        iter.next().unwrap()
      } else {
        T::zero()
      }
    })
  }
}

impl<T> MatrixDimsError<T> {
  pub fn recover_payload(self) -> Vec<Vec<T>> {
    self.original_data
  }
}

impl<T> Debug for MatrixDimsError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "MatrixDimsError {{ ... }}")
  }
}

impl<T> Default for Matrix<T> {
  fn default() -> Self {
    Matrix::empty()
  }
}

impl<T> TryFrom<Vec<Vec<T>>> for Matrix<T> {
  type Error = MatrixDimsError<T>;

  fn try_from(body: Vec<Vec<T>>) -> Result<Self, Self::Error> {
    Self::new(body)
  }
}

impl<T> Index<usize> for Matrix<T> {
  type Output = [T];

  fn index(&self, index: usize) -> &Self::Output {
    &self.body[index]
  }
}

impl<T> Index<MatrixIndex> for Matrix<T> {
  type Output = T;

  fn index(&self, index: MatrixIndex) -> &Self::Output {
    &self.body[index.y][index.x]
  }
}

impl<T> IndexMut<MatrixIndex> for Matrix<T> {
  fn index_mut(&mut self, index: MatrixIndex) -> &mut Self::Output {
    &mut self.body[index.y][index.x]
  }
}

impl<T: Serialize> Serialize for Matrix<T> {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where S: serde::Serializer {
    self.body.serialize(serializer)
  }
}
