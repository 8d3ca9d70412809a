//! Vectors and ordered sets of equal-length vectors, as produced by
//! [`Matrix::null_space`] and [`Matrix::column_space`].

use crate::algebra::{Ring, OrderedRing, Field};
use crate::error::Error;
use crate::matrix::Matrix;

use itertools::Itertools;
use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};
use std::ops::{Index, IndexMut, Neg};

/// A vector of ring elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MathVector<T> {
  elements: Vec<T>,
}

/// An ordered sequence of vectors, all of the same length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<MathVector<T>>", into = "Vec<MathVector<T>>")]
#[serde(bound(
  serialize = "T: Clone + Serialize",
  deserialize = "T: Deserialize<'de>",
))]
pub struct VectorSet<T> {
  vectors: Vec<MathVector<T>>,
}

fn vector_shape(len: usize) -> (usize, usize) {
  (len, 1)
}

impl<T> MathVector<T> {
  pub fn new(elements: Vec<T>) -> Self {
    Self { elements }
  }

  pub fn len(&self) -> usize {
    self.elements.len()
  }

  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &T> {
    self.elements.iter()
  }

  pub fn as_slice(&self) -> &[T] {
    &self.elements
  }

  pub fn into_vec(self) -> Vec<T> {
    self.elements
  }

  fn zip_with<F>(self, other: MathVector<T>, operation: &'static str, mut f: F) -> Result<MathVector<T>, Error>
  where F: FnMut(T, T) -> T {
    if self.len() != other.len() {
      return Err(Error::dimension_mismatch(operation, vector_shape(self.len()), vector_shape(other.len())));
    }
    Ok(self.elements.into_iter().zip(other.elements).map(|(a, b)| f(a, b)).collect())
  }
}

impl<T: Ring> MathVector<T> {
  pub fn zeros(len: usize) -> Self {
    Self::new(vec![T::zero(); len])
  }

  pub fn is_zero(&self) -> bool {
    self.elements.iter().all(|x| x.is_zero())
  }

  pub fn dot(&self, other: &MathVector<T>) -> Result<T, Error> {
    if self.len() != other.len() {
      return Err(Error::dimension_mismatch("dot product", vector_shape(self.len()), vector_shape(other.len())));
    }
    Ok(
      self.iter()
        .zip(other.iter())
        .fold(T::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
    )
  }

  pub fn try_add(self, other: MathVector<T>) -> Result<MathVector<T>, Error> {
    self.zip_with(other, "vector addition", |a, b| a + b)
  }

  pub fn try_sub(self, other: MathVector<T>) -> Result<MathVector<T>, Error> {
    self.zip_with(other, "vector subtraction", |a, b| a - b)
  }

  pub fn scale(&self, coef: &T) -> MathVector<T> {
    self.iter().map(|x| x.clone() * coef.clone()).collect()
  }
}

impl<T: Ring> Neg for MathVector<T> {
  type Output = MathVector<T>;

  fn neg(self) -> MathVector<T> {
    self.elements.into_iter().map(|x| -x).collect()
  }
}

impl<T> Index<usize> for MathVector<T> {
  type Output = T;

  fn index(&self, index: usize) -> &T {
    &self.elements[index]
  }
}

impl<T> IndexMut<usize> for MathVector<T> {
  fn index_mut(&mut self, index: usize) -> &mut T {
    &mut self.elements[index]
  }
}

impl<T> From<Vec<T>> for MathVector<T> {
  fn from(elements: Vec<T>) -> Self {
    Self::new(elements)
  }
}

impl<T> FromIterator<T> for MathVector<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self::new(iter.into_iter().collect())
  }
}

impl<T> IntoIterator for MathVector<T> {
  type Item = T;
  type IntoIter = std::vec::IntoIter<T>;

  fn into_iter(self) -> Self::IntoIter {
    self.elements.into_iter()
  }
}

impl<T: Display> Display for MathVector<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    if self.is_empty() {
      write!(f, "( )")
    } else {
      write!(f, "( {} )", self.elements.iter().join(" "))
    }
  }
}

impl<T> VectorSet<T> {
  /// Fails with [`Error::DimensionMismatch`] if the vectors do not
  /// all have the same length.
  pub fn new(vectors: Vec<MathVector<T>>) -> Result<Self, Error> {
    if let Some(first) = vectors.first() {
      if let Some(other) = vectors.iter().find(|v| v.len() != first.len()) {
        return Err(Error::dimension_mismatch("vector set", vector_shape(first.len()), vector_shape(other.len())));
      }
    }
    Ok(Self { vectors })
  }

  /// Wraps vectors already known to share a length.
  pub(crate) fn from_equal_length(vectors: Vec<MathVector<T>>) -> Self {
    debug_assert!(vectors.iter().map(MathVector::len).all_equal());
    Self { vectors }
  }

  pub fn empty() -> Self {
    Self { vectors: Vec::new() }
  }

  pub fn push(&mut self, vector: MathVector<T>) -> Result<(), Error> {
    if let Some(dimension) = self.dimension() {
      if dimension != vector.len() {
        return Err(Error::dimension_mismatch("vector set", vector_shape(dimension), vector_shape(vector.len())));
      }
    }
    self.vectors.push(vector);
    Ok(())
  }

  /// The number of vectors in the set.
  pub fn len(&self) -> usize {
    self.vectors.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vectors.is_empty()
  }

  /// The common length of the vectors, or `None` if the set is empty.
  pub fn dimension(&self) -> Option<usize> {
    self.vectors.first().map(MathVector::len)
  }

  pub fn iter(&self) -> impl Iterator<Item = &MathVector<T>> {
    self.vectors.iter()
  }

  pub fn into_vec(self) -> Vec<MathVector<T>> {
    self.vectors
  }
}

impl<T: OrderedRing + Field> VectorSet<T> {
  /// A linearly independent subset of the vectors with the same span.
  pub fn basis(&self) -> VectorSet<T> {
    Matrix::from(self.clone()).column_space()
  }
}

impl<T> Default for VectorSet<T> {
  fn default() -> Self {
    Self::empty()
  }
}

impl<T> Index<usize> for VectorSet<T> {
  type Output = MathVector<T>;

  fn index(&self, index: usize) -> &MathVector<T> {
    &self.vectors[index]
  }
}

impl<T> IntoIterator for VectorSet<T> {
  type Item = MathVector<T>;
  type IntoIter = std::vec::IntoIter<MathVector<T>>;

  fn into_iter(self) -> Self::IntoIter {
    self.vectors.into_iter()
  }
}

impl<T> TryFrom<Vec<MathVector<T>>> for VectorSet<T> {
  type Error = Error;

  fn try_from(vectors: Vec<MathVector<T>>) -> Result<Self, Error> {
    Self::new(vectors)
  }
}

impl<T> From<VectorSet<T>> for Vec<MathVector<T>> {
  fn from(set: VectorSet<T>) -> Self {
    set.vectors
  }
}

/// Each vector becomes a column, so `k` vectors of length `m` give an
/// `m * k` matrix.
impl<T> From<VectorSet<T>> for Matrix<T> {
  fn from(set: VectorSet<T>) -> Self {
    let rows = set.vectors.into_iter().map(MathVector::into_vec).collect();
    // unwrap: All vectors in a set have the same length.
    Matrix::new(rows).unwrap().transpose()
  }
}

/// Each column of the matrix becomes a vector.
impl<T> From<Matrix<T>> for VectorSet<T> {
  fn from(matrix: Matrix<T>) -> Self {
    let vectors = matrix.transpose()
      .into_row_major()
      .into_iter()
      .map(MathVector::new)
      .collect();
    Self { vectors }
  }
}

impl<T: Display> Display for VectorSet<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.vectors.iter().join("\n"))
  }
}
