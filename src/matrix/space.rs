//! The null space and column space of a matrix.

use super::{Matrix, MatrixIndex, ReducibleMatrix};
use super::echelon::forward_eliminate;
use crate::algebra::{OrderedRing, Field};
use crate::mode::ReductionMode;
use crate::vector::{MathVector, VectorSet};

use tracing::trace;

impl<T: OrderedRing + Field> Matrix<T> {
  /// A basis of the solutions to `A x = 0`, one vector per free
  /// (non-pivot) column of the reduced echelon form.
  ///
  /// Each basis vector has a one in its free column, zero in every
  /// other free column, and pivot entries chosen to cancel the rest.
  pub fn null_space(&self) -> VectorSet<T> {
    let width = self.width();
    let reduced = self.reduced_echelon_form();
    let pivots = reduced.pivots();
    let reduced = reduced.matrix();

    let free_columns = (0..width).filter(|x| !pivots.iter().any(|pivot| pivot.x == *x));
    let vectors = free_columns
      .map(|free_column| {
        let mut values = vec![T::zero(); width];
        values[free_column] = T::one();
        for pivot in pivots.iter().rev() {
          let sum = ((pivot.x + 1)..width).fold(T::zero(), |acc, k| {
            acc + values[k].clone() * reduced[MatrixIndex { y: pivot.y, x: k }].clone()
          });
          values[pivot.x] = - sum;
        }
        MathVector::new(values)
      })
      .collect::<Vec<_>>();
    trace!(nullity = vectors.len(), "computed null space");
    VectorSet::from_equal_length(vectors)
  }

  /// A basis of the span of the columns, drawn from the columns
  /// themselves.
  ///
  /// The columns are eliminated as rows of the transpose. Each row
  /// remembers which column it started as, so every pivot row found
  /// names an original column to include.
  pub fn column_space(&self) -> VectorSet<T> {
    let mut transposed = self.clone().transpose();
    let mut origins: Vec<usize> = (0..transposed.height()).collect();
    let mut red = ReducibleMatrix::new(&mut transposed);
    let pivots = forward_eliminate(&mut red, &ReductionMode::default(), |a, b| origins.swap(a, b));
    let vectors = pivots.iter()
      .filter_map(|pivot| self.column(origins[pivot.y]))
      .map(|column| column.to_vector())
      .collect::<Vec<_>>();
    trace!(rank = vectors.len(), "computed column space");
    VectorSet::from_equal_length(vectors)
  }
}
