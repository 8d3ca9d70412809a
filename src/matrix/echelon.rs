//! Gaussian elimination: echelon forms, rank, and inverse.

use super::{Matrix, MatrixIndex, ReducibleMatrix};
use crate::algebra::{OrderedRing, Field, abs, is_negative};
use crate::error::Error;
use crate::mode::ReductionMode;

use num::{Zero, One};
use tracing::{trace, debug};

use std::cmp::Ordering;

/// The result of forward elimination on a matrix.
///
/// Pivot positions are listed top to bottom, so the `i`th pivot
/// always lives in row `i`, and their columns are strictly
/// increasing.
#[derive(Debug, Clone, PartialEq)]
pub struct Echelon<T> {
  matrix: Matrix<T>,
  pivots: Vec<MatrixIndex>,
  determinant_multiplier: T,
}

impl<T> Echelon<T> {
  pub fn matrix(&self) -> &Matrix<T> {
    &self.matrix
  }

  pub fn into_matrix(self) -> Matrix<T> {
    self.matrix
  }

  pub fn pivots(&self) -> &[MatrixIndex] {
    &self.pivots
  }

  /// The factor by which the row operations scaled the determinant,
  /// so that `det(echelon) = determinant_multiplier * det(original)`.
  pub fn determinant_multiplier(&self) -> &T {
    &self.determinant_multiplier
  }

  pub fn rank(&self) -> usize {
    self.pivots.len()
  }
}

impl<T: OrderedRing + Field> Matrix<T> {
  /// Forward elimination with the default [`ReductionMode`].
  pub fn echelon_form(&self) -> Echelon<T> {
    self.echelon_form_with(&ReductionMode::default())
  }

  pub fn echelon_form_with(&self, mode: &ReductionMode) -> Echelon<T> {
    let mut matrix = self.clone();
    let mut red = ReducibleMatrix::new(&mut matrix);
    let pivots = forward_eliminate(&mut red, mode, |_, _| {});
    let determinant_multiplier = red.into_determinant_multiplier();
    Echelon { matrix, pivots, determinant_multiplier }
  }

  /// The row echelon form of the matrix.
  pub fn step_to_echelon(&self) -> Matrix<T> {
    self.echelon_form().into_matrix()
  }

  /// Forward elimination followed by back substitution. Every pivot
  /// of the result is one, and every other entry in a pivot column
  /// is zero.
  pub fn reduced_echelon_form(&self) -> Echelon<T> {
    let Echelon { mut matrix, pivots, determinant_multiplier } = self.echelon_form();
    let mut red = ReducibleMatrix::new(&mut matrix);
    for pivot in pivots.iter().rev() {
      let value = red.get(pivot.y, pivot.x).clone();
      red.multiply(pivot.y, T::one() / value);
      for target in 0..pivot.y {
        let entry = red.get(target, pivot.x);
        if entry.is_zero() {
          continue;
        }
        let coef = - entry.clone();
        red.add_to_row(target, coef, pivot.y);
      }
    }
    let determinant_multiplier = red.into_determinant_multiplier() * determinant_multiplier;
    Echelon { matrix, pivots, determinant_multiplier }
  }

  pub fn reduced_echelon(&self) -> Matrix<T> {
    self.reduced_echelon_form().into_matrix()
  }

  pub fn rank(&self) -> usize {
    self.echelon_form().rank()
  }

  /// The inverse of a square matrix, computed by reducing the
  /// augmented matrix `[A | I]`.
  pub fn inverse(&self) -> Result<Matrix<T>, Error> {
    self.require_square("inverse")?;
    let n = self.height();
    let reduced = self.clone().concat(Matrix::identity(n))?.reduced_echelon();
    if (0..n).any(|i| !reduced[MatrixIndex { y: i, x: i }].is_one()) {
      debug!(size = n, "matrix is singular, no inverse");
      return Err(Error::SingularMatrix);
    }
    let body = reduced.body.into_iter()
      .map(|mut row| row.split_off(n))
      .collect();
    Ok(Matrix { body })
  }
}

/// Runs forward elimination in place, returning the pivot positions.
///
/// `on_swap` is called whenever two rows trade places, so callers can
/// keep data parallel to the rows in sync.
pub(super) fn forward_eliminate<T, F>(
  red: &mut ReducibleMatrix<'_, T>,
  mode: &ReductionMode,
  mut on_swap: F,
) -> Vec<MatrixIndex>
where T: OrderedRing + Field,
      F: FnMut(usize, usize) {
  let mut pivots = Vec::new();
  let mut row = 0;
  for column in 0..red.width() {
    if row >= red.height() {
      break;
    }
    let Some(pivot_row) = choose_pivot(red, row, column, mode) else {
      trace!(column, "no pivot in column");
      continue;
    };
    trace!(row = pivot_row, column, "selected pivot");
    if pivot_row != row {
      red.swap_rows(row, pivot_row);
      on_swap(row, pivot_row);
    }
    if mode.has_positive_pivot_flag() && is_negative(red.get(row, column)) {
      red.multiply(row, - T::one());
    }
    let pivot = red.get(row, column).clone();
    for target in (row + 1)..red.height() {
      let entry = red.get(target, column);
      if entry.is_zero() {
        continue;
      }
      let coef = - (entry.clone() / pivot.clone());
      red.add_to_row(target, coef, row);
    }
    pivots.push(MatrixIndex { y: row, x: column });
    row += 1;
  }
  pivots
}

/// Chooses a pivot row for `column` among the rows at or below
/// `start`, or `None` if all of those entries are zero.
fn choose_pivot<T>(red: &ReducibleMatrix<'_, T>, start: usize, column: usize, mode: &ReductionMode) -> Option<usize>
where T: OrderedRing {
  let mut candidates = (start..red.height())
    .filter(|&y| !red.get(y, column).is_zero());
  if mode.has_min_abs_pivot_flag() {
    // min_by keeps the earliest of several equal candidates.
    candidates
      .map(|y| (y, abs(red.get(y, column).clone())))
      .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(Ordering::Equal))
      .map(|(y, _)| y)
  } else {
    candidates.next()
  }
}
