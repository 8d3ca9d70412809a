//! Various utility functions.

use crate::algebra::Ring;

use std::fmt::{self, Formatter, Display};
use std::cmp::Ordering;
use std::ops::{Mul, Neg};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
  Negative,
  Positive,
}

impl Sign {
  pub fn other(self) -> Self {
    match self {
      Self::Negative => Self::Positive,
      Self::Positive => Self::Negative,
    }
  }

  /// The sign `(-1)^n`.
  pub fn from_parity(n: usize) -> Self {
    if n % 2 == 0 {
      Self::Positive
    } else {
      Self::Negative
    }
  }

  /// Either `1` or `-1` in the ring `T`.
  pub fn into_ring<T: Ring>(self) -> T {
    match self {
      Self::Negative => - T::one(),
      Self::Positive => T::one(),
    }
  }
}

impl Display for Sign {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::Negative => write!(f, "-"),
      Self::Positive => write!(f, "+"),
    }
  }
}

impl Mul for Sign {
  type Output = Self;

  fn mul(self, other: Self) -> Self::Output {
    if self == other {
      Self::Positive
    } else {
      Self::Negative
    }
  }
}

impl Neg for Sign {
  type Output = Self;

  fn neg(self) -> Self::Output {
    self.other()
  }
}

/// Mutably borrows two elements from a mutable slice at the same
/// time. Panics if the two indices are the same, or if either index
/// is out of bounds.
pub fn double_borrow_mut<T>(slice: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
  match i.cmp(&j) {
    Ordering::Equal => {
      panic!("Cannot mutably borrow index {i} twice at the same time");
    }
    Ordering::Greater => {
      let (b, a) = double_borrow_mut(slice, j, i);
      (a, b)
    }
    Ordering::Less => {
      let (left, right) = slice.split_at_mut(j);
      (&mut left[i], &mut right[0])
    }
  }
}

/// Removes a longest suffix from a vector which satisfies the
/// predicate.
pub fn remove_suffix<T, F>(vec: &mut Vec<T>, mut pred: F)
where F: FnMut(&T) -> bool {
  let mut i = vec.len();
  while i > 0 && pred(&vec[i - 1]) {
    i -= 1;
  }
  vec.truncate(i);
}

/// Transposes a row-major grid. Rows of unequal length are allowed;
/// the result simply skips the missing cells.
pub fn transpose<T>(elems: Vec<Vec<T>>) -> Vec<Vec<T>> {
  let mut elems: Vec<_> = elems.into_iter().map(|v| v.into_iter()).collect();
  let mut result = Vec::with_capacity(elems.len());
  loop {
    let next_elems: Vec<_> = elems.iter_mut().filter_map(|v| v.next()).collect();
    if next_elems.is_empty() {
      break;
    } else {
      result.push(next_elems);
    }
  }
  result
}
