//! Permutations of the set `{1, ..., n}`.

use crate::util::Sign;

use itertools::Itertools;
use serde::{Serialize, Deserialize};
use thiserror::Error;

use std::fmt::{self, Display, Formatter};
use std::ops::{Index, IndexMut, Mul};
use std::str::FromStr;

/// A bijection of `{1, ..., n}`, stored as its sequence of values.
/// Values are 1-based, but positions (as used by [`Index`]) are
/// 0-based like every other Rust collection, so `p[0]` is the image
/// of `1`.
///
/// Construction from arbitrary data is unchecked. It is the caller's
/// responsibility to supply a genuine bijection; see
/// [`Permutation::is_bijection`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permutation {
  values: Vec<usize>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParsePermutationError {
  #[error("Expected {expected} values but found {actual}")]
  WrongLength {
    expected: usize,
    actual: usize,
  },
  #[error("Invalid permutation value {0:?}")]
  InvalidValue(String),
}

/// Iterator over every permutation of a fixed size, in lexicographic
/// order. Produced by [`Permutation::all`].
#[derive(Debug, Clone)]
pub struct Permutations {
  next: Option<Permutation>,
}

impl Permutation {
  pub fn identity(n: usize) -> Self {
    Self { values: (1..=n).collect() }
  }

  /// Wraps a sequence of values as a permutation, without checking
  /// that it is a bijection.
  pub fn from_vec(values: Vec<usize>) -> Self {
    Self { values }
  }

  /// Iterates over all `n!` permutations of size `n`, starting from
  /// the identity.
  pub fn all(n: usize) -> Permutations {
    Permutations { next: Some(Permutation::identity(n)) }
  }

  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  pub fn values(&self) -> &[usize] {
    &self.values
  }

  pub fn into_vec(self) -> Vec<usize> {
    self.values
  }

  /// Whether every value in `1..=n` occurs exactly once.
  pub fn is_bijection(&self) -> bool {
    let n = self.len();
    let mut seen = vec![false; n];
    for &value in &self.values {
      if value == 0 || value > n || seen[value - 1] {
        return false;
      }
      seen[value - 1] = true;
    }
    true
  }

  /// Composes two permutations, applying `other` first and then
  /// `self`, so that `result[i] = self[other[i]]` in 1-based terms.
  ///
  /// Panics if the two permutations have different sizes.
  pub fn compose(&self, other: &Permutation) -> Permutation {
    assert_eq!(self.len(), other.len(), "Cannot compose permutations of different sizes");
    let values = other.values.iter()
      .map(|&value| self.values[value - 1])
      .collect();
    Permutation { values }
  }

  pub fn inverse(&self) -> Permutation {
    let mut values = vec![0; self.len()];
    for (i, &value) in self.values.iter().enumerate() {
      values[value - 1] = i + 1;
    }
    Permutation { values }
  }

  /// Decomposes the permutation into disjoint cycles. Each cycle is
  /// listed by 0-based position in traversal order, starting from its
  /// smallest position. Fixed points are cycles of length one.
  pub fn cycles(&self) -> Vec<Vec<usize>> {
    let n = self.len();
    let mut visited = vec![false; n];
    let mut cycles = Vec::new();
    for start in 0..n {
      if visited[start] {
        continue;
      }
      let mut cycle = Vec::new();
      let mut j = start;
      while !visited[j] {
        visited[j] = true;
        cycle.push(j);
        j = self.values[j] - 1;
      }
      cycles.push(cycle);
    }
    cycles
  }

  /// The sign of the permutation: negative exactly when `n` minus the
  /// number of cycles is odd.
  pub fn sign(&self) -> Sign {
    Sign::from_parity(self.len() - self.cycles().len())
  }

  /// Raises the permutation to an integer power, which may be
  /// negative. Runs in linear time regardless of `k`, by rotating
  /// each cycle `k` steps.
  pub fn pow(&self, k: i64) -> Permutation {
    let mut values = vec![0; self.len()];
    for cycle in self.cycles() {
      let len = cycle.len() as i64;
      let shift = k.rem_euclid(len) as usize;
      for (offset, &position) in cycle.iter().enumerate() {
        values[position] = cycle[(offset + shift) % cycle.len()] + 1;
      }
    }
    Permutation { values }
  }

  /// Advances to the next permutation in lexicographic order. If this
  /// is already the last (fully descending) permutation, returns
  /// false and leaves the permutation unchanged.
  pub fn next_lexicographic(&mut self) -> bool {
    let values = &mut self.values;
    let Some(i) = (1..values.len()).rev().find(|&i| values[i - 1] < values[i]) else {
      return false;
    };
    let pivot = i - 1;
    // unwrap: values[i] > values[pivot], so a match exists.
    let successor = (i..values.len()).rev().find(|&j| values[j] > values[pivot]).unwrap();
    values.swap(pivot, successor);
    values[i..].reverse();
    true
  }

  /// Parses exactly `n` whitespace-separated values.
  pub fn parse(n: usize, text: &str) -> Result<Permutation, ParsePermutationError> {
    let perm: Permutation = text.parse()?;
    if perm.len() != n {
      return Err(ParsePermutationError::WrongLength { expected: n, actual: perm.len() });
    }
    Ok(perm)
  }
}

impl Iterator for Permutations {
  type Item = Permutation;

  fn next(&mut self) -> Option<Permutation> {
    let current = self.next.take()?;
    let mut successor = current.clone();
    if successor.next_lexicographic() {
      self.next = Some(successor);
    }
    Some(current)
  }
}

impl Index<usize> for Permutation {
  type Output = usize;

  fn index(&self, index: usize) -> &usize {
    &self.values[index]
  }
}

impl IndexMut<usize> for Permutation {
  fn index_mut(&mut self, index: usize) -> &mut usize {
    &mut self.values[index]
  }
}

impl Mul for &Permutation {
  type Output = Permutation;

  fn mul(self, other: &Permutation) -> Permutation {
    self.compose(other)
  }
}

impl Mul for Permutation {
  type Output = Permutation;

  fn mul(self, other: Permutation) -> Permutation {
    self.compose(&other)
  }
}

impl From<Vec<usize>> for Permutation {
  fn from(values: Vec<usize>) -> Self {
    Self::from_vec(values)
  }
}

impl FromStr for Permutation {
  type Err = ParsePermutationError;

  fn from_str(s: &str) -> Result<Permutation, ParsePermutationError> {
    let values = s.split_whitespace()
      .map(|token| token.parse::<usize>().map_err(|_| ParsePermutationError::InvalidValue(token.to_owned())))
      .collect::<Result<Vec<_>, _>>()?;
    Ok(Permutation { values })
  }
}

impl Display for Permutation {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.values.iter().join(" "))
  }
}
