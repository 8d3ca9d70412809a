use bitflags::bitflags;

/// Flags controlling how forward elimination chooses and normalizes
/// its pivots.
///
/// This structure is designed to be cheap to clone, but its exact
/// implementation is private.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReductionMode {
  inner: ReductionModeBits,
}

bitflags! {
  #[derive(Debug, Clone, Copy, PartialEq, Eq)]
  struct ReductionModeBits: u8 {
    const MIN_ABS_PIVOT = 0b0001;
    const POSITIVE_PIVOT = 0b0010;
  }
}

/// Strategy used to compute a determinant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DeterminantMethod {
  /// Forward elimination followed by a product of the diagonal.
  /// Requires exact division.
  #[default]
  Elimination,
  /// Signed sum over all permutations. Factorial time, but needs only
  /// ring operations, so it is safe over polynomial entries.
  Leibniz,
}

impl ReductionMode {
  /// Both flags on.
  pub fn new() -> Self {
    Self::default()
  }

  /// Both flags off: the first nonzero entry is taken as the pivot
  /// and its sign is left alone.
  pub fn plain() -> Self {
    Self { inner: ReductionModeBits::empty() }
  }

  /// The min-abs flag is on by default. If on, the pivot for each
  /// column is the candidate entry of smallest nonzero absolute
  /// value, which keeps the magnitudes of exact intermediate values
  /// small. If off, the first nonzero candidate is used.
  pub fn has_min_abs_pivot_flag(&self) -> bool {
    self.inner.contains(ReductionModeBits::MIN_ABS_PIVOT)
  }

  /// Sets the min-abs flag. See
  /// [`ReductionMode::has_min_abs_pivot_flag`].
  pub fn set_min_abs_pivot_flag(&mut self, mode: bool) {
    self.inner.set(ReductionModeBits::MIN_ABS_PIVOT, mode);
  }

  /// The positive-pivot flag is on by default. If on, a pivot row
  /// whose pivot is negative is negated before elimination.
  pub fn has_positive_pivot_flag(&self) -> bool {
    self.inner.contains(ReductionModeBits::POSITIVE_PIVOT)
  }

  /// Sets the positive-pivot flag. See
  /// [`ReductionMode::has_positive_pivot_flag`].
  pub fn set_positive_pivot_flag(&mut self, mode: bool) {
    self.inner.set(ReductionModeBits::POSITIVE_PIVOT, mode);
  }
}

impl Default for ReductionMode {
  fn default() -> Self {
    Self { inner: ReductionModeBits::all() }
  }
}
