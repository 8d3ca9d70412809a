//! Property-based tests for the algebraic laws the library promises.

use exact_linalg::algebra::gcd;
use exact_linalg::fraction::Rational;
use exact_linalg::matrix::Matrix;
use exact_linalg::mode::DeterminantMethod;
use exact_linalg::permutation::Permutation;
use exact_linalg::polynomial::Polynomial;

use num::Zero;
use proptest::prelude::*;

fn rational_matrix(rows: Vec<Vec<i64>>) -> Matrix<Rational> {
  let body = rows.into_iter()
    .map(|row| row.into_iter().map(Rational::from).collect())
    .collect();
  Matrix::new(body).unwrap()
}

fn rational_poly(coeffs: Vec<i64>) -> Polynomial<Rational> {
  coeffs.into_iter().map(Rational::from).collect()
}

/// A square matrix of small integers, up to 4x4.
fn square_rows() -> impl Strategy<Value = Vec<Vec<i64>>> {
  (0usize..5).prop_flat_map(|n| prop::collection::vec(prop::collection::vec(-9i64..10, n), n))
}

/// A rectangular matrix of small integers, with at least one row and
/// column.
fn rect_rows() -> impl Strategy<Value = Vec<Vec<i64>>> {
  (1usize..5, 1usize..5).prop_flat_map(|(height, width)| {
    prop::collection::vec(prop::collection::vec(-3i64..4, width), height)
  })
}

fn shuffled_permutation() -> impl Strategy<Value = Permutation> {
  (0usize..7)
    .prop_flat_map(|n| Just((1..=n).collect::<Vec<usize>>()).prop_shuffle())
    .prop_map(Permutation::from_vec)
}

proptest! {
  /// Fractions always come out reduced with a positive denominator.
  #[test]
  fn prop_fraction_canonical_form(numer in -1000i64..1000, denom in 1i64..1000, negate: bool) {
    let denom = if negate { -denom } else { denom };
    let frac = Rational::new(numer, denom);
    prop_assert!(*frac.denom() > 0);
    prop_assert_eq!(gcd(*frac.numer(), *frac.denom()), 1);
    prop_assert_eq!(frac.numer() * denom, numer * frac.denom());
  }

  /// Composing a permutation with its inverse gives the identity, in
  /// either order.
  #[test]
  fn prop_permutation_inverse(perm in shuffled_permutation()) {
    let identity = Permutation::identity(perm.len());
    prop_assert!(perm.is_bijection());
    prop_assert_eq!(perm.compose(&perm.inverse()), identity.clone());
    prop_assert_eq!(perm.inverse().compose(&perm), identity);
  }

  /// The sign is multiplicative.
  #[test]
  fn prop_permutation_sign_multiplicative(
    (a, b) in (0usize..7).prop_flat_map(|n| {
      let values = (1..=n).collect::<Vec<usize>>();
      (Just(values.clone()).prop_shuffle(), Just(values).prop_shuffle())
    }),
  ) {
    let a = Permutation::from_vec(a);
    let b = Permutation::from_vec(b);
    prop_assert_eq!(a.compose(&b).sign(), a.sign() * b.sign());
  }

  /// `a = q * b + r` with `r` of lower degree than `b`.
  #[test]
  fn prop_polynomial_division(
    dividend in prop::collection::vec(-9i64..10, 0..6),
    divisor in prop::collection::vec(-9i64..10, 1..4),
  ) {
    let dividend = rational_poly(dividend);
    let divisor = rational_poly(divisor);
    prop_assume!(!divisor.is_zero());
    let (quotient, remainder) = dividend.div_rem(&divisor).unwrap();
    prop_assert!(remainder.is_zero() || remainder.degree() < divisor.degree());
    prop_assert_eq!(quotient * divisor + remainder, dividend);
  }

  /// Elimination and the Leibniz formula agree on every square matrix.
  #[test]
  fn prop_determinant_methods_agree(rows in square_rows()) {
    let matrix = rational_matrix(rows);
    prop_assert_eq!(
      matrix.determinant_with(DeterminantMethod::Elimination).unwrap(),
      matrix.determinant_with(DeterminantMethod::Leibniz).unwrap(),
    );
  }

  /// A matrix with nonzero determinant has a two-sided inverse, and
  /// a matrix with zero determinant has none.
  #[test]
  fn prop_inverse(rows in square_rows()) {
    let matrix = rational_matrix(rows);
    let n = matrix.height();
    match matrix.inverse() {
      Ok(inverse) => {
        prop_assert!(!matrix.determinant().unwrap().is_zero());
        prop_assert_eq!(matrix.clone() * inverse.clone(), Matrix::identity(n));
        prop_assert_eq!(inverse * matrix, Matrix::identity(n));
      }
      Err(_) => {
        prop_assert!(matrix.determinant().unwrap().is_zero());
      }
    }
  }

  /// rank + nullity = number of columns, and every null space vector
  /// is sent to zero.
  #[test]
  fn prop_rank_nullity(rows in rect_rows()) {
    let matrix = rational_matrix(rows);
    let column_space = matrix.column_space();
    let null_space = matrix.null_space();
    prop_assert_eq!(column_space.len(), matrix.rank());
    prop_assert_eq!(column_space.len() + null_space.len(), matrix.width());
    for v in null_space.iter() {
      prop_assert!(matrix.apply(v).unwrap().is_zero());
    }
  }
}
