use super::Polynomial;
use crate::algebra::OrderedRing;

use num::{Zero, One};

use std::fmt::{self, Display, Formatter};

/// Settings for rendering a [`Polynomial`] as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolynomialDisplay {
  pub variable: String,
}

/// A [`Polynomial`] paired with the settings to render it. Produced
/// by [`Polynomial::display_with`].
#[derive(Debug, Clone, Copy)]
pub struct DisplayPolynomial<'a, T> {
  poly: &'a Polynomial<T>,
  settings: &'a PolynomialDisplay,
}

impl PolynomialDisplay {
  pub fn new(variable: impl Into<String>) -> Self {
    Self { variable: variable.into() }
  }
}

impl Default for PolynomialDisplay {
  fn default() -> Self {
    Self::new("x")
  }
}

impl<T: OrderedRing + Display> Polynomial<T> {
  pub fn display_with<'a>(&'a self, settings: &'a PolynomialDisplay) -> DisplayPolynomial<'a, T> {
    DisplayPolynomial { poly: self, settings }
  }
}

impl<'a, T: OrderedRing + Display> Display for DisplayPolynomial<'a, T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    let Some(degree) = self.poly.degree() else {
      return write!(f, "0");
    };
    let variable = &self.settings.variable;
    let minus_one = - T::one();
    let mut need_sign = false;
    for i in (0..=degree).rev() {
      let coeff = &self.poly.coeffs[i];
      if coeff.is_zero() {
        continue;
      }
      if need_sign && *coeff > T::zero() {
        write!(f, "+")?;
      }
      if coeff.is_one() || *coeff == minus_one {
        // Unit coefficients are implied, except on the constant term.
        if *coeff == minus_one {
          write!(f, "-")?;
        }
        if i == 0 {
          write!(f, "1")?;
        }
      } else {
        write!(f, "{coeff}")?;
        if i > 0 {
          write!(f, "*")?;
        }
      }
      if i > 0 {
        write!(f, "{variable}")?;
      }
      if i > 1 {
        write!(f, "^{i}")?;
      }
      need_sign = true;
    }
    Ok(())
  }
}

impl<T: OrderedRing + Display> Display for Polynomial<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    Display::fmt(&self.display_with(&PolynomialDisplay::default()), f)
  }
}
