//! Exact linear algebra over generic element types.
//!
//! Matrices, vectors, and polynomials are generic over their element
//! type, and each algorithm asks only for the operations it needs
//! (see [`algebra`]). With [`Fraction`](fraction::Fraction) elements,
//! every result is exact.

pub mod algebra;
pub mod error;
pub mod fraction;
pub mod matrix;
pub mod mode;
pub mod permutation;
pub mod polynomial;
pub mod util;
pub mod vector;

pub use error::Error;
