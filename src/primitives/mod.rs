//! Core numeric primitives (Vector, Matrix).
//!
//! These types back the term vectors produced by the vectorizer and the
//! dense similarity matrix held by the index.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
