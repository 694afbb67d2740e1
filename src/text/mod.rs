//! Text processing for item metadata: stop words and term vectorization.

pub mod stopwords;
pub mod vectorize;

pub use stopwords::StopWordsFilter;
pub use vectorize::{TermVectorizer, TermVectors};
