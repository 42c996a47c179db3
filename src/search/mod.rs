//! Approximate matching: edit distance and substring containment.

pub mod distance;
pub mod substring;

pub use distance::{closest, distance};
pub use substring::SubstringIndex;
