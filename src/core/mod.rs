/// Scalar cell values and their textual form
pub mod cell;

/// Writer lifecycle shared by the row-by-row writers
pub mod item;

/// Quoting policies
pub mod quote;

/// Row and document assembly
pub mod stringify;
