#[cfg(feature = "logger")]
/// This module provides a writer logging each row as CSV text.
pub mod logger;

#[cfg(feature = "writer")]
/// This module provides an incremental CSV writer.
pub mod csv;
