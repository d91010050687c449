//! Shared helpers for tests throughout the crate.  Only compiled for tests or when the
//! `enable-test-utils` feature is requested.

pub mod test_constants;
pub mod test_utilities;
