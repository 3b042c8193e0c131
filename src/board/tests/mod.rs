//! Board unit tests.
