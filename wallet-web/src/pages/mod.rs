//! Page modules

pub mod harness;

pub use harness::HarnessPage;
