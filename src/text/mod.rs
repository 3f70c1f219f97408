//! Plain-text helpers used by the detail renderer.

mod wrap;

pub use wrap::wrap;
