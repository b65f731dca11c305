//! Models are structs that represent a color in a specified color space or
//! form. They carry full floating point precision so that chained
//! conversions only round once, when a [`crate::Color`] is built at the end.

mod hsl;
mod lms;
mod oklab;
mod rgb;

pub use hsl::*;
pub use lms::*;
pub use oklab::*;
pub use rgb::*;
