pub mod locator;
pub mod triangulation;

#[doc(inline)]
pub use locator::{build, try_build, Locator};
