#![forbid(unsafe_code)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]

//! Arbitrary-precision exact rational arithmetic.
//!
//! Values are stored as a signed whole part plus an optional numerator /
//! denominator pair of unbounded integers, so every rational is represented
//! exactly. Repeating decimals can be parsed from and rendered to the
//! `1.2[34]` bracket notation.
//!
//! ```
//! use exact_core::{Never, Rational};
//!
//! let mut x: Rational = "0.[3]".parse().unwrap();
//! x.simplify(&Never);
//! assert_eq!(x.to_fraction(), "0 1/3");
//! ```

mod error;
mod interrupt;
mod num;
mod random;
mod result;

pub use error::Error;
pub use interrupt::{Interrupt, Never, Timeout};
pub use num::Rational;
pub use random::Random;
pub use result::EResult;

#[must_use]
pub fn get_version() -> String {
	env!("CARGO_PKG_VERSION").to_string()
}
