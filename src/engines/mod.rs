//! The three distance engines.
//!
//! Each module offers an infallible free function and a
//! [`DistanceEngine`](crate::traits::DistanceEngine) value:
//! - [`lowrance_wagner`](mod@lowrance_wagner) : full O(m·n) matrix, the reference result.
//! - [`ukkonen`](mod@ukkonen)         : diagonal function over an expanding band.
//! - [`berghel_roach`](mod@berghel_roach)   : diagonal function over a tighter band, with an
//!   optional caller-owned table reused across calls.

pub mod berghel_roach;
pub mod lowrance_wagner;
pub mod ukkonen;

pub use berghel_roach::{berghel_roach, berghel_roach_with, BerghelRoach};
pub use lowrance_wagner::{lowrance_wagner, LowranceWagner};
pub use ukkonen::{ukkonen, Ukkonen};
