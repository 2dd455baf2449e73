//! Builders for sequences.
//!
//! Sources that produce values ([`from_fn`], [`values`], [`from_iter`],
//! [`empty`], [`once`]) and the scoped-cleanup sequence [`defer`].

mod defer;
mod func;

pub use defer::*;
pub use func::*;
