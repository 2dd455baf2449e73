//! # Lazyseq: Lazy Sequence Combinators
//!
//! Transform, test and convert lazy sequences without materializing them.
//!
//! ## Core Trait
//!
//! - **[`Sequence<V>`]**: a producer of values driven by a step function that can
//!   ask for early termination by returning `false`
//!
//! ## Key Features
//!
//! - **Lazy**: [`map`] transforms one value at a time, interleaved with the consumer
//! - **Short-circuiting**: [`all`] stops at the first value that fails the predicate
//! - **Resumable**: [`single`] turns any sequence into a pausable [`Iterator`]
//! - **Scoped cleanup**: [`defer`] runs a closure after a single yield, on every exit path
//!
//! ## Example
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! let doubled = map(values(vec![1, 2, 3]), |x: i32| 2 * x);
//! assert!(all(doubled, |x: i32| x % 2 == 0));
//!
//! // Pause after two values, pick the rest up later
//! let mut iter = single(values(vec![1, 2, 3]));
//! assert_eq!(iter.next(), Some(1));
//! assert_eq!(iter.next(), Some(2));
//! let mut rest = Vec::new();
//! iter.as_sequence().for_each(|x| rest.push(x));
//! assert_eq!(rest, vec![3]);
//! ```
//!
//! ## Common Functions
//!
//! **Building Sequences:**
//! - [`values(source)`] - Re-driveable sequence over a cloneable collection
//! - [`from_iter(iter)`] - Single-use sequence pulling from an iterator
//! - [`from_fn(f)`] - Sequence whose drive is a closure
//! - [`once(v)`] - Exactly one value
//!
//! **Combinators:**
//! - [`map(seq, f)`] - Transform each value lazily
//! - [`all(seq, f)`] - Test every value, stopping at the first failure
//!
//! **Control:**
//! - [`single(seq)`] - Resumable iterator with explicit [`release`](Single::release)
//! - [`defer(f)`] - Yield once, then run `f`

pub mod build;
pub mod compose;
pub mod prelude;
pub mod single;

mod error;
mod sequence;

pub use build::*;
pub use compose::*;
pub use error::*;
pub use sequence::*;
pub use single::{single, try_single, Remaining, Single, SingleConfig};
