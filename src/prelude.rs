//! Commonly used imports
//!
//! Use `use lazyseq::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Error, Sequence, Single, SingleConfig};

// Sources
pub use crate::build::{defer, empty, from_fn, from_iter, once, values};

// Combinators
pub use crate::compose::{all, map};

// Pull conversion
pub use crate::single::{single, try_single};
