//! Core trait for lazy sequences.
//!
//! This module defines the [`Sequence`] trait, the building block every other
//! combinator in this crate works against. A [`Sequence`] is a capability rather
//! than a container: given a step function, it drives that function over some
//! elements, stopping as soon as the step function returns `false` or the
//! sequence runs out.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut seen = Vec::new();
//! values(vec![1, 2, 3]).drive(&mut |x: i32| {
//!     seen.push(x);
//!     x < 2
//! });
//! assert_eq!(seen, vec![1, 2]);
//! ```

use either::Either;

use crate::{all, map, single, Map, Single};

/// A lazy, possibly infinite producer of values driven by a step function.
///
/// Whether a sequence can be driven more than once is up to the implementation:
/// [`values`](crate::build::values) restarts from the beginning on every drive,
/// while [`from_iter`](crate::build::from_iter) and [`once`](crate::build::once)
/// are exhausted by the first one. Reusing a single-use sequence is a caller
/// contract, not something the type system tracks.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut seq = values(vec!["a", "b"]);
/// let mut first = Vec::new();
/// seq.for_each(|s| first.push(s));
/// let mut second = Vec::new();
/// seq.for_each(|s| second.push(s));
/// assert_eq!(first, second);
/// ```
pub trait Sequence<V> {
    /// Call `step` once per produced value, in order.
    ///
    /// When `step` returns `false` no further values are produced during this
    /// drive and `step` is not invoked again.
    fn drive(&mut self, step: &mut dyn FnMut(V) -> bool);

    /// Visit every remaining value without early termination.
    fn for_each<F>(&mut self, mut f: F)
    where
        Self: Sized,
        F: FnMut(V),
    {
        self.drive(&mut |v| {
            f(v);
            true
        });
    }

    /// Lazily transform each value with `f`. See [`map`].
    fn map<B, F>(self, f: F) -> Map<Self, F, V>
    where
        Self: Sized,
        F: FnMut(V) -> B,
    {
        map(self, f)
    }

    /// Test every value against `f`, stopping at the first failure. See [`all`].
    fn all<F>(&mut self, f: F) -> bool
    where
        Self: Sized,
        F: FnMut(V) -> bool,
    {
        all(self, f)
    }

    /// Convert into a resumable, single-use iterator. See [`single`].
    fn single(self) -> Single<V>
    where
        Self: Sized + Send + 'static,
        V: Send + 'static,
    {
        single(self)
    }

    /// Erase the concrete type behind a `Box<dyn Sequence<V>>`.
    fn boxed<'a>(self) -> Box<dyn Sequence<V> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

impl<V, S> Sequence<V> for &'_ mut S
where
    S: Sequence<V> + ?Sized,
{
    fn drive(&mut self, step: &mut dyn FnMut(V) -> bool) {
        (**self).drive(step)
    }
}

impl<V, S> Sequence<V> for Box<S>
where
    S: Sequence<V> + ?Sized,
{
    fn drive(&mut self, step: &mut dyn FnMut(V) -> bool) {
        (**self).drive(step)
    }
}

impl<V, L, R> Sequence<V> for Either<L, R>
where
    L: Sequence<V>,
    R: Sequence<V>,
{
    fn drive(&mut self, step: &mut dyn FnMut(V) -> bool) {
        match self {
            Either::Left(l) => l.drive(step),
            Either::Right(r) => r.drive(step),
        }
    }
}
