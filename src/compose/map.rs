//! Lazily transforming the values of a sequence.

use std::marker::PhantomData;

use crate::Sequence;

/// Transforms each value of the wrapped sequence as it is produced.
///
/// Created via [`map`]. Nothing is buffered: each source value is handed to `f`
/// and the result straight to the step function before the next value is
/// produced.
pub struct Map<S, F, V> {
    f: F,
    seq: S,
    _phantom: PhantomData<fn(V)>,
}

/// Create a sequence that applies `f` to every value of `seq`.
///
/// `f` only runs for values that are actually visited. When the step function
/// stops the drive, the remaining source values are never produced.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// let mut out = Vec::new();
/// map(values(vec![1, 2, 3]), |x: i32| 2 * x).for_each(|y| out.push(y));
/// assert_eq!(out, vec![2, 4, 6]);
/// ```
pub fn map<V, B, S, F>(seq: S, f: F) -> Map<S, F, V>
where
    S: Sequence<V>,
    F: FnMut(V) -> B,
{
    Map {
        f,
        seq,
        _phantom: PhantomData,
    }
}

impl<V, B, S, F> Sequence<B> for Map<S, F, V>
where
    S: Sequence<V>,
    F: FnMut(V) -> B,
{
    fn drive(&mut self, step: &mut dyn FnMut(B) -> bool) {
        let f = &mut self.f;
        self.seq.drive(&mut |v| step(f(v)));
    }
}

impl<S, F, V> Map<S, F, V> {
    /// Unwrap into the source sequence, dropping the transform.
    pub fn into_inner(self) -> S {
        self.seq
    }
}
