use crate::{map, Sequence};

/// Test whether `f` holds for every value of `seq`.
///
/// Evaluation stops at the first value for which `f` returns `false`; neither
/// the source nor `f` see anything past it. An empty sequence gives `true`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut calls = 0;
/// let holds = all(values(vec![1, 2, 3]), |x: i32| {
///     calls += 1;
///     x != 2
/// });
/// assert!(!holds);
/// assert_eq!(calls, 2);
/// ```
pub fn all<V, S, F>(seq: S, f: F) -> bool
where
    S: Sequence<V>,
    F: FnMut(V) -> bool,
{
    let mut holds = true;
    map(seq, f).drive(&mut |b| {
        holds = b;
        b
    });
    holds
}
