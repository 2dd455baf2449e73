use crate::Sequence;

/// A sequence whose drive is an arbitrary closure.
///
/// Created via [`from_fn`]. Driving it more than once is fine as long as the
/// closure itself can run more than once.
pub struct FromFn<F>(F);

/// Create a sequence from a closure that receives the step function.
///
/// The closure is expected to stop calling `step` once it returns `false`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut naturals = from_fn(|step: &mut dyn FnMut(u64) -> bool| {
///     let mut n = 0;
///     while step(n) {
///         n += 1;
///     }
/// });
///
/// let mut head = Vec::new();
/// naturals.drive(&mut |n: u64| {
///     head.push(n);
///     head.len() < 3
/// });
/// assert_eq!(head, vec![0, 1, 2]);
/// ```
pub fn from_fn<V, F>(f: F) -> FromFn<F>
where
    F: FnMut(&mut dyn FnMut(V) -> bool),
{
    FromFn(f)
}

impl<V, F> Sequence<V> for FromFn<F>
where
    F: FnMut(&mut dyn FnMut(V) -> bool),
{
    fn drive(&mut self, step: &mut dyn FnMut(V) -> bool) {
        (self.0)(step)
    }
}

/// Multi-use sequence over a cloneable collection.
///
/// Every drive starts over from a fresh clone of the source.
#[derive(Debug, Clone)]
pub struct Values<I>(I);

/// Create a sequence that yields the items of `source` each time it is driven.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut seq = values(vec![1, 2, 3]);
/// assert!(seq.all(|x: i32| x > 0));
/// assert!(!seq.all(|x: i32| x > 1));
/// ```
pub fn values<I>(source: I) -> Values<I>
where
    I: IntoIterator + Clone,
{
    Values(source)
}

impl<I> Sequence<I::Item> for Values<I>
where
    I: IntoIterator + Clone,
{
    fn drive(&mut self, step: &mut dyn FnMut(I::Item) -> bool) {
        for v in self.0.clone() {
            if !step(v) {
                return;
            }
        }
    }
}

/// Single-use sequence over an [`Iterator`].
///
/// Stopping early leaves the rest of the items in the iterator, so the next
/// drive picks up where the previous one stopped.
#[derive(Debug, Clone)]
pub struct Iter<I>(I);

/// Create a sequence that pulls from `source` as it is driven.
pub fn from_iter<I>(source: I) -> Iter<I::IntoIter>
where
    I: IntoIterator,
{
    Iter(source.into_iter())
}

impl<I> Sequence<I::Item> for Iter<I>
where
    I: Iterator,
{
    fn drive(&mut self, step: &mut dyn FnMut(I::Item) -> bool) {
        for v in self.0.by_ref() {
            if !step(v) {
                return;
            }
        }
    }
}

/// A sequence that never produces anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

pub fn empty() -> Empty {
    Empty
}

impl<V> Sequence<V> for Empty {
    fn drive(&mut self, _step: &mut dyn FnMut(V) -> bool) {}
}

/// A one-element sequence.
///
/// The value is moved out on the first drive, so later drives produce nothing.
#[derive(Debug, Clone)]
pub struct Once<V>(Option<V>);

/// Wrap a single value as a sequence.
///
/// The step function is called exactly once with `v`, whatever it returns.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut seq = once(String::from("only"));
/// let mut out = Vec::new();
/// seq.for_each(|s| out.push(s));
/// seq.for_each(|s| out.push(s));
/// assert_eq!(out, vec!["only".to_string()]);
/// ```
pub fn once<V>(v: V) -> Once<V> {
    Once(Some(v))
}

impl<V> Sequence<V> for Once<V> {
    fn drive(&mut self, step: &mut dyn FnMut(V) -> bool) {
        if let Some(v) = self.0.take() {
            step(v);
        }
    }
}

impl<V> Once<V> {
    /// Whether the value has already been delivered.
    pub fn is_spent(&self) -> bool {
        self.0.is_none()
    }
}
