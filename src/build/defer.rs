//! Scoped cleanup around a single yield.
//!
//! [`defer`] produces a sequence with exactly one unit element. The cleanup
//! closure runs once control comes back from that element, whether the body
//! finished normally, stopped early or unwound. [`guard`] is the underlying
//! drop guard, for callers who just want a scope.
//!
//! # Examples
//!
//! As a `for` loop head, the cleanup runs when the loop body is left:
//!
//! ```rust
//! use std::cell::Cell;
//! use lazyseq::prelude::*;
//!
//! let closed = Cell::new(false);
//! for () in defer(|| closed.set(true)) {
//!     assert!(!closed.get());
//! }
//! assert!(closed.get());
//! ```

/// Runs a closure when dropped.
///
/// Created via [`guard`].
#[must_use = "the closure runs as soon as the guard is dropped"]
pub struct DeferGuard<F>
where
    F: FnOnce(),
{
    f: Option<F>,
}

/// Run `f` when the returned guard goes out of scope, including on unwind.
///
/// ```rust
/// use std::cell::Cell;
/// use lazyseq::build::guard;
///
/// let done = Cell::new(0);
/// {
///     let _guard = guard(|| done.set(done.get() + 1));
///     assert_eq!(done.get(), 0);
/// }
/// assert_eq!(done.get(), 1);
/// ```
pub fn guard<F: FnOnce()>(f: F) -> DeferGuard<F> {
    DeferGuard { f: Some(f) }
}

impl<F: FnOnce()> Drop for DeferGuard<F> {
    fn drop(&mut self) {
        if let Some(f) = self.f.take() {
            f();
        }
    }
}

/// A one-element unit sequence that runs a cleanup closure after its element.
///
/// Created via [`defer`]. The closure runs exactly once over the lifetime of the
/// value: later drives produce nothing.
pub struct Defer<F>(Option<F>);

/// Yield control once, then run `f`.
///
/// ```rust
/// use std::cell::Cell;
/// use lazyseq::prelude::*;
///
/// let ran = Cell::new(false);
/// defer(|| ran.set(true)).drive(&mut |()| {
///     assert!(!ran.get());
///     false
/// });
/// assert!(ran.get());
/// ```
pub fn defer<F: FnOnce()>(f: F) -> Defer<F> {
    Defer(Some(f))
}

impl<F: FnOnce()> crate::Sequence<()> for Defer<F> {
    fn drive(&mut self, step: &mut dyn FnMut(()) -> bool) {
        if let Some(f) = self.0.take() {
            let _cleanup = guard(f);
            step(());
        }
    }
}

impl<F: FnOnce()> IntoIterator for Defer<F> {
    type Item = ();
    type IntoIter = DeferIter<F>;

    fn into_iter(self) -> Self::IntoIter {
        DeferIter {
            state: match self.0 {
                Some(f) => DeferState::Pending(f),
                None => DeferState::Done,
            },
        }
    }
}

/// Iterator form of [`Defer`].
///
/// Yields `()` once. The cleanup runs on the following call to `next`, or when
/// the iterator is dropped before that (`break`, `return`, `?`, unwinding).
pub struct DeferIter<F>
where
    F: FnOnce(),
{
    state: DeferState<F>,
}

enum DeferState<F>
where
    F: FnOnce(),
{
    Pending(F),
    Yielded(DeferGuard<F>),
    Done,
}

impl<F: FnOnce()> DeferState<F> {
    fn take(&mut self) -> Self {
        std::mem::replace(self, DeferState::Done)
    }
}

impl<F: FnOnce()> Iterator for DeferIter<F> {
    type Item = ();

    fn next(&mut self) -> Option<()> {
        match self.state.take() {
            DeferState::Pending(f) => {
                self.state = DeferState::Yielded(guard(f));
                Some(())
            }
            DeferState::Yielded(cleanup) => {
                drop(cleanup);
                None
            }
            DeferState::Done => None,
        }
    }
}

impl<F: FnOnce()> std::iter::FusedIterator for DeferIter<F> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sequence;
    use std::cell::Cell;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn test_guard_runs_on_drop() {
        let ran = Cell::new(false);
        let g = guard(|| ran.set(true));
        assert!(!ran.get());
        drop(g);
        assert!(ran.get());
    }

    #[test]
    fn test_drive_runs_cleanup_after_step() {
        let ran = Cell::new(0);
        let mut seen_inside = None;
        defer(|| ran.set(ran.get() + 1)).drive(&mut |()| {
            seen_inside = Some(ran.get());
            true
        });
        assert_eq!(seen_inside, Some(0));
        assert_eq!(ran.get(), 1);
    }

    #[test]
    fn test_second_drive_is_a_no_op() {
        let ran = Cell::new(0);
        let mut steps = 0;
        let mut seq = defer(|| ran.set(ran.get() + 1));
        seq.for_each(|()| steps += 1);
        seq.for_each(|()| steps += 1);
        assert_eq!(steps, 1);
        assert_eq!(ran.get(), 1);
    }

    #[test]
    fn test_cleanup_runs_when_step_panics() {
        let ran = Cell::new(false);
        let result = catch_unwind(AssertUnwindSafe(|| {
            defer(|| ran.set(true)).drive(&mut |()| panic!("body failed"));
        }));
        assert!(result.is_err());
        assert!(ran.get());
    }

    #[test]
    fn test_for_loop_break_runs_cleanup() {
        let ran = Cell::new(0);
        let mut bodies = 0;
        for () in defer(|| ran.set(ran.get() + 1)) {
            bodies += 1;
            assert_eq!(ran.get(), 0);
            if bodies == 1 {
                break;
            }
        }
        assert_eq!(bodies, 1);
        assert_eq!(ran.get(), 1);
    }

    #[test]
    fn test_for_loop_early_return_runs_cleanup() {
        let ran = Cell::new(0);
        let scoped = |input: Option<u8>| -> Option<u8> {
            for () in defer(|| ran.set(ran.get() + 1)) {
                input?;
            }
            Some(1)
        };
        assert_eq!(scoped(None), None);
        assert_eq!(ran.get(), 1);
    }

    #[test]
    fn test_iter_runs_cleanup_on_resume() {
        let ran = Cell::new(false);
        let mut iter = defer(|| ran.set(true)).into_iter();
        assert_eq!(iter.next(), Some(()));
        assert!(!ran.get());
        assert_eq!(iter.next(), None);
        assert!(ran.get());
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_spent_defer_iterates_empty() {
        let ran = Cell::new(0);
        let mut seq = defer(|| ran.set(ran.get() + 1));
        seq.for_each(|()| {});
        assert_eq!(seq.into_iter().count(), 0);
        assert_eq!(ran.get(), 1);
    }
}
