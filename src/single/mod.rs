//! Pull-style iteration over push-style sequences.
//!
//! A [`Sequence`] decides when its step function gets called. [`Single`] turns
//! that around: the source is driven on a dedicated worker thread that parks
//! after every value until the caller asks for the next one. The two sides meet
//! on zero-capacity channels, so values are handed over one at a time with no
//! lookahead.
//!
//! # Releasing
//!
//! A worker parked in the middle of a drive holds whatever the source holds.
//! [`Single::release`] wakes it with a stop request (the step function returns
//! `false`) and joins it. Dropping a [`Single`] releases it, so the only way to
//! leak the worker is to forget the iterator without dropping it (for example
//! via [`std::mem::forget`]). A source that ignores the stop request and keeps
//! producing forever will also keep `release` from returning.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut iter = single(values(vec![1, 2, 3]));
//! assert_eq!(iter.next(), Some(1));
//! assert_eq!(iter.next(), Some(2));
//!
//! let mut rest = Vec::new();
//! iter.as_sequence().for_each(|x| rest.push(x));
//! assert_eq!(rest, vec![3]);
//! ```

mod config;

pub use config::SingleConfig;

use std::{
    fmt,
    iter::FusedIterator,
    panic,
    thread::{self, JoinHandle},
};

use crossbeam_channel::{bounded, Receiver, Sender};
use tracing::{debug, trace, warn};

use crate::{Error, Sequence};

/// A resumable, single-use iterator over a [`Sequence`].
///
/// Created via [`single`], [`try_single`] or [`SingleConfig::spawn`]. Values
/// come out in the order the source produces them. `next` needs `&mut self`,
/// so a `Single` can only be advanced from one place at a time.
pub struct Single<V> {
    resume: Option<Sender<()>>,
    items: Option<Receiver<V>>,
    worker: Option<JoinHandle<()>>,
}

/// Convert `seq` into a resumable iterator.
///
/// # Panics
///
/// Panics if the worker thread cannot be spawned. Use [`try_single`] to handle
/// that case.
pub fn single<V, S>(seq: S) -> Single<V>
where
    S: Sequence<V> + Send + 'static,
    V: Send + 'static,
{
    match try_single(seq) {
        Ok(iter) => iter,
        Err(err) => panic!("{err}"),
    }
}

/// Convert `seq` into a resumable iterator with the default [`SingleConfig`].
pub fn try_single<V, S>(seq: S) -> Result<Single<V>, Error>
where
    S: Sequence<V> + Send + 'static,
    V: Send + 'static,
{
    SingleConfig::default().spawn(seq)
}

impl<V> Single<V> {
    pub(crate) fn spawn<S>(config: &SingleConfig, mut seq: S) -> Result<Self, Error>
    where
        S: Sequence<V> + Send + 'static,
        V: Send + 'static,
    {
        let (resume_tx, resume_rx) = bounded::<()>(0);
        let (item_tx, item_rx) = bounded::<V>(0);

        let mut builder = thread::Builder::new().name(config.name.clone());
        if let Some(size) = config.stack_size {
            builder = builder.stack_size(size);
        }

        let worker = builder
            .spawn(move || {
                // nothing is produced before the first pull
                if resume_rx.recv().is_err() {
                    trace!("released before first pull");
                    return;
                }
                seq.drive(&mut |v| {
                    if item_tx.send(v).is_err() {
                        return false;
                    }
                    resume_rx.recv().is_ok()
                });
                trace!("source drive returned");
            })
            .map_err(Error::Spawn)?;

        debug!(thread = %config.name, "spawned sequence worker");
        Ok(Self {
            resume: Some(resume_tx),
            items: Some(item_rx),
            worker: Some(worker),
        })
    }

    /// Stop the source and reclaim the worker thread.
    ///
    /// Blocks until the worker has unwound. Afterwards `next` returns `None`.
    /// Calling it again, or after the source ran out, does nothing.
    pub fn release(&mut self) {
        if self.worker.is_some() {
            debug!("releasing sequence worker");
        }
        self.shutdown();
    }

    /// Whether the iterator has run out or been released.
    pub fn is_finished(&self) -> bool {
        self.worker.is_none()
    }

    /// View the values not consumed yet as a [`Sequence`].
    ///
    /// Driving the view advances this iterator, exactly like calling `next`,
    /// and the two can be mixed freely.
    pub fn as_sequence(&mut self) -> Remaining<'_, V> {
        Remaining { iter: self }
    }

    fn shutdown(&mut self) {
        // a disconnected channel turns into a stop request on the worker side
        self.resume = None;
        self.items = None;

        let Some(worker) = self.worker.take() else {
            return;
        };
        if let Err(payload) = worker.join() {
            if thread::panicking() {
                warn!("sequence worker panicked while the caller was unwinding");
            } else {
                debug!("propagating panic from sequence worker");
                panic::resume_unwind(payload);
            }
        }
    }
}

impl<V> Iterator for Single<V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        let resume = self.resume.as_ref()?;
        let items = self.items.as_ref()?;
        if resume.send(()).is_ok() {
            if let Ok(v) = items.recv() {
                return Some(v);
            }
        }
        trace!("sequence exhausted");
        self.shutdown();
        None
    }
}

impl<V> FusedIterator for Single<V> {}

/// Driving a `Single` consumes from where `next` left off.
///
/// `Single` is also an [`Iterator`], so `map`, `all` and `for_each` resolve to
/// both traits; call them through [`Single::as_sequence`] or
/// `Sequence::map(&mut iter, ..)` to pick the sequence side.
impl<V> Sequence<V> for Single<V> {
    fn drive(&mut self, step: &mut dyn FnMut(V) -> bool) {
        self.as_sequence().drive(step)
    }
}

impl<V> Drop for Single<V> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl<V> fmt::Debug for Single<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Single")
            .field("finished", &self.is_finished())
            .finish()
    }
}

/// The not-yet-consumed part of a [`Single`], as a [`Sequence`].
///
/// Created via [`Single::as_sequence`].
pub struct Remaining<'a, V> {
    iter: &'a mut Single<V>,
}

impl<V> Sequence<V> for Remaining<'_, V> {
    fn drive(&mut self, step: &mut dyn FnMut(V) -> bool) {
        for v in &mut *self.iter {
            if !step(v) {
                return;
            }
        }
    }
}
