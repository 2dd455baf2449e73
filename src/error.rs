use std::io;

/// Errors from setting up a [`Single`](crate::Single) iterator.
///
/// The combinators themselves have no failure mode of their own: a panic in a
/// caller-supplied closure unwinds through them unchanged.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The worker thread that drives the source sequence could not be started.
    #[error("failed to spawn sequence worker thread")]
    Spawn(#[source] io::Error),
}
