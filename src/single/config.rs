use crate::{Error, Sequence, Single};

pub(crate) const DEFAULT_THREAD_NAME: &str = "lazyseq-single";

/// Settings for the worker thread behind a [`Single`] iterator.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut iter = SingleConfig::new()
///     .name("numbers")
///     .stack_size(256 * 1024)
///     .spawn(values(vec![1, 2]))
///     .unwrap();
/// assert_eq!(iter.next(), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleConfig {
    pub(crate) name: String,
    pub(crate) stack_size: Option<usize>,
}

impl Default for SingleConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_THREAD_NAME.to_string(),
            stack_size: None,
        }
    }
}

impl SingleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name given to the worker thread. Shows up in panic messages.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Stack size of the worker thread, in bytes. The platform default is used
    /// when unset.
    pub fn stack_size(mut self, size: usize) -> Self {
        self.stack_size = Some(size);
        self
    }

    /// Start a [`Single`] iterator over `seq` with these settings.
    pub fn spawn<V, S>(&self, seq: S) -> Result<Single<V>, Error>
    where
        S: Sequence<V> + Send + 'static,
        V: Send + 'static,
    {
        Single::spawn(self, seq)
    }
}
