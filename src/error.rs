use std::fmt;
use std::io;
use std::sync::Arc;

/// Result type for `Reader` and `Writer` operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Direction of a failed store transfer.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Access {
    /// The store was being read.
    Read,
    /// The store was being written.
    Write,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => f.write_str("read"),
            Self::Write => f.write_str("write"),
        }
    }
}

/// Error type for `Reader` and `Writer`.
///
/// Decoding never fails on the bytes themselves; every fixed-width field is well-formed for any
/// input. The only failure is a failed transfer to or from the store.
///
/// Once an instance has failed, it returns clones of the same error from every later call, so
/// the type is `Clone` and shares the underlying `io::Error`.
#[derive(Clone, Debug, thiserror::Error)]
pub enum Error {
    /// The store reported an error for a transfer, or the transfer could not be addressed.
    #[error("store {access} of {len} bytes at offset {offset} failed")]
    Store {
        /// Whether the failed transfer was a read or a write.
        access: Access,
        /// Cursor position at which the transfer was attempted.
        offset: u64,
        /// Number of bytes requested.
        len: usize,
        /// The error reported by the store.
        #[source]
        source: Arc<io::Error>,
    },
}

impl Error {
    pub(crate) fn store(access: Access, offset: u64, len: usize, source: io::Error) -> Self {
        Self::Store {
            access,
            offset,
            len,
            source: Arc::new(source),
        }
    }

    /// Whether the failed transfer was a read or a write.
    pub fn access(&self) -> Access {
        match self {
            Self::Store { access, .. } => *access,
        }
    }

    /// Cursor position at which the failed transfer was attempted.
    pub fn offset(&self) -> u64 {
        match self {
            Self::Store { offset, .. } => *offset,
        }
    }

    /// Number of bytes the failed transfer requested.
    pub fn requested_len(&self) -> usize {
        match self {
            Self::Store { len, .. } => *len,
        }
    }

    /// The `io::ErrorKind` reported by the store.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::Store { source, .. } => source.kind(),
        }
    }
}

/// Two-state machine behind the sticky error of `Reader` and `Writer`.
#[derive(Debug)]
pub(crate) enum State {
    Ready,
    Failed(Error),
}

impl State {
    /// Returns the sticky error if the instance has already failed.
    pub(crate) fn check(&self) -> Result<()> {
        match self {
            Self::Ready => Ok(()),
            Self::Failed(e) => Err(e.clone()),
        }
    }

    pub(crate) fn err(&self) -> Option<&Error> {
        match self {
            Self::Ready => None,
            Self::Failed(e) => Some(e),
        }
    }

    /// Transitions Ready -> Failed. Never called on a failed instance.
    pub(crate) fn fail(
        &mut self,
        access: Access,
        offset: u64,
        len: usize,
        source: io::Error,
    ) -> Error {
        tracing::debug!(%access, offset, len, error = %source, "store transfer failed");
        let e = Error::store(access, offset, len, source);
        *self = Self::Failed(e.clone());
        e
    }
}

/// Position of the cursor after a transfer of `len` bytes at `offset`.
pub(crate) fn advance(offset: u64, len: usize) -> io::Result<u64> {
    u64::try_from(len)
        .ok()
        .and_then(|len| offset.checked_add(len))
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "transfer extends past the largest representable offset",
            )
        })
}
