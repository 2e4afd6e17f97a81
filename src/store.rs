//! Random-access stores that `Reader` and `Writer` transfer bytes to and from.
//!
//! The semantics follow POSIX `pread`/`pwrite`: a transfer names its own offset and does not
//! depend on any seek position held by the store. A store may return a count smaller than the
//! buffer without reporting an error; the codec treats that as a complete transfer and does not
//! loop. The stores provided here always complete the transfer or return an error.

use std::io;

/// A byte source that can be read at arbitrary offsets.
pub trait ReadAt {
    /// Reads `buf.len()` bytes starting at `offset`, returning the number of bytes read.
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize>;
}

/// A byte sink that can be written at arbitrary offsets.
pub trait WriteAt {
    /// Writes `buf` starting at `offset`, returning the number of bytes written.
    fn write_at(&mut self, buf: &[u8], offset: u64) -> io::Result<usize>;
}

/// A store supporting both positional reads and positional writes.
pub trait RandomAccessStore: ReadAt + WriteAt {}

impl<T: ReadAt + WriteAt + ?Sized> RandomAccessStore for T {}

fn to_index(offset: u64) -> io::Result<usize> {
    usize::try_from(offset).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "offset exceeds the addressable range",
        )
    })
}

/// Reads past the end of the slice copy nothing and fail with `UnexpectedEof`.
impl ReadAt for [u8] {
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        let start = to_index(offset)?;
        let src = start
            .checked_add(buf.len())
            .and_then(|end| self.get(start..end))
            .ok_or_else(|| io::Error::from(io::ErrorKind::UnexpectedEof))?;
        buf.copy_from_slice(src);
        Ok(buf.len())
    }
}

impl ReadAt for Vec<u8> {
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        self.as_slice().read_at(buf, offset)
    }
}

/// Writes past the end grow the vector. Any gap between the old end and `offset` is zero-filled,
/// the same way a sparse file reads back.
impl WriteAt for Vec<u8> {
    fn write_at(&mut self, buf: &[u8], offset: u64) -> io::Result<usize> {
        let start = to_index(offset)?;
        let end = start.checked_add(buf.len()).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "write extends past the addressable range",
            )
        })?;
        if self.len() < end {
            self.resize(end, 0);
        }
        self[start..end].copy_from_slice(buf);
        Ok(buf.len())
    }
}

impl<T: ReadAt + ?Sized> ReadAt for &T {
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        (**self).read_at(buf, offset)
    }
}

impl<T: ReadAt + ?Sized> ReadAt for &mut T {
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        (**self).read_at(buf, offset)
    }
}

impl<T: WriteAt + ?Sized> WriteAt for &mut T {
    fn write_at(&mut self, buf: &[u8], offset: u64) -> io::Result<usize> {
        (**self).write_at(buf, offset)
    }
}

impl<T: ReadAt + ?Sized> ReadAt for Box<T> {
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        (**self).read_at(buf, offset)
    }
}

impl<T: WriteAt + ?Sized> WriteAt for Box<T> {
    fn write_at(&mut self, buf: &[u8], offset: u64) -> io::Result<usize> {
        (**self).write_at(buf, offset)
    }
}

#[cfg(unix)]
mod file {
    use std::fs::File;
    use std::io;
    use std::os::unix::fs::FileExt;

    pub(super) fn read_at(file: &File, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        file.read_exact_at(buf, offset)?;
        Ok(buf.len())
    }

    pub(super) fn write_at(file: &File, buf: &[u8], offset: u64) -> io::Result<usize> {
        file.write_all_at(buf, offset)?;
        Ok(buf.len())
    }
}

#[cfg(windows)]
mod file {
    use std::fs::File;
    use std::io;
    use std::os::windows::fs::FileExt;

    // `seek_read` and `seek_write` move the file cursor; nothing in this crate relies on it.
    pub(super) fn read_at(file: &File, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        let mut done = 0;
        while done < buf.len() {
            match file.seek_read(&mut buf[done..], offset + done as u64) {
                Ok(0) => return Err(io::Error::from(io::ErrorKind::UnexpectedEof)),
                Ok(n) => done += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        Ok(done)
    }

    pub(super) fn write_at(file: &File, buf: &[u8], offset: u64) -> io::Result<usize> {
        let mut done = 0;
        while done < buf.len() {
            match file.seek_write(&buf[done..], offset + done as u64) {
                Ok(0) => return Err(io::Error::from(io::ErrorKind::WriteZero)),
                Ok(n) => done += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        Ok(done)
    }
}

#[cfg(any(unix, windows))]
impl ReadAt for std::fs::File {
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        file::read_at(self, buf, offset)
    }
}

#[cfg(any(unix, windows))]
impl WriteAt for std::fs::File {
    fn write_at(&mut self, buf: &[u8], offset: u64) -> io::Result<usize> {
        file::write_at(self, buf, offset)
    }
}

/// Positional writes do not need exclusive access to the file, so several writers can share one
/// handle as long as they write disjoint ranges.
#[cfg(any(unix, windows))]
impl WriteAt for &std::fs::File {
    fn write_at(&mut self, buf: &[u8], offset: u64) -> io::Result<usize> {
        file::write_at(self, buf, offset)
    }
}
