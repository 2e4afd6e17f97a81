use bstr::BString;

use crate::endian::{sign_extend_24, Endian};
use crate::error::{advance, Access, Error, Result, State};
use crate::store::ReadAt;

/// Decodes fixed-width values from a random-access store, starting at a cursor that advances
/// with every successful read.
///
/// Multi-byte values take an [`Endian`] argument per call. Single-byte values do not.
///
/// The first failed read puts the reader into a failed state. Every later call returns the same
/// error, performs no I/O, and leaves the cursor where it is. See [`Reader::err`].
///
/// A store that reports fewer bytes than requested, without an error, is treated as having
/// completed the transfer. The cursor advances by the full width of the field.
///
/// `Reader` is not designed for concurrent use; share the store instead, with one reader per
/// caller.
#[derive(Debug)]
pub struct Reader<S> {
    store: S,
    offset: u64,
    state: State,
}

impl<S: ReadAt> Reader<S> {
    /// Binds a reader to `store` at offset 0.
    pub fn new(store: S) -> Self {
        Self::with_offset(store, 0)
    }

    /// Binds a reader to `store` at `offset`.
    pub fn with_offset(store: S, offset: u64) -> Self {
        Self {
            store,
            offset,
            state: State::Ready,
        }
    }

    /// Returns the error that stopped this reader, if any.
    pub fn err(&self) -> Option<&Error> {
        self.state.err()
    }

    /// The offset of the next read.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Moves the cursor without performing any I/O. This does not clear a sticky error.
    pub fn set_offset(&mut self, offset: u64) {
        self.offset = offset;
    }

    /// Accesses the store
    pub fn get_ref(&self) -> &S {
        &self.store
    }

    /// Accesses the store
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Extracts the store
    pub fn into_inner(self) -> S {
        self.store
    }

    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        self.state.check()?;

        let start = self.offset;
        let len = buf.len();
        let transfer = advance(start, len)
            .and_then(|end| self.store.read_at(buf, start).map(|n| (n, end)));

        match transfer {
            Ok((n, end)) => {
                if n < len {
                    tracing::trace!(
                        offset = start,
                        requested = len,
                        transferred = n,
                        "short read"
                    );
                }
                self.offset = end;
                Ok(())
            }
            Err(e) => Err(self.state.fail(Access::Read, start, len, e)),
        }
    }

    /// Reads exactly `buf.len()` bytes into `buf`.
    pub fn read_raw_into(&mut self, buf: &mut [u8]) -> Result<()> {
        self.fill(buf)
    }

    /// Reads exactly `len` bytes. A failed reader returns its error without allocating.
    pub fn read_raw(&mut self, len: usize) -> Result<Vec<u8>> {
        self.state.check()?;
        let mut buf = vec![0; len];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    /// Reads a small array of bytes, with a constant length.
    #[inline(always)]
    pub fn read_cbytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0; N];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    /// Reads a single `u8` value.
    #[inline(always)]
    pub fn read_u8(&mut self) -> Result<u8> {
        let [b] = self.read_cbytes()?;
        Ok(b)
    }

    /// Reads a `u16`.
    #[inline(always)]
    pub fn read_u16(&mut self, endian: Endian) -> Result<u16> {
        Ok(endian.decode_u16(self.read_cbytes()?))
    }

    /// Reads a 3-byte unsigned value. The result is at most `0xff_ffff`.
    #[inline(always)]
    pub fn read_u24(&mut self, endian: Endian) -> Result<u32> {
        Ok(endian.decode_u24(self.read_cbytes()?))
    }

    /// Reads a `u32`.
    #[inline(always)]
    pub fn read_u32(&mut self, endian: Endian) -> Result<u32> {
        Ok(endian.decode_u32(self.read_cbytes()?))
    }

    /// Reads a `u64`.
    #[inline(always)]
    pub fn read_u64(&mut self, endian: Endian) -> Result<u64> {
        Ok(endian.decode_u64(self.read_cbytes()?))
    }

    /// Reads a single `i8` value.
    #[inline(always)]
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    /// Reads an `i16`.
    #[inline(always)]
    pub fn read_i16(&mut self, endian: Endian) -> Result<i16> {
        Ok(self.read_u16(endian)? as i16)
    }

    /// Reads a 3-byte two's-complement value, sign-extended into `i32`.
    ///
    /// The result is in `-8_388_608..=8_388_607`. For example, `80 00 00` (big-endian) reads as
    /// `-8_388_608` and `ff ff ff` reads as `-1`.
    #[inline(always)]
    pub fn read_i24(&mut self, endian: Endian) -> Result<i32> {
        Ok(sign_extend_24(self.read_u24(endian)?))
    }

    /// Reads an `i32`.
    #[inline(always)]
    pub fn read_i32(&mut self, endian: Endian) -> Result<i32> {
        Ok(self.read_u32(endian)? as i32)
    }

    /// Reads an `i64`.
    #[inline(always)]
    pub fn read_i64(&mut self, endian: Endian) -> Result<i64> {
        Ok(self.read_u64(endian)? as i64)
    }

    /// Reads a 1-byte string.
    pub fn read_str8(&mut self) -> Result<BString> {
        Ok(BString::from(vec![self.read_u8()?]))
    }

    /// Reads a 2-byte string.
    ///
    /// The field is decoded as a `u16` in `endian` byte order, and the string is that integer's
    /// bytes, most significant first. With [`Endian::Big`] the string has the same byte order as
    /// the store. With [`Endian::Little`] it is reversed: the stored bytes `21` read as `"12"`.
    ///
    /// The same rule applies to `read_str24`, `read_str32` and `read_str64`. A string written by
    /// [`Writer::write_str16`] reads back unchanged when both sides use the same byte order.
    ///
    /// [`Writer::write_str16`]: crate::Writer::write_str16
    pub fn read_str16(&mut self, endian: Endian) -> Result<BString> {
        Ok(BString::from(self.read_u16(endian)?.to_be_bytes().to_vec()))
    }

    /// Reads a 3-byte string. See [`Reader::read_str16`] for the byte order.
    pub fn read_str24(&mut self, endian: Endian) -> Result<BString> {
        let [_, field @ ..] = self.read_u24(endian)?.to_be_bytes();
        Ok(BString::from(field.to_vec()))
    }

    /// Reads a 4-byte string. See [`Reader::read_str16`] for the byte order.
    pub fn read_str32(&mut self, endian: Endian) -> Result<BString> {
        Ok(BString::from(self.read_u32(endian)?.to_be_bytes().to_vec()))
    }

    /// Reads an 8-byte string. See [`Reader::read_str16`] for the byte order.
    pub fn read_str64(&mut self, endian: Endian) -> Result<BString> {
        Ok(BString::from(self.read_u64(endian)?.to_be_bytes().to_vec()))
    }
}
