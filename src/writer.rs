use crate::endian::Endian;
use crate::error::{advance, Access, Error, Result, State};
use crate::item::Item;
use crate::store::WriteAt;

/// Encodes fixed-width values into a random-access store, starting at a cursor that advances
/// with every successful write.
///
/// Every `write_*` method returns the number of bytes written. Values use the same byte layout
/// as the corresponding `Reader` method, so a value written with one byte order reads back
/// unchanged with the same byte order.
///
/// The first failed write puts the writer into a failed state. Every later call returns the same
/// error, performs no I/O, and leaves the cursor where it is. See [`Writer::err`].
///
/// The cursor can be moved freely with [`Writer::set_offset`], for example to fill in a length
/// field after the body it describes has been written.
#[derive(Debug)]
pub struct Writer<S> {
    store: S,
    offset: u64,
    state: State,
}

impl<S: WriteAt> Writer<S> {
    /// Binds a writer to `store` at offset 0.
    pub fn new(store: S) -> Self {
        Self::with_offset(store, 0)
    }

    /// Binds a writer to `store` at `offset`.
    pub fn with_offset(store: S, offset: u64) -> Self {
        Self {
            store,
            offset,
            state: State::Ready,
        }
    }

    /// Returns the error that stopped this writer, if any.
    pub fn err(&self) -> Option<&Error> {
        self.state.err()
    }

    /// The offset of the next write.
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

    fn put(&mut self, bytes: &[u8]) -> Result<usize> {
        self.state.check()?;

        let start = self.offset;
        let len = bytes.len();
        let transfer = advance(start, len)
            .and_then(|end| self.store.write_at(bytes, start).map(|n| (n, end)));

        match transfer {
            Ok((n, end)) => {
                if n < len {
                    tracing::trace!(
                        offset = start,
                        requested = len,
                        transferred = n,
                        "short write"
                    );
                }
                self.offset = end;
                Ok(len)
            }
            Err(e) => Err(self.state.fail(Access::Write, start, len, e)),
        }
    }

    /// Writes `bytes` at the cursor.
    pub fn write_raw(&mut self, bytes: &[u8]) -> Result<usize> {
        self.put(bytes)
    }

    /// Writes a single `u8` value
    #[inline(always)]
    pub fn write_u8(&mut self, value: u8) -> Result<usize> {
        self.put(&[value])
    }

    /// Writes a single `u16` value
    #[inline(always)]
    pub fn write_u16(&mut self, value: u16, endian: Endian) -> Result<usize> {
        self.put(&endian.encode_u16(value))
    }

    /// Writes the low 24 bits of `value` as a 3-byte field.
    #[inline(always)]
    pub fn write_u24(&mut self, value: u32, endian: Endian) -> Result<usize> {
        self.put(&endian.encode_u24(value))
    }

    /// Writes a single `u32` value
    #[inline(always)]
    pub fn write_u32(&mut self, value: u32, endian: Endian) -> Result<usize> {
        self.put(&endian.encode_u32(value))
    }

    /// Writes a single `u64` value
    #[inline(always)]
    pub fn write_u64(&mut self, value: u64, endian: Endian) -> Result<usize> {
        self.put(&endian.encode_u64(value))
    }

    /// Writes a single `i8` value
    #[inline(always)]
    pub fn write_i8(&mut self, value: i8) -> Result<usize> {
        self.write_u8(value as u8)
    }

    /// Writes a single `i16` value
    #[inline(always)]
    pub fn write_i16(&mut self, value: i16, endian: Endian) -> Result<usize> {
        self.write_u16(value as u16, endian)
    }

    /// Writes `value` as a 3-byte two's-complement field.
    ///
    /// Values outside `-8_388_608..=8_388_607` are truncated to their low 24 bits.
    #[inline(always)]
    pub fn write_i24(&mut self, value: i32, endian: Endian) -> Result<usize> {
        self.write_u24(value as u32, endian)
    }

    /// Writes a single `i32` value
    #[inline(always)]
    pub fn write_i32(&mut self, value: i32, endian: Endian) -> Result<usize> {
        self.write_u32(value as u32, endian)
    }

    /// Writes a single `i64` value
    #[inline(always)]
    pub fn write_i64(&mut self, value: i64, endian: Endian) -> Result<usize> {
        self.write_u64(value as u64, endian)
    }

    /// Writes a 1-byte string.
    pub fn write_str8(&mut self, s: &[u8; 1]) -> Result<usize> {
        self.write_u8(s[0])
    }

    /// Writes a 2-byte string.
    ///
    /// `s` is taken as a big-endian integer (first byte most significant), which is then written
    /// like [`Writer::write_u16`]. With [`Endian::Little`] the stored bytes are therefore
    /// reversed. Reading the field back with `Reader::read_str16` and the same byte order yields
    /// `s` again.
    pub fn write_str16(&mut self, s: &[u8; 2], endian: Endian) -> Result<usize> {
        self.write_u16(u16::from_be_bytes(*s), endian)
    }

    /// Writes a 3-byte string. See [`Writer::write_str16`] for the byte order.
    pub fn write_str24(&mut self, s: &[u8; 3], endian: Endian) -> Result<usize> {
        let [b0, b1, b2] = *s;
        self.write_u24(u32::from_be_bytes([0, b0, b1, b2]), endian)
    }

    /// Writes a 4-byte string. See [`Writer::write_str16`] for the byte order.
    pub fn write_str32(&mut self, s: &[u8; 4], endian: Endian) -> Result<usize> {
        self.write_u32(u32::from_be_bytes(*s), endian)
    }

    /// Writes an 8-byte string. See [`Writer::write_str16`] for the byte order.
    pub fn write_str64(&mut self, s: &[u8; 8], endian: Endian) -> Result<usize> {
        self.write_u64(u64::from_be_bytes(*s), endian)
    }

    /// Writes one batch item. Slice elements are written one at a time, in order.
    pub fn write_item(&mut self, item: Item<'_>, endian: Endian) -> Result<usize> {
        match item {
            Item::I8(v) => self.write_i8(v),
            Item::I16(v) => self.write_i16(v, endian),
            Item::I32(v) => self.write_i32(v, endian),
            Item::I64(v) => self.write_i64(v, endian),
            Item::U8(v) => self.write_u8(v),
            Item::U16(v) => self.write_u16(v, endian),
            Item::U32(v) => self.write_u32(v, endian),
            Item::U64(v) => self.write_u64(v, endian),
            Item::I8Slice(s) => self.write_each(s, |w, &v| w.write_i8(v)),
            Item::I16Slice(s) => self.write_each(s, |w, &v| w.write_i16(v, endian)),
            Item::I32Slice(s) => self.write_each(s, |w, &v| w.write_i32(v, endian)),
            Item::I64Slice(s) => self.write_each(s, |w, &v| w.write_i64(v, endian)),
            Item::U8Slice(s) => self.write_each(s, |w, &v| w.write_u8(v)),
            Item::U16Slice(s) => self.write_each(s, |w, &v| w.write_u16(v, endian)),
            Item::U32Slice(s) => self.write_each(s, |w, &v| w.write_u32(v, endian)),
            Item::U64Slice(s) => self.write_each(s, |w, &v| w.write_u64(v, endian)),
        }
    }

    fn write_each<T>(
        &mut self,
        values: &[T],
        mut write: impl FnMut(&mut Self, &T) -> Result<usize>,
    ) -> Result<usize> {
        let mut n = 0;
        for v in values {
            n += write(self, v)?;
        }
        Ok(n)
    }

    /// Writes a heterogeneous sequence of items, all multi-byte values in `endian` byte order.
    /// Returns the total number of bytes written.
    ///
    /// Writing stops at the first failure and that error is returned. The items written before
    /// it stay in the store, and the cursor is left after the last successful write.
    pub fn write_x<'a, I>(&mut self, endian: Endian, items: I) -> Result<usize>
    where
        I: IntoIterator,
        I::Item: Into<Item<'a>>,
    {
        let mut n = 0;
        for item in items {
            n += self.write_item(item.into(), endian)?;
        }
        Ok(n)
    }
}
