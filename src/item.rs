/// One element of a batch write, see [`Writer::write_x`].
///
/// An item is either a scalar integer of 8, 16, 32 or 64 bits, or a slice of such scalars whose
/// elements are written in order. 24-bit values and strings are not supported in a batch.
///
/// Every supported scalar, scalar reference and scalar slice converts into an `Item` with
/// `From`, so batches are usually written without naming the variants:
///
/// ```
/// use binary_io_at::{Endian, Item, Writer};
///
/// let mut w = Writer::new(Vec::new());
/// let n = w
///     .write_x(
///         Endian::Little,
///         [Item::from(-128i8), Item::from(4660u16), Item::from(&[1i32, 2, 3])],
///     )
///     .unwrap();
/// assert_eq!(n, 15);
/// ```
///
/// [`Writer::write_x`]: crate::Writer::write_x
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Item<'a> {
    /// A single `i8`.
    I8(i8),
    /// A single `i16`.
    I16(i16),
    /// A single `i32`.
    I32(i32),
    /// A single `i64`.
    I64(i64),
    /// A single `u8`.
    U8(u8),
    /// A single `u16`.
    U16(u16),
    /// A single `u32`.
    U32(u32),
    /// A single `u64`.
    U64(u64),
    /// A sequence of `i8`.
    I8Slice(&'a [i8]),
    /// A sequence of `i16`.
    I16Slice(&'a [i16]),
    /// A sequence of `i32`.
    I32Slice(&'a [i32]),
    /// A sequence of `i64`.
    I64Slice(&'a [i64]),
    /// A sequence of `u8`.
    U8Slice(&'a [u8]),
    /// A sequence of `u16`.
    U16Slice(&'a [u16]),
    /// A sequence of `u32`.
    U32Slice(&'a [u32]),
    /// A sequence of `u64`.
    U64Slice(&'a [u64]),
}

impl Item<'_> {
    /// Number of bytes this item occupies once written.
    pub fn encoded_len(&self) -> usize {
        match self {
            Self::I8(_) | Self::U8(_) => 1,
            Self::I16(_) | Self::U16(_) => 2,
            Self::I32(_) | Self::U32(_) => 4,
            Self::I64(_) | Self::U64(_) => 8,
            Self::I8Slice(s) => s.len(),
            Self::U8Slice(s) => s.len(),
            Self::I16Slice(s) => s.len() * 2,
            Self::U16Slice(s) => s.len() * 2,
            Self::I32Slice(s) => s.len() * 4,
            Self::U32Slice(s) => s.len() * 4,
            Self::I64Slice(s) => s.len() * 8,
            Self::U64Slice(s) => s.len() * 8,
        }
    }
}

macro_rules! item_from {
    ($($ty:ty => $scalar:ident, $slice:ident;)*) => {$(
        impl From<$ty> for Item<'_> {
            fn from(value: $ty) -> Self {
                Item::$scalar(value)
            }
        }

        impl From<&$ty> for Item<'_> {
            fn from(value: &$ty) -> Self {
                Item::$scalar(*value)
            }
        }

        impl<'a> From<&'a [$ty]> for Item<'a> {
            fn from(values: &'a [$ty]) -> Self {
                Item::$slice(values)
            }
        }

        impl<'a, const N: usize> From<&'a [$ty; N]> for Item<'a> {
            fn from(values: &'a [$ty; N]) -> Self {
                Item::$slice(values)
            }
        }

        impl<'a> From<&'a Vec<$ty>> for Item<'a> {
            fn from(values: &'a Vec<$ty>) -> Self {
                Item::$slice(values)
            }
        }
    )*};
}

item_from! {
    i8 => I8, I8Slice;
    i16 => I16, I16Slice;
    i32 => I32, I32Slice;
    i64 => I64, I64Slice;
    u8 => U8, U8Slice;
    u16 => U16, U16Slice;
    u32 => U32, U32Slice;
    u64 => U64, U64Slice;
}
