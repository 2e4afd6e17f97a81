//! Byte order selection and the per-width encode/decode rules shared by [`Reader`] and
//! [`Writer`].
//!
//! [`Reader`]: crate::Reader
//! [`Writer`]: crate::Writer

use zerocopy::byteorder::{BE, LE, U16, U32, U64};

/// Byte order of a multi-byte field.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Endian {
    /// Least-significant byte first.
    Little,
    /// Most-significant byte first.
    Big,
}

/// Smallest value representable in a signed 24-bit field.
pub const I24_MIN: i32 = -0x0080_0000;

/// Largest value representable in a signed 24-bit field.
pub const I24_MAX: i32 = 0x007f_ffff;

/// Largest value representable in an unsigned 24-bit field.
pub const U24_MAX: u32 = 0x00ff_ffff;

impl Endian {
    /// Byte order of the target platform.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Endian = Endian::Little;

    /// Byte order of the target platform.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Endian = Endian::Big;

    /// Decodes a 16-bit field.
    #[inline(always)]
    pub fn decode_u16(self, bytes: [u8; 2]) -> u16 {
        match self {
            Endian::Little => U16::<LE>::from_bytes(bytes).get(),
            Endian::Big => U16::<BE>::from_bytes(bytes).get(),
        }
    }

    /// Decodes a 24-bit field. The result is always at most [`U24_MAX`].
    #[inline(always)]
    pub fn decode_u24(self, bytes: [u8; 3]) -> u32 {
        let [b0, b1, b2] = bytes;
        match self {
            Endian::Little => U32::<LE>::from_bytes([b0, b1, b2, 0]).get(),
            Endian::Big => U32::<BE>::from_bytes([0, b0, b1, b2]).get(),
        }
    }

    /// Decodes a 32-bit field.
    #[inline(always)]
    pub fn decode_u32(self, bytes: [u8; 4]) -> u32 {
        match self {
            Endian::Little => U32::<LE>::from_bytes(bytes).get(),
            Endian::Big => U32::<BE>::from_bytes(bytes).get(),
        }
    }

    /// Decodes a 64-bit field.
    #[inline(always)]
    pub fn decode_u64(self, bytes: [u8; 8]) -> u64 {
        match self {
            Endian::Little => U64::<LE>::from_bytes(bytes).get(),
            Endian::Big => U64::<BE>::from_bytes(bytes).get(),
        }
    }

    /// Encodes a 16-bit field.
    #[inline(always)]
    pub fn encode_u16(self, value: u16) -> [u8; 2] {
        match self {
            Endian::Little => U16::<LE>::new(value).to_bytes(),
            Endian::Big => U16::<BE>::new(value).to_bytes(),
        }
    }

    /// Encodes the low 24 bits of `value`. Bits above bit 23 are discarded.
    #[inline(always)]
    pub fn encode_u24(self, value: u32) -> [u8; 3] {
        match self {
            Endian::Little => {
                let [b0, b1, b2, _] = U32::<LE>::new(value).to_bytes();
                [b0, b1, b2]
            }
            Endian::Big => {
                let [_, b0, b1, b2] = U32::<BE>::new(value).to_bytes();
                [b0, b1, b2]
            }
        }
    }

    /// Encodes a 32-bit field.
    #[inline(always)]
    pub fn encode_u32(self, value: u32) -> [u8; 4] {
        match self {
            Endian::Little => U32::<LE>::new(value).to_bytes(),
            Endian::Big => U32::<BE>::new(value).to_bytes(),
        }
    }

    /// Encodes a 64-bit field.
    #[inline(always)]
    pub fn encode_u64(self, value: u64) -> [u8; 8] {
        match self {
            Endian::Little => U64::<LE>::new(value).to_bytes(),
            Endian::Big => U64::<BE>::new(value).to_bytes(),
        }
    }
}

/// Recovers a signed value from the two's-complement bit pattern in the low 24 bits of `value`.
///
/// If bit 23 is set the result is `value - 2^24`, otherwise it is `value` unchanged. The result
/// is always within `I24_MIN..=I24_MAX`. Bits above bit 23 are ignored.
pub const fn sign_extend_24(value: u32) -> i32 {
    let value = value & U24_MAX;
    if value & 0x0080_0000 != 0 {
        I24_MIN + (value & 0x007f_ffff) as i32
    } else {
        value as i32
    }
}
