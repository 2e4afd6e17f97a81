//! Reads and writes fixed-width integers and fixed-length strings at arbitrary byte offsets of a
//! random-access store, in a byte order chosen per call.
//!
//! [`Reader`] and [`Writer`] each wrap a store (anything implementing [`ReadAt`] or [`WriteAt`])
//! and keep a cursor. Every successful call advances the cursor by the width of the field.
//!
//! # Sticky errors
//!
//! The first failed transfer puts the instance into a failed state. From then on every call
//! returns the same [`Error`] without touching the store or moving the cursor. This allows a
//! sequence of calls to be checked once, at the end, with [`Reader::err`] or [`Writer::err`].
//! There is no way to clear the state; bind a new instance with `with_offset` instead.
//!
//! ```
//! use binary_io_at::{Endian, Reader, Writer};
//!
//! let mut w = Writer::new(Vec::new());
//! w.write_u16(0x1234, Endian::Big).unwrap();
//! w.write_i24(-2, Endian::Little).unwrap();
//!
//! let data = w.into_inner();
//! let mut r = Reader::new(data.as_slice());
//! assert_eq!(r.read_u16(Endian::Big).unwrap(), 0x1234);
//! assert_eq!(r.read_i24(Endian::Little).unwrap(), -2);
//! assert!(r.read_u8().is_err());
//! ```

#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

pub mod endian;
mod error;
mod item;
mod reader;
mod store;
mod writer;


pub use endian::Endian;
pub use error::{Access, Error, Result};
pub use item::Item;
pub use reader::Reader;
pub use store::{RandomAccessStore, ReadAt, WriteAt};
pub use writer::Writer;
