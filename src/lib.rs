//! Declarative binding and decoding of tabular query results.
//!
//! A [`Shape`] maps a struct's fields to result columns by name; the decoder
//! resolves that mapping against a [`Cursor`]'s columns once, then drains the
//! cursor into a `Vec` of typed records. Resolution is strict by default:
//! every bound field must find its column and every column must be claimed.
//!
//! ```
//! use rowbind::{decode_rows, MemoryCursor};
//!
//! #[derive(Debug, Default)]
//! struct Employee {
//!     id: i64,
//!     name: String,
//!     age: i64,
//! }
//!
//! rowbind::bind_record! {
//!     Employee {
//!         id => "id",
//!         name => "name",
//!         age => "age",
//!     }
//! }
//!
//! let mut cursor = MemoryCursor::new(
//!     ["id", "name", "age"],
//!     vec![rowbind::row![1, "Bob", 40], rowbind::row![2, "Jane", 35]],
//! );
//! let employees: Vec<Employee> = decode_rows(&mut cursor)?;
//! assert_eq!(employees.len(), 2);
//! assert_eq!(employees[1].name, "Jane");
//! # Ok::<(), rowbind::DecodeError>(())
//! ```

pub mod error;
pub mod value;
pub mod shape;
pub mod cursor;
pub mod decode;
pub mod utils;

mod macros;

pub use crate::cursor::{Cursor, MemoryCursor};
pub use crate::decode::{Bindings, DecodeOptions, decode_rows, decode_rows_with, decode_with};
pub use crate::error::{CursorError, DecodeError, DecodeResult};
pub use crate::shape::{FieldBinding, Record, Shape};
pub use crate::value::{FromValue, Value, ValueError, ValueType};
