pub mod bindings;
pub mod decoder;
pub mod options;

pub use bindings::Bindings;
pub use decoder::{decode_rows, decode_rows_with, decode_with};
pub use options::DecodeOptions;
