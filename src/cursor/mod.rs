pub mod memory;

pub use memory::MemoryCursor;

use crate::error::CursorError;
use crate::value::Value;

/// A live handle to a tabular query result, iterated row by row.
///
/// The engine drives a cursor with one protocol: [`columns`](Cursor::columns)
/// once up front, then [`next`](Cursor::next) followed by a single
/// [`scan`](Cursor::scan) for each row until `next` returns `false`.
/// Decoding consumes the cursor's rows irreversibly but never releases the
/// handle itself; that stays with the caller.
pub trait Cursor {
    /// The column names of the result set, in projection order. Stable for
    /// the lifetime of the cursor.
    fn columns(&self) -> &[String];

    /// Advances to the next row. Returns `false` once the result set is
    /// exhausted.
    fn next(&mut self) -> Result<bool, CursorError>;

    /// Fills `targets` with the current row, one cell per column in
    /// projection order. Called exactly once per successful [`next`](Cursor::next);
    /// `targets` has one slot per column.
    fn scan(&mut self, targets: &mut [Value]) -> Result<(), CursorError>;
}
