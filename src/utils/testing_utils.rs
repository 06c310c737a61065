use crate::cursor::Cursor;
use crate::error::CursorError;
use crate::value::Value;

/// Cursor wrapper which delegates to an inner cursor and injects a failure
/// on a chosen row, for exercising mid-stream abort paths.
pub struct FailingCursor<C> {
    inner: C,
    fail_on_row: usize,
    scans: usize,
}

impl<C: Cursor> FailingCursor<C> {
    /// Fails the scan of row `fail_on_row` (zero-based); earlier rows pass
    /// through untouched.
    pub fn new(inner: C, fail_on_row: usize) -> Self {
        FailingCursor {
            inner,
            fail_on_row,
            scans: 0,
        }
    }
}

impl<C: Cursor> Cursor for FailingCursor<C> {
    fn columns(&self) -> &[String] {
        self.inner.columns()
    }

    fn next(&mut self) -> Result<bool, CursorError> {
        self.inner.next()
    }

    fn scan(&mut self, targets: &mut [Value]) -> Result<(), CursorError> {
        if self.scans == self.fail_on_row {
            return Err(CursorError::new(format!(
                "injected failure on row {}",
                self.fail_on_row
            )));
        }
        self.scans += 1;
        self.inner.scan(targets)
    }
}
