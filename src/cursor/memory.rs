use super::Cursor;
use crate::error::CursorError;
use crate::value::Value;

/// A [`Cursor`] over rows held in memory.
///
/// Backs tests, benchmarks and examples; also handy for feeding
/// already-materialized data through the decoder.
pub struct MemoryCursor {
    columns: Vec<String>,
    rows: std::vec::IntoIter<Vec<Value>>,
    current: Option<Vec<Value>>,
}

impl MemoryCursor {
    /// Creates a cursor positioned before the first row.
    ///
    /// # Panics
    ///
    /// Panics if any row's cell count differs from the column count.
    pub fn new<I, S>(columns: I, rows: Vec<Vec<Value>>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                panic!(
                    "row {index} has {} cells for {} columns",
                    row.len(),
                    columns.len()
                );
            }
        }
        MemoryCursor {
            columns,
            rows: rows.into_iter(),
            current: None,
        }
    }
}

impl Cursor for MemoryCursor {
    fn columns(&self) -> &[String] {
        &self.columns
    }

    fn next(&mut self) -> Result<bool, CursorError> {
        self.current = self.rows.next();
        Ok(self.current.is_some())
    }

    fn scan(&mut self, targets: &mut [Value]) -> Result<(), CursorError> {
        let row = self
            .current
            .take()
            .ok_or_else(|| CursorError::new("scan without a current row"))?;
        if targets.len() != self.columns.len() {
            return Err(CursorError::new(format!(
                "scan given {} slots for {} columns",
                targets.len(),
                self.columns.len()
            )));
        }
        for (target, value) in targets.iter_mut().zip(row) {
            *target = value;
        }
        Ok(())
    }
}
