use std::mem;

use tracing::{debug, instrument};

use super::{Bindings, DecodeOptions};
use crate::cursor::Cursor;
use crate::error::{DecodeError, DecodeResult};
use crate::shape::{Record, Shape};
use crate::value::Value;

/// Decodes every remaining row of `cursor` into a vector of `R`, resolving
/// `R`'s shape against the cursor's columns under the default strict policy.
///
/// The call is atomic: any failure, whether from the cursor or from a value
/// that will not fit its field, discards all records decoded so far and
/// returns the error. The cursor's consumed rows are not restored.
pub fn decode_rows<R, C>(cursor: &mut C) -> DecodeResult<Vec<R>>
where
    R: Record,
    C: Cursor + ?Sized,
{
    decode_rows_with(cursor, &DecodeOptions::new())
}

/// Like [`decode_rows`], with explicit [`DecodeOptions`].
pub fn decode_rows_with<R, C>(cursor: &mut C, options: &DecodeOptions) -> DecodeResult<Vec<R>>
where
    R: Record,
    C: Cursor + ?Sized,
{
    let shape = R::shape();
    let bindings = Bindings::resolve_with(&shape, cursor.columns(), options)?;
    decode_with(cursor, &shape, &bindings)
}

/// Drives `cursor` to exhaustion, producing one record per row through an
/// already-resolved correspondence.
///
/// This is the repeat-query path: resolve a [`Bindings`] once, then decode
/// any number of cursors that share the column list it was resolved against.
///
/// # Panics
///
/// Panics if the cursor reports a different column list than the one
/// `bindings` was resolved against. Positions in a correspondence are only
/// meaningful for that exact projection.
#[instrument(level = "debug", skip_all)]
pub fn decode_with<R, C>(cursor: &mut C, shape: &Shape<R>, bindings: &Bindings) -> DecodeResult<Vec<R>>
where
    R: Record,
    C: Cursor + ?Sized,
{
    let columns = cursor.columns().to_vec();
    assert_eq!(
        columns,
        bindings.columns(),
        "bindings do not match the cursor's columns"
    );

    let mut records = Vec::new();
    let mut row = vec![Value::Null; columns.len()];
    let mut row_index = 0;
    while cursor.next()? {
        cursor.scan(&mut row)?;
        let mut record = R::new_record();
        for (position, cell) in row.iter_mut().enumerate() {
            let value = mem::replace(cell, Value::Null);
            let field = &shape.fields()[bindings.field_index(position)];
            field
                .store(&mut record, value)
                .map_err(|source| DecodeError::Bind {
                    row: row_index,
                    column: columns[position].clone(),
                    source,
                })?;
        }
        records.push(record);
        row_index += 1;
    }

    debug!(rows = records.len(), "decoded result set");
    Ok(records)
}
