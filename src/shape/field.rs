use std::fmt;

use crate::value::{Value, ValueError};

/// Writes one fetched value into its field of a record under construction.
pub(crate) type StoreFn<R> = Box<dyn Fn(&mut R, Value) -> Result<(), ValueError> + Send + Sync>;

/// One declared field of a [`Shape`](crate::shape::Shape): the field's name,
/// the result column it claims, and the slot that stores a value into it.
///
/// A field with no column takes no part in binding resolution and keeps
/// whatever the record allocator put in it.
pub struct FieldBinding<R> {
    name: &'static str,
    column: Option<&'static str>,
    store: Option<StoreFn<R>>,
}

impl<R> FieldBinding<R> {
    pub(crate) fn bound(name: &'static str, column: &'static str, store: StoreFn<R>) -> Self {
        FieldBinding {
            name,
            column: Some(column),
            store: Some(store),
        }
    }

    pub(crate) fn unbound(name: &'static str) -> Self {
        FieldBinding {
            name,
            column: None,
            store: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn column(&self) -> Option<&'static str> {
        self.column
    }

    pub fn is_bound(&self) -> bool {
        self.column.is_some()
    }

    pub(crate) fn store(&self, record: &mut R, value: Value) -> Result<(), ValueError> {
        match &self.store {
            Some(store) => store(record, value),
            // Resolution never targets an unbound field.
            None => Ok(()),
        }
    }
}

impl<R> fmt::Debug for FieldBinding<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldBinding")
            .field("name", &self.name)
            .field("column", &self.column)
            .finish_non_exhaustive()
    }
}
