pub mod field;
pub mod record;

pub use field::FieldBinding;
pub use record::Record;

use crate::value::{FromValue, Value};

use field::StoreFn;

/// The decodable structure of a record type: an ordered list of fields,
/// each either bound to a result column by name or left unbound.
///
/// A shape is built once per record type and consulted on every decode
/// call; it holds no connection or cursor state.
pub struct Shape<R> {
    fields: Vec<FieldBinding<R>>,
}

impl<R> Shape<R> {
    pub fn new() -> Self {
        Shape { fields: Vec::new() }
    }

    /// Declares a field bound to `column`. The `access` function projects
    /// the field out of a record so the decoder can write into it; `F` is
    /// converted from the fetched cell through [`FromValue`].
    ///
    /// # Panics
    ///
    /// Panics if an earlier field already binds `column`. Column claims
    /// must be unique within one shape.
    pub fn bind<F>(
        mut self,
        name: &'static str,
        column: &'static str,
        access: fn(&mut R) -> &mut F,
    ) -> Self
    where
        R: 'static,
        F: FromValue + 'static,
    {
        if self.fields.iter().any(|f| f.column() == Some(column)) {
            panic!("column {column:?} is bound more than once");
        }
        let store: StoreFn<R> = Box::new(move |record: &mut R, value: Value| {
            *access(record) = F::from_value(value)?;
            Ok(())
        });
        self.fields.push(FieldBinding::bound(name, column, store));
        self
    }

    /// Declares a field with no column binding. The decoder never touches
    /// it; the record allocator's value survives.
    pub fn unbound(mut self, name: &'static str) -> Self {
        self.fields.push(FieldBinding::unbound(name));
        self
    }

    pub fn fields(&self) -> &[FieldBinding<R>] {
        &self.fields
    }

    /// Number of fields that claim a column.
    pub fn bound_count(&self) -> usize {
        self.fields.iter().filter(|f| f.is_bound()).count()
    }
}

impl<R> Default for Shape<R> {
    fn default() -> Self {
        Shape::new()
    }
}
