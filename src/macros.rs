/// Implements [`Record`](crate::shape::Record) for a struct from a list of
/// `field => "column"` bindings.
///
/// Each listed field must exist on the struct and its type must implement
/// [`FromValue`](crate::value::FromValue). A field mapped to `_` is declared
/// unbound: the decoder leaves it at whatever `Default` gave it. The struct
/// itself must implement `Default`, which backs the generated allocator.
///
/// ```
/// use rowbind::{decode_rows, MemoryCursor};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Employee {
///     id: i64,
///     name: String,
///     note: String,
/// }
///
/// rowbind::bind_record! {
///     Employee {
///         id => "id",
///         name => "name",
///         note => _,
///     }
/// }
///
/// let mut cursor = MemoryCursor::new(["name", "id"], vec![rowbind::row!["Bob", 1]]);
/// let employees: Vec<Employee> = decode_rows(&mut cursor)?;
/// assert_eq!(employees[0].id, 1);
/// # Ok::<(), rowbind::DecodeError>(())
/// ```
#[macro_export]
macro_rules! bind_record {
    (@field $shape:ident, $field:ident, _) => {
        $shape.unbound(stringify!($field))
    };

    (@field $shape:ident, $field:ident, $column:literal) => {
        $shape.bind(stringify!($field), $column, |record: &mut Self| {
            &mut record.$field
        })
    };

    ($record:ty { $($field:ident => $column:tt),+ $(,)? }) => {
        impl $crate::shape::Record for $record {
            fn shape() -> $crate::shape::Shape<Self> {
                let shape = $crate::shape::Shape::new();
                $(let shape = $crate::bind_record!(@field shape, $field, $column);)+
                shape
            }

            fn new_record() -> Self {
                <Self as ::core::default::Default>::default()
            }
        }
    };
}

/// Builds one row of [`Value`](crate::value::Value) cells from plain Rust
/// expressions, converting each through `Into<Value>`.
///
/// ```
/// use rowbind::{row, Value};
///
/// let cells = row![1, "Bob", None::<i64>];
/// assert_eq!(cells, vec![Value::Int(1), Value::Text("Bob".into()), Value::Null]);
/// ```
#[macro_export]
macro_rules! row {
    () => {
        ::std::vec::Vec::<$crate::value::Value>::new()
    };
    ($($cell:expr),+ $(,)?) => {
        ::std::vec![$($crate::value::Value::from($cell)),+]
    };
}
