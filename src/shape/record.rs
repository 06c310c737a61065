use super::Shape;

/// A type that can be decoded from result rows.
///
/// Implementations are usually generated by [`bind_record!`](crate::bind_record),
/// which derives both methods from a field list. Hand-written impls are the
/// escape hatch for computed bindings or non-`Default` allocation.
pub trait Record: Sized {
    /// The field-to-column bindings of this type. Called once per decode
    /// call, not per row.
    fn shape() -> Shape<Self>;

    /// Allocates a fresh record for the decoder to fill. Fields that end up
    /// unbound keep the value this gives them.
    fn new_record() -> Self;
}
