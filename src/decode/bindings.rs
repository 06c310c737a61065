use std::collections::HashMap;

use tracing::{debug, trace};

use super::DecodeOptions;
use crate::error::{DecodeError, DecodeResult};
use crate::shape::Shape;

/// The resolved correspondence between result columns and shape fields:
/// entry `i` is the index of the field that receives column `i`.
///
/// A `Bindings` is valid for any cursor with the same column list it was
/// resolved against, so callers running one query repeatedly can resolve
/// once and decode many times through
/// [`decode_with`](crate::decode::decode_with).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bindings {
    targets: Vec<usize>,
    columns: Vec<String>,
}

impl Bindings {
    /// Resolves `shape` against a result set's columns under the default
    /// strict policy.
    pub fn resolve<R>(shape: &Shape<R>, columns: &[String]) -> DecodeResult<Self> {
        Bindings::resolve_with(shape, columns, &DecodeOptions::new())
    }

    /// Resolves `shape` against a result set's columns.
    ///
    /// Matching is by name, so the projection order of `columns` never
    /// matters. Every result column must end up claimed by exactly one
    /// field; a bound field whose column is absent is an error unless
    /// `options.allow_unbound_fields` is set.
    pub fn resolve_with<R>(
        shape: &Shape<R>,
        columns: &[String],
        options: &DecodeOptions,
    ) -> DecodeResult<Self> {
        let fold = |name: &str| {
            if options.case_insensitive_columns {
                name.to_ascii_lowercase()
            } else {
                name.to_string()
            }
        };

        let mut positions = HashMap::with_capacity(columns.len());
        for (position, column) in columns.iter().enumerate() {
            if positions.insert(fold(column), position).is_some() {
                return Err(DecodeError::AmbiguousColumn {
                    column: column.clone(),
                });
            }
        }

        let mut targets: Vec<Option<usize>> = vec![None; columns.len()];
        for (field_index, field) in shape.fields().iter().enumerate() {
            let Some(column) = field.column() else {
                continue;
            };
            match positions.get(&fold(column)) {
                Some(&position) => {
                    if targets[position].replace(field_index).is_some() {
                        return Err(DecodeError::DuplicateBinding {
                            column: columns[position].clone(),
                        });
                    }
                }
                None if options.allow_unbound_fields => {
                    trace!(field = field.name(), column, "declared column absent, field skipped");
                }
                None => {
                    return Err(DecodeError::MissingColumn {
                        field: field.name(),
                        column,
                    });
                }
            }
        }

        let mut resolved = Vec::with_capacity(columns.len());
        for (position, target) in targets.into_iter().enumerate() {
            match target {
                Some(field_index) => resolved.push(field_index),
                None => {
                    return Err(DecodeError::UnclaimedColumn {
                        column: columns[position].clone(),
                    });
                }
            }
        }

        debug!(
            columns = columns.len(),
            bound = shape.bound_count(),
            "resolved bindings"
        );
        Ok(Bindings {
            targets: resolved,
            columns: columns.to_vec(),
        })
    }

    /// Index of the field that receives the given column position.
    pub fn field_index(&self, position: usize) -> usize {
        self.targets[position]
    }

    /// The column list this correspondence was resolved against.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
