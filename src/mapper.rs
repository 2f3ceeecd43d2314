//! Schema node → [`TypeDescriptor`].
//!
//! Rules, first match wins:
//! 1. no kind                          → unresolved
//! 2. `array`                          → element name + `[]` (canonical name if the element name has one)
//! 3. `string` with allowed values     → `'a' | 'b'` over `string`
//! 4. kind in the [`KindNames`] table  → canonical name (`date` → `Date`)
//! 5. anything else                    → the kind itself
//!
//! An unresolved result is `None`. Nothing here panics or errors.
pub mod array;
pub mod kinds;

pub use array::array_item_name;
pub use kinds::KindNames;

use crate::ir::TypeDescriptor;
use crate::node::{kind, SchemaNode};

#[derive(Debug, Clone, Default)]
pub struct TypeMapper {
    names: KindNames,
}

impl TypeMapper {
    pub fn new(names: KindNames) -> Self {
        Self { names }
    }

    pub fn kind_names(&self) -> &KindNames {
        &self.names
    }

    pub fn map<N: SchemaNode>(&self, node: &N) -> Option<TypeDescriptor> {
        let schema_kind = node.kind()?;

        if schema_kind == kind::ARRAY {
            let item_name = array_item_name(node)?;
            // normalization looks at the resolved name, so a label is never overridden
            return Some(match self.names.get(item_name) {
                Some(canonical) => TypeDescriptor::list_of(canonical),
                None => TypeDescriptor::list_of(item_name),
            });
        }

        if schema_kind == kind::STRING {
            let values = node.allowed_values();
            if !values.is_empty() {
                let union = values
                    .iter()
                    .map(|v| quote_literal(v))
                    .collect::<Vec<_>>()
                    .join(" | ");
                return Some(TypeDescriptor::union(union, kind::STRING));
            }
        }

        if let Some(canonical) = self.names.get(schema_kind) {
            return Some(TypeDescriptor::scalar(canonical));
        }

        Some(TypeDescriptor::scalar(schema_kind))
    }
}

/// Map with the default kind table.
pub fn property_type<N: SchemaNode>(node: &N) -> Option<TypeDescriptor> {
    TypeMapper::default().map(node)
}

fn quote_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        if matches!(c, '\'' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('\'');
    out
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
