use crate::node::SchemaNode;

/// Display name of an array's element: its label, else its raw kind.
///
/// The label wins even when the element is structurally richer (an object,
/// an enumerated string), so authors can name such elements themselves.
/// An empty label still wins, and an empty name is unresolved.
pub fn array_item_name<N: SchemaNode>(array: &N) -> Option<&str> {
    let item = array.array_item()?;
    item.label()
        .or_else(|| item.kind())
        .filter(|name| !name.is_empty())
}
