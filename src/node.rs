//! The narrow read-only view of a compiled schema tree.
//!
//! Everything in `describe` and `mapper` is written against [`SchemaNode`]
//! only. A binding to a concrete schema library implements it; see
//! [`crate::compiled::CompiledSchema`] for the `describe()` JSON binding.
use std::borrow::Cow;

/// Kind tags the mapper gives meaning to. Any other kind passes through.
pub mod kind {
    pub const ARRAY: &str = "array";
    pub const STRING: &str = "string";
    pub const DATE: &str = "date";
}

/// Raw presence flag values.
pub mod presence {
    pub const REQUIRED: &str = "required";
    pub const OPTIONAL: &str = "optional";
}

pub trait SchemaNode {
    /// The rule category (`object`, `array`, `string`, `date`, …).
    fn kind(&self) -> Option<&str>;

    /// Raw `flags.presence`, not interpreted.
    fn presence(&self) -> Option<&str>;

    /// Developer-supplied display name (`flags.label`).
    fn label(&self) -> Option<&str>;

    fn description(&self) -> Option<&str> {
        None
    }

    /// Declared properties of an object node, in declaration order.
    fn properties(&self) -> Vec<(&str, &Self)>;

    /// Element node of an array node.
    fn array_item(&self) -> Option<&Self>;

    /// Allowed literal values, in declaration order, as display text.
    fn allowed_values(&self) -> Vec<Cow<'_, str>>;
}

