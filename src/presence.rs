use crate::ir::Requiredness;
use crate::node::{presence, SchemaNode};

/// `.required()` / `.optional()` / neither.
///
/// Any presence value other than the two recognised ones (for example
/// `forbidden`) is `Unspecified`; the generator decides what that means.
pub fn requiredness<N: SchemaNode>(node: &N) -> Requiredness {
    match node.presence() {
        Some(presence::REQUIRED) => Requiredness::Required,
        Some(presence::OPTIONAL) => Requiredness::Optional,
        _ => Requiredness::Unspecified,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiled::CompiledSchema;

    #[test]
    fn presence_maps_to_three_states() {
        let cases = [
            (Some("required"), Requiredness::Required),
            (Some("optional"), Requiredness::Optional),
            (Some("forbidden"), Requiredness::Unspecified),
            (None, Requiredness::Unspecified),
        ];
        for (flag, expected) in cases {
            let mut node = CompiledSchema::new("string");
            node.flags.presence = flag.map(str::to_owned);
            assert_eq!(requiredness(&node), expected, "presence {flag:?}");
        }
    }

    #[test]
    fn presence_is_case_sensitive() {
        let node = CompiledSchema::new("string").with_presence("Required");
        assert_eq!(requiredness(&node), Requiredness::Unspecified);
    }
}
