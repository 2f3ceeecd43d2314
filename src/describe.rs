use crate::ir::{ObjectDescription, PropertyDescription, PropertyDescriptor};
use crate::mapper::TypeMapper;
use crate::node::SchemaNode;
use crate::presence::requiredness;

/// Declared properties of an object node, in declaration order.
///
/// No properties is a valid, empty result.
pub fn describe_properties<N: SchemaNode>(object: &N) -> Vec<(&str, &N)> {
    object.properties()
}

pub fn property_descriptor<N: SchemaNode>(name: &str, node: &N) -> PropertyDescriptor {
    PropertyDescriptor { name: name.to_owned(), required: requiredness(node) }
}

/// Run requiredness and type mapping over every declared property.
pub fn describe_object<N: SchemaNode>(object: &N, mapper: &TypeMapper) -> ObjectDescription {
    let properties = describe_properties(object)
        .into_iter()
        .map(|(name, node)| PropertyDescription {
            name: name.to_owned(),
            required: requiredness(node),
            ty: mapper.map(node),
            description: node.description().map(str::to_owned),
        })
        .collect();
    ObjectDescription {
        label: object.label().map(str::to_owned),
        properties,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiled::CompiledSchema;
    use crate::ir::{Requiredness, TypeDescriptor};
    use crate::mapper::property_type;
    use serde_json::json;

    fn user_schema() -> CompiledSchema {
        serde_json::from_value(json!({
            "type": "object",
            "flags": { "label": "User" },
            "keys": {
                "name": { "type": "string", "flags": { "presence": "required", "description": "display name" } },
                "born": { "type": "date", "flags": { "presence": "optional" } },
                "role": { "type": "string", "allow": ["admin", "member"] },
                "pets": { "type": "array", "items": [{ "type": "object", "flags": { "label": "Pet" } }] },
                "blob": {}
            }
        }))
        .unwrap()
    }

    #[test]
    fn properties_keep_declaration_order() {
        let schema = CompiledSchema::new("object")
            .with_key("c", CompiledSchema::new("string"))
            .with_key("a", CompiledSchema::new("string"))
            .with_key("b", CompiledSchema::new("string"));
        let names: Vec<&str> = describe_properties(&schema).into_iter().map(|(k, _)| k).collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn no_keys_is_empty() {
        assert!(describe_properties(&CompiledSchema::new("object")).is_empty());
        assert!(describe_object(&CompiledSchema::default(), &TypeMapper::default()).properties.is_empty());
    }

    #[test]
    fn property_descriptor_keeps_unspecified() {
        let d = property_descriptor("x", &CompiledSchema::new("string"));
        assert_eq!(d, PropertyDescriptor { name: "x".into(), required: Requiredness::Unspecified });
    }

    #[test]
    fn describe_object_matches_components() {
        let schema = user_schema();
        let described = describe_object(&schema, &TypeMapper::default());
        assert_eq!(described.label.as_deref(), Some("User"));

        let props = describe_properties(&schema);
        assert_eq!(described.properties.len(), props.len());
        for (out, (name, node)) in described.properties.iter().zip(props) {
            assert_eq!(out.name, name);
            assert_eq!(out.required, requiredness(node));
            assert_eq!(out.ty, property_type(node));
        }
    }

    #[test]
    fn describe_object_report_shape() {
        let described = describe_object(&user_schema(), &TypeMapper::default());
        let unresolved: Vec<&str> = described.unresolved().map(|p| p.name.as_str()).collect();
        assert_eq!(unresolved, ["blob"]);
        assert_eq!(
            serde_json::to_value(&described.properties[..2]).unwrap(),
            json!([
                {
                    "name": "name",
                    "required": "required",
                    "type": { "typeName": "string", "baseTypeName": "string" },
                    "description": "display name"
                },
                {
                    "name": "born",
                    "required": "optional",
                    "type": { "typeName": "Date", "baseTypeName": "Date" }
                }
            ])
        );
        assert_eq!(
            described.properties[3].ty,
            Some(TypeDescriptor::list_of("Pet"))
        );
    }
}
