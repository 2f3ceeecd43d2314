use std::path::Path;
use std::sync::Arc;

use schema_typegen::{
    describe_object, describe_properties, load::load_schema, property_type, requiredness,
    CompiledSchema, Requiredness, SchemaNode, TypeDescriptor, TypeMapper,
};

fn order() -> CompiledSchema {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/order.json");
    load_schema(&path, None).unwrap()
}

fn ty(type_name: &str, base_type_name: &str) -> Option<TypeDescriptor> {
    Some(TypeDescriptor {
        type_name: type_name.to_owned(),
        base_type_name: base_type_name.to_owned(),
    })
}

#[test]
fn order_fixture_describes_every_property() {
    let schema = order();
    let described = describe_object(&schema, &TypeMapper::default());
    assert_eq!(described.label.as_deref(), Some("Order"));

    let rows: Vec<(&str, Requiredness, Option<TypeDescriptor>)> = described
        .properties
        .iter()
        .map(|p| (p.name.as_str(), p.required, p.ty.clone()))
        .collect();

    assert_eq!(rows, vec![
        ("id", Requiredness::Required, ty("string", "string")),
        ("status", Requiredness::Required, ty("'pending' | 'paid' | 'shipped'", "string")),
        ("placedAt", Requiredness::Optional, ty("Date", "Date")),
        ("deliveryWindows", Requiredness::Unspecified, ty("Date[]", "Date")),
        ("lines", Requiredness::Required, ty("OrderLine[]", "OrderLine")),
        ("gift", Requiredness::Unspecified, ty("boolean", "boolean")),
        ("notes", Requiredness::Unspecified, None),
        ("meta", Requiredness::Optional, None),
    ]);
    assert_eq!(described.properties[4].description.as_deref(), Some("ordered line items"));
}

#[test]
fn nested_element_object_can_be_described_too() {
    let schema = order();
    let props = describe_properties(&schema);
    let (_, lines) = props.iter().find(|(k, _)| *k == "lines").unwrap();
    let line = lines.array_item().unwrap();

    let nested = describe_object(line, &TypeMapper::default());
    assert_eq!(nested.label.as_deref(), Some("OrderLine"));
    let names: Vec<&str> = nested.properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["sku", "quantity"]);
}

#[test]
fn shared_tree_maps_identically_across_threads() {
    let schema = Arc::new(order());
    let expected: Vec<_> = describe_properties(&*schema)
        .into_iter()
        .map(|(_, node)| (requiredness(node), property_type(node)))
        .collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let schema = Arc::clone(&schema);
            std::thread::spawn(move || {
                describe_properties(&*schema)
                    .into_iter()
                    .map(|(_, node)| (requiredness(node), property_type(node)))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
