//! Compiled validation schema → type descriptors for code generation.
//!
//! Given an object schema node, [`describe_properties`] lists its declared
//! properties in order, [`requiredness`] reads each property's presence
//! flag, and [`property_type`] maps its node to a [`TypeDescriptor`]
//! (display expression + base scalar kind). Unresolvable nodes map to
//! `None`; rendering and recovery policy belong to the caller.
pub mod node;
pub mod compiled;
pub mod ir;
pub mod presence;
pub mod mapper;
pub mod describe;
pub mod error;
pub mod path_de;
pub mod load;

pub use compiled::CompiledSchema;
pub use describe::{describe_object, describe_properties, property_descriptor};
pub use error::LoadError;
pub use ir::{ObjectDescription, PropertyDescription, PropertyDescriptor, Requiredness, TypeDescriptor};
pub use mapper::{array_item_name, property_type, KindNames, TypeMapper};
pub use node::SchemaNode;
pub use presence::requiredness;
