// Descriptor values handed to a code generator. No schema nodes in here.
use serde::Serialize;

/// Three-valued requiredness; `Unspecified` means the presence flag was
/// never set, which is not the same as `Optional`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Requiredness {
    Required,
    Optional,
    Unspecified,
}

impl Requiredness {
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Self::Required => Some(true),
            Self::Optional => Some(false),
            Self::Unspecified => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyDescriptor {
    pub name: String,
    pub required: Requiredness,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    /// Full display expression (`string`, `Date[]`, `'a' | 'b'`).
    pub type_name: String,
    /// Root scalar kind with array/union decoration stripped.
    pub base_type_name: String,
}

impl TypeDescriptor {
    pub fn scalar(name: impl Into<String>) -> Self {
        let name = name.into();
        Self { type_name: name.clone(), base_type_name: name }
    }

    pub fn list_of(item: impl Into<String>) -> Self {
        let item = item.into();
        Self { type_name: format!("{item}[]"), base_type_name: item }
    }

    pub fn union(type_name: String, base_type_name: impl Into<String>) -> Self {
        Self { type_name, base_type_name: base_type_name.into() }
    }
}

/// One property with everything the core derives for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyDescription {
    pub name: String,
    pub required: Requiredness,
    /// `None` when the property's type is unresolved.
    #[serde(rename = "type")]
    pub ty: Option<TypeDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ObjectDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub properties: Vec<PropertyDescription>,
}

impl ObjectDescription {
    pub fn unresolved(&self) -> impl Iterator<Item = &PropertyDescription> {
        self.properties.iter().filter(|p| p.ty.is_none())
    }
}
