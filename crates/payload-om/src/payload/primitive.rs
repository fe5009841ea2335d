//! Primitive values.

use crate::annotation::Annotations;

/// The raw value of a primitive node.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PrimitiveData {
    #[default]
    Null,
    Boolean(bool),
    Byte(u8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Single(f32),
    Double(f64),
    /// Decimal kept in its textual form to avoid precision loss
    Decimal(String),
    String(String),
    Binary(Vec<u8>),
    Guid(String),
    Date(String),
    DateTimeOffset(String),
    Duration(String),
}

impl PrimitiveData {
    /// EDM type name implied by the value, or `None` for `Null`.
    pub fn edm_type_name(&self) -> Option<&'static str> {
        let name = match self {
            PrimitiveData::Null => return None,
            PrimitiveData::Boolean(_) => "Edm.Boolean",
            PrimitiveData::Byte(_) => "Edm.Byte",
            PrimitiveData::Int16(_) => "Edm.Int16",
            PrimitiveData::Int32(_) => "Edm.Int32",
            PrimitiveData::Int64(_) => "Edm.Int64",
            PrimitiveData::Single(_) => "Edm.Single",
            PrimitiveData::Double(_) => "Edm.Double",
            PrimitiveData::Decimal(_) => "Edm.Decimal",
            PrimitiveData::String(_) => "Edm.String",
            PrimitiveData::Binary(_) => "Edm.Binary",
            PrimitiveData::Guid(_) => "Edm.Guid",
            PrimitiveData::Date(_) => "Edm.Date",
            PrimitiveData::DateTimeOffset(_) => "Edm.DateTimeOffset",
            PrimitiveData::Duration(_) => "Edm.Duration",
        };
        Some(name)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PrimitiveData::Null)
    }
}

impl From<bool> for PrimitiveData {
    fn from(value: bool) -> Self {
        PrimitiveData::Boolean(value)
    }
}

impl From<u8> for PrimitiveData {
    fn from(value: u8) -> Self {
        PrimitiveData::Byte(value)
    }
}

impl From<i16> for PrimitiveData {
    fn from(value: i16) -> Self {
        PrimitiveData::Int16(value)
    }
}

impl From<i32> for PrimitiveData {
    fn from(value: i32) -> Self {
        PrimitiveData::Int32(value)
    }
}

impl From<i64> for PrimitiveData {
    fn from(value: i64) -> Self {
        PrimitiveData::Int64(value)
    }
}

impl From<f32> for PrimitiveData {
    fn from(value: f32) -> Self {
        PrimitiveData::Single(value)
    }
}

impl From<f64> for PrimitiveData {
    fn from(value: f64) -> Self {
        PrimitiveData::Double(value)
    }
}

impl From<&str> for PrimitiveData {
    fn from(value: &str) -> Self {
        PrimitiveData::String(value.to_string())
    }
}

impl From<String> for PrimitiveData {
    fn from(value: String) -> Self {
        PrimitiveData::String(value)
    }
}

impl From<Vec<u8>> for PrimitiveData {
    fn from(value: Vec<u8>) -> Self {
        PrimitiveData::Binary(value)
    }
}

/// A primitive node.
///
/// `full_type_name` is absent when the type is left to be inferred from
/// context, which is also how formats that omit type names present it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PrimitiveValue {
    pub full_type_name: Option<String>,
    pub value: PrimitiveData,
    pub annotations: Annotations,
}

impl PrimitiveValue {
    /// Create an untyped primitive
    pub fn new(value: impl Into<PrimitiveData>) -> Self {
        PrimitiveValue {
            full_type_name: None,
            value: value.into(),
            annotations: Annotations::new(),
        }
    }

    /// Create a primitive with an explicit full type name
    pub fn typed(value: impl Into<PrimitiveData>, full_type_name: impl Into<String>) -> Self {
        PrimitiveValue {
            full_type_name: Some(full_type_name.into()),
            value: value.into(),
            annotations: Annotations::new(),
        }
    }

    /// Create an untyped null
    pub fn null() -> Self {
        PrimitiveValue::default()
    }

    pub fn with_type_name(mut self, full_type_name: impl Into<String>) -> Self {
        self.full_type_name = Some(full_type_name.into());
        self
    }

    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    /// The declared type name, falling back to the one implied by the value
    pub fn effective_type_name(&self) -> Option<&str> {
        self.full_type_name
            .as_deref()
            .or_else(|| self.value.edm_type_name())
    }
}
