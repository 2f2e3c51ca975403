//! Schema model extracted from one worksheet.

mod extract;

pub use extract::SchemaExtractor;

use crate::errors::SchemaError;

/// Closed set of source column types understood by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Number,
    Int,
    Decimal,
    Varchar,
    Timestamp,
    DateTime,
    Enum,
    Boolean,
}

impl FieldType {
    /// Case-insensitive parse of a type cell literal.
    pub fn parse(raw: &str) -> Result<Self, SchemaError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "number" => Ok(Self::Number),
            "int" => Ok(Self::Int),
            "decimal" => Ok(Self::Decimal),
            "varchar" => Ok(Self::Varchar),
            "timestamp" => Ok(Self::Timestamp),
            "datetime" => Ok(Self::DateTime),
            "enum" => Ok(Self::Enum),
            "boolean" => Ok(Self::Boolean),
            _ => Err(SchemaError::UnknownType(raw.trim().to_string())),
        }
    }

    /// Scalar types yield mock values as plain expressions; temporal and enum
    /// types are declared as inferred-type locals instead. Downstream
    /// templates rely on the distinction.
    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            Self::Varchar | Self::Number | Self::Boolean | Self::Int | Self::Decimal
        )
    }

    fn primitive_name(self) -> &'static str {
        match self {
            Self::Varchar => "string",
            Self::Number | Self::Int => "int",
            Self::Decimal => "double",
            Self::Timestamp => "DateTimeOffset",
            Self::DateTime => "DateTime",
            Self::Boolean => "bool",
            // Enum fields resolve their type through the bound enum; this is
            // only reachable when the enum invariant is broken.
            Self::Enum => "object",
        }
    }
}

/// Default-value cell content, tagged by the source cell's runtime type.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl DefaultValue {
    /// Renders the value as a source literal: quoted unless empty, unless
    /// numeric or boolean.
    pub fn render(&self) -> String {
        match self {
            Self::Empty => "string.Empty".to_string(),
            Self::Text(s) if s.is_empty() => "string.Empty".to_string(),
            Self::Text(s) => format!("\"{s}\""),
            Self::Number(n) => render_number(*n),
            Self::Bool(b) => b.to_string(),
        }
    }
}

/// Formats a cell number without a trailing `.0` for whole values.
pub(crate) fn render_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// One value of an entity-scoped enum.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    pub name: String,
    pub value: i64,
}

/// A named, closed value set scoped to one entity.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDef {
    pub name: String,
    /// Generated type name: the entity name combined with the enum name,
    /// which scopes the enum uniquely per entity.
    pub display_name: String,
    /// Values in sheet-row order.
    pub values: Vec<EnumValue>,
}

/// One row of the entity's attribute block.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// 1-based ordinal from the sheet's index column.
    pub index: i64,
    pub name: String,
    pub description: Option<String>,
    pub is_primary_key: bool,
    pub is_lookup: bool,
    /// True when the nullable-marker cell is blank: a mark in that column
    /// means "not nullable".
    pub is_nullable: bool,
    pub default_value: DefaultValue,
    pub field_type: FieldType,
    /// Present only when the length cell holds a number.
    pub length: Option<f64>,
    /// Set iff `field_type` is [`FieldType::Enum`].
    pub enum_ref: Option<EnumDef>,
}

impl Field {
    /// Target-language type name for this field.
    pub fn type_name(&self) -> String {
        match (self.field_type, &self.enum_ref) {
            (FieldType::Enum, Some(def)) => def.display_name.clone(),
            (other, _) => other.primitive_name().to_string(),
        }
    }
}

/// The schema unit generated per sheet: constructed once, immutable, never
/// merged with another sheet's data.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Derived name plus the configured suffix.
    pub name: String,
    /// Derived name without the suffix, used for pluralization and labels.
    pub origin_name: String,
    /// Fields in sheet-row order, starting at the index-1 row.
    pub fields: Vec<Field>,
    /// Enums in the order discovered scanning downward.
    pub enums: Vec<EnumDef>,
}
