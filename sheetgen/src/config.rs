use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::ConfigError;

/// Unconfigured column sentinel. The extractor refuses to read through a
/// column left at this value.
pub const UNCONFIGURED: i32 = -1;

/// Immutable tool configuration, loaded once at startup from `sheetgen.toml`
/// and passed by reference into the extractor and view builder.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub generated: GeneratedConfig,
}

/// Where the workbook lives and how its sheets are laid out.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceConfig {
    /// Path to the input workbook.
    #[serde(default)]
    pub path: PathBuf,

    /// Case-insensitive substrings a sheet name must contain to be considered.
    /// Empty means every marked sheet is considered.
    #[serde(default)]
    pub include_keywords: Vec<String>,

    /// 1-based column indices into each sheet.
    #[serde(default)]
    pub columns: ColumnMap,

    /// Cell holding the entity name.
    #[serde(default)]
    pub entity_name: CellRef,
}

/// 1-based column indices of the source layout. `-1` means "not configured".
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    pub index: i32,
    pub name: i32,
    pub description: i32,
    pub primary_key: i32,
    pub lookup: i32,
    pub nullable: i32,
    pub default_value: i32,
    #[serde(rename = "type")]
    pub field_type: i32,
    pub length: i32,
    pub enum_number: i32,
    pub enum_value: i32,
    pub enum_description: i32,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            index: UNCONFIGURED,
            name: UNCONFIGURED,
            description: UNCONFIGURED,
            primary_key: UNCONFIGURED,
            lookup: UNCONFIGURED,
            nullable: UNCONFIGURED,
            default_value: UNCONFIGURED,
            field_type: UNCONFIGURED,
            length: UNCONFIGURED,
            enum_number: UNCONFIGURED,
            enum_value: UNCONFIGURED,
            enum_description: UNCONFIGURED,
        }
    }
}

/// A (row, column) cell coordinate, 1-based.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CellRef {
    pub row: i32,
    pub column: i32,
}

impl Default for CellRef {
    fn default() -> Self {
        Self {
            row: UNCONFIGURED,
            column: UNCONFIGURED,
        }
    }
}

/// Output tree, naming, and per-view field policy.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratedConfig {
    /// Root of the generated directory tree.
    pub path: PathBuf,

    /// Suffix appended to the derived entity name (e.g. "Entity").
    pub entity_suffix: String,

    /// Identifier type used by id-based queries.
    pub id_type: String,

    pub entity_namespace: String,
    pub dto_namespace: String,
    pub cqrs_namespace: String,
    pub validation_namespace: String,

    /// Field names excluded from the entity view.
    pub skipped_entity_fields: Vec<String>,

    /// Field names excluded from the DTO view.
    pub skipped_dto_fields: Vec<String>,

    /// Field renames applied in the DTO view.
    pub dto_field_renames: BTreeMap<String, String>,
}

impl Default for GeneratedConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("generated"),
            entity_suffix: String::new(),
            id_type: "int".to_string(),
            entity_namespace: "Domain.Entities".to_string(),
            dto_namespace: "Application.Dtos".to_string(),
            cqrs_namespace: "Application.Cqrs".to_string(),
            validation_namespace: "Application.Validation".to_string(),
            skipped_entity_fields: Vec::new(),
            skipped_dto_fields: Vec::new(),
            dto_field_renames: BTreeMap::new(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_columns_default_to_sentinel() {
        let config = GeneratorConfig::parse("").unwrap();
        assert_eq!(config.source.columns.index, UNCONFIGURED);
        assert_eq!(config.source.columns.enum_value, UNCONFIGURED);
        assert_eq!(config.source.entity_name.row, UNCONFIGURED);
        assert!(config.generated.skipped_entity_fields.is_empty());
    }

    #[test]
    fn parses_full_config() {
        let config = GeneratorConfig::parse(
            r#"
            [source]
            path = "entities.xlsx"
            include_keywords = ["db"]
            entity_name = { row = 2, column = 3 }

            [source.columns]
            index = 1
            name = 2
            description = 3
            primary_key = 4
            lookup = 5
            nullable = 6
            default_value = 7
            type = 8
            length = 9
            enum_number = 11
            enum_value = 12
            enum_description = 13

            [generated]
            path = "out"
            entity_suffix = "Entity"
            skipped_dto_fields = ["CreatedAt"]

            [generated.dto_field_renames]
            Id = "Identifier"
            "#,
        )
        .unwrap();

        assert_eq!(config.source.columns.field_type, 8);
        assert_eq!(config.source.entity_name.row, 2);
        assert_eq!(config.generated.entity_suffix, "Entity");
        assert_eq!(
            config.generated.dto_field_renames.get("Id").map(String::as_str),
            Some("Identifier")
        );
    }

    #[test]
    fn malformed_value_is_a_parse_error() {
        let result = GeneratorConfig::parse("[source.columns]\nindex = \"first\"\n");
        assert!(result.is_err());
    }
}
