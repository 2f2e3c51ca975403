//! sheetgen turns spreadsheet entity definitions into source files.
//!
//! Each marked worksheet describes one database entity: a field block
//! bounded by its index column, plus zero or more nested enum blocks. The
//! [`schema::SchemaExtractor`] parses a sheet into an immutable
//! [`schema::Entity`], [`view::to_view_model`] flattens it into a
//! template-ready mapping, and the [`generate`] module renders and writes
//! one file per generation target.

pub mod config;
pub mod errors;
pub mod generate;
pub mod names;
pub mod schema;
pub mod sheet;
pub mod view;

pub use config::GeneratorConfig;
pub use errors::{ConfigError, SchemaError, SchemaResult};
pub use schema::{DefaultValue, Entity, EnumDef, EnumValue, Field, FieldType, SchemaExtractor};
pub use sheet::{CellValue, MemorySheet, Sheet, Workbook};
pub use view::{to_view_model, ViewModel};
