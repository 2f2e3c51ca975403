//! Schema extraction from a single worksheet.
//!
//! The layout has no explicit row counts. The field block is bounded by its
//! own index column: it starts at the row whose index cell is the number 1
//! and ends at the first blank index cell. Enum blocks are found by scanning
//! for a header row (text in the enum-number column, blank enum-value
//! column); their value rows start a fixed two reserved rows below the
//! header and run until the enum-number column goes blank.

use log::debug;

use crate::config::GeneratorConfig;
use crate::errors::{SchemaError, SchemaResult};
use crate::names;
use crate::sheet::{CellValue, Sheet};

use super::{DefaultValue, Entity, EnumDef, EnumValue, Field, FieldType};

/// Row offset from an enum header row to its first value row. The two rows
/// in between are reserved sub-header rows that never carry data.
const ENUM_VALUE_OFFSET: u32 = 3;

/// Row holding the sheet marker. Scans start looking below it.
const HEADER_ROW: u32 = 1;

/// Enum-block scan states.
enum ScanState {
    SeekingHeader,
    ReadingValues,
}

/// Builds [`Entity`] values from worksheets, using the column map resolved
/// from configuration.
pub struct SchemaExtractor<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> SchemaExtractor<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Extracts one entity from one worksheet.
    ///
    /// Fails without producing a partial entity when the sheet violates the
    /// layout (no index-1 row, unsupported cell kinds, unknown type
    /// literals).
    pub fn build_entity(&self, sheet: &dyn Sheet) -> SchemaResult<Entity> {
        let origin_name = self.entity_name(sheet)?;
        let enums = self.scan_enums(sheet, &origin_name)?;
        let fields = self.scan_fields(sheet, &enums)?;
        debug!(
            "sheet '{}': entity '{}' with {} fields, {} enums",
            sheet.name(),
            origin_name,
            fields.len(),
            enums.len()
        );

        Ok(Entity {
            name: format!("{origin_name}{}", self.config.generated.entity_suffix),
            origin_name,
            fields,
            enums,
        })
    }

    fn entity_name(&self, sheet: &dyn Sheet) -> SchemaResult<String> {
        let pos = &self.config.source.entity_name;
        let row = column(pos.row, "entity_name.row")?;
        let col = column(pos.column, "entity_name.column")?;
        match sheet.cell(row, col) {
            CellValue::Text(raw) => Ok(names::entity_name(&raw)),
            _ => Err(SchemaError::CellType {
                what: "entity name",
                row,
                col,
            }),
        }
    }

    /// Scans the field block: starts at the index-1 row, reads one field per
    /// row, stops at the first blank index cell.
    fn scan_fields(&self, sheet: &dyn Sheet, enums: &[EnumDef]) -> SchemaResult<Vec<Field>> {
        let cols = FieldColumns::resolve(self.config)?;

        let mut row = self.find_first_row(sheet, cols.index)?;
        let mut fields = Vec::new();

        while !sheet.cell(row, cols.index).is_blank() {
            fields.push(read_field(sheet, row, &cols, enums)?);
            row += 1;
        }

        Ok(fields)
    }

    /// Finds the first used row after the header row whose index cell is the
    /// number 1.
    fn find_first_row(&self, sheet: &dyn Sheet, c_index: u32) -> SchemaResult<u32> {
        for row in (HEADER_ROW + 1)..=sheet.last_row() {
            if let CellValue::Number(n) = sheet.cell(row, c_index) {
                if n as i64 == 1 {
                    return Ok(row);
                }
            }
        }
        Err(SchemaError::FirstRowNotFound)
    }

    /// Scans all enum blocks in the sheet, in discovery order.
    ///
    /// A header row has text in the enum-number column and a blank
    /// enum-value column. Value rows start [`ENUM_VALUE_OFFSET`] rows below
    /// the header and run while the enum-number column stays non-blank; rows
    /// with a blank description are consumed without contributing a value.
    fn scan_enums(&self, sheet: &dyn Sheet, entity_name: &str) -> SchemaResult<Vec<EnumDef>> {
        let cols = &self.config.source.columns;
        let c_number = column(cols.enum_number, "enum_number")?;
        let c_value = column(cols.enum_value, "enum_value")?;
        let c_description = column(cols.enum_description, "enum_description")?;

        let mut enums = Vec::new();
        let mut current: Option<EnumDef> = None;
        let mut state = ScanState::SeekingHeader;
        let mut row = HEADER_ROW + 1;
        let last = sheet.last_row();

        while row <= last {
            match state {
                ScanState::SeekingHeader => {
                    let number = sheet.cell(row, c_number);
                    if number.is_text() && sheet.cell(row, c_value).is_blank() {
                        let raw = number.as_text().unwrap_or_default();
                        let name = names::member_identifier(raw);
                        let display_name =
                            format!("{entity_name}{}", names::upper_first(&name));
                        current = Some(EnumDef {
                            name,
                            display_name,
                            values: Vec::new(),
                        });
                        row += ENUM_VALUE_OFFSET;
                        state = ScanState::ReadingValues;
                    } else {
                        row += 1;
                    }
                }
                ScanState::ReadingValues => {
                    if sheet.cell(row, c_number).is_blank() {
                        if let Some(def) = current.take() {
                            enums.push(def);
                        }
                        // The header search resumes at the row after the
                        // last consumed one; this row is blank and cannot
                        // itself be a header.
                        row += 1;
                        state = ScanState::SeekingHeader;
                        continue;
                    }

                    match sheet.cell(row, c_description) {
                        CellValue::Blank => {
                            // Consumed, contributes nothing.
                        }
                        CellValue::Text(desc) => {
                            let value = match sheet.cell(row, c_value) {
                                CellValue::Number(n) => n as i64,
                                _ => {
                                    return Err(SchemaError::CellType {
                                        what: "enum value",
                                        row,
                                        col: c_value,
                                    });
                                }
                            };
                            if let Some(def) = current.as_mut() {
                                def.values.push(EnumValue {
                                    name: names::member_identifier(&desc),
                                    value,
                                });
                            }
                        }
                        _ => {
                            return Err(SchemaError::CellType {
                                what: "enum description",
                                row,
                                col: c_description,
                            });
                        }
                    }
                    row += 1;
                }
            }
        }

        // A block can run into the end of the used range; an enum with zero
        // values is still kept.
        if let Some(def) = current.take() {
            enums.push(def);
        }

        Ok(enums)
    }
}

/// Field-block column indices, resolved once per scan.
struct FieldColumns {
    index: u32,
    name: u32,
    description: u32,
    primary_key: u32,
    lookup: u32,
    nullable: u32,
    default_value: u32,
    field_type: u32,
    length: u32,
}

impl FieldColumns {
    fn resolve(config: &GeneratorConfig) -> SchemaResult<Self> {
        let cols = &config.source.columns;
        Ok(Self {
            index: column(cols.index, "index")?,
            name: column(cols.name, "name")?,
            description: column(cols.description, "description")?,
            primary_key: column(cols.primary_key, "primary_key")?,
            lookup: column(cols.lookup, "lookup")?,
            nullable: column(cols.nullable, "nullable")?,
            default_value: column(cols.default_value, "default_value")?,
            field_type: column(cols.field_type, "type")?,
            length: column(cols.length, "length")?,
        })
    }
}

/// Reads one field row. The index cell is known to be non-blank here.
fn read_field(
    sheet: &dyn Sheet,
    row: u32,
    cols: &FieldColumns,
    enums: &[EnumDef],
) -> SchemaResult<Field> {
    let index = match sheet.cell(row, cols.index) {
        CellValue::Number(n) => n as i64,
        _ => {
            return Err(SchemaError::CellType {
                what: "index",
                row,
                col: cols.index,
            });
        }
    };

    let raw_name = match sheet.cell(row, cols.name) {
        CellValue::Text(s) => s,
        _ => {
            return Err(SchemaError::CellType {
                what: "name",
                row,
                col: cols.name,
            });
        }
    };

    let description = match sheet.cell(row, cols.description) {
        CellValue::Text(s) => Some(s),
        CellValue::Blank => None,
        _ => {
            return Err(SchemaError::CellType {
                what: "description",
                row,
                col: cols.description,
            });
        }
    };

    // Marker columns: any value at all counts, content is irrelevant.
    let is_primary_key = !sheet.cell(row, cols.primary_key).is_blank();
    let is_lookup = !sheet.cell(row, cols.lookup).is_blank();
    // Inverted convention: a mark in the nullable column means NOT nullable.
    let is_nullable = sheet.cell(row, cols.nullable).is_blank();

    let default_value = match sheet.cell(row, cols.default_value) {
        CellValue::Blank => DefaultValue::Empty,
        CellValue::Bool(b) => DefaultValue::Bool(b),
        CellValue::Number(n) => DefaultValue::Number(n),
        CellValue::Text(s) => DefaultValue::Text(s),
        CellValue::Other => {
            return Err(SchemaError::CellType {
                what: "default value",
                row,
                col: cols.default_value,
            });
        }
    };

    // An enum whose name matches the raw field name wins over whatever the
    // type cell says.
    let enum_ref = enums
        .iter()
        .find(|e| e.name.eq_ignore_ascii_case(raw_name.trim()))
        .cloned();
    let field_type = match &enum_ref {
        Some(_) => FieldType::Enum,
        None => match sheet.cell(row, cols.field_type) {
            CellValue::Text(s) => FieldType::parse(&s)?,
            _ => {
                return Err(SchemaError::CellType {
                    what: "type",
                    row,
                    col: cols.field_type,
                });
            }
        },
    };

    let length = sheet.cell(row, cols.length).as_number();

    Ok(Field {
        index,
        name: names::field_identifier(&raw_name),
        description,
        is_primary_key,
        is_lookup,
        is_nullable,
        default_value,
        field_type,
        length,
        enum_ref,
    })
}

/// Resolves a configured 1-based column index, rejecting the unconfigured
/// sentinel and anything non-positive.
fn column(value: i32, name: &'static str) -> SchemaResult<u32> {
    u32::try_from(value)
        .ok()
        .filter(|c| *c > 0)
        .ok_or(SchemaError::ColumnUnconfigured(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_rejects_the_unconfigured_sentinel() {
        assert!(column(-1, "index").is_err());
        assert!(column(0, "index").is_err());
        assert_eq!(column(4, "index").unwrap(), 4);
    }
}
