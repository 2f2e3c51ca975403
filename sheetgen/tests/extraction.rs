mod common;

use common::{sample_config, sample_sheet};
use sheetgen::{
    CellValue, DefaultValue, FieldType, MemorySheet, SchemaError, SchemaExtractor,
};

#[test]
fn fields_come_back_in_strictly_increasing_index_order() {
    let config = sample_config();
    let entity = SchemaExtractor::new(&config)
        .build_entity(&sample_sheet())
        .unwrap();

    let indices: Vec<i64> = entity.fields.iter().map(|f| f.index).collect();
    assert_eq!(indices, vec![1, 2, 3, 4]);

    let names: Vec<&str> = entity.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Title", "ContactEmail", "Status", "CreatedAt"]);
}

#[test]
fn entity_name_gets_the_configured_suffix() {
    let mut config = sample_config();
    config.generated.entity_suffix = "Entity".to_string();

    let entity = SchemaExtractor::new(&config)
        .build_entity(&sample_sheet())
        .unwrap();
    assert_eq!(entity.name, "ProjectEntity");
    assert_eq!(entity.origin_name, "Project");
}

#[test]
fn nullable_is_the_negation_of_the_marker() {
    let config = sample_config();
    let entity = SchemaExtractor::new(&config)
        .build_entity(&sample_sheet())
        .unwrap();

    // Rows with a mark in the nullable column are NOT nullable.
    assert!(!entity.fields[0].is_nullable);
    assert!(entity.fields[1].is_nullable);
    assert!(!entity.fields[2].is_nullable);
}

#[test]
fn matching_enum_name_overrides_the_type_cell() {
    let config = sample_config();
    let entity = SchemaExtractor::new(&config)
        .build_entity(&sample_sheet())
        .unwrap();

    // The type cell says Varchar, but the "status" enum wins.
    let status = &entity.fields[2];
    assert_eq!(status.field_type, FieldType::Enum);
    let def = status.enum_ref.as_ref().unwrap();
    assert_eq!(def.name, "status");
    assert_eq!(def.display_name, "ProjectStatus");
}

#[test]
fn enum_scan_skips_blank_descriptions_but_keeps_scanning() {
    let config = sample_config();
    let entity = SchemaExtractor::new(&config)
        .build_entity(&sample_sheet())
        .unwrap();

    assert_eq!(entity.enums.len(), 1);
    let values: Vec<(&str, i64)> = entity.enums[0]
        .values
        .iter()
        .map(|v| (v.name.as_str(), v.value))
        .collect();
    assert_eq!(values, vec![("active", 1), ("closed", 3)]);
}

#[test]
fn enum_header_without_value_rows_is_still_kept() {
    let config = sample_config();
    let mut sheet = sample_sheet();
    // Second header far below the first block, with nothing after it.
    sheet.text(20, 11, "Priority");

    let entity = SchemaExtractor::new(&config).build_entity(&sheet).unwrap();
    assert_eq!(entity.enums.len(), 2);
    assert_eq!(entity.enums[1].name, "priority");
    assert!(entity.enums[1].values.is_empty());
}

#[test]
fn missing_index_one_row_fails_without_a_partial_entity() {
    let config = sample_config();
    let mut sheet = MemorySheet::new("Broken");
    sheet.text(1, 1, "HOME");
    sheet.text(2, 2, "Broken");
    // Field rows exist but none starts the block at index 1.
    sheet.number(4, 1, 2.0);
    sheet.text(4, 2, "Title");
    sheet.text(4, 8, "Varchar");

    let result = SchemaExtractor::new(&config).build_entity(&sheet);
    assert!(matches!(result, Err(SchemaError::FirstRowNotFound)));
}

#[test]
fn unknown_type_literal_is_an_error() {
    let config = sample_config();
    let mut sheet = sample_sheet();
    sheet.text(7, 8, "Blob");

    let result = SchemaExtractor::new(&config).build_entity(&sheet);
    assert!(matches!(result, Err(SchemaError::UnknownType(t)) if t == "Blob"));
}

#[test]
fn unsupported_default_value_cell_is_an_error() {
    let config = sample_config();
    let mut sheet = sample_sheet();
    sheet.set(5, 7, CellValue::Other);

    let result = SchemaExtractor::new(&config).build_entity(&sheet);
    assert!(matches!(
        result,
        Err(SchemaError::CellType { what: "default value", row: 5, .. })
    ));
}

#[test]
fn typed_default_values_keep_their_cell_type() {
    let config = sample_config();
    let mut sheet = sample_sheet();
    sheet.number(5, 7, 0.0);
    sheet.set(7, 7, CellValue::Bool(true));

    let entity = SchemaExtractor::new(&config).build_entity(&sheet).unwrap();
    assert_eq!(
        entity.fields[0].default_value,
        DefaultValue::Text("Untitled".to_string())
    );
    assert_eq!(entity.fields[1].default_value, DefaultValue::Number(0.0));
    assert_eq!(entity.fields[3].default_value, DefaultValue::Bool(true));
}

#[test]
fn text_in_the_length_cell_means_no_length() {
    let config = sample_config();
    let mut sheet = sample_sheet();
    sheet.text(5, 9, "long");

    let entity = SchemaExtractor::new(&config).build_entity(&sheet).unwrap();
    assert_eq!(entity.fields[0].length, Some(50.0));
    assert_eq!(entity.fields[1].length, None);
}

#[test]
fn unconfigured_column_is_rejected_before_any_scan() {
    let mut config = sample_config();
    config.source.columns.enum_number = -1;

    let result = SchemaExtractor::new(&config).build_entity(&sample_sheet());
    assert!(matches!(
        result,
        Err(SchemaError::ColumnUnconfigured("enum_number"))
    ));
}
