//! Shared fixtures: a column map and a worksheet shaped like the real
//! source workbooks (marker cell, entity-name cell, field block bounded by
//! the index column, one enum block with the two reserved sub-header rows).

use sheetgen::{GeneratorConfig, MemorySheet};

pub fn sample_config() -> GeneratorConfig {
    GeneratorConfig::parse(
        r#"
        [source]
        entity_name = { row = 2, column = 2 }

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
        "#,
    )
    .expect("fixture config parses")
}

/// A sheet describing a "Project" entity with four fields and one enum.
///
/// Field block starts at row 4 (index cell = 1) and ends at row 8 (blank
/// index cell). The enum header sits at row 10; its value rows start at
/// row 13, and the row-14 value has a blank description.
pub fn sample_sheet() -> MemorySheet {
    let mut sheet = MemorySheet::new("Project Db");
    sheet.text(1, 1, "HOME");
    sheet.text(2, 2, "Project");

    sheet.number(4, 1, 1.0);
    sheet.text(4, 2, "Title");
    sheet.text(4, 3, "Project title");
    sheet.text(4, 6, "x");
    sheet.text(4, 7, "Untitled");
    sheet.text(4, 8, "Varchar");
    sheet.number(4, 9, 50.0);

    sheet.number(5, 1, 2.0);
    sheet.text(5, 2, "ContactEmail");
    sheet.text(5, 8, "Varchar");
    sheet.number(5, 9, 100.0);

    sheet.number(6, 1, 3.0);
    sheet.text(6, 2, "Status");
    sheet.text(6, 6, "x");
    sheet.text(6, 8, "Varchar");

    sheet.number(7, 1, 4.0);
    sheet.text(7, 2, "CreatedAt");
    sheet.text(7, 6, "x");
    sheet.text(7, 8, "Timestamp");

    sheet.text(10, 11, "Status");
    sheet.number(13, 11, 1.0);
    sheet.number(13, 12, 1.0);
    sheet.text(13, 13, "Active");
    sheet.number(14, 11, 2.0);
    sheet.number(14, 12, 2.0);
    sheet.number(15, 11, 3.0);
    sheet.number(15, 12, 3.0);
    sheet.text(15, 13, "Closed");

    sheet
}
