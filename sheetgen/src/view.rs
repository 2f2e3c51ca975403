//! Projection of an [`Entity`] into a flat, template-ready view model.
//!
//! The mapping is order-preserving (`serde_json` maps keep insertion order)
//! and fully derived: calling [`to_view_model`] twice on the same entity
//! yields identical output.

use serde_json::{json, Map, Value};

use crate::config::GeneratorConfig;
use crate::names;
use crate::schema::{render_number, Entity, Field, FieldType};

/// Flat mapping handed, unmodified per call, to every generation target.
pub type ViewModel = Map<String, Value>;

/// Historically the DTO projection flipped the `IsRequired`/`HasDefaultValue`
/// polarity relative to the entity projection. That flip looks accidental;
/// the entity polarity (`IsRequired` = not nullable) is canonical. Flip this
/// constant only if a downstream template demonstrably needs the inverse.
const DTO_FOLLOWS_ENTITY_POLARITY: bool = true;

const MEMBER_INDENT: &str = "        ";
const RULE_INDENT: &str = "            ";
const INITIALIZER_INDENT: &str = "            ";

/// Builds the view model for one entity. Pure: no side effects, no hidden
/// state.
pub fn to_view_model(entity: &Entity, config: &GeneratorConfig) -> ViewModel {
    let generated = &config.generated;

    let entity_fields: Vec<&Field> = entity
        .fields
        .iter()
        .filter(|f| !generated.skipped_entity_fields.contains(&f.name))
        .collect();
    let dto_fields: Vec<&Field> = entity
        .fields
        .iter()
        .filter(|f| !generated.skipped_dto_fields.contains(&f.name))
        .collect();

    let mut view = Map::new();
    view.insert("Name".to_string(), json!(entity.name));
    view.insert("OriginName".to_string(), json!(entity.origin_name));
    view.insert("VarName".to_string(), json!(names::var_case(&entity.name)));
    view.insert(
        "NamePlural".to_string(),
        json!(names::pluralize(&entity.origin_name)),
    );

    view.insert(
        "EntityFields".to_string(),
        Value::Array(
            entity_fields
                .iter()
                .map(|f| field_record(f, &f.name, true))
                .collect(),
        ),
    );
    view.insert(
        "DtoFields".to_string(),
        Value::Array(
            dto_fields
                .iter()
                .map(|f| {
                    let name = generated
                        .dto_field_renames
                        .get(&f.name)
                        .map(String::as_str)
                        .unwrap_or(&f.name);
                    field_record(f, name, DTO_FOLLOWS_ENTITY_POLARITY)
                })
                .collect(),
        ),
    );
    view.insert(
        "Enums".to_string(),
        Value::Array(entity.enums.iter().map(enum_record).collect()),
    );

    view.insert(
        "Arguments".to_string(),
        json!(joined(&entity_fields, ", ", |f| {
            format!(
                "{}{} {}",
                f.type_name(),
                if f.is_nullable { "?" } else { "" },
                names::var_case(&f.name)
            )
        })),
    );
    view.insert(
        "NullableArguments".to_string(),
        json!(joined(&entity_fields, ", ", |f| {
            format!("{}? {}", f.type_name(), names::var_case(&f.name))
        })),
    );
    view.insert(
        "Params".to_string(),
        json!(joined(&entity_fields, ", ", |f| format!("request.{}", f.name))),
    );
    view.insert(
        "Assignments".to_string(),
        json!(joined(&entity_fields, "\n", |f| {
            format!("{MEMBER_INDENT}{} = {};", f.name, names::var_case(&f.name))
        })),
    );
    view.insert(
        "Initializers".to_string(),
        json!(joined(&entity_fields, "\n", |f| {
            format!(
                "{INITIALIZER_INDENT}{} = {},",
                f.name,
                names::var_case(&f.name)
            )
        })),
    );
    view.insert(
        "ValidationRules".to_string(),
        json!(entity_fields
            .iter()
            .filter_map(|f| validation_snippet(f))
            .collect::<Vec<_>>()
            .join("\n")),
    );

    view
}

fn joined(fields: &[&Field], separator: &str, render: impl Fn(&Field) -> String) -> String {
    fields
        .iter()
        .map(|f| render(f))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Projects one field into a record of raw attributes and derived values.
fn field_record(field: &Field, name: &str, entity_polarity: bool) -> Value {
    let nullable_for_polarity = if entity_polarity {
        !field.is_nullable
    } else {
        field.is_nullable
    };
    let has_max_length =
        field.field_type == FieldType::Varchar && field.length.is_some_and(|l| l > 0.0);
    let has_default_value = field.field_type == FieldType::Varchar && nullable_for_polarity;

    let mut record = Map::new();
    record.insert("Index".to_string(), json!(field.index));
    record.insert("Name".to_string(), json!(name));
    record.insert("VarName".to_string(), json!(names::var_case(name)));
    record.insert(
        "Description".to_string(),
        match &field.description {
            Some(d) => json!(d),
            None => Value::Null,
        },
    );
    record.insert("PrimaryKey".to_string(), json!(field.is_primary_key));
    record.insert("Lookup".to_string(), json!(field.is_lookup));
    record.insert("Nullable".to_string(), json!(field.is_nullable));
    record.insert(
        "DefaultValue".to_string(),
        json!(field.default_value.render()),
    );
    record.insert("Type".to_string(), json!(field.type_name()));
    record.insert(
        "MaxLength".to_string(),
        match field.length {
            Some(l) => json!(render_number(l)),
            None => Value::Null,
        },
    );
    record.insert("HasMaxLength".to_string(), json!(has_max_length));
    record.insert("IsRequired".to_string(), json!(nullable_for_polarity));
    record.insert("HasDefaultValue".to_string(), json!(has_default_value));
    if let Some(snippet) = validation_snippet(field) {
        record.insert("Validation".to_string(), json!(snippet));
    }
    record.insert("Mock".to_string(), json!(mock_snippet(field)));
    record.insert("MockInline".to_string(), json!(field.field_type.is_scalar()));

    Value::Object(record)
}

fn enum_record(def: &crate::schema::EnumDef) -> Value {
    json!({
        "Name": def.name,
        "DisplayName": def.display_name,
        "Values": def.values.iter().map(|v| json!({
            "Name": v.name,
            "Value": v.value,
        })).collect::<Vec<_>>(),
    })
}

/// Validation-rule snippet for one field, or `None` when no rule applies.
///
/// Non-nullable fields get a required rule; Varchar fields additionally get
/// a maximum-length rule (length > 0) and an email-format rule when the
/// identifier contains "email", in that order.
fn validation_snippet(field: &Field) -> Option<String> {
    let mut rules = Vec::new();
    if !field.is_nullable {
        rules.push("NotEmpty()".to_string());
    }
    if field.field_type == FieldType::Varchar {
        if let Some(length) = field.length {
            if length > 0.0 {
                rules.push(format!("MaximumLength({})", render_number(length)));
            }
        }
        if field.name.to_ascii_lowercase().contains("email") {
            rules.push("EmailAddress()".to_string());
        }
    }

    if rules.is_empty() {
        return None;
    }

    let mut snippet = format!("{MEMBER_INDENT}validator.RuleFor(x => x.{})", field.name);
    for rule in &rules {
        snippet.push_str(&format!("\n{RULE_INDENT}.{rule}"));
    }
    snippet.push(';');
    Some(snippet)
}

/// Mock-value snippet: scalar types are plain any-value expressions, temporal
/// and enum types are declared as inferred-type locals.
fn mock_snippet(field: &Field) -> String {
    let type_name = field.type_name();
    if field.field_type.is_scalar() {
        format!("Any<{type_name}>()")
    } else {
        format!(
            "var {} = Any<{type_name}>();",
            names::var_case(&field.name)
        )
    }
}
