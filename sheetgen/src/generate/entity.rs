//! Entity class target.

use std::fmt::Write;

use crate::config::GeneratorConfig;
use crate::view::ViewModel;

use super::{record_flag, record_text, records, text};

pub fn render(view: &ViewModel, config: &GeneratorConfig) -> String {
    let name = text(view, "Name");
    let mut out = String::new();

    let _ = writeln!(out, "using System.ComponentModel.DataAnnotations;");
    let _ = writeln!(out);
    let _ = writeln!(out, "namespace {};", config.generated.entity_namespace);
    let _ = writeln!(out);
    let _ = writeln!(out, "public class {name}");
    let _ = writeln!(out, "{{");

    for field in records(view, "EntityFields") {
        let field_name = record_text(field, "Name");
        let type_name = record_text(field, "Type");
        let nullable = record_flag(field, "Nullable");

        if record_flag(field, "IsRequired") {
            let _ = writeln!(out, "    [Required]");
        }
        if record_flag(field, "HasMaxLength") {
            let _ = writeln!(out, "    [MaxLength({})]", record_text(field, "MaxLength"));
        }
        let initializer = if record_flag(field, "HasDefaultValue") {
            format!(" = {};", record_text(field, "DefaultValue"))
        } else {
            String::new()
        };
        let _ = writeln!(
            out,
            "    public {type_name}{} {field_name} {{ get; private set; }}{initializer}",
            if nullable { "?" } else { "" }
        );
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "    private {name}() {{ }}");
    let _ = writeln!(out);
    let _ = writeln!(out, "    public {name}({})", text(view, "Arguments"));
    let _ = writeln!(out, "    {{");
    let _ = writeln!(out, "{}", text(view, "Assignments"));
    let _ = writeln!(out, "    }}");
    let _ = writeln!(out);
    let _ = writeln!(out, "    public void Update({})", text(view, "Arguments"));
    let _ = writeln!(out, "    {{");
    let _ = writeln!(out, "{}", text(view, "Assignments"));
    let _ = writeln!(out, "    }}");
    let _ = writeln!(out, "}}");

    for enum_record in records(view, "Enums") {
        let _ = writeln!(out);
        let _ = writeln!(out, "public enum {}", record_text(enum_record, "DisplayName"));
        let _ = writeln!(out, "{{");
        for value in records(enum_record, "Values") {
            let _ = writeln!(
                out,
                "    {} = {},",
                record_text(value, "Name"),
                value.get("Value").and_then(serde_json::Value::as_i64).unwrap_or_default()
            );
        }
        let _ = writeln!(out, "}}");
    }

    out
}
