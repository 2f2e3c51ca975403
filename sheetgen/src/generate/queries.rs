//! Query targets: fetch by id and fetch by condition.

use std::fmt::Write;

use crate::config::GeneratorConfig;
use crate::view::ViewModel;

use super::{record_text, records, text};

pub fn render_by_id(view: &ViewModel, config: &GeneratorConfig) -> String {
    let name = text(view, "Name");
    let generated = &config.generated;
    let mut out = String::new();

    let _ = writeln!(out, "using {};", generated.entity_namespace);
    let _ = writeln!(out, "using {};", generated.dto_namespace);
    let _ = writeln!(out);
    let _ = writeln!(out, "namespace {}.Queries;", generated.cqrs_namespace);
    let _ = writeln!(out);
    let _ = writeln!(out, "public class Get{name}ByIdQuery");
    let _ = writeln!(out, "{{");
    let _ = writeln!(
        out,
        "    public {} Id {{ get; init; }}",
        generated.id_type
    );
    let _ = writeln!(out, "}}");
    out
}

pub fn render_by_condition(view: &ViewModel, config: &GeneratorConfig) -> String {
    let name = text(view, "Name");
    let generated = &config.generated;
    let mut out = String::new();

    let _ = writeln!(out, "using {};", generated.entity_namespace);
    let _ = writeln!(out, "using {};", generated.dto_namespace);
    let _ = writeln!(out);
    let _ = writeln!(out, "namespace {}.Queries;", generated.cqrs_namespace);
    let _ = writeln!(out);
    let _ = writeln!(out, "public class Get{name}ByConditionQuery");
    let _ = writeln!(out, "{{");
    let _ = writeln!(
        out,
        "    public Get{name}ByConditionQuery({})",
        text(view, "NullableArguments")
    );
    let _ = writeln!(out, "    {{");

    // Per-field filters: string fields match by substring, everything else
    // by equality, and only when the caller supplied a value.
    for field in records(view, "EntityFields") {
        let field_name = record_text(field, "Name");
        let var_name = record_text(field, "VarName");
        if record_text(field, "Type") == "string" {
            let _ = writeln!(
                out,
                "        if (!string.IsNullOrEmpty({var_name}))"
            );
            let _ = writeln!(out, "        {{");
            let _ = writeln!(
                out,
                "            Query.Where(x => x.{field_name}.Contains({var_name}));"
            );
            let _ = writeln!(out, "        }}");
        } else {
            let _ = writeln!(out, "        if ({var_name} != null)");
            let _ = writeln!(out, "        {{");
            let _ = writeln!(
                out,
                "            Query.Where(x => x.{field_name} == {var_name});"
            );
            let _ = writeln!(out, "        }}");
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "    }}");
    let _ = writeln!(out, "}}");
    out
}
