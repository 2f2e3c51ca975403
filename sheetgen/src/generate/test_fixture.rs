//! Test-class target.
//!
//! Mock snippets come in two shapes: scalar fields carry a plain any-value
//! expression usable inline, temporal and enum fields carry an
//! inferred-type local declaration that has to be emitted before the
//! constructor call.

use std::fmt::Write;

use crate::config::GeneratorConfig;
use crate::view::ViewModel;

use super::{record_flag, record_text, records, text};

pub fn render(view: &ViewModel, config: &GeneratorConfig) -> String {
    let name = text(view, "Name");
    let generated = &config.generated;
    let mut out = String::new();

    let _ = writeln!(out, "using {};", generated.entity_namespace);
    let _ = writeln!(out);
    let _ = writeln!(out, "namespace {}.Tests;", generated.cqrs_namespace);
    let _ = writeln!(out);
    let _ = writeln!(out, "public class {name}Tests");
    let _ = writeln!(out, "{{");
    let _ = writeln!(out, "    [Fact]");
    let _ = writeln!(out, "    public void Create_Assigns_All_Fields()");
    let _ = writeln!(out, "    {{");

    let fields = records(view, "EntityFields");
    for field in &fields {
        if !record_flag(field, "MockInline") {
            let _ = writeln!(out, "        {}", record_text(field, "Mock"));
        }
    }

    let arguments: Vec<String> = fields
        .iter()
        .map(|field| {
            if record_flag(field, "MockInline") {
                record_text(field, "Mock").to_string()
            } else {
                record_text(field, "VarName").to_string()
            }
        })
        .collect();
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "        var entity = new {name}({});",
        arguments.join(", ")
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "        Assert.NotNull(entity);");
    let _ = writeln!(out, "    }}");
    let _ = writeln!(out, "}}");
    out
}
