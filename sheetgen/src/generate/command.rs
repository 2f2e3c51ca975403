//! Base command interface target.

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
    let _ = writeln!(out, "namespace {};", generated.cqrs_namespace);
    let _ = writeln!(out);
    let _ = writeln!(out, "public interface I{name}Command");
    let _ = writeln!(out, "{{");

    for field in records(view, "EntityFields") {
        let nullable = record_flag(field, "Nullable");
        let _ = writeln!(
            out,
            "    {}{} {} {{ get; }}",
            record_text(field, "Type"),
            if nullable { "?" } else { "" },
            record_text(field, "Name")
        );
    }

    let _ = writeln!(out, "}}");
    out
}
