//! Data-transfer object target.

use std::fmt::Write;

use crate::config::GeneratorConfig;
use crate::view::ViewModel;

use super::{record_flag, record_text, records, text};

pub fn render(view: &ViewModel, config: &GeneratorConfig) -> String {
    let name = text(view, "Name");
    let mut out = String::new();

    let _ = writeln!(out, "namespace {};", config.generated.dto_namespace);
    let _ = writeln!(out);
    let _ = writeln!(out, "public class {name}Dto");
    let _ = writeln!(out, "{{");

    for field in records(view, "DtoFields") {
        let nullable = record_flag(field, "Nullable");
        let _ = writeln!(
            out,
            "    public {}{} {} {{ get; set; }}",
            record_text(field, "Type"),
            if nullable { "?" } else { "" },
            record_text(field, "Name")
        );
    }

    let _ = writeln!(out, "}}");
    out
}
