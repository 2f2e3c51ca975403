//! Validation-rules target.

use std::fmt::Write;

use crate::config::GeneratorConfig;
use crate::view::ViewModel;

use super::text;

pub fn render(view: &ViewModel, config: &GeneratorConfig) -> String {
    let name = text(view, "Name");
    let generated = &config.generated;
    let mut out = String::new();

    let _ = writeln!(out, "using FluentValidation;");
    let _ = writeln!(out, "using {};", generated.entity_namespace);
    let _ = writeln!(out);
    let _ = writeln!(out, "namespace {};", generated.validation_namespace);
    let _ = writeln!(out);
    let _ = writeln!(out, "public static class {name}ValidationRules");
    let _ = writeln!(out, "{{");
    let _ = writeln!(
        out,
        "    public static void Apply(AbstractValidator<{name}> validator)"
    );
    let _ = writeln!(out, "    {{");
    let _ = writeln!(out, "{}", text(view, "ValidationRules"));
    let _ = writeln!(out, "    }}");
    let _ = writeln!(out, "}}");
    out
}
