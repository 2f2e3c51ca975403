//! API controller target.

use std::fmt::Write;

use crate::config::GeneratorConfig;
use crate::view::ViewModel;

use super::text;

pub fn render(view: &ViewModel, config: &GeneratorConfig) -> String {
    let name = text(view, "Name");
    let plural = text(view, "NamePlural");
    let generated = &config.generated;
    let mut out = String::new();

    let _ = writeln!(out, "using Microsoft.AspNetCore.Mvc;");
    let _ = writeln!(out, "using {};", generated.dto_namespace);
    let _ = writeln!(out, "using {}.Queries;", generated.cqrs_namespace);
    let _ = writeln!(out);
    let _ = writeln!(out, "namespace {}.Controllers;", generated.cqrs_namespace);
    let _ = writeln!(out);
    let _ = writeln!(out, "[ApiController]");
    let _ = writeln!(out, "[Route(\"api/{}\")]", plural.to_lowercase());
    let _ = writeln!(out, "public class {plural}Controller : ControllerBase");
    let _ = writeln!(out, "{{");
    let _ = writeln!(out, "    [HttpGet(\"{{id}}\")]");
    let _ = writeln!(
        out,
        "    public async Task<ActionResult<{name}Dto>> GetById({} id)",
        generated.id_type
    );
    let _ = writeln!(out, "    {{");
    let _ = writeln!(
        out,
        "        var result = await Mediator.Send(new Get{name}ByIdQuery {{ Id = id }});"
    );
    let _ = writeln!(out, "        return result is null ? NotFound() : Ok(result);");
    let _ = writeln!(out, "    }}");
    let _ = writeln!(out);
    let _ = writeln!(out, "    [HttpGet]");
    let _ = writeln!(
        out,
        "    public async Task<ActionResult<List<{name}Dto>>> Get([FromQuery] Get{name}ByConditionQuery query)"
    );
    let _ = writeln!(out, "    {{");
    let _ = writeln!(out, "        return Ok(await Mediator.Send(query));");
    let _ = writeln!(out, "    }}");
    let _ = writeln!(out, "}}");
    out
}
