//! Generation targets: render a view model into text, post-process it, and
//! write it to the output tree.
//!
//! Every target receives the same view model, unmodified per call. Rendered
//! output always passes through [`collapse_blank_lines`] before writing, and
//! existing files are never touched.

mod command;
mod controller;
mod dto;
mod entity;
mod queries;
mod test_fixture;
mod validation;

use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use log::{debug, info};
use regex::Regex;
use serde_json::Value;

use crate::config::GeneratorConfig;
use crate::view::ViewModel;

/// One render-and-write operation.
pub struct Target {
    pub label: &'static str,
    pub path: PathBuf,
    render: fn(&ViewModel, &GeneratorConfig) -> String,
}

impl Target {
    pub fn render(&self, view: &ViewModel, config: &GeneratorConfig) -> String {
        (self.render)(view, config)
    }
}

/// Outcome of one target: whether the file was created or left alone.
pub struct Written {
    pub label: &'static str,
    pub path: PathBuf,
    pub created: bool,
}

/// The generation targets for one entity, with their output paths.
pub fn targets(view: &ViewModel, config: &GeneratorConfig) -> Vec<Target> {
    let root = &config.generated.path;
    let name = text(view, "Name");
    let plural = text(view, "NamePlural");
    let cqrs = root.join("Cqrs").join(name);

    vec![
        Target {
            label: "entity",
            path: root.join("Entities").join(format!("{name}.cs")),
            render: entity::render,
        },
        Target {
            label: "dto",
            path: root.join("Dtos").join(format!("{name}Dto.cs")),
            render: dto::render,
        },
        Target {
            label: "get-by-id query",
            path: cqrs.join("Queries").join(format!("Get{name}ByIdQuery.cs")),
            render: queries::render_by_id,
        },
        Target {
            label: "get-by-condition query",
            path: cqrs
                .join("Queries")
                .join(format!("Get{name}ByConditionQuery.cs")),
            render: queries::render_by_condition,
        },
        Target {
            label: "command",
            path: cqrs.join(format!("I{name}Command.cs")),
            render: command::render,
        },
        Target {
            label: "validation rules",
            path: cqrs.join(format!("{name}ValidationRules.cs")),
            render: validation::render,
        },
        Target {
            label: "controller",
            path: root.join("Controllers").join(format!("{plural}Controller.cs")),
            render: controller::render,
        },
        Target {
            label: "tests",
            path: root.join("Tests").join(format!("{name}Tests.cs")),
            render: test_fixture::render,
        },
    ]
}

/// Renders and writes every target for one view model.
pub fn generate_all(view: &ViewModel, config: &GeneratorConfig) -> io::Result<Vec<Written>> {
    let mut results = Vec::new();
    for target in targets(view, config) {
        let output = collapse_blank_lines(&target.render(view, config));
        let created = write_if_absent(&target.path, &output)?;
        if created {
            info!("generated {} at {}", target.label, target.path.display());
        } else {
            debug!("skipped existing {}", target.path.display());
        }
        results.push(Written {
            label: target.label,
            path: target.path,
            created,
        });
    }
    Ok(results)
}

/// Collapses the incidental blank-line runs that section-based rendering
/// leaves behind: leading blanks go away, interior runs shrink to a single
/// blank line, and the output ends with exactly one newline.
pub fn collapse_blank_lines(text: &str) -> String {
    static BLANK_RUN: OnceLock<Regex> = OnceLock::new();
    let blank_run = BLANK_RUN
        .get_or_init(|| Regex::new(r"\n[ \t]*\n(?:[ \t]*\n)+").expect("static pattern"));

    let collapsed = blank_run.replace_all(text, "\n\n");
    let trimmed = collapsed.trim_start_matches(['\n', '\r']).trim_end();
    format!("{trimmed}\n")
}

/// Writes `contents` to `path`, creating parent directories as needed.
/// Returns `false` without touching anything when the file already exists.
pub fn write_if_absent(path: &Path, contents: &str) -> io::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(true)
}

pub(crate) fn text<'a>(view: &'a ViewModel, key: &str) -> &'a str {
    view.get(key).and_then(Value::as_str).unwrap_or_default()
}

pub(crate) fn records<'a>(view: &'a ViewModel, key: &str) -> Vec<&'a ViewModel> {
    view.get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_object).collect())
        .unwrap_or_default()
}

pub(crate) fn record_text<'a>(record: &'a ViewModel, key: &str) -> &'a str {
    record.get(key).and_then(Value::as_str).unwrap_or_default()
}

pub(crate) fn record_flag(record: &ViewModel, key: &str) -> bool {
    record.get(key).and_then(Value::as_bool).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_removes_blank_line_runs() {
        let input = "\n\npublic class A\n{\n    \n\n    public int B;\n\n}\n\n\n";
        let output = collapse_blank_lines(input);
        assert_eq!(output, "public class A\n{\n\n    public int B;\n\n}\n");
    }

    #[test]
    fn collapse_is_idempotent() {
        let once = collapse_blank_lines("a\n\n\n\nb\n");
        assert_eq!(collapse_blank_lines(&once), once);
    }

    #[test]
    fn write_if_absent_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.cs");

        assert!(write_if_absent(&path, "first").unwrap());
        assert!(!write_if_absent(&path, "second").unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first");
    }
}
