//! Gradle Kotlin DSL rendering of a recorded build graph.
//!
//! The renderer turns an [`InMemoryBuildGraph`] into a settings script that
//! includes every module and one `build.gradle.kts` per module directory.

use std::collections::BTreeMap;
use std::fmt::Write;
use std::path::{Path, PathBuf};

use pomport_model::{Coordinates, Visibility};

use crate::error::ImportResult;
use crate::graph::{DependencyTarget, InMemoryBuildGraph, ModuleBuild};

/// Header comment placed at the top of every generated file.
const FILE_HEADER: &str = "// Generated by pomport from the Maven descriptors. DO NOT EDIT.";

/// Name of the generated settings script.
pub const SETTINGS_FILE: &str = "settings-imported.gradle.kts";

/// Name of the generated per-module build script.
pub const BUILD_FILE: &str = "build.gradle.kts";

/// Render every file: the settings script under `settings_dir` and a build
/// script in each module directory.
pub fn render_all(
    graph: &InMemoryBuildGraph,
    settings_dir: &Path,
) -> ImportResult<BTreeMap<PathBuf, String>> {
    let mut files = BTreeMap::new();
    files.insert(settings_dir.join(SETTINGS_FILE), render_settings(graph)?);
    for (name, build) in graph.modules() {
        files.insert(build.directory.join(BUILD_FILE), render_module(name, build)?);
    }
    Ok(files)
}

/// Render the settings script including every module.
pub fn render_settings(graph: &InMemoryBuildGraph) -> ImportResult<String> {
    let mut out = String::with_capacity(64 * graph.len() + 128);
    writeln!(out, "{FILE_HEADER}")?;
    writeln!(out)?;
    for (name, build) in graph.modules() {
        writeln!(out, "include(\":{name}\")")?;
        writeln!(
            out,
            "project(\":{name}\").projectDir = file({})",
            kotlin_string(&build.directory.to_string_lossy())
        )?;
    }
    Ok(out)
}

/// Render the build script of one module.
pub fn render_module(name: &str, build: &ModuleBuild) -> ImportResult<String> {
    let mut out = String::with_capacity(2048);
    writeln!(out, "{FILE_HEADER}")?;
    writeln!(out, "// Module :{name}")?;
    writeln!(out)?;

    writeln!(out, "plugins {{")?;
    for plugin in &build.plugins {
        writeln!(out, "    id({})", kotlin_string(plugin))?;
    }
    writeln!(out, "}}")?;

    if !build.properties.is_empty() {
        writeln!(out)?;
        for (key, value) in &build.properties {
            writeln!(out, "extra[{}] = {}", kotlin_string(key), kotlin_string(value))?;
        }
    }

    let constraints: Vec<(Visibility, String)> = build
        .constraints
        .iter()
        .filter_map(|c| strict_notation(&c.coordinates).map(|n| (c.visibility, n)))
        .collect();

    if !build.dependencies.is_empty() || !constraints.is_empty() {
        writeln!(out)?;
        writeln!(out, "dependencies {{")?;
        for dep in &build.dependencies {
            match &dep.target {
                DependencyTarget::Project { path } => {
                    writeln!(out, "    {}(project({}))", dep.visibility, kotlin_string(path))?;
                }
                DependencyTarget::External { coordinates } => {
                    writeln!(
                        out,
                        "    {}({})",
                        dep.visibility,
                        kotlin_string(&coordinates.to_string())
                    )?;
                }
            }
        }
        if !constraints.is_empty() {
            writeln!(out, "    constraints {{")?;
            for (visibility, notation) in &constraints {
                writeln!(out, "        {visibility}({})", kotlin_string(notation))?;
            }
            writeln!(out, "    }}")?;
        }
        writeln!(out, "}}")?;
    }

    for extra in &build.configuration_dependencies {
        writeln!(out)?;
        writeln!(
            out,
            "configurations.named({}) {{",
            kotlin_string(&extra.configuration)
        )?;
        writeln!(
            out,
            "    val upstream = project.dependencies.create({}) as ExternalModuleDependency",
            kotlin_string(&extra.coordinates.to_string())
        )?;
        for exclusion in &extra.exclusions {
            writeln!(
                out,
                "    upstream.exclude(group = {}, module = {})",
                kotlin_string(&exclusion.group),
                kotlin_string(&exclusion.module)
            )?;
        }
        writeln!(out, "    dependencies.add(upstream)")?;
        writeln!(out, "}}")?;
    }

    Ok(out)
}

/// Dependency notation forcing the exact version, `group:artifact:version!!`.
///
/// `None` when there is no version to force.
fn strict_notation(coordinates: &Coordinates) -> Option<String> {
    match coordinates.version.as_deref() {
        Some(v) if !v.is_empty() => Some(format!("{coordinates}!!")),
        _ => None,
    }
}

/// Quote a value as a Kotlin string literal.
fn kotlin_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}
