//! Minimal CLI: load describe JSON → property descriptors report
use std::path::{Path, PathBuf};
use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use rayon::prelude::*;
use serde::Serialize;

use schema_typegen::{describe_object, load, KindNames, ObjectDescription, TypeMapper};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// derive property requiredness and type descriptors from compiled schema trees (describe() JSON)
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    /// more logging (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(long, short, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// describe every property of each input object schema as JSON
    Describe(DescribeOut),
    /// print the effective raw-kind → display-name table
    Kinds(KindSettings),
}

#[derive(Args, Debug, Clone)]
struct KindSettings {
    /// extra kind normalization, e.g. `binary=Buffer` (repeatable)
    #[arg(long = "kind-name", value_parser = parse_kind_name)]
    kind_names: Vec<(String, String)>,
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JSON Pointer to select the object schema in each document (e.g. /schemas/user)
    #[arg(long)]
    json_pointer: Option<String>,

    /// One or more inputs. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(clap::Parser, Debug)]
struct DescribeOut {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    kind_settings: KindSettings,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// fail if any property type is unresolved
    #[arg(long)]
    deny_unresolved: bool,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(Debug, Serialize)]
struct FileReport {
    file: PathBuf,
    #[serde(flatten)]
    object: ObjectDescription,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl KindSettings {
    fn mapper(&self) -> TypeMapper {
        let mut names = KindNames::default();
        names.extend(self.kind_names.iter().cloned());
        TypeMapper::new(names)
    }
}

impl InputSettings {
    fn describe_all(&self, mapper: &TypeMapper) -> Result<Vec<FileReport>> {
        let source_paths = load::resolve_file_path_patterns(&self.input)
            .context("failed to resolve input file paths")?;
        // trees are independent; order of the report follows the inputs
        source_paths
            .par_iter()
            .map(|path| self.describe_one(path, mapper))
            .collect()
    }

    fn describe_one(&self, path: &Path, mapper: &TypeMapper) -> Result<FileReport> {
        let schema = load::load_schema(path, self.json_pointer.as_deref())
            .with_context(|| format!("failed to load schema ({})", path.display()))?;
        let object = describe_object(&schema, mapper);
        for property in object.unresolved() {
            tracing::warn!(file = %path.display(), property = %property.name, "unresolved property type");
        }
        Ok(FileReport { file: path.to_path_buf(), object })
    }
}

impl DescribeOut {
    /// Write the report; returns how many property types were unresolved.
    fn describe(&self) -> Result<usize> {
        let mapper = self.kind_settings.mapper();
        let reports = self.input_settings.describe_all(&mapper)?;
        let unresolved = reports.iter().map(|r| r.object.unresolved().count()).sum::<usize>();

        let report_src = serde_json::to_string_pretty(&reports)?;
        write_output(self.out.as_deref(), &report_src)?;
        tracing::info!(files = reports.len(), unresolved, "wrote descriptor report");

        if self.deny_unresolved && unresolved != 0 {
            bail!("{unresolved} property type(s) could not be resolved");
        }
        Ok(unresolved)
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Describe(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(());
                }

                target.describe().map(|_| ())
            }
            Command::Kinds(target) => {
                let mapper = target.mapper();
                println!("{}", serde_json::to_string_pretty(mapper.kind_names())?);
                Ok(())
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn parse_kind_name(src: &str) -> Result<(String, String), String> {
    KindNames::parse_entry(src).map_err(|e| e.to_string())
}

fn write_output(out: Option<&Path>, src: &str) -> Result<()> {
    match out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(out, src).with_context(|| format!("failed to write {}", out.display()))?;
        }
        None => println!("{src}"),
    }
    Ok(())
}
