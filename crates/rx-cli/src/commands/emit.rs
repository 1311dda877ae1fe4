//! Emit command implementation

use anyhow::{Context, Result};
use rx_algebra::{NodeRef, Relation};
use std::io::Read;
use std::path::Path;

use crate::cli::{EmitArgs, EmitOutput, GlobalArgs, InputFormat};
use crate::render::{self, SexpPrinter};

/// Execute the emit command
pub fn execute(args: &EmitArgs, global: &GlobalArgs) -> Result<()> {
    let relation = load_relation(&args.path, args.input_format)?;
    if global.verbose {
        if let Some(kind) = NodeRef::from(&relation).kind() {
            eprintln!("[verbose] Loaded '{}' tree from {}", kind, args.path);
        }
    }

    println!("{}", emit(&relation, args.output, args.pretty)?);
    Ok(())
}

/// Generate and render the s-expression for a relation tree
pub(crate) fn emit(relation: &Relation, output: EmitOutput, pretty: bool) -> Result<String> {
    let sexp = rx_sexp::visit(relation).context("Failed to generate s-expression")?;
    let rendered = match output {
        EmitOutput::Sexp => SexpPrinter::new(pretty).print(&sexp),
        EmitOutput::Json => render::to_json(&sexp, pretty),
    };
    rendered.context("Failed to render s-expression")
}

/// Load a relation tree from a file, or stdin when `path` is `-`
pub(crate) fn load_relation(path: &str, format: InputFormat) -> Result<Relation> {
    let (source, format) = if path == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read relation tree from stdin")?;
        let format = match format {
            InputFormat::Auto => InputFormat::Json,
            explicit => explicit,
        };
        (source, format)
    } else {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read relation tree: {}", path))?;
        (source, resolve_format(Path::new(path), format))
    };

    log::debug!("Parsing relation tree from {} as {:?}", path, format);
    parse_relation(&source, format).with_context(|| format!("Invalid relation tree: {}", path))
}

/// Parse a relation tree document in the given format and validate it
pub(crate) fn parse_relation(source: &str, format: InputFormat) -> Result<Relation> {
    let relation: Relation = match format {
        InputFormat::Yaml => serde_yaml::from_str(source)?,
        InputFormat::Json | InputFormat::Auto => serde_json::from_str(source)?,
    };
    relation.validate()?;
    Ok(relation)
}

/// Pick the input format from the file extension when not given explicitly
fn resolve_format(path: &Path, format: InputFormat) -> InputFormat {
    if format != InputFormat::Auto {
        return format;
    }
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => InputFormat::Yaml,
        _ => InputFormat::Json,
    }
}

#[cfg(test)]
#[path = "emit_test.rs"]
mod tests;
