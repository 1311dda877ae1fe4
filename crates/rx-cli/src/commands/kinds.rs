//! Kinds command implementation

use anyhow::Result;
use rx_algebra::NodeKind;
use rx_sexp::Registry;
use serde::Serialize;

use crate::cli::{GlobalArgs, KindsArgs, KindsOutput};

/// One row of the kinds listing
#[derive(Debug, Serialize)]
struct KindEntry {
    kind: NodeKind,
    rule: Option<&'static str>,
    tag: Option<&'static str>,
    fields: Vec<String>,
}

/// Execute the kinds command
pub fn execute(args: &KindsArgs, global: &GlobalArgs) -> Result<()> {
    let registry = Registry::canonical();
    let entries = kind_entries(registry);

    if global.verbose {
        eprintln!(
            "[verbose] {} of {} node kinds registered",
            registry.len(),
            NodeKind::ALL.len()
        );
    }

    match args.output {
        KindsOutput::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        KindsOutput::Table => print_table(&entries),
    }
    Ok(())
}

/// Every node kind with its rule, unregistered kinds included
fn kind_entries(registry: &Registry) -> Vec<KindEntry> {
    NodeKind::ALL
        .iter()
        .map(|&kind| {
            let rule = registry.rule(kind);
            KindEntry {
                kind,
                rule: rule.map(|rule| rule.name()),
                tag: rule.and_then(|rule| rule.tag()),
                fields: rule
                    .map(|rule| rule.fields().iter().map(|f| f.to_string()).collect())
                    .unwrap_or_default(),
            }
        })
        .collect()
}

/// Print kinds as a human-readable table
fn print_table(entries: &[KindEntry]) {
    println!("{:<28} {:<14} {:<18} FIELDS", "KIND", "RULE", "TAG");
    println!("{}", "-".repeat(80));

    for entry in entries {
        println!(
            "{:<28} {:<14} {:<18} {}",
            entry.kind.to_string(),
            entry.rule.unwrap_or("(identity)"),
            entry.tag.unwrap_or("-"),
            if entry.fields.is_empty() {
                "-".to_string()
            } else {
                entry.fields.join(", ")
            },
        );
    }

    let unregistered = entries.iter().filter(|e| e.rule.is_none()).count();
    println!(
        "\n{} kind(s), {} passed through unchanged.",
        entries.len(),
        unregistered
    );
}

#[cfg(test)]
#[path = "kinds_test.rs"]
mod tests;
