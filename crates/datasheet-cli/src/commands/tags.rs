//! Tags command - list a model's tags against the datasheet fields.

use colored::Colorize;
use datasheet::{ModelHandle, ModelRegistry, TagKey};

pub fn run(
    registry: &dyn ModelRegistry,
    name: String,
    version: Option<u32>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let handle = super::fetch(registry, &name, version)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&tags_report(&handle))?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Tags for".cyan().bold(),
        handle.id().white()
    );
    if !handle.description.is_empty() {
        println!("{}", handle.description);
    }
    println!();

    println!("{}", "Datasheet fields:".yellow().bold());
    for key in TagKey::ALL {
        match handle.tags.lookup(key) {
            Some(value) => println!("  {:22} {}", key.as_str(), preview(value)),
            None => println!("  {:22} {}", key.as_str(), "(missing)".red()),
        }
    }

    let unknown = handle.tags.unknown_keys();
    if !unknown.is_empty() {
        println!();
        println!("{}", "Other tags:".yellow().bold());
        for key in unknown {
            let value = handle.tags.lookup(key).unwrap_or_default();
            println!("  {:22} {}", key, preview(value));
        }
    }

    Ok(())
}

fn tags_report(handle: &ModelHandle) -> serde_json::Value {
    let missing: Vec<&str> = handle
        .tags
        .missing_keys()
        .iter()
        .map(|k| k.as_str())
        .collect();

    serde_json::json!({
        "model": handle.name,
        "version": handle.version,
        "registered_at": handle.registered_at,
        "tags": handle.tags,
        "missing": missing,
        "unknown": handle.tags.unknown_keys(),
    })
}

/// First line of a value, shortened for a one-line listing.
fn preview(value: &str) -> String {
    const MAX: usize = 60;
    let first = value.lines().next().unwrap_or_default();
    let mut out: String = first.chars().take(MAX).collect();
    if first.chars().count() > MAX || value.lines().nth(1).is_some() {
        out.push_str(" ...");
    }
    out
}
