//! Show command - render a model's datasheet.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use datasheet::{Catalog, Datasheet};

use crate::cli::OutputFormat;

pub fn run(
    catalog: &Catalog,
    name: String,
    version: Option<u32>,
    format: OutputFormat,
    output: Option<PathBuf>,
    open_browser: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let handle = super::fetch(catalog.registry(), &name, version)?;
    let sheet = catalog.render_handle(&handle);

    let format = if open_browser { OutputFormat::Page } else { format };
    tracing::debug!(model = %handle.id(), %format, "rendering datasheet");
    let title = handle.tags.lookup("title").unwrap_or(&handle.name);
    let content = format_sheet(&sheet, &format, title)?;

    match output {
        Some(path) => {
            fs::write(&path, &content)
                .map_err(|e| format!("Failed to write '{}': {}", path.display(), e))?;

            eprintln!(
                "{} {} ({}) to {}",
                "Wrote".green().bold(),
                handle.id().white(),
                format,
                path.display()
            );

            if open_browser {
                tracing::info!(path = %path.display(), "opening in browser");
                open::that(&path)?;
            }
        }
        None => print!("{}", content),
    }

    if !sheet.is_complete() {
        eprintln!(
            "{} {} of {} fields missing",
            "Note:".yellow().bold(),
            sheet.missing_fields().len(),
            datasheet::TagKey::ALL.len()
        );
    }

    Ok(())
}

fn format_sheet(
    sheet: &Datasheet,
    format: &OutputFormat,
    title: &str,
) -> Result<String, serde_json::Error> {
    Ok(match format {
        OutputFormat::Html => sheet.html().to_string(),
        OutputFormat::Page => sheet.to_html_page(title),
        OutputFormat::Markdown => sheet.markdown().to_string(),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(sheet)?;
            json.push('\n');
            json
        }
    })
}
