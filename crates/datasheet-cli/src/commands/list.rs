//! List command - show registered models and their versions.

use colored::Colorize;
use datasheet::ModelRegistry;

pub fn run(registry: &dyn ModelRegistry, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut models = Vec::new();
    for name in registry.models()? {
        let versions = registry.versions(&name)?;
        models.push((name, versions));
    }

    if json_output {
        let listing: Vec<serde_json::Value> = models
            .iter()
            .map(|(name, versions)| serde_json::json!({ "name": name, "versions": versions }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    if models.is_empty() {
        println!(
            "No models registered. Run {} to add one.",
            "datasheet register <NAME> --path <PATH>".cyan().bold()
        );
        return Ok(());
    }

    for (name, versions) in &models {
        let latest = versions.last().copied().unwrap_or_default();
        println!(
            "{:30} {} {}",
            name.white().bold(),
            format!("latest {}", latest).cyan(),
            format!("({} versions)", versions.len()).dimmed()
        );
    }

    Ok(())
}
