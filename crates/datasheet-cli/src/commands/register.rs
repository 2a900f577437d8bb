//! Register command - register a model version with datasheet tags.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use colored::Colorize;
use datasheet::{
    parse_tag_arg, FileRegistry, FrameworkInfo, ModelRegistry, Registration, RegistryConfig,
    TagMapping,
};

pub struct RegisterArgs {
    pub root: PathBuf,
    pub name: String,
    pub path: PathBuf,
    pub framework: String,
    pub framework_version: Option<String>,
    pub description: String,
    pub tags: Vec<String>,
    pub tags_file: Option<PathBuf>,
    pub no_digest: bool,
}

pub fn run(args: RegisterArgs, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut tags = match &args.tags_file {
        Some(path) => {
            let tags = load_tags_file(path)?;
            tracing::debug!(path = %path.display(), tags = tags.len(), "loaded tags file");
            tags
        }
        None => TagMapping::new(),
    };
    for arg in &args.tags {
        let (key, value) = parse_tag_arg(arg)?;
        tags.insert(key, value);
    }

    let mut framework = FrameworkInfo::new(args.framework);
    if let Some(v) = args.framework_version {
        framework = framework.with_version(v);
    }

    let unknown: Vec<String> = tags.unknown_keys().into_iter().map(str::to_string).collect();
    let missing = tags.missing_keys();

    let registry = FileRegistry::with_config(
        RegistryConfig::new(&args.root).with_digest(!args.no_digest),
    );
    let handle = registry.register(
        Registration::new(args.name, args.path)
            .with_framework(framework)
            .with_description(args.description)
            .with_tags(tags),
    )?;

    println!(
        "{} {} {}",
        "Registered".green().bold(),
        handle.name.white().bold(),
        format!("version {}", handle.version).cyan()
    );

    if verbose {
        println!("  Path:      {}", handle.path.display());
        println!("  Framework: {}", handle.framework.name);
        if let Some(digest) = &handle.digest {
            println!("  Digest:    {}", digest);
        }
        println!("  Tags:      {}", handle.tags.len());
    }

    if !unknown.is_empty() {
        println!(
            "{} {} (not shown on the datasheet)",
            "Extra tags:".yellow(),
            unknown.join(", ")
        );
    }

    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|k| k.as_str()).collect();
        println!(
            "{} {}",
            "Missing datasheet fields:".yellow(),
            names.join(", ")
        );
    }

    println!(
        "Run {} to view the datasheet",
        format!("datasheet show {}", handle.name).cyan().bold()
    );

    Ok(())
}

fn load_tags_file(path: &Path) -> Result<TagMapping, Box<dyn std::error::Error>> {
    let file = File::open(path)
        .map_err(|e| format!("Failed to open tags file '{}': {}", path.display(), e))?;
    let tags: TagMapping = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("Failed to parse tags file '{}': {}", path.display(), e))?;
    Ok(tags)
}
