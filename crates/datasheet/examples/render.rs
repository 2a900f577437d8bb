//! Example: Register a model with datasheet tags and print its datasheet.
//!
//! Usage:
//!   cargo run --example render -- <model_path>
//!
//! Example:
//!   cargo run --example render -- outputs/model.pkl

use std::env;
use std::path::Path;

use datasheet::{Catalog, FrameworkInfo, InMemoryRegistry, Registration, TagMapping};

fn main() -> datasheet::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example render -- <model_path>");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example render -- outputs/model.pkl");
        std::process::exit(1);
    }

    let model_path = Path::new(&args[1]);

    let tags = TagMapping::new()
        .with("title", "Diabetes Regression Model")
        .with(
            "datasheet_description",
            "This is a regression model that predicts diabetes progression.",
        )
        .with("details", "Ridge regression trained with scikit-learn.")
        .with("date", "2021-03-01")
        .with("type", "Linear regression")
        .with("version", "1.0")
        .with("help", "https://example.com/ml-support")
        .with("usecase_primary", "Exploring risk factors in research settings.")
        .with("usecase_secondary", "- Teaching material\n- Benchmark baseline")
        .with("usecase_outofscope", "Any clinical decision making.")
        .with("dataset_description", "442 patients with ten baseline variables.")
        .with("motivation", "A small, well known public regression dataset.")
        .with("caveats", "Not representative of the general population.");

    let catalog = Catalog::new(InMemoryRegistry::new());
    let handle = catalog.register(
        Registration::new("diabetes-regression", model_path)
            .with_framework(FrameworkInfo::new("ScikitLearn").with_version("1.3.0"))
            .with_description("Ridge regression on the diabetes dataset")
            .with_tags(tags),
    )?;

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Datasheet: {}", handle.id());
    println!("{}", separator);
    println!();

    let sheet = catalog.datasheet(&handle.name)?;
    println!("{}", sheet.html());

    if !sheet.is_complete() {
        println!("## Missing fields");
        for missing in sheet.missing_fields() {
            println!("  {}", missing.key);
        }
        println!();
    }

    println!("{}", separator);

    Ok(())
}
