use anyhow::{Context, Result};
use clap::Parser;
use notebook_icons::capability::probe_png_support;
use notebook_icons::{generate, GeneratorConfig};

#[derive(Parser)]
#[command(name = "notebook-icons")]
#[command(version)]
#[command(about = "Generate the 16, 48 and 128 px notebook icons into ./icons", long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    // Fail before touching the filesystem if PNG cannot be written
    probe_png_support().context("Cannot generate icons")?;

    let config = GeneratorConfig::default();
    let report = generate(&config).context("Failed to generate icons")?;

    for line in report.summary_lines(&report.resolved_output_dir()) {
        println!("{}", line);
    }

    Ok(())
}
