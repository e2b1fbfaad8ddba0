//! Generate command - Render documentation for an API description.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::{info, warn};

use apidoc_core::{AssemblyReport, DocumentAssembler};
use apidoc_spec::ApiReader;
use apidoc_templates::{TemplateLoader, TemplateRenderer};

#[derive(Args)]
pub struct GenerateArgs {
    /// API description to document (JSON, or YAML by extension)
    pub input: PathBuf,

    /// Documentation file to write, or "-" for stdout
    pub output: PathBuf,

    /// Template set directory (defaults to the built-in Markdown set)
    #[arg(short, long, env = "APIDOC_TEMPLATES")]
    pub templates: Option<PathBuf>,

    /// Warn about type and binding references that resolve to nothing
    #[arg(long)]
    pub report_misses: bool,
}

pub fn execute(args: GenerateArgs, quiet: bool) -> Result<()> {
    info!("Generating documentation for {:?}", args.input);

    let api = ApiReader::read_file(&args.input)
        .with_context(|| format!("Failed to read API description {:?}", args.input))?;

    let renderer = load_renderer(args.templates.as_deref())?;
    let assembler = DocumentAssembler::new(&renderer);

    let report = if args.output == Path::new("-") {
        let stdout = io::stdout();
        assembler
            .write_to(&api, &mut stdout.lock())
            .context("Failed to render documentation")?
    } else {
        let document = assembler
            .assemble(&api)
            .context("Failed to render documentation")?;
        write_output(&args.output, &document.text)?;
        document.report
    };

    if args.report_misses {
        report_misses(&report);
    }

    info!(
        "Documented {} resources and {} operations",
        report.resources, report.operations
    );
    if !quiet && args.output != Path::new("-") {
        println!("Documentation successfully generated!");
    }

    Ok(())
}

fn load_renderer(templates: Option<&Path>) -> Result<TemplateRenderer> {
    match templates {
        Some(dir) => TemplateLoader::new(dir)
            .load()
            .with_context(|| format!("Failed to load templates from {:?}", dir)),
        None => TemplateLoader::builtin().context("Failed to load built-in templates"),
    }
}

fn write_output(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {:?}", parent))?;
    }
    fs::write(path, text).with_context(|| format!("Failed to write {:?}", path))
}

fn report_misses(report: &AssemblyReport) {
    if report.misses.is_empty() {
        info!("All type and binding references resolved");
    }
    for miss in &report.misses {
        warn!("Unresolved reference: {}", miss);
    }
}
