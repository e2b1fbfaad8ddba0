//! CLI command definitions.

use clap::Parser;

pub mod generate;

/// apidoc - render API documentation from an API description
#[derive(Parser)]
#[command(name = "apidoc")]
#[command(version, about = "Render API documentation from an API description")]
#[command(long_about = r#"
apidoc reads an API description (JSON or YAML) and renders human-readable
documentation through a template set: a header, one section per resource
with one entry per operation, and a footer.

Without --templates the built-in Markdown template set is used. A template
directory holds Tera templates and an optional templates.yaml naming the
header, resource, operation, resource_end and footer templates.

Use "-" as OUTPUT to write the document to stdout.

EXIT CODES:
  0 - Success
  1 - Failure (description, template or output error)
  2 - Invalid arguments
"#)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(flatten)]
    pub generate: generate::GenerateArgs,
}
