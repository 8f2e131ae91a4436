use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use vcfconv::{
    on_open, on_save, Exporter, FormatRegistry, ParserOptions, TextExporter, VcfParser,
};

#[derive(Parser)]
#[command(
    name = "vcfconv",
    about = "Convert vCard-like contact files to CSV, text, or JSON",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a contact file and write it in another format
    Convert {
        /// Input .vcf file
        input: PathBuf,
        /// Output format tag (see `vcfconv formats`)
        #[arg(short, long)]
        format: String,
        /// Output path; defaults to the input path with the format's extension
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Ignore EMAIL lines while parsing
        #[arg(long)]
        no_email: bool,
    },
    /// Parse a contact file and print it as text
    Show {
        /// Input .vcf file
        input: PathBuf,
        /// Ignore EMAIL lines while parsing
        #[arg(long)]
        no_email: bool,
    },
    /// List supported output formats
    Formats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let registry = FormatRegistry::with_defaults();

    match cli.command {
        Command::Convert {
            input,
            format,
            output,
            no_email,
        } => {
            let contacts = on_open(&input, &build_parser(no_email))
                .with_context(|| format!("failed to load {}", input.display()))?;
            if contacts.is_empty() {
                bail!("no contacts found in {}", input.display());
            }

            let info = registry
                .info(&format)
                .with_context(|| format!("unknown format {:?}; run `vcfconv formats`", format))?;
            let output = output.unwrap_or_else(|| input.with_extension(&info.extension));

            on_save(&registry, &contacts, &format, &output)?;
            println!("Saved {} contacts to {}", contacts.len(), output.display());
        }
        Command::Show { input, no_email } => {
            let contacts = on_open(&input, &build_parser(no_email))
                .with_context(|| format!("failed to load {}", input.display()))?;
            let rendered = TextExporter.export(&contacts)?;
            print!("{}", String::from_utf8_lossy(&rendered));
        }
        Command::Formats => {
            for info in registry.formats() {
                println!("{:<6} .{:<5} {}", info.tag, info.extension, info.label);
            }
        }
    }

    Ok(())
}

fn build_parser(no_email: bool) -> VcfParser {
    VcfParser::with_options(ParserOptions {
        supports_email: !no_email,
        ..ParserOptions::default()
    })
}
