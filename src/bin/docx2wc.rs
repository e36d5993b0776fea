//! CLI binary for docx2wc.
//!
//! A thin shim over the library crate that maps CLI flags
//! to `ConversionConfig` and prints results.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docx2wc::{
    convert, convert_to_file, default_output_path, inspect, ConversionConfig, ImageFile,
};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Basic conversion (stdout)
  docx2wc convert my_story.docx

  # Convert to the default output file ({stem}_written_content.txt)
  docx2wc convert my_story.docx --default-output

  # Convert to a specific file
  docx2wc convert my_story.docx -o story.txt

  # Keep the title/byline preamble
  docx2wc convert my_story.docx --no-strip-preamble

  # Use a custom content-start marker
  docx2wc convert my_story.docx --preamble-pattern '^CHAPTER 1$'

  # Document metadata without converting
  docx2wc inspect my_story.docx --json

  # Cover art helpers
  docx2wc resize cover.png --width 600 --height 400 --keep-aspect
  docx2wc convert-image cover.png --format webp
"#;

/// Convert DOCX story documents to WrittenContent JSX markup.
#[derive(Parser, Debug)]
#[command(
    name = "docx2wc",
    version,
    about = "Convert DOCX story documents to WrittenContent JSX markup",
    long_about = "Convert DOCX manuscripts into WrittenContentLoader JSX: preamble stripped, \
blank-line-separated sections grouped with <br></br> markers, paragraph styling resolved, \
typographic symbols normalized to entities.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "DOCX2WC_VERBOSE", global = true)]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "DOCX2WC_QUIET", global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a DOCX file to WrittenContent JSX.
    Convert {
        /// Path to the DOCX file.
        input: PathBuf,

        /// Write JSX to this file (.txt) instead of stdout.
        #[arg(short, long, env = "DOCX2WC_OUTPUT", conflicts_with = "default_output")]
        output: Option<PathBuf>,

        /// Write to `{stem}_written_content.txt` next to the input.
        #[arg(long)]
        default_output: bool,

        /// Keep the title/byline preamble instead of stripping it.
        #[arg(long)]
        no_strip_preamble: bool,

        /// Custom content-start marker regex (default: a `d-d-yyyy` date).
        #[arg(long, conflicts_with = "no_strip_preamble")]
        preamble_pattern: Option<String>,

        /// Render one paragraph per source paragraph, never grouping.
        #[arg(long)]
        no_grouping: bool,

        /// Output structured JSON (ConversionOutput) instead of raw JSX.
        #[arg(long, env = "DOCX2WC_JSON")]
        json: bool,
    },

    /// Print document metadata without converting.
    Inspect {
        /// Path to the DOCX file.
        input: PathBuf,

        /// Output metadata as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Resize a raster image.
    Resize {
        /// Path to the image file.
        input: PathBuf,

        /// Target width in pixels.
        #[arg(long)]
        width: u32,

        /// Target height in pixels.
        #[arg(long)]
        height: u32,

        /// Fit within width x height, preserving aspect ratio.
        #[arg(long)]
        keep_aspect: bool,

        /// Output path (same extension as the input); default overwrites.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert a raster image to another format.
    ConvertImage {
        /// Path to the image file.
        input: PathBuf,

        /// Target format: png, jpg, jpeg, gif, bmp, tiff, webp, ico.
        #[arg(long)]
        format: String,

        /// Output path; default is the input with its extension swapped.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Convert {
            input,
            output,
            default_output,
            no_strip_preamble,
            preamble_pattern,
            no_grouping,
            json,
        } => {
            let config = build_config(no_strip_preamble, preamble_pattern, no_grouping)?;

            let output_path = if default_output {
                Some(default_output_path(&input))
            } else {
                output
            };

            if let Some(ref path) = output_path {
                let result =
                    convert_to_file(&input, path, &config).context("Conversion failed")?;
                if !cli.quiet {
                    eprintln!(
                        "{}  {}/{} paragraphs  {}ms  →  {}",
                        green("✔"),
                        result.stats.rendered_paragraphs,
                        result.stats.total_paragraphs,
                        result.stats.duration_ms,
                        bold(&path.display().to_string()),
                    );
                }
            } else {
                let result = convert(&input, &config).context("Conversion failed")?;

                if json {
                    let json = serde_json::to_string_pretty(&result)
                        .context("Failed to serialise output")?;
                    println!("{json}");
                } else {
                    let stdout = io::stdout();
                    let mut handle = stdout.lock();
                    handle
                        .write_all(result.jsx.as_bytes())
                        .context("Failed to write to stdout")?;
                    // Ensure a trailing newline on stdout.
                    if !result.jsx.ends_with('\n') {
                        handle.write_all(b"\n").ok();
                    }
                }

                if !cli.quiet && !json {
                    eprintln!(
                        "   {} paragraphs rendered  —  {}ms total",
                        dim(&result.stats.rendered_paragraphs.to_string()),
                        result.stats.duration_ms,
                    );
                }
            }
        }

        Command::Inspect { input, json } => {
            let meta = inspect(&input).context("Failed to inspect document")?;

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&meta).context("Failed to serialize metadata")?
                );
            } else {
                println!("File:        {}", input.display());
                println!("Paragraphs:  {}", meta.paragraph_count);
                println!("Words:       {}", meta.word_count);
            }
        }

        Command::Resize {
            input,
            width,
            height,
            keep_aspect,
            output,
        } => {
            let mut img = ImageFile::open(&input).context("Failed to open image")?;
            let (ow, oh) = img.dimensions();
            let saved = img
                .resize(width, height, output.as_deref(), keep_aspect)
                .context("Resize failed")?;
            if !cli.quiet {
                eprintln!(
                    "{}  {ow}x{oh} → requested {width}x{height}  →  {}",
                    green("✔"),
                    bold(&saved.display().to_string()),
                );
            }
        }

        Command::ConvertImage {
            input,
            format,
            output,
        } => {
            let mut img = ImageFile::open(&input).context("Failed to open image")?;
            let saved = img
                .convert_format(&format, output.as_deref())
                .context("Format conversion failed")?;
            if !cli.quiet {
                eprintln!("{}  →  {}", green("✔"), bold(&saved.display().to_string()));
            }
        }
    }

    Ok(())
}

/// Map CLI flags to `ConversionConfig`.
fn build_config(
    no_strip_preamble: bool,
    preamble_pattern: Option<String>,
    no_grouping: bool,
) -> Result<ConversionConfig> {
    let mut builder = ConversionConfig::builder()
        .strip_preamble(!no_strip_preamble)
        .group_paragraphs(!no_grouping);

    if let Some(ref pattern) = preamble_pattern {
        builder = builder
            .preamble_pattern(pattern)
            .context("Invalid preamble pattern")?;
    }

    builder.build().context("Invalid configuration")
}
