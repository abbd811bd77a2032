//! `css-to-ts`: writes the DSFR color decision table for a stylesheet.
//!
//! The binary is a thin wrapper around [`run`] so the whole flow can be
//! driven from tests.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use dsfr_tokens::{generate, EmitOptions, Report, COLOR_DECISION_AND_CORRESPONDING_OPTIONS};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Clone)]
#[command(name = "css-to-ts", version, about)]
pub struct Args {
    /// Stylesheet declaring the color options and decisions.
    #[arg(long, short = 'i', env = "DSFR_CSS_INPUT", value_name = "FILE")]
    pub input: PathBuf,

    /// Where to write the TypeScript module. Prints to stdout if omitted.
    #[arg(long, short = 'o', env = "DSFR_TS_OUTPUT", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Name of the exported constant.
    #[arg(long, default_value = COLOR_DECISION_AND_CORRESPONDING_OPTIONS)]
    pub const_name: String,

    /// Spaces per indentation level, 0 for compact output.
    #[arg(long, default_value_t = 4)]
    pub indent: usize,

    /// Fail if the output file differs from what would be generated.
    #[arg(long, default_value_t = false, requires = "output")]
    pub check: bool,

    /// Fail if a decision references an option that does not exist.
    #[arg(long, default_value_t = false)]
    pub deny_unmatched: bool,

    /// More logging (-v info, -vv debug, -vvv trace). RUST_LOG wins.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions::new()
            .with_const_name(self.const_name.clone())
            .with_indent(self.indent)
    }
}

/// Install a stderr subscriber. Falls back to a level derived from `-v`
/// when `RUST_LOG` is unset or invalid.
pub fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Generate, then write to `--output`, compare against it (`--check`), or
/// print to `stdout`.
pub fn run(args: &Args, stdout: &mut impl Write) -> Result<Report> {
    let css = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let generation = generate(&css, &args.emit_options())
        .with_context(|| format!("failed to generate code for {}", args.input.display()))?;
    let report = generation.report;

    for diagnostic in &report.diagnostics {
        warn!("{}: {}", args.input.display(), diagnostic);
    }
    for unmatched in &report.unmatched {
        warn!(
            decision = %unmatched.css_var_name,
            option = %unmatched.option_css_var_name,
            "decision references an unknown option"
        );
    }
    if args.deny_unmatched && !report.unmatched.is_empty() {
        let names: Vec<&str> = report
            .unmatched
            .iter()
            .map(|u| u.css_var_name.as_str())
            .collect();
        bail!(
            "{} decision(s) reference unknown options: {}",
            names.len(),
            names.join(", ")
        );
    }

    match &args.output {
        Some(output) if args.check => {
            let existing = fs::read_to_string(output)
                .with_context(|| format!("failed to read {}", output.display()))?;
            if existing != generation.code {
                bail!(
                    "{} is out of date, regenerate it from {}",
                    output.display(),
                    args.input.display()
                );
            }
            info!(output = %output.display(), "up to date");
        }
        Some(output) => {
            fs::write(output, &generation.code)
                .with_context(|| format!("failed to write {}", output.display()))?;
            info!(output = %output.display(), emitted = report.emitted, "wrote");
        }
        None => {
            stdout
                .write_all(generation.code.as_bytes())
                .context("failed to write to stdout")?;
        }
    }

    Ok(report)
}
