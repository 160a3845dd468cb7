// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Printbridge — command-line front end.
//
// Entry point. Initialises logging, loads the backend configuration and runs
// one of the three operations, printing results as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use printbridge_core::config::BackendConfig;
use printbridge_core::error::Result;
use printbridge_core::options::PrintOptions;
use printbridge_print::PrintBridge;

#[derive(Parser)]
#[command(
    name = "printbridge",
    about = "List printers and print PDFs through the native OS backend",
    version
)]
struct Cli {
    /// JSON file overriding backend program paths.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log at info level instead of warn (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every installed printer.
    List,
    /// Show the system default printer (null when none).
    Default,
    /// Print a PDF file.
    Print(PrintArgs),
}

#[derive(Args)]
struct PrintArgs {
    /// PDF file to print.
    file: PathBuf,

    /// Target printer; the system default when omitted.
    #[arg(short = 'd', long)]
    printer: Option<String>,

    /// Page range in backend syntax, e.g. 1-3,5.
    #[arg(long)]
    pages: Option<String>,

    /// odd | even
    #[arg(long)]
    subset: Option<String>,

    /// portrait | landscape
    #[arg(long)]
    orientation: Option<String>,

    /// noscale | shrink | fit
    #[arg(long)]
    scale: Option<String>,

    /// Force grayscale (true) or colour (false).
    #[arg(long)]
    monochrome: Option<bool>,

    /// duplex | duplexshort | duplexlong | simplex
    #[arg(long)]
    side: Option<String>,

    /// Input tray name.
    #[arg(long)]
    bin: Option<String>,

    /// Media name, e.g. A4.
    #[arg(long)]
    paper_size: Option<String>,

    /// Windows: run SumatraPDF silently (default true).
    #[arg(long)]
    silent: Option<bool>,

    /// Windows: show the print dialog instead.
    #[arg(long)]
    print_dialog: bool,

    /// Windows: SumatraPDF executable to use.
    #[arg(long, value_name = "PATH")]
    sumatra_pdf_path: Option<String>,

    /// Number of copies.
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    copies: Option<i64>,
}

impl From<&PrintArgs> for PrintOptions {
    fn from(args: &PrintArgs) -> Self {
        Self {
            printer: args.printer.clone(),
            pages: args.pages.clone(),
            subset: args.subset.clone(),
            orientation: args.orientation.clone(),
            scale: args.scale.clone(),
            monochrome: args.monochrome,
            side: args.side.clone(),
            bin: args.bin.clone(),
            paper_size: args.paper_size.clone(),
            silent: args.silent,
            print_dialog: args.print_dialog.then_some(true),
            sumatra_pdf_path: args.sumatra_pdf_path.clone(),
            copies: args.copies,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(kind = ?e.kind(), "command failed");
            eprintln!("printbridge: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => BackendConfig::load(path)?,
        None => BackendConfig::default(),
    };
    let bridge = PrintBridge::new().with_config(config);

    match &cli.command {
        Commands::List => {
            let printers = bridge.get_printers().await?;
            println!("{}", serde_json::to_string_pretty(&printers)?);
        }
        Commands::Default => {
            let printer = bridge.get_default_printer().await?;
            println!("{}", serde_json::to_string_pretty(&printer)?);
        }
        Commands::Print(args) => {
            bridge.print(&args.file, &PrintOptions::from(args)).await?;
            tracing::info!(file = %args.file.display(), "print job submitted");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn print_flags_map_to_options() {
        let cli = Cli::try_parse_from([
            "printbridge",
            "print",
            "report.pdf",
            "-d",
            "Office",
            "--side",
            "duplex",
            "--monochrome",
            "true",
            "-n",
            "2",
        ])
        .expect("parse");
        let Commands::Print(args) = &cli.command else {
            panic!("expected print subcommand");
        };
        let options = PrintOptions::from(args);
        assert_eq!(options.printer.as_deref(), Some("Office"));
        assert_eq!(options.side.as_deref(), Some("duplex"));
        assert_eq!(options.monochrome, Some(true));
        assert_eq!(options.copies, Some(2));
        assert_eq!(options.print_dialog, None);
        assert_eq!(options.silent, None);
    }
}
