//! csvgrid CLI - scripted editing of CSV files

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use csvgrid::prelude::*;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "csvgrid")]
#[command(author, version, about = "Edit CSV files as a grid with undo/redo")]
struct Cli {
    /// Log debug output to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show information about a CSV file
    Info {
        /// Input CSV file
        input: PathBuf,
    },

    /// Print the grid as CSV or JSON
    Show {
        /// Input CSV file
        input: PathBuf,

        /// Print rows as a JSON array of arrays
        #[arg(long)]
        json: bool,
    },

    /// Apply edit commands and save the result
    Edit {
        /// Input CSV file
        input: PathBuf,

        /// Edit command, e.g. "set 1 0 value" or "delete-row 2" (repeatable)
        #[arg(short = 'c', long = "command")]
        commands: Vec<String>,

        /// File with one edit command per line, applied before --command
        #[arg(short, long)]
        script: Option<PathBuf>,

        /// Save through this file; when missing, the result is downloaded into --dir
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// File name for the download (default: the input file name)
        #[arg(short, long)]
        name: Option<String>,

        /// Download directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Info { input } => show_info(&input),
        Commands::Show { input, json } => show_grid(&input, json),
        Commands::Edit {
            input,
            commands,
            script,
            output,
            name,
            dir,
        } => edit(&input, &commands, script.as_deref(), output.as_deref(), name, &dir),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .with(filter)
        .init();
}

fn open(input: &Path) -> Result<Editor> {
    let mut editor = Editor::new();
    editor
        .open_csv(input)
        .with_context(|| format!("Failed to open '{}'", input.display()))?;
    Ok(editor)
}

fn show_info(input: &Path) -> Result<()> {
    let editor = open(input)?;
    let grid = editor.grid();

    println!("File: {}", input.display());
    println!("Rows: {} (plus header)", grid.data_rows().len());
    println!("Columns: {}", grid.column_count());
    if let Some(header) = grid.header() {
        println!();
        for (i, name) in header.iter().enumerate() {
            println!("  {}\t{}", i, name);
        }
    }

    Ok(())
}

fn show_grid(input: &Path, json: bool) -> Result<()> {
    let editor = open(input)?;

    let text = if json {
        let mut text =
            serde_json::to_string_pretty(editor.grid()).context("Failed to encode JSON")?;
        text.push('\n');
        text
    } else {
        editor.export_csv().context("Failed to serialize CSV")?
    };

    io::stdout()
        .write_all(text.as_bytes())
        .context("Failed to write to stdout")?;
    Ok(())
}

fn edit(
    input: &Path,
    commands: &[String],
    script: Option<&Path>,
    output: Option<&Path>,
    name: Option<String>,
    dir: &Path,
) -> Result<()> {
    let mut editor = open(input)?;

    let mut lines = Vec::new();
    if let Some(script) = script {
        let text = std::fs::read_to_string(script)
            .with_context(|| format!("Failed to read script '{}'", script.display()))?;
        lines.extend(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_string),
        );
    }
    lines.extend(commands.iter().cloned());

    for (i, line) in lines.iter().enumerate() {
        let command: EditCommand = line
            .parse()
            .with_context(|| format!("Command {} is invalid", i + 1))?;
        editor
            .apply(command)
            .with_context(|| format!("Command {} ('{}') failed", i + 1, line))?;
    }

    let file_name = name.unwrap_or_else(|| editor.suggested_file_name().to_string());
    let mut primary = save_handle(output);
    let mut fallback = DownloadSink::new(dir);

    match editor
        .save_csv(Some(file_name.as_str()), &mut primary, &mut fallback)
        .context("Failed to save")?
    {
        ExportOutcome::Written { sink, file_name } => {
            let target = match output {
                Some(path) if sink == "save" => path.display().to_string(),
                _ => fallback.dir().join(&file_name).display().to_string(),
            };
            eprintln!(
                "Applied {} commands, wrote {} rows to '{}'",
                lines.len(),
                editor.grid().row_count(),
                target
            );
        }
        ExportOutcome::Cancelled => eprintln!("Save cancelled"),
        ExportOutcome::NothingToSave => bail!("Grid has no cells, nothing to save"),
    }

    Ok(())
}

/// Open the save target; a target that cannot be created leaves the save
/// sink unavailable so the result is downloaded instead.
fn save_handle(output: Option<&Path>) -> SaveHandleSink<File> {
    let Some(path) = output else {
        return SaveHandleSink::unavailable();
    };
    match File::create(path) {
        Ok(file) => SaveHandleSink::new(file),
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "cannot open save target, downloading instead"
            );
            SaveHandleSink::unavailable()
        }
    }
}
