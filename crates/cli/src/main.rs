use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use image::ImageFormat;

use blurrify_core::session::edit_command::EditCommand;
use blurrify_core::session::edit_session::EditSession;
use blurrify_core::shared::constants::IMAGE_EXTENSIONS;

/// Blur, pixelate and crop rectangular regions of an image.
///
/// Edits run in the order given; a failing edit aborts without writing output.
#[derive(Parser)]
#[command(name = "blurrify")]
struct Cli {
    /// Input image file.
    input: PathBuf,

    /// Output image file.
    output: PathBuf,

    /// Edit to apply, repeatable: blur:L,T,R,B[:RADIUS], pixelate:L,T,R,B[:CELL],
    /// crop:L,T,R,B or reset.
    #[arg(short, long = "edit", value_name = "EDIT")]
    edits: Vec<EditCommand>,

    /// Output format (png, jpg, ...). Defaults to the output file's extension.
    #[arg(long)]
    format: Option<String>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;
    let format = cli.format.as_deref().map(parse_format).transpose()?;

    let mut session = EditSession::default();
    session.open(&cli.input)?;

    for (i, edit) in cli.edits.iter().enumerate() {
        log::debug!("Edit {}/{}: {edit}", i + 1, cli.edits.len());
        edit.apply(&mut session)
            .map_err(|e| format!("edit '{edit}' failed: {e}"))?;
    }

    session.save(&cli.output, format)?;
    log::info!(
        "Applied {} edit(s); output written to {}",
        cli.edits.len(),
        cli.output.display()
    );
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if cli.format.is_none() && !is_image(&cli.output) {
        return Err(format!(
            "Cannot infer output format from {}; pass --format (one of: {})",
            cli.output.display(),
            IMAGE_EXTENSIONS.join(", ")
        )
        .into());
    }
    Ok(())
}

fn parse_format(name: &str) -> Result<ImageFormat, String> {
    let ext = name.trim_start_matches('.').to_lowercase();
    if !IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        return Err(format!(
            "Format must be one of: {}, got '{name}'",
            IMAGE_EXTENSIONS.join(", ")
        ));
    }
    ImageFormat::from_extension(&ext).ok_or_else(|| format!("Unsupported format '{name}'"))
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
