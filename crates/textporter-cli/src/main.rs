mod commands;
mod logging;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "textporter",
    version,
    about = "Extract speaker dialogue from script PDFs and render it with per-speaker styles"
)]
struct Cli {
    /// Engine settings (TOML): default style profile and layout offsets
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print log output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a page-range expression and print the page numbers
    Pages {
        /// Expression such as "5", "1-5" or "1,3,5"
        expr: String,
    },
    /// Extract speaker dialogue from a PDF
    Extract {
        /// Path to the PDF file
        pdf_file: PathBuf,

        /// Pages to read: "5", "1-5", "1,3,5"
        #[arg(short, long)]
        pages: String,

        /// Style file to start from (.json snapshot or flat style file)
        #[arg(short, long, value_name = "FILE")]
        styles: Option<PathBuf>,

        /// Save the resulting styles (.json keeps dialogue lines)
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Extract dialogue and write one SVG layer per page
    Render {
        /// Path to the PDF file
        pdf_file: PathBuf,

        /// Pages to render: "5", "1-5", "1,3,5"
        #[arg(short, long)]
        pages: String,

        /// Style file with speaker styles (.json snapshot or flat style file)
        #[arg(short, long, value_name = "FILE")]
        styles: Option<PathBuf>,

        /// Directory to write page SVGs into
        #[arg(long, value_name = "DIR")]
        out_dir: PathBuf,
    },
    /// Inspect and edit a style file
    Styles {
        #[command(subcommand)]
        action: StylesAction,
    },
}

#[derive(Subcommand)]
enum StylesAction {
    /// List speakers in a style file
    List {
        file: PathBuf,

        /// Include the "default" style
        #[arg(long)]
        all: bool,
    },
    /// Show the resolved style and dialogue of one speaker
    Show { file: PathBuf, speaker: String },
    /// Create or update a speaker's style
    Set {
        file: PathBuf,
        speaker: String,

        #[arg(long)]
        font: Option<String>,

        #[arg(long)]
        size: Option<u32>,

        /// "R,G,B" or "[R,G,B]"
        #[arg(long)]
        color: Option<String>,
    },
    /// Remove a speaker's style ("default" cannot be removed)
    Remove { file: PathBuf, speaker: String },
    /// Convert between the flat and snapshot formats
    Convert { input: PathBuf, output: PathBuf },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = commands::load_engine_config(cli.config.as_deref()).and_then(|config| {
        match cli.command {
            Commands::Pages { expr } => commands::pages::run(&expr),
            Commands::Extract {
                pdf_file,
                pages,
                styles,
                out,
                output,
            } => commands::extract::run(&config, pdf_file, pages, styles, out, &output),
            Commands::Render {
                pdf_file,
                pages,
                styles,
                out_dir,
            } => commands::render::run(&config, pdf_file, pages, styles, out_dir),
            Commands::Styles { action } => match action {
                StylesAction::List { file, all } => commands::styles::list(&config, &file, all),
                StylesAction::Show { file, speaker } => {
                    commands::styles::show(&config, &file, &speaker)
                }
                StylesAction::Set {
                    file,
                    speaker,
                    font,
                    size,
                    color,
                } => commands::styles::set(&config, &file, &speaker, font, size, color),
                StylesAction::Remove { file, speaker } => {
                    commands::styles::remove(&config, &file, &speaker)
                }
                StylesAction::Convert { input, output } => {
                    commands::styles::convert(&config, &input, &output)
                }
            },
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
