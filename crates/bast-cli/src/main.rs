mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bast",
    version,
    about = "Generate BAST handover document data from spreadsheet records"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Spell a number or date in Indonesian words
    Spell {
        #[command(subcommand)]
        what: SpellAction,
    },
    /// Fill the BAST form for every record of a source workbook
    Fill {
        /// Path to the source XLSX file
        source_file: PathBuf,

        /// Custom JSON form definition
        #[arg(short, long, value_name = "FILE", conflicts_with = "preset")]
        form: Option<PathBuf>,

        /// Predefined form definition (default: bast-master)
        #[arg(short, long, value_name = "NAME")]
        preset: Option<String>,

        /// Source sheet name (default: first sheet)
        #[arg(short, long)]
        sheet: Option<String>,

        /// Tool configuration file (JSON)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the fill plan to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Compute highlight regions for a target string in a reference PDF
    Highlight {
        /// Path to the reference PDF
        pdf_file: PathBuf,

        /// Exact text to look for (e.g. a site ID)
        target: String,

        /// Tool configuration file (JSON)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Manage and inspect form definitions
    Forms {
        #[command(subcommand)]
        action: FormsAction,
    },
}

#[derive(Subcommand)]
enum SpellAction {
    /// Spell a whole number (0 to 999999)
    Number { value: u64 },
    /// Spell a YYYY-MM-DD date
    Date {
        date: String,

        /// Facet: day, date, month, year or full
        #[arg(short, long, default_value = "full")]
        facet: String,
    },
}

#[derive(Subcommand)]
enum FormsAction {
    /// List predefined form definitions
    List,
    /// Show the cell mapping of a preset
    Show {
        /// Preset name (e.g., "bast-master")
        preset: String,
    },
    /// Validate a custom form definition file
    Validate {
        /// Path to JSON form file
        file: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Spell { what } => match what {
            SpellAction::Number { value } => commands::spell::number(value),
            SpellAction::Date { date, facet } => commands::spell::date(&date, &facet),
        },
        Commands::Fill {
            source_file,
            form,
            preset,
            sheet,
            config,
            output,
            out,
        } => commands::fill::run(commands::fill::FillArgs {
            source_file,
            form,
            preset,
            sheet,
            config,
            output_format: output,
            out,
        }),
        Commands::Highlight {
            pdf_file,
            target,
            config,
            output,
        } => commands::highlight::run(pdf_file, &target, config, &output),
        Commands::Forms { action } => match action {
            FormsAction::List => commands::forms::list(),
            FormsAction::Show { preset } => commands::forms::show(&preset),
            FormsAction::Validate { file } => commands::forms::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
