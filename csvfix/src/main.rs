//! csvfix CLI - rewrite scientific-notation amounts in ./holders.csv
//!
//! # Commands
//!
//! ```bash
//! csvfix json      # Print the rewritten table as JSON records
//! csvfix table     # Print the rewritten table as aligned text
//! csvfix schema    # Show inferred column types (no rewrite)
//! ```
//!
//! The input file (`./holders.csv`) and the rewritten column (`Owed`) are
//! fixed. Set `RUST_LOG=info` to see progress on stderr.

use clap::{Parser, Subcommand};
use csvfix::{OutputFormat, Pipeline};

#[derive(Parser)]
#[command(name = "csvfix")]
#[command(version)]
#[command(
    about = "Rewrite scientific-notation amounts in ./holders.csv as fixed-point values",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the rewritten table as a JSON array of records
    Json {
        /// Indent the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print the rewritten table as aligned text
    Table,

    /// Show the inferred type of every column
    Schema,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let pipeline = Pipeline::default();

    let result = match cli.command {
        Commands::Json { pretty } => cmd_json(&pipeline, pretty),
        Commands::Table => cmd_run(&pipeline, OutputFormat::Table),
        Commands::Schema => cmd_schema(&pipeline),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_json(pipeline: &Pipeline, pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !pretty {
        return cmd_run(pipeline, OutputFormat::Json);
    }

    let processed = pipeline.process()?;
    println!("{}", csvfix::to_json_records_pretty(&processed.table)?);
    Ok(())
}

fn cmd_run(pipeline: &Pipeline, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let output = pipeline.run(format)?;
    println!("{}", output);
    Ok(())
}

fn cmd_schema(pipeline: &Pipeline) -> Result<(), Box<dyn std::error::Error>> {
    let table = pipeline.load()?;

    let name_width = table
        .columns()
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(0);

    for column in table.columns() {
        let marker = if column.name == pipeline.column {
            "  <- rewritten"
        } else {
            ""
        };
        println!("{:<name_width$}  {}{}", column.name, column.dtype, marker);
    }
    println!("{} rows", table.row_count());
    Ok(())
}
