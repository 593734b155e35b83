//! CLI tool for rowmerge - merges the frozen column of a CSV table and outputs JSON
//!
//! Usage:
//!   rowmerge_cli <input.csv>                         # Plan for page 0 to stdout
//!   rowmerge_cli <input.csv> --page-length all       # Merge across every row
//!   rowmerge_cli <input.tsv> --tsv --header -o out.json

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use rowmerge::csv::{parse_delimited, split_header, Delimiter};
use rowmerge::table::TableView;
use rowmerge::{MergeConfig, MergePlan, PageLength, Result, SortKey};

/// Merge duplicate frozen-column cells of a delimited table
#[derive(Parser, Debug)]
#[command(name = "rowmerge_cli")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input CSV (or TSV with --tsv)
    input: PathBuf,

    /// Parse input as tab-separated
    #[arg(long)]
    tsv: bool,

    /// Treat the first row as a header
    #[arg(long)]
    header: bool,

    /// JSON config file (MergeConfig); flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sort key `COL[:asc|desc]`, repeatable
    #[arg(long = "sort", value_parser = SortKey::parse)]
    sort: Vec<SortKey>,

    /// Rows per page, or `all`
    #[arg(long, value_parser = PageLength::parse)]
    page_length: Option<PageLength>,

    /// Zero-based page to draw
    #[arg(long, default_value_t = 0)]
    page: usize,

    /// Default row height in pixels
    #[arg(long)]
    row_height: Option<f32>,

    /// Write JSON to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    header: Option<Vec<String>>,
    page: usize,
    page_count: usize,
    plan: MergePlan,
}

impl Cli {
    fn load_config(&self) -> Result<MergeConfig> {
        let mut config = match &self.config {
            Some(path) => MergeConfig::from_json(&fs::read_to_string(path)?)?,
            None => MergeConfig::default(),
        };
        if !self.sort.is_empty() {
            config.sort = self.sort.clone();
        }
        if let Some(len) = self.page_length {
            config.page_length = len;
        }
        if let Some(h) = self.row_height {
            config.row_height = h;
        }
        config.validate()?;
        Ok(config)
    }

    fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        let data = fs::read(&self.input)?;
        let delim = if self.tsv {
            Delimiter::Tab
        } else {
            Delimiter::Comma
        };
        let rows = parse_delimited(&data, delim);
        let (header, rows) = if self.header {
            split_header(rows)
        } else {
            (None, rows)
        };

        let mut table = TableView::new(rows, config)?;
        table.set_page(self.page);
        let (_, plan) = table.redraw()?;

        let report = Report {
            header,
            page: table.page(),
            page_count: table.page_count(),
            plan,
        };
        let json = serde_json::to_string_pretty(&report)?;

        match &self.output {
            Some(path) => {
                fs::write(path, &json)?;
                eprintln!("Written: {}", path.display());
            }
            None => {
                let mut stdout = io::stdout();
                stdout.write_all(json.as_bytes())?;
                writeln!(stdout)?;
            }
        }
        Ok(())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
