//! Process command - extract fields from a single policy document.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use mipx_core::{ExtractionRecord, ExtractionReport, Field, PolicyExtractor, PolicyParser};

use super::{load_config, read_document};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF or text, `-` for stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// List fields that were not found
    #[arg(long)]
    show_missing: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// File extension for outputs written in this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);

    pb.set_message("Reading document...");
    let text = read_document(&args.input, &config.pdf)?;
    debug!("Read {} characters", text.chars().count());

    pb.set_message("Extracting fields...");
    let parser = PolicyParser::with_config(config.extraction.clone());
    let report = parser.extract_with_report(&text);

    pb.finish_and_clear();

    let output = format_record(&report.record, args.format, args.pretty, args.show_missing)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        print!("{}", output);
    }

    if args.show_missing {
        print_missing(&report);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn print_missing(report: &ExtractionReport) {
    eprintln!(
        "{} Found {} of {} fields",
        style("ℹ").blue(),
        report.found_fields,
        report.record.len()
    );
    if !report.missing_fields.is_empty() {
        let names: Vec<&str> = report.missing_fields.iter().map(|f| f.key()).collect();
        eprintln!("{} {}", style("Missing:").yellow(), names.join(", "));
    }
}

/// Render a record in the requested format. Output always ends with a newline.
pub fn format_record(
    record: &ExtractionRecord,
    format: OutputFormat,
    pretty: bool,
    show_missing: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let json = if pretty {
                serde_json::to_string_pretty(record)?
            } else {
                serde_json::to_string(record)?
            };
            Ok(format!("{}\n", json))
        }
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record, show_missing)),
    }
}

fn format_csv(record: &ExtractionRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(Field::ALL.iter().map(|f| f.key()))?;
    wtr.write_record(record.iter().map(|(_, value)| value))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &ExtractionRecord, show_missing: bool) -> String {
    let width = Field::ALL.iter().map(|f| f.key().len()).max().unwrap_or(0);
    let mut output = String::new();

    for (field, value) in record.iter() {
        if value.is_empty() && !show_missing {
            continue;
        }
        let shown = if value.is_empty() { "-" } else { value };
        output.push_str(&format!("{:<width$}  {}\n", field.key(), shown, width = width));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ExtractionRecord {
        let mut record = ExtractionRecord::new();
        record.set(Field::PolicyNo, "MH12AB3456");
        record.set(Field::CustomerName, "Ravi, Kumar");
        record
    }

    #[test]
    fn test_json_is_total() {
        let output = format_record(&sample(), OutputFormat::Json, false, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value.as_object().unwrap().len(), Field::ALL.len());
        assert_eq!(value["POLICY_NO"], "MH12AB3456");
    }

    #[test]
    fn test_csv_has_header_and_row() {
        let output = format_record(&sample(), OutputFormat::Csv, false, false).unwrap();
        let mut lines = output.lines();
        assert!(lines.next().unwrap().starts_with("BROKER_NAME,CC,CGST"));
        assert!(lines.next().unwrap().contains("\"Ravi, Kumar\""));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_text_hides_missing_unless_asked() {
        let output = format_record(&sample(), OutputFormat::Text, false, false).unwrap();
        assert_eq!(output.lines().count(), 2);

        let output = format_record(&sample(), OutputFormat::Text, false, true).unwrap();
        assert_eq!(output.lines().count(), Field::ALL.len());
        assert!(output.contains("BROKER_NAME"));
    }
}
