use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output style for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    Table,
    /// Pretty-printed JSON
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "sales-report")]
#[command(about = "Aggregate sales transactions by product, region and date")]
#[command(version)]
pub struct CliArgs {
    /// Delimited sales file (header + date,product,quantity,amount,region rows)
    #[arg(long, short = 'i', value_name = "PATH", default_value = "sales_data.csv")]
    pub input: PathBuf,

    /// Field delimiter; inferred from the file extension when omitted
    #[arg(long, short = 'd', value_name = "CHAR", value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,

    /// Report format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    if s == "\\t" || s == "tab" {
        return Ok(b'\t');
    }
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(format!("delimiter must be a single ASCII character, got '{s}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_need_no_arguments() {
        let args = CliArgs::try_parse_from(["sales-report"]).unwrap();
        assert_eq!(args.input, PathBuf::from("sales_data.csv"));
        assert_eq!(args.delimiter, None);
        assert_eq!(args.format, OutputFormat::Table);
    }

    #[test]
    fn delimiter_accepts_single_ascii_or_tab() {
        assert_eq!(parse_delimiter(";"), Ok(b';'));
        assert_eq!(parse_delimiter("tab"), Ok(b'\t'));
        assert_eq!(parse_delimiter("\\t"), Ok(b'\t'));
        assert!(parse_delimiter(",,").is_err());
        assert!(parse_delimiter("").is_err());
        assert!(parse_delimiter("é").is_err());
    }

    #[test]
    fn json_format_and_input_override() {
        let args = CliArgs::try_parse_from(["sales-report", "--input", "q1.tsv", "--format", "json", "-d", "|"]).unwrap();
        assert_eq!(args.input, PathBuf::from("q1.tsv"));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.delimiter, Some(b'|'));
    }
}
