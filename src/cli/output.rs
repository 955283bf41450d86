pub use admit_core::format::OutputFormat;

/// Parse `--format`, accepting `human` or `json`
pub fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("json"), Ok(OutputFormat::Json));
        assert_eq!(parse_format("Human"), Ok(OutputFormat::Human));
        assert!(parse_format("records").unwrap_err().contains("records"));
    }
}
