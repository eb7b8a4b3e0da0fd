// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Version information command

use std::io::Write;

use crate::build_info::BuildMetadata;
use crate::cli::args::OutputFormat;
use crate::error::Result;

/// Execute the version command for the running binary
pub fn execute(format: OutputFormat, out: &mut impl Write) -> Result<()> {
    write_metadata(&BuildMetadata::current(), format, out)
}

/// Write `meta` in the requested format
pub fn write_metadata(
    meta: &BuildMetadata,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    tracing::debug!(?format, version = meta.version, "printing version");

    match format {
        OutputFormat::Text => writeln!(out, "{}", meta)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(meta)?)?,
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(meta: &BuildMetadata, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_metadata(meta, format, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    const RELEASE: BuildMetadata = BuildMetadata {
        version: "v1.0.0",
        commit: "deadbee",
        build_date: "2025-01-02T03:04:05Z",
    };

    #[test]
    fn test_text_output_is_three_lines() {
        let output = render(&RELEASE, OutputFormat::Text);
        assert_eq!(
            output,
            "socrates v1.0.0\n  commit: deadbee\n  built:  2025-01-02T03:04:05Z\n"
        );
        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn test_text_output_is_deterministic() {
        assert_eq!(
            render(&RELEASE, OutputFormat::Text),
            render(&RELEASE, OutputFormat::Text)
        );
    }

    #[test]
    fn test_json_output() {
        let output = render(&RELEASE, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["version"], "v1.0.0");
        assert_eq!(value["commit"], "deadbee");
        assert_eq!(value["buildDate"], "2025-01-02T03:04:05Z");
    }

    #[test]
    fn test_execute_uses_current_metadata() {
        let mut buf = Vec::new();
        execute(OutputFormat::Text, &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output, format!("{}\n", BuildMetadata::current()));
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_is_io_error() {
        let err = write_metadata(&RELEASE, OutputFormat::Text, &mut ClosedPipe).unwrap_err();
        assert!(matches!(err, crate::error::SocratesError::Io(_)));
    }
}
