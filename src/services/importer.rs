//! Conversion of raw vendor color lists into catalog records.
//!
//! | format    | input                                               |
//! |-----------|-----------------------------------------------------|
//! | `names`   | CSV `name,hex` with a header line                   |
//! | `ral`     | `;`-separated CSV `_;hue;lightness;chroma;r;g;b;code` with a header line |
//! | `pantone` | whitespace-separated `r g b code`, one per line     |
//! | `ncs`     | `$name: #hex`, one per line, `$` optional            |
//!
//! Lines that cannot be read are skipped with a warning; the import as a whole
//! only fails on I/O or serialization errors.

use std::fs;
use std::path::{Path, PathBuf};

use color_core::{CatalogRecord, Srgb};
use thiserror::Error;

/// Raw source format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ImportFormat {
    Names,
    Ral,
    Pantone,
    Ncs,
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Outcome of one import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub written: usize,
    pub skipped: usize,
}

/// Records parsed from one source, plus the count of unreadable lines
#[derive(Debug, Default)]
pub struct Parsed {
    pub records: Vec<CatalogRecord>,
    pub skipped: usize,
}

impl Parsed {
    fn skip(&mut self, format: ImportFormat, line_no: usize, line: &str, reason: &str) {
        tracing::warn!(?format, line = line_no, content = line, reason, "Skipping line");
        self.skipped += 1;
    }
}

/// Parse a whole source text.
pub fn parse(format: ImportFormat, input: &str) -> Parsed {
    let mut parsed = Parsed::default();
    let skip_header = matches!(format, ImportFormat::Names | ImportFormat::Ral);

    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || (skip_header && idx == 0) {
            continue;
        }
        let result = match format {
            ImportFormat::Names => parse_names_line(line),
            ImportFormat::Ral => parse_ral_line(line),
            ImportFormat::Pantone => parse_pantone_line(line),
            ImportFormat::Ncs => parse_ncs_line(line),
        };
        match result {
            Ok(record) => parsed.records.push(record),
            Err(reason) => parsed.skip(format, idx + 1, line, &reason),
        }
    }

    parsed
}

/// Read `input`, convert it and write the JSON records to `output`.
pub fn import_file(
    format: ImportFormat,
    input: &Path,
    output: &Path,
) -> Result<ImportSummary, ImportError> {
    let text = fs::read_to_string(input).map_err(|source| ImportError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let parsed = parse(format, &text);
    let json = serde_json::to_string_pretty(&parsed.records)?;
    fs::write(output, json).map_err(|source| ImportError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    tracing::info!(
        ?format,
        input = %input.display(),
        output = %output.display(),
        written = parsed.records.len(),
        skipped = parsed.skipped,
        "Import complete"
    );

    Ok(ImportSummary {
        written: parsed.records.len(),
        skipped: parsed.skipped,
    })
}

fn parse_names_line(line: &str) -> Result<CatalogRecord, String> {
    let fields = split_fields(line, ',');
    let [name, hex, ..] = fields.as_slice() else {
        return Err("expected name,hex".to_string());
    };
    if name.is_empty() {
        return Err("empty name".to_string());
    }
    let color: Srgb = hex.parse().map_err(|e| format!("{e}"))?;
    Ok(CatalogRecord::from_srgb(name.as_str(), color, true))
}

fn parse_ral_line(line: &str) -> Result<CatalogRecord, String> {
    let fields = split_fields(line, ';');
    if fields.len() < 8 {
        return Err(format!("expected 8 fields, got {}", fields.len()));
    }
    let color = channels(&fields[4], &fields[5], &fields[6])?;
    let code = fields[7].trim();
    if code.is_empty() {
        return Err("empty code".to_string());
    }
    Ok(CatalogRecord::from_srgb(code, color, false))
}

fn parse_pantone_line(line: &str) -> Result<CatalogRecord, String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [r, g, b, code] = parts.as_slice() else {
        return Err(format!("expected 4 fields, got {}", parts.len()));
    };
    let color = channels(r, g, b)?;
    Ok(CatalogRecord::from_srgb(*code, color, false))
}

fn parse_ncs_line(line: &str) -> Result<CatalogRecord, String> {
    let line = line.strip_prefix('$').unwrap_or(line).trim();
    let Some((name, hex)) = line.split_once(':') else {
        return Err("expected name: #hex".to_string());
    };
    let name = name.trim();
    if name.is_empty() {
        return Err("empty name".to_string());
    }
    // trailing `;` from SCSS variable files
    let hex = hex.trim().trim_end_matches(';');
    let color: Srgb = hex.parse().map_err(|e| format!("{e}"))?;
    Ok(CatalogRecord::from_srgb(name, color, false))
}

fn channels(r: &str, g: &str, b: &str) -> Result<Srgb, String> {
    let parse = |v: &str| {
        v.trim()
            .parse::<i64>()
            .map_err(|_| format!("channel {v:?} is not an integer"))
    };
    Srgb::from_channels(parse(r)?, parse(g)?, parse(b)?).map_err(|e| e.to_string())
}

/// Split one delimited line. Double-quoted fields may contain the delimiter,
/// and `""` inside quotes is a literal quote.
fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            c if c == delimiter && !in_quotes => {
                fields.push(std::mem::take(&mut field).trim().to_string());
            }
            c => field.push(c),
        }
    }
    fields.push(field.trim().to_string());
    fields
}
