use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Options for reading and writing matrices as delimited text.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CsvConfig {
    /// Field separator, must be a single ASCII character.
    pub delimiter: char,
    /// Whether the first line is a header. Headers are skipped on read and
    /// written as `c0,c1,...` on write.
    pub has_headers: bool,
    /// Trim surrounding whitespace from every field before parsing.
    pub trim: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_headers: false,
            trim: true,
        }
    }
}

impl CsvConfig {
    pub fn new(delimiter: char, has_headers: bool) -> Self {
        Self {
            delimiter,
            has_headers,
            ..Self::default()
        }
    }

    pub fn delimiter_byte(&self) -> Result<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(anyhow!(
                "CSV delimiter must be an ASCII character, got '{}'",
                self.delimiter
            ))
        }
    }
}

impl FromStr for CsvConfig {
    type Err = String;

    /// Parse a delimiter preset: `comma`/`csv`, `tab`/`tsv`, `semicolon`,
    /// or any single ASCII character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let delimiter = match s.to_lowercase().as_str() {
            "comma" | "csv" => ',',
            "tab" | "tsv" => '\t',
            "semicolon" => ';',
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii() => c,
                    _ => {
                        return Err(format!(
                            "Unknown delimiter: {}. Expected comma, tab, semicolon or one ASCII char",
                            s
                        ))
                    }
                }
            }
        };
        Ok(Self {
            delimiter,
            ..Self::default()
        })
    }
}
