// src/csv.rs

// Delimiter-separated output. Fields are quoted only when they have to be.

use std::io::{self, Write};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Delim {
    #[default]
    Csv,
    Tsv,
}

impl Delim {
    pub fn as_char(&self) -> char {
        match self {
            Delim::Csv => ',',
            Delim::Tsv => '\t',
        }
    }

    pub fn ext(&self) -> &'static str {
        match self {
            Delim::Csv => "csv",
            Delim::Tsv => "tsv",
        }
    }
}

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n')
}

pub fn write_row<W: Write>(w: &mut W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for field in row {
        if !first {
            write!(w, "{sep}")?;
        }
        first = false;
        if needs_quotes(field, sep) {
            write!(w, "\"{}\"", field.replace('"', "\"\""))?;
        } else {
            write!(w, "{field}")?;
        }
    }
    writeln!(w)
}

/// Render rows (with optional header row) to a single string, for --print.
pub fn rows_to_string(rows: &[Vec<String>], headers: &Option<Vec<String>>, sep: char) -> String {
    let mut buf = Vec::new();
    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for row in rows {
        let _ = write_row(&mut buf, row, sep);
    }
    String::from_utf8(buf).unwrap_or_default()
}
