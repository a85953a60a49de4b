use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use super::TableError;

/// Header plus string cells of a whitespace- or comma-delimited text file.
///
/// Blank lines and lines starting with `#` are skipped; the first remaining
/// line is the header.
#[derive(Debug, Clone)]
pub struct DelimitedTable {
    name: String,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    line_numbers: Vec<usize>,
}

impl DelimitedTable {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let path = path.as_ref();
        let io_error = |e: std::io::Error| TableError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        };

        let file = File::open(path).map_err(io_error)?;
        Self::from_reader(&path.display().to_string(), BufReader::new(file))
    }

    pub fn from_reader<R: Read>(name: &str, reader: BufReader<R>) -> Result<Self, TableError> {
        let mut columns: Option<Vec<String>> = None;
        let mut rows = Vec::new();
        let mut line_numbers = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| TableError::Io {
                path: name.to_string(),
                message: e.to_string(),
            })?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let cells: Vec<String> = trimmed
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|cell| !cell.is_empty())
                .map(str::to_string)
                .collect();

            match &columns {
                None => columns = Some(cells),
                Some(header) if header.len() != cells.len() => {
                    return Err(TableError::Parse {
                        table: name.to_string(),
                        line: idx + 1,
                        message: format!(
                            "expected {} fields, found {}",
                            header.len(),
                            cells.len()
                        ),
                    });
                }
                Some(_) => {
                    rows.push(cells);
                    line_numbers.push(idx + 1);
                }
            }
        }

        let columns = columns.ok_or_else(|| TableError::Shape {
            table: name.to_string(),
            message: "no header line".to_string(),
        })?;

        Ok(DelimitedTable {
            name: name.to_string(),
            columns,
            rows,
            line_numbers,
        })
    }

    pub fn parse_str(name: &str, text: &str) -> Result<Self, TableError> {
        Self::from_reader(name, BufReader::new(text.as_bytes()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_index(&self, column: &str) -> Result<usize, TableError> {
        self.columns
            .iter()
            .position(|c| c == column)
            .ok_or_else(|| TableError::MissingColumn {
                table: self.name.clone(),
                column: column.to_string(),
            })
    }

    pub fn column_str(&self, column: &str) -> Result<Vec<&str>, TableError> {
        let idx = self.column_index(column)?;
        Ok(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }

    pub fn column_f64(&self, column: &str) -> Result<Vec<f64>, TableError> {
        let idx = self.column_index(column)?;
        self.rows
            .iter()
            .zip(&self.line_numbers)
            .map(|(row, &line)| {
                row[idx].parse::<f64>().map_err(|e| TableError::Parse {
                    table: self.name.clone(),
                    line,
                    message: format!("column '{}': '{}': {}", column, row[idx], e),
                })
            })
            .collect()
    }
}
