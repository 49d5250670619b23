//! DEM table loading
//!
//! EBTEL-2fluid emits whitespace-separated numeric tables, one row per
//! temperature bin: column 0 is log temperature, later columns hold log DEM
//! values per component (column 2 is the coronal DEM). Lines starting with
//! `#` are comments.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use demscan_core::error::CurveError;
use demscan_core::model::Curve;

/// Errors from reading or slicing a DEM table
#[derive(Debug)]
pub enum LoadError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        line: usize,
        token: String,
    },
    RaggedRow {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },
    MissingColumn {
        path: PathBuf,
        column: usize,
        width: usize,
    },
    Curve {
        path: PathBuf,
        source: CurveError,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            LoadError::Parse { path, line, token } => {
                write!(
                    f,
                    "{}:{line}: cannot parse '{token}' as a number",
                    path.display()
                )
            }
            LoadError::RaggedRow {
                path,
                line,
                expected,
                found,
            } => {
                write!(
                    f,
                    "{}:{line}: row has {found} columns, expected {expected}",
                    path.display()
                )
            }
            LoadError::MissingColumn {
                path,
                column,
                width,
            } => {
                write!(
                    f,
                    "{}: no column {column} in a {width}-column table",
                    path.display()
                )
            }
            LoadError::Curve { path, source } => {
                write!(f, "{}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Curve { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A parsed numeric table, stored column-major.
#[derive(Debug, Clone)]
pub struct DemTable {
    path: PathBuf,
    columns: Vec<Vec<f64>>,
}

impl DemTable {
    /// Load a table from disk.
    ///
    /// Blank lines and `#` comments are skipped; every remaining row must
    /// have the same column count. `inf`/`-inf` tokens parse as the
    /// infinities the analyzer's bound walk expects.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut columns: Vec<Vec<f64>> = Vec::new();
        for (lineno, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut row = Vec::new();
            for token in line.split_whitespace() {
                let value: f64 = token.parse().map_err(|_| LoadError::Parse {
                    path: path.to_path_buf(),
                    line: lineno + 1,
                    token: token.to_string(),
                })?;
                row.push(value);
            }

            if columns.is_empty() {
                columns = row.into_iter().map(|v| vec![v]).collect();
            } else {
                if row.len() != columns.len() {
                    return Err(LoadError::RaggedRow {
                        path: path.to_path_buf(),
                        line: lineno + 1,
                        expected: columns.len(),
                        found: row.len(),
                    });
                }
                for (col, value) in columns.iter_mut().zip(row) {
                    col.push(value);
                }
            }
        }

        Ok(Self {
            path: path.to_path_buf(),
            columns,
        })
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of data rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn column(&self, index: usize) -> Option<&[f64]> {
        self.columns.get(index).map(Vec::as_slice)
    }

    /// Slice out the temperature axis (column 0) and one DEM column as a
    /// curve for the analyzer.
    pub fn curve(&self, dem_column: usize) -> Result<Curve, LoadError> {
        let missing = |column| LoadError::MissingColumn {
            path: self.path.clone(),
            column,
            width: self.width(),
        };
        let temp = self.column(0).ok_or_else(|| missing(0))?;
        let dem = self.column(dem_column).ok_or_else(|| missing(dem_column))?;

        Curve::new(temp.to_vec(), dem.to_vec()).map_err(|source| LoadError::Curve {
            path: self.path.clone(),
            source,
        })
    }
}
