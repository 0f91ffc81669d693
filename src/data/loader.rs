use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{BoundaryPath, RawRecord};
use super::resample::Method;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File {} does not exist", .0.display())]
    MissingFile(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No valid points found in {}", .0.display())]
    EmptyBoundary(PathBuf),
}

// ---------------------------------------------------------------------------
// Parse results
// ---------------------------------------------------------------------------

/// A whitespace-delimited token that was not a valid `x,y,z` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedToken {
    /// Position of the token in the file (0-based, counting all tokens).
    pub index: usize,
    pub token: String,
}

/// Outcome of parsing a whole file's text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedRecords {
    pub records: Vec<RawRecord>,
    pub skipped: Vec<SkippedToken>,
}

/// A boundary read from disk together with its parse diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedBoundary {
    pub source: PathBuf,
    pub path: BoundaryPath,
    pub skipped: Vec<SkippedToken>,
}

impl LoadedBoundary {
    pub fn accepted(&self) -> usize {
        self.path.len()
    }

    /// File name of the source, or the whole path if it has none.
    pub fn file_name(&self) -> String {
        self.source
            .file_name()
            .unwrap_or(self.source.as_os_str())
            .to_string_lossy()
            .into_owned()
    }

    /// Methods that cannot fit this boundary because it has too few points.
    pub fn underdetermined_methods(&self) -> Vec<Method> {
        Method::ALL
            .into_iter()
            .filter(|m| self.accepted() < m.min_points())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse file text into records.
///
/// Records are separated by any whitespace; each record is `x,y,z`. A token is
/// accepted only when it has exactly three non-empty comma-separated fields
/// that all parse as `f64`. Anything else lands in `skipped`.
pub fn parse_records(text: &str) -> ParsedRecords {
    let mut parsed = ParsedRecords::default();

    for (index, token) in text.split_whitespace().enumerate() {
        match parse_record(token) {
            Some(record) => parsed.records.push(record),
            None => {
                log::warn!("Token {index} was ignored: {token}");
                parsed.skipped.push(SkippedToken {
                    index,
                    token: token.to_string(),
                });
            }
        }
    }

    parsed
}

fn parse_record(token: &str) -> Option<RawRecord> {
    let mut fields = token.split(',');
    let x = parse_field(fields.next())?;
    let y = parse_field(fields.next())?;
    let z = parse_field(fields.next())?;
    if fields.next().is_some() {
        return None;
    }
    Some(RawRecord { x, y, z })
}

fn parse_field(field: Option<&str>) -> Option<f64> {
    let field = field?;
    if field.is_empty() {
        return None;
    }
    field.parse::<f64>().ok()
}

// ---------------------------------------------------------------------------
// File loading
// ---------------------------------------------------------------------------

/// Read one boundary file, reporting every failure explicitly.
pub fn read_boundary(path: &Path) -> Result<LoadedBoundary, LoadError> {
    if !path.exists() {
        return Err(LoadError::MissingFile(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed = parse_records(&text);
    if !parsed.skipped.is_empty() {
        log::warn!(
            "{} malformed tokens ignored in {}",
            parsed.skipped.len(),
            path.display()
        );
    }
    log::info!(
        "{} points were read from {}",
        parsed.records.len(),
        path.display()
    );

    if parsed.records.is_empty() {
        return Err(LoadError::EmptyBoundary(path.to_path_buf()));
    }

    Ok(LoadedBoundary {
        source: path.to_path_buf(),
        path: BoundaryPath::from_records(&parsed.records),
        skipped: parsed.skipped,
    })
}

/// Load a boundary, turning every failure into an empty path.
///
/// Callers must check `is_empty()` before resampling.
pub fn load(path: &Path) -> BoundaryPath {
    match read_boundary(path) {
        Ok(loaded) => loaded.path,
        Err(e) => {
            log::error!("{e}");
            BoundaryPath::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Point2;
    use std::io::Write;

    #[test]
    fn parses_records_in_file_order() {
        let parsed = parse_records("0,0,0 1,1,5\n2,0,-3\t3,1,0\n");
        assert!(parsed.skipped.is_empty());
        let path = BoundaryPath::from_records(&parsed.records);
        assert_eq!(
            path.points(),
            &[
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 1.0),
                Point2::new(2.0, 0.0),
                Point2::new(3.0, 1.0),
            ]
        );
    }

    #[test]
    fn z_does_not_affect_planar_point() {
        let a = parse_records("1.5,2.5,0").records[0].planar();
        let b = parse_records("1.5,2.5,999").records[0].planar();
        assert_eq!(a, b);
    }

    #[test]
    fn malformed_tokens_are_skipped_and_counted() {
        let text = "1,2,3 1,2 1,2,3,4 1,,3 a,b,c 4,5,6 ,1,2";
        let parsed = parse_records(text);
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.skipped.len(), 5);
        let indices: Vec<usize> = parsed.skipped.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 6]);
        assert_eq!(parsed.skipped[0].token, "1,2");
    }

    #[test]
    fn scientific_notation_is_accepted() {
        let parsed = parse_records("1e3,-2.5E-1,0");
        assert_eq!(parsed.records[0].x, 1000.0);
        assert_eq!(parsed.records[0].y, -0.25);
    }

    #[test]
    fn empty_text_yields_nothing() {
        let parsed = parse_records("   \n\t ");
        assert!(parsed.records.is_empty());
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        assert!(matches!(
            read_boundary(&missing),
            Err(LoadError::MissingFile(_))
        ));
        assert!(load(&missing).is_empty());
    }

    #[test]
    fn file_without_valid_records_is_empty_boundary() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "garbage 1,2 x,y,z").unwrap();
        assert!(matches!(
            read_boundary(file.path()),
            Err(LoadError::EmptyBoundary(_))
        ));
        assert!(load(file.path()).is_empty());
    }

    #[test]
    fn read_boundary_reports_skipped_tokens() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0,0,0 bad 1,0,0").unwrap();
        writeln!(file, "1,1,0").unwrap();
        let loaded = read_boundary(file.path()).unwrap();
        assert_eq!(loaded.accepted(), 3);
        assert_eq!(loaded.skipped.len(), 1);
        assert_eq!(loaded.skipped[0].token, "bad");
        assert_eq!(loaded.underdetermined_methods(), vec![Method::Spline]);
    }

    #[test]
    fn loaded_boundary_names_its_source_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inner.txt");
        std::fs::write(&path, "0,0,0 1,0,0 1,1,0 0,1,0").unwrap();
        let loaded = read_boundary(&path).unwrap();
        assert_eq!(loaded.source, path);
        assert_eq!(loaded.file_name(), "inner.txt");
        assert!(loaded.underdetermined_methods().is_empty());
    }
}
