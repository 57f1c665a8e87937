//! Edge-list loading
//!
//! Parses the comma-separated edge-list format: one `u,v,weight` line per
//! undirected edge. The loader owns all format validation; the graph only
//! ever sees well-formed triples.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use crate::error::{EdgelineError, Result};

/// A single parsed edge record: two endpoint labels and a weight
pub type EdgeRecord = (String, String, f64);

/// Parse an edge list from any buffered reader.
///
/// Blank lines are skipped. A line with fewer than three fields or an
/// unparsable weight is an error carrying the 1-based line number.
pub fn read_edge_list<R: BufRead>(reader: R) -> Result<Vec<EdgeRecord>> {
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        records.push(parse_edge_line(line, idx + 1)?);
    }

    Ok(records)
}

/// Load an edge list from a file path.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_edge_list(path: impl AsRef<Path>) -> Result<Vec<EdgeRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            EdgelineError::EdgeListNotFound {
                path: path.to_path_buf(),
            }
        } else {
            EdgelineError::Io(e)
        }
    })?;

    let records = read_edge_list(BufReader::new(file))?;
    tracing::debug!(records = records.len(), "read_edge_list");
    Ok(records)
}

fn parse_edge_line(line: &str, line_no: usize) -> Result<EdgeRecord> {
    let mut fields = line.splitn(3, ',');

    let u = fields.next().unwrap_or_default();
    let (v, raw_weight) = match (fields.next(), fields.next()) {
        (Some(v), Some(w)) => (v, w),
        _ => {
            return Err(EdgelineError::InvalidEdgeLine {
                line: line_no,
                reason: format!("expected 3 comma-separated fields, got {:?}", line),
            })
        }
    };

    let weight: f64 = raw_weight.trim().parse().map_err(|_| {
        EdgelineError::InvalidEdgeLine {
            line: line_no,
            reason: format!("unparsable weight {:?}", raw_weight.trim()),
        }
    })?;

    Ok((u.to_string(), v.to_string(), weight))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EdgelineError;
    use std::io::Cursor;

    #[test]
    fn test_read_well_formed() {
        let input = "A,B,1\nB,C,2.5\nA,C,5\n";
        let records = read_edge_list(Cursor::new(input)).unwrap();
        assert_eq!(
            records,
            vec![
                ("A".to_string(), "B".to_string(), 1.0),
                ("B".to_string(), "C".to_string(), 2.5),
                ("A".to_string(), "C".to_string(), 5.0),
            ]
        );
    }

    #[test]
    fn test_blank_lines_skipped() {
        let input = "A,B,1\n\n   \nB,C,2\n";
        let records = read_edge_list(Cursor::new(input)).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_missing_field_is_error() {
        let err = read_edge_list(Cursor::new("A,B,1\nA,B\n")).unwrap_err();
        match err {
            EdgelineError::InvalidEdgeLine { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unparsable_weight_is_error() {
        let err = read_edge_list(Cursor::new("A,B,heavy\n")).unwrap_err();
        match err {
            EdgelineError::InvalidEdgeLine { line, reason } => {
                assert_eq!(line, 1);
                assert!(reason.contains("heavy"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_labels_may_contain_spaces() {
        let records = read_edge_list(Cursor::new("node one,node two,0.5\n")).unwrap();
        assert_eq!(
            records,
            vec![("node one".to_string(), "node two".to_string(), 0.5)]
        );
    }

    #[test]
    fn test_empty_input() {
        let records = read_edge_list(Cursor::new("")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_edge_list(dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, EdgelineError::EdgeListNotFound { .. }));
    }
}
