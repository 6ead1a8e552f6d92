//! CSV rendering of a [`MembershipMatrix`].
//!
//! `name,<member1>,<member2>,...` then one row per board/source with
//! `true`/`false` cells. The destination file is overwritten.

use std::io::Write;
use std::path::Path;

use crate::context::MembershipMatrix;
use crate::error::{io_err, ReportError};

/// Default output file for `--csv` given without a path.
pub const DEFAULT_CSV_PATH: &str = "report.csv";

/// Write `matrix` as CSV to any writer.
pub fn write_csv<W: Write>(matrix: &MembershipMatrix, out: W) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(matrix.header())?;
    for row in &matrix.rows {
        let record = std::iter::once(row.name.clone())
            .chain(row.cells.iter().map(|cell| cell.to_string()));
        writer.write_record(record)?;
    }
    writer.flush().map_err(|e| io_err("<csv output>", e))?;
    Ok(())
}

/// Write `matrix` to `path`. The file is complete and closed on return.
pub fn write_csv_at(path: &Path, matrix: &MembershipMatrix) -> Result<(), ReportError> {
    let mut file = std::fs::File::create(path).map_err(|e| io_err(path, e))?;
    write_csv(matrix, &mut file)?;
    file.sync_all().map_err(|e| io_err(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use rollcall_core::MemberName;
    use tempfile::TempDir;

    use super::*;
    use crate::context::MatrixRow;

    fn matrix() -> MembershipMatrix {
        MembershipMatrix {
            columns: vec![MemberName::from("A"), MemberName::from("Zoë, Jr.")],
            rows: vec![
                MatrixRow {
                    name: "Roadmap".into(),
                    cells: vec![true, false],
                },
                MatrixRow {
                    name: "google".into(),
                    cells: vec![false, true],
                },
                MatrixRow {
                    name: "trello".into(),
                    cells: vec![true, true],
                },
            ],
        }
    }

    #[test]
    fn writes_header_and_boolean_cells() {
        let mut out = Vec::new();
        write_csv(&matrix(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "name,A,\"Zoë, Jr.\"\n\
             Roadmap,true,false\n\
             google,false,true\n\
             trello,true,true\n"
        );
    }

    #[test]
    fn file_is_overwritten() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CSV_PATH);
        std::fs::write(&path, "stale contents that are much longer than the report\n").unwrap();

        write_csv_at(&path, &matrix()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("name,A,"));
        assert!(!text.contains("stale"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn missing_directory_is_an_io_error_with_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope").join("report.csv");
        let err = write_csv_at(&path, &matrix()).unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }), "got: {err}");
        assert!(err.to_string().contains("report.csv"));
    }
}
