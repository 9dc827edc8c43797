//! Plain-text array I/O and elapsed-time formatting for the tools.
//!
//! Values are written in their shortest display form, space-delimited
//! within a row, one row per line for grids.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

/// Errors from reading whitespace-delimited numeric text.
#[derive(Debug, Error)]
pub enum TextIoError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: invalid float {token:?}")]
    Parse { line: usize, token: String },
}

/// Borrowed view of a scalar, series, or grid destined for text output.
/// Higher ranks have no variant and cannot be serialized.
#[derive(Debug, Clone, Copy)]
pub enum TextData<'a> {
    Scalar(f64),
    Series(&'a [f64]),
    Grid(&'a [Vec<f64>]),
}

/// Write `data` as plain text: a bare scalar, a single space-delimited
/// line, or one space-delimited line per grid row.
pub fn write_text<W: Write>(mut w: W, data: &TextData) -> io::Result<()> {
    match data {
        TextData::Scalar(v) => write!(w, "{v}")?,
        TextData::Series(vals) => write_row(&mut w, vals)?,
        TextData::Grid(rows) => {
            for row in rows.iter() {
                write_row(&mut w, row)?;
                writeln!(w)?;
            }
        }
    }
    Ok(())
}

fn write_row<W: Write>(w: &mut W, vals: &[f64]) -> io::Result<()> {
    for (i, v) in vals.iter().enumerate() {
        if i > 0 {
            write!(w, " ")?;
        }
        write!(w, "{v}")?;
    }
    Ok(())
}

/// File wrapper around [`write_text`].
pub fn save_text<P: AsRef<Path>>(path: P, data: &TextData) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    write_text(&mut w, data)?;
    w.flush()
}

/// Parse whitespace-delimited rows of floats. Blank lines are skipped;
/// a malformed token fails the whole read with its line number.
pub fn read_series<R: BufRead>(reader: R) -> Result<Vec<Vec<f64>>, TextIoError> {
    let mut rows = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let mut row = Vec::new();
        for token in line.split_whitespace() {
            let v = token.parse::<f64>().map_err(|_| TextIoError::Parse {
                line: idx + 1,
                token: token.to_string(),
            })?;
            row.push(v);
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Read [`read_series`] rows from a file.
pub fn load_series<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<f64>>, TextIoError> {
    read_series(BufReader::new(File::open(path)?))
}

/// Split elapsed seconds into (hours, minutes, seconds).
pub fn hhmmss(seconds: u64) -> (u64, u64, u64) {
    let minutes = seconds / 60;
    (minutes / 60, minutes % 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(data: &TextData) -> String {
        let mut buf = Vec::new();
        write_text(&mut buf, data).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn scalar_writes_bare_value() {
        assert_eq!(written(&TextData::Scalar(2.5)), "2.5");
        assert_eq!(written(&TextData::Scalar(-0.0)), "-0");
    }

    #[test]
    fn series_writes_one_space_delimited_line() {
        assert_eq!(written(&TextData::Series(&[1.0, 2.5, -3.0])), "1 2.5 -3");
        assert_eq!(written(&TextData::Series(&[])), "");
    }

    #[test]
    fn grid_writes_one_line_per_row() {
        let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        assert_eq!(written(&TextData::Grid(&rows)), "1 2\n3 4\n");
    }

    #[test]
    fn read_series_round_trips_a_grid() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![-4.5, 0.25, 1e6]];
        let text = written(&TextData::Grid(&rows));
        let back = read_series(text.as_bytes()).unwrap();
        assert_eq!(back, rows);
    }

    #[test]
    fn read_series_skips_blank_lines() {
        let back = read_series("1 2\n\n  \n3 4\n".as_bytes()).unwrap();
        assert_eq!(back, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn read_series_reports_the_offending_line() {
        let err = read_series("1 2\n3 oops\n".as_bytes()).unwrap_err();
        match err {
            TextIoError::Parse { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "oops");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn hhmmss_splits_elapsed_seconds() {
        assert_eq!(hhmmss(0), (0, 0, 0));
        assert_eq!(hhmmss(59), (0, 0, 59));
        assert_eq!(hhmmss(3661), (1, 1, 1));
        assert_eq!(hhmmss(86_399), (23, 59, 59));
    }
}
