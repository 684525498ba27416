use std::{
    fmt,
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use mcpi_stats::block::CumulativeCurve;

/// Destination of a run's data: a file when a path is given, stdout otherwise.
#[derive(Debug)]
pub enum Output {
    Stdout(StdoutLock<'static>),
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn create(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Output::Stdout(io::stdout().lock()));
        };
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path: path.to_owned(),
        })
    }

    /// Writes the curve as `block mean error` lines with `precision` digits.
    pub fn write_curve(&mut self, curve: &CumulativeCurve, precision: usize) -> anyhow::Result<()> {
        self.write_all_with("curve", |out| write_curve(out, curve, precision))
    }

    /// Writes `value` as pretty-printed JSON followed by a newline.
    pub fn write_json<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        self.write_all_with("JSON", |out| {
            serde_json::to_writer_pretty(&mut *out, value)?;
            writeln!(out)
        })
    }

    fn write_all_with<F>(&mut self, what: &str, write: F) -> anyhow::Result<()>
    where
        F: FnOnce(&mut Self) -> io::Result<()>,
    {
        write(&mut *self)
            .and_then(|()| self.flush())
            .with_context(|| format!("Failed to write {what} to {self}"))
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Stdout(_) => f.write_str("stdout"),
            Output::File { path, .. } => write!(f, "{}", path.display()),
        }
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(writer) => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(writer) => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

/// Writes one `block mean error` line per block, in fixed-point notation
/// with `precision` fractional digits.
pub fn write_curve<W>(writer: &mut W, curve: &CumulativeCurve, precision: usize) -> io::Result<()>
where
    W: io::Write + ?Sized,
{
    for (block, mean, error) in curve.iter() {
        writeln!(writer, "{block} {mean:.precision$} {error:.precision$}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use mcpi_stats::block::BlockStatistics;

    use super::*;

    #[test]
    fn test_write_curve_format() {
        let curve = BlockStatistics::compute(&[3.0, 3.2, 2.8]).unwrap();
        let mut buf = vec![];
        write_curve(&mut buf, &curve, 5).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "0 3.00000 0.00000\n1 3.10000 0.10000\n2 3.00000 0.11547\n"
        );
    }

    #[test]
    fn test_write_curve_precision() {
        let curve = BlockStatistics::compute(&[3.25, 3.0]).unwrap();
        let mut buf = vec![];
        write_curve(&mut buf, &curve, 6).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "0 3.250000 0.000000\n1 3.125000 0.125000\n"
        );
    }

    #[test]
    fn test_write_curve_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pi_circle.dat");
        let curve = BlockStatistics::compute(&[3.0, 3.5]).unwrap();

        let mut output = Output::create(Some(&path)).unwrap();
        assert_eq!(output.to_string(), path.display().to_string());
        output.write_curve(&curve, 5).unwrap();
        drop(output);

        let got = fs::read_to_string(&path).unwrap();
        assert_eq!(got, "0 3.00000 0.00000\n1 3.25000 0.25000\n");
    }

    #[test]
    fn test_unwritable_path_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("pi.dat");
        let err = Output::create(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to create output file"));
    }

    #[test]
    fn test_write_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        let mut output = Output::create(Some(&path)).unwrap();
        output
            .write_json(&serde_json::json!({ "estimate": 3.14 }))
            .unwrap();
        drop(output);
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.ends_with("}\n"));
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["estimate"], 3.14);
    }
}
