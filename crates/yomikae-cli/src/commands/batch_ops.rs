use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use serde::Serialize;
use tracing::info;

use yomikae_core::{decline, transliterate_with_report, CandidateSet, Target};

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One JSONL output line.
#[derive(Debug, Serialize)]
struct BatchRecord<'a> {
    name: &'a str,
    candidates: &'a CandidateSet,
    dropped: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    declined: Option<Vec<String>>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub names: usize,
    /// Names that produced no candidates.
    pub empty: usize,
}

/// Transliterate one name per input line into JSONL.
///
/// Blank lines and `#` comments are skipped. Bytes that are not UTF-8 are
/// replaced rather than aborting the batch.
pub fn run_batch<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    target: Target,
    with_declension: bool,
) -> Result<BatchStats, BatchError> {
    let mut stats = BatchStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let name = line.trim();
        if name.is_empty() || name.starts_with('#') {
            continue;
        }

        let report = transliterate_with_report(name, target);
        stats.names += 1;
        if report.candidates.is_empty() {
            stats.empty += 1;
        }

        let declined = with_declension.then(|| {
            report
                .candidates
                .iter()
                .map(|c| decline(c, target))
                .collect()
        });
        let record = BatchRecord {
            name,
            candidates: &report.candidates,
            dropped: report.dropped,
            declined,
        };
        serde_json::to_writer(&mut writer, &record)?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(stats)
}

pub fn batch_cmd(target: Target, input_file: &str, output_file: &str, with_declension: bool) {
    let input = die!(
        File::open(input_file),
        "Failed to open input file {input_file}: {}"
    );
    let output = die!(
        File::create(output_file),
        "Failed to create output file {output_file}: {}"
    );

    let stats = die!(
        run_batch(
            BufReader::new(input),
            BufWriter::new(output),
            target,
            with_declension
        ),
        "Batch failed: {}"
    );
    info!(names = stats.names, empty = stats.empty, "batch finished");
    println!(
        "Wrote {} names to {output_file} ({} without candidates)",
        stats.names, stats.empty
    );
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run(input: &[u8], target: Target, with_declension: bool) -> (BatchStats, Vec<String>) {
        let mut out = Vec::new();
        let stats = run_batch(Cursor::new(input), &mut out, target, with_declension).unwrap();
        let lines = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect();
        (stats, lines)
    }

    #[test]
    fn one_record_per_name() {
        let (stats, lines) = run(
            "Hachiman\n\n# comment\nじづ\n".as_bytes(),
            Target::TokiPona,
            false,
        );
        assert_eq!(stats, BatchStats { names: 2, empty: 0 });
        assert_eq!(
            lines[0],
            r#"{"name":"Hachiman","candidates":["Kasiman"],"dropped":0}"#
        );
        assert_eq!(
            lines[1],
            r#"{"name":"じづ","candidates":["Sisu","Situ"],"dropped":0}"#
        );
    }

    #[test]
    fn declension_column() {
        let (_, lines) = run(b"Ise Kasuga", Target::Lithuanian, true);
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(value["candidates"][0], "Ise Kasuga");
        assert_eq!(value["declined"][0], "Ise Kasugos");
    }

    #[test]
    fn empty_names_are_counted() {
        let (stats, lines) = run(b"---\nIse\n", Target::Russian, false);
        assert_eq!(stats, BatchStats { names: 2, empty: 1 });
        assert_eq!(lines[0], r#"{"name":"---","candidates":[],"dropped":0}"#);
    }

    #[test]
    fn invalid_utf8_does_not_abort() {
        let (stats, lines) = run(b"Ise\xff\nIzumo\n", Target::Russian, false);
        assert_eq!(stats.names, 2);
        let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(first["candidates"][0], "Исэ");
        let second: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(second["candidates"][0], "Идзумо");
    }

    #[test]
    fn writes_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jsonl");
        let file = File::create(&path).unwrap();
        let stats = run_batch(
            Cursor::new(&b"Hachiman\n"[..]),
            BufWriter::new(file),
            Target::Ukrainian,
            true,
        )
        .unwrap();
        assert_eq!(stats.names, 1);
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"Хатіман\""));
        assert!(written.contains("\"Хатімана\""));
    }
}
