// Per-Round JSONL Time Series Recorder
// Outputs one JSON line per round for independent analysis

use outbreak_engine::RoundRecord;
use std::io::Write;

/// Write one JSON line per round record.
pub fn write_jsonl(records: &[RoundRecord], path: &std::path::Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
    for record in records {
        let line = serde_json::to_string(record)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        writeln!(file, "{}", line)?;
    }
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use outbreak_engine::{run_single, SimulationConfig};

    #[test]
    fn writes_one_line_per_round() {
        let records = run_single(&SimulationConfig::default(), Some(4)).expect("test: valid config");
        let path = std::env::temp_dir()
            .join(format!("outbreak-ts-{}", std::process::id()))
            .join("seed-4.jsonl");
        write_jsonl(&records, &path).expect("test: write");
        let text = std::fs::read_to_string(&path).expect("test: read");
        assert_eq!(text.lines().count(), records.len());
        let first: RoundRecord = serde_json::from_str(text.lines().next().expect("test: line")).expect("test: parse");
        assert_eq!(first, records[0]);
        let _ = std::fs::remove_dir_all(path.parent().expect("test: parent"));
    }
}
