//! Delimited-text export of analysis results.
//!
//! Four tables are produced, each with a header row:
//!
//! - distances: one row per expert, one column per item
//! - items: item, d-value, consensus %, defuzzified value, rank
//! - overall: metric/value pairs
//! - rankings: items ordered by rank
//!
//! Missing values are written as empty fields.

use super::interpretation::Interpretation;
use super::text::fmt_rank;
use crate::analysis::AnalysisResult;
use crate::error::DelphiError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const DELIMITER: &str = ",";

/// Writes the expert × item distance table.
pub fn write_distances<W: Write>(w: &mut W, result: &AnalysisResult) -> Result<(), DelphiError> {
    let mut header = vec!["expert".to_string()];
    header.extend(result.distances.columns().iter().map(|c| c.item.clone()));
    write_record(w, &header)?;

    for expert in 0..result.distances.experts() {
        let mut row = vec![(expert + 1).to_string()];
        row.extend(result.distances.expert_row(expert).into_iter().map(opt));
        write_record(w, &row)?;
    }
    Ok(())
}

/// Writes the per-item summary table.
pub fn write_item_summary<W: Write>(
    w: &mut W,
    result: &AnalysisResult,
) -> Result<(), DelphiError> {
    write_record(
        w,
        &["item", "d_value", "consensus_pct", "defuzzified", "rank"],
    )?;
    for s in &result.items {
        write_record(
            w,
            &[
                s.item.clone(),
                opt(s.d_value),
                s.consensus.to_string(),
                opt(s.defuzzified),
                s.rank.map(fmt_rank).unwrap_or_default(),
            ],
        )?;
    }
    Ok(())
}

/// Writes the overall metrics.
pub fn write_overall<W: Write>(w: &mut W, result: &AnalysisResult) -> Result<(), DelphiError> {
    let interpretation = Interpretation::of(result);
    write_record(w, &["metric", "value"])?;
    write_record(w, &["d_construct".to_string(), opt(result.d_construct)])?;
    write_record(
        w,
        &[
            "consensus_pct".to_string(),
            result.overall_consensus.to_string(),
        ],
    )?;
    write_record(w, &["experts".to_string(), result.experts.to_string()])?;
    write_record(w, &["items".to_string(), result.items.len().to_string()])?;
    write_record(w, &["scale".to_string(), result.scale.points().to_string()])?;
    write_record(
        w,
        &[
            "consensus_threshold".to_string(),
            result.consensus_threshold.to_string(),
        ],
    )?;
    write_record(
        w,
        &[
            "interpretation".to_string(),
            interpretation.label().to_string(),
        ],
    )?;
    Ok(())
}

/// Writes items ordered by rank; unranked items come last.
pub fn write_rankings<W: Write>(w: &mut W, result: &AnalysisResult) -> Result<(), DelphiError> {
    write_record(w, &["rank", "item", "defuzzified"])?;
    for s in result.ranking() {
        write_record(
            w,
            &[
                s.rank.map(fmt_rank).unwrap_or_default(),
                s.item.clone(),
                opt(s.defuzzified),
            ],
        )?;
    }
    Ok(())
}

/// Writes all four tables into `dir` as `<prefix>_<table>.csv`.
///
/// Returns the paths written, in the order distances, items, overall,
/// rankings.
pub fn export_to_dir(
    result: &AnalysisResult,
    dir: impl AsRef<Path>,
    prefix: &str,
) -> Result<Vec<PathBuf>, DelphiError> {
    type Writer = fn(&mut BufWriter<File>, &AnalysisResult) -> Result<(), DelphiError>;
    let tables: [(&str, Writer); 4] = [
        ("distances", write_distances as Writer),
        ("items", write_item_summary as Writer),
        ("overall", write_overall as Writer),
        ("rankings", write_rankings as Writer),
    ];

    let dir = dir.as_ref();
    let mut written = Vec::with_capacity(tables.len());
    for (name, write_table) in tables {
        let path = dir.join(format!("{prefix}_{name}.csv"));
        let mut w = BufWriter::new(File::create(&path)?);
        write_table(&mut w, result)?;
        w.flush()?;
        tracing::debug!(path = %path.display(), "exported table");
        written.push(path);
    }
    Ok(written)
}

fn opt(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn write_record<W: Write, S: AsRef<str>>(w: &mut W, fields: &[S]) -> Result<(), DelphiError> {
    let line: Vec<String> = fields.iter().map(|f| quote(f.as_ref())).collect();
    writeln!(w, "{}", line.join(DELIMITER))?;
    Ok(())
}

fn quote(field: &str) -> String {
    if field.contains(DELIMITER) || field.contains(['"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{DelphiConfig, DelphiRunner};
    use crate::data::RatingMatrix;

    fn result() -> AnalysisResult {
        let ratings = RatingMatrix::from_columns([
            ("Item1", vec![Some(5), Some(4), Some(5), Some(3)]),
            ("Item, \"two\"", vec![Some(1), Some(1), Some(1), None]),
        ])
        .unwrap();
        DelphiRunner::run(&ratings, &DelphiConfig::default()).unwrap()
    }

    fn render(f: fn(&mut Vec<u8>, &AnalysisResult) -> Result<(), DelphiError>) -> String {
        let mut buf = Vec::new();
        f(&mut buf, &result()).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("plain"), "plain");
        assert_eq!(quote("a,b"), "\"a,b\"");
        assert_eq!(quote("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_distances_table() {
        let out = render(write_distances);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "expert,Item1,\"Item, \"\"two\"\"\"");
        assert_eq!(lines.len(), 5);
        // Expert 4 skipped the second item.
        assert!(lines[4].ends_with(','));
        assert!(lines[1].starts_with("1,"));
    }

    #[test]
    fn test_item_summary_table() {
        let out = render(write_item_summary);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "item,d_value,consensus_pct,defuzzified,rank");
        assert_eq!(lines[1], "Item1,0.15,75,0.65,1");
        assert!(lines[2].starts_with("\"Item, \"\"two\"\"\",0,75,"));
    }

    #[test]
    fn test_overall_table() {
        let out = render(write_overall);
        assert!(out.starts_with("metric,value\n"));
        assert!(out.contains("consensus_pct,75\n"));
        assert!(out.contains("experts,4\n"));
        assert!(out.contains("interpretation,excellent\n"));
    }

    #[test]
    fn test_rankings_table() {
        let out = render(write_rankings);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "rank,item,defuzzified");
        assert_eq!(lines[1], "1,Item1,0.65");
        assert!(lines[2].starts_with("2,"));
    }

    #[test]
    fn test_export_to_dir() {
        let dir = tempfile::tempdir().unwrap();
        let paths = export_to_dir(&result(), dir.path(), "round1").unwrap();
        assert_eq!(paths.len(), 4);
        assert!(paths[0].ends_with("round1_distances.csv"));
        for p in &paths {
            let content = std::fs::read_to_string(p).unwrap();
            assert!(!content.is_empty());
        }
    }

    #[test]
    fn test_export_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            export_to_dir(&result(), missing, "x"),
            Err(DelphiError::Io(_))
        ));
    }
}
