//! Plain-text report rendering.

use super::interpretation::Interpretation;
use crate::analysis::AnalysisResult;
use std::fmt::Write;

const ITEM_WIDTH: usize = 24;
const RULE_WIDTH: usize = ITEM_WIDTH + 4 * 13;

/// Renders a human-readable summary of `result`.
///
/// The report lists the run parameters, the overall metrics with their
/// [`Interpretation`], and a fixed-width table with one line per item.
/// Missing values print as `NA`.
pub fn format_report(result: &AnalysisResult) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, result);
    out
}

fn write_report(out: &mut String, result: &AnalysisResult) -> std::fmt::Result {
    let title = "Fuzzy Delphi Method Analysis";
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(title.len()))?;
    writeln!(out)?;
    writeln!(out, "Experts:             {}", result.experts)?;
    writeln!(out, "Items:               {}", result.items.len())?;
    writeln!(out, "Scale:               {}", result.scale)?;
    writeln!(out, "Consensus threshold: {}", result.consensus_threshold)?;
    writeln!(out)?;
    writeln!(
        out,
        "Overall d-construct: {}",
        fmt_opt(result.d_construct, 2)
    )?;
    writeln!(out, "Overall consensus:   {:.2}%", result.overall_consensus)?;
    writeln!(
        out,
        "Interpretation:      {}",
        Interpretation::of(result)
    )?;
    writeln!(out)?;

    writeln!(
        out,
        "{:<w$}{:>13}{:>13}{:>13}{:>13}",
        "Item",
        "d-value",
        "Consensus %",
        "Defuzzified",
        "Rank",
        w = ITEM_WIDTH
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for s in &result.items {
        writeln!(
            out,
            "{:<w$}{:>13}{:>13.2}{:>13}{:>13}",
            truncate(&s.item, ITEM_WIDTH - 1),
            fmt_opt(s.d_value, 4),
            s.consensus,
            fmt_opt(s.defuzzified, 4),
            s.rank.map(fmt_rank).unwrap_or_else(|| "NA".to_string()),
            w = ITEM_WIDTH
        )?;
    }
    Ok(())
}

impl std::fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_report(self))
    }
}

fn fmt_opt(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{v:.precision$}"),
        None => "NA".to_string(),
    }
}

pub(crate) fn fmt_rank(rank: f64) -> String {
    if rank.fract() == 0.0 {
        format!("{rank:.0}")
    } else {
        format!("{rank:.1}")
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut t: String = s.chars().take(max.saturating_sub(1)).collect();
        t.push('~');
        t
    }
}
