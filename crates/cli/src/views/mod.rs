// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Text and JSON renderings of dashboard pages

pub mod case_view;
pub mod history_view;
pub mod phase_line;
pub mod run_view;

pub use case_view::TestCaseView;
pub use history_view::HistoryView;
pub use phase_line::PhaseLine;
pub use run_view::TestRunView;

use std::fmt;

/// Left-aligned plain-text table
///
/// Columns are as wide as their widest cell; the last column is not padded.
pub(crate) fn write_table(
    f: &mut fmt::Formatter<'_>,
    headers: &[&str],
    rows: &[Vec<String>],
) -> fmt::Result {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    write_row(f, &widths, &header)?;
    let rule = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    writeln!(f, "{}", "-".repeat(rule))?;
    for row in rows {
        write_row(f, &widths, row)?;
    }
    Ok(())
}

fn write_row(f: &mut fmt::Formatter<'_>, widths: &[usize], cells: &[String]) -> fmt::Result {
    let last = cells.len().saturating_sub(1);
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        if i < last {
            let pad = width.saturating_sub(cell.chars().count());
            line.push_str(&" ".repeat(pad));
        }
    }
    writeln!(f, "{}", line.trim_end())
}

/// Collapse a multi-line message onto one table line
pub(crate) fn one_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
