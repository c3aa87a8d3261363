// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One-line phase pipeline

use serde::Serialize;
use std::fmt;
use tg_core::{render_phases_with, Outcome, PhaseChip, PhaseError, PhaseToken, TrailingPolicy};

/// Chips for every phase, in pipeline order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PhaseLine {
    pub chips: Vec<PhaseChip>,
}

impl PhaseLine {
    pub fn render(
        outcome: Outcome,
        token: Option<&PhaseToken>,
        trailing: TrailingPolicy,
    ) -> Result<Self, PhaseError> {
        Ok(Self {
            chips: render_phases_with(outcome, token, trailing)?,
        })
    }
}

impl fmt::Display for PhaseLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chip) in self.chips.iter().enumerate() {
            if i > 0 {
                f.write_str(" → ")?;
            }
            write!(f, "{} {}", chip.phase, chip.state.glyph())?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "phase_line_tests.rs"]
mod tests;
