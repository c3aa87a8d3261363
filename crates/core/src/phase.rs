// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Phase pipeline renderer
//!
//! A test plan moves through a fixed sequence of phases. While it runs, the
//! API reports where it is as a phase token (`DEPLOY_STARTED`,
//! `INFRA_PHASE_ERROR`, ...). [`render_phases`] turns the plan outcome and
//! that token into one chip per phase for display.
//!
//! Rendering is a pure function of its inputs: nothing is remembered
//! between calls, so every poll recomputes the pipeline from scratch.

use crate::status::Outcome;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors from phase rendering
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhaseError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// One of the canonical pipeline phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhaseName {
    Preparation,
    Infra,
    Deploy,
    Test,
}

impl PhaseName {
    /// Canonical phase order
    pub const ALL: [PhaseName; 4] = [
        PhaseName::Preparation,
        PhaseName::Infra,
        PhaseName::Deploy,
        PhaseName::Test,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PhaseName::Preparation => "PREPARATION",
            PhaseName::Infra => "INFRA",
            PhaseName::Deploy => "DEPLOY",
            PhaseName::Test => "TEST",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        PhaseName::ALL.into_iter().find(|p| p.name() == s)
    }
}

impl fmt::Display for PhaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Phase part of a token; unknown names are kept verbatim
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PhaseRef {
    Known(PhaseName),
    Unknown(String),
}

impl PhaseRef {
    fn is(&self, phase: PhaseName) -> bool {
        matches!(self, PhaseRef::Known(p) if *p == phase)
    }
}

/// Lifecycle stage part of a token
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StageKind {
    Started,
    Succeeded,
    Error,
    Incomplete,
    Unrecognized(String),
}

impl StageKind {
    pub fn parse(s: &str) -> Self {
        match s {
            "STARTED" => StageKind::Started,
            "SUCCEEDED" => StageKind::Succeeded,
            "ERROR" => StageKind::Error,
            "INCOMPLETE" => StageKind::Incomplete,
            other => StageKind::Unrecognized(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            StageKind::Started => "STARTED",
            StageKind::Succeeded => "SUCCEEDED",
            StageKind::Error => "ERROR",
            StageKind::Incomplete => "INCOMPLETE",
            StageKind::Unrecognized(s) => s,
        }
    }
}

/// Where a running plan currently is
///
/// Parsed once from the `<PHASE>_<STAGE>` string the API sends. The phase is
/// the text before the first `_` and the stage the text after the last one,
/// so `INFRA_PHASE_STARTED` reads as `INFRA` / `STARTED`. A token without any
/// `_` parses to an empty phase and stage. Parsing never fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PhaseToken {
    pub phase: PhaseRef,
    pub stage: StageKind,
}

impl PhaseToken {
    pub fn new(phase: PhaseName, stage: StageKind) -> Self {
        Self {
            phase: PhaseRef::Known(phase),
            stage,
        }
    }

    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        let (phase, stage) = match (token.find('_'), token.rfind('_')) {
            (Some(first), Some(last)) => (&token[..first], &token[last + 1..]),
            _ => ("", ""),
        };

        let phase = match PhaseName::parse(phase) {
            Some(p) => PhaseRef::Known(p),
            None => PhaseRef::Unknown(phase.to_string()),
        };

        Self {
            phase,
            stage: StageKind::parse(stage),
        }
    }
}

impl From<String> for PhaseToken {
    fn from(s: String) -> Self {
        PhaseToken::parse(&s)
    }
}

impl From<&str> for PhaseToken {
    fn from(s: &str) -> Self {
        PhaseToken::parse(s)
    }
}

impl From<PhaseToken> for String {
    fn from(token: PhaseToken) -> Self {
        token.to_string()
    }
}

impl fmt::Display for PhaseToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match &self.phase {
            PhaseRef::Known(p) => p.name(),
            PhaseRef::Unknown(s) => s,
        };
        write!(f, "{}_{}", phase, self.stage.name())
    }
}

/// Display state of a single phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChipState {
    Done,
    Running,
    Error,
    Incomplete,
    Waiting,
    Pending,
}

impl ChipState {
    pub fn name(&self) -> &'static str {
        match self {
            ChipState::Done => "done",
            ChipState::Running => "running",
            ChipState::Error => "error",
            ChipState::Incomplete => "incomplete",
            ChipState::Waiting => "waiting",
            ChipState::Pending => "pending",
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            ChipState::Done => '✓',
            ChipState::Running => '⟳',
            ChipState::Error => '✗',
            ChipState::Incomplete => '⧗',
            ChipState::Waiting => '…',
            ChipState::Pending => '?',
        }
    }
}

impl fmt::Display for ChipState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A rendered phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseChip {
    pub phase: PhaseName,
    pub state: ChipState,
}

/// How to render phases that follow an errored or incomplete phase
///
/// The dashboard has always shown them as done, which paints a pipeline
/// green after a hard failure. `Pending` leaves them unresolved instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingPolicy {
    #[default]
    AssumeDone,
    Pending,
}

/// Render the phase pipeline with the dashboard's default behaviour
pub fn render_phases(
    outcome: Outcome,
    token: Option<&PhaseToken>,
) -> Result<Vec<PhaseChip>, PhaseError> {
    render_phases_with(outcome, token, TrailingPolicy::default())
}

/// Render the phase pipeline
///
/// A successful outcome resolves every phase to done. Otherwise `token` is
/// required and the phases are walked in canonical order:
/// - the matching phase takes its state from the token's stage
/// - phases after a started or succeeded phase are waiting
/// - phases before the matching phase are done
/// - phases after an error or incomplete stage follow `trailing`
pub fn render_phases_with(
    outcome: Outcome,
    token: Option<&PhaseToken>,
    trailing: TrailingPolicy,
) -> Result<Vec<PhaseChip>, PhaseError> {
    if outcome == Outcome::Success {
        return Ok(PhaseName::ALL
            .into_iter()
            .map(|phase| PhaseChip {
                phase,
                state: ChipState::Done,
            })
            .collect());
    }

    let token = token.ok_or_else(|| {
        PhaseError::InvalidInput(format!(
            "phase token is required when the outcome is {:?}",
            outcome
        ))
    })?;

    if let PhaseRef::Unknown(name) = &token.phase {
        tracing::warn!(
            phase = %name,
            token = %token,
            "phase token matches no known phase; every phase renders as done"
        );
    }

    let mut found_error = false;
    let mut found_started = false;
    let mut found_succeeded = false;

    let mut chips = Vec::with_capacity(PhaseName::ALL.len());
    for phase in PhaseName::ALL {
        let state = if token.phase.is(phase) {
            match token.stage {
                StageKind::Error => {
                    found_error = true;
                    ChipState::Error
                }
                StageKind::Succeeded => {
                    found_succeeded = true;
                    ChipState::Done
                }
                StageKind::Incomplete => {
                    found_error = true;
                    ChipState::Incomplete
                }
                StageKind::Started | StageKind::Unrecognized(_) => {
                    found_started = true;
                    ChipState::Running
                }
            }
        } else if found_started || found_succeeded {
            ChipState::Waiting
        } else if !found_error {
            ChipState::Done
        } else {
            match trailing {
                TrailingPolicy::AssumeDone => ChipState::Done,
                TrailingPolicy::Pending => ChipState::Pending,
            }
        };
        chips.push(PhaseChip { phase, state });
    }

    Ok(chips)
}

#[cfg(test)]
#[path = "phase_tests.rs"]
mod tests;
