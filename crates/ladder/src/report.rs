//! Challenge list rendering: plain text and JSON.

use ladder_core::{PairingResult, Player};
use serde::Serialize;

use crate::error::ReportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A challenge resolved to player names (ranks are 1-based)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChallengeEntry {
    pub challenger: String,
    pub opponent: String,
    pub challenger_rank: usize,
    pub opponent_rank: usize,
    pub gap: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnmatchedEntry {
    pub name: String,
    pub rank: usize,
}

/// Round report built from a ladder and its pairings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundReport {
    pub challenges: Vec<ChallengeEntry>,
    /// Ordered by ladder rank
    pub unmatched: Vec<UnmatchedEntry>,
}

impl RoundReport {
    pub fn new(players: &[Player], result: &PairingResult) -> Result<Self, ReportError> {
        let name = |index: usize| {
            players
                .get(index)
                .map(|p| p.name.clone())
                .ok_or_else(|| ReportError::UnknownPosition {
                    index,
                    total: players.len(),
                })
        };

        let challenges = result
            .pairings
            .iter()
            .map(|pairing| {
                Ok(ChallengeEntry {
                    challenger: name(pairing.challenger)?,
                    opponent: name(pairing.opponent)?,
                    challenger_rank: pairing.challenger + 1,
                    opponent_rank: pairing.opponent + 1,
                    gap: pairing.gap(),
                })
            })
            .collect::<Result<Vec<_>, ReportError>>()?;

        let unmatched = result
            .unmatched
            .iter()
            .map(|&index| {
                Ok(UnmatchedEntry {
                    name: name(index)?,
                    rank: index + 1,
                })
            })
            .collect::<Result<Vec<_>, ReportError>>()?;

        Ok(Self {
            challenges,
            unmatched,
        })
    }

    /// Human-readable challenge list
    pub fn to_text(&self) -> String {
        let mut report = String::from("Challenges:\n");
        for entry in &self.challenges {
            report.push_str(&format!("  {} vs {}\n", entry.challenger, entry.opponent));
        }
        for entry in &self.unmatched {
            report.push_str(&format!("  {} has no opponent this round\n", entry.name));
        }
        report
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Render a round in the requested format.
pub fn render(
    players: &[Player],
    result: &PairingResult,
    format: OutputFormat,
) -> Result<String, ReportError> {
    let report = RoundReport::new(players, result)?;
    match format {
        OutputFormat::Text => Ok(report.to_text()),
        OutputFormat::Json => report.to_json(),
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
