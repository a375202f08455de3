//! Recent-form parsing and momentum.
//!
//! A form string is a whitespace/comma-separated sequence of result tokens
//! over {W, L, D}, case-insensitive. Momentum is the net win rate:
//!
//!   momentum = (wins − losses) / total_tokens ∈ [-1, 1]
//!
//! Unrecognised tokens are discarded; an empty record is neutral (0), not an
//! error.

use serde::Serialize;

/// One result token from a team's recent form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormToken {
    Win,
    Loss,
    NoResult,
}

impl FormToken {
    fn parse(raw: &str) -> Option<FormToken> {
        match raw.to_ascii_uppercase().as_str() {
            "W" => Some(FormToken::Win),
            "L" => Some(FormToken::Loss),
            "D" => Some(FormToken::NoResult),
            _ => None,
        }
    }
}

/// An ordered sequence of recent results for one team.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FormRecord {
    tokens: Vec<FormToken>,
}

impl FormRecord {
    /// Parse a form string. Never fails: anything that is not W/L/D in any
    /// case is dropped.
    pub fn parse(form: &str) -> FormRecord {
        let tokens = form
            .replace(',', " ")
            .split_whitespace()
            .filter_map(FormToken::parse)
            .collect();
        FormRecord { tokens }
    }

    pub fn tokens(&self) -> &[FormToken] {
        &self.tokens
    }

    /// Net win rate in [-1, 1]; exactly 0 for an empty record.
    pub fn momentum(&self) -> f64 {
        if self.tokens.is_empty() {
            return 0.0;
        }
        let net: i32 = self
            .tokens
            .iter()
            .map(|t| match t {
                FormToken::Win => 1,
                FormToken::Loss => -1,
                FormToken::NoResult => 0,
            })
            .sum();
        net as f64 / self.tokens.len() as f64
    }

    /// Emoji squares used by the HTML/Telegram artifacts: 🟩 win, 🟥 loss,
    /// 🟨 no-result.
    pub fn icons(&self) -> String {
        self.tokens
            .iter()
            .map(|t| match t {
                FormToken::Win => "🟩",
                FormToken::Loss => "🟥",
                FormToken::NoResult => "🟨",
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
