use serde::{Deserialize, Serialize};

use crate::core::count;
use crate::core::form::FormSnapshot;

pub const DEFAULT_MAX_COUNT: u64 = 1000;

pub const DEFAULT_MAX_EXCEEDED_MESSAGE: &str = "This form has too many fields ({form_count}) \
     for the server to accept (max {max_count}).\n\
     Data may be lost if you submit. Are you sure you want to go ahead?";

/// Caller-supplied overrides, merged over the defaults once at attachment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GuardOptions {
    #[serde(default)]
    pub max_count: Option<u64>,
    #[serde(default)]
    pub max_exceeded_message: Option<String>,
}

/// Settings a guard runs with. Resolved once, immutable afterwards.
#[derive(Debug, Clone)]
pub struct GuardSettings {
    pub max_count: u64,
    pub max_exceeded_message: String,
}

impl GuardSettings {
    pub fn resolve(options: GuardOptions) -> Self {
        Self {
            max_count: options.max_count.unwrap_or(DEFAULT_MAX_COUNT),
            max_exceeded_message: options
                .max_exceeded_message
                .unwrap_or_else(|| DEFAULT_MAX_EXCEEDED_MESSAGE.to_string()),
        }
    }

    /// Substitute {max_count} and {form_count}, each exactly once.
    pub fn render_message(&self, form_count: usize) -> String {
        self.max_exceeded_message
            .replacen("{max_count}", &self.max_count.to_string(), 1)
            .replacen("{form_count}", &form_count.to_string(), 1)
    }

    /// The user-interaction-free half of the check: count and compare.
    pub fn evaluate(&self, form: &FormSnapshot) -> Verdict {
        let count = count::estimate(form);
        let exceeded = count as u64 > self.max_count;
        Verdict {
            count,
            max_count: self.max_count,
            exceeded,
            message: exceeded.then(|| self.render_message(count)),
        }
    }
}

/// Outcome of evaluating one submit attempt, before any user interaction.
#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    pub count: usize,
    pub max_count: u64,
    pub exceeded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Per-form submission guard.
///
/// The confirm predicate is injectable so hosts can swap the blocking terminal
/// prompt for their own dialog, and tests for an auto-answer.
pub struct Guard {
    settings: GuardSettings,
    confirm: Box<dyn FnMut(usize, &str) -> bool>,
}

impl Guard {
    pub fn new(options: GuardOptions, confirm: Box<dyn FnMut(usize, &str) -> bool>) -> Self {
        Self {
            settings: GuardSettings::resolve(options),
            confirm,
        }
    }

    pub fn settings(&self) -> &GuardSettings {
        &self.settings
    }

    /// Whether the native submission may proceed. Blocks on the confirm
    /// predicate when the estimate exceeds the limit; returns false only when
    /// the user declines.
    pub fn check(&mut self, form: &FormSnapshot) -> bool {
        let verdict = self.settings.evaluate(form);
        tracing::debug!(
            count = verdict.count,
            max_count = verdict.max_count,
            exceeded = verdict.exceeded,
            "submit check"
        );
        match verdict.message {
            Some(message) => (self.confirm)(verdict.count, &message),
            None => true,
        }
    }
}
