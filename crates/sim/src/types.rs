use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SimError;

/// Observed traffic features, each in `[0.0, 1.0)`.
///
/// Only `anomaly_score` drives any decision today. The other three features
/// travel with the state so consumers see the full four-feature shape.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct State {
    pub anomaly_score: f32,
    pub packet_rate: f32,
    pub failed_logins: f32,
    pub cpu_usage: f32,
}

impl State {
    /// Number of features in a state.
    pub const LEN: usize = 4;

    #[must_use]
    pub const fn new(anomaly_score: f32, packet_rate: f32, failed_logins: f32, cpu_usage: f32) -> Self {
        Self { anomaly_score, packet_rate, failed_logins, cpu_usage }
    }

    /// State with the given anomaly score and all other features zeroed.
    #[must_use]
    pub const fn with_anomaly(anomaly_score: f32) -> Self {
        Self::new(anomaly_score, 0.0, 0.0, 0.0)
    }

    /// Draws four independent uniform features.
    pub fn sample(rng: &mut fastrand::Rng) -> Self {
        Self::new(rng.f32(), rng.f32(), rng.f32(), rng.f32())
    }

    /// Features in their canonical order.
    #[must_use]
    pub const fn to_array(self) -> [f32; Self::LEN] {
        [self.anomaly_score, self.packet_rate, self.failed_logins, self.cpu_usage]
    }
}

impl From<[f32; State::LEN]> for State {
    fn from(v: [f32; State::LEN]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

/// Mitigation chosen for a traffic sample. Higher ordinal means more severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "u8")]
pub enum Action {
    Allow = 0,
    Alert = 1,
    Block = 2,
    Isolate = 3,
}

impl Action {
    pub const COUNT: usize = 4;

    /// All actions in ordinal order.
    pub const ALL: [Action; Self::COUNT] = [Action::Allow, Action::Alert, Action::Block, Action::Isolate];

    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Index into tables sized [`Action::COUNT`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Action::Allow => "Allow",
            Action::Alert => "Alert",
            Action::Block => "Block",
            Action::Isolate => "Isolate",
        }
    }

    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Action::Allow => Severity::Low,
            Action::Alert => Severity::Medium,
            Action::Block => Severity::High,
            Action::Isolate => Severity::Critical,
        }
    }

    /// Whether this action mitigates traffic in any way.
    #[must_use]
    pub const fn is_mitigation(self) -> bool {
        !matches!(self, Action::Allow)
    }
}

impl TryFrom<i64> for Action {
    type Error = SimError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Action::Allow),
            1 => Ok(Action::Alert),
            2 => Ok(Action::Block),
            3 => Ok(Action::Isolate),
            other => Err(SimError::InvalidAction(other)),
        }
    }
}

impl TryFrom<usize> for Action {
    type Error = SimError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Action::ALL
            .get(value)
            .copied()
            .ok_or(SimError::InvalidAction(i64::try_from(value).unwrap_or(i64::MAX)))
    }
}

impl From<Action> for u8 {
    fn from(action: Action) -> Self {
        action.ordinal()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Severity label attached to an action for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cloud provider a traffic sample is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CloudProvider {
    #[serde(rename = "AWS")]
    Aws,
    Azure,
    #[serde(rename = "GCP")]
    Gcp,
}

impl CloudProvider {
    pub const COUNT: usize = 3;

    /// Providers in reporting order.
    pub const ALL: [CloudProvider; Self::COUNT] = [CloudProvider::Aws, CloudProvider::Azure, CloudProvider::Gcp];

    /// Picks a provider uniformly at random.
    pub fn sample(rng: &mut fastrand::Rng) -> Self {
        Self::ALL[rng.usize(..Self::COUNT)]
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CloudProvider::Aws => "AWS",
            CloudProvider::Azure => "Azure",
            CloudProvider::Gcp => "GCP",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<i64> for CloudProvider {
    type Error = SimError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(SimError::InvalidCloud(value))
    }
}

impl fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Side information returned with every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepInfo {
    /// Provider attributed to the freshly sampled next state.
    pub cloud: CloudProvider,
    /// Whether the state the action was applied to was an attack.
    pub is_attack: bool,
}

/// Result of applying one action to the environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    pub next_state: State,
    pub reward: i32,
    /// Always `false`; the simulation never ends on its own.
    pub terminal: bool,
    pub info: StepInfo,
}
