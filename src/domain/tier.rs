use serde::Serialize;
use std::fmt;

/// Experience class of a consultant. Consultants move up one tier per
/// simulated year until fully ramped.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ConsultantTier {
    Year1,
    Year2,
    Full,
}

impl ConsultantTier {
    pub const ALL: [ConsultantTier; 3] = [
        ConsultantTier::Year1,
        ConsultantTier::Year2,
        ConsultantTier::Full,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ConsultantTier::Year1 => "Year 1",
            ConsultantTier::Year2 => "Year 2",
            ConsultantTier::Full => "Full",
        }
    }
}

impl fmt::Display for ConsultantTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
