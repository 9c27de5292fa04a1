use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl GeoPoint {
    /// Address if known, otherwise the raw coordinates.
    pub fn describe(&self) -> String {
        match &self.address {
            Some(address) => address.clone(),
            None => format!("{:.4}, {:.4}", self.lat, self.lng),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InteractionOutcome {
    Pending,
    Saved,
    NoInterest,
    FollowUp,
    NotHome,
    RungBell,
}

impl InteractionOutcome {
    pub const ALL: [InteractionOutcome; 6] = [
        InteractionOutcome::Pending,
        InteractionOutcome::Saved,
        InteractionOutcome::NoInterest,
        InteractionOutcome::FollowUp,
        InteractionOutcome::NotHome,
        InteractionOutcome::RungBell,
    ];

    /// Anything but `Pending` means somebody went to the door.
    pub fn is_visited(self) -> bool {
        self != InteractionOutcome::Pending
    }

    /// Only these outcomes may keep contact details on the house record.
    pub fn carries_contact(self) -> bool {
        matches!(self, InteractionOutcome::Saved | InteractionOutcome::FollowUp)
    }

    fn wire_name(self) -> &'static str {
        match self {
            InteractionOutcome::Pending => "PENDING",
            InteractionOutcome::Saved => "SAVED",
            InteractionOutcome::NoInterest => "NO_INTEREST",
            InteractionOutcome::FollowUp => "FOLLOW_UP",
            InteractionOutcome::NotHome => "NOT_HOME",
            InteractionOutcome::RungBell => "RUNG_BELL",
        }
    }
}

impl fmt::Display for InteractionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.wire_name().replace('_', " "))
    }
}

impl TryFrom<&str> for InteractionOutcome {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase().replace([' ', '-'], "_");
        InteractionOutcome::ALL
            .into_iter()
            .find(|outcome| outcome.wire_name() == normalized)
            .ok_or_else(|| anyhow::anyhow!("Invalid interaction outcome: {}", value))
    }
}
