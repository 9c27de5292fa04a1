use std::{fmt, future::Future};

use serde::{Deserialize, Serialize};
use time::Date;

use crate::core::db::{area::Area, model::GeoPoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarathonStatus {
    Upcoming,
    Current,
    Past,
}

impl fmt::Display for MarathonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarathonStatus::Upcoming => f.write_str("UPCOMING"),
            MarathonStatus::Current => f.write_str("CURRENT"),
            MarathonStatus::Past => f.write_str("PAST"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marathon {
    pub id: String,
    pub name: String,
    pub date: Date,
    pub status: MarathonStatus,
    pub admin_prepared: bool,
    pub areas: Vec<Area>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_point: Option<GeoPoint>,
    #[serde(skip)]
    pub(super) _guard: (),
}

impl Marathon {
    pub fn area(&self, id: &str) -> Option<&Area> {
        self.areas.iter().find(|a| a.id == id)
    }

    pub fn contains_area(&self, id: &str) -> bool {
        self.area(id).is_some()
    }

    /// Listed on the upcoming page only once an admin prepared the maps.
    pub fn is_listed_upcoming(&self) -> bool {
        self.status == MarathonStatus::Upcoming && self.admin_prepared
    }
}

pub trait MarathonRepository {
    fn get_marathons(&self) -> impl Future<Output = anyhow::Result<Vec<Marathon>>>;
    fn get_marathon_by_id(&self, id: &str) -> impl Future<Output = anyhow::Result<Option<Marathon>>>;
    fn get_upcoming_marathons(&self) -> impl Future<Output = anyhow::Result<Vec<Marathon>>>;
    fn get_default_marathon(&self) -> impl Future<Output = anyhow::Result<Option<Marathon>>>;
    fn replace_marathon(&self, marathon: Marathon) -> impl Future<Output = anyhow::Result<Marathon>>;
    fn reset_to_seed(&self) -> impl Future<Output = anyhow::Result<()>>;
}
