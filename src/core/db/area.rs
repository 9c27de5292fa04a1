use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::core::db::{house_number::HouseNumber, model::GeoPoint};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub id: String,
    pub name: String,
    pub house_numbers: Vec<HouseNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_point: Option<GeoPoint>,
    #[serde(skip)]
    pub(super) _guard: (),
}

impl Area {
    pub fn house_number(&self, id: &str) -> Option<&HouseNumber> {
        self.house_numbers.iter().find(|h| h.id == id)
    }

    pub fn visited_count(&self) -> usize {
        self.house_numbers.iter().filter(|h| h.is_visited()).count()
    }

    /// The visited house with the newest interaction timestamp, used to ask the
    /// group where they stopped when they end an engagement.
    pub fn last_interaction(&self) -> Option<&HouseNumber> {
        self.house_numbers
            .iter()
            .filter(|h| h.is_visited())
            .filter_map(|h| h.last_interaction_time.map(|t| (t, h)))
            .max_by_key(|(t, _)| *t)
            .map(|(_, h)| h)
    }
}

pub trait AreaRepository {
    fn get_area(
        &self,
        marathon_id: &str,
        area_id: &str,
    ) -> impl Future<Output = anyhow::Result<Option<Area>>>;
}
