mod area;
mod group;
mod house_number;
mod marathon;
mod model;
mod state;

use std::sync::Arc;

use state::StoreState;
use time::OffsetDateTime;

pub use area::{Area, AreaRepository};
pub use group::{DEFAULT_GROUP_ID, DEFAULT_GROUP_NAME, Engagement, Group};
pub use house_number::{HouseNumber, HouseNumberRepository, HouseNumberUpdate};
pub use marathon::{Marathon, MarathonRepository, MarathonStatus};
pub use model::{GeoPoint, InteractionOutcome};
pub use state::SeedSource;

use crate::core::error::{RecordKind, StoreError};

/// In-memory marathon store. Cloning hands out another handle to the same tree.
#[derive(Debug, Clone)]
pub struct MarathonDb {
    state: Arc<StoreState>,
}

impl MarathonDb {
    pub async fn open(source: SeedSource) -> anyhow::Result<Self> {
        Ok(Self {
            state: Arc::new(StoreState::new(source).await?),
        })
    }

    pub async fn builtin() -> anyhow::Result<Self> {
        Self::open(SeedSource::Builtin).await
    }
}

impl MarathonRepository for MarathonDb {
    async fn get_marathons(&self) -> anyhow::Result<Vec<Marathon>> {
        Ok(self.state.read().await.clone())
    }

    async fn get_marathon_by_id(&self, id: &str) -> anyhow::Result<Option<Marathon>> {
        let marathons = self.state.read().await;
        Ok(marathons.iter().find(|m| m.id == id).cloned())
    }

    async fn get_upcoming_marathons(&self) -> anyhow::Result<Vec<Marathon>> {
        let marathons = self.state.read().await;
        Ok(marathons
            .iter()
            .filter(|m| m.is_listed_upcoming())
            .cloned()
            .collect())
    }

    async fn get_default_marathon(&self) -> anyhow::Result<Option<Marathon>> {
        let marathons = self.state.read().await;
        let chosen = marathons
            .iter()
            .find(|m| m.status == MarathonStatus::Current)
            .or_else(|| {
                marathons
                    .iter()
                    .find(|m| m.status == MarathonStatus::Upcoming)
            })
            .or_else(|| marathons.first());
        Ok(chosen.cloned())
    }

    async fn replace_marathon(&self, marathon: Marathon) -> anyhow::Result<Marathon> {
        let mut marathons = self.state.write().await;
        let Some(slot) = marathons.iter_mut().find(|m| m.id == marathon.id) else {
            tracing::warn!(marathon_id = %marathon.id, "replace skipped, unknown marathon");
            return Err(StoreError::not_found(RecordKind::Marathon, &marathon.id).into());
        };
        *slot = marathon;
        Ok(slot.clone())
    }

    async fn reset_to_seed(&self) -> anyhow::Result<()> {
        self.state.reset().await
    }
}

impl AreaRepository for MarathonDb {
    async fn get_area(&self, marathon_id: &str, area_id: &str) -> anyhow::Result<Option<Area>> {
        let marathons = self.state.read().await;
        Ok(marathons
            .iter()
            .find(|m| m.id == marathon_id)
            .and_then(|m| m.area(area_id))
            .cloned())
    }
}

impl HouseNumberRepository for MarathonDb {
    async fn get_house_number(
        &self,
        marathon_id: &str,
        area_id: &str,
        house_id: &str,
    ) -> anyhow::Result<Option<HouseNumber>> {
        let marathons = self.state.read().await;
        Ok(marathons
            .iter()
            .find(|m| m.id == marathon_id)
            .and_then(|m| m.area(area_id))
            .and_then(|a| a.house_number(house_id))
            .cloned())
    }

    async fn update_house_number(
        &self,
        marathon_id: &str,
        area_id: &str,
        house_id: &str,
        update: &HouseNumberUpdate,
    ) -> anyhow::Result<HouseNumber> {
        let mut marathons = self.state.write().await;
        let miss = |kind: RecordKind, id: &str| {
            tracing::warn!(marathon_id, area_id, house_id, "update skipped, {} {} not found", kind, id);
            StoreError::not_found(kind, id)
        };

        let marathon = marathons
            .iter_mut()
            .find(|m| m.id == marathon_id)
            .ok_or_else(|| miss(RecordKind::Marathon, marathon_id))?;
        let area = marathon
            .areas
            .iter_mut()
            .find(|a| a.id == area_id)
            .ok_or_else(|| miss(RecordKind::Area, area_id))?;
        let house = area
            .house_numbers
            .iter_mut()
            .find(|h| h.id == house_id)
            .ok_or_else(|| miss(RecordKind::HouseNumber, house_id))?;

        let next = house.merged(update, OffsetDateTime::now_utc());
        *house = next.clone();
        tracing::info!(
            marathon_id,
            area_id,
            house_id,
            status = %next.status,
            "logged interaction"
        );
        Ok(next)
    }
}
