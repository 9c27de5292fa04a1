//! Viewer-local state: which marathon and area are on screen, and which area
//! the viewer's group is working.
//!
//! The session only keeps ids. Every accessor resolves them against the store,
//! so a replaced record is always seen in its latest version.

use crate::core::{
    db::{Area, AreaRepository, Group, Marathon, MarathonRepository},
    error::{RecordKind, SessionError, StoreError},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaRef {
    pub marathon_id: String,
    pub area_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    selected_marathon: Option<String>,
    selected_area: Option<AreaRef>,
    active_group: Option<Group>,
}

impl Session {
    pub fn new(active_group: Option<Group>) -> Self {
        Self {
            selected_marathon: None,
            selected_area: None,
            active_group,
        }
    }

    /// Session as it looks right after loading: the default group is signed
    /// in and the default marathon is selected.
    pub async fn start<R: MarathonRepository>(db: &R) -> anyhow::Result<Self> {
        let mut session = Session::new(Some(Group::default()));
        session.selected_marathon = db.get_default_marathon().await?.map(|m| m.id);
        Ok(session)
    }

    pub fn selected_marathon_id(&self) -> Option<&str> {
        self.selected_marathon.as_deref()
    }

    pub fn selected_area_ref(&self) -> Option<&AreaRef> {
        self.selected_area.as_ref()
    }

    pub fn active_group(&self) -> Option<&Group> {
        self.active_group.as_ref()
    }

    pub async fn current_marathon<R: MarathonRepository>(
        &self,
        db: &R,
    ) -> anyhow::Result<Option<Marathon>> {
        match &self.selected_marathon {
            Some(id) => db.get_marathon_by_id(id).await,
            None => Ok(None),
        }
    }

    pub async fn selected_area<R: AreaRepository>(&self, db: &R) -> anyhow::Result<Option<Area>> {
        match &self.selected_area {
            Some(r) => db.get_area(&r.marathon_id, &r.area_id).await,
            None => Ok(None),
        }
    }

    /// The area the active group is working, looked up in the selected
    /// marathon.
    pub async fn engaged_area<R: MarathonRepository>(&self, db: &R) -> anyhow::Result<Option<Area>> {
        let Some(area_id) = self.active_group.as_ref().and_then(|g| g.active_area_id.as_deref())
        else {
            return Ok(None);
        };
        Ok(self
            .current_marathon(db)
            .await?
            .and_then(|m| m.area(area_id).cloned()))
    }

    pub fn is_engaged_in_selected_area(&self) -> bool {
        match (&self.active_group, &self.selected_area) {
            (Some(group), Some(area)) => {
                self.selected_marathon.as_deref() == Some(area.marathon_id.as_str())
                    && group.active_area_id.as_deref() == Some(area.area_id.as_str())
            }
            _ => false,
        }
    }

    /// Switch the marathon on screen. The area selection is dropped, and so is
    /// the group's engagement unless it lies inside the new marathon.
    pub async fn select_marathon<R: MarathonRepository>(
        &mut self,
        db: &R,
        marathon_id: Option<&str>,
    ) -> Result<(), SessionError> {
        let marathon = match marathon_id {
            Some(id) => Some(self.lookup_marathon(db, id).await?),
            None => None,
        };

        self.selected_marathon = marathon.as_ref().map(|m| m.id.clone());
        self.selected_area = None;

        if let Some(group) = self.active_group.as_mut() {
            let keeps_engagement = match (&marathon, &group.active_area_id) {
                (Some(m), Some(area_id)) => m.contains_area(area_id),
                _ => false,
            };
            if !keeps_engagement && group.active_area_id.take().is_some() {
                tracing::info!(group_id = %group.id, "engagement cleared by marathon switch");
            }
        }
        Ok(())
    }

    pub async fn select_area<R: AreaRepository>(
        &mut self,
        db: &R,
        marathon_id: &str,
        area_id: &str,
    ) -> Result<(), SessionError> {
        let area = self.lookup_area(db, marathon_id, area_id).await?;
        self.selected_area = Some(AreaRef {
            marathon_id: marathon_id.to_string(),
            area_id: area.id,
        });
        Ok(())
    }

    pub fn clear_area_selection(&mut self) {
        self.selected_area = None;
    }

    /// Put the active group to work in an area. The area's marathon becomes
    /// the selected one and the area the selected area.
    pub async fn start_engagement<R: AreaRepository>(
        &mut self,
        db: &R,
        marathon_id: &str,
        area_id: &str,
        group_id: &str,
    ) -> Result<Area, SessionError> {
        let Some(group) = self.active_group.as_ref() else {
            tracing::warn!(group_id, area_id, "engagement rejected, no active group");
            return Err(SessionError::NoActiveGroup);
        };
        if group.id != group_id {
            tracing::warn!(
                group_id,
                active_group_id = %group.id,
                "engagement rejected, group mismatch"
            );
            return Err(SessionError::PermissionDenied {
                requested: group_id.to_string(),
                active: group.id.clone(),
            });
        }

        let area = self.lookup_area(db, marathon_id, area_id).await?;
        if let Some(group) = self.active_group.as_mut() {
            group.active_area_id = Some(area.id.clone());
        }
        self.selected_marathon = Some(marathon_id.to_string());
        self.selected_area = Some(AreaRef {
            marathon_id: marathon_id.to_string(),
            area_id: area.id.clone(),
        });
        tracing::info!(group_id, area_id, marathon_id, "engagement started");
        Ok(area)
    }

    /// Leave the engaged area. Returns the area id that was being worked, if
    /// any. `last_house_id` is recorded in the log only.
    pub fn end_engagement(&mut self, last_house_id: Option<&str>) -> Option<String> {
        let group = self.active_group.as_mut()?;
        let ended = group.active_area_id.take();
        tracing::info!(
            group_id = %group.id,
            area_id = ?ended,
            last_house_id = ?last_house_id,
            "engagement ended"
        );
        ended
    }

    async fn lookup_marathon<R: MarathonRepository>(
        &self,
        db: &R,
        id: &str,
    ) -> Result<Marathon, SessionError> {
        match db.get_marathon_by_id(id).await? {
            Some(marathon) => Ok(marathon),
            None => {
                tracing::warn!(marathon_id = id, "marathon not found");
                Err(StoreError::not_found(RecordKind::Marathon, id).into())
            }
        }
    }

    async fn lookup_area<R: AreaRepository>(
        &self,
        db: &R,
        marathon_id: &str,
        area_id: &str,
    ) -> Result<Area, SessionError> {
        match db.get_area(marathon_id, area_id).await? {
            Some(area) => Ok(area),
            None => {
                tracing::warn!(marathon_id, area_id, "area not found");
                Err(StoreError::not_found(RecordKind::Area, area_id).into())
            }
        }
    }
}
