use serde::{Deserialize, Serialize};

pub const DEFAULT_GROUP_ID: &str = "group-default";
pub const DEFAULT_GROUP_NAME: &str = "Default Group Alpha";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub active_area_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_identifier: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engagement<'a> {
    Idle,
    Engaged(&'a str),
}

impl Group {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            active_area_id: None,
            device_identifier: None,
        }
    }

    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device_identifier = Some(device.into());
        self
    }

    pub fn engagement(&self) -> Engagement<'_> {
        match &self.active_area_id {
            Some(area_id) => Engagement::Engaged(area_id),
            None => Engagement::Idle,
        }
    }
}

impl Default for Group {
    fn default() -> Self {
        Group::new(DEFAULT_GROUP_ID, DEFAULT_GROUP_NAME)
    }
}
