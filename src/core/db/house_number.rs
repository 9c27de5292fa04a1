use std::future::Future;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::core::db::model::InteractionOutcome;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseNumber {
    pub id: String,
    pub address: String,
    pub status: InteractionOutcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_interaction_time: Option<OffsetDateTime>,
    #[serde(skip)]
    pub(super) _guard: (),
}

/// Partial update for a house number.
///
/// `None` leaves a field alone. For the clearable fields the inner option
/// decides between setting a value and clearing it.
#[derive(Debug, Clone, Default)]
pub struct HouseNumberUpdate {
    pub address: Option<String>,
    pub status: Option<InteractionOutcome>,
    pub notes: Option<Option<String>>,
    pub contact_name: Option<Option<String>>,
    pub contact_phone: Option<Option<String>>,
    pub contact_email: Option<Option<String>>,
    pub last_interaction_time: Option<Option<OffsetDateTime>>,
}

impl HouseNumberUpdate {
    /// Quick status change from the house list.
    pub fn status(status: InteractionOutcome) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// A full interaction as logged from the interaction form. A missing
    /// argument leaves the field alone, an empty string clears it. Contacts
    /// on outcomes that do not carry them are dropped by the merge.
    pub fn interaction(
        status: InteractionOutcome,
        notes: Option<String>,
        contact_name: Option<String>,
        contact_phone: Option<String>,
        contact_email: Option<String>,
    ) -> Self {
        let field = |value: Option<String>| value.map(|v| Some(v).filter(|v| !v.trim().is_empty()));
        Self {
            address: None,
            status: Some(status),
            notes: field(notes),
            contact_name: field(contact_name),
            contact_phone: field(contact_phone),
            contact_email: field(contact_email),
            last_interaction_time: None,
        }
    }
}

impl HouseNumber {
    pub fn is_visited(&self) -> bool {
        self.status.is_visited()
    }

    pub fn has_contact(&self) -> bool {
        self.contact_name.is_some() || self.contact_phone.is_some() || self.contact_email.is_some()
    }

    /// Merge `update` into a copy of this record. Any update carrying a status
    /// stamps `now` unless it brings its own timestamp.
    pub(super) fn merged(&self, update: &HouseNumberUpdate, now: OffsetDateTime) -> HouseNumber {
        let mut next = self.clone();
        if let Some(address) = &update.address {
            next.address = address.clone();
        }
        if let Some(status) = update.status {
            next.status = status;
            next.last_interaction_time = Some(now);
        }
        if let Some(notes) = &update.notes {
            next.notes = notes.clone();
        }
        if let Some(name) = &update.contact_name {
            next.contact_name = name.clone();
        }
        if let Some(phone) = &update.contact_phone {
            next.contact_phone = phone.clone();
        }
        if let Some(email) = &update.contact_email {
            next.contact_email = email.clone();
        }
        if let Some(time) = update.last_interaction_time {
            next.last_interaction_time = time;
        }
        if !next.status.carries_contact() {
            next.contact_name = None;
            next.contact_phone = None;
            next.contact_email = None;
        }
        next
    }
}

pub trait HouseNumberRepository {
    fn get_house_number(
        &self,
        marathon_id: &str,
        area_id: &str,
        house_id: &str,
    ) -> impl Future<Output = anyhow::Result<Option<HouseNumber>>>;
    fn update_house_number(
        &self,
        marathon_id: &str,
        area_id: &str,
        house_id: &str,
        update: &HouseNumberUpdate,
    ) -> impl Future<Output = anyhow::Result<HouseNumber>>;
    fn set_house_status(
        &self,
        marathon_id: &str,
        area_id: &str,
        house_id: &str,
        status: InteractionOutcome,
    ) -> impl Future<Output = anyhow::Result<HouseNumber>> {
        async move {
            self.update_house_number(
                marathon_id,
                area_id,
                house_id,
                &HouseNumberUpdate::status(status),
            )
            .await
        }
    }
}
