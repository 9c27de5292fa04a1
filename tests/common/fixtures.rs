#![allow(dead_code)]

use outreach::core::db::{MarathonDb, SeedSource};

/// Opens a store over the built-in seed catalog.
pub async fn create_test_db() -> MarathonDb {
    MarathonDb::open(SeedSource::Builtin)
        .await
        .expect("Failed to load built-in seed")
}

/// Opens a store over an inline JSON catalog.
pub async fn create_db_from_json(json: &str) -> MarathonDb {
    MarathonDb::open(SeedSource::Json(json.to_string()))
        .await
        .expect("Failed to load inline seed")
}

/// Two marathons, each with one area and one house.
pub const TWO_MARATHONS: &str = r#"[
  {
    "id": "m-a",
    "name": "Alpha",
    "date": "2025-03-01",
    "status": "CURRENT",
    "adminPrepared": false,
    "areas": [
      { "id": "area-a", "name": "North", "houseNumbers": [
        { "id": "h-a", "address": "1 North Rd", "status": "PENDING" }
      ] }
    ]
  },
  {
    "id": "m-b",
    "name": "Beta",
    "date": "2025-04-01",
    "status": "UPCOMING",
    "adminPrepared": false,
    "areas": [
      { "id": "area-b", "name": "South", "houseNumbers": [
        { "id": "h-b", "address": "1 South Rd", "status": "SAVED", "contactName": "Eve" }
      ] }
    ]
  }
]"#;

pub const MARATHON_1: &str = "marathon-1";
pub const AREA_1A: &str = "area-1a";
pub const AREA_1B: &str = "area-1b";
pub const MARATHON_2: &str = "marathon-2";
pub const AREA_2A: &str = "area-2a";
