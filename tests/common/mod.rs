mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from outreach for tests
#[allow(unused_imports)]
pub use outreach::core::db::{
    Area, AreaRepository, Engagement, Group, HouseNumber, HouseNumberRepository,
    HouseNumberUpdate, InteractionOutcome, Marathon, MarathonDb, MarathonRepository,
    MarathonStatus, SeedSource,
};
#[allow(unused_imports)]
pub use outreach::core::error::{RecordKind, SessionError, StoreError};
