pub mod core;

pub use crate::core::db::{
    Area, Group, HouseNumber, HouseNumberUpdate, InteractionOutcome, Marathon, MarathonDb,
    MarathonStatus, SeedSource,
};
pub use crate::core::error::{SessionError, StoreError};
pub use crate::core::session::Session;
pub use crate::core::stats::{Statistics, compute as compute_statistics};
