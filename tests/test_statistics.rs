//! Integration tests for statistics over the live store.

mod common;

use common::*;
use outreach::core::stats::{self, OutcomeCounts};

#[tokio::test]
async fn test_seed_statistics() -> anyhow::Result<()> {
    let db = create_test_db().await;
    let snapshot = stats::compute(&db.get_marathons().await?);

    assert_eq!(snapshot.total_marathons, 3);
    assert_eq!(snapshot.total_completed_marathons, 1);
    assert_eq!(snapshot.participants_count, 3);
    assert_eq!(snapshot.saved_count(), 1);

    let first = &snapshot.marathon_stats[0];
    assert_eq!(first.marathon_name, "Spring Outreach 2024");
    assert_eq!(first.houses_visited, 2);
    assert_eq!(
        first.outcomes,
        OutcomeCounts::from([
            (InteractionOutcome::NoInterest, 1),
            (InteractionOutcome::RungBell, 1),
        ])
    );

    Ok(())
}

#[tokio::test]
async fn test_statistics_follow_updates() -> anyhow::Result<()> {
    let db = create_test_db().await;
    let before = stats::compute(&db.get_marathons().await?);

    db.set_house_status(MARATHON_1, AREA_1A, "hn-1", InteractionOutcome::Saved)
        .await?;
    db.set_house_status(MARATHON_2, AREA_2A, "hn-6", InteractionOutcome::NotHome)
        .await?;
    // back to pending stops counting
    db.set_house_status(MARATHON_1, AREA_1A, "hn-3", InteractionOutcome::Pending)
        .await?;

    let after = stats::compute(&db.get_marathons().await?);
    assert_eq!(after.saved_count(), before.saved_count() + 1);
    assert_eq!(after.marathon_stats[0].houses_visited, 2);
    assert_eq!(after.marathon_stats[1].houses_visited, 1);
    assert_eq!(after.total_visited(), before.total_visited() + 1);
    assert!(!after.marathon_stats[0].outcomes.contains_key(&InteractionOutcome::RungBell));
    assert_eq!(
        after.overall_outcomes.values().sum::<usize>(),
        after.total_visited()
    );

    // compute has no hidden state
    assert_eq!(after, stats::compute(&db.get_marathons().await?));

    Ok(())
}

#[tokio::test]
async fn test_statistics_serialize_with_wire_names() -> anyhow::Result<()> {
    let db = create_db_from_json(TWO_MARATHONS).await;
    let snapshot = stats::compute(&db.get_marathons().await?);
    let json = serde_json::to_value(&snapshot)?;

    assert_eq!(json["totalMarathons"], 2);
    assert_eq!(json["overallOutcomes"]["SAVED"], 1);
    assert_eq!(json["marathonStats"][1]["housesVisited"], 1);

    Ok(())
}
