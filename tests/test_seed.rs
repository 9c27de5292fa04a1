//! Integration tests for loading the marathon catalog.

mod common;

use std::io::Write;

use common::*;

#[tokio::test]
async fn test_builtin_seed_shape() -> anyhow::Result<()> {
    let db = create_test_db().await;
    let marathons = db.get_marathons().await?;

    let ids: Vec<_> = marathons.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, [MARATHON_1, MARATHON_2, "marathon-3"]);

    let first = &marathons[0];
    assert_eq!(first.status, MarathonStatus::Current);
    assert_eq!(first.date.to_string(), "2024-05-15");
    let areas: Vec<_> = first.areas.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(areas, [AREA_1A, AREA_1B]);
    assert_eq!(
        first.meeting_point.as_ref().and_then(|p| p.address.as_deref()),
        Some("Central Park South Entrance")
    );

    let area = &first.areas[0];
    assert_eq!(area.house_numbers.len(), 3);
    assert_eq!(area.house_numbers[2].status, InteractionOutcome::RungBell);
    assert_eq!(area.last_interaction().map(|h| h.id.as_str()), Some("hn-3"));

    Ok(())
}

#[tokio::test]
async fn test_upcoming_needs_admin_preparation() -> anyhow::Result<()> {
    let db = create_test_db().await;
    let upcoming = db.get_upcoming_marathons().await?;
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].id, MARATHON_2);

    // marathon "m-b" is upcoming but not prepared
    let db = create_db_from_json(TWO_MARATHONS).await;
    assert!(db.get_upcoming_marathons().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_seed_from_file() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(TWO_MARATHONS.as_bytes())?;

    let db = MarathonDb::open(SeedSource::File(file.path().to_path_buf())).await?;
    let marathons = db.get_marathons().await?;
    assert_eq!(marathons.len(), 2);
    assert_eq!(marathons[1].areas[0].house_numbers[0].contact_name.as_deref(), Some("Eve"));

    Ok(())
}

#[tokio::test]
async fn test_missing_seed_file_fails() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("missing.json");

    let result = MarathonDb::open(SeedSource::File(path)).await;
    let error_msg = format!("{:#}", result.unwrap_err());
    assert!(
        error_msg.contains("Failed to initialize marathons"),
        "Error should mention initialization, got: {}",
        error_msg
    );

    Ok(())
}

#[tokio::test]
async fn test_malformed_seed_fails() {
    let result = MarathonDb::open(SeedSource::Json(r#"[{ "id": "broken" }]"#.to_string())).await;
    assert!(result.is_err());

    let result = MarathonDb::open(SeedSource::Json(
        r#"[{ "id": "m", "name": "M", "date": "2024-01-01", "status": "SOMEDAY",
              "adminPrepared": true, "areas": [] }]"#
            .to_string(),
    ))
    .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_failed_reset_keeps_live_tree() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(TWO_MARATHONS.as_bytes())?;
    file.flush()?;

    let db = MarathonDb::open(SeedSource::File(file.path().to_path_buf())).await?;
    db.set_house_status("m-a", "area-a", "h-a", InteractionOutcome::NotHome)
        .await?;
    let live = db.get_marathons().await?;

    // corrupt the seed, then retry
    std::fs::write(file.path(), "not json")?;
    assert!(db.reset_to_seed().await.is_err());
    assert_eq!(db.get_marathons().await?, live);

    std::fs::write(file.path(), TWO_MARATHONS)?;
    db.reset_to_seed().await?;
    let restored = db
        .get_house_number("m-a", "area-a", "h-a")
        .await?
        .expect("h-a");
    assert_eq!(restored.status, InteractionOutcome::Pending);

    Ok(())
}

#[tokio::test]
async fn test_marathons_round_trip_through_json() -> anyhow::Result<()> {
    let db = create_test_db().await;
    let marathons = db.get_marathons().await?;

    let json = serde_json::to_string(&marathons)?;
    let reloaded = create_db_from_json(&json).await;
    assert_eq!(reloaded.get_marathons().await?, marathons);

    Ok(())
}
