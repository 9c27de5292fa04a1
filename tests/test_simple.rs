use outreach::core::db::{MarathonDb, MarathonRepository, SeedSource};

#[tokio::test]
async fn test_simple() -> anyhow::Result<()> {
    let db = MarathonDb::open(SeedSource::Builtin).await?;

    let marathons = db.get_marathons().await?;
    assert_eq!(marathons.len(), 3);

    Ok(())
}
