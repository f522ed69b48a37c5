use super::*;

/// Tests counting users.
///
/// Expected: Ok(0) on an empty table, Ok(3) after three inserts
#[tokio::test]
async fn counts_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert_eq!(repo.count().await?, 0);

    for _ in 0..3 {
        factory::user::create_user(db).await?;
    }

    assert_eq!(repo.count().await?, 3);

    Ok(())
}
