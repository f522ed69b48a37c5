use super::*;

/// Tests deleting every user.
///
/// Expected: Ok with number of deleted rows and an empty table afterwards
#[tokio::test]
async fn deletes_all_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;
    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete_all().await?;

    assert_eq!(deleted, 2);
    assert_eq!(repo.count().await?, 0);

    Ok(())
}

/// Tests deleting from an empty table.
///
/// Expected: Ok(0)
#[tokio::test]
async fn succeeds_on_empty_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let deleted = repo.delete_all().await?;

    assert_eq!(deleted, 0);

    Ok(())
}

/// Tests that emails can be reused after a reset.
///
/// Expected: Ok with the same email inserted again
#[tokio::test]
async fn frees_emails_for_reuse() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_email(db, "walt@breakingbad.com").await?;

    let repo = UserRepository::new(db);
    repo.delete_all().await?;

    let user = repo
        .create(CreateUserParam {
            email: "walt@breakingbad.com".to_string(),
        })
        .await?;

    assert_eq!(user.email, "walt@breakingbad.com");

    Ok(())
}
