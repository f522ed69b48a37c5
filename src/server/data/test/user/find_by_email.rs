use super::*;

/// Tests finding a user by exact email.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::create_user_with_email(db, "saul@bettercall.com").await?;
    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_email("saul@bettercall.com").await?;

    assert_eq!(result.map(|u| u.id), Some(created.id));

    Ok(())
}

/// Tests looking up an email that is not registered.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_email(db, "saul@bettercall.com").await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_email("kim@bettercall.com").await?;

    assert!(result.is_none());

    Ok(())
}
