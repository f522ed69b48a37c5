use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository stores the email and assigns a fresh ID with matching
/// creation and update timestamps.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            email: "walt@breakingbad.com".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.email, "walt@breakingbad.com");
    assert!(!user.id.is_nil());
    assert_eq!(user.created_at, user.updated_at);

    Ok(())
}

/// Tests that each created user receives a distinct ID.
///
/// Expected: Ok with two users having different IDs
#[tokio::test]
async fn assigns_unique_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let first = repo
        .create(CreateUserParam {
            email: "first@example.com".to_string(),
        })
        .await?;
    let second = repo
        .create(CreateUserParam {
            email: "second@example.com".to_string(),
        })
        .await?;

    assert_ne!(first.id, second.id);

    Ok(())
}

/// Tests that the email unique constraint is enforced.
///
/// Expected: Err on the second insert with the same email
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_email(db, "walt@breakingbad.com").await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            email: "walt@breakingbad.com".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
