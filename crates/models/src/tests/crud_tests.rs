use crate::db::connect;
use crate::{member, board, comment};
use sea_orm::{DatabaseConnection, EntityTrait, ActiveModelTrait, Set, QueryFilter, ColumnTrait};
use anyhow::Result;
use migration::MigratorTrait;
use tokio::sync::OnceCell;
use uuid::Uuid;

static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// Setup test database with migrations applied once per test binary.
pub(super) async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect().await?;

    MIGRATED
        .get_or_try_init(|| async {
            migration::Migrator::up(&db, None).await?;
            Ok::<(), anyhow::Error>(())
        })
        .await?;

    Ok(db)
}

/// Test member CRUD operations
#[tokio::test]
async fn test_member_crud() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let db = setup_test_db().await?;

    // Test Create
    let email = format!("test_{}@example.com", Uuid::new_v4());
    let name = format!("Test Member {}", Uuid::new_v4());
    let created = member::create(&db, &email, &name).await?;

    assert_eq!(created.email, email);
    assert_eq!(created.name, name);
    assert!(created.id >= 1);

    // Test Read
    let found = member::Entity::find_by_id(created.id).one(&db).await?;
    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.email, email);

    // Test find by email
    let found_by_email = member::find_by_email(&db, &email).await?;
    assert!(found_by_email.is_some());
    assert_eq!(found_by_email.unwrap().id, created.id);

    // Duplicate email violates the unique index
    let dup = member::create(&db, &email, "Someone Else").await;
    assert!(dup.is_err());

    // Test Delete
    member::Entity::delete_by_id(created.id).exec(&db).await?;
    let after = member::Entity::find_by_id(created.id).one(&db).await?;
    assert!(after.is_none());

    Ok(())
}

/// Test member validation without touching the database
#[tokio::test]
async fn test_member_validation() -> Result<()> {
    assert!(member::validate_email("missing-at-sign.example.com").is_err());
    assert!(member::validate_email(&format!("{}@example.com", "a".repeat(300))).is_err());
    assert!(member::validate_name("   ").is_err());
    assert!(member::validate_name("ok").is_ok());
    Ok(())
}

/// Test board CRUD operations
#[tokio::test]
async fn test_board_crud() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let db = setup_test_db().await?;

    // Boards need an author
    let email = format!("board_test_{}@example.com", Uuid::new_v4());
    let author = member::create(&db, &email, "Board Author").await?;

    // Test Create
    let created = board::create(&db, author.id, "First board", "hello board").await?;
    assert_eq!(created.member_id, author.id);
    assert_eq!(created.title, "First board");
    assert_eq!(created.content, "hello board");

    // Empty title is rejected before hitting the database
    let bad = board::create(&db, author.id, "  ", "body").await;
    assert!(bad.is_err());

    // Test Read
    let found = board::Entity::find_by_id(created.id).one(&db).await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().id, created.id);

    // Test find by author
    let by_author = board::Entity::find()
        .filter(board::Column::MemberId.eq(author.id))
        .all(&db)
        .await?;
    assert!(by_author.iter().any(|b| b.id == created.id));

    // Cleanup
    board::Entity::delete_by_id(created.id).exec(&db).await?;
    member::Entity::delete_by_id(author.id).exec(&db).await?;

    Ok(())
}

/// Test comment persistence through the entity directly
#[tokio::test]
async fn test_comment_crud() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let db = setup_test_db().await?;

    let email = format!("comment_test_{}@example.com", Uuid::new_v4());
    let author = member::create(&db, &email, "Comment Author").await?;
    let parent = board::create(&db, author.id, "Commented board", "body").await?;

    // Test Create
    let am = comment::ActiveModel {
        board_id: Set(parent.id),
        member_id: Set(author.id),
        text: Set("hello".to_string()),
        created_at: Set(chrono::Utc::now().into()),
        ..Default::default()
    };
    let created = am.insert(&db).await?;
    assert_eq!(created.board_id, parent.id);
    assert_eq!(created.text, "hello");

    // Test Read
    let found = comment::Entity::find_by_id(created.id).one(&db).await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().text, "hello");

    // Test Update keeps the row identity
    let mut am: comment::ActiveModel = comment::Entity::find_by_id(created.id)
        .one(&db)
        .await?
        .unwrap()
        .into();
    am.text = Set("world".to_string());
    let updated = am.update(&db).await?;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.text, "world");
    assert_eq!(updated.created_at, created.created_at);

    // Test Delete
    comment::Entity::delete_by_id(created.id).exec(&db).await?;
    let after = comment::Entity::find_by_id(created.id).one(&db).await?;
    assert!(after.is_none());

    // Cleanup
    board::Entity::delete_by_id(parent.id).exec(&db).await?;
    member::Entity::delete_by_id(author.id).exec(&db).await?;

    Ok(())
}
