//! Integration tests for `PostRepo` against a real Postgres database.
//!
//! Ignored by default; run with `DATABASE_URL` set and `cargo test -- --ignored`.

use postboard_db::models::post::PostInput;
use postboard_db::repositories::PostRepo;
use sqlx::PgPool;

fn input(title: &str, content: &str) -> PostInput {
    PostInput {
        title: title.to_string(),
        content: content.to_string(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn create_and_find(pool: PgPool) {
    let created = PostRepo::create(&pool, &input("First", "Hello")).await.unwrap();
    assert_eq!(created.title, "First");
    assert_eq!(created.content, "Hello");
    assert_eq!(created.created_at, created.updated_at);

    let found = PostRepo::find_by_id(&pool, created.id).await.unwrap();
    assert_eq!(found, Some(created));
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn list_returns_newest_first(pool: PgPool) {
    let first = PostRepo::create(&pool, &input("one", "1")).await.unwrap();
    let second = PostRepo::create(&pool, &input("two", "2")).await.unwrap();

    let posts = PostRepo::list(&pool).await.unwrap();

    let ids: Vec<_> = posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn update_replaces_fields(pool: PgPool) {
    let created = PostRepo::create(&pool, &input("old", "old body")).await.unwrap();

    let updated = PostRepo::update(&pool, created.id, &input("new", "new body"))
        .await
        .unwrap()
        .expect("post should exist");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "new");
    assert_eq!(updated.content, "new body");
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn update_missing_returns_none(pool: PgPool) {
    let result = PostRepo::update(&pool, 999_999, &input("t", "c")).await.unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn delete_reports_whether_a_row_was_removed(pool: PgPool) {
    let created = PostRepo::create(&pool, &input("bye", "soon")).await.unwrap();

    assert!(PostRepo::delete(&pool, created.id).await.unwrap());
    assert!(!PostRepo::delete(&pool, created.id).await.unwrap());
    assert!(PostRepo::find_by_id(&pool, created.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn health_check_passes(pool: PgPool) {
    postboard_db::health_check(&pool).await.unwrap();
}
