// tests/pg_store_tests.rs

use std::collections::HashSet;

use sqlx::postgres::PgPoolOptions;
use trivia_api::{
    models::{question::NewQuestion, quiz::CategoryFilter},
    services::quiz::select_quiz_question,
    store::{PgStore, StoreError, TriviaStore},
};

/// Connects to DATABASE_URL and applies migrations.
async fn connect() -> PgStore {
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
        .expect("Failed to connect to Postgres for testing. Make sure DATABASE_URL is set.");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to migrate database");

    PgStore::new(pool)
}

#[tokio::test]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn pg_store_contract() {
    let store = connect().await;

    let science = store.find_category(1).await.unwrap().expect("seeded category");
    assert_eq!(science.category_type, "Science");
    assert_eq!(store.find_category(999).await.unwrap(), None);

    let created = store
        .insert_question(NewQuestion {
            question: "PgStore TestCase?".to_string(),
            answer: "4".to_string(),
            difficulty: 1,
            category: 1,
        })
        .await
        .unwrap();

    let all = store.list_all_questions().await.unwrap();
    assert!(all.iter().any(|q| q.id == created.id));
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));

    let hits = store.filter_questions_by_substring("pgstore testcase").await.unwrap();
    assert!(hits.iter().any(|q| q.id == created.id));

    let in_category = store.filter_questions_by_category(1).await.unwrap();
    assert!(in_category.iter().all(|q| q.category == 1));

    let seen: HashSet<i64> = all.iter().map(|q| q.id).filter(|id| *id != created.id).collect();
    let picked = select_quiz_question(&store, CategoryFilter::Only(1), &seen)
        .await
        .unwrap();
    assert_eq!(picked.map(|q| q.id), Some(created.id));

    assert!(matches!(
        store
            .insert_question(NewQuestion {
                question: "orphan".to_string(),
                answer: "x".to_string(),
                difficulty: 1,
                category: 999_999,
            })
            .await,
        Err(StoreError::Validation(_))
    ));

    store.delete_question(created.id).await.unwrap();
    assert_eq!(store.find_question(created.id).await.unwrap(), None);
    assert!(matches!(
        store.delete_question(created.id).await,
        Err(StoreError::NotFound)
    ));
}
