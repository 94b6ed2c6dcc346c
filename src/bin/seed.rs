/**
 * Seed Tool
 *
 * Loads demo data into the shared store: two users with bcrypt-hashed
 * passwords, one post each, and one pre-existing like (hernan likes
 * angie's post). Running it against a store that is already seeded
 * fails on the username uniqueness constraint.
 */

use chrono::{NaiveDate, Utc};

use feedline::auth::users::create_user;
use feedline::feed::db::{insert_post, upsert_like};
use feedline::server::config::{connect_database, database_url};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("Seeding...");

    let pool = connect_database(&database_url()).await?;

    let hernan = create_user(
        &pool,
        "hernan_alias",
        &bcrypt::hash("pass123", bcrypt::DEFAULT_COST)?,
        "hernan",
        "gonzalez",
        NaiveDate::from_ymd_opt(1990, 1, 1).expect("valid date"),
    )
    .await?;

    let angie = create_user(
        &pool,
        "angie_alias",
        &bcrypt::hash("pass456", bcrypt::DEFAULT_COST)?,
        "angie",
        "vivas",
        NaiveDate::from_ymd_opt(1990, 5, 15).expect("valid date"),
    )
    .await?;

    insert_post(&pool, hernan.id, "First post from hernan.", Utc::now()).await?;
    let angie_post = insert_post(&pool, angie.id, "Second test post.", Utc::now()).await?;

    upsert_like(&pool, angie_post.id, hernan.id).await?;

    tracing::info!("Seeding complete: 2 users, 2 posts, 1 like");

    Ok(())
}
