#![allow(dead_code)]

//! Shared helpers for the live-Postgres suites. Every suite connects via
//! [`test_store`], which skips cleanly when no scratch database is
//! configured.

use cardmarket_backend::config::db::DbConfig;
use cardmarket_backend::domain::cards::CardDraft;
use cardmarket_backend::domain::products::ProductDraft;
use cardmarket_backend::domain::users::UserDraft;
use cardmarket_backend::infra::db::Store;
use rust_decimal::Decimal;

/// Connect to the scratch database named by `CARDMARKET_TEST_DATABASE_URL`,
/// apply migrations and truncate every table. Returns `None` when the
/// variable is unset so callers can return early.
pub async fn test_store() -> Option<Store> {
    let url = match std::env::var("CARDMARKET_TEST_DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("CARDMARKET_TEST_DATABASE_URL not set; skipping");
            return None;
        }
    };

    let store = Store::connect(&DbConfig::from_url(url))
        .await
        .expect("connect to test database");
    sqlx::migrate!()
        .run(store.pool())
        .await
        .expect("apply migrations");
    reset(&store).await;
    Some(store)
}

/// Empty every table and reseed the lookup rows the read-shape joins need.
/// Identities restart at 1, so the first seeded game is always
/// "Magic: The Gathering".
pub async fn reset(store: &Store) {
    store
        .execute(sqlx::query(
            "TRUNCATE orders, products, cards, users, tcg_games, languages, countries \
             RESTART IDENTITY CASCADE",
        ))
        .await
        .expect("truncate tables");
    store
        .execute(sqlx::query(
            "INSERT INTO tcg_games (name) VALUES ('Magic: The Gathering'), ('Pokemon')",
        ))
        .await
        .expect("seed tcg_games");
    store
        .execute(sqlx::query(
            "INSERT INTO languages (language_name) VALUES ('English'), ('German')",
        ))
        .await
        .expect("seed languages");
    store
        .execute(sqlx::query(
            "INSERT INTO countries (name) VALUES ('United States'), ('Germany')",
        ))
        .await
        .expect("seed countries");
}

pub fn black_lotus() -> CardDraft {
    CardDraft {
        name: "Black Lotus".to_string(),
        image_url: "https://img.example.com/black-lotus.jpg".to_string(),
        description: "Adds three mana of any single color.".to_string(),
        set_name: "Alpha".to_string(),
        card_number: "232".to_string(),
        rarity: "Mythic Rare".to_string(),
        tcg_game_id: 1,
    }
}

pub fn user_draft(username: &str) -> UserDraft {
    UserDraft {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password: "hunter2".to_string(),
        first_name: "Alice".to_string(),
        last_name: "Doe".to_string(),
        street_name: "Main St".to_string(),
        street_number: "12".to_string(),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        zip_code: "62704".to_string(),
        seller_type: "private".to_string(),
        country_id: 1,
        language_id: 1,
    }
}

pub fn product_draft(seller_id: i32, card_id: i32) -> ProductDraft {
    ProductDraft {
        price: Decimal::new(1234, 2),
        condition: "Near Mint".to_string(),
        quantity: 3,
        is_available: true,
        seller_id,
        card_id,
        language_id: 1,
    }
}
