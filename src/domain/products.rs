//! Marketplace listings. The read shape resolves the seller, card and
//! language references to their display names.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

use super::crud::{Draft, Record};
use crate::infra::db::PgQuery;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Product {
    pub product_id: i32,
    pub price: Decimal,
    pub condition: String,
    pub quantity: i32,
    pub is_available: bool,
    pub seller: String,
    pub card: String,
    pub language: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductDraft {
    pub price: Decimal,
    pub condition: String,
    pub quantity: i32,
    pub is_available: bool,
    pub seller_id: i32,
    pub card_id: i32,
    pub language_id: i32,
}

impl Record for Product {
    const ENTITY: &'static str = "product";
    const NOT_FOUND: &'static str = "PRODUCT_NOT_FOUND";
    const SELECT: &'static str = "SELECT p.product_id, p.price, p.condition, p.quantity, \
         p.is_available, u.username AS seller, c.name AS card, l.language_name AS language, \
         p.created_at, p.updated_at \
         FROM products p \
         JOIN users u ON p.seller_id = u.user_id \
         JOIN cards c ON p.card_id = c.card_id \
         JOIN languages l ON p.language_id = l.language_id";
    const SELECT_BY_ID: &'static str = "SELECT p.product_id, p.price, p.condition, p.quantity, \
         p.is_available, u.username AS seller, c.name AS card, l.language_name AS language, \
         p.created_at, p.updated_at \
         FROM products p \
         JOIN users u ON p.seller_id = u.user_id \
         JOIN cards c ON p.card_id = c.card_id \
         JOIN languages l ON p.language_id = l.language_id \
         WHERE p.product_id = $1";
    const DELETE_BY_ID: &'static str = "DELETE FROM products WHERE product_id = $1";
}

impl Draft for ProductDraft {
    type Rec = Product;
    const INSERT: &'static str = "INSERT INTO products \
         (price, condition, quantity, is_available, seller_id, card_id, language_id) \
         VALUES ($1, $2, $3, $4, $5, $6, $7)";
    const UPDATE: &'static str = "UPDATE products SET price = $1, condition = $2, \
         quantity = $3, is_available = $4, seller_id = $5, card_id = $6, language_id = $7, \
         updated_at = CURRENT_TIMESTAMP WHERE product_id = $8";

    fn bind<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.price)
            .bind(self.condition.clone())
            .bind(self.quantity)
            .bind(self.is_available)
            .bind(self.seller_id)
            .bind(self.card_id)
            .bind(self.language_id)
    }
}
