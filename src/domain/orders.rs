//! Orders. The read shape resolves buyer and seller usernames and the name
//! of the card behind the ordered product, so the select spans users twice,
//! products and cards.
//!
//! `order_date` is assigned by the store at insert and is not part of the
//! write shape; shipment fields are nullable until the order progresses.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

use super::crud::{Draft, Record};
use crate::infra::db::PgQuery;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Order {
    pub order_id: i32,
    pub buyer: String,
    pub seller: String,
    pub card: String,
    pub quantity: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub order_date: OffsetDateTime,
    pub shipping_address: String,
    pub shipping_cost: Decimal,
    pub total_amount: Decimal,
    pub tracking_number: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub shipped_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub delivered_at: Option<OffsetDateTime>,
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderDraft {
    pub buyer_id: i32,
    pub seller_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub shipping_address: String,
    pub shipping_cost: Decimal,
    pub total_amount: Decimal,
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub shipped_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub delivered_at: Option<OffsetDateTime>,
    pub status: String,
}

impl Record for Order {
    const ENTITY: &'static str = "order";
    const NOT_FOUND: &'static str = "ORDER_NOT_FOUND";
    const SELECT: &'static str = "SELECT o.order_id, b.username AS buyer, \
         s.username AS seller, c.name AS card, o.quantity, o.order_date, \
         o.shipping_address, o.shipping_cost, o.total_amount, o.tracking_number, \
         o.shipped_at, o.delivered_at, o.status, o.created_at, o.updated_at \
         FROM orders o \
         JOIN users b ON o.buyer_id = b.user_id \
         JOIN users s ON o.seller_id = s.user_id \
         JOIN products p ON o.product_id = p.product_id \
         JOIN cards c ON p.card_id = c.card_id";
    const SELECT_BY_ID: &'static str = "SELECT o.order_id, b.username AS buyer, \
         s.username AS seller, c.name AS card, o.quantity, o.order_date, \
         o.shipping_address, o.shipping_cost, o.total_amount, o.tracking_number, \
         o.shipped_at, o.delivered_at, o.status, o.created_at, o.updated_at \
         FROM orders o \
         JOIN users b ON o.buyer_id = b.user_id \
         JOIN users s ON o.seller_id = s.user_id \
         JOIN products p ON o.product_id = p.product_id \
         JOIN cards c ON p.card_id = c.card_id \
         WHERE o.order_id = $1";
    const DELETE_BY_ID: &'static str = "DELETE FROM orders WHERE order_id = $1";
}

impl Draft for OrderDraft {
    type Rec = Order;
    const INSERT: &'static str = "INSERT INTO orders \
         (buyer_id, seller_id, product_id, quantity, shipping_address, shipping_cost, \
         total_amount, tracking_number, shipped_at, delivered_at, status) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)";
    const UPDATE: &'static str = "UPDATE orders SET buyer_id = $1, seller_id = $2, \
         product_id = $3, quantity = $4, shipping_address = $5, shipping_cost = $6, \
         total_amount = $7, tracking_number = $8, shipped_at = $9, delivered_at = $10, \
         status = $11, updated_at = CURRENT_TIMESTAMP WHERE order_id = $12";

    fn bind<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.buyer_id)
            .bind(self.seller_id)
            .bind(self.product_id)
            .bind(self.quantity)
            .bind(self.shipping_address.clone())
            .bind(self.shipping_cost)
            .bind(self.total_amount)
            .bind(self.tracking_number.clone())
            .bind(self.shipped_at)
            .bind(self.delivered_at)
            .bind(self.status.clone())
    }
}
