//! User records, joined to the country and language lookup tables.
//!
//! The read shape never carries the password column; it exists only in the
//! write shape. Update binds every write field, password included, in one
//! explicitly tested order.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

use super::crud::{Draft, Record};
use crate::infra::db::PgQuery;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct User {
    pub user_id: i32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub street_name: String,
    pub street_number: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub seller_type: String,
    pub country: String,
    pub language: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserDraft {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub street_name: String,
    pub street_number: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub seller_type: String,
    pub country_id: i32,
    pub language_id: i32,
}

impl Record for User {
    const ENTITY: &'static str = "user";
    const NOT_FOUND: &'static str = "USER_NOT_FOUND";
    const SELECT: &'static str = "SELECT u.user_id, u.username, u.email, u.first_name, \
         u.last_name, u.street_name, u.street_number, u.city, u.state, u.zip_code, \
         u.seller_type, co.name AS country, l.language_name AS language, \
         u.created_at, u.updated_at \
         FROM users u \
         JOIN countries co ON u.country_id = co.country_id \
         JOIN languages l ON u.language_id = l.language_id";
    const SELECT_BY_ID: &'static str = "SELECT u.user_id, u.username, u.email, u.first_name, \
         u.last_name, u.street_name, u.street_number, u.city, u.state, u.zip_code, \
         u.seller_type, co.name AS country, l.language_name AS language, \
         u.created_at, u.updated_at \
         FROM users u \
         JOIN countries co ON u.country_id = co.country_id \
         JOIN languages l ON u.language_id = l.language_id \
         WHERE u.user_id = $1";
    const DELETE_BY_ID: &'static str = "DELETE FROM users WHERE user_id = $1";
}

impl Draft for UserDraft {
    type Rec = User;
    const INSERT: &'static str = "INSERT INTO users \
         (username, email, password, first_name, last_name, street_name, street_number, \
         city, state, zip_code, seller_type, country_id, language_id) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)";
    const UPDATE: &'static str = "UPDATE users SET username = $1, email = $2, \
         password = $3, first_name = $4, last_name = $5, street_name = $6, \
         street_number = $7, city = $8, state = $9, zip_code = $10, seller_type = $11, \
         country_id = $12, language_id = $13, updated_at = CURRENT_TIMESTAMP \
         WHERE user_id = $14";

    fn bind<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.username.clone())
            .bind(self.email.clone())
            .bind(self.password.clone())
            .bind(self.first_name.clone())
            .bind(self.last_name.clone())
            .bind(self.street_name.clone())
            .bind(self.street_number.clone())
            .bind(self.city.clone())
            .bind(self.state.clone())
            .bind(self.zip_code.clone())
            .bind(self.seller_type.clone())
            .bind(self.country_id)
            .bind(self.language_id)
    }
}
