//! Catalog cards, joined to the game catalog for their read shape.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

use super::crud::{Draft, Record};
use crate::infra::db::PgQuery;

/// Read shape: a card with the joined game name.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Card {
    pub card_id: i32,
    pub name: String,
    pub image_url: String,
    pub description: String,
    pub set_name: String,
    pub card_number: String,
    pub rarity: String,
    pub tcg_game: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Write shape: references the game catalog by id.
#[derive(Debug, Clone, Deserialize)]
pub struct CardDraft {
    pub name: String,
    pub image_url: String,
    pub description: String,
    pub set_name: String,
    pub card_number: String,
    pub rarity: String,
    pub tcg_game_id: i32,
}

impl Record for Card {
    const ENTITY: &'static str = "card";
    const NOT_FOUND: &'static str = "CARD_NOT_FOUND";
    const SELECT: &'static str = "SELECT c.card_id, c.name, c.image_url, c.description, \
         c.set_name, c.card_number, c.rarity, g.name AS tcg_game, c.created_at, c.updated_at \
         FROM cards c JOIN tcg_games g ON c.tcg_game_id = g.tcg_game_id";
    const SELECT_BY_ID: &'static str = "SELECT c.card_id, c.name, c.image_url, c.description, \
         c.set_name, c.card_number, c.rarity, g.name AS tcg_game, c.created_at, c.updated_at \
         FROM cards c JOIN tcg_games g ON c.tcg_game_id = g.tcg_game_id \
         WHERE c.card_id = $1";
    const DELETE_BY_ID: &'static str = "DELETE FROM cards WHERE card_id = $1";
}

impl Draft for CardDraft {
    type Rec = Card;
    const INSERT: &'static str = "INSERT INTO cards \
         (name, image_url, description, set_name, card_number, rarity, tcg_game_id) \
         VALUES ($1, $2, $3, $4, $5, $6, $7)";
    const UPDATE: &'static str = "UPDATE cards SET name = $1, image_url = $2, \
         description = $3, set_name = $4, card_number = $5, rarity = $6, tcg_game_id = $7, \
         updated_at = CURRENT_TIMESTAMP WHERE card_id = $8";

    fn bind<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.name.clone())
            .bind(self.image_url.clone())
            .bind(self.description.clone())
            .bind(self.set_name.clone())
            .bind(self.card_number.clone())
            .bind(self.rarity.clone())
            .bind(self.tcg_game_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::crud::testing::max_placeholder;

    #[test]
    fn statements_agree_on_parameter_order() {
        assert_eq!(max_placeholder(CardDraft::INSERT), 7);
        assert_eq!(max_placeholder(CardDraft::UPDATE), 8);
        assert_eq!(max_placeholder(Card::SELECT_BY_ID), 1);
        assert_eq!(max_placeholder(Card::DELETE_BY_ID), 1);
    }

    #[test]
    fn identity_and_timestamps_are_store_assigned() {
        assert!(!CardDraft::INSERT.contains("card_id"));
        assert!(!CardDraft::INSERT.contains("created_at"));
        assert!(CardDraft::UPDATE.contains("updated_at = CURRENT_TIMESTAMP"));
        assert!(!CardDraft::UPDATE.contains("created_at"));
    }

    #[test]
    fn by_id_select_extends_canonical_select() {
        assert!(Card::SELECT_BY_ID.starts_with(Card::SELECT));
        assert!(Card::SELECT.contains("AS tcg_game"));
    }
}
