use super::game;
use sea_orm::{entity::prelude::*, FromJsonQueryResult, QueryOrder};
use serde::{Deserialize, Serialize};

pub mod constraints {
    pub const FK_QUESTION_GAME: &str = "FK_question_game";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "question")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub game_id: i64,
    pub question_text: String,
    #[sea_orm(column_type = "Json")]
    pub options: Options,
    pub correct_answer: String,
    pub difficulty: Option<Difficulty>,
    pub category: Option<String>,
    pub player_answer: Option<String>,
    pub is_correct: Option<bool>,
}

/// Answer choices, stored as a JSON array so their order survives the round trip.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Options(pub Vec<String>);

#[derive(EnumIter, DeriveActiveEnum, PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[sea_orm(string_value = "easy")]
    #[serde(alias = "Easy", alias = "EASY")]
    Easy,
    #[sea_orm(string_value = "medium")]
    #[serde(alias = "Medium", alias = "MEDIUM")]
    Medium,
    #[sea_orm(string_value = "hard")]
    #[serde(alias = "Hard", alias = "HARD")]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::game::Entity",
        from = "Column::GameId",
        to = "super::game::Column::Id",
        on_delete = "Cascade"
    )]
    Game,
}

impl Related<game::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Game.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_by_game(game_id: i64) -> Select<Entity> {
        Self::find()
            .filter(Column::GameId.eq(game_id))
            .order_by_asc(Column::Id)
    }
}
