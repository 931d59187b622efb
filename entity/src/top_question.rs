use super::{game, question::Options};
use sea_orm::{entity::prelude::*, QueryOrder};

pub mod constraints {
    pub const FK_TOP_QUESTION_GAME: &str = "FK_trivia_questions_top_game";
}

/// Reduced questions generated from a catalog entry, without difficulty or category.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "trivia_questions_top")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub game_id: i64,
    pub question: String,
    #[sea_orm(column_type = "Json")]
    pub options: Options,
    pub answer: String,
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
