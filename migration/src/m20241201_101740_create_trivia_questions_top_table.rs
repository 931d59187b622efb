use entity::{
    game,
    top_question::{self, constraints::*},
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(top_question::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(top_question::Column::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(top_question::Column::GameId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(top_question::Column::Question)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(top_question::Column::Options)
                            .json()
                            .not_null(),
                    )
                    .col(ColumnDef::new(top_question::Column::Answer).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TOP_QUESTION_GAME)
                            .from(top_question::Entity, top_question::Column::GameId)
                            .to(game::Entity, game::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(top_question::Entity).to_owned())
            .await
    }
}
