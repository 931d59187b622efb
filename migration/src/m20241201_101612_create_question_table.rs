use entity::{
    game,
    question::{self, constraints::*},
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
                    .table(question::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(question::Column::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(question::Column::GameId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(question::Column::QuestionText)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(question::Column::Options).json().not_null())
                    .col(
                        ColumnDef::new(question::Column::CorrectAnswer)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(question::Column::Difficulty).string_len(16).null())
                    .col(ColumnDef::new(question::Column::Category).string().null())
                    .col(ColumnDef::new(question::Column::PlayerAnswer).text().null())
                    .col(ColumnDef::new(question::Column::IsCorrect).boolean().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_QUESTION_GAME)
                            .from(question::Entity, question::Column::GameId)
                            .to(game::Entity, game::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(question::Entity).to_owned())
            .await
    }
}
