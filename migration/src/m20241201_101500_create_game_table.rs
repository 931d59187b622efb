use entity::game;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(game::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(game::Column::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(game::Column::MovieId).integer().not_null())
                    .col(ColumnDef::new(game::Column::MovieTitle).string().not_null())
                    .col(
                        ColumnDef::new(game::Column::Status)
                            .string_len(16)
                            .not_null()
                            .default("ongoing"),
                    )
                    .col(
                        ColumnDef::new(game::Column::Score)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(game::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(game::Entity).to_owned())
            .await
    }
}
