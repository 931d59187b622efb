use entity::collection_texts::{self, constraints::*};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(collection_texts::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(collection_texts::Column::Collection)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(collection_texts::Column::Key)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(collection_texts::Column::Text)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(collection_texts::Column::Embedding)
                            .json()
                            .null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_COLLECTION_TEXTS)
                            .col(collection_texts::Column::Collection)
                            .col(collection_texts::Column::Key)
                            .primary(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(collection_texts::Entity).to_owned())
            .await
    }
}
