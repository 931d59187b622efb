pub use sea_orm_migration::prelude::*;

mod m20241201_101500_create_game_table;
mod m20241201_101612_create_question_table;
mod m20241201_101740_create_trivia_questions_top_table;
mod m20241203_184205_create_user_table;
mod m20241210_092311_create_collection_texts_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241201_101500_create_game_table::Migration),
            Box::new(m20241201_101612_create_question_table::Migration),
            Box::new(m20241201_101740_create_trivia_questions_top_table::Migration),
            Box::new(m20241203_184205_create_user_table::Migration),
            Box::new(m20241210_092311_create_collection_texts_table::Migration),
        ]
    }
}
