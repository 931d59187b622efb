use crate::{trivia::TriviaQuestion, Result};
use chrono::Utc;
use entity::{
    game::{self, Status},
    question::{self, Options},
    top_question,
};
use sea_orm::{ConnectionTrait, DatabaseTransaction, DbErr, EntityTrait, Set, TransactionTrait};

/// Creates an ongoing game with score 0 and stores `questions` in order.
/// Nothing is written if any insert fails.
pub async fn create_game_with_questions<C>(
    db: &C,
    movie_id: i32,
    movie_title: String,
    questions: Vec<TriviaQuestion>,
) -> Result<i64>
where
    C: TransactionTrait,
{
    let txn = db.begin().await?;
    let game_id = insert_game(&txn, movie_id, movie_title).await?;

    for q in questions {
        let model = question::ActiveModel {
            game_id: Set(game_id),
            question_text: Set(q.question),
            options: Set(Options(q.options)),
            correct_answer: Set(q.answer),
            difficulty: Set(q.difficulty),
            category: Set(q.category),
            ..Default::default()
        };

        question::Entity::insert(model).exec(&txn).await?;
    }

    txn.commit().await?;

    info!(game_id, movie_id, "game created");

    Ok(game_id)
}

/// Same as [`create_game_with_questions`] for questions without difficulty
/// and category.
pub async fn create_game_with_top_questions<C>(
    db: &C,
    movie_id: i32,
    movie_title: String,
    questions: Vec<TriviaQuestion>,
) -> Result<i64>
where
    C: TransactionTrait,
{
    let txn = db.begin().await?;
    let game_id = insert_game(&txn, movie_id, movie_title).await?;

    for q in questions {
        let model = top_question::ActiveModel {
            game_id: Set(game_id),
            question: Set(q.question),
            options: Set(Options(q.options)),
            answer: Set(q.answer),
            ..Default::default()
        };

        top_question::Entity::insert(model).exec(&txn).await?;
    }

    txn.commit().await?;

    info!(game_id, movie_id, "game created from top questions");

    Ok(game_id)
}

async fn insert_game(
    txn: &DatabaseTransaction,
    movie_id: i32,
    movie_title: String,
) -> std::result::Result<i64, DbErr> {
    let model = game::ActiveModel {
        movie_id: Set(movie_id),
        movie_title: Set(movie_title),
        status: Set(Status::Ongoing),
        score: Set(0),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    let result = game::Entity::insert(model).exec(txn).await?;

    Ok(result.last_insert_id)
}

/// Questions of a game in insertion order. Unknown games have none.
pub async fn find_questions_by_game<C>(db: &C, game_id: i64) -> Result<Vec<question::Model>>
where
    C: ConnectionTrait,
{
    Ok(question::Entity::find_by_game(game_id).all(db).await?)
}

pub async fn find_top_questions_by_game<C>(
    db: &C,
    game_id: i64,
) -> Result<Vec<top_question::Model>>
where
    C: ConnectionTrait,
{
    Ok(top_question::Entity::find_by_game(game_id).all(db).await?)
}
