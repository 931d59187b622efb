use super::parse_game_id;
use crate::{storage, Json, Result, StateTrait};
use axum::extract::{Path, State};
use entity::{
    question::{self, Difficulty},
    top_question,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct Question {
    id: i64,
    game_id: i64,
    question_text: String,
    options: Vec<String>,
    correct_answer: String,
    difficulty: Option<Difficulty>,
    category: Option<String>,
    player_answer: Option<String>,
    is_correct: Option<bool>,
}

impl From<question::Model> for Question {
    fn from(model: question::Model) -> Self {
        Self {
            id: model.id,
            game_id: model.game_id,
            question_text: model.question_text,
            options: model.options.0,
            correct_answer: model.correct_answer,
            difficulty: model.difficulty,
            category: model.category,
            player_answer: model.player_answer,
            is_correct: model.is_correct,
        }
    }
}

#[derive(Serialize)]
pub struct TopQuestion {
    id: i64,
    game_id: i64,
    question: String,
    options: Vec<String>,
    answer: String,
}

impl From<top_question::Model> for TopQuestion {
    fn from(model: top_question::Model) -> Self {
        Self {
            id: model.id,
            game_id: model.game_id,
            question: model.question,
            options: model.options.0,
            answer: model.answer,
        }
    }
}

/// Questions of a game in the order they were stored. Unknown games yield an
/// empty list.
pub async fn get_questions<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Question>>> {
    let game_id = parse_game_id(&id)?;

    let questions = storage::find_questions_by_game(state.db(), game_id).await?;

    Ok(Json(questions.into_iter().map(Question::from).collect()))
}

pub async fn get_top_questions<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<Json<Vec<TopQuestion>>> {
    let game_id = parse_game_id(&id)?;

    let questions = storage::find_top_questions_by_game(state.db(), game_id).await?;

    Ok(Json(questions.into_iter().map(TopQuestion::from).collect()))
}
