pub mod collection_texts;
pub mod game;
pub mod question;
pub mod top_question;
pub mod users;
