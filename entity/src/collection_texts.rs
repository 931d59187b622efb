use sea_orm::{entity::prelude::*, FromJsonQueryResult};
use serde::{Deserialize, Serialize};

pub mod constraints {
    pub const PK_COLLECTION_TEXTS: &str = "PK_collection_texts";
}

/// One text stored under `key` in a named collection. Collections bound to a
/// search method also keep the embedding of the text.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "collection_texts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub collection: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,
    pub text: String,
    #[sea_orm(column_type = "Json", nullable)]
    pub embedding: Option<Embedding>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Embedding(pub Vec<f32>);

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_in_collection(collection: &str) -> Select<Entity> {
        Self::find().filter(Column::Collection.eq(collection))
    }
}
