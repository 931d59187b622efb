use crate::{error, Result};
use entity::users;
use sea_orm::{sea_query::OnConflict, EntityTrait, Set, TransactionTrait};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserProfile {
    /// This call inserted the row.
    Created(users::Model),
    /// A row for the external id already existed; its name and email are kept.
    Existing(users::Model),
}

impl UserProfile {
    pub fn user(&self) -> &users::Model {
        match self {
            UserProfile::Created(user) | UserProfile::Existing(user) => user,
        }
    }
}

/// Looks a user up by identity-provider subject id, inserting it on first
/// sight. Concurrent first calls produce one row; the first writer's name and
/// email win.
pub async fn find_or_create_user<C>(
    db: &C,
    external_id: &str,
    email: &str,
    name: &str,
) -> Result<UserProfile>
where
    C: TransactionTrait,
{
    let txn = db.begin().await?;

    let model = users::ActiveModel {
        stack_auth_id: Set(external_id.to_owned()),
        email: Set(email.to_owned()),
        name: Set(name.to_owned()),
        ..Default::default()
    };

    let inserted = users::Entity::insert(model)
        .on_conflict(
            OnConflict::column(users::Column::StackAuthId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&txn)
        .await?;

    let user = users::Entity::find_by_stack_auth_id(external_id)
        .one(&txn)
        .await?
        .ok_or_else(|| {
            error!(external_id, "user missing right after insert");
            error::INTERNAL
        })?;

    txn.commit().await?;

    if inserted > 0 {
        info!(user_id = user.id, "user created");
        Ok(UserProfile::Created(user))
    } else {
        Ok(UserProfile::Existing(user))
    }
}
