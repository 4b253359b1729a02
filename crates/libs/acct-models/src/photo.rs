//! Photo model.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::account::Account;
use crate::db::connection::DbConnection;
use crate::prelude::*;

/// A photo attached to an account.
#[derive(
    Debug, Clone, Queryable, Selectable, Identifiable, Associations, PartialEq, Eq, Serialize,
)]
#[diesel(belongs_to(Account))]
#[diesel(table_name = crate::schema::photo)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Photo {
    /// Unique photo ID.
    pub id: Uuid,
    /// The account that owns this photo.
    pub account_id: Uuid,
    /// Where the photo is served from.
    pub url: String,
    /// Whether this is the account's main photo.
    pub is_main: bool,
    /// When this photo was attached.
    pub created_at: DateTime<Utc>,
}

/// Data for attaching a photo to an account.
#[derive(Insertable, PartialEq, Debug, Clone, Deserialize)]
#[diesel(table_name = crate::schema::photo)]
pub struct NewPhoto {
    pub id: Uuid,
    pub account_id: Uuid,
    pub url: String,
    pub is_main: bool,
}

impl NewPhoto {
    pub fn new(account_id: Uuid, url: impl Into<String>, is_main: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            url: url.into(),
            is_main,
        }
    }

    /// Saves the photo in the database.
    pub fn save(self, connection: &DbConnection) -> Result<Photo> {
        use crate::schema::photo::dsl::*;
        let conn = &mut connection.pool.get()?;

        Ok(diesel::insert_into(photo)
            .values(self)
            .returning(Photo::as_returning())
            .get_result(conn)?)
    }
}
