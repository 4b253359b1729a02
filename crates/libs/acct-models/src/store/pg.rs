use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;

use super::UserStore;
use crate::account::{Account, AccountProfile, NewAccount};
use crate::db::connection::DbConnection;
use crate::photo::Photo;
use crate::prelude::*;
use crate::schema::account;

impl UserStore for DbConnection {
    fn exists(&self, target: &str) -> Result<bool> {
        let conn = &mut self.pool.get()?;
        Ok(
            diesel::select(diesel::dsl::exists(
                account::table.filter(account::username.eq(target)),
            ))
            .get_result(conn)?,
        )
    }

    fn find_by_username(&self, target: &str) -> Result<Option<AccountProfile>> {
        let conn = &mut self.pool.get()?;

        let Some(account) = account::table
            .filter(account::username.eq(target))
            .select(Account::as_select())
            .first(conn)
            .optional()?
        else {
            return Ok(None);
        };

        let photos = Photo::belonging_to(&account)
            .select(Photo::as_select())
            .load(conn)?;

        Ok(Some(AccountProfile { account, photos }))
    }

    fn create(&self, new_account: NewAccount) -> Result<Account> {
        let conn = &mut self.pool.get()?;

        diesel::insert_into(account::table)
            .values(&new_account)
            .returning(Account::as_returning())
            .get_result(conn)
            .map_err(|err| match err {
                diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    Error::DuplicateUsername(new_account.username.clone())
                }
                err => Error::from(err),
            })
    }
}
