use chrono::{DateTime, Utc};
use diesel::{Queryable, QueryableByName, prelude::Insertable};
use diesel_async::{AsyncPgConnection, RunQueryDsl, pooled_connection::bb8::PooledConnection};
use serde_derive::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    domain::auth::role::UserRole,
    errors::code_error::{CodeError, CodeErrorResp, code_err},
    schema::users,
};

#[derive(Serialize, Deserialize, QueryableByName, Queryable, ToSchema)]
pub struct User {
    #[diesel(sql_type = diesel::sql_types::Uuid)]
    pub user_id: uuid::Uuid,
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub user_email: String,
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub user_name: String,
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub user_password_hash: String,
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Varchar>)]
    pub user_role: Option<String>,
    #[diesel(sql_type = diesel::sql_types::Timestamptz)]
    pub user_created_at: DateTime<Utc>,
}

impl User {
    /// Inserts a new user. The unique constraint on `user_email` is the
    /// authority on duplicates; callers pass the CodeError that a violation
    /// should surface as, since the duplicate-email message depends on who
    /// is registering.
    pub async fn insert_one<'a, 'conn>(
        conn: &'conn mut PooledConnection<'_, AsyncPgConnection>,
        user_email: &'a str,
        user_name: &'a str,
        user_password_hash: &'a str,
        user_role: UserRole,
        email_taken: CodeError,
    ) -> Result<User, CodeErrorResp> {
        let new_user = UserInsertable::new(user_email, user_name, user_password_hash, user_role);

        diesel::insert_into(users::table)
            .values(new_user)
            .returning(users::all_columns)
            .get_result::<User>(conn)
            .await
            .map_err(|e| match e {
                diesel::result::Error::DatabaseError(
                    diesel::result::DatabaseErrorKind::UniqueViolation,
                    _,
                ) => code_err(email_taken, e),
                _ => code_err(CodeError::DB_INSERTION_ERROR, e),
            })
    }
}

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct UserInsertable<'nu> {
    user_email: &'nu str,
    user_name: &'nu str,
    user_password_hash: &'nu str,
    user_role: &'static str,
}

impl<'nu> UserInsertable<'nu> {
    pub fn new(
        user_email: &'nu str,
        user_name: &'nu str,
        user_password_hash: &'nu str,
        user_role: UserRole,
    ) -> Self {
        Self {
            user_email,
            user_name,
            user_password_hash,
            user_role: user_role.as_str(),
        }
    }
}
