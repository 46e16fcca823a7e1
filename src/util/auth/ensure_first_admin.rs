use std::sync::Arc;

use diesel::{ExpressionMethods, OptionalExtension, QueryDsl};
use diesel_async::RunQueryDsl;
use tracing::info;
use uuid::Uuid;

use crate::{domain::auth::role::UserRole, init::state::ServerState, schema::users};

/// Idempotent bootstrap rule: the first-ever registered user must hold the
/// Admin role. Runs at process start and again before every registration so
/// the invariant holds even if the row was edited out-of-band.
///
/// An empty directory is fine; the rule simply has nothing to enforce yet.
pub async fn ensure_first_user_admin(state: &Arc<ServerState>) -> anyhow::Result<()> {
    let mut conn = state.get_conn().await?;

    let first_user: Option<(Uuid, Option<String>)> = users::table
        .select((users::user_id, users::user_role))
        .order((users::user_created_at.asc(), users::user_id.asc()))
        .first(&mut conn)
        .await
        .optional()?;

    let Some((first_user_id, current_role)) = first_user else {
        return Ok(());
    };

    if UserRole::from_db(current_role.as_deref()) != Some(UserRole::Admin) {
        diesel::update(users::table.filter(users::user_id.eq(first_user_id)))
            .set(users::user_role.eq(UserRole::Admin.as_str()))
            .execute(&mut conn)
            .await?;

        info!(user_id = %first_user_id, "Bootstrap user promoted to Admin");
    }

    drop(conn);

    Ok(())
}
