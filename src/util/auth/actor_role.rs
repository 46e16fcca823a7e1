use std::sync::Arc;

use diesel::{ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::{domain::auth::role::UserRole, init::state::ServerState, schema::users};

/// Fetches the actor's current role from the directory. Roles can change
/// between requests (bootstrap rule, admin registration), so privileged
/// handlers resolve this fresh rather than trusting session contents.
pub async fn actor_role(state: Arc<ServerState>, user_id: Uuid) -> anyhow::Result<Option<UserRole>> {
    let mut conn = state.get_conn().await?;

    let role: Option<String> = users::table
        .filter(users::user_id.eq(user_id))
        .select(users::user_role)
        .first(&mut conn)
        .await?;

    drop(conn);

    Ok(UserRole::from_db(role.as_deref()))
}
