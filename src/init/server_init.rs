use std::net::SocketAddr;
use std::sync::Arc;

use diesel::prelude::QueryableByName;
use diesel_async::RunQueryDsl;
use diesel_async::pooled_connection::bb8::Pool;
use diesel_async::{AsyncPgConnection, pooled_connection::AsyncDieselConnectionManager};
use lettre::{AsyncSmtpTransport, Tokio1Executor};
use tracing::info;

use crate::routers::main_router::build_router;
use crate::util::auth::ensure_first_admin::ensure_first_user_admin;

use super::config::{DbConfig, EmailConfig};
use super::state::ServerState;

pub async fn server_init_proc(start: tokio::time::Instant) -> anyhow::Result<()> {
    let num_cores: u32 = num_cpus::get_physical() as u32;

    if std::env::var("IS_CONTAINERIZED").is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = DbConfig::from_env()?.to_url()?;

    let pool_config = AsyncDieselConnectionManager::<AsyncPgConnection>::new(db_url);

    let pool = Pool::builder()
        .min_idle(Some(num_cores))
        .max_size(num_cores * 10u32)
        .build(pool_config)
        .await?;

    let email_config = EmailConfig::from_env()?;
    let email_client = AsyncSmtpTransport::<Tokio1Executor>::relay(&email_config.get_url())?
        .credentials(email_config.to_creds())
        .build();

    let state = Arc::new(
        ServerState::builder()
            .app_name_version(format!(
                "{} v{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ))
            .server_start_time(start)
            .pool(pool)
            .email_client(email_client)
            .contact_recipient(email_config.get_operator_email())
            .build()?,
    );

    let mut conn = state.get_conn().await?;

    #[derive(QueryableByName)]
    struct PgVersion {
        #[diesel(sql_type = diesel::sql_types::Text)]
        version: String,
    }

    let pg_version: PgVersion = diesel::sql_query("SELECT version()")
        .get_result(&mut conn)
        .await?;

    info!("PostgreSQL version: {}", pg_version.version);
    drop(conn);

    info!(
        "Deployment environment: {:?}",
        state.get_deployment_environment()
    );

    // First-user-Admin invariant must hold before any request is served.
    ensure_first_user_admin(&state).await?;

    // Session janitor; expired sessions are already rejected at read time,
    // this just keeps the map from growing unboundedly.
    let janitor_state = state.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tokio::time::Duration::from_secs(600));
        loop {
            interval.tick().await;
            let (pruned, remaining) = janitor_state.purge_expired_sessions().await;
            if pruned > 0 {
                info!(pruned, remaining, "Purged expired sessions");
            }
        }
    });

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;

    info!("Backend server starting...");
    axum::serve(
        listener,
        build_router(state).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}
