//! Person server: reads config, initialises tracing, opens the store,
//! creates the schema and serves the person routes until ctrl-c / SIGTERM.

use person_service::{
    app, connect, ensure_person_table, init_tracing, AppConfig, AppState, PersonRepository,
    PersonService,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    init_tracing(config.env);
    tracing::info!(env = ?config.env, "server is starting");

    let pool = connect(&config.database_url, config.max_connections).await?;
    ensure_person_table(&pool).await?;

    let state = AppState::new(PersonService::new(PersonRepository::new(pool.clone())));
    let router = app(state, config.http_timeout);

    let listener = TcpListener::bind(&config.http_address).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
