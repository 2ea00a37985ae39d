use dotenvy::dotenv;
use snafu::ResultExt;
use tokio::net::TcpListener;

use draft_analytics::api::{create_app, create_router};
use draft_analytics::config::Config;
use draft_analytics::error::{
    ApplicationError, BindAddressSnafu, ConnectDatabaseSnafu, WebServerSnafu,
};
use draft_analytics::logger;
use draft_analytics::service::database::Backend;

#[tokio::main]
async fn main() -> Result<(), ApplicationError> {
    dotenv().ok();

    let config = Config::from_env()?;

    let _guard = logger::init(&config)?;

    let backend = Backend::connect(&config.database)
        .await
        .context(ConnectDatabaseSnafu)?;
    let app = create_app(backend, config.verify_content);

    let listener = TcpListener::bind(config.host)
        .await
        .context(BindAddressSnafu {
            address: config.host,
        })?;
    tracing::info!(address = %config.host, "serving draft analytics");

    axum::serve(listener, create_router(app))
        .await
        .context(WebServerSnafu)
}
