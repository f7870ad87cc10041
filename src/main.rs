//! Tasklist HTTP server entry point.
//!
//! Reads configuration from the environment, wires the `PostgreSQL`
//! repository into the todo service, and serves the API:
//!
//! - `DATABASE_URL` (required): `PostgreSQL` connection string
//! - `BIND_ADDR` (optional): listen address, default `127.0.0.1:8080`

use actix_web::{App, HttpServer, web};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use std::io;
use std::sync::Arc;
use tasklist::api;
use tasklist::todo::adapters::postgres::PostgresTodoRepository;
use tasklist::todo::services::TodoService;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| io::Error::other("DATABASE_URL must be set"))?;
    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_owned());

    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = Pool::builder().build(manager).map_err(io::Error::other)?;
    let service = TodoService::new(Arc::new(PostgresTodoRepository::new(pool)));

    info!(%bind_addr, "starting tasklist server");
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(service.clone()))
            .configure(api::todos::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
