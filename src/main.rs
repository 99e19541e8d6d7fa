mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::io;
use std::sync::Arc;

use crate::config::Config;
use crate::db::{EmployeeRepository, PgEmployeeRepository};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

    // Initialize the database pool
    let pool = db::create_pool(&config);
    let repository: Arc<dyn EmployeeRepository> = Arc::new(PgEmployeeRepository::new(pool.clone()));
    let repository = web::Data::from(repository);

    let (host, port) = config.bind_address();
    info!("Server running on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .app_data(repository.clone())
            .configure(handlers::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;

    pool.close().await;
    Ok(())
}
