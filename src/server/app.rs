//! Serve the question API.
#![allow(
    clippy::exit,
    reason = "We exit with 1 error code on any application errors"
)]
use crate::db;
use crate::server::api::routes;
use crate::server::api::state::App as AppState;
use crate::server::tracing::RecappRootSpanBuilder;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::{App, Error, HttpServer};
use tracing_actix_web::TracingLogger;

use std::{io, process};

use actix_http::body::MessageBody;
use actix_service::ServiceFactory;

/// Serve the question API.
///
/// Connects to the datastore (see `DATABASE_URL`) and binds the HTTP
/// server to the given port.
#[actix_web::main]
pub async fn serve(port: u16) -> io::Result<()> {
    let bind = "127.0.0.1";

    let db = match db::init::connect().await {
        Ok(db) => db,
        Err(err) => {
            tracing::error!(
                "error: could not connect to database. Confirm that DATABASE_URL env var is set correctly."
            );
            tracing::error!("Error: {:?}", err);
            process::exit(1);
        }
    };
    let state = AppState { db };

    let server = HttpServer::new(move || init_app(&state)).bind((bind, port))?;
    // Only announce once the port is actually ours.
    tracing::info!("Server is up on http://{bind}:{port}");
    server.run().await
}

/// Initialize the application and all routing at start-up time.
///
/// Builds an isolated `App` from explicit state, so tests can instantiate
/// their own instance over their own datastore.
pub fn init_app(
    state: &AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<impl MessageBody>,
        Config = (),
        InitError = (),
        Error = Error,
    >,
> {
    let app = App::new().wrap(TracingLogger::<RecappRootSpanBuilder>::new());
    routes::register_app(app, state)
}
