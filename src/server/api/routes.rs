//! A central place to register App routes.
use actix_service::ServiceFactory;
use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    web, App, Error,
};

use super::questions;
use super::state::App as AppState;

/// Central place to register all the App routing.
///
/// Static routes are registered before routes with a dynamic tail, so
/// `/api/questions/names` must come before the bare collection resource.
pub fn register_app<
    T: MessageBody,
    U: ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<T>,
        Config = (),
        InitError = (),
        Error = Error,
    >,
>(
    app: App<U>,
    state: &AppState,
) -> App<U> {
    app.service(web::resource("/").route(web::get().to(questions::index)))
        .service(
            web::scope("/api").service(
                web::scope("/questions")
                    .service(
                        web::resource("/names").route(web::get().to(questions::names)),
                    )
                    .service(
                        web::resource("")
                            .route(web::get().to(questions::list))
                            .route(web::post().to(questions::create)),
                    ),
            ),
        )
        .app_data(web::Data::new(state.clone()))
}
