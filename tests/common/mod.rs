use actix_http::body::MessageBody;
use actix_http::Request;
use actix_service::Service;
use actix_web::{dev::ServiceResponse, test, Error};
use std::path::Path;
use tempfile::{Builder, TempDir};

use recapp::db::models::question::{Manager as _, NewQuestion, Question};
use recapp::db::{init, DatabaseConnection, Db as _};
use recapp::server::api::state::App as AppState;
use recapp::server::app::init_app;

pub fn initialize_db_dir() -> TempDir {
    Builder::new().tempdir().unwrap()
}

pub async fn connect_db(dir: &Path) -> DatabaseConnection {
    let db_path = dir.join("recapp-test.sqlite3");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.to_string_lossy());
    let connection = DatabaseConnection::connect(&db_url).await.unwrap();
    init::ensure_schema(&connection).await.unwrap();
    connection
}

pub async fn initialize_app(
    db: &DatabaseConnection,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    let state = AppState { db: db.clone() };
    test::init_service(init_app(&state)).await
}

pub async fn seed_question(
    db: &DatabaseConnection,
    name: &str,
    text: &str,
    repo: &str,
    live: &str,
) -> Question {
    db.create_question(&NewQuestion {
        name: name.into(),
        text: text.into(),
        repo: repo.into(),
        live: live.into(),
    })
    .await
    .unwrap()
}
