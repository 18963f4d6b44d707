mod common;

use actix_web::http::header::ContentType;
use actix_web::test;
use recapp::db::models::question::Manager as _;
use serde_json::{json, Value};

#[actix_web::test]
async fn test_list_questions_when_store_empty_expect_ok_with_empty_array() {
    let dir = common::initialize_db_dir();
    let db = common::connect_db(dir.path()).await;
    let app = common::initialize_app(&db).await;

    let req = test::TestRequest::get().uri("/api/questions").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(200, resp.status().as_u16());

    let body: Vec<Value> = test::read_body_json(resp).await;
    assert!(body.is_empty());
}

#[actix_web::test]
async fn test_list_questions_when_one_stored_expect_all_fields_intact() {
    let dir = common::initialize_db_dir();
    let db = common::connect_db(dir.path()).await;
    common::seed_question(&db, "Ada", "hi", "http://x", "http://y").await;
    let app = common::initialize_app(&db).await;

    let req = test::TestRequest::get().uri("/api/questions").to_request();
    let body: Vec<Value> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(1, body.len());
    assert_eq!(json!("Ada"), body[0]["name"]);
    assert_eq!(json!("hi"), body[0]["text"]);
    assert_eq!(json!("http://x"), body[0]["repo"]);
    assert_eq!(json!("http://y"), body[0]["live"]);
}

#[actix_web::test]
async fn test_list_questions_when_several_stored_expect_store_order() {
    let dir = common::initialize_db_dir();
    let db = common::connect_db(dir.path()).await;
    common::seed_question(&db, "Ada", "first", "http://a", "http://b").await;
    common::seed_question(&db, "Grace", "second", "http://c", "http://d").await;
    let app = common::initialize_app(&db).await;

    let req = test::TestRequest::get().uri("/api/questions").to_request();
    let body: Vec<Value> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(2, body.len());
    assert_eq!(json!("Ada"), body[0]["name"]);
    assert_eq!(json!("Grace"), body[1]["name"]);
}

#[actix_web::test]
async fn test_list_question_names_when_several_stored_expect_names_only() {
    let dir = common::initialize_db_dir();
    let db = common::connect_db(dir.path()).await;
    common::seed_question(&db, "Ada", "first", "http://a", "http://b").await;
    common::seed_question(&db, "Grace", "second", "http://c", "http://d").await;
    let app = common::initialize_app(&db).await;

    let req = test::TestRequest::get()
        .uri("/api/questions/names")
        .to_request();
    let body: Vec<String> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(vec!["Ada".to_owned(), "Grace".to_owned()], body);
}

#[actix_web::test]
async fn test_list_questions_when_datastore_down_expect_internal_server_error() {
    let dir = common::initialize_db_dir();
    let db = common::connect_db(dir.path()).await;
    let app = common::initialize_app(&db).await;
    db.pool.close().await;

    let req = test::TestRequest::get().uri("/api/questions").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(500, resp.status().as_u16());

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn test_create_question_when_valid_expect_created_and_listed() {
    let dir = common::initialize_db_dir();
    let db = common::connect_db(dir.path()).await;
    let app = common::initialize_app(&db).await;

    let req = test::TestRequest::post()
        .uri("/api/questions")
        .set_json(json!({
            "name": "Ada",
            "text": "hi",
            "repo": "http://x",
            "live": "http://y"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(201, resp.status().as_u16());

    let stored: Value = test::read_body_json(resp).await;
    assert_eq!(json!("Ada"), stored["name"]);
    assert!(stored["id"].is_i64());
    assert!(stored["created_at"].is_string());

    let req = test::TestRequest::get().uri("/api/questions").to_request();
    let body: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(1, body.len());
    assert_eq!(stored["id"], body[0]["id"]);
}

#[actix_web::test]
async fn test_create_question_when_blank_name_expect_unprocessable_naming_field() {
    let dir = common::initialize_db_dir();
    let db = common::connect_db(dir.path()).await;
    let app = common::initialize_app(&db).await;

    let req = test::TestRequest::post()
        .uri("/api/questions")
        .set_json(json!({
            "name": "   ",
            "text": "hi",
            "repo": "http://x",
            "live": "http://y"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(422, resp.status().as_u16());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(json!("name"), body["field"]);
}

#[actix_web::test]
async fn test_create_question_when_repo_not_a_url_expect_unprocessable() {
    let dir = common::initialize_db_dir();
    let db = common::connect_db(dir.path()).await;
    let app = common::initialize_app(&db).await;

    let req = test::TestRequest::post()
        .uri("/api/questions")
        .set_json(json!({
            "name": "Ada",
            "text": "hi",
            "repo": "not-a-url",
            "live": "http://y"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(422, resp.status().as_u16());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(json!("repo"), body["field"]);

    let req = test::TestRequest::get().uri("/api/questions").to_request();
    let listed: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert!(listed.is_empty());
}

#[actix_web::test]
async fn test_create_question_when_malformed_json_expect_client_error() {
    let dir = common::initialize_db_dir();
    let db = common::connect_db(dir.path()).await;
    let app = common::initialize_app(&db).await;

    let req = test::TestRequest::post()
        .uri("/api/questions")
        .insert_header(ContentType::json())
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let actual = resp.status().is_client_error();
    let expected = true;
    assert_eq!(expected, actual);
}

#[actix_web::test]
async fn test_create_question_when_inserted_expect_assigned_row_ids() {
    let dir = common::initialize_db_dir();
    let db = common::connect_db(dir.path()).await;

    let first = common::seed_question(&db, "Ada", "hi", "http://x", "http://y").await;
    let second = common::seed_question(&db, "Grace", "also hi", "http://c", "http://d").await;

    assert!(first.id > 0);
    assert!(second.id > first.id);
    assert_eq!("Ada", first.name);
    assert!(!first.created_at.is_empty());

    let found = db.find_question_by_id(first.id).await.unwrap();
    assert_eq!(Some(first), found);
}

#[actix_web::test]
async fn test_index_route_expect_greeting() {
    let dir = common::initialize_db_dir();
    let db = common::connect_db(dir.path()).await;
    let app = common::initialize_app(&db).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    let actual = resp.status().is_success();
    let expected = true;
    assert_eq!(expected, actual);
}
