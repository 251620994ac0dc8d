//! Tests for employee HTTP handlers.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use chrono::{TimeZone, Utc};
use pagination::{Page, PageParams};
use rstest::rstest;
use serde_json::json;

use super::*;
use crate::domain::ErrorCode;
use crate::inbound::http::auth::test_tokens::bearer;
use crate::inbound::http::test_utils::{MockPorts, body_json, test_app};

const ADMIN: &[&str] = &["IDM_ADMIN"];
const USER: &[&str] = &["IDM_USER"];

fn employee_response(id: i64, name: &str) -> EmployeeResponse {
    let at = Utc
        .with_ymd_and_hms(2025, 1, 2, 3, 4, 5)
        .single()
        .expect("valid timestamp");
    EmployeeResponse {
        id,
        name: name.to_owned(),
        role_id: 1,
        created_at: at,
        updated_at: at,
    }
}

#[rstest]
fn page_request_applies_defaults() {
    let request = page_request(PageQuery::default()).expect("defaults");
    assert_eq!(
        request,
        PageRequest {
            page_size: DEFAULT_PAGE_SIZE,
            page_number: 0,
            text_filter: None,
        }
    );
}

#[rstest]
fn page_request_drops_empty_filter() {
    let request = page_request(PageQuery {
        page_size: Some("5".to_owned()),
        page_number: Some("2".to_owned()),
        text_filter: Some(String::new()),
    })
    .expect("valid query");
    assert_eq!(request.page_size, 5);
    assert_eq!(request.page_number, 2);
    assert_eq!(request.text_filter, None);
}

#[rstest]
fn page_request_rejects_non_numeric_size() {
    let err = page_request(PageQuery {
        page_size: Some("ten".to_owned()),
        ..PageQuery::default()
    })
    .expect_err("bad page size");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.message(), "pageSize must be an integer");
}

#[actix_web::test]
async fn create_returns_new_id_for_admin() {
    let mut ports = MockPorts::default();
    ports
        .employees
        .expect_save()
        .withf(|ctx, request| {
            ctx.principal().is_some() && request.name == "Ada Lovelace" && request.role_id == 1
        })
        .times(1)
        .return_once(|_, _| Ok(IdResponse { id: 42 }));
    let app = actix_test::init_service(test_app(ports)).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/employees")
        .insert_header(bearer(ADMIN))
        .set_json(json!({"name": "Ada Lovelace", "role_id": 1}))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        body_json(res).await,
        json!({"success": true, "data": {"id": 42}})
    );
}

#[actix_web::test]
async fn create_is_forbidden_for_plain_user() {
    let mut ports = MockPorts::default();
    ports.employees.expect_save().never();
    let app = actix_test::init_service(test_app(ports)).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/employees")
        .insert_header(bearer(USER))
        .set_json(json!({"name": "Ada Lovelace", "role_id": 1}))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body = body_json(res).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"]["code"], json!("forbidden"));
    assert!(body["error"]["traceId"].is_string());
}

#[actix_web::test]
async fn create_without_token_is_unauthorized() {
    let mut ports = MockPorts::default();
    ports.employees.expect_save().never();
    let app = actix_test::init_service(test_app(ports)).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/employees")
        .set_json(json!({"name": "Ada Lovelace", "role_id": 1}))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn create_with_malformed_body_is_invalid_request() {
    let mut ports = MockPorts::default();
    ports.employees.expect_save().never();
    let app = actix_test::init_service(test_app(ports)).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/employees")
        .insert_header(bearer(ADMIN))
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"name\":")
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = body_json(res).await;
    assert_eq!(body["error"]["code"], json!("invalid_request"));
}

#[actix_web::test]
async fn duplicate_name_is_bad_request() {
    let mut ports = MockPorts::default();
    ports.employees.expect_save().times(1).return_once(|_, _| {
        Err(Error::already_exists(
            "employee with name Ada Lovelace already exists",
        ))
    });
    let app = actix_test::init_service(test_app(ports)).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/employees")
        .insert_header(bearer(ADMIN))
        .set_json(json!({"name": "Ada Lovelace", "role_id": 1}))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = body_json(res).await;
    assert_eq!(body["error"]["code"], json!("already_exists"));
    assert_eq!(
        body["error"]["message"],
        json!("employee with name Ada Lovelace already exists")
    );
}

#[actix_web::test]
async fn list_returns_employees_for_user() {
    let mut ports = MockPorts::default();
    ports
        .employees_query
        .expect_find_all()
        .times(1)
        .return_once(|_| Ok(vec![employee_response(1, "Ada Lovelace")]));
    let app = actix_test::init_service(test_app(ports)).await;

    let req = actix_test::TestRequest::get()
        .uri("/api/v1/employees")
        .insert_header(bearer(USER))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"][0]["name"], json!("Ada Lovelace"));
}

#[actix_web::test]
async fn missing_employee_is_soft_not_found() {
    let mut ports = MockPorts::default();
    ports
        .employees_query
        .expect_find_by_id()
        .withf(|_, request| request.id == 7)
        .times(1)
        .return_once(|ctx, _| Err(ctx.attach(Error::not_found("employee with id 7 not found"))));
    let app = actix_test::init_service(test_app(ports)).await;

    let req = actix_test::TestRequest::get()
        .uri("/api/v1/employees/7")
        .insert_header(bearer(USER))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"]["code"], json!("not_found"));
}

#[rstest]
#[case("/api/v1/employees/abc")]
#[case("/api/v1/employees/1.5")]
#[actix_web::test]
async fn non_numeric_id_is_invalid_request(#[case] uri: &str) {
    let mut ports = MockPorts::default();
    ports.employees_query.expect_find_by_id().never();
    let app = actix_test::init_service(test_app(ports)).await;

    let req = actix_test::TestRequest::get()
        .uri(uri)
        .insert_header(bearer(USER))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = body_json(res).await;
    assert_eq!(body["error"]["details"]["field"], json!("id"));
}

#[actix_web::test]
async fn page_passes_query_to_service() {
    let mut ports = MockPorts::default();
    ports
        .employees_query
        .expect_find_with_offset()
        .withf(|_, request| {
            request.page_size == 3
                && request.page_number == 1
                && request.text_filter.as_deref() == Some("ada")
        })
        .times(1)
        .return_once(|_, _| {
            let params = PageParams::new(3, 1).expect("valid params");
            Ok(Page::new(params, vec![employee_response(4, "Ada Byron")], 4))
        });
    let app = actix_test::init_service(test_app(ports)).await;

    let req = actix_test::TestRequest::get()
        .uri("/api/v1/employees/page?pageSize=3&pageNumber=1&textFilter=ada")
        .insert_header(bearer(USER))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    assert_eq!(body["data"]["page_size"], json!(3));
    assert_eq!(body["data"]["page_number"], json!(1));
    assert_eq!(body["data"]["total"], json!(4));
    assert_eq!(body["data"]["result"][0]["id"], json!(4));
}

#[actix_web::test]
async fn page_rejects_malformed_number() {
    let mut ports = MockPorts::default();
    ports.employees_query.expect_find_with_offset().never();
    let app = actix_test::init_service(test_app(ports)).await;

    let req = actix_test::TestRequest::get()
        .uri("/api/v1/employees/page?pageNumber=first")
        .insert_header(bearer(USER))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = body_json(res).await;
    assert_eq!(body["error"]["details"]["field"], json!("pageNumber"));
}

#[actix_web::test]
async fn find_parses_id_list() {
    let mut ports = MockPorts::default();
    ports
        .employees_query
        .expect_find_by_ids()
        .withf(|_, request| request.ids == vec![1, 2, 3])
        .times(1)
        .return_once(|_, _| Ok(vec![employee_response(1, "Ada Lovelace")]));
    let app = actix_test::init_service(test_app(ports)).await;

    let req = actix_test::TestRequest::get()
        .uri("/api/v1/employees/find?ids=1,2,3")
        .insert_header(bearer(ADMIN))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
}

#[actix_web::test]
async fn delete_many_echoes_ids() {
    let mut ports = MockPorts::default();
    ports
        .employees
        .expect_delete_by_ids()
        .withf(|_, request| request.ids == vec![4, 5])
        .times(1)
        .return_once(|_, _| Ok(()));
    let app = actix_test::init_service(test_app(ports)).await;

    let req = actix_test::TestRequest::delete()
        .uri("/api/v1/employees/delete?ids=4,5")
        .insert_header(bearer(ADMIN))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        body_json(res).await,
        json!({"success": true, "data": [4, 5]})
    );
}

#[actix_web::test]
async fn delete_one_requires_admin() {
    let mut ports = MockPorts::default();
    ports.employees.expect_delete_by_id().never();
    let app = actix_test::init_service(test_app(ports)).await;

    let req = actix_test::TestRequest::delete()
        .uri("/api/v1/employees/9")
        .insert_header(bearer(USER))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn delete_one_echoes_id() {
    let mut ports = MockPorts::default();
    ports
        .employees
        .expect_delete_by_id()
        .withf(|_, request| request.id == 9)
        .times(1)
        .return_once(|_, _| Ok(()));
    let app = actix_test::init_service(test_app(ports)).await;

    let req = actix_test::TestRequest::delete()
        .uri("/api/v1/employees/9")
        .insert_header(bearer(ADMIN))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(
        body_json(res).await,
        json!({"success": true, "data": {"id": 9}})
    );
}
