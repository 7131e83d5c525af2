mod common;

use axum::http::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_list_customers_defaults() {
    let server = common::create_test_server();

    let response = server.get("/api/customers").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["current_page"], 1);
    assert_eq!(json["total"], 3);

    let ids: Vec<i64> = json["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_list_customers_pagination() {
    let server = common::create_test_server();

    let response = server.get("/api/customers?page=2&limit=2").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["current_page"], 2);
    assert_eq!(json["total"], 3);
    assert_eq!(json["items"].as_array().unwrap().len(), 1);
    assert_eq!(json["items"][0]["first_name"], "Peter");
}

#[tokio::test]
async fn test_list_customers_page_past_the_end_is_empty() {
    let server = common::create_test_server();

    let response = server.get("/api/customers?page=10&limit=10").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["total"], 3);
    assert!(json["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_customers_name_filter() {
    let server = common::create_test_server();

    for (name, expected_first) in [("doe", "John"), ("MITCH", "Carl"), ("peter b", "Peter")] {
        let response = server
            .get("/api/customers")
            .add_query_param("name", name)
            .await;

        response.assert_status_ok();
        let json = response.json::<Value>();
        assert_eq!(json["total"], 1, "name={name}");
        assert_eq!(json["items"][0]["first_name"], expected_first, "name={name}");
    }
}

#[tokio::test]
async fn test_list_customers_blank_name_is_ignored() {
    let server = common::create_test_server();

    let response = server
        .get("/api/customers")
        .add_query_param("name", "   ")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["total"], 3);
}

#[tokio::test]
async fn test_list_customers_rejects_non_positive_pagination() {
    let server = common::create_test_server();

    let response = server.get("/api/customers?page=0&limit=-1").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(
        json["error"]["details"]["fields"],
        serde_json::json!(["page", "limit"])
    );
}

#[tokio::test]
async fn test_list_customers_rejects_non_integer_page() {
    let server = common::create_test_server();

    let response = server.get("/api/customers?page=first").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_get_customer() {
    let server = common::create_test_server();

    let response = server.get("/api/customers/1").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["first_name"], "John");
    assert_eq!(json["last_name"], "Doe");
    assert_eq!(json["city"], "Orlando");
    assert_eq!(json["active"], "1");
    assert_eq!(json["created_at"], "2023-12-01T09:00:00");
}

#[tokio::test]
async fn test_get_inactive_customer() {
    let server = common::create_test_server();

    let response = server.get("/api/customers/3").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["active"], "0");
}

#[tokio::test]
async fn test_get_customer_not_found() {
    let server = common::create_test_server();

    let response = server.get("/api/customers/999").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["message"], "Customer not found");
    assert_eq!(json["error"]["details"]["id"], 999);
}

#[tokio::test]
async fn test_get_customer_invalid_id() {
    let server = common::create_test_server();

    let response = server.get("/api/customers/abc").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_customer_rentals_newest_first() {
    let server = common::create_test_server();

    let response = server.get("/api/customers/1/rentals").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["total"], 3);

    let ids: Vec<i64> = json["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["rental_id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![5, 2, 1]);
    assert_eq!(json["items"][0]["film_title"], "Adaptation Holes");
    assert!(json["items"][0]["return_date"].is_null());
}

#[tokio::test]
async fn test_customer_rentals_paginated() {
    let server = common::create_test_server();

    let response = server.get("/api/customers/1/rentals?page=2&limit=2").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["current_page"], 2);
    assert_eq!(json["items"].as_array().unwrap().len(), 1);
    assert_eq!(json["items"][0]["rental_id"], 1);
}

#[tokio::test]
async fn test_customer_rentals_unknown_customer_is_empty() {
    let server = common::create_test_server();

    let response = server.get("/api/customers/999/rentals").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["total"], 0);
    assert!(json["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_customer_categories_ranked() {
    let server = common::create_test_server();

    let response = server.get("/api/customers/1/categories").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    let rows: Vec<(String, i64)> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| {
            (
                c["name"].as_str().unwrap().to_string(),
                c["rental_count"].as_i64().unwrap(),
            )
        })
        .collect();

    assert_eq!(
        rows,
        vec![
            ("Horror".to_string(), 2),
            ("Action".to_string(), 1),
            ("Comedy".to_string(), 1),
        ]
    );
}

#[tokio::test]
async fn test_customer_summary() {
    let server = common::create_test_server();

    let response = server.get("/api/customers/1/summary").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["full_name"], "John Doe");
    assert_eq!(json["total_rentals"], 3);
    assert_eq!(json["open_rentals"], 1);
    assert_eq!(json["total_spent"], "10.97");
    assert_eq!(json["first_rental_at"], "2024-01-05T10:00:00");
    assert_eq!(json["last_rental_at"], "2024-02-14T20:00:00");
}

#[tokio::test]
async fn test_customer_summary_not_found() {
    let server = common::create_test_server();

    let response = server.get("/api/customers/999/summary").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_customer_route_is_not_found() {
    let server = common::create_test_server();

    let response = server.get("/api/customers/1/unknown").await;

    response.assert_status(StatusCode::NOT_FOUND);
}
