mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

fn ids(json: &Value, key: &str) -> Vec<i64> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|row| row[key].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_list_films() {
    let server = common::create_test_server();

    let response = server.get("/api/films").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["total"], 4);
    assert_eq!(ids(&json["items"], "id"), vec![1, 2, 3, 4]);
    assert_eq!(json["items"][0]["rental_rate"], "2.99");
}

#[tokio::test]
async fn test_film_primary_category_is_alphabetically_first() {
    let server = common::create_test_server();

    let json = server.get("/api/films/1").await.json::<Value>();
    assert_eq!(json["category"], "Action");

    let json = server.get("/api/films/4").await.json::<Value>();
    assert!(json["category"].is_null());
}

#[tokio::test]
async fn test_list_films_title_filter() {
    let server = common::create_test_server();

    let response = server
        .get("/api/films")
        .add_query_param("name", "GOLD")
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["total"], 1);
    assert_eq!(json["items"][0]["title"], "Ace Goldfinger");
}

#[tokio::test]
async fn test_list_films_rejects_zero_limit() {
    let server = common::create_test_server();

    let response = server.get("/api/films?limit=0").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["details"]["fields"], json!(["limit"]));
}

#[tokio::test]
async fn test_get_film_not_found() {
    let server = common::create_test_server();

    let response = server.get("/api/films/999").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["message"], "Film not found");
}

#[tokio::test]
async fn test_most_rented_films_in_january() {
    let server = common::create_test_server();

    let response = server
        .get("/api/films/most-rented?from=2024-01-01&to=2024-01-31")
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(ids(&json, "film_id"), vec![1, 2]);
    assert_eq!(json[0]["title"], "Academy Dinosaur");
    assert_eq!(json[0]["rental_count"], 2);
    assert_eq!(json[1]["rental_count"], 1);
}

#[tokio::test]
async fn test_most_rented_films_respects_limit() {
    let server = common::create_test_server();

    let response = server
        .get("/api/films/most-rented?limit=2&from=2024-01-01&to=2024-12-31")
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(ids(&json, "film_id"), vec![1, 2]);
    assert_eq!(json[0]["rental_count"], 3);
}

#[tokio::test]
async fn test_most_rented_films_window_end_is_inclusive() {
    let server = common::create_test_server();

    let response = server
        .get("/api/films/most-rented?from=2024-03-31&to=2024-03-31")
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(ids(&json, "film_id"), vec![2]);
}

#[tokio::test]
async fn test_most_rented_films_limit_bounds() {
    let server = common::create_test_server();

    for limit in ["0", "-3", "101"] {
        let response = server
            .get("/api/films/most-rented")
            .add_query_param("limit", limit)
            .add_query_param("from", "2024-01-01")
            .add_query_param("to", "2024-12-31")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let json = response.json::<Value>();
        assert_eq!(json["error"]["details"]["fields"], json!(["limit"]), "limit={limit}");
    }

    let response = server
        .get("/api/films/most-rented?limit=100&from=2024-01-01&to=2024-12-31")
        .await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_most_rented_films_rejects_malformed_dates() {
    let server = common::create_test_server();

    let response = server
        .get("/api/films/most-rented?from=Date&to=2024-01-31")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["fields"], json!(["from"]));

    let response = server
        .get("/api/films/most-rented?from=2024-1-1&to=2024-02-30")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["details"]["fields"], json!(["from", "to"]));
}

#[tokio::test]
async fn test_most_rented_films_requires_both_dates() {
    let server = common::create_test_server();

    let response = server.get("/api/films/most-rented").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["details"]["fields"], json!(["from", "to"]));
}

#[tokio::test]
async fn test_most_rented_films_reversed_window_is_empty() {
    let server = common::create_test_server();

    let response = server
        .get("/api/films/most-rented?from=2024-12-31&to=2024-01-01")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_most_watched_categories() {
    let server = common::create_test_server();

    let response = server
        .get("/api/films/most-watched-categories?from=2024-01-01&to=2024-12-31")
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(
        ids(&json, "category_id"),
        vec![
            i64::from(common::CATEGORY_HORROR),
            i64::from(common::CATEGORY_ACTION),
            i64::from(common::CATEGORY_COMEDY),
        ]
    );
    assert_eq!(json[0]["name"], "Horror");
    assert_eq!(json[0]["rental_count"], 5);
    assert_eq!(json[1]["rental_count"], 3);
}

#[tokio::test]
async fn test_most_watched_categories_has_no_upper_limit() {
    let server = common::create_test_server();

    let response = server
        .get("/api/films/most-watched-categories?limit=500&from=2024-01-01&to=2024-12-31")
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>().as_array().unwrap().len(), 3);

    let response = server
        .get("/api/films/most-watched-categories?limit=0&from=2024-01-01&to=2024-12-31")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_film_summary() {
    let server = common::create_test_server();

    let response = server.get("/api/films/1/summary").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["title"], "Academy Dinosaur");
    assert_eq!(json["total_rentals"], 3);
    assert_eq!(json["open_rentals"], 1);
    assert_eq!(json["total_revenue"], "3.98");
    assert_eq!(json["last_rented_at"], "2024-02-03T11:00:00");
}

#[tokio::test]
async fn test_film_summary_never_rented() {
    let server = common::create_test_server();

    let response = server.get("/api/films/4/summary").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["total_rentals"], 0);
    assert_eq!(json["total_revenue"], "0");
    assert!(json["last_rented_at"].is_null());
}

#[tokio::test]
async fn test_film_summary_not_found() {
    let server = common::create_test_server();

    let response = server.get("/api/films/999/summary").await;

    response.assert_status(StatusCode::NOT_FOUND);
}
