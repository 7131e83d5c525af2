#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use sakila_api::domain::entities::{Category, Customer, Film, Rental};
use sakila_api::infrastructure::persistence::{Dataset, FilmRecord, InMemoryStore, Repositories};
use sakila_api::routes::unthrottled_router;
use sakila_api::state::AppState;

pub const CATEGORY_ACTION: i32 = 1;
pub const CATEGORY_COMEDY: i32 = 2;
pub const CATEGORY_HORROR: i32 = 3;

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

pub fn create_test_customer(id: i32, first: &str, last: &str, active: bool) -> Customer {
    Customer {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: Some(format!(
            "{}.{}@sakilacustomer.org",
            first.to_uppercase(),
            last.to_uppercase()
        )),
        address: format!("{id}23 Main Street"),
        address2: None,
        city: "Orlando".to_string(),
        country: "United States".to_string(),
        created_at: at(2023, 12, 1, 9, 0),
        active,
    }
}

pub fn create_test_film(id: i32, title: &str, category_ids: Vec<i32>) -> FilmRecord {
    FilmRecord {
        film: Film {
            id,
            title: title.to_string(),
            description: None,
            release_year: Some(2006),
            length: Some(90),
            rating: Some("PG".to_string()),
            rental_rate: Decimal::new(299, 2),
            category: None,
        },
        category_ids,
    }
}

pub fn create_test_rental(
    id: i32,
    customer_id: i32,
    film_id: i32,
    rental_date: NaiveDateTime,
    return_date: Option<NaiveDateTime>,
    amount_cents: Option<i64>,
) -> Rental {
    Rental {
        id,
        customer_id,
        film_id,
        rental_date,
        return_date,
        amount: amount_cents.map(|cents| Decimal::new(cents, 2)),
    }
}

/// Three customers, four films and six rentals spread over January to March 2024.
///
/// | rental | customer | film | date             | returned | paid |
/// |--------|----------|------|------------------|----------|------|
/// | 1      | 1        | 1    | 2024-01-05 10:00 | yes      | 2.99 |
/// | 2      | 1        | 2    | 2024-01-20 15:30 | yes      | 4.99 |
/// | 3      | 2        | 1    | 2024-01-25 18:00 | no       | -    |
/// | 4      | 2        | 1    | 2024-02-03 11:00 | yes      | 0.99 |
/// | 5      | 1        | 3    | 2024-02-14 20:00 | no       | 2.99 |
/// | 6      | 3        | 2    | 2024-03-31 23:30 | yes      | 5.99 |
pub fn create_test_dataset() -> Dataset {
    Dataset {
        customers: vec![
            create_test_customer(1, "John", "Doe", true),
            create_test_customer(2, "Carl", "Mitch", true),
            create_test_customer(3, "Peter", "Blake", false),
        ],
        categories: vec![
            Category {
                id: CATEGORY_ACTION,
                name: "Action".to_string(),
            },
            Category {
                id: CATEGORY_COMEDY,
                name: "Comedy".to_string(),
            },
            Category {
                id: CATEGORY_HORROR,
                name: "Horror".to_string(),
            },
        ],
        films: vec![
            create_test_film(1, "Academy Dinosaur", vec![CATEGORY_HORROR, CATEGORY_ACTION]),
            create_test_film(2, "Ace Goldfinger", vec![CATEGORY_HORROR]),
            create_test_film(3, "Adaptation Holes", vec![CATEGORY_COMEDY]),
            create_test_film(4, "Zorro Ark", vec![]),
        ],
        rentals: vec![
            create_test_rental(1, 1, 1, at(2024, 1, 5, 10, 0), Some(at(2024, 1, 8, 9, 0)), Some(299)),
            create_test_rental(2, 1, 2, at(2024, 1, 20, 15, 30), Some(at(2024, 1, 22, 9, 0)), Some(499)),
            create_test_rental(3, 2, 1, at(2024, 1, 25, 18, 0), None, None),
            create_test_rental(4, 2, 1, at(2024, 2, 3, 11, 0), Some(at(2024, 2, 5, 9, 0)), Some(99)),
            create_test_rental(5, 1, 3, at(2024, 2, 14, 20, 0), None, Some(299)),
            create_test_rental(6, 3, 2, at(2024, 3, 31, 23, 30), Some(at(2024, 4, 2, 9, 0)), Some(599)),
        ],
    }
}

pub fn create_test_state(dataset: Dataset) -> AppState {
    let store = Arc::new(InMemoryStore::new(dataset));
    AppState::new(Repositories::in_memory(store))
}

pub fn create_test_server() -> TestServer {
    create_test_server_with(create_test_dataset())
}

pub fn create_test_server_with(dataset: Dataset) -> TestServer {
    TestServer::new(unthrottled_router(create_test_state(dataset))).unwrap()
}
