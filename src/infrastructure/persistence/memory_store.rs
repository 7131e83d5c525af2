//! In-memory persistence provider.
//!
//! [`InMemoryStore`] implements every repository trait over a [`Dataset`]
//! held in ordered maps. It backs `STORAGE_BACKEND=memory` and the HTTP
//! integration tests. Aggregations follow the same rules as the SQL
//! provider: windows are inclusive calendar dates, rentals of unknown films
//! are ignored by film and category reports.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::entities::report::{month_start, rank_categories, rank_films};
use crate::domain::entities::{
    Category, Customer, CustomerRental, CustomerSummary, Film, FilmSummary, MonthlyCount,
    MonthlyRevenue, MostRentedFilm, Rental, RentalFilter, WatchedCategory,
};
use crate::domain::query::{AggregationWindow, Pagination};
use crate::domain::repositories::{
    CustomerRepository, FilmRepository, HealthRepository, RentalRepository,
};
use crate::error::AppError;

/// Raw rows loaded into an [`InMemoryStore`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub films: Vec<FilmRecord>,
    #[serde(default)]
    pub rentals: Vec<Rental>,
}

/// A film plus the ids of the categories it belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct FilmRecord {
    #[serde(flatten)]
    pub film: Film,
    #[serde(default)]
    pub category_ids: Vec<i32>,
}

pub struct InMemoryStore {
    customers: BTreeMap<i32, Customer>,
    films: BTreeMap<i32, Film>,
    categories: BTreeMap<i32, Category>,
    film_categories: HashMap<i32, Vec<i32>>,
    rentals: BTreeMap<i32, Rental>,
}

impl InMemoryStore {
    /// Indexes `dataset`. Later rows win on duplicate ids.
    pub fn new(dataset: Dataset) -> Self {
        let categories: BTreeMap<i32, Category> = dataset
            .categories
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let mut films = BTreeMap::new();
        let mut film_categories = HashMap::new();

        for record in dataset.films {
            let mut film = record.film;
            if film.category.is_none() {
                film.category = record
                    .category_ids
                    .iter()
                    .filter_map(|id| categories.get(id))
                    .map(|c| c.name.clone())
                    .min();
            }
            film_categories.insert(film.id, record.category_ids);
            films.insert(film.id, film);
        }

        Self {
            customers: dataset.customers.into_iter().map(|c| (c.id, c)).collect(),
            films,
            categories,
            film_categories,
            rentals: dataset.rentals.into_iter().map(|r| (r.id, r)).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Dataset::default())
    }

    /// Loads a JSON-encoded [`Dataset`] from disk.
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset {}", path.display()))?;
        let dataset: Dataset = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse dataset {}", path.display()))?;

        tracing::info!(
            customers = dataset.customers.len(),
            films = dataset.films.len(),
            rentals = dataset.rentals.len(),
            "Loaded in-memory dataset"
        );

        Ok(Self::new(dataset))
    }

    fn film_title(&self, film_id: i32) -> String {
        self.films
            .get(&film_id)
            .map(|f| f.title.clone())
            .unwrap_or_default()
    }

    /// Known categories of a film.
    fn categories_of(&self, film_id: i32) -> impl Iterator<Item = &Category> {
        self.film_categories
            .get(&film_id)
            .into_iter()
            .flatten()
            .filter_map(|id| self.categories.get(id))
    }

    fn rentals_in(&self, window: AggregationWindow) -> impl Iterator<Item = &Rental> {
        self.rentals
            .values()
            .filter(move |r| window.contains(r.rental_date))
    }

    fn count_by_category<'a>(
        &self,
        rentals: impl Iterator<Item = &'a Rental>,
    ) -> Vec<WatchedCategory> {
        let mut counts: BTreeMap<i32, WatchedCategory> = BTreeMap::new();

        for rental in rentals {
            for category in self.categories_of(rental.film_id) {
                counts
                    .entry(category.id)
                    .or_insert_with(|| WatchedCategory {
                        category_id: category.id,
                        name: category.name.clone(),
                        rental_count: 0,
                    })
                    .rental_count += 1;
            }
        }

        counts.into_values().collect()
    }
}

fn paginate<T>(rows: impl Iterator<Item = T>, pagination: Pagination) -> Vec<T> {
    let skip = usize::try_from(pagination.offset()).unwrap_or(usize::MAX);
    let take = usize::try_from(pagination.limit()).unwrap_or(usize::MAX);
    rows.skip(skip).take(take).collect()
}

fn as_count(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

fn as_limit(limit: i64) -> usize {
    usize::try_from(limit).unwrap_or(usize::MAX)
}

#[async_trait]
impl CustomerRepository for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, AppError> {
        Ok(self.customers.get(&id).cloned())
    }

    async fn list(
        &self,
        name: Option<String>,
        pagination: Pagination,
    ) -> Result<Vec<Customer>, AppError> {
        let rows = self
            .customers
            .values()
            .filter(|c| name.as_deref().is_none_or(|n| c.name_contains(n)))
            .cloned();

        Ok(paginate(rows, pagination))
    }

    async fn count(&self, name: Option<String>) -> Result<i64, AppError> {
        let n = self
            .customers
            .values()
            .filter(|c| name.as_deref().is_none_or(|n| c.name_contains(n)))
            .count();

        Ok(as_count(n))
    }

    async fn list_rentals(
        &self,
        customer_id: i32,
        pagination: Pagination,
    ) -> Result<Vec<CustomerRental>, AppError> {
        let mut rentals: Vec<&Rental> = self
            .rentals
            .values()
            .filter(|r| r.customer_id == customer_id)
            .collect();
        rentals.sort_by(|a, b| b.rental_date.cmp(&a.rental_date).then(b.id.cmp(&a.id)));

        let rows = rentals.into_iter().map(|r| CustomerRental {
            rental_id: r.id,
            film_id: r.film_id,
            film_title: self.film_title(r.film_id),
            rental_date: r.rental_date,
            return_date: r.return_date,
            amount: r.amount,
        });

        Ok(paginate(rows, pagination))
    }

    async fn count_rentals(&self, customer_id: i32) -> Result<i64, AppError> {
        let n = self
            .rentals
            .values()
            .filter(|r| r.customer_id == customer_id)
            .count();

        Ok(as_count(n))
    }

    async fn watched_categories(&self, customer_id: i32) -> Result<Vec<WatchedCategory>, AppError> {
        let rows =
            self.count_by_category(self.rentals.values().filter(|r| r.customer_id == customer_id));
        let len = rows.len();

        Ok(rank_categories(rows, len))
    }

    async fn summary(&self, customer_id: i32) -> Result<Option<CustomerSummary>, AppError> {
        let Some(customer) = self.customers.get(&customer_id) else {
            return Ok(None);
        };

        let rentals: Vec<&Rental> = self
            .rentals
            .values()
            .filter(|r| r.customer_id == customer_id)
            .collect();

        Ok(Some(CustomerSummary {
            customer_id,
            full_name: customer.full_name(),
            total_rentals: as_count(rentals.len()),
            open_rentals: as_count(rentals.iter().filter(|r| r.is_open()).count()),
            total_spent: rentals.iter().filter_map(|r| r.amount).sum(),
            first_rental_at: rentals.iter().map(|r| r.rental_date).min(),
            last_rental_at: rentals.iter().map(|r| r.rental_date).max(),
        }))
    }
}

#[async_trait]
impl FilmRepository for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Film>, AppError> {
        Ok(self.films.get(&id).cloned())
    }

    async fn list(
        &self,
        title: Option<String>,
        pagination: Pagination,
    ) -> Result<Vec<Film>, AppError> {
        let rows = self
            .films
            .values()
            .filter(|f| {
                title
                    .as_deref()
                    .is_none_or(|t| f.title.to_lowercase().contains(t))
            })
            .cloned();

        Ok(paginate(rows, pagination))
    }

    async fn count(&self, title: Option<String>) -> Result<i64, AppError> {
        let n = self
            .films
            .values()
            .filter(|f| {
                title
                    .as_deref()
                    .is_none_or(|t| f.title.to_lowercase().contains(t))
            })
            .count();

        Ok(as_count(n))
    }

    async fn most_rented(
        &self,
        window: AggregationWindow,
        limit: i64,
    ) -> Result<Vec<MostRentedFilm>, AppError> {
        let mut counts: BTreeMap<i32, i64> = BTreeMap::new();
        for rental in self.rentals_in(window) {
            *counts.entry(rental.film_id).or_default() += 1;
        }

        let rows = counts
            .into_iter()
            .filter_map(|(film_id, rental_count)| {
                self.films.get(&film_id).map(|film| MostRentedFilm {
                    film_id,
                    title: film.title.clone(),
                    rental_count,
                })
            })
            .collect();

        Ok(rank_films(rows, as_limit(limit)))
    }

    async fn most_watched_categories(
        &self,
        window: AggregationWindow,
        limit: i64,
    ) -> Result<Vec<WatchedCategory>, AppError> {
        let rows = self.count_by_category(self.rentals_in(window));

        Ok(rank_categories(rows, as_limit(limit)))
    }

    async fn summary(&self, film_id: i32) -> Result<Option<FilmSummary>, AppError> {
        let Some(film) = self.films.get(&film_id) else {
            return Ok(None);
        };

        let rentals: Vec<&Rental> = self
            .rentals
            .values()
            .filter(|r| r.film_id == film_id)
            .collect();

        Ok(Some(FilmSummary {
            film_id,
            title: film.title.clone(),
            total_rentals: as_count(rentals.len()),
            open_rentals: as_count(rentals.iter().filter(|r| r.is_open()).count()),
            total_revenue: rentals.iter().filter_map(|r| r.amount).sum(),
            last_rented_at: rentals.iter().map(|r| r.rental_date).max(),
        }))
    }
}

#[async_trait]
impl RentalRepository for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Rental>, AppError> {
        Ok(self.rentals.get(&id).cloned())
    }

    async fn list(
        &self,
        filter: RentalFilter,
        pagination: Pagination,
    ) -> Result<Vec<Rental>, AppError> {
        let rows = self
            .rentals
            .values()
            .filter(|r| filter.matches(r))
            .cloned();

        Ok(paginate(rows, pagination))
    }

    async fn count(&self, filter: RentalFilter) -> Result<i64, AppError> {
        let n = self.rentals.values().filter(|r| filter.matches(r)).count();

        Ok(as_count(n))
    }

    async fn monthly_counts(
        &self,
        window: AggregationWindow,
    ) -> Result<Vec<MonthlyCount>, AppError> {
        let mut months: BTreeMap<_, MonthlyCount> = BTreeMap::new();

        for rental in self.rentals_in(window) {
            let month = month_start(rental.rental_date.date());
            let row = months.entry(month).or_insert(MonthlyCount {
                month,
                rentals: 0,
                open_rentals: 0,
            });
            row.rentals += 1;
            if rental.is_open() {
                row.open_rentals += 1;
            }
        }

        Ok(months.into_values().collect())
    }

    async fn monthly_revenue(
        &self,
        window: AggregationWindow,
    ) -> Result<Vec<MonthlyRevenue>, AppError> {
        let mut months: BTreeMap<_, Decimal> = BTreeMap::new();

        for rental in self.rentals_in(window) {
            *months
                .entry(month_start(rental.rental_date.date()))
                .or_default() += rental.amount.unwrap_or_default();
        }

        Ok(months
            .into_iter()
            .map(|(month, amount)| MonthlyRevenue { month, amount })
            .collect())
    }
}

#[async_trait]
impl HealthRepository for InMemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
