//! Application persistence.
//!
//! Handlers depend on the [`ApplicationStore`] trait; production wires in
//! [`MySqlApplicationStore`]. Each operation is exactly one statement on a
//! connection borrowed from the pool for its duration.

use std::time::Instant;

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::applications::model::{DriverApplication, NewApplication};
use crate::db::error::StoreResult;
use crate::observability::metrics;

const INSERT_APPLICATION: &str = r#"
    INSERT INTO driver_applications (
        full_name,
        email,
        phone,
        city,
        state,
        vehicle_type,
        experience_years,
        has_commercial_insurance,
        start_date,
        notes
    ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
"#;

const SELECT_APPLICATIONS: &str = r#"
    SELECT id, full_name, email, phone, city, state, vehicle_type,
           experience_years, has_commercial_insurance, start_date, notes, created_at
    FROM driver_applications
    ORDER BY created_at DESC, id DESC
"#;

/// Storage for driver applications.
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    /// Insert one application and return its assigned id.
    async fn insert(&self, application: &NewApplication) -> StoreResult<u64>;

    /// Every stored application, newest first.
    async fn list_newest_first(&self) -> StoreResult<Vec<DriverApplication>>;
}

/// [`ApplicationStore`] backed by the `driver_applications` MySQL table.
#[derive(Clone)]
pub struct MySqlApplicationStore {
    pool: MySqlPool,
}

impl MySqlApplicationStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

#[async_trait]
impl ApplicationStore for MySqlApplicationStore {
    async fn insert(&self, application: &NewApplication) -> StoreResult<u64> {
        let start = Instant::now();
        let result = sqlx::query(INSERT_APPLICATION)
            .bind(&application.full_name)
            .bind(&application.email)
            .bind(&application.phone)
            .bind(&application.city)
            .bind(&application.state)
            .bind(&application.vehicle_type)
            .bind(application.experience_years)
            .bind(application.has_commercial_insurance.as_str())
            .bind(application.start_date.as_deref())
            .bind(application.notes.as_deref())
            .execute(&self.pool)
            .await;
        metrics::record_store_call("insert", start, result.is_ok());

        Ok(result?.last_insert_id())
    }

    async fn list_newest_first(&self) -> StoreResult<Vec<DriverApplication>> {
        let start = Instant::now();
        let result = sqlx::query_as::<_, DriverApplication>(SELECT_APPLICATIONS)
            .fetch_all(&self.pool)
            .await;
        metrics::record_store_call("list", start, result.is_ok());

        Ok(result?)
    }
}
