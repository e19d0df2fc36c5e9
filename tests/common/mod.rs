//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use tokio::net::TcpListener;

use driver_api::applications::{DriverApplication, NewApplication};
use driver_api::db::{ApplicationStore, StoreError, StoreResult};
use driver_api::{AppConfig, HttpServer, Shutdown};

/// In-memory store with a switch to simulate backend outages.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<DriverApplication>>,
    next_id: AtomicU64,
    insert_attempts: AtomicUsize,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Make every subsequent call fail like an unreachable database.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn rows(&self) -> Vec<DriverApplication> {
        self.rows.lock().unwrap().clone()
    }

    pub fn insert_attempts(&self) -> usize {
        self.insert_attempts.load(Ordering::SeqCst)
    }

    fn check(&self) -> StoreResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable("simulated outage".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ApplicationStore for MemoryStore {
    async fn insert(&self, application: &NewApplication) -> StoreResult<u64> {
        self.insert_attempts.fetch_add(1, Ordering::SeqCst);
        self.check()?;

        let start_date = match application.start_date.as_deref() {
            None => None,
            Some(text) => Some(parse_date_column(text).ok_or_else(|| {
                StoreError::Unavailable(format!("Incorrect date value: '{}'", text))
            })?),
        };

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        // Strictly increasing timestamps keep newest-first ordering observable.
        let base = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let created_at: DateTime<Utc> = base + Duration::seconds(id as i64);

        let application = application.clone();
        self.rows.lock().unwrap().push(DriverApplication {
            id,
            full_name: application.full_name,
            email: application.email,
            phone: application.phone,
            city: application.city,
            state: application.state,
            vehicle_type: application.vehicle_type,
            experience_years: application.experience_years,
            has_commercial_insurance: application.has_commercial_insurance,
            start_date,
            notes: application.notes,
            created_at,
        });
        Ok(id)
    }

    async fn list_newest_first(&self) -> StoreResult<Vec<DriverApplication>> {
        self.check()?;
        let mut rows = self.rows();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }
}

/// The literal forms a MySQL `DATE` column accepts in practice.
fn parse_date_column(text: &str) -> Option<NaiveDate> {
    ["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d"]
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}

/// A running server bound to an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the API over `store` with default configuration.
pub async fn spawn_server(store: Arc<dyn ApplicationStore>) -> TestServer {
    spawn_server_with(AppConfig::default(), store).await
}

/// Start the API over `store` with a caller-tuned configuration.
pub async fn spawn_server_with(config: AppConfig, store: Arc<dyn ApplicationStore>) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, store);
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestServer { addr, shutdown }
}

/// Client that ignores system proxies and keeps no idle connections.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
