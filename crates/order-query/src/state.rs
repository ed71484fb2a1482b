use crate::di::DependenciesInject;
use prometheus_client::registry::Registry;
use shared::{
    config::ConnectionPool,
    utils::{SystemMetrics, run_metrics_collector},
};
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("deps", &self.di_container)
            .finish()
    }
}

impl AppState {
    /// Builds the production state and starts the process metrics collector.
    pub fn new(pool: ConnectionPool) -> Self {
        let mut registry = Registry::default();
        let system_metrics = Arc::new(SystemMetrics::new());

        let di_container = DependenciesInject::new(pool, &mut registry);

        system_metrics.register(&mut registry);
        tokio::spawn(run_metrics_collector(system_metrics));

        Self::from_parts(di_container, registry)
    }

    pub fn from_parts(di_container: DependenciesInject, registry: Registry) -> Self {
        Self {
            di_container,
            registry: Arc::new(Mutex::new(registry)),
        }
    }
}
