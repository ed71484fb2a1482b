use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::Registry;
use std::{
    fs,
    sync::Arc,
    time::{Duration, SystemTime, UNIX_EPOCH},
};
use sysinfo::System;
use tracing::debug;

const COLLECT_INTERVAL: Duration = Duration::from_secs(15);

fn get_thread_count(pid: usize) -> Option<i64> {
    let contents = fs::read_to_string(format!("/proc/{pid}/status")).ok()?;

    contents
        .lines()
        .find(|line| line.starts_with("Threads:"))
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|count| count.parse::<i64>().ok())
}

/// Process-level gauges refreshed by [`run_metrics_collector`].
#[derive(Debug, Clone, Default)]
pub struct SystemMetrics {
    pub memory_alloc_bytes: Gauge,
    pub memory_sys_bytes: Gauge,
    pub available_memory_kib: Gauge,
    pub thread_usage: Gauge,
    pub cpu_usage_percent: Gauge,
    pub process_start_time: Gauge,
}

impl SystemMetrics {
    pub fn new() -> Self {
        let metrics = Self::default();

        let start_time = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or_default();
        metrics.process_start_time.set(start_time);

        metrics
    }

    pub fn register(&self, registry: &mut Registry) {
        registry.register(
            "process_memory_alloc_bytes",
            "Resident memory of the process in bytes",
            self.memory_alloc_bytes.clone(),
        );
        registry.register(
            "process_memory_sys_bytes",
            "Virtual memory of the process in bytes",
            self.memory_sys_bytes.clone(),
        );
        registry.register(
            "system_available_memory_kib",
            "Available system memory in KiB",
            self.available_memory_kib.clone(),
        );
        registry.register(
            "process_thread_total",
            "Threads owned by the process",
            self.thread_usage.clone(),
        );
        registry.register(
            "system_cpu_usage_percent",
            "Global cpu usage",
            self.cpu_usage_percent.clone(),
        );
        registry.register(
            "process_start_time_seconds",
            "Start time of the process since unix epoch in seconds",
            self.process_start_time.clone(),
        );
    }

    pub fn update_metrics(&self) {
        let mut sys = System::new_all();
        sys.refresh_all();

        let pid = std::process::id() as usize;

        if let Some(process) = sys.process(sysinfo::Pid::from(pid)) {
            self.memory_alloc_bytes.set(process.memory() as i64);
            self.memory_sys_bytes.set(process.virtual_memory() as i64);
        }

        self.available_memory_kib
            .set((sys.available_memory() / 1_024) as i64);
        self.cpu_usage_percent.set(sys.global_cpu_usage() as i64);

        if let Some(thread_count) = get_thread_count(pid) {
            self.thread_usage.set(thread_count);
        }

        debug!("📈 Process metrics refreshed");
    }
}

pub async fn run_metrics_collector(system_metrics: Arc<SystemMetrics>) {
    let mut interval = tokio::time::interval(COLLECT_INTERVAL);
    loop {
        interval.tick().await;
        system_metrics.update_metrics();
    }
}
