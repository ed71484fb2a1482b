mod gracefullshutdown;
mod logs;
mod metrics;
mod otel;

pub use self::gracefullshutdown::shutdown_signal;
pub use self::logs::init_logger;
pub use self::metrics::{SystemMetrics, run_metrics_collector};
pub use self::otel::{Telemetry, TracingContext};
