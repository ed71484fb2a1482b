use anyhow::{Context as _, Result};
use opentelemetry::{Context, global};
use opentelemetry_otlp::{LogExporter, MetricExporter, SpanExporter, WithExportConfig};
use opentelemetry_sdk::{
    Resource, logs::SdkLoggerProvider, metrics::SdkMeterProvider, trace::SdkTracerProvider,
};
use tokio::time::Instant;

/// Owns the OTLP providers of one service and tears them down together.
pub struct Telemetry {
    tracer_provider: SdkTracerProvider,
    meter_provider: SdkMeterProvider,
    logger_provider: SdkLoggerProvider,
}

pub struct TracingContext {
    pub cx: Context,
    pub start_time: Instant,
}

impl Telemetry {
    /// Builds gRPC exporters against `otel_endpoint` and installs the global
    /// tracer and meter providers. Exporters connect lazily.
    pub fn init(service_name: &str, otel_endpoint: &str) -> Result<Self> {
        let resource = Resource::builder()
            .with_service_name(service_name.to_string())
            .build();

        let span_exporter = SpanExporter::builder()
            .with_tonic()
            .with_endpoint(otel_endpoint)
            .build()
            .context("Failed to create span exporter")?;

        let tracer_provider = SdkTracerProvider::builder()
            .with_resource(resource.clone())
            .with_batch_exporter(span_exporter)
            .build();

        let metric_exporter = MetricExporter::builder()
            .with_tonic()
            .with_endpoint(otel_endpoint)
            .build()
            .context("Failed to create metric exporter")?;

        let meter_provider = SdkMeterProvider::builder()
            .with_resource(resource.clone())
            .with_periodic_exporter(metric_exporter)
            .build();

        let log_exporter = LogExporter::builder()
            .with_tonic()
            .with_endpoint(otel_endpoint)
            .build()
            .context("Failed to create log exporter")?;

        let logger_provider = SdkLoggerProvider::builder()
            .with_resource(resource)
            .with_batch_exporter(log_exporter)
            .build();

        global::set_tracer_provider(tracer_provider.clone());
        global::set_meter_provider(meter_provider.clone());

        Ok(Self {
            tracer_provider,
            meter_provider,
            logger_provider,
        })
    }

    pub fn logger_provider(&self) -> &SdkLoggerProvider {
        &self.logger_provider
    }

    pub fn shutdown(self) -> Result<()> {
        let mut errors = Vec::new();

        if let Err(e) = self.tracer_provider.shutdown() {
            errors.push(format!("tracer provider: {e}"));
        }
        if let Err(e) = self.meter_provider.shutdown() {
            errors.push(format!("meter provider: {e}"));
        }
        if let Err(e) = self.logger_provider.shutdown() {
            errors.push(format!("logger provider: {e}"));
        }

        if !errors.is_empty() {
            anyhow::bail!("Failed to shutdown providers:\n{}", errors.join("\n"));
        }

        Ok(())
    }
}
