use anyhow::Result;
use once_cell::sync::OnceCell;
use std::time::Duration;

use opentelemetry::{
    global,
    metrics::Histogram,
    trace::TracerProvider as _,
    KeyValue,
};
use opentelemetry_otlp::{MetricExporter, Protocol, SpanExporter, WithExportConfig};
use opentelemetry_sdk::{
    metrics::{PeriodicReader, SdkMeterProvider},
    resource::Resource,
    trace::SdkTracerProvider,
};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

pub const SERVICE_NAME: &str = "invariant-rescaler";
const METER_NAME: &str = "invariant_rescaler";

pub struct Telemetry {
    pub tracer_provider: SdkTracerProvider,
    pub meter_provider: SdkMeterProvider,
}

impl Telemetry {
    pub fn shutdown(&self) {
        let _ = self.meter_provider.force_flush();
        let _ = self.meter_provider.shutdown();
        let _ = self.tracer_provider.shutdown();
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn commit_sha() -> String {
    std::env::var("RESCALER_COMMIT_SHA").unwrap_or_else(|_| "unknown".into())
}

/// Só logs locais (fmt + `RUST_LOG`). Chamadas repetidas são ignoradas.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .try_init();
}

/// Logs + exportação OTLP/HTTP de traces e métricas para `endpoint`.
/// Deve rodar antes da primeira reescala para que os histogramas usem o provider real.
pub fn init(service_name: &str, endpoint: &str) -> Result<Telemetry> {
    let resource = Resource::builder()
        .with_attributes([
            KeyValue::new("service.name", service_name.to_string()),
            KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
            KeyValue::new("git.commit.sha", commit_sha()),
        ])
        .build();

    let base = endpoint.trim_end_matches('/');

    // ---- Traces (OTLP/HTTP) ----
    let span_exporter = SpanExporter::builder()
        .with_http()
        .with_protocol(Protocol::HttpBinary)
        .with_endpoint(format!("{}/v1/traces", base))
        .build()?;

    let tracer_provider = SdkTracerProvider::builder()
        .with_resource(resource.clone())
        .with_batch_exporter(span_exporter)
        .build();

    let tracer = tracer_provider.tracer(service_name.to_string());

    // ---- Métricas (OTLP/HTTP) ----
    let metric_exporter = MetricExporter::builder()
        .with_http()
        .with_protocol(Protocol::HttpBinary)
        .with_endpoint(format!("{}/v1/metrics", base))
        .build()?;

    let reader = PeriodicReader::builder(metric_exporter)
        .with_interval(Duration::from_secs(10))
        .build();

    let meter_provider = SdkMeterProvider::builder()
        .with_resource(resource)
        .with_reader(reader)
        .build();

    // Globais
    global::set_tracer_provider(tracer_provider.clone());
    global::set_meter_provider(meter_provider.clone());

    // tracing -> OTel
    let otel_layer = tracing_opentelemetry::layer().with_tracer(tracer);
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
    let subscriber = Registry::default()
        .with(env_filter())
        .with(fmt_layer)
        .with(otel_layer);
    let _ = tracing::subscriber::set_global_default(subscriber);

    Ok(Telemetry { tracer_provider, meter_provider })
}

struct Instruments {
    rescale_factor: Histogram<f64>,
    invariant_error_rel: Histogram<f64>,
}

static INSTRUMENTS: OnceCell<Instruments> = OnceCell::new();

fn instruments() -> &'static Instruments {
    INSTRUMENTS.get_or_init(|| {
        let meter = global::meter(METER_NAME);
        Instruments {
            rescale_factor: meter
                .f64_histogram("rescale_factor")
                .with_unit("1")
                .with_description("Scale factor sqrt(tk/k) applied to both reserves")
                .build(),
            invariant_error_rel: meter
                .f64_histogram("invariant_error_rel")
                .with_unit("1")
                .with_description("Relative invariant error |x'y' - tk| / tk per rescale")
                .build(),
        }
    })
}

/// Registra uma reescala. Sem meter provider global é no-op.
pub fn record_rescale(factor: f64, rel_err: f64) {
    let i = instruments();
    let attrs = [KeyValue::new("op", "rescale")];
    i.rescale_factor.record(factor, &attrs);
    i.invariant_error_rel.record(rel_err, &attrs);
}

/// Cria um `Span` INFO com nome **estático** (exigência do tracing) e
/// coloca o nome dinâmico em `span_name`. Inclui `git_commit_sha`.
pub fn make_info_span(name: &str, op_id: u32, component: &str) -> tracing::Span {
    let commit = commit_sha();
    tracing::span!(
        target: "invariant_rescaler",
        Level::INFO,
        "op",
        git_commit_sha = %commit,
        span_name = %name,
        op_id = op_id,
        component = component
    )
}
