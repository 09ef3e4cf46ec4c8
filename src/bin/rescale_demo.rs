use anyhow::{Context, Result};
use tracing::info;

use invariant_rescaler::amm::report::render_simulation;
use invariant_rescaler::config::DemoConfig;
use invariant_rescaler::telemetry;

fn main() -> Result<()> {
    let cfg = DemoConfig::from_env()?;

    let tel = match cfg.otlp_endpoint.as_deref() {
        Some(endpoint) => Some(telemetry::init(telemetry::SERVICE_NAME, endpoint)?),
        None => {
            telemetry::init_logging();
            None
        }
    };

    let reports = {
        let span = telemetry::make_info_span("simulate", 0, "rescale_demo");
        let _guard = span.enter();
        info!(x = cfg.x, y = cfg.y, trades = cfg.trades.len(), multiplier = cfg.multiplier, "iniciando simulação");
        cfg.simulation()
            .run()
            .map_err(|e| {
                tracing::error!(error = %e.to_log_json(), "simulação falhou");
                e
            })
            .context("simulação")?
    };

    println!("{}", render_simulation(&reports));

    if let Some(tel) = tel {
        tel.shutdown();
    }
    Ok(())
}
