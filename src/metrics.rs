use metrics::{counter, describe_counter, describe_gauge, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::currency;
use crate::error::AppError;

/// Install the Prometheus recorder and describe the quote metrics
pub fn init_metrics() -> Result<PrometheusHandle, AppError> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| AppError::Internal(format!("Failed to install Prometheus recorder: {}", e)))?;

    init_metric_descriptions();

    Ok(handle)
}

/// Initialize metric descriptions (can be called multiple times safely)
fn init_metric_descriptions() {
    describe_counter!("quotes_computed_total", "Total number of quotes computed");
    describe_counter!("quote_exports_total", "Total number of quote exports served");
    describe_counter!("quote_errors_total", "Total number of rejected quote requests");
    describe_gauge!("print_quote_info", "Service version information");

    gauge!("print_quote_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
}

/// Label value for a currency code; malformed codes collapse to "other"
fn currency_label(code: &str) -> String {
    let code = code.trim().to_ascii_uppercase();
    if currency::is_well_formed(&code) {
        code
    } else {
        "other".to_string()
    }
}

/// Record a computed quote
pub fn record_quote(currency: &str, material: &str) {
    counter!(
        "quotes_computed_total",
        "currency" => currency_label(currency),
        "material" => material.to_string(),
    )
    .increment(1);
}

/// Record an exported quote
pub fn record_export(currency: &str) {
    counter!("quote_exports_total", "currency" => currency_label(currency)).increment(1);
}

/// Record a rejected request
pub fn record_error(error_type: &str) {
    counter!("quote_errors_total", "error_type" => error_type.to_string()).increment(1);
}
