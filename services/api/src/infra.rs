use arrima_score::scoring::Factor;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// One `--set factor=option` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Selection {
    pub(crate) factor: Factor,
    pub(crate) option_key: String,
}

pub(crate) fn parse_selection(raw: &str) -> Result<Selection, String> {
    let (factor, option_key) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FACTOR=OPTION, got '{raw}'"))?;

    let factor = factor
        .parse::<Factor>()
        .map_err(|err| err.to_string())?;
    let option_key = option_key.trim();
    if option_key.is_empty() {
        return Err(format!("missing option for '{factor}'"));
    }

    Ok(Selection {
        factor,
        option_key: option_key.to_string(),
    })
}
