use disc_assessment::assessment::{ExportFormat, RankValue};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Parses a `D,I,S,C` rank pattern such as `3,4,1,2`.
pub(crate) fn parse_ranks(raw: &str) -> Result<[RankValue; 4], String> {
    let values = raw
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<u8>()
                .ok()
                .and_then(|value| RankValue::new(value).ok())
                .ok_or_else(|| format!("rank '{part}' must be a number from 1 to 4"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let ranks: [RankValue; 4] = values
        .try_into()
        .map_err(|values: Vec<RankValue>| {
            format!("expected 4 ranks for D,I,S,C, got {}", values.len())
        })?;

    let mut sorted = ranks;
    sorted.sort_unstable_by(|left, right| right.cmp(left));
    if sorted != RankValue::all() {
        return Err(format!(
            "ranks must use each of 1, 2, 3 and 4 exactly once, got '{raw}'"
        ));
    }

    Ok(ranks)
}

pub(crate) fn parse_format(raw: &str) -> Result<ExportFormat, String> {
    raw.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_rank_permutation() {
        let ranks = parse_ranks("3, 4, 1, 2").expect("valid pattern");
        assert_eq!(ranks.map(RankValue::get), [3, 4, 1, 2]);
    }

    #[test]
    fn rejects_repeated_or_missing_ranks() {
        assert!(parse_ranks("4,4,2,1").is_err());
        assert!(parse_ranks("1,2,3").is_err());
        assert!(parse_ranks("1,2,3,x").is_err());
        assert!(parse_ranks("0,1,2,3").is_err());
    }

    #[test]
    fn parses_export_formats() {
        assert_eq!(parse_format("json"), Ok(ExportFormat::Json));
        assert!(parse_format("pdf").is_err());
    }
}
