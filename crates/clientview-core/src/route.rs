//! Route parameters carrying the selection anchor.

use std::collections::BTreeMap;

use clientview_model::SnapshotId;

/// Name of the route parameter that anchors the selection.
pub const SOURCE_FLOW_ID_PARAM: &str = "sourceFlowId";

/// Parameters of the current route, as emitted by the router.
pub type RouteParams = BTreeMap<String, String>;

/// Extracts the anchor from `params[key]`.
///
/// Missing and blank values mean "no anchor".
pub fn anchor_from_params(params: &RouteParams, key: &str) -> Option<SnapshotId> {
    params
        .get(key)
        .and_then(|value| SnapshotId::new(value.as_str()).ok())
}

/// Builds route parameters from key/value pairs.
pub fn route_params<I, K, V>(pairs: I) -> RouteParams
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_is_read_from_source_flow_id() {
        let params = route_params([(SOURCE_FLOW_ID_PARAM, " 123 ")]);
        let anchor = anchor_from_params(&params, SOURCE_FLOW_ID_PARAM).unwrap();
        assert_eq!(anchor.as_str(), "123");
    }

    #[test]
    fn missing_or_blank_anchor_is_none() {
        assert_eq!(anchor_from_params(&RouteParams::new(), SOURCE_FLOW_ID_PARAM), None);
        let params = route_params([(SOURCE_FLOW_ID_PARAM, "  ")]);
        assert_eq!(anchor_from_params(&params, SOURCE_FLOW_ID_PARAM), None);
        let params = route_params([("clientId", "C.1234")]);
        assert_eq!(anchor_from_params(&params, SOURCE_FLOW_ID_PARAM), None);
    }
}
