//! # Film Query Routes
//!
//! `GET /content/:container` runs a film query over one container. A
//! trailing `.json` extension on the container segment is accepted, so
//! `/content/oscars.json` and `/content/oscars` are the same request.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tracing::{info_span, warn};
use uuid::Uuid;

use crate::executor::{ExecutorError, LimitMode, QueryExecutor};
use crate::planner::PredicateBuilder;
use crate::store::RecordSource;

use super::errors::{RestError, RestResult};
use super::response::FilmListResponse;

/// Response content type
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Film query API state
pub struct FilmApi {
    source: Arc<dyn RecordSource>,
    limit_mode: LimitMode,
}

impl FilmApi {
    pub fn new(source: Arc<dyn RecordSource>, limit_mode: LimitMode) -> Self {
        Self { source, limit_mode }
    }

    /// Runs one query: build, execute, project.
    ///
    /// Parameters are validated before any candidate is fetched.
    pub fn query<K, V>(&self, container: &str, params: &[(K, V)]) -> RestResult<FilmListResponse>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let query = PredicateBuilder::build(
            params
                .iter()
                .map(|(k, v)| -> (&str, &str) { (k.as_ref(), v.as_ref()) }),
        )?;
        let result = QueryExecutor::with_limit_mode(self.source.as_ref(), self.limit_mode)
            .execute(container, &query)?;
        Ok(FilmListResponse::new(result.into_records()))
    }

    /// Build the Axum router
    pub fn router(self) -> Router {
        Router::new()
            .route("/content/:container", get(list_handler))
            .with_state(Arc::new(self))
    }
}

/// Shared state type
type ApiState = Arc<FilmApi>;

/// Container name from the path segment, without a `.json` extension
fn container_name(segment: &str) -> &str {
    segment.strip_suffix(".json").unwrap_or(segment)
}

/// Film list handler
async fn list_handler(
    State(api): State<ApiState>,
    Path(container): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> RestResult<impl IntoResponse> {
    let container = container_name(&container).to_string();
    let request_id = Uuid::new_v4();
    let span = info_span!("film_query", %request_id, container = %container);

    // The store may read from disk on every call.
    let response = tokio::task::spawn_blocking(move || {
        span.in_scope(|| {
            api.query(&container, &params).map_err(|err| {
                warn!(code = err.code(), error = %err, "film query failed");
                err
            })
        })
    })
    .await
    .map_err(|e| {
        RestError::from(ExecutorError::adapter_unavailable(format!(
            "query task failed: {}",
            e
        )))
    })??;

    Ok(([(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], Json(response)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FilmEntry;
    use crate::rest_api::RestError;
    use crate::store::ContentStore;

    fn create_test_api(limit_mode: LimitMode) -> FilmApi {
        let store = ContentStore::from_containers([(
            "oscars",
            vec![
                FilmEntry::new("Parasite").with_year(2019).with_awards(4),
                FilmEntry::new("Green Book").with_year(2018).with_awards(3),
            ],
        )]);
        FilmApi::new(Arc::new(store), limit_mode)
    }

    #[test]
    fn test_query_default_order() {
        let api = create_test_api(LimitMode::NaturalOrder);
        let response = api.query::<&str, &str>("oscars", &[]).unwrap();
        let titles: Vec<&str> = response.result.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, vec!["Green Book", "Parasite"]);
    }

    #[test]
    fn test_query_rejects_bad_parameter() {
        let api = create_test_api(LimitMode::SortedOrder);
        let err = api.query("oscars", &[("year", "2019x")]).unwrap_err();
        assert!(matches!(err, RestError::Query(_)));
    }

    #[test]
    fn test_bad_parameter_fails_before_container_lookup() {
        let api = create_test_api(LimitMode::NaturalOrder);
        let err = api.query("emmys", &[("sortBy", "rating")]).unwrap_err();
        assert!(matches!(err, RestError::Query(_)));
    }

    #[test]
    fn test_container_name_strips_json_extension() {
        assert_eq!(container_name("oscars.json"), "oscars");
        assert_eq!(container_name("oscars"), "oscars");
        assert_eq!(container_name("archive.json.json"), "archive.json");
    }

    #[test]
    fn test_router_builds() {
        let _router = create_test_api(LimitMode::NaturalOrder).router();
    }
}
