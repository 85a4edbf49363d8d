use axum::{extract::Query, Json};
use serde::Deserialize;
use serde_json::Value;

use crate::demo::{demo_payload, DemoSection};

#[derive(Debug, Deserialize)]
pub struct DemoQuery {
    #[serde(rename = "type")]
    pub section: Option<String>,
}

/// GET /demo - static dataset backing the client portal demo
///
/// `?type=` narrows the response to one section (`clients`, `projects`,
/// `stats`, `time-entries` or `invoices`). A missing or unrecognized value
/// returns the full dataset. No session, no database; the data never
/// changes between requests.
pub async fn demo_get(Query(query): Query<DemoQuery>) -> Json<Value> {
    let section = query.section.as_deref().and_then(DemoSection::from_param);
    Json(demo_payload(section))
}
