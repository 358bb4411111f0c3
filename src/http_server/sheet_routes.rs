//! Sheet HTTP Routes
//!
//! `GET /` serves the table snapshot, `POST /` applies one write action.
//! Both always answer 200 OK; success or failure is in the body's `status`.

use std::sync::Arc;

use axum::{
    extract::{Form, Query, State},
    routing::get,
    Json, Router,
};

use crate::sheet::{Params, SheetResponse, SheetService};

/// Create the sheet routes
pub fn sheet_routes(service: Arc<SheetService>) -> Router {
    Router::new()
        .route("/", get(read_handler).post(write_handler))
        .with_state(service)
}

async fn read_handler(State(service): State<Arc<SheetService>>) -> Json<SheetResponse> {
    Json(service.read())
}

/// Parameters come from the query string and a urlencoded body; body values
/// win on duplicate keys.
async fn write_handler(
    State(service): State<Arc<SheetService>>,
    query: Option<Query<Params>>,
    form: Option<Form<Params>>,
) -> Json<SheetResponse> {
    let mut params = query.map(|Query(q)| q).unwrap_or_default();
    if let Some(Form(body)) = form {
        params.extend(body);
    }

    Json(service.write(&params).await)
}
