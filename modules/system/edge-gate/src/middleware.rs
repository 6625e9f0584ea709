use std::sync::Arc;

use axum::{
    Router,
    extract::{Request, State},
    middleware::{Next, from_fn_with_state},
    response::{IntoResponse, Redirect, Response},
};
use folio_auth::request_cookie_header;

use crate::gate::{EdgeGate, GateDecision};

/// Axum middleware running the gate in front of every request.
///
/// Rejected requests get `307 Temporary Redirect` to the login path; admitted
/// ones pass through untouched.
pub async fn edge_gate_middleware(
    State(gate): State<Arc<EdgeGate>>,
    req: Request,
    next: Next,
) -> Response {
    let cookies = request_cookie_header(req.headers());
    let decision = gate.decide(req.uri().path(), &cookies).await;
    match decision {
        GateDecision::Admit => next.run(req).await,
        GateDecision::Redirect => Redirect::temporary(gate.login_path()).into_response(),
    }
}

/// Wrap `router` with the gate.
pub fn install<S>(router: Router<S>, gate: Arc<EdgeGate>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(from_fn_with_state(gate, edge_gate_middleware))
}
