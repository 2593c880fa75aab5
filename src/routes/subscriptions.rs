use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;

use crate::{domain::ResponseEnvelope, fishbowl_client::SubscriptionClient};

/// Forwards the submitted form to Fishbowl untouched.
/// Answers `200` with the decoded result, or `502` when the upstream call failed.
#[tracing::instrument(name = "Relaying a new subscription", skip(client, form_values))]
pub async fn subscribe(
    State(client): State<SubscriptionClient>,
    Json(form_values): Json<Value>,
) -> (StatusCode, Json<ResponseEnvelope>) {
    let envelope = client.subscribe(&form_values).await;
    match envelope.api_result() {
        Some(Ok(api_result)) => tracing::info!(
            subscription_uuid = ?api_result.data.and_then(|data| data.uuid),
            success = api_result.success,
            "Subscription relayed",
        ),
        Some(Err(e)) => tracing::warn!(
            error.message = %e,
            "Subscription relayed, response body has an unexpected shape",
        ),
        None => {}
    }

    let status = if envelope.is_subscribed() {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };
    (status, Json(envelope))
}
