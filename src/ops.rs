use crate::ChargeApi;
use crate::core::{ApiResponse, ConnectorRequest, Endpoint, Result, StartRequest};
use tracing::info;

/// Responses collected by [`stop_charge`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopOutcome {
    pub stop: ApiResponse,
    /// only set when the stop call answered 404
    pub release: Option<ApiResponse>,
}

/// Sends a start request. `report` is called with the response.
pub async fn start_charge(
    api: &dyn ChargeApi,
    request: &StartRequest,
    mut report: impl FnMut(&ApiResponse),
) -> Result<ApiResponse> {
    info!(
        cpid = %request.cpid,
        connector_id = request.connector_id,
        id_tag = %request.id_tag,
        "starting charge"
    );

    let response = api
        .post_json(Endpoint::Start, serde_json::to_string(request)?)
        .await?;
    report(&response);

    Ok(response)
}

/// Sends a stop request and, if the server has no session for the connector (404),
/// releases the connector.
///
/// `report` is called for every completed call, so the stop response is seen even
/// when the release fails. A transport error on stop ends the operation without
/// a release attempt.
pub async fn stop_charge(
    api: &dyn ChargeApi,
    request: &ConnectorRequest,
    mut report: impl FnMut(&ApiResponse),
) -> Result<StopOutcome> {
    info!(cpid = %request.cpid, connector_id = request.connector_id, "stopping charge");

    let body = serde_json::to_string(request)?;
    let stop = api.post_json(Endpoint::Stop, body.clone()).await?;
    report(&stop);

    if !stop.is_not_found() {
        return Ok(StopOutcome {
            stop,
            release: None,
        });
    }

    // session is already gone on the server, connector still has to be freed
    info!(
        cpid = %request.cpid,
        connector_id = request.connector_id,
        "stop answered 404, releasing connector"
    );
    let release = api.post_json(Endpoint::Release, body).await?;
    report(&release);

    Ok(StopOutcome {
        stop,
        release: Some(release),
    })
}
