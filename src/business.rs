use crate::cli::Commands;
use chargectl::config::load_config;
use chargectl::{ApiResponse, ConnectorRequest, StartRequest, drivers, ops};
use std::io::Write;

/// echo of one completed call: status line, then the body bytes unchanged
fn print_response(response: &ApiResponse) {
    let mut out = std::io::stdout().lock();
    let _ = writeln!(out, "{}", response.status_line());
    let _ = out.write_all(&response.body);
    let _ = out.write_all(b"\n");
    let _ = out.flush();
}

pub async fn handle_command(
    command: Commands,
    base_url: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    // built once, shared read-only by every call of this run
    let config = load_config(base_url)?;
    let driver = drivers::create_driver(config)?;

    match command {
        Commands::Start {
            cpid,
            connector_id,
            id_tag,
        } => {
            let request = StartRequest::new(cpid, connector_id, id_tag);
            ops::start_charge(driver.as_ref(), &request, print_response)
                .await
                .map_err(|e| format!("could not start charge: {}", e))?;
            Ok(())
        }

        // a 404 on stop means the session is already cleared, the connector gets released
        Commands::Stop { cpid, connector_id } => {
            let request = ConnectorRequest::new(cpid, connector_id);
            ops::stop_charge(driver.as_ref(), &request, print_response)
                .await
                .map_err(|e| format!("could not stop charge: {}", e))?;
            Ok(())
        }
    }
}
