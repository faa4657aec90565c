//! Agent Console - Sends messages typed on stdin to the Foundry agent.
//!
//! Each non-empty line is submitted through the form controller and the
//! response is printed as indented JSON. Logs go to stderr.

use shared::{AgentClient, ClientConfig, FormController};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = ClientConfig::from_env()?;
    let mut form = FormController::new(config.endpoint.clone());
    let client = AgentClient::new(config);

    println!("Send Message to AI Agent");
    if let Some(warning) = form.endpoint_warning() {
        println!("WARNING: {}", warning);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        form.set_message(line);
        if !form.can_submit() {
            continue;
        }

        info!("Submitting message ({} bytes)", form.message().len());
        println!("{}", shared::controller::PENDING_LABEL);

        if form.submit(&client).await.is_some() {
            if let Some(rendered) = form.render() {
                println!("Response:\n{}", rendered);
            }
        }
    }

    Ok(())
}
