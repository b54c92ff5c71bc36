#![warn(clippy::pedantic)]
#![allow(clippy::enum_glob_use)]

use crate::config::StreamerConfig;
use crate::logging::configure_logging;
use crate::streamer::{CommandStreamer, Notification};
use anyhow::Result;
use clap::Parser;
use log::{error, info};

mod config;
mod logging;
mod streamer;

/// Stream random movement commands to a drone controller app over TCP.
///
/// Approximates human joystick input: holds one command at ~5Hz for a short
/// while, goes still, then picks the next one. Runs until interrupted.
#[derive(Parser)]
struct Args {
    /// Target host running the controller app (e.g. the adb forwarded port)
    host: Option<String>,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Command streamer error: {e:#}");
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();
    configure_logging()?;
    let config = StreamerConfig::new(args.host);
    info!("Drone controller TCP test stream (~5Hz)");
    let mut streamer = CommandStreamer::new(config);
    let notify_tx = streamer.notify_tx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupt received, stopping stream");
            _ = notify_tx.send(Notification::Shutdown).await;
        }
    });
    streamer.run().await
}
