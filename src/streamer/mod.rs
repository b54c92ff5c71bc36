mod command;

pub use command::Command;

use crate::config::StreamerConfig;
use anyhow::{Context, Result};
use log::{debug, error, info};
use std::io::ErrorKind;
use std::time::{Duration, Instant};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::select;
use tokio::sync::mpsc::{self, Receiver, Sender};
use tokio::time::{sleep, timeout};

/// Owns the single outbound connection and the send/pause loop. Simulates
/// joystick input by alternating an active phase (one command repeated at the
/// configured cadence) with a still phase (nothing on the wire).
pub struct CommandStreamer {
    pub notify_tx: Sender<Notification>,
    config: StreamerConfig,
    notify_rx: Receiver<Notification>,
}

#[derive(Debug)]
pub enum Notification {
    Shutdown,
}

/// Tagged result of the single connect attempt. Refused and timed-out are
/// expected outcomes to report, not errors to propagate.
pub enum ConnectOutcome {
    Connected(TcpStream),
    Refused,
    TimedOut,
}

impl CommandStreamer {
    pub fn new(config: StreamerConfig) -> Self {
        let (notify_tx, notify_rx) = mpsc::channel::<Notification>(1);
        Self {
            notify_tx,
            config,
            notify_rx,
        }
    }

    /// Connects and streams until shut down or the connection fails. A failed
    /// connect is reported and returns `Ok`; there is no retry. Any fault
    /// mid-stream ends the run with an error.
    pub async fn run(&mut self) -> Result<()> {
        let (host, port) = (self.config.host.clone(), self.config.port);
        info!("Connecting to {host}:{port}...");
        let mut stream = match connect(&self.config).await? {
            ConnectOutcome::Connected(stream) => stream,
            ConnectOutcome::Refused => {
                error!("Connection refused. Make sure the app is running on {host} and listening on port {port}");
                return Ok(());
            }
            ConnectOutcome::TimedOut => {
                error!("Connection timed out. Check the address and network connectivity");
                return Ok(());
            }
        };
        info!("Connected to {host}:{port}");
        loop {
            let cmd = Command::pick(&mut rand::rng());
            let hold = self.config.timing.hold();
            info!("Streaming: {cmd} for {:.2}s", hold.as_secs_f64());
            let start = Instant::now();
            while start.elapsed() < hold {
                stream
                    .write_all(cmd.line().as_bytes())
                    .await
                    .context("sending command")?;
                if self.pause(self.config.timing.cadence).await {
                    info!("Stopping stream");
                    return Ok(());
                }
            }
            let still = self.config.timing.pause();
            info!("Still state for {:.2}s", still.as_secs_f64());
            if self.pause(still).await {
                info!("Stopping stream");
                return Ok(());
            }
        }
    }

    /// Sleeps for `period` unless a shutdown notification arrives first.
    /// Returns true when the streamer should stop. A closed channel also
    /// stops the stream.
    async fn pause(&mut self, period: Duration) -> bool {
        select! {
            biased;
            notification = self.notify_rx.recv() => {
                debug!("streamer received notification: {notification:?}");
                matches!(notification, Some(Notification::Shutdown) | None)
            }
            () = sleep(period) => false,
        }
    }
}

async fn connect(config: &StreamerConfig) -> Result<ConnectOutcome> {
    let addr = (config.host.as_str(), config.port);
    match timeout(config.connect_timeout, TcpStream::connect(addr)).await {
        Ok(Ok(stream)) => Ok(ConnectOutcome::Connected(stream)),
        Ok(Err(e)) if e.kind() == ErrorKind::ConnectionRefused => Ok(ConnectOutcome::Refused),
        Ok(Err(e)) if e.kind() == ErrorKind::TimedOut => Ok(ConnectOutcome::TimedOut),
        Ok(Err(e)) => Err(e).context("opening connection"),
        Err(_) => Ok(ConnectOutcome::TimedOut),
    }
}
