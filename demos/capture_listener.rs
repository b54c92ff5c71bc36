use clap::Parser;
use std::collections::HashMap;
use std::io;
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::TcpListener;
use tokio::time::{timeout, Duration};

/// Accept one streamer connection and record every received command line for a
/// fixed window, then report per-command counts and any malformed lines.
#[derive(Parser)]
struct Args {
    /// Seconds to keep recording before closing the connection
    #[arg(long, short, default_value = "10")]
    seconds: u64,
    /// Port to listen on
    #[arg(long, short, default_value = "8080")]
    port: u16,
}

const COMMANDS: [&str; 6] = ["UP", "DOWN", "LEFT", "RIGHT", "FORWARD", "BACKWARD"];

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    let listener = TcpListener::bind(("127.0.0.1", args.port)).await?;
    println!("Waiting for a streamer on 127.0.0.1:{}...", args.port);
    let (socket, peer) = listener.accept().await?;
    println!("Recording from {peer} for {}s", args.seconds);

    let mut lines = BufReader::new(socket).lines();
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut malformed = Vec::new();
    let mut last_arrival: Option<Instant> = None;
    let started = Instant::now();
    let window = Duration::from_secs(args.seconds);
    while let Some(remaining) = window.checked_sub(started.elapsed()) {
        match timeout(remaining, lines.next_line()).await {
            Ok(Ok(Some(line))) => {
                let now = Instant::now();
                let gap = last_arrival.map_or(0.0, |t| (now - t).as_secs_f64());
                last_arrival = Some(now);
                if COMMANDS.contains(&line.as_str()) {
                    println!("{line:>8}  (+{gap:.3}s)");
                    *counts.entry(line).or_default() += 1;
                } else {
                    malformed.push(line);
                }
            }
            Ok(Ok(None)) => break, // streamer closed the connection
            Ok(Err(e)) => return Err(e),
            Err(_) => break, // recording window elapsed
        }
    }

    println!("--- {:.1}s recorded ---", started.elapsed().as_secs_f64());
    for cmd in COMMANDS {
        println!("{cmd:>8}: {}", counts.get(cmd).copied().unwrap_or(0));
    }
    if malformed.is_empty() {
        println!("no malformed lines");
    } else {
        println!("malformed lines: {malformed:?}");
    }
    Ok(())
}
