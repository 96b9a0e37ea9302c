use anyhow::Result;
use clap::Parser;
use roomswarm::config::{RunConfig, RunMode, MULTI_ROOM_DEFAULT_CLIENTS, SINGLE_ROOM_DEFAULT_CLIENTS};
use roomswarm::driver::{SimulatedDriver, SimulatedDriverConfig};
use roomswarm::orchestrator::{RunResult, SessionOrchestrator};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Simulate many concurrent clients joining conferencing rooms.
#[derive(Parser, Debug)]
#[command(name = "roomswarm", version, about)]
struct Args {
    /// Run mode: single-room or multi-room
    #[arg(long, default_value = "single-room")]
    mode: RunMode,

    /// Clients per room (defaults to 2 single-room, 5 multi-room)
    #[arg(long, short = 'c')]
    clients: Option<u32>,

    /// Number of rooms for multi-room runs
    #[arg(long, default_value_t = 1)]
    rooms: u32,

    /// Base room address; multi-room appends the room index to it
    #[arg(long = "room", default_value = roomswarm::config::PLACEHOLDER_ROOM_ADDRESS)]
    room_address: String,

    /// Display-name prefix for the simulated participants
    #[arg(long, default_value = roomswarm::config::DEFAULT_IDENTITY_PREFIX)]
    identity_prefix: String,

    /// Seconds between launching successive clients
    #[arg(long, default_value_t = 1)]
    stagger_secs: u64,

    /// Seconds each client stays connected after joining
    #[arg(long, default_value_t = 90)]
    duration_secs: u64,

    /// Simulated driver: join latency in milliseconds
    #[arg(long, default_value_t = 150)]
    join_latency_ms: u64,

    /// Simulated driver: leave latency in milliseconds
    #[arg(long, default_value_t = 50)]
    leave_latency_ms: u64,

    /// Simulated driver: probability a join times out
    #[arg(long, default_value_t = 0.0)]
    join_failure_rate: f64,

    /// Simulated driver: probability a leave times out
    #[arg(long, default_value_t = 0.0)]
    leave_failure_rate: f64,

    /// Write the run report as JSON to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Exit non-zero when any join failed
    #[arg(long)]
    strict: bool,
}

#[derive(Serialize)]
struct RunReport<'a> {
    started_at: i64,
    config: &'a RunConfig,
    result: &'a RunResult,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let clients = args.clients.unwrap_or(match args.mode {
        RunMode::SingleRoom => SINGLE_ROOM_DEFAULT_CLIENTS,
        RunMode::MultiRoom => MULTI_ROOM_DEFAULT_CLIENTS,
    });

    let config = match args.mode {
        RunMode::SingleRoom => RunConfig::single_room(&args.room_address),
        RunMode::MultiRoom => RunConfig::multi_room(&args.room_address, args.rooms),
    }
    .with_clients_per_room(clients)
    .with_identity_prefix(&args.identity_prefix)
    .with_inter_arrival_delay(Duration::from_secs(args.stagger_secs))
    .with_session_duration(Duration::from_secs(args.duration_secs));

    let driver = Arc::new(SimulatedDriver::new(SimulatedDriverConfig {
        join_latency: Duration::from_millis(args.join_latency_ms),
        leave_latency: Duration::from_millis(args.leave_latency_ms),
        join_failure_rate: args.join_failure_rate,
        leave_failure_rate: args.leave_failure_rate,
    }));

    let started_at = chrono::Utc::now().timestamp();
    let orchestrator = SessionOrchestrator::new(config, driver)?;

    println!("\n=== Starting Swarm ===");
    println!("Mode: {}", orchestrator.config().mode);
    println!("Rooms: {}", orchestrator.config().room_count);
    println!("Clients/room: {}", orchestrator.config().clients_per_room);
    println!("Sessions: {}", orchestrator.config().total_sessions());
    println!("Room address: {}", orchestrator.config().base_room_address);
    println!(
        "Stagger: {}s, hold: {}s",
        orchestrator.config().inter_arrival_delay.as_secs(),
        orchestrator.config().session_duration.as_secs()
    );
    println!("======================\n");

    let result = orchestrator.run().await;
    result.print_summary();

    if let Some(path) = &args.report {
        let report = RunReport {
            started_at,
            config: orchestrator.config(),
            result: &result,
        };
        std::fs::write(path, serde_json::to_string_pretty(&report)?)?;
        println!("Report written to {}", path.display());
    }

    if args.strict && !result.failures.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
