use roomswarm::config::RunConfig;
use roomswarm::driver::{SimulatedDriver, SimulatedDriverConfig};
use roomswarm::orchestrator::SessionOrchestrator;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() {
    println!("\nRoomSwarm - Orchestrator Demo");
    println!("==============================\n");

    // Demo 1: clean single-room run
    println!("Demo 1: Single room, 3 clients");
    println!("------------------------------");

    let config = RunConfig::single_room("https://conference.example.com/?room=Demo")
        .with_clients_per_room(3)
        .with_inter_arrival_delay(Duration::from_millis(200))
        .with_session_duration(Duration::from_secs(2));

    let driver = Arc::new(SimulatedDriver::default());
    let orchestrator = SessionOrchestrator::new(config, driver.clone()).unwrap();

    let result = orchestrator.run().await;
    println!("Joined: {}/{}", result.successful_joins, result.total_sessions());
    println!("Driver saw {} joins, {} leaves", driver.join_count(), driver.leave_count());

    // Demo 2: multi-room spread with injected join failures
    println!("\nDemo 2: 2 rooms x 2 clients, 50% join failures");
    println!("----------------------------------------------");

    let config = RunConfig::multi_room("https://conference.example.com/?room=Demo", 2)
        .with_clients_per_room(2)
        .with_inter_arrival_delay(Duration::from_millis(100))
        .with_session_duration(Duration::from_secs(1));

    let flaky = Arc::new(SimulatedDriver::new(SimulatedDriverConfig {
        join_failure_rate: 0.5,
        ..Default::default()
    }));
    let orchestrator = SessionOrchestrator::new(config, flaky).unwrap();

    let result = orchestrator.run().await;
    result.print_summary();

    println!("\nAll demos completed.");
}
