// demos/less_than_oracle.rs

//! Builds the comparison oracles on six qubits and prints what they mark.
//!
//! Run with `RUST_LOG=debug cargo run --example less_than_oracle` to see the
//! builder logs.

use qoracle::{OracleError, Simulator, diagonal_less_than, oracle_greater_than, oracle_interval, oracle_less_than};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), OracleError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let nqubits = 6;
    let simulator = Simulator::new();

    let less = oracle_less_than(42u64, nqubits, None)?;
    let greater = oracle_greater_than(23u64, nqubits, None)?;
    let interval = oracle_interval(25u64, 42u64, nqubits, None)?;
    let diagonal = diagonal_less_than(42u64, nqubits, Some("Diagonal Oracle"))?;

    for oracle in [&less, &greater, &interval, &diagonal] {
        let marked = simulator.marked_states(oracle)?;
        println!("--- '{}' ---", oracle.name());
        println!("cost: {}", oracle.metrics());
        println!("marks {} states: {:?}", marked.len(), marked);
    }

    let deviation = simulator
        .phase_signature(&less)?
        .max_deviation(&simulator.phase_signature(&diagonal)?);
    println!("synthesized vs diagonal max phase deviation: {:?}", deviation);

    println!("\n{}", oracle_less_than(5u64, 3, None)?);
    Ok(())
}
