// demos/linear_mc_gate.rs

//! Synthesizes multi-controlled gates of growing size and reports their cost.

use qoracle::core::matrix::{pauli_x, random_unitary};
use qoracle::{Circuit, OracleError, Simulator, apply_linear_multi_control, linear_multi_control};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), OracleError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Toffoli on three wires
    let toffoli = linear_multi_control(&pauli_x(), &[0, 1], 2)?;
    println!("{}", toffoli);

    println!("{:>9} {:>6} {:>6} {:>10}", "controls", "ops", "depth", "2^controls");
    let mut rng = StdRng::seed_from_u64(42);
    let unitary = random_unitary(&mut rng);
    for controls in [1usize, 2, 4, 8, 16, 32] {
        let wires: Vec<usize> = (0..controls).collect();
        let block = linear_multi_control(&unitary, &wires, controls)?;
        let naive = 1u64.checked_shl(controls as u32).map_or_else(|| "-".to_string(), |n| n.to_string());
        println!("{:>9} {:>6} {:>6} {:>10}", controls, block.len(), block.depth(), naive);
    }

    // C³X spread over a wider register: |1011> + target on wire 2
    let mut circuit = Circuit::new(5, "scattered");
    apply_linear_multi_control(&mut circuit, &pauli_x(), &[0, 1, 3], 2)?;
    let state = Simulator::new().run(&circuit, 0b01011)?;
    println!("|01011> -> {}", state);
    Ok(())
}
