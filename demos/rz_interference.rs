//! Demo: chained Z rotations between two Hadamards.
//! RZ(pi/2) followed by RZ(pi/3) behaves exactly like the single rotation
//! RZ(pi/2 + pi/3); the interference pattern after the closing Hadamard
//! makes the accumulated angle visible as a |1> probability of
//! sin^2((theta1 + theta2) / 2).

use qsearch::{CircuitBuilder, Simulator};
use std::f64::consts::PI;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("--- Demo: RZ interference ---");

    let theta1 = PI / 2.0;
    let theta2 = PI / 3.0;

    let chained = CircuitBuilder::new(1, 1)
        .h(0)
        .rz(theta1, 0)
        .rz(theta2, 0)
        .h(0)
        .measure(0, 0)
        .build();
    let combined = CircuitBuilder::new(1, 1)
        .h(0)
        .rz(theta1 + theta2, 0)
        .h(0)
        .measure(0, 0)
        .build();

    println!("{}", chained);

    let simulator = Simulator::new();

    // The two circuits produce the same state, not merely the same stats.
    let state_chained = simulator.statevector(&chained)?;
    let state_combined = simulator.statevector(&combined)?;
    for (a, b) in state_chained
        .amplitudes()
        .iter()
        .zip(state_combined.amplitudes())
    {
        assert!((a - b).norm_sqr() < 1e-18, "rotation angles failed to compose");
    }

    let result = simulator.run(&chained, 1024)?;
    println!("{}", result);

    let expected_p1 = ((theta1 + theta2) / 2.0).sin().powi(2);
    let observed_p1 = result.frequency("1");
    println!(
        "P(1): observed {:.3}, analytic sin^2((theta1+theta2)/2) = {:.3}",
        observed_p1, expected_p1
    );
    assert!(
        (observed_p1 - expected_p1).abs() < 0.05,
        "observed {:.3} deviates from analytic {:.3}",
        observed_p1, expected_p1
    );

    println!("\nChained RZ gates accumulated their angles as one rotation.");
    Ok(())
}
