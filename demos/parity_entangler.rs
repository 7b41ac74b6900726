//! Demo: a three-qubit circuit whose third qubit records the parity (XOR)
//! of the first two, with an extra Z rotation that shifts phases without
//! touching the outcome statistics.

use qsearch::{CircuitBuilder, Simulator};
use std::f64::consts::PI;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("--- Demo: parity entangler ---");

    let circuit = CircuitBuilder::new(3, 3)
        .h(0)
        .h(1)
        .cx(0, 2)
        .cx(1, 2)
        .rz(PI / 4.0, 2)
        .measure_all()
        .build();

    println!("{}", circuit);

    let result = Simulator::new().run(&circuit, 1024)?;
    println!("{}", result);

    // Bitstrings read c2 c1 c0; qubit 2 must equal q0 XOR q1 everywhere.
    for (bitstring, count) in result.counts() {
        let bits: Vec<u8> = bitstring.bytes().map(|b| b - b'0').collect();
        let (c2, c1, c0) = (bits[0], bits[1], bits[2]);
        assert_eq!(
            c2,
            c0 ^ c1,
            "outcome {} ({} shots) violates the parity relation",
            bitstring, count
        );
    }

    // Four parity-consistent outcomes, each near a quarter of the shots.
    for key in ["000", "011", "101", "110"] {
        let freq = result.frequency(key);
        println!("  {} frequency: {:.3}", key, freq);
        assert!(
            (freq - 0.25).abs() < 0.08,
            "{} frequency {:.3} far from 0.25",
            key, freq
        );
    }

    println!("\nQubit 2 tracked the parity of qubits 0 and 1 in every shot.");
    Ok(())
}
