//! Demo: BB84 quantum key distribution over six qubits.
//! Alice encodes three bits in the Z basis and three in the X basis; Bob
//! measures in his own basis choices. Positions where the bases match form
//! the sifted key. An intercepting Eve (modelled as basis rotation and
//! resend) randomizes the qubits she reads in the wrong basis, which shows
//! up as errors in the sifted key — the disturbance BB84 is built to detect.

use qsearch::{Circuit, CircuitBuilder, MeasurementResult, Simulator};

/// Alice's raw bits, qubit by qubit.
const ALICE_BITS: [u8; 6] = [0, 1, 0, 0, 1, 1];
/// Basis per qubit: false = Z, true = X. Alice uses Z for 0..3, X for 3..6.
const ALICE_BASES: [bool; 6] = [false, false, false, true, true, true];
/// Bob measures qubits 2..6 in the X basis, the first two in Z.
const BOB_BASES: [bool; 6] = [false, false, true, true, true, true];

/// Alice's preparation layer: X encodes a 1, H moves into the X basis,
/// H then Z prepares |-> for an X-basis 1.
fn alice_prepares(mut builder: CircuitBuilder) -> CircuitBuilder {
    for qubit in 0..6 {
        if ALICE_BASES[qubit] {
            builder = builder.h(qubit);
            if ALICE_BITS[qubit] == 1 {
                builder = builder.z(qubit);
            }
        } else if ALICE_BITS[qubit] == 1 {
            builder = builder.x(qubit);
        }
    }
    builder
}

/// Bob's measurement layer: H in front of every X-basis readout.
fn bob_measures(mut builder: CircuitBuilder) -> CircuitBuilder {
    for qubit in 0..6 {
        if BOB_BASES[qubit] {
            builder = builder.h(qubit);
        }
    }
    builder.measure_all()
}

fn protocol_without_eve() -> Circuit {
    let builder = alice_prepares(CircuitBuilder::new(6, 6)).barrier();
    bob_measures(builder).build()
}

fn protocol_with_eve() -> Circuit {
    let builder = alice_prepares(CircuitBuilder::new(6, 6)).barrier();
    // Eve rotates into her own bases (X for qubits 0, 2, 3; she treats 4 and
    // 5 as Z after undoing what she assumes is Alice's encoding), then
    // resends towards the bases she believes Alice used.
    let builder = builder.h(0).h(2).h(3).h(4).h(5);
    let builder = builder.h(0).h(2).h(4).barrier();
    bob_measures(builder).build()
}

/// Fraction of shots in which Bob's bit for `qubit` differs from Alice's.
fn error_rate(result: &MeasurementResult, qubit: usize) -> f64 {
    let mut wrong = 0u64;
    for (bitstring, count) in result.counts() {
        // Bitstrings read c5..c0, so qubit i sits at character 5 - i.
        let bob_bit = bitstring.as_bytes()[5 - qubit] - b'0';
        if bob_bit != ALICE_BITS[qubit] {
            wrong += count;
        }
    }
    wrong as f64 / result.shots() as f64
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("--- Demo: BB84 key distribution ---");

    let simulator = Simulator::new();
    let shots = 1024;

    let matched: Vec<usize> = (0..6)
        .filter(|&q| ALICE_BASES[q] == BOB_BASES[q])
        .collect();
    println!("Basis-matched qubits (sifted key positions): {:?}", matched);

    // --- Round 1: no eavesdropper ---
    let clean = protocol_without_eve();
    println!("\nProtocol without Eve:\n{}", clean);
    let clean_result = simulator.run(&clean, shots)?;

    for &qubit in &matched {
        let rate = error_rate(&clean_result, qubit);
        println!("  qubit {}: sifted-key error rate {:.3}", qubit, rate);
        assert_eq!(
            rate, 0.0,
            "matched-basis qubit {} disagreed without an eavesdropper",
            qubit
        );
    }
    let sifted: Vec<u8> = matched.iter().map(|&q| ALICE_BITS[q]).collect();
    println!("  shared sifted key: {:?}", sifted);

    // --- Round 2: Eve intercepts ---
    let tapped = protocol_with_eve();
    println!("\nProtocol with Eve:\n{}", tapped);
    let tapped_result = simulator.run(&tapped, shots)?;

    let mut total_error = 0.0;
    for &qubit in &matched {
        let rate = error_rate(&tapped_result, qubit);
        println!("  qubit {}: sifted-key error rate {:.3}", qubit, rate);
        total_error += rate;
    }
    let mean_error = total_error / matched.len() as f64;
    println!("  mean sifted-key error rate: {:.3}", mean_error);
    assert!(
        mean_error > 0.15,
        "Eve's interception left no detectable disturbance ({:.3})",
        mean_error
    );

    println!("\nEve's wrong-basis readings disturbed the sifted key, as BB84 predicts.");
    Ok(())
}
