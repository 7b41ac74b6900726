// tests/simulation_tests.rs

// Import necessary types from the qsearch crate
use qsearch::{Circuit, CircuitBuilder, QsearchError, Simulator, StateVector};

use std::f64::consts::PI;

const TEST_TOLERANCE: f64 = 1e-9;

/// Asserts that two state vectors are approximately equal component-wise.
fn assert_states_approx_equal(actual: &StateVector, expected: &StateVector, context: &str) {
    let a = actual.amplitudes();
    let b = expected.amplitudes();
    assert_eq!(a.len(), b.len(), "State dimension mismatch - {}", context);
    for i in 0..a.len() {
        let dist_sq = (a[i] - b[i]).norm_sqr();
        assert!(
            dist_sq < TEST_TOLERANCE * TEST_TOLERANCE,
            "State mismatch at index {} - Actual: {}, Expected: {}, DistSq: {:.3e}, Context: {}",
            i, a[i], b[i], dist_sq, context
        );
    }
}

#[test]
fn probabilities_sum_to_one_after_simulation() -> Result<(), QsearchError> {
    // A mix of every supported gate; the pipeline must preserve unitarity.
    let circuit = CircuitBuilder::new(3, 3)
        .h(0)
        .h(1)
        .cx(0, 2)
        .x(1)
        .z(2)
        .rz(PI / 5.0, 0)
        .mcx(vec![0, 1], 2)
        .barrier()
        .h(2)
        .measure_all()
        .build();

    let state = Simulator::new().statevector(&circuit)?;
    assert!(
        (state.norm_sqr() - 1.0).abs() < 1e-6,
        "probability sum {} drifted from 1",
        state.norm_sqr()
    );
    Ok(())
}

#[test]
fn hadamard_twice_is_identity() -> Result<(), QsearchError> {
    let simulator = Simulator::new();

    let prep = CircuitBuilder::new(2, 2).x(1).rz(0.3, 1).h(1).build();
    let with_pair = CircuitBuilder::new(2, 2)
        .x(1)
        .rz(0.3, 1)
        .h(1)
        .h(0)
        .h(0)
        .build();

    let expected = simulator.statevector(&prep)?;
    let actual = simulator.statevector(&with_pair)?;
    assert_states_approx_equal(&actual, &expected, "H(H(psi)) == psi");
    Ok(())
}

#[test]
fn bell_pair_yields_only_correlated_outcomes() -> Result<(), QsearchError> {
    let circuit = CircuitBuilder::new(2, 2)
        .h(0)
        .cx(0, 1)
        .measure_all()
        .build();

    let result = Simulator::with_seed(1234).run(&circuit, 1024)?;

    assert_eq!(result.count("01"), 0, "anti-correlated outcome observed");
    assert_eq!(result.count("10"), 0, "anti-correlated outcome observed");
    assert_eq!(result.count("00") + result.count("11"), 1024);
    assert!(
        (result.frequency("00") - 0.5).abs() < 0.05,
        "\"00\" frequency {} outside 0.5 +/- 0.05",
        result.frequency("00")
    );
    assert!(
        (result.frequency("11") - 0.5).abs() < 0.05,
        "\"11\" frequency {} outside 0.5 +/- 0.05",
        result.frequency("11")
    );
    Ok(())
}

#[test]
fn anti_correlated_bell_pair() -> Result<(), QsearchError> {
    // X on qubit 1 before the entangler turns |Phi+> into |Psi+>.
    let circuit = CircuitBuilder::new(2, 2)
        .x(1)
        .h(0)
        .cx(0, 1)
        .measure_all()
        .build();

    let result = Simulator::with_seed(4321).run(&circuit, 1024)?;

    assert_eq!(result.count("00"), 0, "correlated outcome observed");
    assert_eq!(result.count("11"), 0, "correlated outcome observed");
    assert!((result.frequency("01") - 0.5).abs() < 0.05);
    assert!((result.frequency("10") - 0.5).abs() < 0.05);
    Ok(())
}

#[test]
fn rotation_z_angles_compose() -> Result<(), QsearchError> {
    let simulator = Simulator::new();
    let theta1 = PI / 2.0;
    let theta2 = PI / 3.0;

    let sequential = CircuitBuilder::new(1, 1)
        .h(0)
        .rz(theta1, 0)
        .rz(theta2, 0)
        .h(0)
        .build();
    let combined = CircuitBuilder::new(1, 1)
        .h(0)
        .rz(theta1 + theta2, 0)
        .h(0)
        .build();

    let actual = simulator.statevector(&sequential)?;
    let expected = simulator.statevector(&combined)?;
    assert_states_approx_equal(&actual, &expected, "RZ(a);RZ(b) == RZ(a+b)");
    Ok(())
}

#[test]
fn barrier_does_not_affect_the_state() -> Result<(), QsearchError> {
    let simulator = Simulator::new();

    let with_barriers = CircuitBuilder::new(2, 2)
        .h(0)
        .barrier()
        .cx(0, 1)
        .barrier()
        .build();
    let without_barriers = CircuitBuilder::new(2, 2).h(0).cx(0, 1).build();

    let actual = simulator.statevector(&with_barriers)?;
    let expected = simulator.statevector(&without_barriers)?;
    assert_states_approx_equal(&actual, &expected, "barriers are no-ops");
    Ok(())
}

#[test]
fn partial_measurement_marginalizes_unmeasured_qubits() -> Result<(), QsearchError> {
    // Entangle two qubits but measure only qubit 0: the single classical
    // bit still splits 50/50 because the unmeasured partner is summed out.
    let circuit = CircuitBuilder::new(2, 1)
        .h(0)
        .cx(0, 1)
        .measure(0, 0)
        .build();

    let result = Simulator::with_seed(77).run(&circuit, 1024)?;
    assert_eq!(result.count("0") + result.count("1"), 1024);
    assert!((result.frequency("0") - 0.5).abs() < 0.05);
    Ok(())
}

#[test]
fn same_seed_reproduces_results_exactly() -> Result<(), QsearchError> {
    let circuit = CircuitBuilder::new(3, 3)
        .h(0)
        .h(1)
        .cx(0, 2)
        .cx(1, 2)
        .measure_all()
        .build();

    let first = Simulator::with_seed(2024).run(&circuit, 512)?;
    let second = Simulator::with_seed(2024).run(&circuit, 512)?;
    assert_eq!(first, second, "seeded runs must be identical");
    Ok(())
}

#[test]
fn malformed_circuit_is_rejected_before_simulation() {
    // Qubit 3 does not exist in a 2-qubit register.
    let circuit = CircuitBuilder::new(2, 2).h(0).cx(0, 3).measure_all().build();
    let err = Simulator::new().run(&circuit, 128).unwrap_err();
    match err {
        QsearchError::Configuration { message } => {
            assert!(message.contains("qubit 3"), "unexpected message: {}", message);
        }
        other => panic!("expected Configuration error, got {:?}", other),
    }
}

#[test]
fn zero_shot_count_is_rejected() {
    let circuit = CircuitBuilder::new(1, 1).h(0).measure(0, 0).build();
    let err = Simulator::new().run(&circuit, 0).unwrap_err();
    assert!(matches!(err, QsearchError::Sampling { .. }));
}

#[test]
fn empty_circuit_with_measurement_reports_zero_state() -> Result<(), QsearchError> {
    let mut circuit = Circuit::new(2, 2);
    circuit.add_measurement(0, 0);
    circuit.add_measurement(1, 1);

    let result = Simulator::new().run(&circuit, 256)?;
    assert_eq!(result.count("00"), 256);
    Ok(())
}
