//! Demo: preparing and sampling the three named Bell states.
//! |Phi+> = H(0), CX(0,1); |Psi+> adds X(1) up front; |Phi-> appends Z(1).
//! Correlated states yield only "00"/"11", the anti-correlated one only
//! "01"/"10", each side at roughly half of the 1024 shots.

use qsearch::{Circuit, CircuitBuilder, Simulator};

fn bell_phi_plus() -> Circuit {
    CircuitBuilder::new(2, 2).h(0).cx(0, 1).measure_all().build()
}

fn bell_psi_plus() -> Circuit {
    CircuitBuilder::new(2, 2).x(1).h(0).cx(0, 1).measure_all().build()
}

fn bell_phi_minus() -> Circuit {
    CircuitBuilder::new(2, 2).h(0).cx(0, 1).z(1).measure_all().build()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("--- Demo: Bell states ---");

    let simulator = Simulator::new();
    let shots = 1024;

    let cases = [
        ("Bell state |Phi+>", bell_phi_plus(), ["00", "11"]),
        ("Bell state |Psi+>", bell_psi_plus(), ["01", "10"]),
        ("Bell state |Phi->", bell_phi_minus(), ["00", "11"]),
    ];

    for (name, circuit, expected) in cases {
        println!("\nCircuit for {}:", name);
        println!("{}", circuit);

        let result = simulator.run(&circuit, shots)?;
        println!("{}", result);

        let covered: u64 = expected.iter().map(|&key| result.count(key)).sum();
        assert_eq!(
            covered, shots,
            "{}: outcomes outside {:?} observed",
            name, expected
        );
        for key in expected {
            let freq = result.frequency(key);
            println!("  {} frequency: {:.3}", key, freq);
            assert!(
                (freq - 0.5).abs() < 0.1,
                "{}: {} frequency {:.3} far from 0.5",
                name, key, freq
            );
        }
    }

    println!("\nAll Bell pairs showed the expected (anti-)correlations.");
    Ok(())
}
