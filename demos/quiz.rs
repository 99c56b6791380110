// ============================================================================
// Quiz Walkthrough
// ============================================================================
//
// Run with: cargo run --example quiz --features logging

use decimal_vector::prelude::*;

fn v(coordinates: &[&str]) -> VectorResult<Vector> {
    Vector::new(coordinates)
}

fn main() -> VectorResult<()> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Quiz 1: addition, subtraction, scaling ===\n");
    println!("{}", v(&["8.218", "-9.341"])?.add(&v(&["-1.129", "2.111"])?)?);
    println!("{}", v(&["7.119", "8.215"])?.subtract(&v(&["-8.223", "0.878"])?)?);
    println!("{}", v(&["1.671", "-1.012", "-0.318"])?.times_scalar("7.41")?);

    println!("\n=== Quiz 2: magnitude and direction ===\n");
    println!("{}", v(&["-0.221", "7.437"])?.magnitude()?);
    println!("{}", v(&["8.813", "-1.331", "-6.247"])?.magnitude()?);
    println!("{}", v(&["5.581", "-2.136"])?.normalize()?);
    println!("{}", v(&["1.996", "3.108", "-4.554"])?.normalize()?);

    println!("\n=== Quiz 3: dot product and angle ===\n");
    println!("{}", v(&["7.887", "4.138"])?.dot(&v(&["-8.802", "6.776"])?)?);
    println!(
        "{}",
        v(&["-5.955", "-4.904", "-1.874"])?.dot(&v(&["-4.496", "-8.755", "7.103"])?)?
    );
    println!(
        "{}",
        v(&["3.183", "-7.627"])?.angle_with(&v(&["-2.668", "5.319"])?, AngleUnit::Radians)?
    );
    println!(
        "{}",
        v(&["7.35", "0.221", "5.188"])?
            .angle_with(&v(&["2.751", "8.259", "3.985"])?, AngleUnit::Degrees)?
    );
    println!(
        "{}",
        Vector::new([2, 2])?.angle_with(&Vector::new([4, 4])?, AngleUnit::Radians)?
    );

    println!("\n=== Quiz 4: parallel or orthogonal ===\n");
    let pairs = [
        (v(&["-7.579", "-7.88"])?, v(&["22.737", "23.64"])?),
        (v(&["-2.029", "9.97", "4.172"])?, v(&["-9.231", "-6.639", "-7.245"])?),
        (v(&["-2.328", "-7.284", "-1.214"])?, v(&["-1.821", "1.072", "-2.94"])?),
        (v(&["2.118", "4.827"])?, v(&["0", "0"])?),
    ];

    for (a, b) in &pairs {
        let angle = match a.angle_with(b, AngleUnit::Degrees) {
            Ok(degrees) => format!("{:.3} deg", degrees),
            Err(err) => err.to_string(),
        };
        println!(
            "parallel: {:<5}  orthogonal: {:<5}  angle: {}",
            a.check_parallel(b)?,
            a.check_orthogonal(b)?,
            angle
        );
    }

    Ok(())
}
