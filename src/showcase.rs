//! The fixed showcase sequence.
//!
//! Builds each component in turn and drives it once, writing the full
//! transcript to the given sink. The order is fixed: command pipeline,
//! car, bike, truck, calculator. There is no branching beyond the
//! pipeline's action match and no input beyond hardcoded literals.

use std::io::Write;

use crate::calculator::Calculator;
use crate::console::{CommandProcessor, InputHandler, OutputHandler};
use crate::engine::{ElectricEngine, PetrolEngine};
use crate::error::FleetResult;
use crate::vehicle::{Bike, Car, Refuel, Truck, Vehicle};

/// Runs the full showcase sequence, writing its transcript to `out`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails; the sequence itself has no
/// failing step.
///
/// # Examples
///
/// ```
/// let mut out = Vec::new();
/// fleetkit::showcase::run(&mut out).unwrap();
/// let transcript = String::from_utf8(out).unwrap();
/// assert!(transcript.starts_with("Processing car startup.\n"));
/// assert!(transcript.ends_with("Addition of strings: Hello World\n"));
/// ```
pub fn run(out: &mut dyn Write) -> FleetResult<()> {
    let input = InputHandler::new();
    let processor = CommandProcessor::new();
    let output = OutputHandler::new();

    let action = input.read_action();
    processor.process(&action, out)?;
    output.display("Car started successfully!", out)?;

    let car = Car::new(Box::new(PetrolEngine));
    car.start_engine(out)?;
    car.refuel(out)?;

    let bike = Bike::new(Box::new(ElectricEngine));
    bike.start_engine(out)?;

    let truck = Truck::new(Box::new(PetrolEngine));
    truck.start_engine(out)?;
    truck.refuel(out)?;

    let calc = Calculator::new();
    writeln!(out, "Addition of ints: {}", calc.add_int(2, 3))?;
    // Debug formatting keeps the trailing .0 on whole float results.
    writeln!(out, "Addition of doubles: {:?}", calc.add_float(2.5, 3.5))?;
    writeln!(
        out,
        "Addition of strings: {}",
        calc.add_text("Hello", " World")
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRANSCRIPT: &str = "\
Processing car startup.
Output: Car started successfully!
Petrol engine starts.
Car is refueling.
Electric engine starts.
Petrol engine starts.
Truck is refueling.
Addition of ints: 5
Addition of doubles: 6.0
Addition of strings: Hello World
";

    #[test]
    fn test_run_writes_full_transcript() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), TRANSCRIPT);
    }

    #[test]
    fn test_run_is_deterministic() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        run(&mut first).unwrap();
        run(&mut second).unwrap();
        assert_eq!(first, second);
    }
}
