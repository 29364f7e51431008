//! # Fleetkit
//!
//! A small vehicle-fleet toolkit built from composable capabilities:
//! engines that start, vehicles that own an engine and start it by
//! delegation, a console command pipeline, and a typed calculator. A fixed
//! showcase sequence drives every component once and writes a
//! deterministic transcript.
//!
//! ## Core Concepts
//!
//! - **Engine**: a start capability with petrol and electric variants
//! - **Vehicle**: owns exactly one engine and starts it by delegation
//! - **Refuel**: a capability only the vehicles with a tank carry
//! - **Command pipeline**: read an action, process it, display the result
//! - **Calculator**: typed addition over integers, floats, and text
//!
//! ## Usage
//!
//! ```rust
//! use fleetkit::{Car, PetrolEngine, Refuel, Vehicle};
//!
//! let car = Car::new(Box::new(PetrolEngine));
//! let mut out = Vec::new();
//! car.start_engine(&mut out).unwrap();
//! car.refuel(&mut out).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "Petrol engine starts.\nCar is refueling.\n"
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod calculator;
pub mod console;
pub mod engine;
pub mod error;
pub mod showcase;
pub mod vehicle;

// Re-export primary types at crate root for convenience
pub use calculator::Calculator;
pub use console::{Action, CommandProcessor, InputHandler, OutputHandler};
pub use engine::{ElectricEngine, Engine, PetrolEngine};
pub use error::{ActionError, FleetError, FleetResult};
pub use vehicle::{Bike, Car, Refuel, Truck, Vehicle};
