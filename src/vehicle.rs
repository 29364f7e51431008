//! Vehicle hierarchy built on engine composition.
//!
//! Every vehicle owns exactly one [`Engine`], set at construction and never
//! reassigned. Starting a vehicle delegates to the owned engine, so the
//! start line depends only on the engine variant, never on the vehicle.
//! Refueling is a separate capability ([`Refuel`]) carried only by the
//! variants with a tank; [`Bike`] has none, so refueling a bike is a
//! compile error rather than a runtime case.

use std::io::{self, Write};

use crate::engine::Engine;

/// Common behavior of every vehicle: it owns an engine and can start it.
///
/// # Examples
///
/// ```
/// use fleetkit::{Bike, Car, ElectricEngine, PetrolEngine, Vehicle};
///
/// let fleet: Vec<Box<dyn Vehicle>> = vec![
///     Box::new(Car::new(Box::new(PetrolEngine))),
///     Box::new(Bike::new(Box::new(ElectricEngine))),
/// ];
///
/// let mut out = Vec::new();
/// for vehicle in &fleet {
///     vehicle.start_engine(&mut out).unwrap();
/// }
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "Petrol engine starts.\nElectric engine starts.\n"
/// );
/// ```
pub trait Vehicle: Send + Sync {
    /// The engine this vehicle owns.
    fn engine(&self) -> &dyn Engine;

    /// Starts the owned engine.
    ///
    /// Delegates unconditionally to [`Engine::start`]; the written line is
    /// the engine's, identical whichever vehicle owns it.
    fn start_engine(&self, out: &mut dyn Write) -> io::Result<()> {
        self.engine().start(out)
    }
}

/// The refuel capability, carried only by vehicles with a tank.
pub trait Refuel {
    /// Refuels the vehicle, writing its fixed refuel line to `out`.
    fn refuel(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// A car. Refuelable.
#[derive(Debug)]
pub struct Car {
    engine: Box<dyn Engine>,
}

impl Car {
    /// Creates a car owning the given engine.
    #[must_use]
    pub fn new(engine: Box<dyn Engine>) -> Self {
        Self { engine }
    }
}

impl Vehicle for Car {
    fn engine(&self) -> &dyn Engine {
        self.engine.as_ref()
    }
}

impl Refuel for Car {
    fn refuel(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Car is refueling.")
    }
}

/// A bike. It has no tank and therefore no refuel capability.
#[derive(Debug)]
pub struct Bike {
    engine: Box<dyn Engine>,
}

impl Bike {
    /// Creates a bike owning the given engine.
    #[must_use]
    pub fn new(engine: Box<dyn Engine>) -> Self {
        Self { engine }
    }
}

impl Vehicle for Bike {
    fn engine(&self) -> &dyn Engine {
        self.engine.as_ref()
    }
}

/// A truck. Refuelable.
#[derive(Debug)]
pub struct Truck {
    engine: Box<dyn Engine>,
}

impl Truck {
    /// Creates a truck owning the given engine.
    #[must_use]
    pub fn new(engine: Box<dyn Engine>) -> Self {
        Self { engine }
    }
}

impl Vehicle for Truck {
    fn engine(&self) -> &dyn Engine {
        self.engine.as_ref()
    }
}

impl Refuel for Truck {
    fn refuel(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Truck is refueling.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{ElectricEngine, PetrolEngine};

    fn start_line(vehicle: &dyn Vehicle) -> String {
        let mut out = Vec::new();
        vehicle.start_engine(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn refuel_line(vehicle: &dyn Refuel) -> String {
        let mut out = Vec::new();
        vehicle.refuel(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_start_line_depends_only_on_engine() {
        let petrol_fleet: Vec<Box<dyn Vehicle>> = vec![
            Box::new(Car::new(Box::new(PetrolEngine))),
            Box::new(Bike::new(Box::new(PetrolEngine))),
            Box::new(Truck::new(Box::new(PetrolEngine))),
        ];
        for vehicle in &petrol_fleet {
            assert_eq!(start_line(vehicle.as_ref()), "Petrol engine starts.\n");
        }

        let electric_fleet: Vec<Box<dyn Vehicle>> = vec![
            Box::new(Car::new(Box::new(ElectricEngine))),
            Box::new(Bike::new(Box::new(ElectricEngine))),
            Box::new(Truck::new(Box::new(ElectricEngine))),
        ];
        for vehicle in &electric_fleet {
            assert_eq!(start_line(vehicle.as_ref()), "Electric engine starts.\n");
        }
    }

    #[test]
    fn test_car_refuel_line() {
        let car = Car::new(Box::new(PetrolEngine));
        assert_eq!(refuel_line(&car), "Car is refueling.\n");
    }

    #[test]
    fn test_truck_refuel_line() {
        let truck = Truck::new(Box::new(PetrolEngine));
        assert_eq!(refuel_line(&truck), "Truck is refueling.\n");
    }

    #[test]
    fn test_refuel_lines_are_distinct() {
        let car = Car::new(Box::new(PetrolEngine));
        let truck = Truck::new(Box::new(PetrolEngine));
        assert_ne!(refuel_line(&car), refuel_line(&truck));
    }

    #[test]
    fn test_vehicle_exposes_its_engine() {
        let bike = Bike::new(Box::new(ElectricEngine));
        let mut out = Vec::new();
        bike.engine().start(&mut out).unwrap();
        assert_eq!(out, b"Electric engine starts.\n");
    }
}
