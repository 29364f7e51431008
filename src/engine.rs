//! Engine capability and its variants.
//!
//! Vehicles depend on the [`Engine`] trait, never on a concrete variant;
//! swapping petrol for electric changes only the line the engine writes
//! when it starts.

use std::fmt;
use std::io::{self, Write};

/// The start capability every engine provides.
///
/// Starting writes exactly one fixed, variant-specific line to `out` and
/// has no other effect. The sink is injected so callers decide where the
/// line goes (stdout in the demo binary, a buffer in tests).
///
/// # Examples
///
/// ```
/// use fleetkit::{Engine, PetrolEngine};
///
/// let mut out = Vec::new();
/// PetrolEngine.start(&mut out).unwrap();
/// assert_eq!(out, b"Petrol engine starts.\n");
/// ```
pub trait Engine: fmt::Debug + Send + Sync {
    /// Starts the engine, writing its fixed start line to `out`.
    fn start(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// A combustion engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct PetrolEngine;

impl Engine for PetrolEngine {
    fn start(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Petrol engine starts.")
    }
}

/// A battery-powered engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElectricEngine;

impl Engine for ElectricEngine {
    fn start(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Electric engine starts.")
    }
}
