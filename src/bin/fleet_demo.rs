//! Fleet showcase binary.
//!
//! Runs the fixed showcase sequence against standard output. Takes no
//! arguments; exits 0 on success, 1 if writing the transcript fails.

use std::io;

fn main() {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = fleetkit::showcase::run(&mut out) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
