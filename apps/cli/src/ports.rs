//! Port enumeration display and interactive selection.

use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use transport_serial::PortInfo;

/// Print the numbered port table.
pub fn print_port_table(ports: &[PortInfo]) {
    if ports.is_empty() {
        println!("No serial ports found.");
        return;
    }
    println!("Available serial ports:");
    for (index, port) in ports.iter().enumerate() {
        let description = port.description.as_deref().unwrap_or("-");
        println!("  [{index}] {device:<24} {description}", device = port.device);
    }
}

/// Enumerate ports, show the table, and prompt for a selection.
///
/// Empty list, non-numeric input, and out-of-range indices all end the
/// session with an error; there is no retry loop.
pub fn choose_port_interactive() -> Result<String> {
    let ports = transport_serial::list_ports().context("could not enumerate serial ports")?;
    print_port_table(&ports);

    print!("Select a port by number: ");
    io::stdout().flush().context("could not flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("could not read selection")?;

    select_port(ports, &line)
}

/// Resolve the typed selection against the enumerated ports.
fn select_port(ports: Vec<PortInfo>, input: &str) -> Result<String> {
    if ports.is_empty() {
        bail!("no serial ports found");
    }

    let selection = input.trim();
    let index: usize = selection
        .parse()
        .with_context(|| format!("invalid selection '{selection}': expected a number"))?;

    match ports.into_iter().nth(index) {
        Some(port) => Ok(port.device),
        None => bail!("selection {index} is out of range"),
    }
}
