mod monitor;
mod ports;
mod render;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use core_types::SerialSettings;

/// Serial packet monitor: reassembles `\r ... \n` delimited packets from a
/// serial port and displays them with a throttled single-line refresh.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Serial port (e.g. COM1 or /dev/ttyUSB0); prompts interactively if omitted
    #[arg(short, long)]
    port: Option<String>,

    /// Baud rate
    #[arg(short, long, default_value_t = 9600)]
    baudrate: u32,

    /// Read timeout in seconds
    #[arg(short, long, default_value_t = 1.0)]
    timeout: f64,

    /// Display payloads as hex instead of decoded text
    #[arg(long)]
    hex: bool,

    /// Treat every chunk read as one packet (no delimiter framing)
    #[arg(long)]
    raw: bool,

    /// List available serial ports and exit
    #[arg(long)]
    scan: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.scan {
        let ports = transport_serial::list_ports().context("could not enumerate serial ports")?;
        ports::print_port_table(&ports);
        return Ok(());
    }

    if args.timeout < 0.0 {
        bail!("timeout must be non-negative, got {}", args.timeout);
    }

    let port = match args.port {
        Some(port) => port,
        None => ports::choose_port_interactive()?,
    };
    let settings = SerialSettings::new(port, args.baudrate, args.timeout);

    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = stop.clone();
        ctrlc::set_handler(move || stop.store(true, Ordering::SeqCst))
            .context("could not install Ctrl+C handler")?;
    }

    monitor::run_session(&settings, args.hex, args.raw, &stop)?;

    // The display line has no trailing newline; move off it before the
    // goodbye message.
    println!("\nSession ended.");
    Ok(())
}
