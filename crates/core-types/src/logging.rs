/// Logging macros for the monitor session.
///
/// Diagnostics go to stderr so the single-line display on stdout is never
/// disturbed. debug/info/warn are compiled only in debug builds; error is
/// always compiled.
///
/// # Example
/// ```
/// use core_types::monitor_debug;
/// monitor_debug!("Monitor: {:?} → {:?}", "Connecting", "Running");
/// ```
#[macro_export]
macro_rules! monitor_debug {
    ($($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            eprintln!("[DEBUG] {}", format!($($arg)*));
        }
    };
}

/// Log an info-level message (only in debug builds).
///
/// Use for state changes and session lifecycle events.
#[macro_export]
macro_rules! monitor_info {
    ($($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            eprintln!("[INFO] {}", format!($($arg)*));
        }
    };
}

/// Log a warning-level message (only in debug builds).
///
/// Use for recoverable or unexpected conditions.
#[macro_export]
macro_rules! monitor_warn {
    ($($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            eprintln!("[WARN] {}", format!($($arg)*));
        }
    };
}

/// Log an error-level message (always compiled, even in release).
#[macro_export]
macro_rules! monitor_error {
    ($($arg:tt)*) => {
        {
            eprintln!("[ERROR] {}", format!($($arg)*));
        }
    };
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    #[test]
    fn test_logging_macros_compile() {
        monitor_debug!("test debug");
        monitor_info!("test info");
        monitor_warn!("test warn");
        monitor_error!("test error");
    }

    #[test]
    fn test_logging_with_format_args() {
        monitor_debug!("Monitor: {} → {}", "Running", "Draining");
        monitor_info!("Connected to {} at {} baud", "/dev/ttyUSB0", 9600);
        monitor_warn!("Discarded {} bytes before start marker", 4);
        monitor_error!("Failed to open serial port: {}", "Access denied");
    }
}
