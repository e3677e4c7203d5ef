mod groups;

use anyhow::{Context, Result};
use cinema::{Auditorium, Config, SeatId, export_seat_map};
use log::{debug, error, info, warn};
use std::io::Write;

/// Outcome of one group request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Booking {
    size: usize,
    start: Option<SeatId>,
}

fn main() {
    // Initialize logger - defaults to RUST_LOG if set, otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    match run() {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            error!("Error: {e:#}");

            // Provide helpful hints for common errors
            use std::io::ErrorKind;
            for cause in e.chain().skip(1) {
                if let Some(ioe) = cause.downcast_ref::<std::io::Error>() {
                    match ioe.kind() {
                        ErrorKind::PermissionDenied => {
                            error!("Hint: Run in a writable directory or set CINEMA_OUTPUT_DIR.");
                            break;
                        }
                        ErrorKind::Other if format!("{ioe}").contains("No space left") => {
                            error!("Hint: Check available disk space.");
                            break;
                        }
                        _ => {}
                    }
                }
            }
            let _ = std::io::stderr().flush();
            std::process::exit(1);
        }
    }
}

fn run() -> Result<()> {
    let config = Config::from_env()?;
    let groups = groups::from_env()?;
    let mut auditorium = config.build_auditorium()?;

    info!("Box office opening for '{}'", config.auditorium.name);
    info!(
        "{} rows, {} seats",
        auditorium.row_count(),
        auditorium.total_seats()
    );
    debug!("Group requests: {groups:?}");

    let bookings = book_groups(&mut auditorium, &groups);
    for booking in &bookings {
        match booking.start {
            Some(start) => info!("Group of {} seated from {start}", booking.size),
            None => warn!("No contiguous block for a group of {}", booking.size),
        }
    }

    let seated = bookings.iter().filter(|b| b.start.is_some()).count();
    info!("Groups seated: {seated}/{}", bookings.len());
    info!("Seats left: {}", auditorium.count_available_seats());
    for line in auditorium.to_string().lines() {
        info!("{line}");
    }

    let output_dir = &config.export.output_dir;
    debug!("Exporting to directory: {}", output_dir.display());
    let path = export_seat_map(&auditorium, Some(output_dir.as_path()))
        .with_context(|| format!("exporting seat map to {}", output_dir.display()))?;
    info!("Seat map saved to: {}", path.display());

    Ok(())
}

/// Seats each group in the first block that fits, in arrival order
fn book_groups(auditorium: &mut Auditorium, groups: &[usize]) -> Vec<Booking> {
    groups
        .iter()
        .map(|&size| Booking {
            size,
            start: auditorium.reserve_block(size),
        })
        .collect()
}
