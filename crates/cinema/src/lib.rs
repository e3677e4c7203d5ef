pub mod auditorium;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod seat;
pub mod shared;

pub use auditorium::Auditorium;
pub use config::Config;
pub use constants::{DEFAULT_ROWS, ENV_LAYOUT_FILE, ENV_OUTPUT_DIR};
pub use error::{CinemaError, Result};
pub use export::{export_seat_map, write_seat_map};
pub use seat::{Seat, SeatId};
pub use shared::SharedAuditorium;
