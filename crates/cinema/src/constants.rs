/// Environment variables read by `Config::from_env`
pub const ENV_LAYOUT_FILE: &str = "CINEMA_LAYOUT_FILE";
pub const ENV_OUTPUT_DIR: &str = "CINEMA_OUTPUT_DIR";

/// Layout used when no layout file is configured (seats per row, front to back)
pub const DEFAULT_ROWS: [i64; 6] = [10, 12, 12, 14, 14, 16];
pub const DEFAULT_AUDITORIUM_NAME: &str = "auditorium";
pub const DEFAULT_OUTPUT_DIR: &str = "seatmaps";

/// Seat map CSV
pub const SEAT_MAP_HEADER: [&str; 3] = ["Row", "Seat", "Status"];
pub const STATUS_AVAILABLE: &str = "available";
pub const STATUS_TAKEN: &str = "taken";

/// Seat map rendering (Display)
pub const AVAILABLE_MARK: char = '.';
pub const TAKEN_MARK: char = 'X';
