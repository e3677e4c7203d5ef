use crate::{
    auditorium::Auditorium,
    constants::{SEAT_MAP_HEADER, STATUS_AVAILABLE, STATUS_TAKEN},
    error::{CinemaError, Result},
};
use chrono::Local;
use csv::WriterBuilder;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Writes `seatmap_<timestamp>.csv` into `output_dir` (current directory when `None`).
pub fn export_seat_map(auditorium: &Auditorium, output_dir: Option<&Path>) -> Result<PathBuf> {
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let filename = format!("seatmap_{timestamp}.csv");

    let file_path = if let Some(dir) = output_dir {
        std::fs::create_dir_all(dir).map_err(|e| CinemaError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
        dir.join(&filename)
    } else {
        filename.into()
    };

    let file = File::create(&file_path).map_err(|e| CinemaError::CreateFile {
        path: file_path.clone(),
        source: e,
    })?;

    write_seat_map(auditorium, BufWriter::new(file))?;
    Ok(file_path)
}

/// One record per seat in row/column order
pub fn write_seat_map<W: Write>(auditorium: &Auditorium, writer: W) -> Result<()> {
    #[allow(unused_mut)]
    let mut builder = WriterBuilder::new();
    #[cfg(windows)]
    {
        use csv::Terminator;
        builder = builder.terminator(Terminator::CRLF);
    }

    let mut wtr = builder.from_writer(writer);

    wtr.write_record(SEAT_MAP_HEADER)?;
    for seat in auditorium.seats() {
        let row_s = seat.row().to_string();
        let column_s = seat.column().to_string();
        let status = if seat.is_taken() {
            STATUS_TAKEN
        } else {
            STATUS_AVAILABLE
        };
        wtr.write_record([row_s.as_str(), column_s.as_str(), status])?;
    }

    wtr.flush()?;
    Ok(())
}
