//! One lock per auditorium for hosts that share it across threads.
//!
//! Search and reservation run under a single lock acquisition, so two
//! threads can never be handed the same block.

use crate::{auditorium::Auditorium, error::Result, seat::SeatId};
use log::debug;
use std::sync::{Arc, Mutex, MutexGuard};

pub type SharedAuditorium = Arc<Mutex<Auditorium>>;

pub fn share(auditorium: Auditorium) -> SharedAuditorium {
    Arc::new(Mutex::new(auditorium))
}

fn lock(shared: &SharedAuditorium) -> MutexGuard<'_, Auditorium> {
    shared.lock().unwrap_or_else(|p| p.into_inner())
}

pub fn reserve_block(shared: &SharedAuditorium, amount: usize) -> Option<SeatId> {
    let reserved = lock(shared).reserve_block(amount);
    if reserved.is_none() {
        debug!("No block of {amount} seats left");
    }
    reserved
}

pub fn release_block(shared: &SharedAuditorium, start: SeatId, amount: usize) -> Result<()> {
    lock(shared).release_block(start, amount)
}

pub fn count_available_seats(shared: &SharedAuditorium) -> usize {
    lock(shared).count_available_seats()
}

pub fn snapshot(shared: &SharedAuditorium) -> Auditorium {
    lock(shared).clone()
}
