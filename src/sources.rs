//! Time and randomness injected into the controller so draws and the daily
//! lock can be reproduced in tests.

use chrono::{NaiveDate, Utc};
use rand::{rngs::ThreadRng, Rng};

pub trait Clock: Send + Sync {
    /// Current calendar day. The daily lock compares against this value.
    fn today(&self) -> NaiveDate;
}

/// Calendar day in UTC, the same day boundary as an ISO-8601 timestamp's date part.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub trait RandomSource: Send {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

#[derive(Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        let mut rng: ThreadRng = rand::thread_rng();
        rng.gen_range(0..len)
    }
}

/// Always picks the same index.
#[derive(Debug, Clone, Copy)]
pub struct FixedIndex(pub usize);

impl RandomSource for FixedIndex {
    fn pick_index(&mut self, _len: usize) -> usize {
        self.0
    }
}
