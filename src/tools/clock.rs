use chrono::{Local, NaiveDate};

/// Source of the current date.
/// Business logic never reads the system clock by itself,
/// the date is read once per action through this trait.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The local calendar date of the machine.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always the same date.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: NaiveDate,
}

#[cfg(test)]
impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

#[cfg(test)]
impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}
