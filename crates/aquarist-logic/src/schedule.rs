//! Daily equipment schedules over a 24-hour clock.
//!
//! A schedule is a start hour plus a duration, interpreted modulo 24 so a
//! window may wrap past midnight (e.g. a moonlight period from 22:00 for
//! 6 hours covers 22,23,0,1,2,3).

use serde::{Deserialize, Serialize};

/// A daily on-window for scheduled equipment (lights, CO2 injection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Hour of day the window opens, 0-23.
    pub start_hour: u8,
    /// Length of the window in hours, 0-24. Zero means never on,
    /// 24 means always on.
    pub duration_h: u8,
}

impl Schedule {
    pub fn new(start_hour: u8, duration_h: u8) -> Self {
        Self {
            start_hour: start_hour % 24,
            duration_h: duration_h.min(24),
        }
    }

    /// Whether the window covers the given hour of day (0-23).
    pub fn is_active(&self, hour_of_day: u8) -> bool {
        if self.duration_h == 0 {
            return false;
        }
        if self.duration_h >= 24 {
            return true;
        }
        let start = self.start_hour % 24;
        let hour = hour_of_day % 24;
        let elapsed = (hour + 24 - start) % 24;
        elapsed < self.duration_h
    }
}

impl Default for Schedule {
    fn default() -> Self {
        // 8:00 to 18:00, a typical planted-tank photoperiod.
        Self {
            start_hour: 8,
            duration_h: 10,
        }
    }
}

/// Hour of day (0-23) for a tick counter where one tick is one hour.
pub fn hour_of_day(tick: u64) -> u8 {
    (tick % 24) as u8
}

/// Day number (starting at 0) for a tick counter.
pub fn day_number(tick: u64) -> u64 {
    tick / 24
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_window() {
        let s = Schedule::new(8, 10);
        assert!(!s.is_active(7));
        assert!(s.is_active(8));
        assert!(s.is_active(17));
        assert!(!s.is_active(18));
    }

    #[test]
    fn test_wraps_past_midnight() {
        let s = Schedule::new(22, 6);
        assert!(s.is_active(22));
        assert!(s.is_active(23));
        assert!(s.is_active(0));
        assert!(s.is_active(3));
        assert!(!s.is_active(4));
        assert!(!s.is_active(21));
    }

    #[test]
    fn test_zero_duration_never_on() {
        let s = Schedule::new(10, 0);
        for h in 0..24 {
            assert!(!s.is_active(h));
        }
    }

    #[test]
    fn test_full_day_always_on() {
        let s = Schedule::new(5, 24);
        for h in 0..24 {
            assert!(s.is_active(h));
        }
    }

    #[test]
    fn test_start_hour_normalized() {
        let s = Schedule::new(26, 2);
        assert_eq!(s.start_hour, 2);
        assert!(s.is_active(2));
        assert!(s.is_active(3));
        assert!(!s.is_active(4));
    }

    #[test]
    fn test_clock_accessors() {
        assert_eq!(hour_of_day(0), 0);
        assert_eq!(hour_of_day(25), 1);
        assert_eq!(day_number(0), 0);
        assert_eq!(day_number(23), 0);
        assert_eq!(day_number(24), 1);
        assert_eq!(day_number(49), 2);
    }
}
