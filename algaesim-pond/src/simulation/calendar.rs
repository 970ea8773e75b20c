//! Simulation calendar
//!
//! Maps 0-based simulation days onto calendar months using a non-leap year.

use algaesim_core::parameters::MONTHS_PER_YEAR;

/// Days in each month of a non-leap year, January first.
pub const DAYS_IN_MONTH: [u32; MONTHS_PER_YEAR] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

const MONTH_NAMES: [&str; MONTHS_PER_YEAR] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English name of a 0-based month index, wrapping modulo 12.
pub fn month_name(month_index: usize) -> &'static str {
    MONTH_NAMES[month_index % MONTHS_PER_YEAR]
}

/// 0-based month index of every simulation day.
///
/// Day 0 is the first day of `start_month` (1 = January). Months advance
/// through the non-leap table and wrap from December to January. A
/// `start_month` outside 1-12 is reduced modulo 12.
pub fn day_to_month_map(start_month: u32, duration_days: u32) -> Vec<usize> {
    let mut month = (start_month as usize + MONTHS_PER_YEAR - 1) % MONTHS_PER_YEAR;
    let mut day_in_month = 0;

    (0..duration_days)
        .map(|_| {
            let current = month;
            day_in_month += 1;
            if day_in_month >= DAYS_IN_MONTH[month] {
                day_in_month = 0;
                month = (month + 1) % MONTHS_PER_YEAR;
            }
            current
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_leap_year() {
        assert_eq!(DAYS_IN_MONTH.iter().sum::<u32>(), 365);
    }

    #[test]
    fn test_january_start_boundaries() {
        let map = day_to_month_map(1, 365);
        assert_eq!(map.len(), 365);
        assert_eq!(map[0], 0);
        assert_eq!(map[30], 0);
        assert_eq!(map[31], 1);
        assert_eq!(map[58], 1);
        assert_eq!(map[59], 2);
        assert_eq!(map[364], 11);
    }

    #[test]
    fn test_wraps_across_year_end() {
        let map = day_to_month_map(12, 40);
        assert_eq!(map[0], 11);
        assert_eq!(map[30], 11);
        assert_eq!(map[31], 0);
        assert_eq!(map[39], 0);
    }

    #[test]
    fn test_multi_year_run() {
        let map = day_to_month_map(1, 730);
        assert_eq!(map[365], 0);
        assert_eq!(&map[..365], &map[365..]);
    }

    #[test]
    fn test_month_days_counted() {
        let map = day_to_month_map(3, 365);
        for (month, days) in DAYS_IN_MONTH.iter().enumerate() {
            let count = map.iter().filter(|m| **m == month).count() as u32;
            assert_eq!(count, *days, "Wrong day count for {}", month_name(month));
        }
    }

    #[test]
    fn test_empty_run() {
        assert!(day_to_month_map(1, 0).is_empty());
    }
}
