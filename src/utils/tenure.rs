//! 任期计算。按日历年月日做差，日不足时向上一个月借位

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::errors::{RelievingSystemError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tenure {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl fmt::Display for Tenure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Y, {}M, {}D", self.years, self.months, self.days)
    }
}

/// 某年某月的天数
fn days_in_month(year: i32, month: u32) -> i32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_default();
    let next = NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap_or_default();
    (next - first).num_days() as i32
}

/// 计算任期，两个参数均为 YYYY-MM-DD 日期串。
/// 日不足时从结束日期的上一个月借天数，月不足时从年借
pub fn calculate_tenure(joining_date: &str, last_working_day: &str) -> Result<Tenure> {
    let start = NaiveDate::parse_from_str(joining_date, "%Y-%m-%d")?;
    let end = NaiveDate::parse_from_str(last_working_day, "%Y-%m-%d")?;
    if end < start {
        return Err(RelievingSystemError::validation(
            "Last working day is before joining date",
        ));
    }

    let mut years = end.year() - start.year();
    let mut months = end.month() as i32 - start.month() as i32;
    let mut days = end.day() as i32 - start.day() as i32;

    if days < 0 {
        let (borrow_year, borrow_month) = if end.month() == 1 {
            (end.year() - 1, 12)
        } else {
            (end.year(), end.month() - 1)
        };
        days += days_in_month(borrow_year, borrow_month);
        months -= 1;
    }
    if months < 0 {
        months += 12;
        years -= 1;
    }

    Ok(Tenure {
        years,
        months,
        days,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tenure_with_day_borrow() {
        // 2023 年 2 月有 28 天
        let t = calculate_tenure("2020-01-15", "2023-03-10").unwrap();
        assert_eq!(t.to_string(), "3Y, 1M, 23D");
    }

    #[test]
    fn tenure_single_day() {
        let t = calculate_tenure("2021-06-30", "2021-07-01").unwrap();
        assert_eq!(t.to_string(), "0Y, 0M, 1D");
    }

    #[test]
    fn tenure_exact_years() {
        let t = calculate_tenure("2019-08-01", "2024-08-01").unwrap();
        assert_eq!(t.to_string(), "5Y, 0M, 0D");
    }

    #[test]
    fn tenure_month_borrow() {
        let t = calculate_tenure("2020-11-20", "2021-02-05").unwrap();
        // 借 1 月的 31 天，再从年借 12 个月
        assert_eq!(t.to_string(), "0Y, 2M, 16D");
    }

    #[test]
    fn tenure_rejects_reversed_range() {
        assert!(calculate_tenure("2023-01-01", "2022-12-31").is_err());
    }

    #[test]
    fn tenure_rejects_bad_format() {
        assert!(calculate_tenure("15-01-2020", "2023-03-10").is_err());
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2023, 12), 31);
    }
}
