use crate::member::Member;
use crate::member::due_date::DueStatus::{DueIn, DueToday, Overdue};
use chrono::{Days, NaiveDate};
use derive_getters::Getters;

/// Last day covered by a payment.
/// Saturates at [NaiveDate::MAX], which no real payment date gets close to.
pub fn expiration(payment_date: NaiveDate, plan_days: u64) -> NaiveDate {
    payment_date
        .checked_add_days(Days::new(plan_days))
        .unwrap_or(NaiveDate::MAX)
}

/// Number of days between today and the expiration date.
/// Negative once the membership has expired.
pub fn days_remaining(expiration: NaiveDate, today: NaiveDate) -> i64 {
    expiration.signed_duration_since(today).num_days()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    /// Expired for that many days.
    Overdue(i64),
    DueToday,
    /// Expires in that many days.
    DueIn(i64),
}

impl DueStatus {
    pub fn from_days_remaining(days_remaining: i64) -> Self {
        match days_remaining {
            days if days < 0 => Overdue(-days),
            0 => DueToday,
            days => DueIn(days),
        }
    }
}

/// Where a member stands, on a given day.
#[derive(Debug, Getters, Clone, Copy, PartialEq, Eq)]
pub struct DueDate {
    expiration: NaiveDate,
    days_remaining: i64,
}

impl DueDate {
    pub fn compute(member: &Member, plan_days: u64, today: NaiveDate) -> Self {
        let expiration = expiration(*member.payment_date(), plan_days);
        Self {
            expiration,
            days_remaining: days_remaining(expiration, today),
        }
    }

    /// Whether the membership expires within `threshold` days, or already has.
    pub fn is_within(&self, threshold: i64) -> bool {
        self.days_remaining <= threshold
    }

    pub fn status(&self) -> DueStatus {
        DueStatus::from_days_remaining(self.days_remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    mod expiration {
        use super::*;

        #[parameterized(
            payment_date = {date(2025, 3, 1), date(2025, 1, 31), date(2024, 2, 1), date(2025, 2, 1), date(2025, 12, 15)},
            expected_result = {date(2025, 3, 31), date(2025, 3, 2), date(2024, 3, 2), date(2025, 3, 3), date(2026, 1, 14)}
        )]
        fn should_add_plan_days(payment_date: NaiveDate, expected_result: NaiveDate) {
            assert_eq!(expected_result, expiration(payment_date, 30));
        }

        #[test]
        fn should_be_exactly_plan_days_later() {
            let mut payment_date = date(2023, 12, 1);
            while payment_date < date(2025, 1, 1) {
                let result = expiration(payment_date, 30);
                assert_eq!(30, result.signed_duration_since(payment_date).num_days());
                payment_date = payment_date.succ_opt().unwrap();
            }
        }

        #[test]
        fn should_saturate() {
            assert_eq!(NaiveDate::MAX, expiration(NaiveDate::MAX, 30));
        }
    }

    mod days_remaining {
        use super::*;

        #[parameterized(
            today = {date(2025, 3, 26), date(2025, 3, 31), date(2025, 4, 10), date(2024, 12, 31)},
            expected_result = {5, 0, -10, 90}
        )]
        fn should_count_signed_days(today: NaiveDate, expected_result: i64) {
            assert_eq!(expected_result, days_remaining(date(2025, 3, 31), today));
        }
    }

    mod due_status {
        use super::*;

        #[parameterized(
            days_remaining = {-10, -1, 0, 1, 29},
            expected_result = {Overdue(10), Overdue(1), DueToday, DueIn(1), DueIn(29)}
        )]
        fn should_classify(days_remaining: i64, expected_result: DueStatus) {
            assert_eq!(expected_result, DueStatus::from_days_remaining(days_remaining));
        }
    }

    mod due_date {
        use super::*;

        #[test]
        fn should_compute_for_member() {
            let member = Member::new(date(2025, 3, 1), None, None);

            let result = DueDate::compute(&member, 30, date(2025, 3, 26));

            assert_eq!(&date(2025, 3, 31), result.expiration());
            assert_eq!(&5, result.days_remaining());
            assert_eq!(DueIn(5), result.status());
        }

        #[parameterized(
            today = {date(2025, 3, 25), date(2025, 3, 26), date(2025, 5, 1)},
            expected_result = {false, true, true}
        )]
        fn should_tell_whether_within_threshold(today: NaiveDate, expected_result: bool) {
            let member = Member::new(date(2025, 3, 1), None, None);

            let result = DueDate::compute(&member, 30, today);

            assert_eq!(expected_result, result.is_within(5));
        }
    }
}
