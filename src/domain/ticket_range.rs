use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

///
/// Block of sequential ticket numbers reserved for a sales user.
///
/// `current` is the next number to issue. It stays within `[start, end + 1]`,
/// `end + 1` meaning the range is exhausted.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRange {
    pub start: i64,
    pub end: i64,
    pub current: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TicketRangeError {
    #[error("ticket number range must start at 1 or above")]
    StartNotPositive,

    #[error("ticket number range start is greater than end")]
    StartAfterEnd,

    #[error("ticket number range end is too large")]
    EndTooLarge,

    #[error("current ticket number outside of range")]
    CurrentOutOfRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("ticket number range exceeded: next number {next} is above {end}")]
pub struct RangeExceeded {
    pub next: i64,
    pub end: i64,
}

impl TicketRange {
    ///
    /// Creates new range starting at its first number
    ///
    pub fn new(start: i64, end: i64) -> Result<Self, TicketRangeError> {
        Self::with_current(start, end, start)
    }

    pub fn with_current(start: i64, end: i64, current: i64) -> Result<Self, TicketRangeError> {
        if start < 1 {
            return Err(TicketRangeError::StartNotPositive);
        }
        if start > end {
            return Err(TicketRangeError::StartAfterEnd);
        }
        // `end + 1` marks exhausted range
        if end == i64::MAX {
            return Err(TicketRangeError::EndTooLarge);
        }
        if current < start || current > end + 1 {
            return Err(TicketRangeError::CurrentOutOfRange);
        }

        Ok(Self {
            start,
            end,
            current,
        })
    }

    ///
    /// Takes the next number from the range.
    ///
    /// ### Returns
    /// issued number (value of `current` before the increment)
    /// and the range after the increment
    ///
    /// ### Errors
    /// - [RangeExceeded] when `current` is above `end`.
    ///   Range is left untouched in that case.
    ///
    pub fn allocate(&self) -> Result<(i64, TicketRange), RangeExceeded> {
        if self.current > self.end {
            return Err(RangeExceeded {
                next: self.current,
                end: self.end,
            });
        }

        let current = self.current.checked_add(1).ok_or(RangeExceeded {
            next: self.current,
            end: self.end,
        })?;
        let next = TicketRange { current, ..*self };

        Ok((self.current, next))
    }

    pub fn remaining(&self) -> i64 {
        match self.current > self.end {
            true => 0,
            false => self.end.saturating_sub(self.current).saturating_add(1),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    pub fn overlaps(&self, other: &TicketRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

///
/// Ticket number used for users without assigned range.
///
/// Derived from the current time, so two tickets issued
/// within the same millisecond get the same number.
///
pub fn fallback_ticket_number(now: OffsetDateTime) -> String {
    let millis = now.unix_timestamp_nanos() / 1_000_000;
    format!("TKT-{millis}")
}

#[cfg(test)]
mod test {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn new_starts_at_first_number() {
        let range = TicketRange::new(1001, 1002).unwrap();

        assert_eq!(range.current, 1001);
        assert_eq!(range.remaining(), 2);
    }

    #[test]
    fn new_rejects_invalid_bounds() {
        assert_eq!(
            TicketRange::new(0, 10),
            Err(TicketRangeError::StartNotPositive)
        );
        assert_eq!(
            TicketRange::new(20, 10),
            Err(TicketRangeError::StartAfterEnd)
        );
        assert_eq!(
            TicketRange::with_current(10, 20, 22),
            Err(TicketRangeError::CurrentOutOfRange)
        );
        assert_eq!(
            TicketRange::with_current(10, 20, 9),
            Err(TicketRangeError::CurrentOutOfRange)
        );
    }

    #[test]
    fn new_rejects_end_at_integer_limit() {
        assert_eq!(
            TicketRange::new(1, i64::MAX),
            Err(TicketRangeError::EndTooLarge)
        );
        assert_eq!(
            TicketRange::with_current(1, i64::MAX, i64::MAX),
            Err(TicketRangeError::EndTooLarge)
        );

        let range = TicketRange::new(1, i64::MAX - 1).unwrap();
        assert_eq!(range.remaining(), i64::MAX - 1);
    }

    #[test]
    fn stored_range_at_integer_limit_does_not_overflow() {
        let range = TicketRange {
            start: i64::MAX,
            end: i64::MAX,
            current: i64::MAX,
        };

        assert_eq!(range.remaining(), 1);
        assert_eq!(
            range.allocate(),
            Err(RangeExceeded {
                next: i64::MAX,
                end: i64::MAX
            })
        );
    }

    #[test]
    fn with_current_accepts_exhausted_range() {
        let range = TicketRange::with_current(10, 20, 21).unwrap();

        assert!(range.is_exhausted());
    }

    #[test]
    fn allocate_issues_pre_increment_value_until_exhausted() {
        let range = TicketRange::new(1001, 1002).unwrap();

        let (first, range) = range.allocate().unwrap();
        assert_eq!(first, 1001);
        assert_eq!(range.current, 1002);

        let (second, range) = range.allocate().unwrap();
        assert_eq!(second, 1002);
        assert_eq!(range.current, 1003);

        let err = range.allocate().unwrap_err();
        assert_eq!(err, RangeExceeded { next: 1003, end: 1002 });
        assert_eq!(range.current, 1003);
    }

    #[test]
    fn allocate_keeps_current_within_bounds() {
        let mut range = TicketRange::new(5, 40).unwrap();

        for _ in 0..100 {
            if let Ok((number, next)) = range.allocate() {
                assert!(range.start <= number && number <= range.end);
                range = next;
            }
            assert!(range.start <= range.current && range.current <= range.end + 1);
        }

        assert!(range.is_exhausted());
    }

    #[test]
    fn single_number_range() {
        let range = TicketRange::new(7, 7).unwrap();

        let (number, range) = range.allocate().unwrap();

        assert_eq!(number, 7);
        assert!(range.allocate().is_err());
    }

    #[test]
    fn overlaps() {
        let range = TicketRange::new(100, 200).unwrap();

        assert!(range.overlaps(&TicketRange::new(200, 300).unwrap()));
        assert!(range.overlaps(&TicketRange::new(1, 100).unwrap()));
        assert!(range.overlaps(&TicketRange::new(120, 130).unwrap()));
        assert!(!range.overlaps(&TicketRange::new(201, 300).unwrap()));
        assert!(!range.overlaps(&TicketRange::new(1, 99).unwrap()));
    }

    #[test]
    fn fallback_ticket_number_from_timestamp() {
        let number = fallback_ticket_number(datetime!(2024-03-01 08:30:00.123 UTC));

        assert_eq!(number, "TKT-1709281800123");
    }
}
