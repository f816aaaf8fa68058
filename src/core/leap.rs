use crate::domain::model::{LeapRule, Year, Verdict};

/// Gregorian leap-year rule. Total over `i64`: `%` yields 0 for negative
/// multiples, so `0` and `-400` are leap years.
pub const fn is_leap_year(year: i64) -> bool {
    classify(year).is_leap()
}

/// Walks the 400 / 100 / 4 cascade and reports the tier that decided.
pub const fn classify(year: i64) -> LeapRule {
    if year % 400 == 0 {
        LeapRule::DivisibleBy400
    } else if year % 100 == 0 {
        LeapRule::CenturyException
    } else if year % 4 == 0 {
        LeapRule::DivisibleBy4
    } else {
        LeapRule::NotDivisibleBy4
    }
}

pub fn check(year: Year) -> Verdict {
    let rule = classify(year.value());
    Verdict {
        year,
        leap: rule.is_leap(),
        rule,
    }
}
