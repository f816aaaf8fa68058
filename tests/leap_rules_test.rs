use chrono::NaiveDate;
use leap_check::{classify, is_leap_year, parse_year, LeapError, LeapRule, Year};

#[test]
fn test_end_to_end_literal_scenarios() {
    let cases = [
        (2000, true),
        (1900, false),
        (2024, true),
        (2025, false),
        (400, true),
        (-400, true),
    ];

    for (year, expected) in cases {
        assert_eq!(is_leap_year(year), expected, "year {}", year);
    }
}

#[test]
fn test_divisibility_tiers() {
    for k in -50..=50_i64 {
        assert!(is_leap_year(400 * k), "multiple of 400: {}", 400 * k);

        let century = 100 * k;
        if century % 400 != 0 {
            assert!(!is_leap_year(century), "century: {}", century);
        }

        let quad = 4 * k;
        if quad % 100 != 0 {
            assert!(is_leap_year(quad), "multiple of 4: {}", quad);
        }

        for offset in 1..4 {
            assert!(!is_leap_year(quad + offset), "not a multiple of 4: {}", quad + offset);
        }
    }
}

#[test]
fn test_repeated_calls_agree() {
    for year in [-2100, -1, 0, 1, 1600, 1900, 2023, 2024] {
        let first = is_leap_year(year);
        for _ in 0..3 {
            assert_eq!(is_leap_year(year), first);
        }
    }
}

#[test]
fn test_matches_chrono_calendar() {
    // chrono covers roughly +/-262000 years
    for year in -5000..=5000_i32 {
        let has_feb_29 = NaiveDate::from_ymd_opt(year, 2, 29).is_some();
        assert_eq!(is_leap_year(i64::from(year)), has_feb_29, "year {}", year);
    }
}

#[test]
fn test_parsed_input_feeds_predicate() {
    let year = parse_year("  1900 ").unwrap();
    assert_eq!(classify(year.value()), LeapRule::CenturyException);

    let err = parse_year("1900.0").unwrap_err();
    assert!(matches!(err, LeapError::InvalidArgument { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_float_years_must_be_integral() {
    assert!(Year::try_from(2024.0).unwrap().is_leap());
    assert!(Year::try_from(2024.25).is_err());
    assert!(Year::try_from(f64::NEG_INFINITY).is_err());
}
