use time::Month;

use super::*;
use crate::explorer::test_support::sample_docs;

fn index() -> GroupedIndex {
    GroupedIndex::build(&sample_docs())
}

#[test]
fn drill_down_and_back_up() {
    let index = index();
    let nav = NavigationState::default();
    assert_eq!(nav.level(), Level::Years);

    let nav = nav.select_year(&index, 2024).unwrap();
    assert_eq!(nav, NavigationState::Months { year: 2024 });

    let nav = nav.select_month(&index, Month::January).unwrap();
    assert_eq!(
        nav,
        NavigationState::Days {
            year: 2024,
            month: Month::January
        }
    );
    assert_eq!(nav.year(), Some(2024));
    assert_eq!(nav.month(), Some(Month::January));

    let nav = nav.back();
    assert_eq!(nav, NavigationState::Months { year: 2024 });
    assert_eq!(nav.month(), None);

    let nav = nav.back();
    assert_eq!(nav, NavigationState::Years);
    assert_eq!(nav.year(), None);
}

#[test]
fn back_at_root_is_a_noop() {
    assert_eq!(NavigationState::Years.back(), NavigationState::Years);
}

#[test]
fn go_home_clears_everything() {
    let nav = NavigationState::Days {
        year: 2024,
        month: Month::February,
    };
    assert_eq!(nav.go_home(), NavigationState::Years);
    assert_eq!(NavigationState::Months { year: 2023 }.go_home(), NavigationState::Years);
}

#[test]
fn unknown_keys_are_rejected() {
    let index = index();
    assert_eq!(
        NavigationState::Years.select_year(&index, 1999),
        Err(NavigationError::UnknownYear(1999))
    );
    assert_eq!(
        NavigationState::Months { year: 2023 }.select_month(&index, Month::January),
        Err(NavigationError::UnknownMonth {
            year: 2023,
            month: Month::January
        })
    );
    let days = NavigationState::Days {
        year: 2024,
        month: Month::February,
    };
    assert!(matches!(
        days.select_day(&index, 15),
        Err(NavigationError::UnknownDay { day: 15, .. })
    ));
}

#[test]
fn transitions_only_fire_from_their_level() {
    let index = index();
    let err = NavigationState::Months { year: 2024 }
        .select_year(&index, 2023)
        .unwrap_err();
    assert_eq!(
        err,
        NavigationError::WrongLevel {
            action: "select year",
            level: Level::Months
        }
    );
    assert!(NavigationState::Years.select_month(&index, Month::January).is_err());
    assert!(NavigationState::Months { year: 2024 }.select_day(&index, 5).is_err());
}

#[test]
fn select_day_keeps_the_level() {
    let index = index();
    let nav = NavigationState::Days {
        year: 2024,
        month: Month::February,
    };
    let key = nav.select_day(&index, 14).unwrap();
    assert_eq!(
        key,
        DayKey {
            year: 2024,
            month: Month::February,
            day: 14
        }
    );
    assert_eq!(nav.level(), Level::Days);
}
