//! Integration tests for the month grid builder.

use lb_core::Year;
use lb_reminder::{
    build_month_grid, build_month_grid_with, BirthdayRecord, MonthGrid, GRID_CELLS, GRID_YEARS,
};
use lb_time::date::days_in_month;
use lb_time::lunar::supported_solar_range;
use lb_time::{Date, LunarDate, NoHolidays};
use proptest::prelude::*;

fn date(y: Year, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn record(id: &str, month: u8, day: u8) -> BirthdayRecord {
    BirthdayRecord {
        id: id.to_owned(),
        name: id.to_owned(),
        relationship: String::new(),
        lunar_birth: LunarDate::new(1988, month, day),
    }
}

fn birthday_dates(grid: &MonthGrid<'_>, id: &str) -> Vec<Date> {
    grid.cells()
        .iter()
        .filter(|c| c.occurrences_on_this_day.iter().any(|r| r.id == id))
        .map(|c| c.solar_date)
        .collect()
}

#[test]
fn twelfth_month_birthday_in_january_comes_from_the_previous_lunar_year() {
    // Lunar 2023's 12/15 is 2024-01-25.
    let records = [record("winter", 12, 15)];
    let grid = build_month_grid(2024, 1, &records, true).unwrap();
    assert_eq!(birthday_dates(&grid, "winter"), [date(2024, 1, 25)]);
}

#[test]
fn day_thirty_lands_on_the_last_day_of_a_short_month() {
    // Lunar 2025's twelfth month ends on its 29th, 2026-02-16.
    let records = [record("thirty", 12, 30)];
    let grid = build_month_grid(2026, 2, &records, true).unwrap();
    assert_eq!(birthday_dates(&grid, "thirty"), [date(2026, 2, 16)]);
    assert_eq!(grid.cell(date(2026, 2, 16)).unwrap().holiday_label(), Some("除夕"));
}

#[test]
fn padding_never_shows_birthdays() {
    // Lunar 8/28 is 2024-09-30, a padding cell of the October grid.
    let records = [record("pad", 8, 28)];
    let grid = build_month_grid(2024, 10, &records, true).unwrap();
    assert!(!grid.cell(date(2024, 9, 30)).unwrap().belongs_to_displayed_month);
    assert!(birthday_dates(&grid, "pad").is_empty());
}

#[test]
fn a_bad_record_does_not_blank_the_grid() {
    let records = [record("bad", 13, 1), record("ok", 8, 15)];
    let grid = build_month_grid(2024, 9, &records, true).unwrap();
    assert_eq!(grid.cells().len(), GRID_CELLS);
    assert!(birthday_dates(&grid, "bad").is_empty());
    assert_eq!(birthday_dates(&grid, "ok"), [date(2024, 9, 17)]);
}

#[test]
fn several_people_on_one_day_keep_input_order() {
    let records = [record("b", 8, 15), record("x", 1, 1), record("a", 8, 15)];
    let grid = build_month_grid(2024, 9, &records, true).unwrap();
    let ids: Vec<&str> = grid
        .cell(date(2024, 9, 17))
        .unwrap()
        .occurrences_on_this_day
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(ids, ["b", "a"]);
}

#[test]
fn every_supported_year_has_a_full_january_and_december() {
    for year in [*GRID_YEARS.start(), *GRID_YEARS.end()] {
        for month in [1, 12] {
            let grid = build_month_grid(year, month, &[], true).unwrap();
            assert_eq!(grid.cells().len(), GRID_CELLS, "{year}-{month:02}");
        }
    }
    assert!(build_month_grid(GRID_YEARS.start() - 1, 12, &[], true).is_err());
    assert!(build_month_grid(GRID_YEARS.end() + 1, 1, &[], true).is_err());
}

#[test]
fn holidays_can_be_switched_off() {
    let shown = build_month_grid(2024, 10, &[], true).unwrap();
    let hidden = build_month_grid_with(2024, 10, &[], &NoHolidays).unwrap();
    assert_eq!(shown.cell(date(2024, 10, 1)).unwrap().holiday_label(), Some("国庆节"));
    assert!(hidden.days_in_month().all(|c| c.holiday.is_none()));
    // Lunar labels do not depend on the holiday switch.
    let labels = |g: &MonthGrid<'_>| -> Vec<Option<String>> {
        g.cells().iter().map(|c| c.lunar_label.clone()).collect()
    };
    assert_eq!(labels(&shown), labels(&hidden));
}

#[test]
fn building_twice_gives_the_same_grid() {
    let records = [record("a", 1, 1), record("b", 12, 30), record("c", 5, 5)];
    for month in 1..=12 {
        let first = build_month_grid(2025, month, &records, true).unwrap();
        let second = build_month_grid(2025, month, &records, true).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn serializes_for_the_view_layer() {
    let records = [record("a", 8, 15)];
    let grid = build_month_grid(2024, 9, &records, true).unwrap();
    let json = serde_json::to_value(&grid).unwrap();
    let cell = &json["cells"][16];
    assert_eq!(cell["solarDate"], "2024-09-17");
    assert_eq!(cell["belongsToDisplayedMonth"], true);
    assert_eq!(cell["lunarLabel"], "十五");
    assert_eq!(cell["holiday"]["festival"], "midAutumnFestival");
    assert_eq!(cell["occurrencesOnThisDay"][0]["id"], "a");
}

proptest! {
    /// Shape of every grid, including the first and last supported months.
    #[test]
    fn grid_shape(year in GRID_YEARS, month in 1u8..=12) {
        let grid = build_month_grid(year, month, &[], true).unwrap();
        prop_assert_eq!(grid.cells().len(), GRID_CELLS);
        prop_assert_eq!(grid.days_in_month().count(), usize::from(days_in_month(year, month)));
        prop_assert!(grid.cells().windows(2).all(|w| w[0].solar_date.days_until(w[1].solar_date) == 1));
        prop_assert_eq!(grid.cells()[0].solar_date.weekday().sunday_based_index(), 0);
        let first_in_month = grid.days_in_month().next().unwrap();
        prop_assert_eq!(first_in_month.solar_date, date(year, month, 1));
        let table = supported_solar_range();
        prop_assert!(grid
            .days_in_month()
            .all(|c| c.lunar_label.is_some() == table.contains(&c.solar_date)));
    }

    /// Every valid anniversary shows up at most once a month, on a day whose
    /// lunar date matches it.
    #[test]
    fn birthdays_match_their_lunar_date(year in 1901i32..=2099, month in 1u8..=12, m in 1u8..=12, d in 1u8..=30) {
        let records = [record("p", m, d)];
        let grid = build_month_grid(year, month, &records, false).unwrap();
        let hits: Vec<_> = grid.days_in_month().filter(|c| c.has_birthdays()).collect();
        prop_assert!(hits.len() <= 1);
        if let Some(cell) = hits.first() {
            let lunar = cell.lunar_date.unwrap();
            prop_assert!(!lunar.is_leap_month);
            prop_assert_eq!(lunar.month, m);
            prop_assert!(lunar.day == d || (d == 30 && lunar.day == 29));
        }
    }
}
