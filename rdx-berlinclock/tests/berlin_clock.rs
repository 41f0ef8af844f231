//! End-to-end behaviour of the Berlin Clock face.
//!
//! The input domain is small enough (86 400 times) that the lamp-counting
//! properties are checked exhaustively rather than sampled.

use berlinclock::prelude::*;

fn lines(rows: [&str; 5]) -> String {
    rows.join(LINE_SEPARATOR)
}

fn read(input: &str) -> String {
    let converter: TimeConverter = TimeConverter::default();
    converter.convert_time(input).unwrap()
}

#[test]
fn midnight() {
    assert_eq!(
        read("00:00:00"),
        lines(["Y", "OOOO", "OOOO", "OOOOOOOOOOO", "OOOO"])
    );
}

#[test]
fn last_second_of_the_day() {
    assert_eq!(
        read("23:59:59"),
        lines(["O", "RRRR", "RRRO", "YYRYYRYYRYY", "YYYY"])
    );
}

#[test]
fn afternoon_with_odd_second() {
    assert_eq!(
        read("13:17:01"),
        lines(["O", "RROO", "RRRO", "YYROOOOOOOO", "YYOO"])
    );
}

#[test]
fn middle_of_the_day() {
    assert_eq!(
        read("12:56:01"),
        lines(["O", "RROO", "RROO", "YYRYYRYYRYY", "YOOO"])
    );
}

#[test]
fn invalid_inputs_produce_no_display() {
    let converter: TimeConverter = TimeConverter::default();
    for input in ["25:61:00", "not-a-time", "24:00:00", "12:00", "12:00:00\n"] {
        let err = converter.convert_time(input).unwrap_err();
        assert_eq!(err.input, input);
        assert!(err
            .to_string()
            .ends_with("Expected format is HH:mm:ss and range must be between 00:00:00 and 23:59:59"));
    }
}

#[test]
fn output_uses_only_lamp_symbols() {
    let output = read("17:43:22");
    assert_eq!(output.lines().count(), 5);
    assert!(output
        .lines()
        .all(|line| line.chars().all(|c| matches!(c, 'Y' | 'R' | 'O'))));
}

#[test]
fn hour_rows_encode_every_hour() {
    for hour in 0..24u8 {
        let display = render(hour, 0, 0);
        let blocks = display.hours_blocks().count(Lamp::Red);
        let units = display.hours_units().count(Lamp::Red);
        assert_eq!(blocks, usize::from(hour / 5), "hour {hour}");
        assert_eq!(units, usize::from(hour % 5), "hour {hour}");
        assert_eq!(5 * blocks + units, usize::from(hour), "hour {hour}");
        assert_eq!(display.hours_blocks().count(Lamp::Yellow), 0);
        assert_eq!(display.hours_units().count(Lamp::Yellow), 0);
    }
}

#[test]
fn minute_rows_encode_every_minute() {
    for minute in 0..60u8 {
        let display = render(0, minute, 0);
        let blocks = display.minutes_blocks();
        let units = display.minutes_units();

        assert_eq!(
            5 * blocks.lit_count() + units.lit_count(),
            usize::from(minute),
            "minute {minute}"
        );
        assert_eq!(units.count(Lamp::Red), 0, "minute {minute}");

        for (i, lamp) in blocks.lamps().iter().enumerate() {
            let position = i + 1;
            let expected = if position > blocks.lit_count() {
                Lamp::Off
            } else if position % 3 == 0 {
                Lamp::Red
            } else {
                Lamp::Yellow
            };
            assert_eq!(*lamp, expected, "minute {minute}, lamp {position}");
        }
    }
}

#[test]
fn seconds_lamp_is_yellow_iff_even() {
    for second in 0..60u8 {
        let lamp = render(0, 0, second).seconds().lamps()[0];
        let expected = if second % 2 == 0 { Lamp::Yellow } else { Lamp::Off };
        assert_eq!(lamp, expected, "second {second}");
    }
}

#[test]
fn every_time_renders_fixed_row_lengths_deterministically() {
    for hour in 0..24u8 {
        for minute in 0..60u8 {
            for second in 0..60u8 {
                let time = ClockTime::new(hour, minute, second).unwrap();
                let first = BerlinClock.render(&time);
                let lengths = first.rows().map(|row| row.len());
                assert_eq!(lengths, [1, 4, 4, 11, 4]);
                assert_eq!(first, render(hour, minute, second));
            }
        }
    }
}

#[test]
fn parsed_time_matches_structured_time() {
    let parsed: ClockTime = "09:45:30".parse().unwrap();
    assert_eq!(parsed, ClockTime::new(9, 45, 30).unwrap());
    assert_eq!(
        BerlinClock.read_time(&parsed),
        lines(["Y", "ROOO", "RRRR", "YYRYYRYYROO", "OOOO"])
    );
}
