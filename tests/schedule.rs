#[cfg(test)]
mod tests {
    use sesh::libs::schedule::{generate_slots, to_minutes, to_time_string, ScheduleError};

    #[test]
    fn test_to_minutes_valid() {
        assert_eq!(to_minutes("00:00").unwrap(), 0);
        assert_eq!(to_minutes("09:00").unwrap(), 540);
        assert_eq!(to_minutes("12:30").unwrap(), 750);
        assert_eq!(to_minutes("23:59").unwrap(), 1439);
    }

    #[test]
    fn test_to_minutes_rejects_malformed_input() {
        for input in ["", "9:00", "09:0", "09-00", "24:00", "09:60", "ab:cd", "09:00:00", "-1:00"] {
            assert_eq!(to_minutes(input).unwrap_err(), ScheduleError::Format(input.to_string()), "input: {}", input);
        }
    }

    #[test]
    fn test_to_time_string() {
        assert_eq!(to_time_string(0), "00:00");
        assert_eq!(to_time_string(540), "09:00");
        assert_eq!(to_time_string(750), "12:30");
        assert_eq!(to_time_string(1439), "23:59");
    }

    #[test]
    fn test_round_trip_all_valid_times() {
        for hour in 0..24 {
            for minute in 0..60 {
                let time = format!("{:02}:{:02}", hour, minute);
                assert_eq!(to_time_string(to_minutes(&time).unwrap()), time);
            }
        }
    }

    #[test]
    fn test_generate_slots_standard_day() {
        let slots = generate_slots("09:00", "17:00", 15).unwrap();
        assert_eq!(slots.len(), 32);
        assert_eq!(slots[0].start_time, "09:00");
        assert_eq!(slots[0].end_time, "09:15");
        assert_eq!(slots[31].start_time, "16:45");
        assert_eq!(slots[31].end_time, "17:00");
    }

    #[test]
    fn test_generate_slots_contiguous_and_sized() {
        let slots = generate_slots("08:30", "16:45", 25).unwrap();
        assert_eq!(slots.len(), ((16 * 60 + 45) - (8 * 60 + 30)) / 25);

        for pair in slots.windows(2) {
            assert_eq!(pair[0].end_time, pair[1].start_time);
        }
        for slot in &slots {
            let start = to_minutes(&slot.start_time).unwrap();
            let end = to_minutes(&slot.end_time).unwrap();
            assert_eq!(end - start, 25);
        }
        assert!(to_minutes(&slots.last().unwrap().end_time).unwrap() <= to_minutes("16:45").unwrap());
    }

    #[test]
    fn test_generate_slots_drops_trailing_remainder() {
        // 09:00-10:10 with 30-minute slots leaves 10 minutes over; no
        // partial slot is emitted for them
        let slots = generate_slots("09:00", "10:10", 30).unwrap();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[1].end_time, "10:00");
    }

    #[test]
    fn test_generate_slots_window_smaller_than_one_slot() {
        assert_eq!(generate_slots("09:00", "09:10", 15).unwrap_err(), ScheduleError::EmptyWindow);
    }

    #[test]
    fn test_generate_slots_invalid_window() {
        assert_eq!(generate_slots("09:00", "09:00", 15).unwrap_err(), ScheduleError::InvalidWindow);
        assert_eq!(generate_slots("10:00", "09:00", 15).unwrap_err(), ScheduleError::InvalidWindow);
    }

    #[test]
    fn test_generate_slots_zero_size() {
        assert_eq!(generate_slots("09:00", "17:00", 0).unwrap_err(), ScheduleError::EmptyWindow);
    }

    #[test]
    fn test_generate_slots_deterministic() {
        let first = generate_slots("06:15", "22:00", 45).unwrap();
        let second = generate_slots("06:15", "22:00", 45).unwrap();
        assert_eq!(first, second);
    }
}
