#[cfg(test)]
mod tests {
    use crate::time::{format_time_12h, time_slots};
    use proptest::prelude::*;

    proptest! {
        // Every slot label the generator produces must render in
        // 12-hour notation
        #[test]
        fn test_every_generated_slot_renders(index in 0..96usize) {
            let slots = time_slots();
            let rendered = format_time_12h(&slots[index]);
            prop_assert!(
                rendered.is_ok(),
                "Slot {} failed to render: {:?}",
                slots[index],
                rendered
            );
        }

        // The suffix flips exactly at noon
        #[test]
        fn test_suffix_tracks_the_half_of_day(hour in 0..24u32, minute in 0..60u32) {
            let label = format!("{:02}:{:02}", hour, minute);
            let rendered = format_time_12h(&label).unwrap();
            if hour < 12 {
                prop_assert!(rendered.ends_with("AM"), "{} rendered as {}", label, rendered);
            } else {
                prop_assert!(rendered.ends_with("PM"), "{} rendered as {}", label, rendered);
            }
        }

        // The displayed hour stays on the 12-hour clock and the minute
        // passes through unchanged
        #[test]
        fn test_display_hour_stays_on_the_12_hour_clock(hour in 0..24u32, minute in 0..60u32) {
            let label = format!("{:02}:{:02}", hour, minute);
            let rendered = format_time_12h(&label).unwrap();
            let display_hour: u32 = rendered[0..2].parse().unwrap();
            prop_assert!(
                (1..=12).contains(&display_hour),
                "{} rendered as {}",
                label,
                rendered
            );
            let display_minute: u32 = rendered[3..5].parse().unwrap();
            prop_assert_eq!(display_minute, minute);
        }

        // Numeric labels past the end of the day are rejected
        #[test]
        fn test_hours_past_the_day_are_rejected(hour in 24..100u32, minute in 0..60u32) {
            let label = format!("{:02}:{:02}", hour, minute);
            prop_assert!(format_time_12h(&label).is_err(), "{} should be rejected", label);
        }
    }
}
