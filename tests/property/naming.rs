//! File and directory naming properties

use proptest::prelude::*;
use synthfs::tree::naming::{parse_encoded_size, size_width, FileRecord, NameClock};
use synthfs::units::{format_bytes, parse_size};

proptest! {
    #[test]
    fn test_file_name_encodes_size(seq in 1u32..=9999, max in 0u64..u64::MAX / 2, frac in 0.0f64..1.0) {
        let size = (max as f64 * frac) as u64;
        let size = size.min(max);
        let name = FileRecord::new(seq, size).file_name(max);
        prop_assert_eq!(parse_encoded_size(&name), Some(size));
        prop_assert_eq!(name.len(), 4 + size_width(max) + ".file".len());
    }

    #[test]
    fn test_names_sort_like_sizes_within_a_spec(max in 1u64..1_000_000, a in 0u64..1_000_000, b in 0u64..1_000_000) {
        let (a, b) = (a.min(max), b.min(max));
        let na = FileRecord::new(1, a).file_name(max);
        let nb = FileRecord::new(1, b).file_name(max);
        prop_assert_eq!(na.cmp(&nb), a.cmp(&b));
    }

    #[test]
    fn test_clock_tags_strictly_increase(start in 0u64..u64::MAX / 2, steps in 1usize..200) {
        let mut clock = NameClock::starting_at(start);
        let mut last = clock.next_tag();
        prop_assert_eq!(last, start);
        for _ in 0..steps {
            let next = clock.next_tag();
            prop_assert!(next > last);
            last = next;
        }
    }

    #[test]
    fn test_formatted_bytes_parse_back_close(bytes in 0u64..(1u64 << 50)) {
        let text = format_bytes(bytes);
        let parsed = parse_size(&text).unwrap();
        let tolerance = (bytes / 100).max(1);
        prop_assert!(parsed.abs_diff(bytes) <= tolerance, "{} -> {} -> {}", bytes, text, parsed);
    }
}
