use chrono::Utc;
use sha2::{Digest, Sha256};

use crate::collection::types::{HeroCollection, HeroRecord};

/// The selection key for the current day: the UTC calendar date formatted
/// as `YYYY-MM-DD`.
pub fn today_utc_key() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// Maps a date key to an index into a collection of `len` records.
///
/// SHA-256 over the UTF-8 date string; the first 16 digest bytes are
/// interpreted as a big-endian unsigned 128-bit integer and reduced modulo
/// `len`. Must only be called with `len > 0`.
pub fn daily_index(date: &str, len: usize) -> usize {
    debug_assert!(len > 0);
    let digest = Sha256::digest(date.as_bytes());
    let mut prefix = [0u8; 16];
    prefix.copy_from_slice(&digest[..16]);
    (u128::from_be_bytes(prefix) % len as u128) as usize
}

/// Returns the record every client should see on `date`, or `None` while
/// the collection is empty.
pub fn pick_for_date<'a>(collection: &'a HeroCollection, date: &str) -> Option<&'a HeroRecord> {
    if collection.is_empty() {
        return None;
    }
    collection.get(daily_index(date, collection.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn collection_of(names: &[&str]) -> HeroCollection {
        HeroCollection::new(
            names
                .iter()
                .map(|name| HeroRecord(json!({ "name": name })))
                .collect(),
        )
    }

    #[test]
    fn test_daily_index_is_deterministic() {
        let first = daily_index("2024-01-01", 3);
        for _ in 0..100 {
            assert_eq!(daily_index("2024-01-01", 3), first);
        }
    }

    #[test]
    fn test_daily_index_pinned_vectors() {
        // Pinned digest: SHA-256, first 16 bytes, big-endian. These vectors
        // must never change for an existing deployment's picks to survive
        // upgrades.
        assert_eq!(daily_index("2024-01-01", 3), 1);
        assert_eq!(daily_index("2024-01-02", 3), 2);
        assert_eq!(daily_index("2024-06-15", 5), 3);
        assert_eq!(daily_index("2025-12-31", 7), 0);
    }

    #[test]
    fn test_daily_index_is_within_range() {
        for year in 2020..2030 {
            for month in 1..=12 {
                let date = format!("{:04}-{:02}-01", year, month);
                assert!(daily_index(&date, 7) < 7);
                assert_eq!(daily_index(&date, 1), 0);
            }
        }
    }

    #[test]
    fn test_daily_index_distribution() {
        // Sample ten years of dates against a 7-record collection and check
        // every index gets picked with a roughly fair share.
        let n = 7usize;
        let mut counts = vec![0u32; n];
        let mut total = 0u32;

        for year in 2000..2010 {
            for month in 1..=12u32 {
                for day in 1..=28u32 {
                    let date = format!("{:04}-{:02}-{:02}", year, month, day);
                    counts[daily_index(&date, n)] += 1;
                    total += 1;
                }
            }
        }

        let expected = total / n as u32;
        for (index, count) in counts.iter().enumerate() {
            assert!(
                *count > expected / 2 && *count < expected * 2,
                "Index {} picked {} times, expected around {}",
                index,
                count,
                expected
            );
        }
    }

    #[test]
    fn test_pick_for_date_concrete_scenario() {
        // [A, B, C] with "2024-01-01": the pinned digest lands on index 1.
        let collection = collection_of(&["A", "B", "C"]);

        let pick = pick_for_date(&collection, "2024-01-01").unwrap();
        assert_eq!(pick.0, json!({ "name": "B" }));
    }

    #[test]
    fn test_pick_for_date_empty_collection_is_none() {
        let collection = HeroCollection::default();

        assert!(pick_for_date(&collection, "2024-01-01").is_none());
    }

    #[test]
    fn test_pick_may_move_when_collection_resizes() {
        // Same date, different sizes: the index is only a function of the
        // (date, size) pair.
        let small = collection_of(&["A", "B", "C"]);
        let large = collection_of(&["A", "B", "C", "D", "E"]);

        let pick_small = pick_for_date(&small, "2024-06-15").unwrap();
        let pick_large = pick_for_date(&large, "2024-06-15").unwrap();

        assert_eq!(pick_small.0, json!({ "name": "C" }));
        assert_eq!(pick_large.0, json!({ "name": "D" }));
    }

    #[test]
    fn test_today_utc_key_shape() {
        let key = today_utc_key();

        assert_eq!(key.len(), 10);
        assert_eq!(&key[4..5], "-");
        assert_eq!(&key[7..8], "-");
    }
}
