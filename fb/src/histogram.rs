//! Mood distribution aggregation
//!
//! Pure function from entries to a dense 5-bucket histogram. The output is
//! always all five buckets in mood-ascending order so chart rendering stays
//! stable regardless of which moods are present.

use crate::entry::{FeedbackEntry, Mood};

/// One histogram bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodBucket {
    /// Mood value in [1,5]
    pub mood: u8,
    /// Fixed display label for this level
    pub label: &'static str,
    /// Number of entries at this level
    pub count: usize,
}

/// Count entries per mood level
///
/// Entries with a mood outside [1,5] are excluded from every bucket; they
/// should not exist given entry-creation invariants, but stored data is not
/// trusted here.
pub fn mood_histogram(entries: &[FeedbackEntry]) -> [MoodBucket; 5] {
    let mut counts = [0usize; 5];
    for entry in entries {
        if let Some(mood) = entry.mood_level() {
            counts[(mood.value() - 1) as usize] += 1;
        }
    }

    Mood::ALL.map(|mood| MoodBucket {
        mood: mood.value(),
        label: mood.label(),
        count: counts[(mood.value() - 1) as usize],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn entry(mood: u8) -> FeedbackEntry {
        FeedbackEntry {
            id: uuid::Uuid::now_v7().to_string(),
            mood,
            comment: "comment".to_string(),
            timestamp: 0,
        }
    }

    #[test]
    fn test_empty_input_yields_all_zero_buckets() {
        let histogram = mood_histogram(&[]);
        assert_eq!(histogram.len(), 5);
        for (i, bucket) in histogram.iter().enumerate() {
            assert_eq!(bucket.mood, (i + 1) as u8);
            assert_eq!(bucket.count, 0);
        }
    }

    #[test]
    fn test_counts_match_entries() {
        let entries = vec![entry(4), entry(2), entry(5), entry(3)];
        let histogram = mood_histogram(&entries);
        let counts: Vec<usize> = histogram.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![0, 1, 1, 1, 1]);
    }

    #[test]
    fn test_labels_are_fixed_and_ascending() {
        let histogram = mood_histogram(&[]);
        let labels: Vec<&str> = histogram.iter().map(|b| b.label).collect();
        assert_eq!(labels, vec!["Awful", "Bad", "Okay", "Good", "Great"]);
    }

    #[test]
    fn test_out_of_range_moods_are_excluded() {
        let entries = vec![entry(0), entry(6), entry(99), entry(3)];
        let histogram = mood_histogram(&entries);
        let total: usize = histogram.iter().map(|b| b.count).sum();
        assert_eq!(total, 1);
        assert_eq!(histogram[2].count, 1);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let entries = vec![entry(1), entry(1), entry(5)];
        assert_eq!(mood_histogram(&entries), mood_histogram(&entries));
    }

    proptest! {
        #[test]
        fn prop_bucket_sum_never_exceeds_entry_count(moods in proptest::collection::vec(0u8..=10, 0..50)) {
            let entries: Vec<FeedbackEntry> = moods.iter().map(|&m| entry(m)).collect();
            let histogram = mood_histogram(&entries);
            let total: usize = histogram.iter().map(|b| b.count).sum();
            let in_range = moods.iter().filter(|&&m| (1..=5).contains(&m)).count();
            prop_assert!(total <= entries.len());
            prop_assert_eq!(total, in_range);
        }

        #[test]
        fn prop_each_bucket_counts_exactly_its_mood(moods in proptest::collection::vec(1u8..=5, 0..50)) {
            let entries: Vec<FeedbackEntry> = moods.iter().map(|&m| entry(m)).collect();
            let histogram = mood_histogram(&entries);
            for bucket in &histogram {
                let expected = entries.iter().filter(|e| e.mood == bucket.mood).count();
                prop_assert_eq!(bucket.count, expected);
            }
        }
    }
}
