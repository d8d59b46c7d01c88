//! Tag frequency counting across records.

use std::collections::HashMap;

use crate::domain::{HashtagCount, MentionRecord};

/// Flatten the tags of every item, count occurrences and keep the `n` most
/// frequent. Ties keep first-seen order. Items without tags contribute nothing.
pub fn top_tags_by<'a, T, I, F>(items: &'a [T], n: usize, tags: F) -> Vec<HashtagCount>
where
    F: Fn(&'a T) -> I,
    I: IntoIterator<Item = &'a str>,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for tag in items.iter().flat_map(tags) {
        match index.get(tag) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                index.insert(tag, counts.len());
                counts.push((tag, 1));
            }
        }
    }

    // stable: equal counts stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(n);
    counts
        .into_iter()
        .map(|(tag, count)| HashtagCount {
            tag: tag.to_string(),
            count,
        })
        .collect()
}

pub fn trending_hashtags(mentions: &[MentionRecord], n: usize) -> Vec<HashtagCount> {
    top_tags_by(mentions, n, |m| m.hashtags.iter().map(String::as_str))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::tagged;

    fn counts(result: &[HashtagCount]) -> Vec<(&str, usize)> {
        result.iter().map(|h| (h.tag.as_str(), h.count)).collect()
    }

    #[test]
    fn test_trending_hashtags_basic_ordering() {
        let mentions = vec![tagged("1", &["a", "b"]), tagged("2", &["a"])];
        let trending = trending_hashtags(&mentions, 8);
        assert_eq!(counts(&trending), vec![("a", 2), ("b", 1)]);
    }

    #[test]
    fn test_trending_hashtags_ties_first_seen() {
        let mentions = vec![
            tagged("1", &["rust", "launch"]),
            tagged("2", &[]),
            tagged("3", &["launch", "rust", "bug"]),
            tagged("4", &["bug"]),
        ];
        let trending = trending_hashtags(&mentions, 8);
        assert_eq!(
            counts(&trending),
            vec![("rust", 2), ("launch", 2), ("bug", 2)]
        );
    }

    #[test]
    fn test_trending_hashtags_truncates() {
        let mentions = vec![tagged("1", &["a", "b", "c", "d"]), tagged("2", &["d"])];
        let trending = trending_hashtags(&mentions, 2);
        assert_eq!(counts(&trending), vec![("d", 2), ("a", 1)]);
    }

    #[test]
    fn test_trending_hashtags_all_empty() {
        let mentions = vec![tagged("1", &[]), tagged("2", &[])];
        assert!(trending_hashtags(&mentions, 8).is_empty());
    }

    #[test]
    fn test_trending_counts_unaffected_by_record_order() {
        let forward = vec![
            tagged("1", &["x", "y"]),
            tagged("2", &["y"]),
            tagged("3", &["z"]),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        let forward_trending = trending_hashtags(&forward, 8);
        let reversed_trending = trending_hashtags(&reversed, 8);
        let mut a = counts(&forward_trending);
        let mut b = counts(&reversed_trending);
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }
}
