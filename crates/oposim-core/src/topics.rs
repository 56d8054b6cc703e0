//! Topic lists and the lottery draw.
//!
//! A syllabus is an ordered list of numbered topics. It can come from a
//! pasted block of text (one topic per line) or a generated default list.
//! The draw samples topics uniformly without replacement.

use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;
use serde::{Deserialize, Serialize};

/// Syllabus size used when nothing else has been loaded.
pub const DEFAULT_TOPIC_COUNT: u32 = 100;

/// One numbered syllabus topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub number: u32,
    pub name: String,
}

impl Topic {
    pub fn new(number: u32, name: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
        }
    }
}

/// Parse a block of text where each non-blank line is one topic.
///
/// Lines are trimmed and numbered from 1 in order. Returns `None` when the
/// text holds no topic at all.
pub fn parse_text_topics(text: &str) -> Option<Vec<Topic>> {
    let topics: Vec<Topic> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .zip(1u32..)
        .map(|(line, number)| Topic::new(number, line))
        .collect();

    if topics.is_empty() {
        None
    } else {
        Some(topics)
    }
}

/// Generate `count` placeholder topics numbered `1..=count`.
pub fn generate_default_topics(count: u32) -> Vec<Topic> {
    (1..=count)
        .map(|i| Topic::new(i, format!("Tema {i} - Contenido del tema número {i}")))
        .collect()
}

/// Draw `balls_drawn` distinct indices from `0..count`, uniformly at random.
///
/// The sample size is clamped to `count`. Order is the draw order and
/// carries no meaning.
pub fn draw_indices<R: Rng + ?Sized>(count: usize, balls_drawn: usize, rng: &mut R) -> Vec<usize> {
    let amount = balls_drawn.min(count);
    rand::seq::index::sample(rng, count, amount).into_vec()
}

/// Draw topics from `topics`, reproducibly when `seed` is given.
pub fn draw_topics(topics: &[Topic], balls_drawn: usize, seed: Option<u64>) -> Vec<Topic> {
    let indices = match seed {
        Some(seed) => {
            let mut rng = Mcg128Xsl64::seed_from_u64(seed);
            draw_indices(topics.len(), balls_drawn, &mut rng)
        }
        None => draw_indices(topics.len(), balls_drawn, &mut thread_rng()),
    };
    tracing::debug!(pool = topics.len(), drawn = indices.len(), "topics drawn");
    indices.into_iter().map(|i| topics[i].clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn parse_skips_blank_lines_and_trims() {
        let text = "  Intro to law \n\n\tThe Constitution\n   \nFundamental rights\n";
        let topics = parse_text_topics(text).unwrap();
        assert_eq!(
            topics,
            vec![
                Topic::new(1, "Intro to law"),
                Topic::new(2, "The Constitution"),
                Topic::new(3, "Fundamental rights"),
            ]
        );
    }

    #[test]
    fn parse_empty_text_is_none() {
        assert!(parse_text_topics("").is_none());
        assert!(parse_text_topics("   \n \n\t").is_none());
    }

    #[test]
    fn parse_handles_crlf() {
        let topics = parse_text_topics("A\r\nB\r\n").unwrap();
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[1].name, "B");
    }

    #[test]
    fn default_topics_are_numbered_from_one() {
        let topics = generate_default_topics(3);
        assert_eq!(topics.len(), 3);
        assert_eq!(topics[0].number, 1);
        assert_eq!(topics[2].name, "Tema 3 - Contenido del tema número 3");
        assert!(generate_default_topics(0).is_empty());
    }

    #[test]
    fn draw_indices_are_distinct_and_in_range() {
        let mut rng = Mcg128Xsl64::seed_from_u64(7);
        for _ in 0..50 {
            let drawn = draw_indices(20, 5, &mut rng);
            assert_eq!(drawn.len(), 5);
            let unique: HashSet<_> = drawn.iter().copied().collect();
            assert_eq!(unique.len(), 5);
            assert!(drawn.iter().all(|&i| i < 20));
        }
    }

    #[test]
    fn draw_is_clamped_to_pool_size() {
        let mut rng = Mcg128Xsl64::seed_from_u64(1);
        let mut drawn = draw_indices(4, 10, &mut rng);
        drawn.sort_unstable();
        assert_eq!(drawn, vec![0, 1, 2, 3]);
        assert!(draw_indices(0, 3, &mut rng).is_empty());
    }

    #[test]
    fn seeded_draw_is_reproducible() {
        let topics = generate_default_topics(100);
        let a = draw_topics(&topics, 5, Some(42));
        let b = draw_topics(&topics, 5, Some(42));
        assert_eq!(a, b);
        assert_eq!(a.len(), 5);
    }

    #[test]
    fn unseeded_draw_returns_pool_members() {
        let topics = generate_default_topics(10);
        let drawn = draw_topics(&topics, 3, None);
        assert_eq!(drawn.len(), 3);
        assert!(drawn.iter().all(|t| topics.contains(t)));
    }
}
