//! Property tests over the newsroom graph
//!
//! Randomized article distributions, checked against the counting and
//! maximality invariants the scan queries promise.

use proptest::prelude::*;

use masthead_storage::Newsroom;

proptest! {
    #[test]
    fn article_count_equals_the_sum_over_authors(
        counts in proptest::collection::vec(0usize..6, 1..5)
    ) {
        let mut newsroom = Newsroom::new();
        let magazine = newsroom.add_magazine("The Weekly", "News").unwrap();

        let mut authors = Vec::new();
        let mut total = 0;
        for (i, n) in counts.iter().enumerate() {
            let author = newsroom.add_author(format!("Author {i}")).unwrap();
            for j in 0..*n {
                newsroom
                    .add_article(author, magazine, format!("Piece {i} number {j}"))
                    .unwrap();
                total += 1;
            }
            authors.push(author);
        }

        prop_assert_eq!(newsroom.article_count(), total);
        let sum: usize = authors
            .iter()
            .map(|author| newsroom.articles_by(*author).count())
            .sum();
        prop_assert_eq!(sum, total);
    }

    #[test]
    fn top_publisher_count_is_maximal(
        distribution in proptest::collection::vec(0usize..5, 1..6)
    ) {
        let mut newsroom = Newsroom::new();
        let author = newsroom.add_author("Prolific Author").unwrap();
        let magazines: Vec<_> = (0..distribution.len())
            .map(|i| newsroom.add_magazine(format!("Magazine {i}"), "News").unwrap())
            .collect();

        for (magazine, n) in magazines.iter().zip(&distribution) {
            for j in 0..*n {
                newsroom
                    .add_article(author, *magazine, format!("Piece number {j}"))
                    .unwrap();
            }
        }

        let top = newsroom.top_publisher().unwrap();
        let top_count = newsroom.articles_in(top).count();
        for magazine in &magazines {
            prop_assert!(newsroom.articles_in(*magazine).count() <= top_count);
        }
    }
}
