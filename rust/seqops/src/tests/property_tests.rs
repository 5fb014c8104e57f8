use ahash::AHashSet;

use crate::{SequenceExt, text};

fn random_values(max_len: usize, max_value: i64) -> Vec<i64> {
    let len = fastrand::usize(0..=max_len);
    (0..len).map(|_| fastrand::i64(-max_value..=max_value)).collect()
}

fn random_word(alphabet: &[char], max_len: usize) -> String {
    let len = fastrand::usize(0..=max_len);
    (0..len)
        .map(|_| alphabet[fastrand::usize(..alphabet.len())])
        .collect()
}

#[test]
fn test_filter_then_all_holds() {
    fastrand::seed(684217);
    for _ in 0..200 {
        let values = random_values(40, 50);
        let threshold = fastrand::i64(-60..=60);
        let predicate = |x: &i64| *x > threshold;
        let filtered = values.filter_by(predicate);
        assert!(filtered.all(predicate));
        assert_eq!(filtered.len(), values.iter().filter(|x| predicate(*x)).count());
    }
}

#[test]
fn test_select_identity_preserves_sequence() {
    fastrand::seed(99112);
    for _ in 0..100 {
        let values = random_values(30, 1000);
        assert_eq!(values.select(|x, _| *x), values);
    }
}

#[test]
fn test_distinct_by_is_unique_and_idempotent() {
    fastrand::seed(3341);
    for _ in 0..200 {
        let values = random_values(50, 20);
        let key = |x: &i64| x.rem_euclid(7);

        let once = values.distinct_by(key);
        let keys: AHashSet<i64> = once.iter().map(key).collect();
        assert_eq!(keys.len(), once.len());
        assert_eq!(once.distinct_by(key), once);

        let plain = values.distinct();
        assert_eq!(plain.distinct(), plain);
        assert_eq!(plain, values.distinct_by(|x| *x));
    }
}

#[test]
fn test_join_then_split_recovers_items() {
    fastrand::seed(5150);
    for _ in 0..100 {
        let count = fastrand::usize(1..10);
        let items: Vec<String> = (0..count)
            .map(|_| random_word(&['a', 'b', 'c'], 6))
            .collect();
        let joined = text::join("|", &items);
        let split: Vec<&str> = joined.split('|').collect();
        assert_eq!(split, items);
    }
}

#[test]
fn test_replace_all_never_rescans_replacement() {
    fastrand::seed(2718);
    for _ in 0..200 {
        let subject = random_word(&['a', 'b'], 20);
        let from = random_word(&['a', 'b'], 2);
        if from.is_empty() {
            continue;
        }
        let to = format!("{from}{from}x");
        let matches = subject.matches(from.as_str()).count();
        let replaced = text::replace_all(&subject, &from, &to);
        assert_eq!(
            replaced.len(),
            subject.len() + matches * (to.len() - from.len())
        );
        assert_eq!(replaced.matches('x').count(), matches);
    }
}

#[test]
fn test_sum_matches_iterator_sum() {
    fastrand::seed(42);
    for _ in 0..100 {
        let values = random_values(64, 1_000_000);
        assert_eq!(values.sum(), values.iter().sum::<i64>());
        if !values.is_empty() {
            let expected = values.iter().sum::<i64>() as f64 / values.len() as f64;
            assert_eq!(values.average(), expected);
        }
    }
}
