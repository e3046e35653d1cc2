//! The matching rule and the exhaustive set search.
//!
//! Three cards form a valid match when, for every attribute independently,
//! their values are either all equal or all different. Exactly two equal
//! values in any attribute breaks the match.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::triple::Triple;
use crate::cards::{Attribute, Features, SetCard};
use crate::core::entity::CardId;

/// Check the rule over attribute tuples.
///
/// Returns `false` unless exactly three tuples are given.
///
/// ```
/// use set_game::cards::Features;
/// use set_game::rules::features_match;
///
/// let all_differ = [
///     Features::new(1, 0, 0, 0),
///     Features::new(2, 1, 1, 1),
///     Features::new(3, 2, 2, 2),
/// ];
/// assert!(features_match(&all_differ));
///
/// let two_red = [
///     Features::new(1, 0, 0, 0),
///     Features::new(2, 0, 0, 0),
///     Features::new(3, 0, 0, 1),
/// ];
/// assert!(!features_match(&two_red));
/// ```
#[must_use]
pub fn features_match(features: &[Features]) -> bool {
    if features.len() != 3 {
        return false;
    }

    Attribute::ALL.iter().all(|&attribute| {
        let distinct: FxHashSet<u8> = features.iter().map(|f| f.value(attribute)).collect();
        distinct.len() != 2
    })
}

/// Check the rule over cards.
///
/// Returns `false` unless exactly three cards are given. Only attributes are
/// inspected; transient flags are ignored.
pub fn is_valid_match<'a, I>(cards: I) -> bool
where
    I: IntoIterator<Item = &'a SetCard>,
{
    // Stop collecting after four, that is already too many.
    let features: SmallVec<[Features; 4]> =
        cards.into_iter().take(4).map(SetCard::features).collect();
    features_match(&features)
}

/// Find the first valid triple on the table.
///
/// Scans indices `i < j < k` in nested order and returns the ids of the first
/// match, in discovery order. O(n^3) with no caching; tables stay small.
#[must_use]
pub fn find_matching_set(table: &[SetCard]) -> Option<Triple<CardId>> {
    let n = table.len();
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                let (a, b, c) = (&table[i], &table[j], &table[k]);
                if features_match(&[a.features(), b.features(), c.features()]) {
                    return Some(Triple::new(a.id(), b.id(), c.id()));
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u32, s: u8, sh: u8, sd: u8, c: u8) -> SetCard {
        SetCard::new(CardId(id), Features::new(s, sh, sd, c))
    }

    #[test]
    fn test_all_same_except_one_all_different() {
        let cards = [card(0, 1, 0, 0, 0), card(1, 2, 0, 0, 0), card(2, 3, 0, 0, 0)];
        assert!(is_valid_match(&cards));
    }

    #[test]
    fn test_everything_different() {
        let cards = [card(0, 1, 0, 1, 2), card(1, 2, 1, 2, 0), card(2, 3, 2, 0, 1)];
        assert!(is_valid_match(&cards));
    }

    #[test]
    fn test_two_one_split_fails() {
        let cards = [card(0, 1, 0, 0, 0), card(1, 2, 0, 0, 0), card(2, 3, 0, 0, 1)];
        assert!(!is_valid_match(&cards));
    }

    #[test]
    fn test_wrong_card_count() {
        let cards = [
            card(0, 1, 0, 0, 0),
            card(1, 2, 0, 0, 0),
            card(2, 3, 0, 0, 0),
            card(3, 1, 1, 1, 1),
        ];
        assert!(!is_valid_match(&cards[..0]));
        assert!(!is_valid_match(&cards[..2]));
        assert!(!is_valid_match(&cards));
    }

    #[test]
    fn test_flags_ignored() {
        let mut cards = [card(0, 1, 0, 0, 0), card(1, 2, 0, 0, 0), card(2, 3, 0, 0, 0)];
        cards[0].set_match_result(Some(false));
        cards[1].toggle_selected();
        assert!(is_valid_match(&cards));
    }

    #[test]
    fn test_find_first_in_scan_order() {
        let table = [
            card(10, 1, 0, 0, 0),
            card(11, 1, 1, 1, 1),
            card(12, 2, 0, 0, 0),
            card(13, 3, 0, 0, 0),
            card(14, 2, 1, 1, 1),
            card(15, 3, 1, 1, 1),
        ];
        // (11, 14, 15) is also a match but starts later in the scan.
        assert_eq!(
            find_matching_set(&table),
            Some(Triple::new(CardId(10), CardId(12), CardId(13)))
        );
    }

    #[test]
    fn test_discovery_order_not_sorted() {
        let table = [card(7, 3, 0, 0, 0), card(2, 1, 0, 0, 0), card(5, 2, 0, 0, 0)];
        assert_eq!(
            find_matching_set(&table),
            Some(Triple::new(CardId(7), CardId(2), CardId(5)))
        );
    }

    #[test]
    fn test_find_none() {
        assert_eq!(find_matching_set(&[]), None);
        assert_eq!(find_matching_set(&[card(0, 1, 0, 0, 0), card(1, 2, 0, 0, 0)]), None);

        let table = [card(0, 1, 0, 0, 0), card(1, 2, 0, 0, 0), card(2, 3, 0, 0, 1)];
        assert_eq!(find_matching_set(&table), None);
    }
}
