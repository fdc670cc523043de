//! Group-and-summarize helper shared by every report breakdown.

use std::collections::HashMap;
use std::hash::Hash;

use rust_decimal::Decimal;

use crate::utils::{percentage_of, round_display};

/// One bucket of a breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSummary<K> {
    pub key: K,
    /// Sum of the bucket's values, rounded for display.
    pub total: Decimal,
    pub count: usize,
    /// Share of the grand total, rounded independently per bucket.
    pub percentage: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupOrder {
    TotalDescending,
    KeyAscending,
}

/// Buckets `items` by `key_fn`, summing `value_fn` per bucket.
///
/// Percentages are taken against `grand_total` (zero when it is zero).
/// Ties keep first-seen order.
pub fn summarize_groups<T, K, FK, FV>(
    items: &[T],
    key_fn: FK,
    value_fn: FV,
    grand_total: Decimal,
    order: GroupOrder,
) -> Vec<GroupSummary<K>>
where
    K: Eq + Hash + Ord + Clone,
    FK: Fn(&T) -> K,
    FV: Fn(&T) -> Decimal,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<GroupSummary<K>> = Vec::new();

    for item in items {
        let key = key_fn(item);
        let value = value_fn(item);
        match positions.get(&key) {
            Some(&index) => {
                groups[index].total += value;
                groups[index].count += 1;
            }
            None => {
                positions.insert(key.clone(), groups.len());
                groups.push(GroupSummary {
                    key,
                    total: value,
                    count: 1,
                    percentage: Decimal::ZERO,
                });
            }
        }
    }

    match order {
        GroupOrder::TotalDescending => groups.sort_by(|a, b| b.total.cmp(&a.total)),
        GroupOrder::KeyAscending => groups.sort_by(|a, b| a.key.cmp(&b.key)),
    }

    for group in &mut groups {
        group.percentage = percentage_of(group.total, grand_total);
        group.total = round_display(group.total);
    }
    groups
}
