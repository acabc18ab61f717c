use crate::key_bindings::cancel_binding::CancelPolicyKind;
use hotkey_domain::order::open_order::OpenOrder;
use hotkey_domain::order::snapshot::{OrderSide, Price};
use std::mem;
use std::sync::Arc;

const BID: OrderSide = OrderSide::Buy;
const ASK: OrderSide = OrderSide::Sell;

/// Entry of a caller owned collection that a cancel policy can pick
pub trait CancelCandidate {
    /// Entries without a side are never matched by side filtered policies
    fn side(&self) -> Option<OrderSide>;

    /// Entries without a price are skipped by closest and furthest policies
    fn price(&self) -> Option<Price>;
}

impl CancelCandidate for OpenOrder {
    fn side(&self) -> Option<OrderSide> {
        Some(self.side)
    }

    fn price(&self) -> Option<Price> {
        self.price
    }
}

impl<T: CancelCandidate + ?Sized> CancelCandidate for Arc<T> {
    fn side(&self) -> Option<OrderSide> {
        (**self).side()
    }

    fn price(&self) -> Option<Price> {
        (**self).price()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    Nothing,
    Single(usize),
    /// Every entry, or every entry on the specified side
    Every(Option<OrderSide>),
}

impl From<Option<usize>> for Selection {
    fn from(index: Option<usize>) -> Self {
        match index {
            Some(index) => Selection::Single(index),
            None => Selection::Nothing,
        }
    }
}

/// Picks the entries that `kind` cancels and removes them from `entries`.
/// `entries` must be in insertion order, oldest first. Removed entries are returned in their
/// insertion order and the caller is responsible for sending the actual cancel requests.
/// A policy without matching entries selects nothing and leaves `entries` untouched.
pub fn select_and_remove<T: CancelCandidate>(
    kind: CancelPolicyKind,
    entries: &mut Vec<T>,
) -> Vec<T> {
    let selection = select(kind, entries);
    let victims = remove_selected(selection, entries);

    log::trace!(
        "Cancel policy {kind:?} selected {} entries, {} entries left",
        victims.len(),
        entries.len()
    );

    victims
}

fn select<T: CancelCandidate>(kind: CancelPolicyKind, entries: &[T]) -> Selection {
    let newest_first = || entries.iter().enumerate().rev();
    let oldest_first = || entries.iter().enumerate();

    match kind {
        CancelPolicyKind::None => Selection::Nothing,
        CancelPolicyKind::MostRecent => entries.len().checked_sub(1).into(),
        CancelPolicyKind::MostRecentAsk => first_on_side(newest_first(), ASK).into(),
        CancelPolicyKind::MostRecentBid => first_on_side(newest_first(), BID).into(),
        CancelPolicyKind::Oldest => (!entries.is_empty()).then(|| 0_usize).into(),
        CancelPolicyKind::OldestAsk => first_on_side(oldest_first(), ASK).into(),
        CancelPolicyKind::OldestBid => first_on_side(oldest_first(), BID).into(),
        CancelPolicyKind::All => Selection::Every(None),
        CancelPolicyKind::AllAsks => Selection::Every(Some(ASK)),
        CancelPolicyKind::AllBids => Selection::Every(Some(BID)),
        CancelPolicyKind::ClosestAsk => {
            best_priced(newest_first(), ASK, |price, best| price < best).into()
        }
        CancelPolicyKind::ClosestBid => {
            best_priced(newest_first(), BID, |price, best| price > best).into()
        }
        CancelPolicyKind::FurthestAsk => {
            best_priced(oldest_first(), ASK, |price, best| price >= best).into()
        }
        CancelPolicyKind::FurthestBid => {
            best_priced(oldest_first(), BID, |price, best| price <= best).into()
        }
    }
}

fn first_on_side<'a, T: CancelCandidate + 'a>(
    mut scan: impl Iterator<Item = (usize, &'a T)>,
    side: OrderSide,
) -> Option<usize> {
    scan.find(|(_, entry)| entry.side() == Some(side))
        .map(|(index, _)| index)
}

/// The first priced entry on `side` is the initial candidate, every next one replaces the
/// candidate only if `replaces(price, candidate_price)` holds
fn best_priced<'a, T: CancelCandidate + 'a>(
    scan: impl Iterator<Item = (usize, &'a T)>,
    side: OrderSide,
    replaces: impl Fn(Price, Price) -> bool,
) -> Option<usize> {
    let mut best: Option<(usize, Price)> = None;

    for (index, entry) in scan.filter(|(_, entry)| entry.side() == Some(side)) {
        let Some(price) = entry.price() else {
            continue;
        };

        match best {
            Some((_, best_price)) if !replaces(price, best_price) => {}
            _ => best = Some((index, price)),
        }
    }

    best.map(|(index, _)| index)
}

fn remove_selected<T: CancelCandidate>(selection: Selection, entries: &mut Vec<T>) -> Vec<T> {
    match selection {
        Selection::Nothing => Vec::new(),
        Selection::Single(index) => vec![entries.remove(index)],
        Selection::Every(None) => mem::take(entries),
        Selection::Every(Some(side)) => {
            let (victims, kept): (Vec<T>, Vec<T>) = mem::take(entries)
                .into_iter()
                .partition(|entry| entry.side() == Some(side));
            *entries = kept;
            victims
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotkey_domain::order::snapshot::ClientOrderId;
    use itertools::Itertools;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn order(id: &str, side: OrderSide, price: Option<Price>) -> OpenOrder {
        OpenOrder::new(ClientOrderId::from(id), side, price, dec!(100))
    }

    fn ask(id: &str, price: Price) -> OpenOrder {
        order(id, ASK, Some(price))
    }

    fn bid(id: &str, price: Price) -> OpenOrder {
        order(id, BID, Some(price))
    }

    fn ids(orders: &[OpenOrder]) -> Vec<&str> {
        orders.iter().map(|x| x.client_order_id.as_str()).collect_vec()
    }

    fn mixed_orders() -> Vec<OpenOrder> {
        vec![
            bid("b1", dec!(9.95)),
            ask("a1", dec!(10.05)),
            bid("b2", dec!(9.97)),
            ask("a2", dec!(10.03)),
            bid("b3", dec!(9.96)),
        ]
    }

    #[test]
    fn most_recent() {
        let mut orders = vec![bid("A", dec!(1)), ask("B", dec!(2)), bid("C", dec!(3))];

        let victims = select_and_remove(CancelPolicyKind::MostRecent, &mut orders);

        assert_eq!(ids(&victims), ["C"]);
        assert_eq!(ids(&orders), ["A", "B"]);
    }

    #[test]
    fn oldest() {
        let mut orders = vec![bid("A", dec!(1)), ask("B", dec!(2)), bid("C", dec!(3))];

        let victims = select_and_remove(CancelPolicyKind::Oldest, &mut orders);

        assert_eq!(ids(&victims), ["A"]);
        assert_eq!(ids(&orders), ["B", "C"]);
    }

    #[test]
    fn none_selects_nothing() {
        let mut orders = mixed_orders();

        let victims = select_and_remove(CancelPolicyKind::None, &mut orders);

        assert!(victims.is_empty());
        assert_eq!(orders, mixed_orders());
    }

    #[rstest]
    #[case(CancelPolicyKind::MostRecentAsk, "a2")]
    #[case(CancelPolicyKind::MostRecentBid, "b3")]
    #[case(CancelPolicyKind::OldestAsk, "a1")]
    #[case(CancelPolicyKind::OldestBid, "b1")]
    #[case(CancelPolicyKind::ClosestAsk, "a2")]
    #[case(CancelPolicyKind::ClosestBid, "b2")]
    #[case(CancelPolicyKind::FurthestAsk, "a1")]
    #[case(CancelPolicyKind::FurthestBid, "b1")]
    fn side_filtered_policy_removes_single_order(
        #[case] kind: CancelPolicyKind,
        #[case] expected: &str,
    ) {
        let mut orders = mixed_orders();

        let victims = select_and_remove(kind, &mut orders);

        assert_eq!(ids(&victims), [expected]);
        let expected_left = mixed_orders()
            .into_iter()
            .filter(|x| x.client_order_id.as_str() != expected)
            .collect_vec();
        assert_eq!(orders, expected_left);
    }

    #[test]
    fn closest_ask_is_lowest_regardless_of_position() {
        let mut orders = vec![
            ask("oldest", dec!(10.05)),
            ask("middle", dec!(10.01)),
            ask("newest", dec!(10.03)),
        ];

        let victims = select_and_remove(CancelPolicyKind::ClosestAsk, &mut orders);

        assert_eq!(victims[0].price, Some(dec!(10.01)));
        assert_eq!(ids(&orders), ["oldest", "newest"]);
    }

    #[rstest]
    #[case(CancelPolicyKind::ClosestAsk, ASK)]
    #[case(CancelPolicyKind::ClosestBid, BID)]
    #[case(CancelPolicyKind::FurthestAsk, ASK)]
    #[case(CancelPolicyKind::FurthestBid, BID)]
    fn equally_priced_orders_resolve_to_most_recent(
        #[case] kind: CancelPolicyKind,
        #[case] side: OrderSide,
    ) {
        let mut orders = vec![
            order("first", side, Some(dec!(10))),
            order("second", side, Some(dec!(10))),
            order("other side", side.change_side(), Some(dec!(10))),
            order("third", side, Some(dec!(10))),
            order("fourth", side.change_side(), Some(dec!(10))),
        ];

        let victims = select_and_remove(kind, &mut orders);

        assert_eq!(ids(&victims), ["third"]);
        assert_eq!(ids(&orders), ["first", "second", "other side", "fourth"]);
    }

    #[rstest]
    #[case(CancelPolicyKind::ClosestBid, "high")]
    #[case(CancelPolicyKind::FurthestBid, "low")]
    fn bid_price_policies(#[case] kind: CancelPolicyKind, #[case] expected: &str) {
        let mut orders = vec![
            bid("mid", dec!(9.98)),
            bid("high", dec!(9.99)),
            bid("low", dec!(9.90)),
            ask("ask", dec!(10.10)),
        ];

        let victims = select_and_remove(kind, &mut orders);

        assert_eq!(ids(&victims), [expected]);
    }

    #[rstest]
    #[case(CancelPolicyKind::ClosestAsk)]
    #[case(CancelPolicyKind::FurthestAsk)]
    fn unpriced_orders_are_skipped_by_price_policies(#[case] kind: CancelPolicyKind) {
        let mut orders = vec![
            order("market", ASK, None),
            ask("limit", dec!(10.2)),
            order("another market", ASK, None),
        ];

        let victims = select_and_remove(kind, &mut orders);

        assert_eq!(ids(&victims), ["limit"]);
        assert_eq!(ids(&orders), ["market", "another market"]);
    }

    #[test]
    fn price_policy_without_priced_orders_selects_nothing() {
        let mut orders = vec![order("market", BID, None)];

        let victims = select_and_remove(CancelPolicyKind::ClosestBid, &mut orders);

        assert!(victims.is_empty());
        assert_eq!(ids(&orders), ["market"]);
    }

    #[test]
    fn all_bids_keeps_relative_order() {
        let mut orders = mixed_orders();

        let victims = select_and_remove(CancelPolicyKind::AllBids, &mut orders);

        assert_eq!(ids(&victims), ["b1", "b2", "b3"]);
        assert_eq!(ids(&orders), ["a1", "a2"]);
    }

    #[test]
    fn all_asks_keeps_relative_order() {
        let mut orders = mixed_orders();

        let victims = select_and_remove(CancelPolicyKind::AllAsks, &mut orders);

        assert_eq!(ids(&victims), ["a1", "a2"]);
        assert_eq!(ids(&orders), ["b1", "b2", "b3"]);
    }

    #[test]
    fn all_twice() {
        let mut orders = mixed_orders();

        let victims = select_and_remove(CancelPolicyKind::All, &mut orders);
        assert_eq!(ids(&victims), ["b1", "a1", "b2", "a2", "b3"]);
        assert!(orders.is_empty());

        let victims = select_and_remove(CancelPolicyKind::All, &mut orders);
        assert!(victims.is_empty());
        assert!(orders.is_empty());
    }

    #[rstest]
    #[case(CancelPolicyKind::MostRecentAsk)]
    #[case(CancelPolicyKind::OldestAsk)]
    #[case(CancelPolicyKind::ClosestAsk)]
    #[case(CancelPolicyKind::FurthestAsk)]
    #[case(CancelPolicyKind::AllAsks)]
    fn ask_policies_without_asks_leave_collection_unchanged(#[case] kind: CancelPolicyKind) {
        let bids = vec![bid("b1", dec!(9.95)), bid("b2", dec!(9.97))];
        let mut orders = bids.clone();

        let victims = select_and_remove(kind, &mut orders);

        assert!(victims.is_empty());
        assert_eq!(orders, bids);
    }

    #[test]
    fn every_policy_on_empty_collection_selects_nothing() {
        for kind in CancelPolicyKind::ALL_KINDS {
            let mut orders: Vec<OpenOrder> = Vec::new();

            let victims = select_and_remove(kind, &mut orders);

            assert!(victims.is_empty(), "{kind:?} selected from empty collection");
        }
    }

    #[test]
    fn consecutive_selections_see_reduced_collection() {
        let mut orders = mixed_orders();

        let first = select_and_remove(CancelPolicyKind::MostRecentBid, &mut orders);
        let second = select_and_remove(CancelPolicyKind::MostRecentBid, &mut orders);

        assert_eq!(ids(&first), ["b3"]);
        assert_eq!(ids(&second), ["b2"]);
        assert_eq!(ids(&orders), ["b1", "a1", "a2"]);
    }

    #[test]
    fn shared_entries_are_selectable() {
        let mut orders = mixed_orders().into_iter().map(Arc::new).collect_vec();

        let victims = select_and_remove(CancelPolicyKind::ClosestAsk, &mut orders);

        assert_eq!(victims.len(), 1);
        assert_eq!(victims[0].client_order_id.as_str(), "a2");
        assert_eq!(orders.len(), 4);
    }

    struct Task {
        name: &'static str,
        side: Option<OrderSide>,
    }

    impl CancelCandidate for Task {
        fn side(&self) -> Option<OrderSide> {
            self.side
        }

        fn price(&self) -> Option<Price> {
            None
        }
    }

    #[test]
    fn entries_without_side_are_only_matched_by_unfiltered_policies() {
        let mut tasks = vec![
            Task {
                name: "no side",
                side: None,
            },
            Task {
                name: "bid",
                side: Some(BID),
            },
        ];

        let victims = select_and_remove(CancelPolicyKind::OldestBid, &mut tasks);
        assert_eq!(victims.iter().map(|x| x.name).collect_vec(), ["bid"]);

        let victims = select_and_remove(CancelPolicyKind::AllAsks, &mut tasks);
        assert!(victims.is_empty());

        let victims = select_and_remove(CancelPolicyKind::Oldest, &mut tasks);
        assert_eq!(victims.iter().map(|x| x.name).collect_vec(), ["no side"]);
        assert!(tasks.is_empty());
    }
}
