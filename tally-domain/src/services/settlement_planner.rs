use crate::model::{Transfer, TOLERANCE};
use fxhash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// One side of the matching: magnitude is the absolute outstanding amount.
/// Larger magnitudes pop first; equal magnitudes pop in ascending name order
/// so the plan is deterministic regardless of map iteration order.
struct HeapEntry<'a> {
    magnitude: f64,
    name: &'a str,
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.magnitude
            .total_cmp(&other.magnitude)
            .then_with(|| other.name.cmp(self.name))
    }
}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry<'_> {}

/// Greedy largest-magnitude-first debt matching. Trades minimum transfer
/// count for simplicity and determinism.
pub struct SettlementPlanner;

impl SettlementPlanner {
    /// Produces transfers that drive every balance to within tolerance of
    /// zero. Balances already within tolerance take no part; every emitted
    /// transfer is at least `TOLERANCE` and never from a name to itself.
    ///
    /// If the balances do not conserve (sum beyond tolerance), one heap
    /// drains before the other and the residual is left unsettled.
    pub fn plan(balances: &FxHashMap<String, f64>) -> Vec<Transfer<'_>> {
        let mut debtors: BinaryHeap<HeapEntry<'_>> = BinaryHeap::new();
        let mut creditors: BinaryHeap<HeapEntry<'_>> = BinaryHeap::new();

        for (name, &balance) in balances {
            if balance.abs() < TOLERANCE {
                continue;
            }
            let entry = HeapEntry {
                magnitude: balance.abs(),
                name: name.as_str(),
            };
            if balance < 0.0 {
                debtors.push(entry);
            } else {
                creditors.push(entry);
            }
        }

        let mut transfers = Vec::new();

        loop {
            let (Some(debtor), Some(creditor)) = (debtors.pop(), creditors.pop()) else {
                break;
            };

            let amount = debtor.magnitude.min(creditor.magnitude);
            if amount >= TOLERANCE {
                transfers.push(Transfer {
                    from: debtor.name,
                    to: creditor.name,
                    amount,
                });
            }

            let remaining_debt = debtor.magnitude - amount;
            if remaining_debt >= TOLERANCE {
                debtors.push(HeapEntry {
                    magnitude: remaining_debt,
                    name: debtor.name,
                });
            }
            let remaining_credit = creditor.magnitude - amount;
            if remaining_credit >= TOLERANCE {
                creditors.push(HeapEntry {
                    magnitude: remaining_credit,
                    name: creditor.name,
                });
            }
        }

        transfers
    }
}
