//! Range statistics - how many of the 1326 deals each action receives.

use crate::action::{ActionButton, HandAssignmentMap, find_action};
use crate::hand::{combinations_of, total_combinations};
use serde::Serialize;
use std::collections::BTreeMap;

/// Combo counts per action id for one range.
///
/// A weighted assignment splits the hand's combos between its two actions
/// by weight, so counts are fractional.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeStats {
    combos: BTreeMap<String, f64>,
    assigned: f64,
}

impl RangeStats {
    pub fn compute(assignment: &HandAssignmentMap, actions: &[ActionButton]) -> Self {
        let mut stats = Self::default();
        for (hand, action_id) in assignment {
            let combos = f64::from(combinations_of(*hand));
            match find_action(action_id, actions) {
                Some(ActionButton::Weighted(weighted)) => {
                    let share = f64::from(weighted.weight_percent()) / 100.0;
                    stats.add(&weighted.action1_id, combos * share);
                    stats.add(&weighted.action2_id, combos * (1.0 - share));
                }
                Some(ActionButton::Simple(_)) | None => stats.add(action_id, combos),
            }
            stats.assigned += combos;
        }
        stats
    }

    fn add(&mut self, action_id: &str, combos: f64) {
        *self.combos.entry(action_id.to_string()).or_insert(0.0) += combos;
    }

    /// Combos attributed to `action_id`.
    pub fn combos_for(&self, action_id: &str) -> f64 {
        self.combos.get(action_id).copied().unwrap_or(0.0)
    }

    /// Share of all 1326 deals attributed to `action_id`, in percent.
    pub fn percent_of_total(&self, action_id: &str) -> f64 {
        self.combos_for(action_id) / f64::from(total_combinations()) * 100.0
    }

    pub fn assigned_combos(&self) -> f64 {
        self.assigned
    }

    pub fn unassigned_combos(&self) -> f64 {
        f64::from(total_combinations()) - self.assigned
    }

    /// Action ids with their combo counts, in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.combos.iter().map(|(id, combos)| (id.as_str(), *combos))
    }
}
