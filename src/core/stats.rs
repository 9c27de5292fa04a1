use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::db::{InteractionOutcome, Marathon, MarathonStatus};

pub type OutcomeCounts = BTreeMap<InteractionOutcome, usize>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarathonStats {
    pub marathon_id: String,
    pub marathon_name: String,
    pub outcomes: OutcomeCounts,
    pub houses_visited: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_marathons: usize,
    pub total_completed_marathons: usize,
    pub overall_outcomes: OutcomeCounts,
    /// One group per marathon is assumed, so this equals `total_marathons`.
    pub participants_count: usize,
    pub marathon_stats: Vec<MarathonStats>,
}

impl Statistics {
    pub fn saved_count(&self) -> usize {
        self.overall_outcomes
            .get(&InteractionOutcome::Saved)
            .copied()
            .unwrap_or(0)
    }

    pub fn total_visited(&self) -> usize {
        self.marathon_stats.iter().map(|s| s.houses_visited).sum()
    }
}

pub fn compute(marathons: &[Marathon]) -> Statistics {
    let mut overall_outcomes = OutcomeCounts::new();
    let mut marathon_stats = Vec::with_capacity(marathons.len());

    for marathon in marathons {
        let mut stat = MarathonStats {
            marathon_id: marathon.id.clone(),
            marathon_name: marathon.name.clone(),
            outcomes: OutcomeCounts::new(),
            houses_visited: 0,
        };
        let visited = marathon
            .areas
            .iter()
            .flat_map(|area| area.house_numbers.iter())
            .filter(|house| house.is_visited());
        for house in visited {
            stat.houses_visited += 1;
            *stat.outcomes.entry(house.status).or_default() += 1;
            *overall_outcomes.entry(house.status).or_default() += 1;
        }
        marathon_stats.push(stat);
    }

    Statistics {
        total_marathons: marathons.len(),
        total_completed_marathons: marathons
            .iter()
            .filter(|m| m.status == MarathonStatus::Past)
            .count(),
        overall_outcomes,
        participants_count: marathons.len(),
        marathon_stats,
    }
}
