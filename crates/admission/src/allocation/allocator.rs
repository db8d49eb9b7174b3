use serde::Serialize;
use tracing::{debug, info};

use super::domain::{Applicant, Capacity, Department, Round};
use super::ranking;

/// Admitted applicants per department, in admission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rosters {
    by_department: [Vec<Applicant>; 5],
}

impl Rosters {
    pub fn get(&self, department: Department) -> &[Applicant] {
        &self.by_department[department.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Department, &[Applicant])> + '_ {
        Department::ALL
            .into_iter()
            .map(move |department| (department, self.get(department)))
    }

    pub fn admitted(&self) -> usize {
        self.by_department.iter().map(Vec::len).sum()
    }

    fn roster_mut(&mut self, department: Department) -> &mut Vec<Applicant> {
        &mut self.by_department[department.index()]
    }
}

/// Per-round counters kept for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundSummary {
    pub round: u8,
    pub pool: usize,
    pub admitted: usize,
    pub overflow: usize,
}

/// Frozen result of a three-round allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationOutcome {
    pub capacity: Capacity,
    pub rosters: Rosters,
    pub rejected: Vec<Applicant>,
    pub rounds: Vec<RoundSummary>,
}

impl AllocationOutcome {
    pub fn admitted(&self) -> usize {
        self.rosters.admitted()
    }
}

/// Runs the priority rounds against a uniform department capacity.
#[derive(Debug, Clone, Copy)]
pub struct Allocator {
    capacity: Capacity,
}

impl Allocator {
    pub fn new(capacity: Capacity) -> Self {
        Self { capacity }
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    pub fn allocate(&self, applicants: Vec<Applicant>) -> AllocationOutcome {
        let mut rosters = Rosters::default();
        let mut rounds = Vec::with_capacity(Round::ALL.len());
        let mut pool = applicants;

        for round in Round::ALL {
            let pool_size = pool.len();
            let unplaced = self.run_round(round, &pool, &mut rosters);
            let summary = RoundSummary {
                round: round.number(),
                pool: pool_size,
                admitted: pool_size - unplaced.len(),
                overflow: unplaced.len(),
            };
            info!(
                round = summary.round,
                pool = summary.pool,
                admitted = summary.admitted,
                overflow = summary.overflow,
                "allocation round complete"
            );
            rounds.push(summary);
            pool = unplaced;
        }

        if !pool.is_empty() {
            info!(
                rejected = pool.len(),
                "applicants left unplaced after final round"
            );
        }

        AllocationOutcome {
            capacity: self.capacity,
            rosters,
            rejected: pool,
            rounds,
        }
    }

    /// Places the pool by each applicant's priority for `round` and returns
    /// whoever was pushed out by the capacity cut.
    pub fn run_round(
        &self,
        round: Round,
        pool: &[Applicant],
        rosters: &mut Rosters,
    ) -> Vec<Applicant> {
        for department in Department::ALL {
            let roster = rosters.roster_mut(department);
            let before = roster.len();
            roster.extend(
                ranking::rank(department, pool)
                    .into_iter()
                    .filter(|applicant| applicant.priority(round) == department)
                    .cloned(),
            );
            debug!(
                %round,
                %department,
                appended = roster.len() - before,
                "department scan"
            );
        }

        let capacity = self.capacity.get();
        let mut unplaced = Vec::new();
        for department in Department::ALL {
            let roster = rosters.roster_mut(department);
            if roster.len() > capacity {
                let overflow = roster.split_off(capacity);
                debug!(
                    %round,
                    %department,
                    overflow = overflow.len(),
                    "roster truncated to capacity"
                );
                unplaced.extend(overflow);
            }
        }

        unplaced
    }
}
