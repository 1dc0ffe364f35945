use crate::metaheuristic::supervisor;
use crate::metaheuristic::supervisor::MessageInfo;
use crate::metaheuristic::Phase;

use serde::Serialize;
use std::convert::TryFrom;
use std::time::Duration;

/// One row of the run log. Ant id 0 is the colony itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Message {
    pub ant_id: usize,
    pub iteration: usize,
    pub phase: Phase,
    pub evaluations: usize,
    pub cpu_time_us: u64,
    pub n_improvements: usize,
    pub changes: usize,
    pub distance: f64,
}

impl Message {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        ant_id: usize,
        iteration: usize,
        phase: Phase,
        evaluations: usize,
        n_improvements: usize,
        changes: usize,
        cpu_time: Duration,
        distance: f64,
    ) -> Self {
        Self {
            ant_id,
            iteration,
            phase,
            evaluations,
            cpu_time_us: u64::try_from(cpu_time.as_micros()).unwrap_or(u64::MAX),
            n_improvements,
            changes,
            distance,
        }
    }

    pub fn from_info(ant_id: usize, iteration: usize, info: MessageInfo) -> Self {
        Self::new(
            ant_id,
            iteration,
            info.phase,
            info.evaluations,
            info.n_improvements,
            info.changes,
            info.cpu_time,
            info.distance,
        )
    }

    pub fn id(&self) -> usize {
        self.ant_id
    }
}

impl supervisor::Message for Message {
    fn get_info(&self) -> MessageInfo {
        MessageInfo::new(
            self.evaluations,
            self.n_improvements,
            self.changes,
            self.phase,
            Duration::from_micros(self.cpu_time_us),
            self.distance,
        )
    }
}
