use crate::metaheuristic::Phase;

use serde::Serialize;
use std::ops::{Add, AddAssign};
use std::sync::mpsc::Sender;
use std::time::Duration;

/// Collects the messages sent by a metaheuristic and its agents.
pub trait Supervisor<MessageType: Message> {
    type Error;

    /// Returns a new handle to send messages to this supervisor.
    fn sender(&self) -> Sender<MessageType>;

    /// Processes all messages of the finished iteration.
    fn prepare_next(&mut self) -> Result<(), Self::Error>;
}

pub trait Message {
    fn get_info(&self) -> MessageInfo;
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MessageInfo {
    pub evaluations: usize,
    pub cpu_time: Duration,
    pub n_improvements: usize,
    pub changes: usize,
    pub phase: Phase,
    pub distance: f64,
}

impl MessageInfo {
    pub fn new(
        evaluations: usize,
        n_improvements: usize,
        changes: usize,
        phase: Phase,
        cpu_time: Duration,
        distance: f64,
    ) -> Self {
        Self {
            evaluations,
            cpu_time,
            n_improvements,
            changes,
            phase,
            distance,
        }
    }
}

impl Add for MessageInfo {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            evaluations: self.evaluations + other.evaluations,
            n_improvements: self.n_improvements + other.n_improvements,
            changes: self.changes + other.changes,
            phase: other.phase,
            cpu_time: self.cpu_time + other.cpu_time,
            distance: self.distance + other.distance,
        }
    }
}

impl AddAssign for MessageInfo {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_assign_accumulates() {
        let mut info = MessageInfo::new(3, 0, 2, Phase::Constructing, Duration::from_micros(5), 1.5);
        info += MessageInfo::new(4, 1, 3, Phase::Updating, Duration::from_micros(7), 2.0);

        assert_eq!(
            info,
            MessageInfo::new(7, 1, 5, Phase::Updating, Duration::from_micros(12), 3.5)
        );
    }
}
