use crate::metaheuristic::aco;
use crate::metaheuristic::supervisor;
use crate::metaheuristic::supervisor::{Message, MessageInfo};

use csv::Writer;
use std::collections::BTreeMap;
use std::io::{sink, Sink, Write};
use std::sync::mpsc;
use std::sync::mpsc::{Receiver, Sender};

/// Collects the messages of the colony and its ants and writes them as csv rows.
///
/// Messages are summed up per ant over `aggregation_rate` iterations before a row is written.
pub struct Supervisor<W: Write> {
    sender: Sender<aco::Message>,
    receiver: Receiver<aco::Message>,
    ants: usize,
    messages: BTreeMap<usize, MessageInfo>,
    iterations: usize,
    last_iteration: usize,
    aggregation_rate: usize,
    writer: Writer<W>,
}

impl<W: Write> Supervisor<W> {
    pub fn new(aggregation_rate: usize, writer: Writer<W>) -> Self {
        let (tx, rx) = mpsc::channel();
        Supervisor {
            sender: tx,
            receiver: rx,
            ants: 0,
            messages: BTreeMap::new(),
            iterations: 0,
            last_iteration: 0,
            aggregation_rate: aggregation_rate.max(1),
            writer,
        }
    }

    /// Registers a new ant and returns its id. Ids start at 1.
    pub fn new_ant(&mut self) -> usize {
        self.ants += 1;
        self.ants
    }

    pub fn ants(&self) -> usize {
        self.ants
    }

    /// Drains all pending messages without blocking.
    pub fn aggregate_receive(&mut self) {
        while let Ok(message) = self.receiver.try_recv() {
            self.last_iteration = self.last_iteration.max(message.iteration);
            *self.messages.entry(message.id()).or_default() += message.get_info();
        }
    }

    /// Writes one row per ant for everything aggregated since the last write.
    pub fn flush(&mut self) -> Result<(), csv::Error> {
        self.aggregate_receive();
        let messages = std::mem::take(&mut self.messages);
        for (ant_id, info) in messages {
            self.writer
                .serialize(aco::Message::from_info(ant_id, self.last_iteration, info))?;
        }
        self.writer.flush()?;

        Ok(())
    }

    pub fn reset(&mut self) {
        self.ants = 0;
        self.messages = BTreeMap::new();
        self.iterations = 0;
        self.last_iteration = 0;
        let (tx, rx) = mpsc::channel();
        self.sender = tx;
        self.receiver = rx;
    }

    /// Returns the underlying writer, e.g. to inspect a log written into memory.
    pub fn into_inner(mut self) -> Result<W, csv::Error> {
        self.flush()?;
        self.writer
            .into_inner()
            .map_err(|error| csv::Error::from(error.into_error()))
    }
}

impl<W: Write> supervisor::Supervisor<aco::Message> for Supervisor<W> {
    type Error = csv::Error;

    fn sender(&self) -> Sender<aco::Message> {
        self.sender.clone()
    }

    fn prepare_next(&mut self) -> Result<(), csv::Error> {
        self.aggregate_receive();
        self.iterations += 1;
        if self.iterations % self.aggregation_rate == 0 {
            self.flush()?;
        }

        Ok(())
    }
}

impl Supervisor<Sink> {
    /// A supervisor that drops every row.
    pub fn silent() -> Self {
        Supervisor::new(1, Writer::from_writer(sink()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metaheuristic::supervisor::Supervisor as _;
    use crate::metaheuristic::Phase;
    use std::time::Duration;

    fn message(ant_id: usize, iteration: usize, distance: f64) -> aco::Message {
        aco::Message::new(
            ant_id,
            iteration,
            Phase::Constructing,
            3,
            0,
            4,
            Duration::from_micros(10),
            distance,
        )
    }

    fn in_memory(aggregation_rate: usize) -> Supervisor<Vec<u8>> {
        Supervisor::new(aggregation_rate, Writer::from_writer(Vec::new()))
    }

    fn rows(supervisor: Supervisor<Vec<u8>>) -> Vec<String> {
        let log = String::from_utf8(supervisor.into_inner().unwrap()).unwrap();
        log.lines().map(String::from).collect()
    }

    #[test]
    fn new_ant_counts_up() {
        let mut supervisor = in_memory(1);

        assert_eq!(supervisor.new_ant(), 1);
        assert_eq!(supervisor.new_ant(), 2);
        assert_eq!(supervisor.ants(), 2);

        supervisor.reset();
        assert_eq!(supervisor.new_ant(), 1);
    }

    #[test]
    fn prepare_next_writes_rows() {
        let mut supervisor = in_memory(1);
        let sender = supervisor.sender();
        sender.send(message(1, 0, 10.0)).unwrap();
        sender.send(message(2, 0, 12.0)).unwrap();
        supervisor.prepare_next().unwrap();

        assert_eq!(
            rows(supervisor),
            vec![
                "ant_id,iteration,phase,evaluations,cpu_time_us,n_improvements,changes,distance",
                "1,0,Constructing,3,10,0,4,10.0",
                "2,0,Constructing,3,10,0,4,12.0",
            ]
        );
    }

    #[test]
    fn prepare_next_aggregates_iterations() {
        let mut supervisor = in_memory(2);
        let sender = supervisor.sender();
        sender.send(message(1, 0, 10.0)).unwrap();
        supervisor.prepare_next().unwrap();
        sender.send(message(1, 1, 11.0)).unwrap();
        supervisor.prepare_next().unwrap();

        assert_eq!(
            rows(supervisor),
            vec![
                "ant_id,iteration,phase,evaluations,cpu_time_us,n_improvements,changes,distance",
                "1,1,Constructing,6,20,0,8,21.0",
            ]
        );
    }

    #[test]
    fn silent_accepts_messages() {
        let mut supervisor = Supervisor::silent();
        supervisor.sender().send(message(1, 0, 1.0)).unwrap();

        assert!(supervisor.prepare_next().is_ok());
        assert!(supervisor.flush().is_ok());
    }
}
