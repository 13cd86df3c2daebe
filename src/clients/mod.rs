//! Downstream service clients: the graph store and the notification topic.

pub mod message;
pub mod sparql;
