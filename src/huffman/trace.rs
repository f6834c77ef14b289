//! Diagnostics hook for the tree builder and the code assignment.

use std::fmt::Debug;

use super::{Code, Weight};

#[derive(Debug)]
pub enum TraceEvent<'a, S> {
    /// Two pending nodes were merged; `left_weight` belongs to the one popped
    /// first.
    Merged {
        left_weight: Weight,
        right_weight: Weight,
        weight: Weight,
    },
    Assigned {
        symbol: &'a S,
        code: &'a Code,
    },
}

pub trait Trace<S> {
    fn record(&mut self, event: TraceEvent<'_, S>);
}

impl<S, F: FnMut(TraceEvent<'_, S>)> Trace<S> for F {
    fn record(&mut self, event: TraceEvent<'_, S>) {
        self(event)
    }
}

pub struct NoTrace;

impl<S> Trace<S> for NoTrace {
    fn record(&mut self, _event: TraceEvent<'_, S>) {}
}

/// Forwards every event to the `log` facade at trace level.
pub struct LoggingTrace;

impl<S: Debug> Trace<S> for LoggingTrace {
    fn record(&mut self, event: TraceEvent<'_, S>) {
        match event {
            TraceEvent::Merged {
                left_weight,
                right_weight,
                weight,
            } => log::trace!("merged {} + {} -> {}", left_weight, right_weight, weight),
            TraceEvent::Assigned { symbol, code } => log::trace!("{:?} - {}", symbol, code),
        }
    }
}
