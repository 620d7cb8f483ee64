//! Order handoff to the system that executes checkout.

use crate::cart::CartSummary;
use crate::error::CommerceError;

/// Receives a finished cart summary when the shopper places an order.
pub trait OrderHandoff {
    fn submit(&mut self, summary: &CartSummary) -> Result<(), CommerceError>;
}

/// Records submitted orders in the log and keeps a copy of the last one.
#[derive(Debug, Clone, Default)]
pub struct LoggingHandoff {
    last: Option<CartSummary>,
    submitted: usize,
}

impl LoggingHandoff {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently submitted summary.
    pub fn last(&self) -> Option<&CartSummary> {
        self.last.as_ref()
    }

    /// How many orders were handed off.
    pub fn submitted(&self) -> usize {
        self.submitted
    }
}

impl OrderHandoff for LoggingHandoff {
    fn submit(&mut self, summary: &CartSummary) -> Result<(), CommerceError> {
        tracing::info!(
            lines = summary.lines.len(),
            items = summary.item_count,
            total = summary.grand_total.amount(),
            "order handed off"
        );
        self.last = Some(summary.clone());
        self.submitted += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_logging_handoff_keeps_last() {
        let mut handoff = LoggingHandoff::new();
        let summary = CartSummary {
            lines: vec![],
            item_count: 2,
            grand_total: Money::new(4998),
        };

        handoff.submit(&summary).unwrap();
        assert_eq!(handoff.submitted(), 1);
        assert_eq!(handoff.last(), Some(&summary));
    }
}
