#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    pub delivered: usize,
    pub pruned: usize,
    pub skipped: usize,
}

impl BroadcastReport {
    pub fn recipients(&self) -> usize {
        self.delivered + self.pruned + self.skipped
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageOutcome {
    Broadcast(BroadcastReport),
    Dropped { reason: String },
}

impl MessageOutcome {
    pub fn is_broadcast(&self) -> bool {
        matches!(self, Self::Broadcast(_))
    }
}
