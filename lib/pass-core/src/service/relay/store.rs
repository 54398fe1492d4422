use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use time::OffsetDateTime;
use tokio::sync::Mutex;

use crate::model::completion::NotReadyReason;
use crate::model::correlation_id::CorrelationId;
use crate::proto::clock::Clock;

#[derive(Debug)]
enum Slot<T> {
    Ready {
        value: T,
        received_at: OffsetDateTime,
    },
    Delivered {
        at: OffsetDateTime,
    },
    Expired {
        at: OffsetDateTime,
    },
}

impl<T> Slot<T> {
    fn since(&self) -> OffsetDateTime {
        match self {
            Slot::Ready { received_at, .. } => *received_at,
            Slot::Delivered { at } | Slot::Expired { at } => *at,
        }
    }
}

/// Result table with at-most-once reads.
///
/// Delivered and expired ids leave a tombstone so a later read can tell why
/// nothing is there. Tombstones age out with the same retention as results.
pub struct ResultStore<T> {
    slots: Mutex<HashMap<CorrelationId, Slot<T>>>,
    clock: Arc<dyn Clock>,
    retention: Duration,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub expired: usize,
    pub pruned: usize,
}

impl<T> ResultStore<T> {
    pub fn new(clock: Arc<dyn Clock>, retention: Duration) -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            clock,
            retention,
        }
    }

    /// Stores `value` under `id`, replacing whatever was there, then sweeps
    /// the whole table.
    pub async fn upsert(&self, id: CorrelationId, value: T) -> SweepReport {
        let now = self.clock.now_utc();
        let mut slots = self.slots.lock().await;

        slots.insert(
            id,
            Slot::Ready {
                value,
                received_at: now,
            },
        );

        self.sweep(&mut slots, now)
    }

    pub async fn take(&self, id: &CorrelationId) -> Result<T, NotReadyReason> {
        let now = self.clock.now_utc();
        let mut slots = self.slots.lock().await;

        let Some(slot) = slots.remove(id) else {
            return Err(NotReadyReason::Pending);
        };

        match slot {
            Slot::Ready { received_at, .. } if self.is_stale(received_at, now) => {
                slots.insert(id.to_owned(), Slot::Expired { at: now });
                Err(NotReadyReason::Expired)
            }
            Slot::Ready { value, .. } => {
                slots.insert(id.to_owned(), Slot::Delivered { at: now });
                Ok(value)
            }
            tombstone @ Slot::Delivered { .. } => {
                slots.insert(id.to_owned(), tombstone);
                Err(NotReadyReason::Delivered)
            }
            tombstone @ Slot::Expired { .. } => {
                slots.insert(id.to_owned(), tombstone);
                Err(NotReadyReason::Expired)
            }
        }
    }

    /// Undelivered results currently held.
    pub async fn pending_count(&self) -> usize {
        self.slots
            .lock()
            .await
            .values()
            .filter(|slot| matches!(slot, Slot::Ready { .. }))
            .count()
    }

    fn sweep(&self, slots: &mut HashMap<CorrelationId, Slot<T>>, now: OffsetDateTime) -> SweepReport {
        let mut report = SweepReport::default();

        slots.retain(|_, slot| {
            if !self.is_stale(slot.since(), now) {
                return true;
            }

            match slot {
                Slot::Ready { .. } => {
                    *slot = Slot::Expired { at: now };
                    report.expired += 1;
                    true
                }
                Slot::Delivered { .. } | Slot::Expired { .. } => {
                    report.pruned += 1;
                    false
                }
            }
        });

        report
    }

    fn is_stale(&self, since: OffsetDateTime, now: OffsetDateTime) -> bool {
        now - since > self.retention
    }
}
