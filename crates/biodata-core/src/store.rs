use biodata_types::{BiodataPatch, BiodataRecord};

/// Handle returned by [`BiodataStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&BiodataRecord)>;

/// Single source of truth for the biodata record.
///
/// The store does not validate: callers commit only drafts that passed
/// [`crate::validate`]. Listeners run synchronously inside `update`, after
/// the merge, in subscription order.
pub struct BiodataStore {
    record: BiodataRecord,
    revision: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl BiodataStore {
    pub fn new(record: BiodataRecord) -> Self {
        Self {
            record,
            revision: 0,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Snapshot of the current record
    pub fn current(&self) -> BiodataRecord {
        self.record.clone()
    }

    /// Borrow the current record without cloning
    pub fn record(&self) -> &BiodataRecord {
        &self.record
    }

    /// Number of updates applied so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Shallow-merge `patch` into the record and notify listeners.
    pub fn update(&mut self, patch: BiodataPatch) {
        let changed = self.record.merge(patch);
        self.revision += 1;

        let changed_names: Vec<&str> = changed.iter().map(|f| f.as_str()).collect();
        tracing::debug!(
            revision = self.revision,
            changed = ?changed_names,
            "biodata updated"
        );

        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.record);
        }
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&BiodataRecord) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        tracing::trace!(subscription = id.0, "store subscription added");
        id
    }

    /// Remove a listener. Returns false if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        before != self.listeners.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for BiodataStore {
    fn default() -> Self {
        Self::new(BiodataRecord::seed())
    }
}

impl std::fmt::Debug for BiodataStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BiodataStore")
            .field("record", &self.record)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_empty_update_leaves_record_unchanged() {
        let mut store = BiodataStore::default();
        store.update(BiodataPatch::default());

        assert_eq!(store.current(), BiodataRecord::seed());
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_update_merges_single_field() {
        let mut store = BiodataStore::default();
        store.update(BiodataPatch {
            name: Some("Meera".to_string()),
            ..Default::default()
        });

        let expected = BiodataRecord {
            name: "Meera".to_string(),
            ..BiodataRecord::seed()
        };
        assert_eq!(store.current(), expected);
    }

    #[test]
    fn test_listeners_see_merged_record_in_order() {
        let mut store = BiodataStore::default();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&seen);
        store.subscribe(move |record| first.borrow_mut().push(format!("a:{}", record.roll)));
        let second = Rc::clone(&seen);
        store.subscribe(move |record| second.borrow_mut().push(format!("b:{}", record.roll)));

        store.update(BiodataPatch {
            roll: Some("R2".to_string()),
            ..Default::default()
        });

        assert_eq!(*seen.borrow(), vec!["a:R2", "b:R2"]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut store = BiodataStore::default();
        let calls = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&calls);
        let id = store.subscribe(move |_| *counter.borrow_mut() += 1);
        store.update(BiodataPatch::default());

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.update(BiodataPatch::default());

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }
}
