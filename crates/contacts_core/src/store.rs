use std::{fmt, sync::Arc};

use shared::domain::{Contact, ContactId};
use tracing::{debug, info};

/// Immutable, ordered view of every contact at one point in time. Clones share
/// the same backing slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSnapshot {
    contacts: Arc<[Contact]>,
}

impl ContactSnapshot {
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: contacts.into(),
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|contact| contact.id == id)
    }

    pub fn contains(&self, id: ContactId) -> bool {
        self.get(id).is_some()
    }

    pub fn last(&self) -> Option<&Contact> {
        self.contacts.last()
    }

    fn appended(&self, contact: Contact) -> Self {
        let mut next = Vec::with_capacity(self.contacts.len() + 1);
        next.extend(self.contacts.iter().cloned());
        next.push(contact);
        Self::new(next)
    }

    fn without(&self, id: ContactId) -> Self {
        Self::new(
            self.contacts
                .iter()
                .filter(|contact| contact.id != id)
                .cloned()
                .collect(),
        )
    }
}

impl Default for ContactSnapshot {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<'a> IntoIterator for &'a ContactSnapshot {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

type SnapshotListener = Box<dyn FnMut(&ContactSnapshot)>;

/// Owner of the contact collection. Every mutation swaps in a whole new
/// snapshot and notifies listeners with it.
pub struct ContactStore {
    snapshot: ContactSnapshot,
    revision: u64,
    listeners: Vec<SnapshotListener>,
}

impl ContactStore {
    pub fn new(seed: Vec<Contact>) -> Self {
        Self {
            snapshot: ContactSnapshot::new(seed),
            revision: 0,
            listeners: Vec::new(),
        }
    }

    pub fn snapshot(&self) -> ContactSnapshot {
        self.snapshot.clone()
    }

    pub fn contacts(&self) -> &[Contact] {
        self.snapshot.contacts()
    }

    /// Bumped once per snapshot replacement; no-op removals leave it alone.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn contains(&self, id: ContactId) -> bool {
        self.snapshot.contains(id)
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&ContactSnapshot) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Appends without validating; the caller owns the non-empty and unique-id rules.
    pub fn add(&mut self, contact: Contact) -> ContactSnapshot {
        info!(contact_id = %contact.id, "adding contact");
        let next = self.snapshot.appended(contact);
        self.replace(next);
        self.snapshot()
    }

    pub fn remove(&mut self, id: ContactId) -> ContactSnapshot {
        if !self.snapshot.contains(id) {
            debug!(contact_id = %id, "remove ignored; no contact with that id");
            return self.snapshot();
        }
        info!(contact_id = %id, "removing contact");
        let next = self.snapshot.without(id);
        self.replace(next);
        self.snapshot()
    }

    fn replace(&mut self, next: ContactSnapshot) {
        self.snapshot = next;
        self.revision = self.revision.wrapping_add(1);
        for listener in &mut self.listeners {
            listener(&self.snapshot);
        }
    }
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl fmt::Debug for ContactStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactStore")
            .field("snapshot", &self.snapshot)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
