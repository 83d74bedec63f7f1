//! The ledger store: the owned, insertion-ordered transaction collection plus
//! its persistence side effects.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    domain::{Transaction, TxnKind},
    errors::{Result, TallyError},
    storage::StorageBackend,
};

/// Synchronous yes/no gate guarding destructive mutations. The CLI backs this
/// with an interactive prompt; tests script it.
pub trait ConfirmationGate {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Owns the in-memory collection and writes the whole blob back after every
/// mutation. Memory and disk are kept consistent: a failed write rolls the
/// in-memory change back.
pub struct LedgerStore {
    transactions: Vec<Transaction>,
    backend: Box<dyn StorageBackend>,
}

impl LedgerStore {
    /// Loads the persisted collection. Absent or unreadable data yields an
    /// empty ledger and never fails the caller.
    pub fn load(backend: Box<dyn StorageBackend>) -> Self {
        let transactions = match backend.load() {
            Ok(transactions) => transactions,
            Err(err) => {
                tracing::warn!("ignoring unreadable ledger data: {err}");
                Vec::new()
            }
        };
        tracing::debug!(count = transactions.len(), "ledger loaded");
        Self {
            transactions,
            backend,
        }
    }

    /// Validates and appends a new entry, persisting synchronously.
    pub fn add(
        &mut self,
        description: &str,
        amount: f64,
        kind: TxnKind,
        date: NaiveDate,
    ) -> Result<Transaction> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TallyError::InvalidInput(
                "description must not be empty".into(),
            ));
        }
        // Also rejects NaN, which fails every comparison.
        if !(amount > 0.0) {
            return Err(TallyError::InvalidInput(
                "amount must be a positive number".into(),
            ));
        }

        let txn = Transaction::new(description, amount, kind, date);
        self.transactions.push(txn.clone());
        if let Err(err) = self.persist() {
            self.transactions.pop();
            return Err(err);
        }
        tracing::debug!(id = %txn.id, kind = txn.kind.label(), "transaction added");
        Ok(txn)
    }

    /// Removes the entry with the given id once the gate confirms. Unknown
    /// ids and declined confirmations are silent no-ops returning `false`.
    pub fn remove(&mut self, id: Uuid, gate: &mut dyn ConfirmationGate) -> Result<bool> {
        let Some(pos) = self.transactions.iter().position(|t| t.id == id) else {
            return Ok(false);
        };
        if !gate.confirm("Delete transaction?") {
            return Ok(false);
        }
        let removed = self.transactions.remove(pos);
        if let Err(err) = self.persist() {
            self.transactions.insert(pos, removed);
            return Err(err);
        }
        tracing::debug!(%id, "transaction removed");
        Ok(true)
    }

    /// Empties the collection and deletes the persisted blob once the gate
    /// confirms. Returns whether the reset took effect.
    pub fn clear(&mut self, gate: &mut dyn ConfirmationGate) -> Result<bool> {
        if !gate.confirm("Delete all transactions?") {
            return Ok(false);
        }
        let previous = std::mem::take(&mut self.transactions);
        if let Err(err) = self.backend.clear() {
            self.transactions = previous;
            return Err(err);
        }
        tracing::debug!(count = previous.len(), "ledger cleared");
        Ok(true)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn find(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Resolves a hex id prefix (as shown in the list view) to a full id.
    /// Returns `None` when the prefix is empty, unknown, or ambiguous.
    pub fn resolve_id(&self, prefix: &str) -> Option<Uuid> {
        let prefix = prefix.trim().to_lowercase();
        if prefix.is_empty() {
            return None;
        }
        let mut matched = None;
        for txn in &self.transactions {
            if txn.id.simple().to_string().starts_with(&prefix) {
                if matched.is_some() {
                    return None;
                }
                matched = Some(txn.id);
            }
        }
        matched
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn location(&self) -> &std::path::Path {
        self.backend.location()
    }

    fn persist(&self) -> Result<()> {
        self.backend.save(&self.transactions)
    }
}
