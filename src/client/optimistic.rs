//! Tentative state changes that can be undone.

/// A change applied ahead of a confirming request.
///
/// [`Tentative::apply`] snapshots the target and mutates it. The caller
/// then either [`commit`](Tentative::commit)s, keeping the change, or
/// [`rollback`](Tentative::rollback)s, restoring the exact snapshot.
#[must_use = "a tentative change must be committed or rolled back"]
#[derive(Debug)]
pub struct Tentative<T> {
    snapshot: T,
}

impl<T: Clone> Tentative<T> {
    /// Snapshot `target`, then apply `change` to it.
    pub fn apply(target: &mut T, change: impl FnOnce(&mut T)) -> Self {
        let snapshot = target.clone();
        change(target);
        Self { snapshot }
    }

    /// Keep the change.
    pub fn commit(self) {}

    /// Restore `target` to the state it had before the change.
    pub fn rollback(self, target: &mut T) {
        *target = self.snapshot;
    }
}
