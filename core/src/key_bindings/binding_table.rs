use crate::key_bindings::cancel_binding::{CancelBinding, CancelPolicyKind};
use crate::key_bindings::task_binding::{KeyAction, TaskBinding};
use hotkey_domain::key::{Key, KeyChord, KeyModifiers};
use hotkey_domain::market::Venue;
use hotkey_domain::order::snapshot::Amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Order quantity used for a venue without a configured default
pub const DEFAULT_ORDER_QUANTITY: Amount = Decimal::ONE_HUNDRED;

/// User's key bindings: venue scoped task bindings with a global fallback,
/// cancel bindings and default order quantities per venue.
/// Missing entries are a normal outcome of every lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BindingTable {
    task_bindings: HashMap<Venue, HashMap<KeyChord, TaskBinding>>,
    cancel_bindings: HashMap<KeyChord, CancelBinding>,
    default_quantities: HashMap<Venue, Amount>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table used for a new profile or when a saved one can't be restored:
    /// `Esc` cancels the oldest order and `Shift+Esc` cancels all of them
    pub fn with_default_bindings() -> Self {
        let mut table = Self::new();
        table.set_cancel_binding(
            KeyChord::plain(Key::Escape),
            CancelBinding::from_kind(CancelPolicyKind::Oldest),
        );
        table.set_cancel_binding(
            KeyChord::new(Key::Escape, KeyModifiers::SHIFT),
            CancelBinding::from_kind(CancelPolicyKind::All),
        );
        table
    }

    pub fn set_task_binding(&mut self, venue: Venue, chord: KeyChord, binding: TaskBinding) {
        log::trace!("Set task binding '{}' for {chord} at {venue}", binding.name);

        let _ = self
            .task_bindings
            .entry(venue)
            .or_default()
            .insert(chord, binding);
    }

    pub fn reset_task_binding(&mut self, venue: &Venue, chord: &KeyChord) {
        let Some(venue_bindings) = self.task_bindings.get_mut(venue) else {
            return;
        };

        if venue_bindings.remove(chord).is_some() {
            log::trace!("Reset task binding for {chord} at {venue}");
        }

        if venue_bindings.is_empty() {
            let _ = self.task_bindings.remove(venue);
        }
    }

    /// Binding of `chord` at `venue`, or the global binding of `chord` when the venue has none.
    /// A venue binding always shadows the global one for the same chord.
    pub fn resolve_task_binding(&self, venue: &Venue, chord: &KeyChord) -> Option<TaskBinding> {
        if let Some(binding) = self.venue_task_binding(venue, chord) {
            return Some(binding.clone());
        }

        if venue.is_global() {
            return None;
        }

        let binding = self.venue_task_binding(&Venue::global(), chord)?;
        log::trace!("Task binding for {chord} at {venue} falls back to the global one");

        Some(binding.clone())
    }

    fn venue_task_binding(&self, venue: &Venue, chord: &KeyChord) -> Option<&TaskBinding> {
        self.task_bindings.get(venue)?.get(chord)
    }

    pub fn set_cancel_binding(&mut self, chord: KeyChord, binding: CancelBinding) {
        log::trace!("Set cancel binding '{}' for {chord}", binding.description);

        let _ = self.cancel_bindings.insert(chord, binding);
    }

    pub fn reset_cancel_binding(&mut self, chord: &KeyChord) {
        if self.cancel_bindings.remove(chord).is_some() {
            log::trace!("Reset cancel binding for {chord}");
        }
    }

    pub fn resolve_cancel_binding(&self, chord: &KeyChord) -> Option<CancelBinding> {
        self.cancel_bindings.get(chord).cloned()
    }

    /// Task bindings take precedence over cancel bindings for the same chord
    pub fn resolve_action(&self, venue: &Venue, chord: &KeyChord) -> Option<KeyAction> {
        self.resolve_task_binding(venue, chord)
            .map(KeyAction::Task)
            .or_else(|| self.resolve_cancel_binding(chord).map(KeyAction::Cancel))
    }

    pub fn get_default_quantity(&self, venue: &Venue) -> Amount {
        self.default_quantities
            .get(venue)
            .copied()
            .unwrap_or(DEFAULT_ORDER_QUANTITY)
    }

    pub fn set_default_quantity(&mut self, venue: Venue, quantity: Amount) {
        let _ = self.default_quantities.insert(venue, quantity);
    }

    pub fn task_bindings(&self) -> impl Iterator<Item = (&Venue, &KeyChord, &TaskBinding)> {
        self.task_bindings.iter().flat_map(|(venue, bindings)| {
            bindings
                .iter()
                .map(move |(chord, binding)| (venue, chord, binding))
        })
    }

    pub fn cancel_bindings(&self) -> impl Iterator<Item = (&KeyChord, &CancelBinding)> {
        self.cancel_bindings.iter()
    }
}
