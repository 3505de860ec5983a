//! Cancelable notifications raised around accessory slots.
//!
//! The registry never raises these itself. Hosts build them when a player
//! changes an accessory or a crafting result is moved, then pass them through
//! an [`EventDispatcher`] and honor the outcome.

use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use crate::material::Material;

/// Player identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub Uuid);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Host inventory handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryId(pub u32);

/// Reference to an item stack.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemRef {
    pub material: Material,
    pub amount: u32,
}

impl ItemRef {
    pub fn new(material: Material, amount: u32) -> Self {
        Self { material, amount }
    }
}

/// What happened to an accessory slot.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum EquipAction {
    /// Empty slot received an item.
    Equip,
    /// Item removed, slot left empty.
    Unequip,
    /// One item replaced another.
    Swap,
}

impl EquipAction {
    /// Derives the action from the slot contents before and after.
    ///
    /// Returns `None` when the slot was empty and stays empty.
    pub fn classify(previous: Option<&ItemRef>, new: Option<&ItemRef>) -> Option<Self> {
        match (previous, new) {
            (None, Some(_)) => Some(Self::Equip),
            (Some(_), None) => Some(Self::Unequip),
            (Some(_), Some(_)) => Some(Self::Swap),
            (None, None) => None,
        }
    }
}

/// Events a downstream observer may veto.
pub trait Cancellable {
    fn is_cancelled(&self) -> bool;
    fn set_cancelled(&mut self, cancelled: bool);
}

/// An accessory was equipped, removed, or swapped.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotEquipEvent {
    pub player: PlayerId,
    pub slot_type: String,
    pub slot_index: u32,
    pub previous_item: Option<ItemRef>,
    pub new_item: Option<ItemRef>,
    pub action: EquipAction,
    cancelled: bool,
}

impl SlotEquipEvent {
    pub fn new(
        player: PlayerId,
        slot_type: impl Into<String>,
        slot_index: u32,
        previous_item: Option<ItemRef>,
        new_item: Option<ItemRef>,
        action: EquipAction,
    ) -> Self {
        Self {
            player,
            slot_type: slot_type.into(),
            slot_index,
            previous_item,
            new_item,
            action,
            cancelled: false,
        }
    }

    /// Builds an event from a slot change, classifying the action.
    ///
    /// Returns `None` when nothing changed hands (empty to empty).
    pub fn from_change(
        player: PlayerId,
        slot_type: impl Into<String>,
        slot_index: u32,
        previous_item: Option<ItemRef>,
        new_item: Option<ItemRef>,
    ) -> Option<Self> {
        let action = EquipAction::classify(previous_item.as_ref(), new_item.as_ref())?;
        Some(Self::new(
            player,
            slot_type,
            slot_index,
            previous_item,
            new_item,
            action,
        ))
    }
}

impl Cancellable for SlotEquipEvent {
    fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    fn set_cancelled(&mut self, cancelled: bool) {
        self.cancelled = cancelled;
    }
}

/// A crafting result is about to move into an inventory.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecipeTransferEvent {
    pub inventory: InventoryId,
    pub result: ItemRef,
    pub source: ItemRef,
    cancelled: bool,
}

impl RecipeTransferEvent {
    pub fn new(inventory: InventoryId, result: ItemRef, source: ItemRef) -> Self {
        Self {
            inventory,
            result,
            source,
            cancelled: false,
        }
    }
}

impl Cancellable for RecipeTransferEvent {
    fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    fn set_cancelled(&mut self, cancelled: bool) {
        self.cancelled = cancelled;
    }
}

/// Event wrapper passed to listeners.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotEvent {
    Equip(SlotEquipEvent),
    RecipeTransfer(RecipeTransferEvent),
}

impl SlotEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Equip(_) => "equip",
            Self::RecipeTransfer(_) => "recipe_transfer",
        }
    }
}

impl Cancellable for SlotEvent {
    fn is_cancelled(&self) -> bool {
        match self {
            Self::Equip(event) => event.is_cancelled(),
            Self::RecipeTransfer(event) => event.is_cancelled(),
        }
    }

    fn set_cancelled(&mut self, cancelled: bool) {
        match self {
            Self::Equip(event) => event.set_cancelled(cancelled),
            Self::RecipeTransfer(event) => event.set_cancelled(cancelled),
        }
    }
}

impl From<SlotEquipEvent> for SlotEvent {
    fn from(event: SlotEquipEvent) -> Self {
        Self::Equip(event)
    }
}

impl From<RecipeTransferEvent> for SlotEvent {
    fn from(event: RecipeTransferEvent) -> Self {
        Self::RecipeTransfer(event)
    }
}

/// Observer of slot events.
pub trait SlotListener: Send + Sync {
    /// Identifier used in logs.
    fn name(&self) -> &'static str;

    /// Inspects the event and may cancel (or un-cancel) it.
    fn on_event(&self, event: &mut SlotEvent);
}

/// Delivers events to listeners in registration order.
///
/// Every listener sees the event, including ones already cancelled by an
/// earlier listener; the final flag decides the outcome.
#[derive(Clone, Default)]
pub struct EventDispatcher {
    listeners: Vec<Arc<dyn SlotListener>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, listener: Arc<dyn SlotListener>) {
        self.listeners.push(listener);
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Dispatches `event` and returns true if it should proceed.
    pub fn dispatch(&self, event: &mut SlotEvent) -> bool {
        for listener in &self.listeners {
            listener.on_event(event);
        }

        if event.is_cancelled() {
            tracing::debug!(kind = event.kind(), "slot event cancelled by listener");
            false
        } else {
            true
        }
    }
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDispatcher")
            .field(
                "listeners",
                &self.listeners.iter().map(|l| l.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
