//! Event emission patterns and utilities

use soroban_sdk::{symbol_short, Address, Env, Topics};

/// Event emission helper functions
pub struct Events;

impl Events {
    /// Emit an event with multiple topics
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `topics` - Tuple of topics (must implement Topics)
    /// * `data` - The event data (tuple)
    pub fn emit_with_topics<T, U>(e: &Env, topics: T, data: U)
    where
        T: Topics,
        U: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
    {
        e.events().publish(topics, data);
    }

    /// Emit a creation event for a freshly minted item
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `id` - The created item index
    /// * `creator` - The creator address
    /// * `data` - Additional event data
    pub fn emit_created<T>(e: &Env, id: u32, creator: &Address, data: T)
    where
        T: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
    {
        Self::emit_with_topics(e, (symbol_short!("Created"), id, creator.clone()), data);
    }

    /// Emit an update event
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `id` - The updated item index
    /// * `data` - The update data
    pub fn emit_updated<T>(e: &Env, id: u32, data: T)
    where
        T: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
    {
        Self::emit_with_topics(e, (symbol_short!("Updated"), id), data);
    }

    /// Emit a payment transfer event
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `from` - The sender address
    /// * `to` - The recipient address
    /// * `amount` - The transfer amount
    pub fn emit_transfer(e: &Env, from: &Address, to: &Address, amount: i128) {
        Self::emit_with_topics(
            e,
            (symbol_short!("Transfer"), from.clone(), to.clone()),
            (amount, e.ledger().timestamp()),
        );
    }

    /// Emit a custody change for a non-fungible item
    pub fn emit_custody(e: &Env, id: u32, from: &Address, to: &Address) {
        Self::emit_with_topics(
            e,
            (symbol_short!("Custody"), id),
            (from.clone(), to.clone(), e.ledger().timestamp()),
        );
    }
}
