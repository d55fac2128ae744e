//! # Order Lifecycle
//!
//! The transition table for [`OrderStatus`] and the guarded mutation that
//! applies it to an [`Order`].
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  pending ──► confirmed ──► preparing ──► ready ──► completed            │
//! │     │            │             │           │                            │
//! │     └────────────┴──────┬──────┴───────────┘                            │
//! │                         ▼                                               │
//! │                     cancelled                                           │
//! │                                                                         │
//! │  • One step forward at a time, never backwards                         │
//! │  • completed and cancelled are terminal                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The kitchen display only offers the legal next button, but the rule is
//! enforced here as well: [`Order::transition`] rejects anything else with
//! [`CoreError::InvalidTransition`].

use crate::error::{CoreError, CoreResult};
use crate::types::{Order, OrderStatus};

impl OrderStatus {
    /// The single forward successor, or `None` for terminal states.
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Confirmed),
            OrderStatus::Confirmed => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Completed),
            OrderStatus::Completed | OrderStatus::Cancelled => None,
        }
    }

    /// `completed` and `cancelled` accept no further changes.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    /// Orders the kitchen still has to deal with.
    pub fn is_active(self) -> bool {
        !self.is_terminal()
    }

    /// Whether `target` is a legal successor of `self`.
    pub fn can_transition_to(self, target: OrderStatus) -> bool {
        if self.is_terminal() {
            return false;
        }
        target == OrderStatus::Cancelled || self.next() == Some(target)
    }

    /// Label of the forward button on the order card.
    pub fn admin_action_label(self) -> Option<&'static str> {
        match self {
            OrderStatus::Pending => Some("Confirm Order"),
            OrderStatus::Confirmed => Some("Start Preparing"),
            OrderStatus::Preparing => Some("Mark Ready"),
            OrderStatus::Ready => Some("Complete"),
            OrderStatus::Completed | OrderStatus::Cancelled => None,
        }
    }
}

impl Order {
    /// Moves the order to `target` if the transition table allows it.
    ///
    /// ## Returns
    /// * `Ok(previous)` - the status the order had before
    /// * `Err(CoreError::InvalidTransition)` - status left untouched
    pub fn transition(&mut self, target: OrderStatus) -> CoreResult<OrderStatus> {
        if !self.status.can_transition_to(target) {
            return Err(CoreError::InvalidTransition {
                order_id: self.id.clone(),
                from: self.status,
                to: target,
            });
        }

        let previous = self.status;
        self.status = target;
        Ok(previous)
    }

    /// Applies the forward transition, if any.
    pub fn advance(&mut self) -> CoreResult<OrderStatus> {
        match self.status.next() {
            Some(next) => self.transition(next),
            None => Err(CoreError::InvalidTransition {
                order_id: self.id.clone(),
                from: self.status,
                to: self.status,
            }),
        }
    }

    /// Cancels a non-terminal order.
    pub fn cancel(&mut self) -> CoreResult<OrderStatus> {
        self.transition(OrderStatus::Cancelled)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
