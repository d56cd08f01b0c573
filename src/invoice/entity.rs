//! Invoice states, commands and the invoice entity.

use crate::core::Stateful;

crate::state_enum! {
    /// Lifecycle states of an invoice. `Rejected`, `Completed` and
    /// `Abandoned` have no outgoing rules.
    pub enum InvoiceState {
        Draft,
        WaitingForApproval,
        WaitingForSignature,
        WaitingForPayment,
        Rejected,
        Completed,
        Abandoned,
    }
}

crate::command_enum! {
    /// Actions a caller may request against an invoice.
    pub enum InvoiceCommand {
        Confirm,
        Approve,
        Reject,
        ReceiveSignature,
        Pay,
        Abandon,
    }
}

/// The slice of an invoice the lifecycle cares about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invoice {
    state: InvoiceState,
    needs_signature: bool,
}

impl Invoice {
    /// A fresh invoice in `Draft`.
    pub fn new(needs_signature: bool) -> Self {
        Self {
            state: InvoiceState::Draft,
            needs_signature,
        }
    }

    /// An invoice already at some point of its lifecycle, e.g. one loaded
    /// from storage.
    pub fn with_state(state: InvoiceState, needs_signature: bool) -> Self {
        Self {
            state,
            needs_signature,
        }
    }

    pub fn state(&self) -> InvoiceState {
        self.state
    }

    /// Whether approval must be followed by a signature before payment.
    pub fn needs_signature(&self) -> bool {
        self.needs_signature
    }
}

impl Stateful for Invoice {
    type State = InvoiceState;

    fn current_state(&self) -> InvoiceState {
        self.state
    }

    fn set_state(&mut self, state: InvoiceState) {
        self.state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Command, State};

    #[test]
    fn new_invoice_starts_in_draft() {
        let invoice = Invoice::new(true);

        assert_eq!(invoice.state(), InvoiceState::Draft);
        assert!(invoice.needs_signature());
    }

    #[test]
    fn set_state_overwrites_unconditionally() {
        let mut invoice = Invoice::new(false);

        invoice.set_state(InvoiceState::Completed);
        assert_eq!(invoice.current_state(), InvoiceState::Completed);

        invoice.set_state(InvoiceState::Draft);
        assert_eq!(invoice.current_state(), InvoiceState::Draft);
    }

    #[test]
    fn identifiers_have_stable_names() {
        assert_eq!(InvoiceState::WaitingForSignature.name(), "WaitingForSignature");
        assert_eq!(InvoiceCommand::ReceiveSignature.name(), "ReceiveSignature");
        assert_eq!(InvoiceState::ALL.len(), 7);
        assert_eq!(InvoiceCommand::ALL.len(), 6);
    }
}
