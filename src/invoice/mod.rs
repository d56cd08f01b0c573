//! Invoice lifecycle binding.
//!
//! Declares the invoice's states, commands and transition table on top of
//! the generic engine:
//!
//! ```text
//! Draft ──confirm──▶ WaitingForApproval ──approve [needs_signature]──▶ WaitingForSignature
//!                        │  │  └──approve──▶ WaitingForPayment ◀──receiveSignature──┘
//!                        │  └──reject──▶ Rejected        │
//!                        └──receiveSignature (stays)     └──pay──▶ Completed
//!
//! every non-terminal state ──abandon──▶ Abandoned
//! ```

mod entity;
mod machine;

pub use entity::{Invoice, InvoiceCommand, InvoiceState};
pub use machine::InvoiceStateMachine;

use crate::builder::BuildError;
use crate::core::Guard;
use crate::engine::TransitionTable;

/// The invoice transition table type.
pub type InvoiceTable = TransitionTable<Invoice, InvoiceCommand>;

/// Guard for the signature branch of `Approve`.
pub fn needs_signature() -> Guard<Invoice> {
    Guard::named("needs_signature", Invoice::needs_signature)
}

/// Build the invoice transition table.
///
/// Build it once and share it; every invoice machine only borrows it.
///
/// # Example
///
/// ```rust
/// use waypoint::invoice::{invoice_table, Invoice, InvoiceCommand, InvoiceState, InvoiceStateMachine};
///
/// let table = invoice_table().unwrap();
/// let mut invoice = Invoice::new(true);
///
/// let mut sm = InvoiceStateMachine::new(&table, &mut invoice);
/// sm.execute(InvoiceCommand::Confirm).unwrap();
/// sm.execute(InvoiceCommand::Approve).unwrap();
///
/// assert_eq!(invoice.state(), InvoiceState::WaitingForSignature);
/// ```
pub fn invoice_table() -> Result<InvoiceTable, BuildError> {
    use crate::invoice::InvoiceCommand::*;
    use crate::invoice::InvoiceState::*;

    TransitionTable::<Invoice, InvoiceCommand>::builder()
        .states(InvoiceState::ALL.iter().copied())
        .commands(InvoiceCommand::ALL.iter().copied())
        .permit(Draft, Confirm, WaitingForApproval)
        .permit(Draft, Abandon, Abandoned)
        .permit_if(WaitingForApproval, Approve, WaitingForSignature, needs_signature())
        .permit(WaitingForApproval, Approve, WaitingForPayment)
        .permit(WaitingForApproval, Reject, Rejected)
        // A signature that arrives before approval is accepted and kept waiting.
        .permit(WaitingForApproval, ReceiveSignature, WaitingForApproval)
        .permit(WaitingForApproval, Abandon, Abandoned)
        .permit(WaitingForSignature, ReceiveSignature, WaitingForPayment)
        .permit(WaitingForSignature, Abandon, Abandoned)
        .permit(WaitingForPayment, Pay, Completed)
        .permit(WaitingForPayment, Abandon, Abandoned)
        .build()
}
