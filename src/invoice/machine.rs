//! Invoice-bound machine with transition logging.

use crate::core::{Command, State};
use crate::engine::{Fired, Machine, TransitionError};
use crate::invoice::entity::{Invoice, InvoiceCommand, InvoiceState};
use crate::invoice::InvoiceTable;
use tracing::debug;

/// A state machine for one invoice.
///
/// Delegates every decision to the shared invoice table and logs the
/// outcome at `debug` level.
pub struct InvoiceStateMachine<'a> {
    machine: Machine<'a, Invoice, InvoiceCommand>,
}

impl<'a> InvoiceStateMachine<'a> {
    pub fn new(table: &'a InvoiceTable, invoice: &'a mut Invoice) -> Self {
        Self {
            machine: table.bind(invoice),
        }
    }

    /// Apply `command` to the invoice.
    pub fn execute(
        &mut self,
        command: InvoiceCommand,
    ) -> Result<Fired<InvoiceState, InvoiceCommand>, TransitionError> {
        match self.machine.execute(&command) {
            Ok(fired) => {
                debug!(
                    from = fired.from.name(),
                    command = fired.command.name(),
                    to = fired.to.name(),
                    "invoice transition applied"
                );
                Ok(fired)
            }
            Err(err) => {
                debug!(error = %err, "invoice command rejected");
                Err(err)
            }
        }
    }

    pub fn state(&self) -> InvoiceState {
        self.machine.current_state()
    }

    pub fn can_execute(&self, command: InvoiceCommand) -> bool {
        self.machine.can_execute(&command)
    }

    pub fn permitted_commands(&self) -> Vec<InvoiceCommand> {
        self.machine.permitted_commands()
    }

    /// True once the invoice is rejected, completed or abandoned.
    pub fn is_terminal(&self) -> bool {
        self.machine.is_terminal()
    }

    pub fn invoice(&self) -> &Invoice {
        self.machine.entity()
    }
}
