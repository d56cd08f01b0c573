//! Invoice Lifecycle
//!
//! This example walks two invoices through their lifecycle with one shared
//! transition table.
//!
//! Key concepts:
//! - One immutable table, many entities
//! - Guards reading entity attributes (the signature requirement)
//! - Refused commands leave the invoice untouched
//!
//! Run with: RUST_LOG=debug cargo run --example invoice_lifecycle

use tracing_subscriber::EnvFilter;
use waypoint::core::State;
use waypoint::invoice::{invoice_table, Invoice, InvoiceCommand, InvoiceStateMachine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with_target(false)
        .init();

    println!("=== Invoice Lifecycle Example ===\n");

    let table = invoice_table()?;
    println!("Terminal states: {:?}\n", table.terminal_states());

    for needs_signature in [false, true] {
        let mut invoice = Invoice::new(needs_signature);
        let mut sm = InvoiceStateMachine::new(&table, &mut invoice);
        println!("Invoice (needs signature: {})", needs_signature);

        for command in [
            InvoiceCommand::Confirm,
            InvoiceCommand::Approve,
            InvoiceCommand::Pay,
            InvoiceCommand::ReceiveSignature,
            InvoiceCommand::Pay,
            InvoiceCommand::Abandon,
        ] {
            match sm.execute(command) {
                Ok(fired) => println!("  {:?}: {} -> {}", command, fired.from.name(), fired.to.name()),
                Err(err) => println!("  {:?}: refused ({})", command, err),
            }
        }

        println!("  final state: {}\n", sm.state().name());
    }

    println!("Declared table:\n{}", serde_json::to_string_pretty(&table.describe())?);

    println!("\n=== Example Complete ===");
    Ok(())
}
