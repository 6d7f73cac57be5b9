//! Table from JSON
//!
//! This example loads a transition table from a JSON definition, audits
//! it, and walks it.
//!
//! Run with: cargo run --example json_table

use flowstate::audit::audit;
use flowstate::core::State;
use flowstate::{config, event_enum, state_enum, StateMachineBuilder};
use stillwater::validation::Validation;

state_enum! {
    enum Order {
        Cart,
        Payment,
        Shipped,
        Abandoned,
        Refunded,
    }
    final: [Shipped, Abandoned]
}

event_enum! {
    enum Step {
        Checkout,
        Pay,
        Cancel,
    }
}

const DEFINITION: &str = r#"{
    "Cart": {"Checkout": "Payment", "Cancel": "Abandoned"},
    "Payment": {"Pay": "Shipped", "Cancel": "Cart"},
    "Refunded": {"Checkout": "Payment"}
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("=== Table from JSON Example ===\n");

    let table = config::from_json::<Order, Step>(DEFINITION)?;
    println!("Loaded {} state(s)", table.len());

    match audit(&table, &Order::Cart) {
        Validation::Success(_) => println!("Audit: clean"),
        Validation::Failure(findings) => {
            println!("Audit findings:");
            for finding in findings.iter() {
                println!("  - {}", finding);
            }
        }
    }

    let mut machine = StateMachineBuilder::new()
        .initial(Order::Cart)
        .table(table)
        .build()?;

    for step in [Step::Checkout, Step::Cancel, Step::Checkout, Step::Pay, Step::Cancel] {
        match machine.transition(&step) {
            Some(next) => println!("{:?} -> {}", step, next.name()),
            None => println!("{:?} ignored", step),
        }
    }
    println!("\nFinished in final state: {}", machine.is_final());
    println!("\nDump:\n{}", config::to_json_pretty(machine.table())?);

    println!("\n=== Example Complete ===");
    Ok(())
}
