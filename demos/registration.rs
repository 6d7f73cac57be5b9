//! Sign-up Flow
//!
//! This example drives the built-in registration table from a pretend host
//! that keeps its own navigation stack.
//!
//! Key concepts:
//! - The host turns button taps into actions
//! - The machine answers with the next screen, or nothing
//! - The host decides how to present it (push, pop, finish)
//! - A system back button pops the stack by itself, so `Back` only syncs the cursor
//!
//! Run with: cargo run --example registration

use flowstate::registration::{registration_machine, RegistrationAction, RegistrationState};
use flowstate::StateMachine;

struct Host {
    machine: StateMachine<RegistrationState, RegistrationAction>,
    stack: Vec<RegistrationState>,
}

impl Host {
    fn new() -> Self {
        Self {
            machine: registration_machine(),
            stack: vec![RegistrationState::Login],
        }
    }

    fn tap(&mut self, action: RegistrationAction) {
        let Some(next) = self.machine.transition(&action) else {
            println!("  {:?} ignored on {:?}", action, self.machine.current_state());
            return;
        };

        if action == RegistrationAction::Back {
            self.stack.pop();
            println!("  system back -> {:?}", next);
            return;
        }

        match next {
            RegistrationState::Finished => println!("  Logged in!"),
            RegistrationState::SelectAvatar
                if self.stack.last() == Some(&RegistrationState::FacebookProfile) =>
            {
                // Facebook profile is never revisited
                self.stack.pop();
                self.stack.push(next);
                println!("  replace -> {:?}", next);
            }
            _ => {
                self.stack.push(next);
                println!("  push -> {:?}", next);
            }
        }
    }
}

fn main() {
    env_logger::init();
    println!("=== Sign-up Flow Example ===\n");

    let mut host = Host::new();
    let taps = [
        RegistrationAction::Next,
        RegistrationAction::FacebookRegister,
        RegistrationAction::Back,
        RegistrationAction::Next,
        RegistrationAction::Back,
        RegistrationAction::RegisterLater,
        RegistrationAction::Next,
    ];

    for action in taps {
        println!("tap {:?}", action);
        host.tap(action);
    }

    println!("\nFinal screen: {:?}", host.machine.current_state());
    println!("Navigation stack: {:?}", host.stack);

    println!("\n=== Example Complete ===");
}
