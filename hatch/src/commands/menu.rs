//! The interactive main menu shown when no subcommand is given.

use eyre::Result;
use hatch_core::Config;

use super::new::NewCommand;
use crate::prompt::{self, MenuChoice};

pub fn run(config: &Config) -> Result<()> {
    loop {
        match prompt::main_menu()? {
            MenuChoice::Exit => return Ok(()),
            MenuChoice::CreateProject => {
                // a failed run is reported but does not leave the menu
                if let Err(e) = NewCommand::interactive().run(config) {
                    eprintln!("error: {:#}", e);
                }
            }
        }

        println!();
        if !prompt::return_to_menu()? {
            return Ok(());
        }
    }
}
