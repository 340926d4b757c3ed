use std::io::{self, BufRead, Write};

use taskdesk_store::TaskRepo;

use crate::commands;
use crate::prompt::Prompt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Exit,
    Add,
    List,
    Update,
    Delete,
    Filter,
}

impl Command {
    fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            0 => Some(Self::Exit),
            1 => Some(Self::Add),
            2 => Some(Self::List),
            3 => Some(Self::Update),
            4 => Some(Self::Delete),
            5 => Some(Self::Filter),
            _ => None,
        }
    }
}

const MENU: &str = "
==== TASK MENU ====
1. Add task
2. List tasks
3. Update task
4. Delete task
5. Filter tasks
0. Exit";

/// Dispatches menu picks until the operator exits or input ends. Every
/// command returns control here; nothing an operation does is fatal.
pub fn run_menu<R: BufRead, W: Write>(repo: &TaskRepo, prompt: &mut Prompt<R, W>) -> io::Result<()> {
    loop {
        prompt.say(MENU)?;

        let Some(choice) = prompt.read_number::<u32>("Pick an option: ")? else {
            return Ok(());
        };
        let Some(command) = Command::from_choice(choice) else {
            prompt.warn("Pick one of the options listed in the menu")?;
            continue;
        };

        match command {
            Command::Exit => return Ok(()),
            Command::Add => commands::add(repo, prompt)?,
            Command::List => commands::list(repo, prompt)?,
            Command::Update => commands::update(repo, prompt)?,
            Command::Delete => commands::delete(repo, prompt)?,
            Command::Filter => commands::filter(repo, prompt)?,
        }
    }
}
