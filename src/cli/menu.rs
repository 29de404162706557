use colored::Colorize;

use crate::{
    cli::{
        Console, Flow,
        prompt::{self, PromptError, Prompter, Selection},
    },
    info,
    remote::RemoteInvoker,
    warning,
};

const TITLE: &str = r"
  ____              _   _  __ _      _ _
 / ___| _ __   ___ | |_(_)/ _(_) ___(_) |_ _   _
 \___ \| '_ \ / _ \| __| | |_| |/ __| | __| | | |
  ___) | |_) | (_) | |_| |  _| | (__| | |_| |_| |
 |____/| .__/ \___/ \__|_|_| |_|\___|_|\__|\__, |
       |_|                                 |___/
";

const SELECTION_PROMPT: &str = "\nWhat would you like to do? Make a selection:\n> ";

/// The operations reachable from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Add,
    Remove,
    Quit,
}

/// One row of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub operation: Operation,
    /// An access token is obtained before the operation runs.
    pub requires_token: bool,
    /// The operator is offered the menu again once the operation is done.
    pub loops_to_menu: bool,
}

/// Main menu registry, in display order.
pub const MENU: [MenuEntry; 4] = [
    MenuEntry {
        label: "List Out Current Monitored Artists",
        operation: Operation::List,
        requires_token: false,
        loops_to_menu: true,
    },
    MenuEntry {
        label: "Add New Artist to List",
        operation: Operation::Add,
        requires_token: true,
        loops_to_menu: true,
    },
    MenuEntry {
        label: "Remove Artist From List",
        operation: Operation::Remove,
        requires_token: false,
        loops_to_menu: true,
    },
    MenuEntry {
        label: "Quit App",
        operation: Operation::Quit,
        requires_token: false,
        loops_to_menu: false,
    },
];

impl<I, P> Console<I, P>
where
    I: RemoteInvoker,
    P: Prompter,
{
    /// Runs the main menu until the operator quits.
    ///
    /// Choosing Quit, answering `q` at a continue prompt, an interrupt and
    /// closed input all leave through the same farewell.
    pub async fn run_menu(&mut self) {
        println!("{}", TITLE.green().bold());

        loop {
            print_menu();

            let index = match prompt::ask_index(&mut self.prompter, SELECTION_PROMPT, MENU.len(), false)
                .await
            {
                Ok(Selection::Index(index)) => index,
                Ok(Selection::Back) => continue,
                Err(e) => {
                    log::debug!("Leaving menu: {}", e);
                    break;
                }
            };

            let Some(&entry) = MENU.get(index - 1) else {
                continue;
            };
            log::debug!("Menu selection: {:?}", entry.operation);

            match self.dispatch(&entry).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) => {
                    log::debug!("Leaving menu: {}", e);
                    break;
                }
            }
        }

        farewell();
    }

    async fn dispatch(&mut self, entry: &MenuEntry) -> Result<Flow, PromptError> {
        let token = if entry.requires_token {
            match self.session.token(&self.invoker).await {
                Ok(token) => Some(token),
                Err(e) => {
                    warning!("Cannot obtain an access token. {}", e);
                    return self.finish(entry.loops_to_menu).await;
                }
            }
        } else {
            None
        };

        match entry.operation {
            Operation::List => self.list_artists(false, entry.loops_to_menu).await,
            Operation::Add => {
                let Some(token) = token else {
                    return self.finish(entry.loops_to_menu).await;
                };
                self.add_artist(&token, entry.loops_to_menu).await
            }
            Operation::Remove => self.remove_artist(entry.loops_to_menu).await,
            Operation::Quit => Ok(Flow::Quit),
        }
    }
}

fn print_menu() {
    println!("\n{}", "MAIN MENU".bold().underline());
    for (i, entry) in MENU.iter().enumerate() {
        println!("  [{}] {}", (i + 1).to_string().bright_blue(), entry.label);
    }
}

fn farewell() {
    info!("Quitting App!");
}
