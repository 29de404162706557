//! # CLI Module
//!
//! This module provides the interactive layer of Spotificity: the prompts, the
//! disambiguation flow that narrows a free-text search to one artist, the three
//! watch-list actions and the main menu that dispatches them.
//!
//! ## Overview
//!
//! All actions run on a [`Console`], which owns the session state together with
//! the two seams to the outside world:
//!
//! - a [`RemoteInvoker`] to reach the backend
//! - a [`Prompter`] to read operator input
//!
//! ## Command Categories
//!
//! ### Watch-List Actions
//!
//! - [`Console::list_artists`] - Prints the monitored artists, loading them on first use
//! - [`Console::add_artist`] - Searches, confirms and adds an artist
//! - [`Console::remove_artist`] - Removes an artist chosen by its list position
//!
//! ### Menu
//!
//! - [`Console::run_menu`] - Loops over the static [`MENU`] registry until the operator quits
//!
//! ### Releases
//!
//! - [`Console::latest_releases`] - Shows the last album and single of every monitored artist
//!
//! ## Data Flow
//!
//! ```text
//! Menu selection
//!     ↓
//! Action (list / add / remove)
//!     ↓
//! ArtistCache  ←→  RemoteInvoker  (+ disambiguation for add)
//!     ↓
//! Result printed, continue-or-quit prompt
//! ```
//!
//! ## Error Handling
//!
//! The actions are the last line of defense. Remote failures are turned into a
//! warning and the cache is left as it was; invalid input is re-prompted. Only
//! prompt failures (interrupt, closed input) travel further up, and the menu routes
//! them to the same quit path as the Quit entry.

mod artists;
mod disambiguation;
mod latest;
mod menu;
pub mod prompt;

use thiserror::Error;

pub use disambiguation::Disambiguation;
pub use disambiguation::choose_candidate;
pub use disambiguation::disambiguate;
pub use menu::MENU;
pub use menu::MenuEntry;
pub use menu::Operation;
pub use prompt::Prompter;
pub use prompt::StdinPrompter;

use crate::{
    management::Session,
    remote::{RemoteError, RemoteInvoker},
};

/// What the caller should do once an action has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Error, Debug)]
pub enum FlowError {
    #[error(transparent)]
    Prompt(#[from] prompt::PromptError),

    #[error(transparent)]
    Remote(#[from] RemoteError),
}

/// One operator session: state plus the remote and input seams.
pub struct Console<I, P> {
    invoker: I,
    prompter: P,
    session: Session,
}

impl<I, P> Console<I, P>
where
    I: RemoteInvoker,
    P: Prompter,
{
    pub fn new(invoker: I, prompter: P) -> Self {
        Self::with_session(invoker, prompter, Session::new())
    }

    pub fn with_session(invoker: I, prompter: P, session: Session) -> Self {
        Self {
            invoker,
            prompter,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn invoker(&self) -> &I {
        &self.invoker
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Ends an action: back to the menu after a continue prompt, or straight
    /// out when the action was not started from the menu.
    async fn finish(&mut self, continue_prompt: bool) -> Result<Flow, prompt::PromptError> {
        if continue_prompt {
            prompt::ask_continue(&mut self.prompter).await
        } else {
            Ok(Flow::Quit)
        }
    }
}
