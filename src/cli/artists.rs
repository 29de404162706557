use colored::Colorize;
use tabled::Table;

use crate::{
    cli::{
        Console, Disambiguation, Flow, FlowError, disambiguate,
        prompt::{self, PromptError, Prompter, Selection},
    },
    info,
    remote::{RemoteError, RemoteInvoker, calls},
    success,
    types::Token,
    utils, warning,
};

impl<I, P> Console<I, P>
where
    I: RemoteInvoker,
    P: Prompter,
{
    /// Prints the monitored artists as a 1-indexed list.
    ///
    /// The backend is only asked when the cache was never loaded or `refresh`
    /// is set; a confirmed-empty watch-list is answered from the cache.
    pub async fn list_artists(
        &mut self,
        refresh: bool,
        continue_prompt: bool,
    ) -> Result<Flow, PromptError> {
        self.show_artists(refresh).await;
        self.finish(continue_prompt).await
    }

    /// Searches for an artist, confirms the match and adds it to the
    /// watch-list.
    ///
    /// # Flow
    ///
    /// 1. Show the current watch-list for context
    /// 2. Ask for a search query (empty input returns to the menu)
    /// 3. Disambiguate; going back or finding nothing restarts at step 1
    /// 4. Stop if the chosen artist is already monitored
    /// 5. Issue the remote add and only then update the cache
    ///
    /// An application failure during the search sends the operator back to
    /// the search prompt. A transport failure aborts the action.
    pub async fn add_artist(
        &mut self,
        token: &Token,
        continue_prompt: bool,
    ) -> Result<Flow, PromptError> {
        loop {
            if !self.show_artists(false).await {
                break;
            }

            let query = self
                .prompter
                .read_line(
                    "\nWhich artist would you like to start monitoring? (leave empty to go back)\n> ",
                )
                .await?;
            let query = query.trim();
            if query.is_empty() {
                break;
            }

            let artist =
                match disambiguate(&mut self.prompter, &self.invoker, query, token).await {
                    Ok(Disambiguation::Confirmed(artist)) => artist,
                    Ok(Disambiguation::NoMatches | Disambiguation::Abandoned) => continue,
                    Err(FlowError::Prompt(e)) => return Err(e),
                    Err(FlowError::Remote(e @ RemoteError::Application(_))) => {
                        warning!("{}", e);
                        continue;
                    }
                    Err(FlowError::Remote(e)) => {
                        warning!("Search failed. {}", e);
                        break;
                    }
                };

            if let Err(e) = self.session.cache().ensure_absent(&artist) {
                info!("{}", e);
                break;
            }

            match calls::add_artist(&self.invoker, &artist).await {
                Ok(confirmed) => {
                    let name = confirmed.name().to_string();
                    self.session.cache_mut().add(confirmed);
                    success!(
                        "You are now monitoring for {}'s new music!",
                        name.bright_green()
                    );
                }
                Err(e) => warning!("Could not add {}. {}", artist.name(), e),
            }
            break;
        }

        self.finish(continue_prompt).await
    }

    /// Removes an artist chosen by its position in the listed watch-list.
    ///
    /// Out-of-range input is re-prompted. The cache entry is dropped only
    /// after the backend confirmed the removal.
    pub async fn remove_artist(&mut self, continue_prompt: bool) -> Result<Flow, PromptError> {
        if !self.show_artists(false).await || self.session.cache().is_empty() {
            return self.finish(continue_prompt).await;
        }

        let selection = prompt::ask_index(
            &mut self.prompter,
            "\nWhich artist would you like to remove? Make a selection: (or `b` to go back)\n> ",
            self.session.cache().len(),
            true,
        )
        .await?;

        let index = match selection {
            Selection::Index(index) => index,
            Selection::Back => return self.finish(continue_prompt).await,
        };

        let Some(artist) = self.session.cache().get(index).cloned() else {
            warning!("Selection {} is no longer available.", index);
            return self.finish(continue_prompt).await;
        };

        match calls::remove_artist(&self.invoker, &artist).await {
            Ok(_) => match self.session.cache_mut().remove(index) {
                Ok(removed) => success!("Removed {} from list!", removed.name().bright_green()),
                Err(e) => warning!("{}", e),
            },
            Err(e) => warning!("Could not remove {}. {}", artist.name(), e),
        }

        self.finish(continue_prompt).await
    }

    /// Loads and prints the watch-list. Returns `false` when it could not
    /// be loaded.
    async fn show_artists(&mut self, refresh: bool) -> bool {
        let artists = match self.session.cache_mut().load(&self.invoker, refresh).await {
            Ok(artists) => artists,
            Err(e) => {
                warning!("Cannot load monitored artists. {}", e);
                return false;
            }
        };

        if artists.is_empty() {
            warning!("No artists currently being monitored.");
        } else {
            info!("Current monitored artists:");
            println!("{}", Table::new(utils::artist_rows(artists)));
        }

        true
    }
}
