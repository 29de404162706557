use tabled::Table;

use crate::{
    cli::{Console, Prompter},
    info,
    remote::{RemoteInvoker, calls},
    utils, warning,
};

impl<I, P> Console<I, P>
where
    I: RemoteInvoker,
    P: Prompter,
{
    /// Prints the most recent album and single of every monitored artist.
    ///
    /// Artists whose lookup fails are reported and left out of the table.
    pub async fn latest_releases(&mut self) {
        let artists = match self.session.cache_mut().load(&self.invoker, false).await {
            Ok(artists) => artists.to_vec(),
            Err(e) => {
                warning!("Cannot load monitored artists. {}", e);
                return;
            }
        };

        if artists.is_empty() {
            warning!("No artists currently being monitored.");
            return;
        }

        let token = match self.session.token(&self.invoker).await {
            Ok(token) => token,
            Err(e) => {
                warning!("Cannot obtain an access token. {}", e);
                return;
            }
        };

        let mut rows = Vec::with_capacity(artists.len());
        for artist in &artists {
            match calls::latest_music(&self.invoker, artist, &token).await {
                Ok(music) => rows.push(utils::latest_music_row(artist, &music)),
                Err(e) => warning!("Cannot fetch latest music of {}. {}", artist.name(), e),
            }
        }

        if rows.is_empty() {
            return;
        }

        info!("Latest releases of monitored artists:");
        println!("{}", Table::new(rows));
    }
}
