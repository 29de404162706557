use std::collections::HashSet;

use thiserror::Error;

use crate::{
    remote::{RemoteError, RemoteInvoker, calls},
    types::Artist,
};

/// Whether the cache has ever been filled from the backend, and with what.
///
/// `LoadedEmpty` is kept apart from `Unloaded` so a genuinely empty
/// watch-list does not trigger a remote call on every listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    Unloaded,
    LoadedEmpty,
    LoadedNonEmpty,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Selection {index} is out of range. Choose a number between 1 and {len}.")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("You're already monitoring {name}!")]
    DuplicateId { id: String, name: String },
}

/// Local mirror of the backend watch-list.
///
/// Insertion order is display order and no two entries share an id. The
/// cache is write-through: callers mutate it only after the matching remote
/// write has been confirmed.
#[derive(Debug, Clone)]
pub struct ArtistCache {
    artists: Vec<Artist>,
    state: CacheState,
}

impl Default for ArtistCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtistCache {
    pub fn new() -> Self {
        Self {
            artists: Vec::new(),
            state: CacheState::Unloaded,
        }
    }

    /// Returns the cached watch-list, fetching a fresh snapshot first when
    /// the cache was never loaded or `force_refresh` is set.
    ///
    /// On failure the previous contents and state are left untouched.
    pub async fn load<I>(&mut self, invoker: &I, force_refresh: bool) -> Result<&[Artist], RemoteError>
    where
        I: RemoteInvoker + ?Sized,
    {
        if force_refresh || self.state == CacheState::Unloaded {
            let fresh = calls::list_artists(invoker).await?;
            self.replace(fresh);
        }

        Ok(&self.artists)
    }

    /// Replaces the whole contents with a backend snapshot.
    ///
    /// Later duplicates of an id are dropped so the uniqueness invariant
    /// holds even if the backend repeats itself.
    pub fn replace(&mut self, artists: Vec<Artist>) {
        let mut seen_ids = HashSet::new();
        self.artists = artists
            .into_iter()
            .filter(|a| seen_ids.insert(a.id().to_string()))
            .collect();
        self.state = if self.artists.is_empty() {
            CacheState::LoadedEmpty
        } else {
            CacheState::LoadedNonEmpty
        };
        log::debug!(
            "Artist cache replaced with {} entries ({:?})",
            self.artists.len(),
            self.state
        );
    }

    /// Appends an artist unless its id is already cached.
    ///
    /// Returns `false` and leaves the cache as is for a duplicate id.
    pub fn add(&mut self, artist: Artist) -> bool {
        if self.contains(artist.id()) {
            return false;
        }

        self.artists.push(artist);
        if self.state != CacheState::Unloaded {
            self.state = CacheState::LoadedNonEmpty;
        }
        true
    }

    /// Removes and returns the entry at a 1-based display position.
    pub fn remove(&mut self, index: usize) -> Result<Artist, CacheError> {
        self.check_index(index)?;

        let artist = self.artists.remove(index - 1);
        if self.artists.is_empty() && self.state != CacheState::Unloaded {
            self.state = CacheState::LoadedEmpty;
        }
        Ok(artist)
    }

    /// Entry at a 1-based display position.
    pub fn get(&self, index: usize) -> Option<&Artist> {
        index.checked_sub(1).and_then(|i| self.artists.get(i))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.artists.iter().any(|a| a.id() == id)
    }

    /// Precondition for adding: the artist must not be cached yet.
    pub fn ensure_absent(&self, artist: &Artist) -> Result<(), CacheError> {
        if self.contains(artist.id()) {
            return Err(CacheError::DuplicateId {
                id: artist.id().to_string(),
                name: artist.name().to_string(),
            });
        }
        Ok(())
    }

    pub fn check_index(&self, index: usize) -> Result<(), CacheError> {
        if index == 0 || index > self.artists.len() {
            return Err(CacheError::IndexOutOfRange {
                index,
                len: self.artists.len(),
            });
        }
        Ok(())
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    pub fn state(&self) -> CacheState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artist(id: &str, name: &str) -> Artist {
        Artist::new(id, name)
    }

    fn loaded(artists: &[(&str, &str)]) -> ArtistCache {
        let mut cache = ArtistCache::new();
        cache.replace(artists.iter().map(|(id, name)| artist(id, name)).collect());
        cache
    }

    #[test]
    fn starts_unloaded_and_empty() {
        let cache = ArtistCache::new();
        assert_eq!(cache.state(), CacheState::Unloaded);
        assert!(cache.is_empty());
    }

    #[test]
    fn replace_sets_tri_state_flag() {
        let mut cache = ArtistCache::new();
        cache.replace(Vec::new());
        assert_eq!(cache.state(), CacheState::LoadedEmpty);

        cache.replace(vec![artist("1", "A")]);
        assert_eq!(cache.state(), CacheState::LoadedNonEmpty);
    }

    #[test]
    fn replace_drops_repeated_ids_keeping_first() {
        let cache = loaded(&[("1", "A"), ("2", "B"), ("1", "A again")]);
        let names: Vec<&str> = cache.artists().iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let mut cache = loaded(&[("1", "A")]);
        assert!(cache.add(artist("2", "B")));
        assert!(cache.add(artist("3", "C")));
        let ids: Vec<&str> = cache.artists().iter().map(|a| a.id()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn add_rejects_duplicate_id() {
        let mut cache = loaded(&[("1", "A")]);
        assert!(!cache.add(artist("1", "Renamed")));
        assert_eq!(cache.artists(), &[artist("1", "A")]);
    }

    #[test]
    fn add_to_empty_loaded_cache_marks_non_empty() {
        let mut cache = loaded(&[]);
        assert!(cache.add(artist("9", "Z")));
        assert_eq!(cache.state(), CacheState::LoadedNonEmpty);
    }

    #[test]
    fn add_before_first_load_keeps_cache_unloaded() {
        let mut cache = ArtistCache::new();
        assert!(cache.add(artist("9", "Z")));
        assert_eq!(cache.state(), CacheState::Unloaded);
    }

    #[test]
    fn uniqueness_holds_over_mixed_operations() {
        let mut cache = loaded(&[("1", "A"), ("2", "B")]);
        for (id, name) in [("3", "C"), ("1", "A"), ("4", "D"), ("3", "C")] {
            cache.add(artist(id, name));
        }
        cache.remove(2).unwrap();
        cache.add(artist("2", "B"));
        cache.add(artist("4", "D"));

        let mut ids: Vec<&str> = cache.artists().iter().map(|a| a.id()).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn remove_is_one_based() {
        let mut cache = loaded(&[("1", "A"), ("2", "B")]);
        let removed = cache.remove(2).unwrap();
        assert_eq!(removed, artist("2", "B"));
        assert_eq!(cache.artists(), &[artist("1", "A")]);
    }

    #[test]
    fn remove_out_of_range_leaves_cache_untouched() {
        let mut cache = loaded(&[("1", "A"), ("2", "B")]);
        let before = cache.artists().to_vec();

        assert_eq!(
            cache.remove(0),
            Err(CacheError::IndexOutOfRange { index: 0, len: 2 })
        );
        assert_eq!(
            cache.remove(3),
            Err(CacheError::IndexOutOfRange { index: 3, len: 2 })
        );
        assert_eq!(cache.artists(), before.as_slice());
    }

    #[test]
    fn removing_last_entry_marks_loaded_empty() {
        let mut cache = loaded(&[("1", "A")]);
        cache.remove(1).unwrap();
        assert_eq!(cache.state(), CacheState::LoadedEmpty);
    }

    #[test]
    fn ensure_absent_reports_duplicate() {
        let cache = loaded(&[("1", "A")]);
        assert!(cache.ensure_absent(&artist("2", "B")).is_ok());
        assert_eq!(
            cache.ensure_absent(&artist("1", "A")),
            Err(CacheError::DuplicateId {
                id: "1".to_string(),
                name: "A".to_string()
            })
        );
    }

    #[test]
    fn get_is_one_based() {
        let cache = loaded(&[("1", "A"), ("2", "B")]);
        assert_eq!(cache.get(1), Some(&artist("1", "A")));
        assert_eq!(cache.get(0), None);
        assert_eq!(cache.get(3), None);
    }
}
