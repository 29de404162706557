//! Typed wrappers around the raw remote operations.
//!
//! Each function serializes its request, invokes the operation once and turns
//! the response envelope into domain values. Operation-specific failure
//! markers (an `error` field, a 204 status, a non-200 write status) are
//! detected here and reported as [`RemoteError::Application`].

use chrono::Utc;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{
    remote::{RemoteError, RemoteInvoker, RemoteOperation},
    types::{
        Artist, Candidate, LatestMusic, LatestMusicRequest, LatestMusicResponse,
        ListArtistsResponse, Release, SearchArtistRequest, SearchArtistResponse, Token,
        TokenResponse, WriteResponse,
    },
    utils,
};

/// Asks the backend to mint an access token for this session.
///
/// An absent or empty `access_token` field counts as an application failure.
pub async fn issue_token<I>(invoker: &I) -> Result<Token, RemoteError>
where
    I: RemoteInvoker + ?Sized,
{
    let operation = RemoteOperation::IssueToken;
    let envelope = invoker.invoke(operation, None).await?;
    let response: TokenResponse = decode(operation, envelope)?;

    match response.access_token {
        Some(access_token) if !access_token.trim().is_empty() => Ok(Token {
            access_token,
            obtained_at: Utc::now().timestamp() as u64,
        }),
        _ => Err(RemoteError::Application(
            "Failed to retrieve an access token.".to_string(),
        )),
    }
}

/// Fetches a fresh snapshot of the monitored artists.
///
/// An `error` inside the payload is checked before anything else. A
/// `status_code` of 204 means the watch-list is empty, which is a valid
/// answer and yields an empty vector.
pub async fn list_artists<I>(invoker: &I) -> Result<Vec<Artist>, RemoteError>
where
    I: RemoteInvoker + ?Sized,
{
    let operation = RemoteOperation::ListArtists;
    let envelope = invoker.invoke(operation, None).await?;
    let response: ListArtistsResponse = decode(operation, envelope)?;

    if let Some(error) = response.payload.as_ref().and_then(|p| p.error.as_ref()) {
        return Err(RemoteError::Application(format!(
            "Failed to retrieve monitored artists: {}",
            utils::value_text(error)
        )));
    }

    match response.status_code {
        Some(204) => Ok(Vec::new()),
        Some(200) | None => Ok(response
            .payload
            .and_then(|p| p.artists)
            .unwrap_or_default()
            .current_artists_with_id),
        Some(other) => Err(RemoteError::Application(format!(
            "{} returned status {}",
            operation, other
        ))),
    }
}

/// Searches the catalog for artists matching a free-text query.
///
/// Candidates are returned in the backend's relevance order, untouched.
pub async fn search_artist<I>(
    invoker: &I,
    artist_name: &str,
    token: &Token,
) -> Result<Vec<Candidate>, RemoteError>
where
    I: RemoteInvoker + ?Sized,
{
    let operation = RemoteOperation::SearchArtist;
    let payload = encode(
        operation,
        &SearchArtistRequest {
            artist_name,
            access_token: &token.access_token,
        },
    )?;
    let envelope = invoker.invoke(operation, Some(payload)).await?;
    let response: SearchArtistResponse = decode(operation, envelope)?;

    match response.payload {
        Some(payload) => match payload.error {
            Some(error) => Err(RemoteError::Application(format!(
                "Failed to retrieve a list of matches: {}",
                utils::value_text(&error)
            ))),
            None => Ok(payload.results),
        },
        None => Ok(Vec::new()),
    }
}

/// Adds an artist to the backend watch-list and returns the confirmed entry.
pub async fn add_artist<I>(invoker: &I, artist: &Artist) -> Result<Artist, RemoteError>
where
    I: RemoteInvoker + ?Sized,
{
    write(invoker, RemoteOperation::AddArtist, artist).await
}

/// Removes an artist from the backend watch-list and returns the confirmed entry.
pub async fn remove_artist<I>(invoker: &I, artist: &Artist) -> Result<Artist, RemoteError>
where
    I: RemoteInvoker + ?Sized,
{
    write(invoker, RemoteOperation::RemoveArtist, artist).await
}

/// Fetches the last album and single released by an artist.
pub async fn latest_music<I>(
    invoker: &I,
    artist: &Artist,
    token: &Token,
) -> Result<LatestMusic, RemoteError>
where
    I: RemoteInvoker + ?Sized,
{
    let operation = RemoteOperation::LatestMusic;
    let payload = encode(
        operation,
        &LatestMusicRequest {
            artist_id: artist.id(),
            artist_name: artist.name(),
            access_token: &token.access_token,
        },
    )?;
    let envelope = invoker.invoke(operation, Some(payload)).await?;
    let response: LatestMusicResponse = decode(operation, envelope)?;
    let payload = response.payload.unwrap_or_default();

    Ok(LatestMusic {
        album: payload.last_album_details.and_then(|d| {
            release(d.last_album_name, d.last_album_release_date)
        }),
        single: payload.last_single_details.and_then(|d| {
            release(d.last_single_name, d.last_single_release_date)
        }),
    })
}

/// Serializes an artist into the request body of an add or remove call.
pub fn write_request(operation: RemoteOperation, artist: &Artist) -> Result<Vec<u8>, RemoteError> {
    encode(operation, artist)
}

async fn write<I>(
    invoker: &I,
    operation: RemoteOperation,
    artist: &Artist,
) -> Result<Artist, RemoteError>
where
    I: RemoteInvoker + ?Sized,
{
    let payload = write_request(operation, artist)?;
    let envelope = invoker.invoke(operation, Some(payload)).await?;
    let response: WriteResponse = decode(operation, envelope)?;

    if response.status_code != 200 {
        return Err(RemoteError::Application(format!(
            "{} returned status {} for {}",
            operation,
            response.status_code,
            artist.name()
        )));
    }

    Ok(artist.clone())
}

fn release(name: Option<String>, release_date: Option<String>) -> Option<Release> {
    name.filter(|n| !n.is_empty()).map(|name| Release {
        name,
        release_date: release_date.unwrap_or_else(|| utils::PLACEHOLDER.to_string()),
    })
}

fn encode<T: Serialize>(operation: RemoteOperation, request: &T) -> Result<Vec<u8>, RemoteError> {
    serde_json::to_vec(request).map_err(|e| {
        RemoteError::transport(
            "MalformedRequest",
            format!("Cannot serialize {} request: {}", operation, e),
        )
    })
}

fn decode<T: DeserializeOwned>(operation: RemoteOperation, envelope: Value) -> Result<T, RemoteError> {
    serde_json::from_value(envelope).map_err(|e| {
        RemoteError::transport(
            "MalformedResponse",
            format!("Unexpected {} response: {}", operation, e),
        )
    })
}
