mod common;

use common::*;
use serde_json::json;
use spotificity::{
    cli::{Disambiguation, FlowError, choose_candidate, disambiguate},
    remote::{RemoteError, RemoteOperation},
    types::Candidate,
};

fn candidate(id: &str, name: &str, genres: Option<&[&str]>) -> Candidate {
    Candidate {
        id: id.to_string(),
        name: name.to_string(),
        genres: genres.map(|g| g.iter().map(|s| s.to_string()).collect()),
    }
}

fn candidates() -> Vec<Candidate> {
    vec![
        candidate("1", "Nirvana", Some(&["grunge", "rock"][..])),
        candidate("2", "Nirvana (UK)", None),
        candidate("3", "Nirvana Tribute", Some(&[][..])),
    ]
}

#[tokio::test]
async fn test_yes_confirms_top_candidate() {
    let mut prompter = ScriptedPrompter::new(&["Yeah"]);

    let outcome = choose_candidate(&mut prompter, &candidates()).await.unwrap();

    assert_eq!(outcome, Disambiguation::Confirmed(artist("1", "Nirvana")));
    assert_eq!(prompter.prompts.len(), 1);
}

#[tokio::test]
async fn test_no_then_index_picks_from_list() {
    let mut prompter = ScriptedPrompter::new(&["nope", "2"]);

    let outcome = choose_candidate(&mut prompter, &candidates()).await.unwrap();

    assert_eq!(outcome, Disambiguation::Confirmed(artist("2", "Nirvana (UK)")));
}

#[tokio::test]
async fn test_last_candidate_can_be_picked() {
    let mut prompter = ScriptedPrompter::new(&["no", "3"]);

    let outcome = choose_candidate(&mut prompter, &candidates()).await.unwrap();

    assert_eq!(outcome, Disambiguation::Confirmed(artist("3", "Nirvana Tribute")));
    assert_eq!(prompter.prompts.len(), 2);
}

#[tokio::test]
async fn test_back_abandons_search() {
    let mut prompter = ScriptedPrompter::new(&["n", "b"]);

    let outcome = choose_candidate(&mut prompter, &candidates()).await.unwrap();

    assert_eq!(outcome, Disambiguation::Abandoned);
}

#[tokio::test]
async fn test_invalid_answers_are_reprompted() {
    let mut prompter = ScriptedPrompter::new(&["maybe", "back", "no", "9", "zero", "3"]);

    let outcome = choose_candidate(&mut prompter, &candidates()).await.unwrap();

    assert_eq!(outcome, Disambiguation::Confirmed(artist("3", "Nirvana Tribute")));
    assert_eq!(prompter.prompts_containing("the artist you were looking for?"), 3);
    assert_eq!(prompter.prompts_containing("Select the number"), 3);
}

#[tokio::test]
async fn test_single_candidate_still_needs_confirmation() {
    let only = vec![candidate("7", "Solo", None)];
    let mut prompter = ScriptedPrompter::new(&["no", "1"]);

    let outcome = choose_candidate(&mut prompter, &only).await.unwrap();

    assert_eq!(outcome, Disambiguation::Confirmed(artist("7", "Solo")));
    assert_eq!(prompter.prompts.len(), 2);
}

#[tokio::test]
async fn test_closed_input_is_an_error() {
    let mut prompter = ScriptedPrompter::new(&[]);

    assert!(choose_candidate(&mut prompter, &candidates()).await.is_err());
}

#[tokio::test]
async fn test_disambiguate_without_matches() {
    let invoker = FakeInvoker::new().ok(RemoteOperation::SearchArtist, search_results(json!([])));
    let mut prompter = ScriptedPrompter::new(&[]);

    let outcome = disambiguate(&mut prompter, &invoker, "zzz", &token())
        .await
        .unwrap();

    assert_eq!(outcome, Disambiguation::NoMatches);
    assert!(prompter.prompts.is_empty());
}

#[tokio::test]
async fn test_disambiguate_keeps_backend_order() {
    let invoker = FakeInvoker::new().ok(
        RemoteOperation::SearchArtist,
        search_results(json!([
            { "id": "z", "name": "Zeta" },
            { "id": "a", "name": "Alpha", "genres": ["pop"] }
        ])),
    );
    let mut prompter = ScriptedPrompter::new(&["y"]);

    let outcome = disambiguate(&mut prompter, &invoker, "a", &token())
        .await
        .unwrap();

    assert_eq!(outcome, Disambiguation::Confirmed(artist("z", "Zeta")));
}

#[tokio::test]
async fn test_disambiguate_passes_remote_errors_up() {
    let invoker = FakeInvoker::new().reply(
        RemoteOperation::SearchArtist,
        Err(RemoteError::transport("401", "Unauthorized")),
    );
    let mut prompter = ScriptedPrompter::new(&[]);

    let result = disambiguate(&mut prompter, &invoker, "x", &token()).await;

    assert!(matches!(
        result,
        Err(FlowError::Remote(RemoteError::Transport { ref code, .. })) if code == "401"
    ));
}
