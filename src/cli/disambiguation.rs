use colored::Colorize;
use tabled::Table;

use crate::{
    cli::{
        FlowError,
        prompt::{self, Answer, PromptError, Prompter, Selection},
    },
    remote::{RemoteInvoker, calls},
    types::{Artist, Candidate, Token},
    utils, warning,
};

/// How a search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disambiguation {
    /// The operator settled on this artist.
    Confirmed(Artist),
    /// The search produced no candidates.
    NoMatches,
    /// The operator went back to search again.
    Abandoned,
}

/// Turns a free-text query into one confirmed artist.
///
/// Searches once, then hands the ranked candidates to [`choose_candidate`].
/// Remote failures are returned as they are; the caller decides whether the
/// operator gets another try.
pub async fn disambiguate<I, P>(
    prompter: &mut P,
    invoker: &I,
    query: &str,
    token: &Token,
) -> Result<Disambiguation, FlowError>
where
    I: RemoteInvoker + ?Sized,
    P: Prompter + ?Sized,
{
    let candidates = calls::search_artist(invoker, query, token).await?;
    log::debug!("Search for '{}' returned {} candidates", query, candidates.len());

    if candidates.is_empty() {
        warning!("No matches found for '{}'.", query);
        return Ok(Disambiguation::NoMatches);
    }

    Ok(choose_candidate(prompter, &candidates).await?)
}

/// Offers the top-ranked candidate first; on "no" shows the full list and
/// lets the operator pick by number or go back.
///
/// Candidates are shown in the order given, never re-sorted. A single
/// candidate still needs an explicit confirmation.
pub async fn choose_candidate<P>(
    prompter: &mut P,
    candidates: &[Candidate],
) -> Result<Disambiguation, PromptError>
where
    P: Prompter + ?Sized,
{
    let Some(top) = candidates.first() else {
        return Ok(Disambiguation::NoMatches);
    };

    let question = format!(
        "\nIs {} the artist you were looking for? (yes or no)\n> ",
        top.name.bright_green()
    );
    match prompt::ask_answer(prompter, &question, &[Answer::Yes, Answer::No]).await? {
        Answer::Yes => return Ok(Disambiguation::Confirmed(top.to_artist())),
        Answer::No | Answer::Back => {}
    }

    println!("{}", Table::new(utils::candidate_rows(candidates)));

    let selection = prompt::ask_index(
        prompter,
        "\nWhich artist were you looking for? Select the number. (or enter `b` or `back` to return to search prompt)\n> ",
        candidates.len(),
        true,
    )
    .await?;

    // `ask_index` only yields positions within 1..=candidates.len().
    match selection {
        Selection::Index(index) => Ok(Disambiguation::Confirmed(
            candidates[index - 1].to_artist(),
        )),
        Selection::Back => Ok(Disambiguation::Abandoned),
    }
}
