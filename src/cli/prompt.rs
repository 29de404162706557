use std::{
    io::{self, Write},
    sync::Arc,
    thread,
};

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::{Notify, mpsc};

use crate::{cli::Flow, warning};

const INVALID_SELECTION: &str = "Please enter a valid selection.";

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Interrupted")]
    Interrupted,

    #[error("Input closed")]
    Closed,

    #[error("Cannot read input: {0}")]
    Io(#[from] io::Error),
}

/// Source of operator input, one line per prompt.
#[async_trait(?Send)]
pub trait Prompter {
    async fn read_line(&mut self, prompt: &str) -> Result<String, PromptError>;
}

/// Reads prompts from standard input.
///
/// Lines are read on a dedicated thread and handed over through a channel,
/// so a pending read never keeps the runtime alive once the menu is left.
///
/// Ctrl+C is caught by a background listener. An interrupt that arrives
/// while waiting for a line, or at any point before the next prompt, turns
/// that prompt into [`PromptError::Interrupted`] so the caller can take the
/// regular quit path.
pub struct StdinPrompter {
    lines: mpsc::UnboundedReceiver<io::Result<String>>,
    interrupt: Arc<Notify>,
}

impl StdinPrompter {
    /// Must be called from within the tokio runtime.
    pub fn new() -> Self {
        let interrupt = Arc::new(Notify::new());
        let notifier = Arc::clone(&interrupt);
        tokio::spawn(async move {
            while tokio::signal::ctrl_c().await.is_ok() {
                log::debug!("Interrupt received");
                notifier.notify_one();
            }
        });

        let (sender, lines) = mpsc::unbounded_channel();
        thread::spawn(move || {
            for line in io::stdin().lines() {
                let failed = line.is_err();
                if sender.send(line).is_err() || failed {
                    break;
                }
            }
            log::debug!("Stdin reader finished");
        });

        Self { lines, interrupt }
    }
}

#[async_trait(?Send)]
impl Prompter for StdinPrompter {
    async fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        print!("{}", prompt);
        io::stdout().flush()?;

        tokio::select! {
            line = self.lines.recv() => match line {
                Some(line) => Ok(line?),
                None => Err(PromptError::Closed),
            },
            _ = self.interrupt.notified() => {
                println!();
                Err(PromptError::Interrupted)
            }
        }
    }
}

/// Normalised reply vocabulary for confirmation prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    Back,
}

impl Answer {
    const YES: [&'static str; 8] = ["y", "yes", "yeah", "yup", "yep", "yea", "ya", "yah"];
    const NO: [&'static str; 6] = ["n", "no", "nope", "nah", "naw", "na"];
    const BACK: [&'static str; 2] = ["b", "back"];

    pub fn parse(input: &str) -> Option<Self> {
        let normalized = input.trim().to_lowercase();
        let word = normalized.as_str();
        if Self::YES.contains(&word) {
            Some(Answer::Yes)
        } else if Self::NO.contains(&word) {
            Some(Answer::No)
        } else if Self::BACK.contains(&word) {
            Some(Answer::Back)
        } else {
            None
        }
    }
}

/// Outcome of a numbered selection prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// A 1-based position within the offered range.
    Index(usize),
    Back,
}

/// Re-prompts until the reply is one of the `allowed` answers.
pub async fn ask_answer<P>(
    prompter: &mut P,
    prompt: &str,
    allowed: &[Answer],
) -> Result<Answer, PromptError>
where
    P: Prompter + ?Sized,
{
    loop {
        let input = prompter.read_line(prompt).await?;
        match Answer::parse(&input) {
            Some(answer) if allowed.contains(&answer) => return Ok(answer),
            _ => warning!("{}", INVALID_SELECTION),
        }
    }
}

/// Re-prompts until the reply is a number in `1..=max`, or a back word
/// when `allow_back` is set.
pub async fn ask_index<P>(
    prompter: &mut P,
    prompt: &str,
    max: usize,
    allow_back: bool,
) -> Result<Selection, PromptError>
where
    P: Prompter + ?Sized,
{
    loop {
        let input = prompter.read_line(prompt).await?;
        if let Some(selection) = parse_selection(&input, max, allow_back) {
            return Ok(selection);
        }
        warning!("{}", INVALID_SELECTION);
    }
}

/// Waits for the operator before returning to the menu; `q` quits instead.
pub async fn ask_continue<P>(prompter: &mut P) -> Result<Flow, PromptError>
where
    P: Prompter + ?Sized,
{
    use colored::Colorize;

    let prompt = format!(
        "\nPress {} to go back to main menu... (Or {} to quit app)\n> ",
        "[ENTER]".bright_green(),
        "q".yellow()
    );
    let input = prompter.read_line(&prompt).await?;
    if input.trim().eq_ignore_ascii_case("q") {
        Ok(Flow::Quit)
    } else {
        Ok(Flow::Continue)
    }
}

fn parse_selection(input: &str, max: usize, allow_back: bool) -> Option<Selection> {
    if allow_back && Answer::parse(input) == Some(Answer::Back) {
        return Some(Selection::Back);
    }

    match input.trim().parse::<usize>() {
        Ok(index) if (1..=max).contains(&index) => Some(Selection::Index(index)),
        _ => None,
    }
}
