#![allow(dead_code)]

use std::{cell::RefCell, collections::VecDeque};

use async_trait::async_trait;
use serde_json::Value;
use spotificity::{
    cli::{Prompter, prompt::PromptError},
    remote::{RemoteCallResult, RemoteError, RemoteInvoker, RemoteOperation},
    types::{Artist, Token},
};

/// Replays canned operator input and records every prompt shown.
///
/// Once the script runs out, further reads fail as if stdin was closed.
pub struct ScriptedPrompter {
    script: VecDeque<Result<String, PromptError>>,
    pub prompts: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            script: lines.iter().map(|l| Ok(l.to_string())).collect(),
            prompts: Vec::new(),
        }
    }

    /// Appends a Ctrl+C after the scripted lines.
    pub fn then_interrupt(mut self) -> Self {
        self.script.push_back(Err(PromptError::Interrupted));
        self
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    pub fn prompts_containing(&self, needle: &str) -> usize {
        self.prompts.iter().filter(|p| p.contains(needle)).count()
    }
}

#[async_trait(?Send)]
impl Prompter for ScriptedPrompter {
    async fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.prompts.push(prompt.to_string());
        self.script.pop_front().unwrap_or(Err(PromptError::Closed))
    }
}

/// A backend double: answers each operation from a queue of canned replies
/// and records what was sent.
#[derive(Default)]
pub struct FakeInvoker {
    replies: RefCell<Vec<(RemoteOperation, RemoteCallResult)>>,
    calls: RefCell<Vec<(RemoteOperation, Option<Value>)>>,
}

impl FakeInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a reply; replies for the same operation are used in order.
    pub fn reply(self, operation: RemoteOperation, result: RemoteCallResult) -> Self {
        self.replies.borrow_mut().push((operation, result));
        self
    }

    pub fn ok(self, operation: RemoteOperation, envelope: Value) -> Self {
        self.reply(operation, Ok(envelope))
    }

    pub fn calls(&self) -> Vec<(RemoteOperation, Option<Value>)> {
        self.calls.borrow().clone()
    }

    pub fn operations(&self) -> Vec<RemoteOperation> {
        self.calls.borrow().iter().map(|(op, _)| *op).collect()
    }

    pub fn count(&self, operation: RemoteOperation) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|(op, _)| *op == operation)
            .count()
    }

    pub fn payloads(&self, operation: RemoteOperation) -> Vec<Value> {
        self.calls
            .borrow()
            .iter()
            .filter(|(op, _)| *op == operation)
            .filter_map(|(_, payload)| payload.clone())
            .collect()
    }
}

#[async_trait(?Send)]
impl RemoteInvoker for FakeInvoker {
    async fn invoke(
        &self,
        operation: RemoteOperation,
        payload: Option<Vec<u8>>,
    ) -> RemoteCallResult {
        let payload = payload.map(|bytes| {
            serde_json::from_slice::<Value>(&bytes).expect("request payload is JSON")
        });
        self.calls.borrow_mut().push((operation, payload));

        let mut replies = self.replies.borrow_mut();
        match replies.iter().position(|(op, _)| *op == operation) {
            Some(i) => replies.remove(i).1,
            None => Err(RemoteError::transport(
                "Unexpected",
                format!("no reply queued for {}", operation),
            )),
        }
    }
}

pub fn token() -> Token {
    Token {
        access_token: "test-token".to_string(),
        obtained_at: 0,
    }
}

pub fn artist(id: &str, name: &str) -> Artist {
    Artist::new(id, name)
}

pub fn listing(artists: &[(&str, &str)]) -> Value {
    let with_id: Vec<Value> = artists
        .iter()
        .map(|(id, name)| serde_json::json!({ "artist_id": id, "artist_name": name }))
        .collect();
    let names: Vec<&str> = artists.iter().map(|(_, name)| *name).collect();
    serde_json::json!({
        "status_code": 200,
        "payload": {
            "artists": {
                "current_artists_names": names,
                "current_artists_with_id": with_id
            }
        }
    })
}

pub fn empty_listing() -> Value {
    serde_json::json!({ "status_code": 204 })
}

pub fn search_results(candidates: Value) -> Value {
    serde_json::json!({ "payload": { "artistSearchResultsList": candidates } })
}

pub fn write_status(status: u16) -> Value {
    serde_json::json!({ "statusCode": status })
}
