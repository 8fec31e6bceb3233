//! Hand-written mocks shared by the conversation tests.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use content_generator::{ContentGenerator, Draft, GenerationRequest};
use conversation::{Checkpoint, ProgressReporter};
use std::collections::VecDeque;
use std::sync::Mutex;
use wordpress_client::{CreatedPost, NewPost, PublishFailure, PublishResult, Publisher};
use wpbot_core::{Bot, Chat, Event, EventKind, Reply, User};

/// Returns scripted drafts in order (the fallback once exhausted) and records every request.
#[derive(Default)]
pub struct ScriptedGenerator {
    drafts: Mutex<VecDeque<Draft>>,
    pub requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedGenerator {
    pub fn new(drafts: Vec<Draft>) -> Self {
        Self {
            drafts: Mutex::new(drafts.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentGenerator for ScriptedGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Draft {
        self.requests.lock().unwrap().push(request.clone());
        self.drafts
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(Draft::fallback)
    }
}

/// Returns scripted results in order and records every post.
#[derive(Default)]
pub struct MockPublisher {
    results: Mutex<VecDeque<PublishResult>>,
    pub posts: Mutex<Vec<NewPost>>,
}

impl MockPublisher {
    pub fn new(results: Vec<PublishResult>) -> Self {
        Self {
            results: Mutex::new(results.into()),
            posts: Mutex::new(Vec::new()),
        }
    }

    pub fn posts(&self) -> Vec<NewPost> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Publisher for MockPublisher {
    async fn publish(&self, post: &NewPost) -> PublishResult {
        self.posts.lock().unwrap().push(post.clone());
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                PublishResult::Failed(PublishFailure {
                    status_code: None,
                    detail: "no scripted result".to_string(),
                })
            })
    }
}

pub fn created(id: u64) -> PublishResult {
    PublishResult::Created(CreatedPost {
        id: Some(id),
        link: Some(format!("https://blog.example.com/?p={}", id)),
        status: None,
    })
}

#[derive(Default)]
pub struct RecordingProgress {
    pub checkpoints: Mutex<Vec<Checkpoint>>,
}

impl RecordingProgress {
    pub fn checkpoints(&self) -> Vec<Checkpoint> {
        self.checkpoints.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProgressReporter for RecordingProgress {
    async fn report(&self, checkpoint: Checkpoint) {
        self.checkpoints.lock().unwrap().push(checkpoint);
    }
}

/// Records sent replies and edits; message ids are sequential.
#[derive(Default)]
pub struct RecordingBot {
    pub sent: Mutex<Vec<Reply>>,
    pub edits: Mutex<Vec<(String, String)>>,
}

impl RecordingBot {
    pub fn sent_texts(&self) -> Vec<String> {
        self.sent.lock().unwrap().iter().map(|r| r.text.clone()).collect()
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, _chat: &Chat, text: &str) -> wpbot_core::Result<()> {
        self.sent.lock().unwrap().push(Reply::plain(text));
        Ok(())
    }

    async fn send_reply(&self, _chat: &Chat, reply: &Reply) -> wpbot_core::Result<String> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(reply.clone());
        Ok(sent.len().to_string())
    }

    async fn edit_message(
        &self,
        _chat: &Chat,
        message_id: &str,
        text: &str,
    ) -> wpbot_core::Result<()> {
        self.edits
            .lock()
            .unwrap()
            .push((message_id.to_string(), text.to_string()));
        Ok(())
    }
}

pub fn event(user_id: i64, kind: EventKind) -> Event {
    Event {
        id: "1".to_string(),
        user: User {
            id: user_id,
            username: Some("writer".to_string()),
            first_name: None,
            last_name: None,
        },
        chat: Chat {
            id: user_id,
            chat_type: "private".to_string(),
        },
        kind,
        created_at: Utc::now(),
    }
}
