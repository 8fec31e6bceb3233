//! Executes the transition table against the session store, generator and publisher.

use content_generator::{
    highlight_additions, ContentGenerator, Draft, GenerationRequest, Model,
};
use dashmap::DashMap;
use std::env;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};
use wordpress_client::{format::to_paragraphs, NewPost, PostStatus, PublishResult, Publisher};
use wpbot_core::{HandlerError, Reply, Result, WpbotError};

use crate::progress::{Checkpoint, ProgressReporter, Task};
use crate::render;
use crate::session::{Session, SessionState};
use crate::store::SessionStore;
use crate::table::{transition, Effect, Next, Transition};
use crate::trigger::Trigger;

/// Conversation options, from env.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationSettings {
    /// Offer the model keyboard on /start; otherwise go straight to the topic prompt.
    pub select_model: bool,
    /// Model of a new session.
    pub default_model: Model,
}

impl Default for ConversationSettings {
    fn default() -> Self {
        Self {
            select_model: true,
            default_model: Model::default(),
        }
    }
}

impl ConversationSettings {
    /// Reads SELECT_MODEL (default true) and MODEL (default gpt-3.5-turbo).
    pub fn from_env() -> Result<Self> {
        let select_model = match env::var("SELECT_MODEL") {
            Ok(value) => parse_bool(&value).ok_or_else(|| {
                WpbotError::Config(format!("SELECT_MODEL must be true or false, got {}", value))
            })?,
            Err(_) => true,
        };
        let default_model = match env::var("MODEL") {
            Ok(id) if !id.trim().is_empty() => {
                Model::parse(&id).map_err(|e| WpbotError::Config(e.to_string()))?
            }
            _ => Model::default(),
        };
        Ok(Self {
            select_model,
            default_model,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

struct Outcome {
    ok: bool,
    session: Option<Session>,
    replies: Vec<Reply>,
}

impl Outcome {
    fn ok(session: Option<Session>, reply: Reply) -> Self {
        Self {
            ok: true,
            session,
            replies: vec![reply],
        }
    }

    fn failed(session: Option<Session>, reply: Reply) -> Self {
        Self {
            ok: false,
            session,
            replies: vec![reply],
        }
    }
}

/// The conversation state machine. Events of one user are serialized by a per-user lock held
/// for the whole transition, including generator and publisher calls.
pub struct ConversationMachine {
    store: Arc<dyn SessionStore>,
    generator: Arc<dyn ContentGenerator>,
    publisher: Arc<dyn Publisher>,
    settings: ConversationSettings,
    locks: DashMap<i64, Arc<Mutex<()>>>,
}

impl ConversationMachine {
    pub fn new(
        store: Arc<dyn SessionStore>,
        generator: Arc<dyn ContentGenerator>,
        publisher: Arc<dyn Publisher>,
        settings: ConversationSettings,
    ) -> Self {
        Self {
            store,
            generator,
            publisher,
            settings,
            locks: DashMap::new(),
        }
    }

    fn lock_for(&self, user_id: i64) -> Arc<Mutex<()>> {
        self.locks.entry(user_id).or_default().clone()
    }

    /// Drops the user's lock entry unless another event already holds a clone of it.
    fn release_lock(&self, user_id: i64) {
        self.locks
            .remove_if(&user_id, |_, lock| Arc::strong_count(lock) == 1);
    }

    fn initial_state(&self) -> SessionState {
        if self.settings.select_model {
            SessionState::AwaitModel
        } else {
            SessionState::AwaitTopic
        }
    }

    /// Runs one trigger for one user and returns the replies to send, in order.
    #[instrument(skip(self, trigger, progress), fields(trigger = trigger.name()))]
    pub async fn handle(
        &self,
        user_id: i64,
        trigger: Trigger,
        progress: &dyn ProgressReporter,
    ) -> Result<Vec<Reply>> {
        let lock = self.lock_for(user_id);
        let guard = lock.lock().await;

        let session = self.store.get(user_id).await?;
        let state = session.as_ref().map(|s| s.state);
        let Transition {
            effect,
            on_success,
            on_failure,
        } = transition(state, &trigger);
        debug!(state = ?state, effect = ?effect, "Transition selected");

        let outcome = self.apply(user_id, session, effect, progress).await?;
        let next = if outcome.ok { on_success } else { on_failure };
        let ended = next == Next::Delete || outcome.session.is_none();
        self.commit(user_id, outcome.session, next).await?;
        info!(ok = outcome.ok, next = ?next, "Trigger handled");

        drop(guard);
        drop(lock);
        if ended {
            self.release_lock(user_id);
        }
        Ok(outcome.replies)
    }

    async fn apply(
        &self,
        user_id: i64,
        session: Option<Session>,
        effect: Effect,
        progress: &dyn ProgressReporter,
    ) -> Result<Outcome> {
        let outcome = match effect {
            Effect::NewSession => {
                let session =
                    Session::new(user_id, self.settings.default_model, self.initial_state());
                let greeting = if self.settings.select_model {
                    render::choose_model()
                } else {
                    render::ask_topic(None)
                };
                Outcome::ok(Some(session), greeting)
            }
            Effect::ShowHelp => Outcome::ok(session, render::help()),
            Effect::Cancel => Outcome::ok(session, render::cancelled()),
            Effect::Reject(rejection) => Outcome::ok(session, render::rejected(&rejection)),
            Effect::SelectModel(model) => {
                let mut session = require(session)?;
                session.model = model;
                Outcome::ok(Some(session), render::ask_topic(Some(model)))
            }
            Effect::Generate { topic } => {
                let mut session = require(session)?;
                let request = GenerationRequest::new(topic.as_str(), session.model);
                let draft = self.generate(&request, Task::Generating, progress).await;
                if draft.is_fallback() {
                    Outcome::failed(Some(session), render::generation_failed())
                } else {
                    let reply = render::proposal(&draft);
                    session.topic = Some(topic);
                    session.draft = Some(draft);
                    Outcome::ok(Some(session), reply)
                }
            }
            Effect::Regenerate => {
                let mut session = require(session)?;
                let topic = session
                    .topic
                    .clone()
                    .ok_or_else(|| HandlerError::State("proposal without a topic".into()))?;
                let request = GenerationRequest::new(topic, session.model);
                let draft = self.generate(&request, Task::Generating, progress).await;
                if draft.is_fallback() {
                    Outcome::failed(Some(session), render::redo_failed())
                } else {
                    let reply = render::proposal(&draft);
                    session.draft = Some(draft);
                    Outcome::ok(Some(session), reply)
                }
            }
            Effect::AskSuggestions => Outcome::ok(session, render::ask_suggestions()),
            Effect::ClearDraft => {
                let mut session = require(session)?;
                session.topic = None;
                session.draft = None;
                Outcome::ok(Some(session), render::ask_topic(None))
            }
            Effect::Revise { suggestion } => {
                let mut session = require(session)?;
                let (topic, prior) = current_draft(&session)?;
                let request =
                    GenerationRequest::revise(topic, session.model, prior.body.as_str(), suggestion);
                let draft = self.generate(&request, Task::Revising, progress).await;
                if draft.is_fallback() {
                    Outcome::failed(Some(session), render::revision_failed())
                } else {
                    let words = highlight_additions(&prior.body, &draft.body);
                    let reply = render::revised_proposal(&draft, &words);
                    session.draft = Some(draft);
                    Outcome::ok(Some(session), reply)
                }
            }
            Effect::Publish(status) => self.publish(require(session)?, status, progress).await?,
        };
        Ok(outcome)
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
        task: Task,
        progress: &dyn ProgressReporter,
    ) -> Draft {
        progress.report(Checkpoint::Started(task)).await;
        let draft = self.generator.generate(request).await;
        let checkpoint = if draft.is_fallback() {
            Checkpoint::Failed(task)
        } else {
            Checkpoint::Succeeded(task)
        };
        progress.report(checkpoint).await;
        draft
    }

    /// One publish attempt. The session sits in `AwaitConfirmation` while the call runs.
    async fn publish(
        &self,
        mut session: Session,
        status: PostStatus,
        progress: &dyn ProgressReporter,
    ) -> Result<Outcome> {
        let (_, draft) = current_draft(&session)?;
        let post = NewPost::new(draft.title.as_str(), to_paragraphs(&draft.body), status);

        session.state = SessionState::AwaitConfirmation;
        self.store.put(session.clone()).await?;

        progress.report(Checkpoint::Started(Task::Publishing)).await;
        let outcome = match self.publisher.publish(&post).await {
            PublishResult::Created(created) => {
                progress.report(Checkpoint::Succeeded(Task::Publishing)).await;
                info!(post_id = ?created.id, status = %status, "Draft published");
                Outcome::ok(Some(session), render::published(&created, status))
            }
            PublishResult::Failed(failure) => {
                progress.report(Checkpoint::Failed(Task::Publishing)).await;
                warn!(failure = %failure, status = %status, "Publishing failed; draft kept");
                Outcome::failed(Some(session), render::publish_failed(&failure))
            }
        };
        Ok(outcome)
    }

    async fn commit(&self, user_id: i64, session: Option<Session>, next: Next) -> Result<()> {
        match (next, session) {
            (Next::Delete, _) => self.store.delete(user_id).await,
            (Next::Keep, Some(session)) => self.store.put(session).await,
            (Next::Enter(state), Some(mut session)) => {
                session.state = state;
                self.store.put(session).await
            }
            (Next::Initial, Some(mut session)) => {
                session.state = self.initial_state();
                self.store.put(session).await
            }
            (_, None) => Ok(()),
        }
    }
}

fn require(session: Option<Session>) -> Result<Session> {
    session.ok_or_else(|| HandlerError::State("no session for a session-scoped effect".into()).into())
}

/// Topic and draft of a session in `Proposal` or `AwaitSuggestions`.
fn current_draft(session: &Session) -> Result<(String, Draft)> {
    match (&session.topic, &session.draft) {
        (Some(topic), Some(draft)) => Ok((topic.clone(), draft.clone())),
        _ => Err(HandlerError::State(format!("no draft in state {}", session.state)).into()),
    }
}
