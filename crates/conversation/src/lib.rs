//! # Conversation
//!
//! The per-user workflow of the bot: choose a model, send a topic, review the proposed [`Draft`],
//! then redo it, revise it from suggestions, change the topic, publish it or save it as a draft.
//!
//! - [`transition`] is the single (state, trigger) table.
//! - [`ConversationMachine`] executes it: per-user lock, [`SessionStore`] I/O, generator and
//!   publisher calls, [`ProgressReporter`] checkpoints.
//! - [`ConversationHandler`] plugs the machine into the handler chain.
//!
//! [`Draft`]: content_generator::Draft

mod handler;
mod machine;
mod progress;
pub mod render;
mod session;
mod store;
mod table;
mod trigger;

pub use handler::ConversationHandler;
pub use machine::{ConversationMachine, ConversationSettings};
pub use progress::{ChatProgress, Checkpoint, ProgressReporter, Task};
pub use session::{Session, SessionState};
pub use store::{InMemorySessionStore, SessionStore};
pub use table::{transition, Effect, Next, Rejection, Transition};
pub use trigger::{callback, Trigger};
