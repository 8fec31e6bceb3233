//! Chat replies. All dynamic text is HTML-escaped.

use content_generator::{DiffWord, Draft, Model};
use wordpress_client::{CreatedPost, PostStatus, PublishFailure};
use wpbot_core::{escape_html, truncate_chars, Button, Reply};

use crate::table::Rejection;
use crate::trigger::callback;

/// Body characters shown in a proposal; keeps the message under Telegram's 4096 limit.
pub const MAX_BODY_CHARS: usize = 3500;

pub const HELP_TEXT: &str = "I write blog posts and publish them to WordPress.\n\n\
/start - begin a new post (choose a model, then send a topic)\n\
/cancel - drop the post in progress\n\
/help - show this message\n\n\
Once a draft is proposed, use the buttons to redo it, suggest changes, change the topic, \
publish it or save it as a draft.";

pub fn choose_model() -> Reply {
    Model::all().into_iter().fold(
        Reply::html("👋 Hi! Which OpenAI model do you want to work with?"),
        |reply, model| reply.with_row(vec![Button::new(model.label(), callback::model(&model.id()))]),
    )
}

/// Topic prompt; mentions the model when the user just picked it.
pub fn ask_topic(selected: Option<Model>) -> Reply {
    match selected {
        Some(model) => Reply::html(format!(
            "✅ Model selected: <b>{}</b>\n\n🧠 Now tell me the topic of the post.",
            escape_html(&model.id())
        )),
        None => Reply::html("🧠 Tell me the topic of the post."),
    }
}

fn proposal_keyboard(reply: Reply) -> Reply {
    reply
        .with_row(vec![Button::new("🔄 Redo proposal", callback::REDO)])
        .with_row(vec![Button::new("✏️ Suggest changes", callback::SUGGEST)])
        .with_row(vec![Button::new("🆕 Change topic", callback::CHANGE_TOPIC)])
        .with_row(vec![
            Button::new("✅ Publish", callback::PUBLISH),
            Button::new("💾 Save as draft", callback::SAVE_DRAFT),
        ])
        .with_row(vec![Button::new("❌ Cancel", callback::CANCEL)])
}

/// The draft with its action buttons.
pub fn proposal(draft: &Draft) -> Reply {
    let body = escape_html(&truncate_chars(&draft.body, MAX_BODY_CHARS));
    proposal_keyboard(Reply::html(format!(
        "📝 <b>{}</b>\n\n{}",
        escape_html(&draft.title),
        body
    )))
}

/// A revised draft with the words the revision added underlined.
pub fn revised_proposal(draft: &Draft, words: &[DiffWord]) -> Reply {
    let mut shown = 0;
    let mut parts = Vec::with_capacity(words.len());
    for word in words {
        shown += word.text.chars().count() + 1;
        if shown > MAX_BODY_CHARS {
            parts.push("…".to_string());
            break;
        }
        let text = escape_html(&word.text);
        parts.push(if word.added {
            format!("<u>{}</u>", text)
        } else {
            text
        });
    }
    proposal_keyboard(Reply::html(format!(
        "📝 <b>{}</b>\n\n{}",
        escape_html(&draft.title),
        parts.join(" ")
    )))
}

pub fn ask_suggestions() -> Reply {
    Reply::html("✏️ Tell me what you'd like to change.")
}

pub fn generation_failed() -> Reply {
    Reply::html("⚠️ I couldn't generate a post for that topic. Send the topic again.")
}

/// Redo failed; the current draft is still offered.
pub fn redo_failed() -> Reply {
    proposal_keyboard(Reply::html(
        "⚠️ I couldn't regenerate the post. Your previous draft is kept.",
    ))
}

pub fn revision_failed() -> Reply {
    Reply::html("⚠️ I couldn't apply your suggestions. Describe the changes again.")
}

fn post_id(post: &CreatedPost) -> String {
    post.id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

pub fn published(post: &CreatedPost, status: PostStatus) -> Reply {
    match status {
        PostStatus::Publish => {
            let link = post
                .link
                .as_deref()
                .map(|link| format!("\n🔗 {}", escape_html(link)))
                .unwrap_or_default();
            Reply::html(format!("✅ Published! (ID {}){}", post_id(post), link))
        }
        PostStatus::Draft => Reply::html(format!("💾 Draft saved. ID: {}", post_id(post))),
    }
}

/// Publishing failed; the draft stays and can be sent again.
pub fn publish_failed(failure: &PublishFailure) -> Reply {
    proposal_keyboard(Reply::html(format!(
        "❌ Error publishing: {}",
        escape_html(&truncate_chars(&failure.to_string(), MAX_BODY_CHARS))
    )))
}

pub fn cancelled() -> Reply {
    Reply::html("🛑 Post cancelled. Send /start to begin a new one.")
}

pub fn help() -> Reply {
    Reply::plain(HELP_TEXT)
}

pub fn rejected(rejection: &Rejection) -> Reply {
    let text = match rejection {
        Rejection::NoSession => "No draft in progress. Send /start to begin.".to_string(),
        Rejection::ChooseModelFirst => "Please choose a model with the buttons first.".to_string(),
        Rejection::UseButtons => "Please use the buttons under the draft.".to_string(),
        Rejection::EmptyText => "Please send some text.".to_string(),
        Rejection::StaleButton => "That option isn't available right now.".to_string(),
        Rejection::Busy => "Still publishing, please wait.".to_string(),
        Rejection::UnknownInput(input) => format!(
            "I don't understand {}. Send /help for usage.",
            escape_html(input)
        ),
    };
    Reply::html(format!("⚠️ {}", text))
}
