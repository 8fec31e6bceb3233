//! The transition table: one pure function from (state, trigger) to effect and next state.

use content_generator::Model;
use wordpress_client::PostStatus;

use crate::session::SessionState;
use crate::trigger::Trigger;

/// Side effect the machine performs for a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Replace any session with a fresh one.
    NewSession,
    ShowHelp,
    /// Drop the session.
    Cancel,
    SelectModel(Model),
    Generate { topic: String },
    Regenerate,
    AskSuggestions,
    ClearDraft,
    Publish(PostStatus),
    Revise { suggestion: String },
    /// No-op with an error message.
    Reject(Rejection),
}

/// Why an input was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    NoSession,
    ChooseModelFirst,
    UseButtons,
    EmptyText,
    StaleButton,
    Busy,
    UnknownInput(String),
}

/// What happens to the session after the effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Next {
    Keep,
    Enter(SessionState),
    /// `AwaitModel` or `AwaitTopic`, depending on whether model selection is enabled.
    Initial,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub effect: Effect,
    pub on_success: Next,
    pub on_failure: Next,
}

impl Transition {
    fn new(effect: Effect, on_success: Next, on_failure: Next) -> Self {
        Self {
            effect,
            on_success,
            on_failure,
        }
    }

    /// Effect that cannot fail.
    fn always(effect: Effect, next: Next) -> Self {
        Self::new(effect, next, next)
    }

    fn reject(rejection: Rejection) -> Self {
        Self::always(Effect::Reject(rejection), Next::Keep)
    }
}

/// Total over every (state, trigger) pair; `None` means the user has no session.
pub fn transition(state: Option<SessionState>, trigger: &Trigger) -> Transition {
    use SessionState::*;

    match (state, trigger) {
        (_, Trigger::Start) => Transition::always(Effect::NewSession, Next::Initial),
        (_, Trigger::Help) => Transition::always(Effect::ShowHelp, Next::Keep),
        (None, _) => Transition::reject(Rejection::NoSession),

        (Some(_), Trigger::Cancel) => Transition::always(Effect::Cancel, Next::Delete),
        (Some(_), Trigger::Unknown(input)) => {
            Transition::reject(Rejection::UnknownInput(input.clone()))
        }
        (Some(AwaitConfirmation), _) => Transition::reject(Rejection::Busy),
        (Some(_), Trigger::Text(text)) if text.trim().is_empty() => {
            Transition::reject(Rejection::EmptyText)
        }

        (Some(AwaitModel), Trigger::ChooseModel(model)) => {
            Transition::always(Effect::SelectModel(*model), Next::Enter(AwaitTopic))
        }
        (Some(AwaitModel), Trigger::Text(_)) => Transition::reject(Rejection::ChooseModelFirst),

        (Some(AwaitTopic), Trigger::Text(topic)) => Transition::new(
            Effect::Generate {
                topic: topic.trim().to_string(),
            },
            Next::Enter(Proposal),
            Next::Keep,
        ),

        (Some(Proposal), Trigger::Redo) => {
            Transition::new(Effect::Regenerate, Next::Enter(Proposal), Next::Keep)
        }
        (Some(Proposal), Trigger::Suggest) => {
            Transition::always(Effect::AskSuggestions, Next::Enter(AwaitSuggestions))
        }
        (Some(Proposal), Trigger::ChangeTopic) => {
            Transition::always(Effect::ClearDraft, Next::Enter(AwaitTopic))
        }
        (Some(Proposal), Trigger::Publish(status)) => {
            Transition::new(Effect::Publish(*status), Next::Delete, Next::Enter(Proposal))
        }
        (Some(Proposal), Trigger::Text(_)) => Transition::reject(Rejection::UseButtons),

        (Some(AwaitSuggestions), Trigger::Text(suggestion)) => Transition::new(
            Effect::Revise {
                suggestion: suggestion.trim().to_string(),
            },
            Next::Enter(Proposal),
            Next::Keep,
        ),

        (Some(_), _) => Transition::reject(Rejection::StaleButton),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATES: [Option<SessionState>; 6] = [
        None,
        Some(SessionState::AwaitModel),
        Some(SessionState::AwaitTopic),
        Some(SessionState::AwaitConfirmation),
        Some(SessionState::Proposal),
        Some(SessionState::AwaitSuggestions),
    ];

    fn triggers() -> Vec<Trigger> {
        vec![
            Trigger::Start,
            Trigger::Help,
            Trigger::Cancel,
            Trigger::ChooseModel(Model::Gpt4),
            Trigger::Text("topic".to_string()),
            Trigger::Text("   ".to_string()),
            Trigger::Redo,
            Trigger::Suggest,
            Trigger::ChangeTopic,
            Trigger::Publish(PostStatus::Publish),
            Trigger::Publish(PostStatus::Draft),
            Trigger::Unknown("/tema".to_string()),
        ]
    }

    #[test]
    fn test_rejections_preserve_state() {
        for state in STATES {
            for trigger in triggers() {
                let t = transition(state, &trigger);
                if let Effect::Reject(_) = t.effect {
                    assert_eq!(t.on_success, Next::Keep, "{:?} / {:?}", state, trigger);
                    assert_eq!(t.on_failure, Next::Keep, "{:?} / {:?}", state, trigger);
                }
            }
        }
    }

    #[test]
    fn test_no_session_rejects_everything_but_start_and_help() {
        for trigger in triggers() {
            let t = transition(None, &trigger);
            match trigger {
                Trigger::Start => assert_eq!(t.effect, Effect::NewSession),
                Trigger::Help => assert_eq!(t.effect, Effect::ShowHelp),
                _ => assert_eq!(t.effect, Effect::Reject(Rejection::NoSession)),
            }
        }
    }

    #[test]
    fn test_happy_path() {
        let t = transition(
            Some(SessionState::AwaitModel),
            &Trigger::ChooseModel(Model::Gpt4),
        );
        assert_eq!(t.effect, Effect::SelectModel(Model::Gpt4));
        assert_eq!(t.on_success, Next::Enter(SessionState::AwaitTopic));

        let t = transition(
            Some(SessionState::AwaitTopic),
            &Trigger::Text(" gardening tips ".to_string()),
        );
        assert_eq!(
            t.effect,
            Effect::Generate {
                topic: "gardening tips".to_string()
            }
        );
        assert_eq!(t.on_success, Next::Enter(SessionState::Proposal));
        assert_eq!(t.on_failure, Next::Keep);

        let t = transition(
            Some(SessionState::Proposal),
            &Trigger::Publish(PostStatus::Draft),
        );
        assert_eq!(t.effect, Effect::Publish(PostStatus::Draft));
        assert_eq!(t.on_success, Next::Delete);
        assert_eq!(t.on_failure, Next::Enter(SessionState::Proposal));
    }

    #[test]
    fn test_suggestion_loop() {
        let t = transition(Some(SessionState::Proposal), &Trigger::Suggest);
        assert_eq!(t.on_success, Next::Enter(SessionState::AwaitSuggestions));

        let t = transition(
            Some(SessionState::AwaitSuggestions),
            &Trigger::Text("shorter".to_string()),
        );
        assert_eq!(
            t.effect,
            Effect::Revise {
                suggestion: "shorter".to_string()
            }
        );
        assert_eq!(t.on_failure, Next::Keep);
    }

    #[test]
    fn test_publish_in_flight_is_busy() {
        let t = transition(
            Some(SessionState::AwaitConfirmation),
            &Trigger::Publish(PostStatus::Publish),
        );
        assert_eq!(t.effect, Effect::Reject(Rejection::Busy));
    }

    #[test]
    fn test_cancel_and_start_from_any_session() {
        for state in STATES.into_iter().flatten() {
            assert_eq!(transition(Some(state), &Trigger::Cancel).on_success, Next::Delete);
            assert_eq!(transition(Some(state), &Trigger::Start).on_success, Next::Initial);
        }
    }

    #[test]
    fn test_stale_buttons() {
        let t = transition(Some(SessionState::AwaitTopic), &Trigger::Redo);
        assert_eq!(t.effect, Effect::Reject(Rejection::StaleButton));
        let t = transition(
            Some(SessionState::Proposal),
            &Trigger::ChooseModel(Model::Gpt4),
        );
        assert_eq!(t.effect, Effect::Reject(Rejection::StaleButton));
        let t = transition(Some(SessionState::AwaitModel), &Trigger::Text("x".into()));
        assert_eq!(t.effect, Effect::Reject(Rejection::ChooseModelFirst));
    }
}
