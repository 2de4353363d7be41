//! # SafeSpace Chat Transcript
//!
//! File: lib/src/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The ordered transcript of one session's conversation with the support bot.
//! Turns are appended in pairs (the user's question immediately followed by
//! the bot's answer) and are never removed individually; the transcript is
//! dropped together with its session. There is no size bound.
//!
use std::fmt;

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Bot,
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatRole::User => write!(f, "user"),
            ChatRole::Bot => write!(f, "bot"),
        }
    }
}

/// One exchange unit in a transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

/// Append-only transcript of chat turns.
#[derive(Debug, Default, Clone)]
pub struct ChatLog {
    turns: Vec<ChatTurn>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a user turn followed by the bot's reply.
    pub fn record_exchange(&mut self, query: &str, response: &str) {
        self.turns.push(ChatTurn {
            role: ChatRole::User,
            text: query.to_string(),
        });
        self.turns.push(ChatTurn {
            role: ChatRole::Bot,
            text: response.to_string(),
        });
    }

    /// All turns, oldest first.
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_appends_user_then_bot() {
        let mut log = ChatLog::new();
        log.record_exchange("What are your hours?", "9-5 weekdays");

        assert_eq!(log.len(), 2);
        assert_eq!(log.turns()[0].role, ChatRole::User);
        assert_eq!(log.turns()[0].text, "What are your hours?");
        assert_eq!(log.turns()[1].role, ChatRole::Bot);
        assert_eq!(log.turns()[1].text, "9-5 weekdays");
    }

    #[test]
    fn test_turns_keep_insertion_order() {
        let mut log = ChatLog::new();
        log.record_exchange("first", "one");
        log.record_exchange("second", "two");

        let texts: Vec<&str> = log.turns().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["first", "one", "second", "two"]);
    }

    #[test]
    fn test_role_display() {
        assert_eq!(ChatRole::User.to_string(), "user");
        assert_eq!(ChatRole::Bot.to_string(), "bot");
    }
}
