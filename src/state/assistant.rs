//! Learning-assistant chat state: setup form, transcript, and the active
//! learning session.

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

/// Who authored a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One transcript entry.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatEntry {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
}

/// State for the assistant page: `show_setup` toggles between the
/// subject/topic setup form and the chat transcript.
#[derive(Clone, Debug, Default)]
pub struct Assistant {
    pub session_id: Option<String>,
    pub subject: String,
    pub topic: String,
    pub messages: Vec<ChatEntry>,
    pub show_setup: bool,
    pub pending: bool,
}

impl Assistant {
    pub fn new() -> Self {
        Self { show_setup: true, ..Self::default() }
    }

    /// Commit a started learning session: swap to the chat view and greet
    /// the user with a context-aware welcome message.
    pub fn session_started(&mut self, session_id: String, subject: String, topic: String) {
        let welcome = ChatEntry {
            id: entry_id(),
            role: ChatRole::Assistant,
            content: format!(
                "Hello! I'm your AI learning assistant. I'll help you with {subject} - {topic}. \
                 What would you like to learn or what questions do you have?"
            ),
        };
        self.session_id = Some(session_id);
        self.subject = subject;
        self.topic = topic;
        self.messages = vec![welcome];
        self.show_setup = false;
        self.pending = false;
    }

    /// Append the user's outgoing message and mark the reply pending.
    pub fn message_sent(&mut self, content: String) {
        self.messages.push(ChatEntry { id: entry_id(), role: ChatRole::User, content });
        self.pending = true;
    }

    /// Append the assistant's reply.
    pub fn reply_received(&mut self, content: String) {
        self.messages.push(ChatEntry { id: entry_id(), role: ChatRole::Assistant, content });
        self.pending = false;
    }

    /// A failed send keeps the transcript intact and shows an assistant
    /// error bubble the user can retry past.
    pub fn reply_failed(&mut self) {
        self.reply_received("Sorry, I encountered an error. Please try again.".to_owned());
    }

    /// End the session and return to the setup form. Returns the session
    /// id to close on the backend, if one was active.
    pub fn session_ended(&mut self) -> Option<String> {
        let ended = self.session_id.take();
        self.messages.clear();
        self.show_setup = true;
        self.pending = false;
        ended
    }
}

fn entry_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
