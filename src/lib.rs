//! Rule-based portfolio assistant.
//!
//! Free text is scored against a catalog of keyword-weighted intents; when no
//! intent is confident enough the resolver looks for a project title or a
//! skill name, and finally falls back to a help message. A
//! [`ConversationSession`] wraps the resolver with the chat log and the
//! simulated typing delay of the widget.

pub mod catalog;
pub mod clock;
pub mod conversation;
pub mod dataset;
pub mod intent;
pub mod replies;
pub mod resolver;
pub mod scorer;
pub mod settings;

pub use clock::{Clock, ManualClock, SystemClock};
pub use conversation::{
    ConversationSession, Message, RejectReason, Role, SessionState, Submission, TypingLatency,
};
pub use dataset::ContentDataset;
pub use intent::{Intent, IntentCatalog, Reply};
pub use resolver::{Branch, Resolution, Resolver, ResolverSettings};
pub use scorer::KeywordMatcher;
pub use settings::Settings;
