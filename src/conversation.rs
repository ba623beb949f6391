use crate::clock::{to_chrono, Clock, SystemClock};
use crate::intent::Reply;
use crate::resolver::Resolver;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry in the chat log. Never modified after it is appended.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    EmptyInput,
    /// A reply is still pending; submissions are dropped, not queued.
    Busy,
    Closed,
    UnknownSuggestion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The reply will be due after `delay`.
    Accepted { delay: Duration },
    Rejected(RejectReason),
}

impl Submission {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Submission::Accepted { .. })
    }
}

/// Simulated typing time: grows with reply length, clamped to `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingLatency {
    pub min: Duration,
    pub max: Duration,
    pub per_char: Duration,
}

impl Default for TypingLatency {
    fn default() -> Self {
        Self {
            min: Duration::from_millis(600),
            max: Duration::from_millis(1500),
            per_char: Duration::from_millis(2),
        }
    }
}

impl TypingLatency {
    /// No delay at all; replies are due as soon as they are submitted.
    pub fn instant() -> Self {
        Self {
            min: Duration::ZERO,
            max: Duration::ZERO,
            per_char: Duration::ZERO,
        }
    }

    pub fn delay_for(&self, text: &str) -> Duration {
        let chars = text.chars().count().min(u32::MAX as usize) as u32;
        let max = self.max.max(self.min);
        self.min
            .saturating_add(self.per_char.saturating_mul(chars))
            .clamp(self.min, max)
    }
}

#[derive(Debug)]
struct PendingReply {
    reply: Reply,
    due_at: DateTime<Utc>,
}

/// Chat state for one widget instance.
///
/// The log starts with a welcome message. `submit` resolves the reply right
/// away but holds it back until the clock passes its due time; `poll`
/// delivers it, `close` drops it.
#[derive(Debug)]
pub struct ConversationSession<C: Clock = SystemClock> {
    id: Uuid,
    clock: C,
    latency: TypingLatency,
    messages: Vec<Message>,
    state: SessionState,
    follow_ups: Vec<String>,
    quick_questions: Vec<String>,
    draft: String,
    pending: Option<PendingReply>,
    next_seq: u64,
    closed: bool,
}

impl ConversationSession<SystemClock> {
    pub fn with_system_clock(resolver: &Resolver, latency: TypingLatency) -> Self {
        Self::new(resolver, latency, SystemClock)
    }
}

impl<C: Clock> ConversationSession<C> {
    pub fn new(resolver: &Resolver, latency: TypingLatency, clock: C) -> Self {
        let mut session = Self {
            id: Uuid::new_v4(),
            clock,
            latency,
            messages: Vec::new(),
            state: SessionState::Idle,
            follow_ups: Vec::new(),
            quick_questions: resolver.quick_questions(),
            draft: String::new(),
            pending: None,
            next_seq: 0,
            closed: false,
        };
        session.append(Role::Assistant, resolver.welcome_message());
        log::debug!("Opened chat session {}", session.id);
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn follow_ups(&self) -> &[String] {
        &self.follow_ups
    }

    pub fn is_awaiting_response(&self) -> bool {
        self.state == SessionState::AwaitingResponse
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Starter prompts, offered only until the first exchange has happened.
    pub fn quick_questions(&self) -> &[String] {
        if self.messages.len() <= 2 {
            &self.quick_questions
        } else {
            &[]
        }
    }

    /// What the visitor can click right now: follow-ups, else the starter prompts.
    pub fn suggestions(&self) -> &[String] {
        if self.follow_ups.is_empty() {
            self.quick_questions()
        } else {
            &self.follow_ups
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn can_send(&self) -> bool {
        !self.closed && self.state == SessionState::Idle && !self.draft.trim().is_empty()
    }

    /// Sends the draft input. The draft is kept when the submission is rejected.
    pub fn submit_draft(&mut self, resolver: &Resolver) -> Submission {
        let text = self.draft.clone();
        self.submit(&text, resolver)
    }

    /// Same as submitting the suggestion's literal text.
    pub fn choose_suggestion(&mut self, index: usize, resolver: &Resolver) -> Submission {
        match self.suggestions().get(index).cloned() {
            Some(text) => self.submit(&text, resolver),
            None => Submission::Rejected(RejectReason::UnknownSuggestion),
        }
    }

    pub fn submit(&mut self, text: &str, resolver: &Resolver) -> Submission {
        if self.closed {
            return Submission::Rejected(RejectReason::Closed);
        }
        if self.state == SessionState::AwaitingResponse {
            log::debug!("Session {} busy, dropping submission", self.id);
            return Submission::Rejected(RejectReason::Busy);
        }
        let text = text.trim();
        if text.is_empty() {
            return Submission::Rejected(RejectReason::EmptyInput);
        }

        self.append(Role::User, text.to_string());
        self.draft.clear();
        self.follow_ups.clear();

        let reply = resolver.resolve(text);
        let delay = self.latency.delay_for(&reply.text);
        let due_at = self
            .clock
            .now()
            .checked_add_signed(to_chrono(delay))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.pending = Some(PendingReply { reply, due_at });
        self.state = SessionState::AwaitingResponse;
        log::debug!("Session {} reply due in {:?}", self.id, delay);
        Submission::Accepted { delay }
    }

    /// Appends `reply` as the assistant's message. Only valid while a reply is awaited.
    pub fn deliver(&mut self, reply: Reply) -> Option<&Message> {
        if self.closed || self.state != SessionState::AwaitingResponse {
            log::warn!("Session {} ignored a reply delivered while idle", self.id);
            return None;
        }
        self.pending = None;
        self.follow_ups = reply.follow_ups;
        self.state = SessionState::Idle;
        self.append(Role::Assistant, reply.text);
        self.messages.last()
    }

    /// Delivers the pending reply once its due time has passed.
    pub fn poll(&mut self) -> Option<&Message> {
        let due_at = self.pending.as_ref()?.due_at;
        if self.clock.now() < due_at {
            return None;
        }
        let pending = self.pending.take()?;
        self.deliver(pending.reply)
    }

    pub fn time_until_due(&self) -> Option<Duration> {
        let pending = self.pending.as_ref()?;
        let remaining = pending.due_at - self.clock.now();
        Some(remaining.to_std().unwrap_or(Duration::ZERO))
    }

    /// Shuts the session down. A pending reply is dropped and never delivered.
    /// Returns whether one was pending.
    pub fn close(&mut self) -> bool {
        self.closed = true;
        self.state = SessionState::Idle;
        let cancelled = self.pending.take().is_some();
        if cancelled {
            log::debug!("Session {} closed with a reply pending; cancelled", self.id);
        }
        cancelled
    }

    fn append(&mut self, role: Role, content: String) {
        let timestamp = self.clock.now();
        self.next_seq += 1;
        self.messages.push(Message {
            id: format!("{}-{}", timestamp.timestamp_millis(), self.next_seq),
            role,
            content,
            timestamp,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::dataset::ContentDataset;
    use std::sync::Arc;

    fn resolver() -> Resolver {
        Resolver::standard(Arc::new(ContentDataset::bundled().unwrap().clone())).unwrap()
    }

    #[test]
    fn latency_scales_and_clamps() {
        let latency = TypingLatency::default();
        assert_eq!(latency.delay_for(""), Duration::from_millis(600));
        assert_eq!(latency.delay_for(&"x".repeat(100)), Duration::from_millis(800));
        assert_eq!(latency.delay_for(&"x".repeat(10_000)), Duration::from_millis(1500));
    }

    #[test]
    fn inverted_bounds_do_not_panic() {
        let latency = TypingLatency {
            min: Duration::from_millis(900),
            max: Duration::from_millis(100),
            per_char: Duration::from_millis(1),
        };
        assert_eq!(latency.delay_for("abc"), Duration::from_millis(900));
    }

    #[test]
    fn oversized_delay_saturates_instead_of_overflowing() {
        let r = resolver();
        let latency = TypingLatency {
            min: Duration::from_millis(u64::MAX),
            max: Duration::from_millis(u64::MAX),
            per_char: Duration::ZERO,
        };
        let clock = ManualClock::default();
        let mut session = ConversationSession::new(&r, latency, clock.clone());
        assert!(session.submit("hello", &r).is_accepted());
        clock.advance(Duration::from_secs(3600));
        assert!(session.poll().is_none());
        assert!(session.time_until_due().is_some());
        assert!(session.is_awaiting_response());
    }

    #[test]
    fn starts_idle_with_welcome() {
        let r = resolver();
        let session = ConversationSession::new(&r, TypingLatency::default(), ManualClock::default());
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, Role::Assistant);
        assert_eq!(session.quick_questions().len(), 6);
        assert_eq!(session.suggestions(), session.quick_questions());
    }

    #[test]
    fn reply_waits_for_due_time() {
        let r = resolver();
        let clock = ManualClock::default();
        let mut session = ConversationSession::new(&r, TypingLatency::default(), clock.clone());

        let Submission::Accepted { delay } = session.submit("hello", &r) else {
            panic!("submission rejected");
        };
        assert!(session.is_awaiting_response());
        assert_eq!(session.time_until_due(), Some(delay));
        assert!(session.poll().is_none());

        clock.advance(delay);
        let delivered = session.poll().unwrap();
        assert_eq!(delivered.role, Role::Assistant);
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.follow_ups()[0], "Who is Pradeep?");
        assert_eq!(session.messages().len(), 3);
    }

    #[test]
    fn message_ids_are_unique() {
        let r = resolver();
        let clock = ManualClock::default();
        let mut session = ConversationSession::new(&r, TypingLatency::instant(), clock);
        session.submit("hello", &r);
        session.poll();
        let ids: std::collections::HashSet<_> = session.messages().iter().map(|m| &m.id).collect();
        assert_eq!(ids.len(), session.messages().len());
    }

    #[test]
    fn deliver_while_idle_is_ignored() {
        let r = resolver();
        let mut session = ConversationSession::new(&r, TypingLatency::default(), ManualClock::default());
        assert!(session.deliver(Reply::new("stray", ["x"])).is_none());
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn draft_is_cleared_only_on_acceptance() {
        let r = resolver();
        let mut session = ConversationSession::new(&r, TypingLatency::default(), ManualClock::default());
        session.set_draft("   ");
        assert!(!session.can_send());
        assert_eq!(
            session.submit_draft(&r),
            Submission::Rejected(RejectReason::EmptyInput)
        );

        session.set_draft("Top projects");
        assert!(session.can_send());
        assert!(session.submit_draft(&r).is_accepted());
        assert_eq!(session.draft(), "");

        session.set_draft("Education background");
        assert!(!session.can_send());
        assert_eq!(session.submit_draft(&r), Submission::Rejected(RejectReason::Busy));
        assert_eq!(session.draft(), "Education background");
    }

    #[test]
    fn choosing_a_suggestion_submits_its_text() {
        let r = resolver();
        let clock = ManualClock::default();
        let mut session = ConversationSession::new(&r, TypingLatency::instant(), clock);
        assert!(session.choose_suggestion(0, &r).is_accepted());
        assert_eq!(session.messages()[1].content, "Who is Pradeep?");
        session.poll();
        assert_eq!(
            session.choose_suggestion(42, &r),
            Submission::Rejected(RejectReason::UnknownSuggestion)
        );
    }

    #[test]
    fn closed_session_rejects_everything() {
        let r = resolver();
        let mut session = ConversationSession::new(&r, TypingLatency::default(), ManualClock::default());
        assert!(!session.close());
        assert_eq!(session.submit("hello", &r), Submission::Rejected(RejectReason::Closed));
    }
}
