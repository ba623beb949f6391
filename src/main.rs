use anyhow::Result;
use parking_lot::Mutex;
use portfolio_chat::{
    ContentDataset, ConversationSession, Message, RejectReason, Resolver, Role, Settings,
    Submission,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;

type SharedSession = Arc<Mutex<ConversationSession>>;

fn print_message(message: &Message) {
    let speaker = match message.role {
        Role::User => "you",
        Role::Assistant => "assistant",
    };
    println!("\n[{}] {}:\n{}", message.timestamp.format("%H:%M"), speaker, message.content);
}

fn print_suggestions(session: &ConversationSession) {
    let suggestions = session.suggestions();
    if suggestions.is_empty() {
        return;
    }
    println!();
    for (i, suggestion) in suggestions.iter().enumerate() {
        println!("  {}) {}", i + 1, suggestion);
    }
}

/// Waits out the typing delay, then delivers the pending reply.
fn spawn_delivery(session: SharedSession, delay: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        loop {
            let remaining = session.lock().time_until_due();
            match remaining {
                None => return,
                Some(wait) if !wait.is_zero() => tokio::time::sleep(wait).await,
                Some(_) => {}
            }
            let mut guard = session.lock();
            if let Some(message) = guard.poll() {
                print_message(message);
                print_suggestions(&guard);
                return;
            }
        }
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load("Config")?;
    let dataset = match &settings.data.dataset_dir {
        Some(dir) => ContentDataset::load_dir(dir)?,
        None => ContentDataset::bundled()?.clone(),
    };
    let resolver = Resolver::with_settings(Arc::new(dataset), settings.logic)?;
    log::info!(
        "Portfolio assistant ready with {} intents",
        resolver.catalog().len()
    );

    let session: SharedSession = Arc::new(Mutex::new(ConversationSession::with_system_clock(
        &resolver,
        settings.typing.latency(),
    )));
    {
        let session = session.lock();
        if let Some(welcome) = session.messages().first() {
            print_message(welcome);
        }
        print_suggestions(&session);
    }
    println!("\nType a question, a suggestion number, or /close to leave.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut delivery: Option<JoinHandle<()>> = None;

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line == "/close" {
            break;
        }

        let submission = {
            let mut session = session.lock();
            let submission = match line.parse::<usize>() {
                Ok(n) if n >= 1 && n <= session.suggestions().len() => {
                    session.choose_suggestion(n - 1, &resolver)
                }
                _ => {
                    session.set_draft(line);
                    session.submit_draft(&resolver)
                }
            };
            if submission.is_accepted() {
                if let Some(sent) = session.messages().last() {
                    print_message(sent);
                }
                println!("\nassistant is typing...");
            }
            submission
        };

        match submission {
            Submission::Accepted { delay } => {
                delivery = Some(spawn_delivery(session.clone(), delay));
            }
            Submission::Rejected(RejectReason::Busy) => {
                println!("(still answering the previous question)");
            }
            Submission::Rejected(RejectReason::EmptyInput) => {}
            Submission::Rejected(reason) => log::warn!("Submission rejected: {:?}", reason),
        }
    }

    if let Some(handle) = delivery.take() {
        handle.abort();
    }
    if session.lock().close() {
        log::info!("Chat closed before the last reply was delivered");
    }
    Ok(())
}
