// Chat handlers
//
// GET /chat starts a session. With htmx a turn takes two requests: the
// submit appends the user message and returns the panel in its awaiting
// state, whose loader then posts to /reply to run the backend call. Without
// htmx the submit runs the whole turn and returns the full page.
//
// The backend call runs in its own task, so a dropped request cannot leave a
// turn unsettled; /reply only waits for it. While the call is in flight only
// Weak handles to the session are kept, so a reply for a session that
// expired meanwhile is dropped.

use askama::Template;
use axum::extract::{Path, State};
use axum::http::Uri;
use axum::response::{IntoResponse, Response};
use axum::Form;
use axum_htmx::HxRequest;
use serde::Deserialize;
use std::sync::{Arc, MutexGuard, Weak};
use tokio::sync::Notify;
use uuid::Uuid;

use crate::api_server::{AppError, AppState};
use crate::chat::{ChatBackend, ChatController, PendingTurn, QUICK_PROMPTS};
use crate::nav::Shell;
use crate::web::markdown::render_markdown;
use crate::web::render;
use crate::web::sessions::{ChatSession, SharedSession};

use super::shell_for;

// ============================================================================
// Templates
// ============================================================================

pub struct MessageView {
    pub id: u64,
    pub is_user: bool,
    /// User text, shown escaped
    pub text: String,
    /// Rendered Markdown for assistant replies
    pub html: String,
    pub time: String,
}

#[derive(Template)]
#[template(path = "fragments/chat_panel.html")]
pub struct ChatPanelTemplate {
    pub session: Uuid,
    pub messages: Vec<MessageView>,
    pub awaiting: bool,
    /// Awaiting, and this page still has to post for the reply
    pub reply_due: bool,
}

impl ChatPanelTemplate {
    pub fn from_controller(session: Uuid, chat: &ChatController) -> Self {
        let messages = chat
            .messages()
            .iter()
            .map(|m| MessageView {
                id: m.id,
                is_user: m.is_user(),
                text: m.text.clone(),
                html: if m.is_user() { String::new() } else { render_markdown(&m.text) },
                time: m.time_display(),
            })
            .collect();

        Self {
            session,
            messages,
            awaiting: chat.is_awaiting(),
            reply_due: chat.has_undispatched_turn(),
        }
    }
}

#[derive(Template)]
#[template(path = "pages/chat.html")]
pub struct ChatTemplate {
    pub shell: Shell,
    pub prompts: &'static [&'static str],
    pub panel: ChatPanelTemplate,
}

#[derive(Debug, Default, Deserialize)]
pub struct MessageForm {
    #[serde(default)]
    pub message: String,
}

// ============================================================================
// Helpers
// ============================================================================

fn lock(session: &ChatSession) -> Result<MutexGuard<'_, ChatController>, AppError> {
    session
        .lock()
        .map_err(|_| AppError::Internal("Chat session state is unavailable".to_string()))
}

fn session_expired() -> AppError {
    AppError::NotFound("This chat session has expired. Reload the page to start a new one.".to_string())
}

async fn find_session(state: &AppState, session: &Uuid) -> Result<SharedSession, AppError> {
    state.sessions.get(session).await.ok_or_else(session_expired)
}

fn panel_for(id: Uuid, session: &ChatSession) -> Result<ChatPanelTemplate, AppError> {
    let chat = lock(session)?;
    Ok(ChatPanelTemplate::from_controller(id, &chat))
}

/// Send the turn and record the outcome if the session is still alive
async fn run_turn(
    backend: ChatBackend,
    id: Uuid,
    session: Weak<ChatSession>,
    settled: Arc<Notify>,
    pending: PendingTurn,
) {
    tracing::debug!("Chat session {} turn {} sent", id, pending.turn);
    let outcome = backend.send(&pending.message).await;

    if let Some(session) = session.upgrade() {
        let resolved = match session.lock() {
            Ok(mut chat) => chat.resolve(pending.turn, outcome).is_some(),
            Err(_) => false,
        };
        if !resolved {
            tracing::warn!("Chat session {} could not record turn {}", id, pending.turn);
        }
    } else {
        tracing::debug!("Chat session {} ended before turn {} completed", id, pending.turn);
    }
    settled.notify_waiters();
}

/// Start the session's pending turn if nobody has, then wait until it settles
async fn complete_turn(
    state: &AppState,
    id: Uuid,
    session: SharedSession,
) -> Result<SharedSession, AppError> {
    let settled = session.settled();
    let notified = settled.notified();
    tokio::pin!(notified);
    notified.as_mut().enable();

    let (awaiting, pending) = {
        let mut chat = lock(&session)?;
        let pending = chat.dispatch();
        (chat.is_awaiting(), pending)
    };
    if !awaiting {
        return Ok(session);
    }

    let handle = Arc::downgrade(&session);
    drop(session);
    if let Some(pending) = pending {
        tokio::spawn(run_turn(
            state.chat_backend.clone(),
            id,
            handle.clone(),
            settled.clone(),
            pending,
        ));
    }

    notified.await;
    handle.upgrade().ok_or_else(session_expired)
}

// ============================================================================
// Handlers
// ============================================================================

pub async fn chat_page(State(state): State<AppState>, uri: Uri) -> Result<Response, AppError> {
    let (id, session) = state.sessions.create().await;
    let template = ChatTemplate {
        shell: shell_for(&uri),
        prompts: &QUICK_PROMPTS,
        panel: panel_for(id, &session)?,
    };
    Ok(render(&template).into_response())
}

pub async fn submit_message(
    State(state): State<AppState>,
    HxRequest(hx): HxRequest,
    Path(id): Path<Uuid>,
    Form(form): Form<MessageForm>,
) -> Result<Response, AppError> {
    let session = find_session(&state, &id).await?;

    let accepted = lock(&session)?.submit(&form.message);
    if !accepted {
        tracing::debug!("Chat session {} ignored submit (blank or awaiting)", id);
    }

    if hx {
        return Ok(render(&panel_for(id, &session)?).into_response());
    }

    let session = complete_turn(&state, id, session).await?;
    let template = ChatTemplate {
        shell: Shell::for_path("/chat"),
        prompts: &QUICK_PROMPTS,
        panel: panel_for(id, &session)?,
    };
    Ok(render(&template).into_response())
}

pub async fn await_reply(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let session = find_session(&state, &id).await?;
    let session = complete_turn(&state, id, session).await?;
    Ok(render(&panel_for(id, &session)?).into_response())
}
