use crate::app::state::AppState;
use crate::domain::LogSubmission;
use crate::error::ConsoleError;
use crate::flash::Flash;
use crate::port;
use axum::extract::{Form, State};
use axum::response::Redirect;
use serde::Deserialize;
use tracing::{error, info};

#[derive(Deserialize)]
pub struct SendLogForm {
    /// Required; absent is treated the same as empty
    #[serde(rename = "logMessage", default)]
    log_message: String,
    #[serde(rename = "logLevel", default)]
    log_level: Option<String>,
}

/// Handler for POST /send-log. Validates, formats, dispatches to the sink
/// matching the level, and always redirects back to the form with a
/// one-shot flash message.
pub async fn send_log_handler(
    State(state): State<AppState>,
    Form(form): Form<SendLogForm>,
) -> Redirect {
    let Some(submission) = LogSubmission::new(form.log_message, form.log_level.as_deref()) else {
        return redirect_with(&state, Flash::Error(state.messages.empty.clone()));
    };

    let line = submission.format_line();
    match port::dispatch(state.sink.as_ref(), submission.severity(), line).await {
        Ok(()) => {
            info!("Dispatched {} submission", submission.label());
            redirect_with(&state, Flash::Success(state.messages.success.clone()))
        }
        Err(e) => {
            error!("{}{e}", state.messages.failure_prefix);
            let text = format!("{}{}", state.messages.failure_prefix, describe(&e));
            redirect_with(&state, Flash::Error(text))
        }
    }
}

/// Flash text carries the underlying failure description, not the enum
/// wrapper around it.
fn describe(err: &ConsoleError) -> String {
    match err {
        ConsoleError::Sink(msg) => msg.clone(),
        other => other.to_string(),
    }
}

fn redirect_with(state: &AppState, flash: Flash) -> Redirect {
    let token = state.flash.stash(flash);
    Redirect::to(&format!("/?flash={token}"))
}
