//! Ask the voice assistant a question from the terminal.
//!
//! Runs the same dialog as `POST /api/voice`, carrying the session between
//! turns and prompting on stdin when the assistant asks for confirmation.

use std::collections::BTreeMap;

use clap::{Args, ValueEnum};
use dialoguer::Confirm;

use locator_core::config::AppConfig;
use locator_core::error::AppError;
use locator_entity::voice::{
    ConfirmationStatus, DialogSession, DialogState, Directive, Intent, IntentKind, NAME_SLOT,
    RequestKind, VoiceRequest,
};

/// Question to ask
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Question {
    /// Is the person in the office?
    InOffice,
    /// Where is the person?
    WhereIs,
    /// Did the person come to work today?
    CameToday,
}

impl From<Question> for IntentKind {
    fn from(q: Question) -> Self {
        match q {
            Question::InOffice => IntentKind::IsInOffice,
            Question::WhereIs => IntentKind::WhereIs,
            Question::CameToday => IntentKind::CameToWorkToday,
        }
    }
}

/// Arguments for the ask command
#[derive(Debug, Args)]
pub struct AskArgs {
    /// Question to ask
    #[arg(value_enum)]
    pub question: Question,
    /// Spoken name of the person
    pub name: String,
    /// Accept a suggested name without prompting
    #[arg(short, long)]
    pub yes: bool,
}

/// Execute the ask command
pub async fn execute(args: &AskArgs, config: AppConfig) -> Result<(), AppError> {
    let state = super::build_state(config).await?;
    let kind = IntentKind::from(args.question);

    let mut slots = BTreeMap::new();
    slots.insert(NAME_SLOT.to_string(), args.name.clone());
    let intent = Intent {
        name: kind.as_str().to_string(),
        slots,
        confirmation_status: ConfirmationStatus::None,
    };

    let response = state
        .dispatcher
        .handle(turn(intent, DialogSession::default()))
        .await;
    println!("{}", response.speech);

    let Some(Directive::ConfirmIntent { mut intent }) = response.directive else {
        return Ok(());
    };

    let accepted = args.yes
        || Confirm::new()
            .with_prompt("Confirm?")
            .default(true)
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

    intent.confirmation_status = if accepted {
        ConfirmationStatus::Confirmed
    } else {
        ConfirmationStatus::Denied
    };

    let answer = state
        .dispatcher
        .handle(turn(intent, response.session))
        .await;
    println!("{}", answer.speech);
    Ok(())
}

fn turn(intent: Intent, session: DialogSession) -> VoiceRequest {
    VoiceRequest {
        request: RequestKind::Intent {
            intent,
            dialog_state: DialogState::Completed,
        },
        session,
    }
}
