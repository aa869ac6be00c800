//! Routes voice turns to presence lookups.
//!
//! A turn moves the session through `AwaitingIntent`, then one of
//! `ExactMatch`, `NeedsConfirmation` or `NoMatch`, and ends in `Responded`
//! unless it is waiting on the platform (slot filling) or on the caller (a
//! fuzzy suggestion). The session travels with the response, so the
//! dispatcher is stateless between turns.

use std::sync::Arc;

use tracing::{debug, info, warn};

use locator_core::error::AppError;
use locator_core::traits::Clock;
use locator_database::store::PresenceStore;
use locator_entity::presence::{UserPresenceRecord, normalize_key};
use locator_entity::voice::{
    ConfirmationStatus, DialogPhase, DialogSession, DialogState, Intent, IntentKind,
    PendingConfirmation, RequestKind, VoiceRequest, VoiceResponse,
};

use super::phrases::{Phrase, PhraseBook, fill};
use crate::identity::FuzzyResolver;

/// Where a name lookup landed.
enum Lookup {
    Exact(UserPresenceRecord),
    Suggest(String),
    NoMatch,
}

/// Voice intent dispatcher.
#[derive(Debug, Clone)]
pub struct IntentDispatcher {
    /// Presence store (read-only here).
    store: Arc<dyn PresenceStore>,
    /// Fuzzy fallback for unmatched names.
    resolver: FuzzyResolver,
    /// Answer wording.
    phrases: PhraseBook,
    /// Source of "today".
    clock: Arc<dyn Clock>,
}

impl IntentDispatcher {
    /// Creates a new dispatcher.
    pub fn new(
        store: Arc<dyn PresenceStore>,
        resolver: FuzzyResolver,
        phrases: PhraseBook,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            resolver,
            phrases,
            clock,
        }
    }

    /// Handle one voice turn. Never fails: faults become spoken apologies.
    pub async fn handle(&self, request: VoiceRequest) -> VoiceResponse {
        let session = request.session;
        match request.request {
            RequestKind::Launch => self.tell(self.phrases.config().greeting.clone(), session),
            RequestKind::Intent {
                intent,
                dialog_state,
            } => self.handle_intent(intent, dialog_state, session).await,
        }
    }

    async fn handle_intent(
        &self,
        intent: Intent,
        dialog_state: DialogState,
        mut session: DialogSession,
    ) -> VoiceResponse {
        let config = self.phrases.config();
        info!(intent = %intent.name, ?dialog_state, phase = ?session.phase, "Voice intent received");

        if intent.confirmation_status == ConfirmationStatus::Denied {
            return self.tell(config.denied.clone(), session);
        }

        let Some(kind) = IntentKind::from_name(&intent.name) else {
            return self.tell(config.not_understood.clone(), session);
        };

        let confirmed = match intent.confirmation_status {
            ConfirmationStatus::Confirmed => session.take_pending_for(&intent.name),
            _ => None,
        };

        if confirmed.is_none() && kind.requires_completed_dialog() && dialog_state != DialogState::Completed {
            session.transition(DialogPhase::AwaitingIntent);
            return VoiceResponse::delegate(intent, session);
        }

        let name = match &confirmed {
            Some(pending) => pending.suggested_username.clone(),
            None => match intent.name_slot() {
                Some(spoken) => normalize_key(spoken),
                None => return self.tell(config.unknown_person.clone(), session),
            },
        };

        let lookup = match self.lookup(&name, confirmed.is_some()).await {
            Ok(lookup) => lookup,
            Err(e) => {
                warn!(error = %e, name = %name, "Presence lookup failed");
                return self.tell(config.unavailable.clone(), session);
            }
        };

        match lookup {
            Lookup::Exact(record) => {
                session.transition(DialogPhase::ExactMatch);
                let speech = self.answer(kind, &record);
                self.tell(speech, session)
            }
            Lookup::Suggest(suggestion) => {
                debug!(spoken = %name, suggestion = %suggestion, "Offering fuzzy match");
                let prompt = fill(
                    &config.confirm_prompt,
                    &[("name", &name), ("suggestion", &suggestion)],
                );
                session.await_confirmation(PendingConfirmation {
                    intent: intent.name.clone(),
                    suggested_username: suggestion.clone(),
                });
                VoiceResponse::confirm(prompt, intent.with_name_slot(&suggestion), session)
            }
            Lookup::NoMatch => {
                session.transition(DialogPhase::NoMatch);
                self.tell(config.unknown_person.clone(), session)
            }
        }
    }

    /// Exact lookup, falling back to a fuzzy suggestion on a miss.
    ///
    /// A name that came from a confirmed suggestion gets no second
    /// suggestion.
    async fn lookup(&self, name: &str, confirmed: bool) -> Result<Lookup, AppError> {
        if let Some(record) = self.store.get(name).await? {
            return Ok(Lookup::Exact(record));
        }
        if confirmed {
            return Ok(Lookup::NoMatch);
        }

        let candidates = self.store.scan_usernames().await?;
        Ok(match self.resolver.resolve(name, &candidates) {
            Some(found) => Lookup::Suggest(found.username),
            None => Lookup::NoMatch,
        })
    }

    fn answer(&self, kind: IntentKind, record: &UserPresenceRecord) -> String {
        let name = record.full_name.as_deref().unwrap_or(&record.username);
        match kind {
            IntentKind::IsInOffice if record.is_in_office => {
                self.phrases.render(Phrase::InOffice, name, "")
            }
            IntentKind::IsInOffice => self.phrases.render(Phrase::NotInOffice, name, ""),
            IntentKind::WhereIs if record.is_somewhere() => {
                self.phrases.render(Phrase::Somewhere, name, "")
            }
            IntentKind::WhereIs if record.is_in_office => {
                self.phrases.render(Phrase::WhereIs, name, &record.room)
            }
            IntentKind::WhereIs => fill(&self.phrases.config().not_arrived, &[("name", name)]),
            IntentKind::CameToWorkToday if record.was_present_on(self.clock.today()) => {
                self.phrases.render(Phrase::HereToday, name, "")
            }
            IntentKind::CameToWorkToday => self.phrases.render(Phrase::NotHereToday, name, ""),
        }
    }

    fn tell(&self, speech: String, mut session: DialogSession) -> VoiceResponse {
        session.transition(DialogPhase::Responded);
        VoiceResponse::tell(speech, session)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::NaiveDate;

    use super::*;
    use locator_core::config::VoiceConfig;
    use locator_core::traits::{FixedClock, FixedIndexSource};
    use locator_database::memory::MemoryPresenceStore;
    use locator_entity::presence::{NewUser, PresenceChange};
    use locator_entity::voice::{Directive, NAME_SLOT};

    use crate::presence::{LocationReport, PresenceService};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 6).unwrap()
    }

    struct Fixture {
        dispatcher: IntentDispatcher,
        presence: PresenceService,
        store: Arc<MemoryPresenceStore>,
        phrases: PhraseBook,
    }

    async fn fixture(usernames: &[&str]) -> Fixture {
        let store = Arc::new(MemoryPresenceStore::new());
        let clock = Arc::new(FixedClock(today()));
        let phrases = PhraseBook::new(
            Arc::new(VoiceConfig::default()),
            Arc::new(FixedIndexSource(0)),
        );
        let presence = PresenceService::new(store.clone(), clock.clone());
        for name in usernames {
            presence
                .register(NewUser {
                    username: name.to_string(),
                    full_name: None,
                })
                .await
                .unwrap();
        }
        Fixture {
            dispatcher: IntentDispatcher::new(
                store.clone(),
                FuzzyResolver::default(),
                phrases.clone(),
                clock,
            ),
            presence,
            store,
            phrases,
        }
    }

    fn ask(intent: &str, name: Option<&str>) -> VoiceRequest {
        ask_in(intent, name, ConfirmationStatus::None, DialogSession::default())
    }

    fn ask_in(
        intent: &str,
        name: Option<&str>,
        confirmation_status: ConfirmationStatus,
        session: DialogSession,
    ) -> VoiceRequest {
        let mut slots = BTreeMap::new();
        if let Some(name) = name {
            slots.insert(NAME_SLOT.to_string(), name.to_string());
        }
        VoiceRequest {
            request: RequestKind::Intent {
                intent: Intent {
                    name: intent.to_string(),
                    slots,
                    confirmation_status,
                },
                dialog_state: DialogState::Completed,
            },
            session,
        }
    }

    #[tokio::test]
    async fn test_launch_greets() {
        let fx = fixture(&[]).await;
        let response = fx
            .dispatcher
            .handle(VoiceRequest {
                request: RequestKind::Launch,
                session: DialogSession::default(),
            })
            .await;
        assert_eq!(response.speech, VoiceConfig::default().greeting);
        assert!(response.should_end_session);
    }

    #[tokio::test]
    async fn test_is_in_office_exact_hit() {
        let fx = fixture(&["alice"]).await;
        fx.presence
            .update_location(LocationReport {
                username: "alice".into(),
                is_in_office: true,
                room: Some("lab".into()),
            })
            .await
            .unwrap();

        let response = fx
            .dispatcher
            .handle(ask("PersonIsInOfficeIntent", Some("Alice")))
            .await;
        assert_eq!(response.speech, fx.phrases.render(Phrase::InOffice, "alice", ""));
        assert_eq!(response.session.phase, DialogPhase::Responded);
    }

    #[tokio::test]
    async fn test_where_is_branches() {
        let fx = fixture(&["alice"]).await;

        let out = fx.dispatcher.handle(ask("WhereIsPersonIntent", Some("alice"))).await;
        assert_eq!(out.speech, "alice has not arrived at the office yet.");

        fx.store
            .update_if_room_differs(
                "alice",
                &PresenceChange {
                    room: "somewhere".into(),
                    is_in_office: true,
                    append_history: false,
                    present_on: None,
                },
            )
            .await
            .unwrap();
        let somewhere = fx.dispatcher.handle(ask("WhereIsPersonIntent", Some("alice"))).await;
        assert!(fx
            .phrases
            .renderings(Phrase::Somewhere, "alice", "")
            .contains(&somewhere.speech));

        fx.presence
            .update_location(LocationReport {
                username: "alice".into(),
                is_in_office: true,
                room: Some("Lab".into()),
            })
            .await
            .unwrap();
        let room = fx.dispatcher.handle(ask("WhereIsPersonIntent", Some("alice"))).await;
        assert!(room.speech.contains("lab"));
    }

    #[tokio::test]
    async fn test_unknown_name_with_no_users_is_unknown_person() {
        let fx = fixture(&[]).await;
        let response = fx
            .dispatcher
            .handle(ask("PersonIsInOfficeIntent", Some("zed")))
            .await;
        assert_eq!(response.speech, VoiceConfig::default().unknown_person);
        assert!(response.directive.is_none());
        assert!(response.session.pending.is_none());
    }

    #[tokio::test]
    async fn test_miss_offers_confirmation_then_uses_suggestion() {
        let fx = fixture(&["alice", "alicia", "bob"]).await;

        let first = fx
            .dispatcher
            .handle(ask("PersonIsInOfficeIntent", Some("alic")))
            .await;
        assert_eq!(first.session.phase, DialogPhase::NeedsConfirmation);
        assert_eq!(first.speech, "I did not find alic, do you mean alice?");
        match &first.directive {
            Some(Directive::ConfirmIntent { intent }) => {
                assert_eq!(intent.name_slot(), Some("alice"))
            }
            other => panic!("expected confirm directive, got {other:?}"),
        }

        // The platform echoes the original slot; the session wins.
        let second = fx
            .dispatcher
            .handle(ask_in(
                "PersonIsInOfficeIntent",
                Some("alic"),
                ConfirmationStatus::Confirmed,
                first.session,
            ))
            .await;
        assert_eq!(
            second.speech,
            fx.phrases.render(Phrase::NotInOffice, "alice", "")
        );
        assert_eq!(second.session.phase, DialogPhase::Responded);
        assert!(second.session.pending.is_none());
    }

    #[tokio::test]
    async fn test_denied_confirmation_is_terminal() {
        let fx = fixture(&["alice"]).await;
        let first = fx
            .dispatcher
            .handle(ask("WhereIsPersonIntent", Some("alise")))
            .await;

        let denied = fx
            .dispatcher
            .handle(ask_in(
                "WhereIsPersonIntent",
                Some("alice"),
                ConfirmationStatus::Denied,
                first.session,
            ))
            .await;
        assert_eq!(denied.speech, VoiceConfig::default().denied);
        assert!(denied.should_end_session);
        assert!(denied.session.pending.is_none());
    }

    #[tokio::test]
    async fn test_came_today_delegates_until_complete() {
        let fx = fixture(&["alice"]).await;
        let mut request = ask("PersonCameToWorkToday", None);
        if let RequestKind::Intent { dialog_state, .. } = &mut request.request {
            *dialog_state = DialogState::Started;
        }

        let response = fx.dispatcher.handle(request).await;
        assert!(matches!(response.directive, Some(Directive::Delegate { .. })));
        assert!(!response.should_end_session);
        assert_eq!(response.session.phase, DialogPhase::AwaitingIntent);
    }

    #[tokio::test]
    async fn test_came_today_compares_dates() {
        let fx = fixture(&["alice", "bob"]).await;
        fx.presence
            .update_location(LocationReport {
                username: "alice".into(),
                is_in_office: true,
                room: Some("lab".into()),
            })
            .await
            .unwrap();

        let alice = fx
            .dispatcher
            .handle(ask("PersonCameToWorkToday", Some("alice")))
            .await;
        let bob = fx
            .dispatcher
            .handle(ask("PersonCameToWorkToday", Some("bob")))
            .await;
        assert_eq!(alice.speech, fx.phrases.render(Phrase::HereToday, "alice", ""));
        assert_eq!(bob.speech, fx.phrases.render(Phrase::NotHereToday, "bob", ""));
    }

    #[tokio::test]
    async fn test_unrecognized_intent() {
        let fx = fixture(&["alice"]).await;
        let response = fx
            .dispatcher
            .handle(ask("OrderPizzaIntent", Some("alice")))
            .await;
        assert_eq!(response.speech, VoiceConfig::default().not_understood);
    }

    #[tokio::test]
    async fn test_missing_name_slot_is_unknown_person() {
        let fx = fixture(&["alice"]).await;
        let response = fx.dispatcher.handle(ask("WhereIsPersonIntent", None)).await;
        assert_eq!(response.speech, VoiceConfig::default().unknown_person);
    }
}
