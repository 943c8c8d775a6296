//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every task reports back with exactly one [`Message`]. Results carry the
//! [`RequestId`] they were issued with so the update loop can drop stale ones.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use shopdesk_api::UserApi;
use shopdesk_core::prelude::*;
use shopdesk_core::{Credentials, LoadStage, SessionToken, UserId, UserProfile};

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::request::RequestId;
use crate::user_list::ListFailure;

/// Execute an action by spawning a background task
pub fn handle_action<A>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, api: Arc<A>)
where
    A: UserApi + Send + Sync + 'static,
{
    match action {
        UpdateAction::Login { credentials } => {
            tokio::spawn(async move {
                let msg = login(api.as_ref(), &credentials).await;
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::CheckIdentity { request, token } => {
            tokio::spawn(async move {
                let msg = check_identity(api.as_ref(), request, &token).await;
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::FetchProfile {
            request,
            token,
            user_id,
        } => {
            tokio::spawn(async move {
                let msg = fetch_profile(api.as_ref(), request, &token, &user_id).await;
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::SaveProfile {
            request,
            token,
            profile,
        } => {
            tokio::spawn(async move {
                let msg = save_profile(api.as_ref(), request, &token, &profile).await;
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::FetchUsers { request, token } => {
            tokio::spawn(async move {
                let msg = fetch_users(api.as_ref(), request, &token).await;
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::ScheduleBannerClear { banner_id, delay } => {
            spawn_banner_timer(msg_tx, banner_id, delay);
        }
    }
}

async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if msg_tx.send(msg).await.is_err() {
        debug!("Message channel closed, dropping task result");
    }
}

fn spawn_banner_timer(msg_tx: mpsc::Sender<Message>, banner_id: u64, delay: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        send(&msg_tx, Message::BannerExpired { banner_id }).await;
    });
}

// ─────────────────────────────────────────────────────────────────
// Task bodies
// ─────────────────────────────────────────────────────────────────

pub(crate) async fn login<A: UserApi>(api: &A, credentials: &Credentials) -> Message {
    match api.login(credentials).await {
        Ok(response) => Message::LoginSucceeded(response),
        Err(e) => {
            error!("Login request failed: {}", e);
            Message::LoginFailed {
                error: e.to_string(),
            }
        }
    }
}

pub(crate) async fn check_identity<A: UserApi>(
    api: &A,
    request: RequestId,
    token: &SessionToken,
) -> Message {
    match api.auth_check(token).await {
        Ok(user_id) => Message::IdentityResolved { request, user_id },
        Err(e) => stage_failed(request, LoadStage::IdentityCheck, e),
    }
}

pub(crate) async fn fetch_profile<A: UserApi>(
    api: &A,
    request: RequestId,
    token: &SessionToken,
    user_id: &UserId,
) -> Message {
    match api.fetch_profile(token, user_id).await {
        Ok(profile) => Message::ProfileLoaded { request, profile },
        Err(e) => stage_failed(request, LoadStage::ProfileFetch, e),
    }
}

fn stage_failed(request: RequestId, stage: LoadStage, source: Error) -> Message {
    let err = Error::at_stage(stage, source);
    error!("Account load failed: {}", err);
    Message::AccountLoadFailed {
        request,
        stage,
        error: err.to_string(),
    }
}

pub(crate) async fn save_profile<A: UserApi>(
    api: &A,
    request: RequestId,
    token: &SessionToken,
    profile: &UserProfile,
) -> Message {
    match api.update_profile(token, profile).await {
        Ok(()) => Message::AccountSaved { request },
        Err(e) => {
            error!("Profile update failed: {}", e);
            Message::AccountSaveFailed {
                request,
                error: e.to_string(),
            }
        }
    }
}

pub(crate) async fn fetch_users<A: UserApi>(
    api: &A,
    request: RequestId,
    token: &SessionToken,
) -> Message {
    match api.list_users(token).await {
        Ok(users) => Message::UsersLoaded { request, users },
        Err(e) => {
            error!("User list fetch failed: {}", e);
            Message::UsersLoadFailed {
                request,
                failure: classify_list_failure(&e),
                error: e.to_string(),
            }
        }
    }
}

fn classify_list_failure(error: &Error) -> ListFailure {
    match error {
        Error::Http { .. } => ListFailure::Http,
        _ => ListFailure::Transport,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::RequestSeq;
    use shopdesk_api::test_utils::{ApiCall, FakeFailure, FakeOp, FakeUserApi};
    use tokio::time::Instant;

    fn token() -> SessionToken {
        SessionToken::new("test-token")
    }

    fn request() -> RequestId {
        RequestSeq::new().next_id()
    }

    #[tokio::test]
    async fn test_login_success_carries_response() {
        let api = FakeUserApi::new();
        let creds = Credentials {
            email: "an@example.com".to_string(),
            password: "pw".to_string(),
        };

        let msg = login(&api, &creds).await;

        assert!(matches!(msg, Message::LoginSucceeded(ref r) if r.token().is_some()));
        assert_eq!(api.calls(), vec![ApiCall::Login(creds)]);
    }

    #[tokio::test]
    async fn test_login_failure_maps_to_login_failed() {
        let api = FakeUserApi::new().with_failure(FakeOp::Login, FakeFailure::Http(401));
        let creds = Credentials {
            email: "an@example.com".to_string(),
            password: "wrong".to_string(),
        };

        let msg = login(&api, &creds).await;
        assert!(matches!(msg, Message::LoginFailed { .. }));
    }

    #[tokio::test]
    async fn test_identity_check_failure_never_fetches_profile() {
        let api = FakeUserApi::new()
            .with_failure(FakeOp::AuthCheck, FakeFailure::Transport("refused".into()));

        let msg = check_identity(&api, request(), &token()).await;

        match msg {
            Message::AccountLoadFailed { stage, error, .. } => {
                assert_eq!(stage, LoadStage::IdentityCheck);
                assert!(error.starts_with("Identity check failed"));
            }
            other => panic!("unexpected message: {:?}", other),
        }
        assert_eq!(api.call_count(FakeOp::FetchProfile), 0);
    }

    #[tokio::test]
    async fn test_profile_fetch_failure_is_tagged_with_stage() {
        let api = FakeUserApi::new().with_failure(FakeOp::FetchProfile, FakeFailure::Http(404));

        let msg = fetch_profile(&api, request(), &token(), &UserId::new("u-1")).await;

        assert!(matches!(
            msg,
            Message::AccountLoadFailed {
                stage: LoadStage::ProfileFetch,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_save_profile_outcomes() {
        let api = FakeUserApi::new();
        let profile = shopdesk_api::test_utils::sample_profile();
        let id = request();

        let msg = save_profile(&api, id, &token(), &profile).await;
        assert!(matches!(msg, Message::AccountSaved { request } if request == id));

        api.fail(FakeOp::UpdateProfile, FakeFailure::Http(500));
        let msg = save_profile(&api, id, &token(), &profile).await;
        assert!(matches!(msg, Message::AccountSaveFailed { .. }));
    }

    #[tokio::test]
    async fn test_fetch_users_classifies_failures() {
        let api = FakeUserApi::new().with_failure(FakeOp::ListUsers, FakeFailure::Http(500));
        let msg = fetch_users(&api, request(), &token()).await;
        assert!(matches!(
            msg,
            Message::UsersLoadFailed {
                failure: ListFailure::Http,
                ..
            }
        ));

        api.fail(FakeOp::ListUsers, FakeFailure::Transport("reset".into()));
        let msg = fetch_users(&api, request(), &token()).await;
        assert!(matches!(
            msg,
            Message::UsersLoadFailed {
                failure: ListFailure::Transport,
                ..
            }
        ));

        api.fail(FakeOp::ListUsers, FakeFailure::Decode);
        let msg = fetch_users(&api, request(), &token()).await;
        assert!(matches!(
            msg,
            Message::UsersLoadFailed {
                failure: ListFailure::Transport,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_spawned_fetch_reports_over_channel() {
        let api = Arc::new(FakeUserApi::new());
        let (tx, mut rx) = mpsc::channel(4);
        let id = request();

        handle_action(
            UpdateAction::FetchUsers {
                request: id,
                token: token(),
            },
            tx,
            api.clone(),
        );

        match rx.recv().await {
            Some(Message::UsersLoaded { request, users }) => {
                assert_eq!(request, id);
                assert_eq!(users.len(), 3);
            }
            other => panic!("unexpected message: {:?}", other),
        }
        assert_eq!(api.calls(), vec![ApiCall::ListUsers]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_banner_timer_fires_once_no_sooner_than_delay() {
        let delay = Duration::from_millis(3000);
        let (tx, mut rx) = mpsc::channel(4);
        let start = Instant::now();

        handle_action(
            UpdateAction::ScheduleBannerClear {
                banner_id: 7,
                delay,
            },
            tx,
            Arc::new(FakeUserApi::new()),
        );

        tokio::time::sleep(Duration::from_millis(2999)).await;
        assert!(rx.try_recv().is_err());

        let msg = rx.recv().await;
        assert!(matches!(msg, Some(Message::BannerExpired { banner_id: 7 })));
        assert!(start.elapsed() >= delay);

        // The timer task owned the only sender; nothing else can arrive
        assert!(rx.recv().await.is_none());
    }
}
