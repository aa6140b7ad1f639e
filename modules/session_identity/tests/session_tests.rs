//! Integration tests for the dual-scope session state machine

use session_identity::contract::*;
use session_identity::domain::{SessionEvent, StorageBoundary};

mod common;
use common::{grant, grant_without_refresh, operator_credentials, user, TestBrowser};

fn browser_with_operator() -> TestBrowser {
    let browser = TestBrowser::new();
    let credentials = operator_credentials();
    browser.auth.add_login_grant(
        &credentials.email,
        &credentials.password,
        grant("primary-at", user(&credentials.email)),
    );
    browser
}

#[tokio::test]
async fn test_login_establishes_primary_session() {
    let browser = browser_with_operator();
    let tab = browser.open_tab();

    let session = tab.service.login(&operator_credentials()).await.unwrap();
    assert_eq!(session.scope, SessionScope::Primary);
    assert_eq!(session.tenant_id(), session.user.tenant_id);

    match tab.service.state() {
        SessionState::PrimaryActive(active) => assert_eq!(active, session),
        other => panic!("Expected PrimaryActive, got {:?}", other),
    }
    assert_eq!(tab.service.tenant_id(), Some(session.tenant_id()));

    // Primary session lives in the shared boundary, not the tab boundary
    assert_eq!(
        browser.shared.get("accessToken").as_deref(),
        Some("primary-at")
    );
    assert_eq!(
        browser.shared.get("tenantId"),
        Some(session.tenant_id().to_string())
    );
    assert!(tab.storage.snapshot().is_empty());

    assert_eq!(
        *tab.sink.events.read(),
        vec![SessionEvent::LoggedIn {
            tenant_id: session.tenant_id()
        }]
    );
}

#[tokio::test]
async fn test_login_validation_and_rejection() {
    let browser = browser_with_operator();
    let tab = browser.open_tab();

    let empty = tab
        .service
        .login(&Credentials {
            email: "".to_string(),
            password: "".to_string(),
        })
        .await;
    assert!(matches!(empty, Err(SessionError::Validation { .. })));
    assert_eq!(browser.auth.login_call_count(), 0);

    let wrong = tab
        .service
        .login(&Credentials {
            email: "operator@console.test".to_string(),
            password: "wrong".to_string(),
        })
        .await;
    assert!(matches!(wrong, Err(SessionError::Unauthorized { .. })));
    assert_eq!(tab.service.state(), SessionState::NoSession);
}

#[tokio::test]
async fn test_primary_session_visible_from_second_tab() {
    let browser = browser_with_operator();
    let tab_a = browser.open_tab();
    tab_a.service.login(&operator_credentials()).await.unwrap();

    let tab_b = browser.open_tab();
    match tab_b.service.state() {
        SessionState::PrimaryActive(session) => {
            assert_eq!(session.access_token, "primary-at");
        }
        other => panic!("Expected PrimaryActive in second tab, got {:?}", other),
    }
}

#[tokio::test]
async fn test_logout_clears_only_primary_scope() {
    let browser = browser_with_operator();
    let tab = browser.open_tab();
    tab.service.login(&operator_credentials()).await.unwrap();

    browser
        .auth
        .add_impersonation_grant("tok", grant("imp-at", user("support@tenant.test")));
    tab.service.begin_impersonation("tok").await.unwrap();

    tab.service.logout();

    // Shared boundary cleared, tab boundary untouched: impersonation survives
    assert!(browser.shared.snapshot().is_empty());
    match tab.service.state() {
        SessionState::ImpersonatedActive(session) => {
            assert_eq!(session.access_token, "imp-at");
        }
        other => panic!("Expected ImpersonatedActive after logout, got {:?}", other),
    }
}

#[tokio::test]
async fn test_login_rejected_inside_impersonated_tab() {
    let browser = browser_with_operator();
    let tab = browser.open_tab();
    browser
        .auth
        .add_impersonation_grant("tok", grant("imp-at", user("support@tenant.test")));
    tab.service.begin_impersonation("tok").await.unwrap();

    let result = tab.service.login(&operator_credentials()).await;
    assert!(matches!(result, Err(SessionError::Conflict { .. })));
    // The rejected login never reached the collaborator
    assert_eq!(browser.auth.login_call_count(), 0);
}

#[tokio::test]
async fn test_impersonated_strictly_overrides_primary() {
    let browser = browser_with_operator();
    let tab = browser.open_tab();
    let primary = tab.service.login(&operator_credentials()).await.unwrap();

    browser
        .auth
        .add_impersonation_grant("tok", grant("imp-at", user("support@tenant.test")));
    let impersonated = tab.service.begin_impersonation("tok").await.unwrap();
    assert_ne!(primary.tenant_id(), impersonated.tenant_id());

    match tab.service.state() {
        SessionState::PrimaryAndImpersonatedActive {
            primary: p,
            impersonated: i,
        } => {
            assert_eq!(p.access_token, "primary-at");
            assert_eq!(i.access_token, "imp-at");
        }
        other => panic!("Expected both sessions active, got {:?}", other),
    }

    // Tenant-identity reads must use the impersonated session
    assert_eq!(tab.service.tenant_id(), Some(impersonated.tenant_id()));
    assert_eq!(
        tab.service.active_session().map(|s| s.scope),
        Some(SessionScope::Impersonated)
    );
}

#[tokio::test]
async fn test_end_impersonation_returns_to_primary() {
    let browser = browser_with_operator();
    let tab = browser.open_tab();
    let primary = tab.service.login(&operator_credentials()).await.unwrap();

    browser
        .auth
        .add_impersonation_grant("tok", grant("imp-at", user("support@tenant.test")));
    tab.service.begin_impersonation("tok").await.unwrap();

    let state = tab.service.end_impersonation();
    assert_eq!(state, SessionState::PrimaryActive(primary));
    assert!(tab.storage.snapshot().is_empty());
}

#[tokio::test]
async fn test_end_impersonation_without_primary_is_no_session() {
    let browser = TestBrowser::new();
    let tab = browser.open_tab();
    browser
        .auth
        .add_impersonation_grant("tok", grant("imp-at", user("support@tenant.test")));
    tab.service.begin_impersonation("tok").await.unwrap();

    let state = tab.service.end_impersonation();
    assert_eq!(state, SessionState::NoSession);
}

#[tokio::test]
async fn test_absent_refresh_token_clears_stale_one() {
    let browser = TestBrowser::new();
    let tab = browser.open_tab();

    // A stale refresh token from an earlier impersonation lingers in the tab
    tab.storage
        .apply(&[session_identity::domain::StorageOp::set(
            "refreshToken",
            "stale",
        )])
        .unwrap();

    browser.auth.add_impersonation_grant(
        "tok",
        grant_without_refresh("imp-at", user("support@tenant.test")),
    );
    let session = tab.service.begin_impersonation("tok").await.unwrap();

    assert_eq!(session.refresh_token, None);
    assert_eq!(tab.storage.get("refreshToken"), None);
}
