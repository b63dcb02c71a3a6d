use super::*;

fn user(role: UserRole) -> User {
    User {
        id: 1,
        email: "ana@nonitos.cr".to_owned(),
        full_name: "Ana".to_owned(),
        phone_number: None,
        role,
        is_email_verified: true,
        created_at: None,
    }
}

// =============================================================
// SessionState defaults
// =============================================================

#[test]
fn session_state_default_no_user() {
    let state = SessionState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn session_state_default_is_loading() {
    assert!(SessionState::default().loading);
}

#[test]
fn session_state_authenticated_iff_user_present() {
    let state = SessionState { user: Some(user(UserRole::Client)), loading: false };
    assert!(state.is_authenticated());
    assert_eq!(state.role(), Some(UserRole::Client));
}

#[test]
fn session_state_role_absent_without_user() {
    let state = SessionState { user: None, loading: false };
    assert_eq!(state.role(), None);
}
