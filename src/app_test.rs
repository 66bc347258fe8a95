use super::*;

use crate::net::types::Role;

fn sample_user() -> User {
    User {
        id: "u1".into(),
        name: "Ada".into(),
        email: "ada@example.com".into(),
        role: Role::Student,
    }
}

// =============================================================================
// session_handle (native / server builds)
// =============================================================================

#[test]
fn server_render_owner_drops_on_another_thread() {
    let owner = Owner::new();
    owner.with(|| {
        let session = RwSignal::new(SessionState::Loading);
        provide_context(session);
        provide_context(session_handle(session, &ClientConfig::load()));
    });

    let dropped = std::thread::spawn(move || drop(owner)).join();
    assert!(dropped.is_ok());
}

#[test]
fn server_render_session_stays_loading() {
    let owner = Owner::new();
    owner.with(|| {
        let session = RwSignal::new(SessionState::Loading);
        let handle = session_handle(session, &ClientConfig::load());

        handle.login(sample_user(), Credential::new("abc").unwrap());
        assert_eq!(session.get_untracked(), SessionState::Loading);

        handle.logout();
        assert_eq!(session.get_untracked(), SessionState::Loading);
    });
}
