use super::*;
use crate::net::types::{Role, User};

#[test]
fn nav_hidden_while_loading() {
    assert_eq!(nav_items(&SessionState::Loading), NavItems::Hidden);
}

#[test]
fn nav_offers_entry_links_when_signed_out() {
    assert_eq!(nav_items(&SessionState::Unauthenticated), NavItems::Anonymous);
}

#[test]
fn nav_label_shows_name_and_role() {
    let state = SessionState::Authenticated(User {
        id: "u1".to_owned(),
        name: "Grace".to_owned(),
        email: "grace@example.com".to_owned(),
        role: Role::Teacher,
    });
    assert_eq!(nav_items(&state), NavItems::SignedIn { label: "Grace (teacher)".to_owned() });
}
