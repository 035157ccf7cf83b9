//! End-to-end badge lifecycle: authorize, issue, transfer, revoke.

use emblem_nullables::{NullClock, NullStore};
use emblem_registry::{AuthorizationRegistry, BadgeRegistry, IssueRequest, RegistryError};
use emblem_types::{CallContext, Identity, RegistryParams, VerificationHash};

fn ctx(caller: &Identity, clock: &NullClock) -> CallContext {
    CallContext::new(caller.clone(), clock.now())
}

#[test]
fn badge_lifecycle_ends_at_revocation() {
    let store = NullStore::new();
    let clock = NullClock::new(100);
    let params = RegistryParams::default();

    let root = Identity::new("registry_root");
    let issuer = Identity::new("issuer_university");
    let alice = Identity::new("alice");
    let bob = Identity::new("bob");
    let carol = Identity::new("carol");

    let auth = AuthorizationRegistry::new(root.clone(), store.clone());
    let registry = BadgeRegistry::new(store);

    // Root authorizes the issuer.
    auth.authorize(&params, &ctx(&root, &clock), issuer.clone(), "University".into())
        .unwrap();

    // The issuer grants Alice a badge with no expiry.
    clock.advance(1);
    let badge = registry
        .issue(
            &auth,
            &params,
            &ctx(&issuer, &clock),
            IssueRequest {
                recipient: alice.clone(),
                badge_type: "degree".into(),
                title: "BSc".into(),
                description: "Bachelor of Science".into(),
                metadata_uri: "ipfs://degree/bsc".into(),
                expires_at: None,
                verification_hash: VerificationHash::compute(b"diploma scan"),
            },
        )
        .unwrap();

    // Alice passes it to Bob.
    clock.advance(10);
    registry
        .transfer(&ctx(&alice, &clock), badge, bob.clone())
        .unwrap();
    assert_eq!(registry.get_badge(badge).unwrap().unwrap().owner, bob);

    // The issuer revokes it.
    clock.advance(10);
    registry
        .revoke(&auth, &ctx(&issuer, &clock), badge, Some("degree rescinded"))
        .unwrap();

    // Bob can no longer pass it on.
    clock.advance(10);
    let result = registry.transfer(&ctx(&bob, &clock), badge, carol.clone());
    assert!(matches!(result, Err(RegistryError::TransferFailed(_))));

    // Nothing about the failed transfer was recorded.
    let record = registry.get_badge(badge).unwrap().unwrap();
    assert_eq!(record.owner, bob);
    assert!(record.revoked);
    let history = registry.ownership_history(badge).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].previous_owner, alice);
    assert_eq!(history[0].new_owner, bob);
}
