//! Integration tests for role-gated navigation.

use std::time::Duration;

use crm_lib::auth::*;
use crm_lib::nav::*;

async fn session(email: &str) -> Session {
    LoginFlow::with_delay(Duration::ZERO)
        .submit_credentials(email, "secret")
        .await
        .unwrap()
        .verify("123456")
        .await
        .unwrap()
}

#[test]
fn test_nav_items_per_role() {
    let agent: Vec<_> = nav_items(Role::Agent).iter().map(|i| i.label).collect();
    assert_eq!(
        agent,
        vec!["Dashboard", "Add Client", "My Clients", "Visit Notes", "Search Client"]
    );

    let admin: Vec<_> = nav_items(Role::Admin).iter().map(|i| i.path()).collect();
    assert_eq!(admin.len(), 9);
    assert!(admin.contains(&"/manage-agents"));
    assert!(admin.contains(&"/system-settings"));
    assert!(!admin.contains(&"/my-clients"));
}

#[test]
fn test_can_access() {
    assert!(can_access(Role::Agent, Route::MyClients));
    assert!(!can_access(Role::Agent, Route::SystemSettings));
    assert!(can_access(Role::Admin, Route::AllClients));
    assert!(!can_access(Role::Admin, Route::MyClients));
    assert!(can_access(Role::Agent, Route::Profile));
    assert!(can_access(Role::Admin, Route::Profile));
}

#[test]
fn test_route_paths_round_trip() {
    for route in Route::ALL {
        assert_eq!(Route::from_path(route.path()), Some(route));
    }
    assert_eq!(Route::from_path("/nope"), None);
}

#[test]
fn test_signed_out_redirects_to_login() {
    assert_eq!(resolve(None, "/login"), Resolution::Allow(Route::Login));
    assert_eq!(resolve(None, "/dashboard"), Resolution::Redirect(Route::Login));
    assert_eq!(resolve(None, "/"), Resolution::Redirect(Route::Login));
    assert_eq!(resolve(None, "/nope"), Resolution::Redirect(Route::Login));
}

#[tokio::test]
async fn test_signed_in_resolution() {
    let agent = session("agent@company.com").await;
    assert_eq!(resolve(Some(&agent), "/"), Resolution::Redirect(Route::Dashboard));
    assert_eq!(
        resolve(Some(&agent), "/login"),
        Resolution::Redirect(Route::Dashboard)
    );
    assert_eq!(
        resolve(Some(&agent), "/my-clients"),
        Resolution::Allow(Route::MyClients)
    );
    assert_eq!(
        resolve(Some(&agent), "/reports"),
        Resolution::Forbidden(Route::Reports)
    );
    assert_eq!(resolve(Some(&agent), "/nope"), Resolution::NotFound);

    let admin = session("admin@company.com").await;
    assert_eq!(resolve(Some(&admin), "/reports"), Resolution::Allow(Route::Reports));
    assert_eq!(
        resolve(Some(&admin), "/profile"),
        Resolution::Allow(Route::Profile)
    );
}
