//! Integration tests for the request gate over an in-memory graph.

use chrono::{Duration, Utc};
use homemetrics_auth::config::AuthConfig;
use homemetrics_auth::gate::RequestGate;
use homemetrics_auth::service::AuthService;
use homemetrics_auth::token;
use homemetrics_core::error::HomeError;
use homemetrics_core::models::metric::CreateMetric;
use homemetrics_core::models::reading::AddReading;
use homemetrics_core::models::role::{ADMIN_ROLE, CreateRole, USER_ROLE};
use homemetrics_core::models::room::CreateRoom;
use homemetrics_core::models::user::{CreateUser, User};
use homemetrics_store::repository::GraphUserRepository;
use homemetrics_store::{GraphRepositories, ResourceGraph};
use uuid::Uuid;

struct Harness {
    graph: ResourceGraph,
    auth: AuthService<GraphUserRepository>,
    gate: RequestGate<GraphRepositories>,
    config: AuthConfig,
}

fn setup() -> Harness {
    let config = AuthConfig::with_secret("gate-test-secret");
    let graph = ResourceGraph::new();
    Harness {
        auth: AuthService::new(GraphUserRepository::new(graph.clone()), config.clone()),
        gate: RequestGate::new(GraphRepositories::new(graph.clone()), config.clone()),
        graph,
        config,
    }
}

impl Harness {
    /// Register `username` and return a ready-to-send header value.
    async fn register(&self, username: &str, roles: &[&str]) -> (User, String) {
        let resp = self
            .auth
            .register(CreateUser {
                username: username.into(),
                password: "secretpassword".into(),
                email: format!("{username}@example.com"),
                roles: roles.iter().map(|r| r.to_string()).collect(),
            })
            .await
            .unwrap();
        (resp.user, format!("Bearer {}", resp.token))
    }
}

fn kitchen() -> CreateRoom {
    CreateRoom {
        name: "Kitchen".into(),
        description: String::new(),
    }
}

fn power(room_id: Uuid) -> CreateMetric {
    CreateMetric {
        name: "Power".into(),
        description: "Electricity".into(),
        unit: "kWh".into(),
        room_id,
    }
}

#[tokio::test]
async fn household_scenario() {
    let h = setup();

    // alice registers without roles and gets `user`.
    let (alice, alice_auth) = h.register("alice", &[]).await;
    assert_eq!(alice.roles[0].name, USER_ROLE);

    let err = h.gate.create_room(Some(&alice_auth), kitchen()).await.unwrap_err();
    assert!(matches!(err, HomeError::AuthorizationDenied { .. }));
    assert_eq!(h.graph.stats().await.rooms, 0);

    // bob is an admin.
    let (_bob, bob_auth) = h.register("bob", &[ADMIN_ROLE]).await;
    let room = h.gate.create_room(Some(&bob_auth), kitchen()).await.unwrap();
    assert_eq!(room.name, "Kitchen");

    let metric = h
        .gate
        .create_metric(Some(&bob_auth), power(room.id))
        .await
        .unwrap();
    assert_eq!(metric.unit, "kWh");

    let reading = h
        .gate
        .add_reading(
            Some(&bob_auth),
            &metric.id.to_string(),
            AddReading {
                value: 3.2,
                timestamp: None,
            },
        )
        .await
        .unwrap();

    let view = h
        .gate
        .get_metric(Some(&bob_auth), &metric.id.to_string())
        .await
        .unwrap();
    assert_eq!(view.metric, metric);
    assert_eq!(view.readings, vec![reading]);
    assert_eq!(view.readings[0].value, 3.2);

    h.gate
        .delete_room(Some(&bob_auth), &room.id.to_string())
        .await
        .unwrap();

    let err = h
        .gate
        .get_metric(Some(&bob_auth), &metric.id.to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, HomeError::NotFound { .. }));
}

#[tokio::test]
async fn plain_users_can_read_and_record_but_not_manage() {
    let h = setup();
    let (_alice, alice_auth) = h.register("alice", &[]).await;
    let (_bob, bob_auth) = h.register("bob", &[ADMIN_ROLE]).await;

    let room = h.gate.create_room(Some(&bob_auth), kitchen()).await.unwrap();
    let metric = h
        .gate
        .create_metric(Some(&bob_auth), power(room.id))
        .await
        .unwrap();
    let metric_id = metric.id.to_string();
    let room_id = room.id.to_string();

    // Reads and reading insertion only need authentication.
    assert_eq!(h.gate.list_rooms(Some(&alice_auth)).await.unwrap().len(), 1);
    assert_eq!(h.gate.get_room(Some(&alice_auth), &room_id).await.unwrap(), room);
    assert_eq!(h.gate.list_metrics(Some(&alice_auth)).await.unwrap().len(), 1);
    h.gate
        .add_reading(
            Some(&alice_auth),
            &metric_id,
            AddReading {
                value: 1.5,
                timestamp: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(
        h.gate
            .list_readings(Some(&alice_auth), &metric_id)
            .await
            .unwrap()
            .len(),
        1
    );

    // Management is admin-only and leaves the graph untouched.
    let denied = [
        h.gate
            .create_metric(Some(&alice_auth), power(room.id))
            .await
            .map(|_| ()),
        h.gate.delete_metric(Some(&alice_auth), &metric_id).await,
        h.gate.delete_room(Some(&alice_auth), &room_id).await,
        h.gate.list_users(Some(&alice_auth)).await.map(|_| ()),
        h.gate
            .create_role(
                Some(&alice_auth),
                CreateRole {
                    name: "viewer".into(),
                    description: String::new(),
                    permissions: vec![],
                },
            )
            .await
            .map(|_| ()),
    ];
    for result in denied {
        assert!(matches!(result, Err(HomeError::AuthorizationDenied { .. })));
    }

    let stats = h.graph.stats().await;
    assert_eq!(stats.rooms, 1);
    assert_eq!(stats.metrics, 1);
    assert_eq!(stats.readings, 1);
    assert_eq!(stats.roles, 2);
}

#[tokio::test]
async fn missing_or_bad_credentials_are_unauthenticated() {
    let h = setup();
    let (_bob, bob_auth) = h.register("bob", &[ADMIN_ROLE]).await;
    let bare_token = bob_auth.trim_start_matches("Bearer ").to_string();

    for header in [
        None,
        Some(bare_token.as_str()),
        Some("Bearer garbage"),
        Some("Token abc"),
    ] {
        let err = h.gate.create_room(header, kitchen()).await.unwrap_err();
        assert!(
            matches!(err, HomeError::AuthenticationFailed { .. }),
            "header {header:?} gave {err:?}"
        );
    }
    assert_eq!(h.graph.stats().await.rooms, 0);
}

#[tokio::test]
async fn expired_token_is_unauthenticated() {
    let h = setup();
    let (bob, _) = h.register("bob", &[ADMIN_ROLE]).await;

    let issued = Utc::now() - Duration::hours(24) - Duration::seconds(5);
    let stale = token::issue_token_at(&bob, issued, &h.config).unwrap();
    let err = h
        .gate
        .list_rooms(Some(&format!("Bearer {stale}")))
        .await
        .unwrap_err();
    match err {
        HomeError::AuthenticationFailed { reason } => assert!(reason.contains("expired")),
        other => panic!("expected AuthenticationFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn valid_token_for_unknown_user_is_not_found() {
    let h = setup();
    let now = Utc::now();
    let phantom = User {
        id: Uuid::new_v4(),
        username: "phantom".into(),
        password: String::new(),
        email: "phantom@example.com".into(),
        roles: Vec::new(),
        created_at: now,
        updated_at: now,
    };
    let header = format!("Bearer {}", token::issue_token(&phantom, &h.config).unwrap());

    let err = h.gate.list_rooms(Some(&header)).await.unwrap_err();
    assert!(matches!(err, HomeError::NotFound { ref entity, .. } if entity == "user"));
}

#[tokio::test]
async fn malformed_ids_are_validation_errors() {
    let h = setup();
    let (_bob, bob_auth) = h.register("bob", &[ADMIN_ROLE]).await;

    assert!(matches!(
        h.gate.get_room(Some(&bob_auth), "kitchen").await,
        Err(HomeError::Validation { .. })
    ));
    assert!(matches!(
        h.gate.delete_metric(Some(&bob_auth), "12345").await,
        Err(HomeError::Validation { .. })
    ));
    assert!(matches!(
        h.gate.list_readings(Some(&bob_auth), "").await,
        Err(HomeError::Validation { .. })
    ));

    // Well-formed but unknown ids are lookups that miss.
    let unknown = Uuid::new_v4().to_string();
    assert!(matches!(
        h.gate.get_room(Some(&bob_auth), &unknown).await,
        Err(HomeError::NotFound { .. })
    ));
    assert!(matches!(
        h.gate
            .add_reading(
                Some(&bob_auth),
                &unknown,
                AddReading {
                    value: 1.0,
                    timestamp: None
                }
            )
            .await,
        Err(HomeError::NotFound { .. })
    ));
}

#[tokio::test]
async fn authentication_is_checked_before_id_parsing() {
    let h = setup();
    let err = h.gate.get_room(None, "not-a-uuid").await.unwrap_err();
    assert!(matches!(err, HomeError::AuthenticationFailed { .. }));

    let (_alice, alice_auth) = h.register("alice", &[]).await;
    let err = h
        .gate
        .delete_room(Some(&alice_auth), "not-a-uuid")
        .await
        .unwrap_err();
    assert!(matches!(err, HomeError::AuthorizationDenied { .. }));
}

#[tokio::test]
async fn metric_payload_and_reading_value_are_validated() {
    let h = setup();
    let (_bob, bob_auth) = h.register("bob", &[ADMIN_ROLE]).await;
    let room = h.gate.create_room(Some(&bob_auth), kitchen()).await.unwrap();

    let err = h
        .gate
        .create_metric(
            Some(&bob_auth),
            CreateMetric {
                unit: String::new(),
                ..power(room.id)
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, HomeError::Validation { .. }));

    let metric = h
        .gate
        .create_metric(Some(&bob_auth), power(room.id))
        .await
        .unwrap();
    let err = h
        .gate
        .add_reading(
            Some(&bob_auth),
            &metric.id.to_string(),
            AddReading {
                value: f64::NAN,
                timestamp: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, HomeError::Validation { .. }));
    assert_eq!(h.graph.stats().await.readings, 0);
}

#[tokio::test]
async fn create_metric_for_missing_room_is_not_found() {
    let h = setup();
    let (_bob, bob_auth) = h.register("bob", &[ADMIN_ROLE]).await;

    let err = h
        .gate
        .create_metric(Some(&bob_auth), power(Uuid::new_v4()))
        .await
        .unwrap_err();
    assert!(matches!(err, HomeError::NotFound { ref entity, .. } if entity == "room"));
}

#[tokio::test]
async fn admin_lists_users_and_creates_roles() {
    let h = setup();
    let (_alice, _) = h.register("alice", &[]).await;
    let (_bob, bob_auth) = h.register("bob", &[ADMIN_ROLE]).await;

    let mut names: Vec<String> = h
        .gate
        .list_users(Some(&bob_auth))
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.username)
        .collect();
    names.sort();
    assert_eq!(names, vec!["alice", "bob"]);

    let role = h
        .gate
        .create_role(
            Some(&bob_auth),
            CreateRole {
                name: "viewer".into(),
                description: "Read only".into(),
                permissions: vec!["read".into()],
            },
        )
        .await
        .unwrap();
    assert_eq!(role.name, "viewer");

    let err = h
        .gate
        .create_role(
            Some(&bob_auth),
            CreateRole {
                name: "viewer".into(),
                description: String::new(),
                permissions: vec![],
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, HomeError::AlreadyExists { .. }));

    // New registrations can pick up the new role.
    let (carol, carol_auth) = h.register("carol", &["viewer"]).await;
    assert_eq!(carol.roles, vec![role]);
    assert!(h.gate.authorize(Some(&carol_auth), "viewer").await.is_ok());
    assert!(matches!(
        h.gate.authorize(Some(&carol_auth), ADMIN_ROLE).await,
        Err(HomeError::AuthorizationDenied { .. })
    ));
}

#[tokio::test]
async fn deleting_a_metric_hides_its_readings() {
    let h = setup();
    let (_bob, bob_auth) = h.register("bob", &[ADMIN_ROLE]).await;
    let room = h.gate.create_room(Some(&bob_auth), kitchen()).await.unwrap();
    let metric = h
        .gate
        .create_metric(Some(&bob_auth), power(room.id))
        .await
        .unwrap();
    let metric_id = metric.id.to_string();

    h.gate
        .add_reading(
            Some(&bob_auth),
            &metric_id,
            AddReading {
                value: 2.0,
                timestamp: None,
            },
        )
        .await
        .unwrap();
    h.gate.delete_metric(Some(&bob_auth), &metric_id).await.unwrap();

    assert!(matches!(
        h.gate.list_readings(Some(&bob_auth), &metric_id).await,
        Err(HomeError::NotFound { .. })
    ));
    let kept = h
        .gate
        .get_room(Some(&bob_auth), &room.id.to_string())
        .await
        .unwrap();
    assert_eq!(kept, room);
}
