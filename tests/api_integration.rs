//! End-to-end tests driving a real server over HTTP with the catalog client
//! and the admin mediator, backed by the in-memory store.

use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::services::ServeDir;

use mesa_dados_back::{
    catalog::{
        admin::{AdminError, AdminMediator, FileUpload, GameForm, ListField},
        client::CatalogClient,
    },
    config::AppConfig,
    dao::game_store::memory::MemoryGameStore,
    routes,
    state::AppState,
};

const ADMIN_PASSWORD: &str = "correct horse battery staple";

struct TestServer {
    base_url: String,
    server_task: tokio::task::JoinHandle<()>,
    _public_dir: tempfile::TempDir,
}

impl TestServer {
    /// Stop the server so subsequent requests fail at the transport level.
    fn shut_down(&self) {
        self.server_task.abort();
    }
}

async fn spawn_server() -> TestServer {
    let public_dir = tempfile::tempdir().expect("create public dir");
    let config = AppConfig {
        port: 0,
        database_url: None,
        public_dir: public_dir.path().to_path_buf(),
        jwt_secret: "integration-test-secret".into(),
        admin_username: "admin".into(),
        // Low cost keeps the test fast; production uses the bcrypt default.
        admin_password_hash: Some(bcrypt::hash(ADMIN_PASSWORD, 4).expect("hash password")),
    };

    let state = AppState::new(config);
    state.set_game_store(Arc::new(MemoryGameStore::new())).await;

    let app = routes::router(state)
        .nest_service("/images", ServeDir::new(public_dir.path().join("images")))
        .nest_service("/rules", ServeDir::new(public_dir.path().join("rules")));

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
    let addr = listener.local_addr().expect("listener addr");
    let server_task = tokio::spawn(async move {
        axum::serve(listener, app.into_make_service())
            .await
            .expect("serve");
    });

    TestServer {
        base_url: format!("http://{addr}"),
        server_task,
        _public_dir: public_dir,
    }
}

fn catan_form() -> GameForm {
    GameForm {
        name: "Catan".into(),
        description: "Coloniza la isla".into(),
        players: "3-4".into(),
        min_age: "10".into(),
        duration: "60-90 min".into(),
        categories: ListField::Text("Estrategia, Comercio".into()),
        difficulty: "Medio".into(),
        rating: "4.5".into(),
        review: "Un clásico moderno".into(),
        ..GameForm::default()
    }
}

#[tokio::test]
async fn full_admin_crud_flow() {
    let server = spawn_server().await;
    let admin = AdminMediator::new(&server.base_url);
    let mut catalog = CatalogClient::new(&server.base_url);

    let token = admin
        .login("admin", ADMIN_PASSWORD)
        .await
        .expect("login with valid credentials");

    // Create with a pending cover image: the upload runs first and the
    // record must reference the server-assigned path, never the client-side
    // file name.
    let image = FileUpload {
        file_name: "portada catan.png".into(),
        bytes: vec![0x89, 0x50, 0x4e, 0x47],
    };
    let created = admin
        .save_game(catan_form(), Some(&image), None, &token, None, &mut catalog)
        .await
        .expect("create game");

    let stored_image = created.image.as_deref().expect("image path assigned");
    assert!(stored_image.starts_with("/images/games/"), "got {stored_image}");
    assert_ne!(stored_image, "portada catan.png");

    // The mediator refetched the catalog; the cache shows the new record in
    // camelCase form.
    assert_eq!(catalog.games().len(), 1);
    let cached = &catalog.games()[0];
    assert_eq!(cached.name, "Catan");
    assert_eq!(cached.min_age, 10);
    assert_eq!(cached.rating, Some(4.5));
    assert_eq!(cached.categories, vec!["Estrategia", "Comercio"]);
    assert_eq!(cached.image.as_deref(), Some(stored_image));

    // Full replace through the same flow.
    let mut updated_form = GameForm::from_game(cached);
    updated_form.rating = "5".into();
    let updated = admin
        .save_game(updated_form, None, None, &token, Some(created.id), &mut catalog)
        .await
        .expect("update game");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.rating, Some(5.0));
    assert_eq!(catalog.games()[0].rating, Some(5.0));

    // Delete, then the refetched list no longer contains the record.
    admin
        .delete_game(created.id, &token, &mut catalog)
        .await
        .expect("delete game");
    assert!(catalog.games().is_empty());
    assert!(catalog.last_error().is_none());
}

#[tokio::test]
async fn uploaded_image_is_publicly_served() {
    let server = spawn_server().await;
    let admin = AdminMediator::new(&server.base_url);
    let mut catalog = CatalogClient::new(&server.base_url);

    let token = admin.login("admin", ADMIN_PASSWORD).await.expect("login");
    let image = FileUpload {
        file_name: "azul.jpg".into(),
        bytes: b"jpeg bytes".to_vec(),
    };
    let mut form = catan_form();
    form.name = "Azul".into();
    let created = admin
        .save_game(form, Some(&image), None, &token, None, &mut catalog)
        .await
        .expect("create game");

    let path = created.image.expect("image path");
    let response = reqwest::get(format!("{}{path}", server.base_url))
        .await
        .expect("fetch image");
    assert!(response.status().is_success());
    assert_eq!(response.bytes().await.expect("body").as_ref(), b"jpeg bytes");
}

#[tokio::test]
async fn rules_upload_keeps_summary_and_path() {
    let server = spawn_server().await;
    let admin = AdminMediator::new(&server.base_url);
    let mut catalog = CatalogClient::new(&server.base_url);

    let token = admin.login("admin", ADMIN_PASSWORD).await.expect("login");
    let rules = FileUpload {
        file_name: "reglas.pdf".into(),
        bytes: b"%PDF-1.7".to_vec(),
    };
    let mut form = catan_form();
    form.rules_summary = "Coloca, roba, puntúa".into();
    let created = admin
        .save_game(form, None, Some(&rules), &token, None, &mut catalog)
        .await
        .expect("create game");

    let rules_path = created.rules_file.as_deref().expect("rules path");
    assert!(rules_path.starts_with("/rules/"), "got {rules_path}");
    assert_eq!(created.rules_summary.as_deref(), Some("Coloca, roba, puntúa"));
}

#[tokio::test]
async fn failed_upload_aborts_the_save() {
    let server = spawn_server().await;
    let admin = AdminMediator::new(&server.base_url);
    let mut catalog = CatalogClient::new(&server.base_url);

    let token = admin.login("admin", ADMIN_PASSWORD).await.expect("login");

    // The server rejects empty uploads with 400; the record mutation must
    // never run after a failed upload.
    let empty = FileUpload {
        file_name: "vacia.png".into(),
        bytes: Vec::new(),
    };
    let err = admin
        .save_game(catan_form(), Some(&empty), None, &token, None, &mut catalog)
        .await
        .expect_err("empty upload must abort the save");
    assert!(matches!(
        err,
        AdminError::Upload { status, .. } if status == reqwest::StatusCode::BAD_REQUEST
    ));

    let games = catalog.fetch_games().await.expect("fetch catalog");
    assert!(games.is_empty(), "no record may exist after an aborted save");
}

#[tokio::test]
async fn login_rejects_wrong_password() {
    let server = spawn_server().await;
    let admin = AdminMediator::new(&server.base_url);

    let err = admin
        .login("admin", "not the password")
        .await
        .expect_err("wrong password must fail");
    assert!(matches!(err, AdminError::Unauthorized));
}

#[tokio::test]
async fn mutations_require_a_valid_token() {
    let server = spawn_server().await;
    let http = reqwest::Client::new();
    let body = serde_json::json!({"name": "Catan"});

    // No token at all.
    let response = http
        .post(format!("{}/api/games", server.base_url))
        .json(&body)
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), reqwest::StatusCode::UNAUTHORIZED);

    // A token signed with the wrong secret.
    let response = http
        .post(format!("{}/api/games", server.base_url))
        .bearer_auth("not.a.token")
        .json(&body)
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), reqwest::StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn public_reads_need_no_token() {
    let server = spawn_server().await;
    let mut catalog = CatalogClient::new(&server.base_url);

    let games = catalog.fetch_games().await.expect("fetch empty catalog");
    assert!(games.is_empty());
}

#[tokio::test]
async fn fetch_failure_clears_the_cache() {
    let server = spawn_server().await;
    let admin = AdminMediator::new(&server.base_url);
    let mut catalog = CatalogClient::new(&server.base_url);

    let token = admin.login("admin", ADMIN_PASSWORD).await.expect("login");
    admin
        .save_game(catan_form(), None, None, &token, None, &mut catalog)
        .await
        .expect("create game");
    assert_eq!(catalog.games().len(), 1);

    // Once the store is unreachable a refetch must drop the stale list and
    // record the failure instead of serving yesterday's catalog.
    server.shut_down();
    catalog.fetch_games().await.expect_err("dead endpoint");
    assert!(catalog.games().is_empty());
    assert!(catalog.last_error().is_some());
}

#[tokio::test]
async fn healthcheck_reports_ok_with_store_installed() {
    let server = spawn_server().await;

    let response = reqwest::get(format!("{}/healthcheck", server.base_url))
        .await
        .expect("healthcheck");
    assert!(response.status().is_success());
}

#[tokio::test]
async fn invalid_payload_is_rejected() {
    let server = spawn_server().await;
    let admin = AdminMediator::new(&server.base_url);
    let mut catalog = CatalogClient::new(&server.base_url);

    let token = admin.login("admin", ADMIN_PASSWORD).await.expect("login");
    let mut form = catan_form();
    form.name = "   ".into();
    let err = admin
        .save_game(form, None, None, &token, None, &mut catalog)
        .await
        .expect_err("blank name must be rejected");
    assert!(matches!(err, AdminError::Status(status) if status == reqwest::StatusCode::BAD_REQUEST));
}

#[tokio::test]
async fn missing_game_returns_not_found() {
    let server = spawn_server().await;
    let catalog = CatalogClient::new(&server.base_url);

    let err = catalog.fetch_game(9999).await.expect_err("unknown id");
    assert!(matches!(
        err,
        mesa_dados_back::catalog::client::CatalogError::NotFound(9999)
    ));
}
