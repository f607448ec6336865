//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p vidkeep-api --test videos_test`.

pub mod fixtures;

use axum_test::TestServer;
use std::sync::Arc;
use vidkeep_api::setup::routes;
use vidkeep_api::state::AppState;
use vidkeep_core::Config;
use vidkeep_db::VideoRepository;

/// Test application: server plus a handle on the store behind it.
pub struct TestApp {
    pub server: TestServer,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn videos(&self) -> &VideoRepository {
        &self.state.videos
    }
}

/// Config used by tests: empty store, testing routes mounted.
pub fn create_test_config() -> Config {
    Config {
        seed_sample_video: false,
        ..Config::default()
    }
}

/// Setup a test app with a fresh, empty store.
pub fn setup_test_app() -> TestApp {
    setup_test_app_with_config(create_test_config())
}

pub fn setup_test_app_with_config(config: Config) -> TestApp {
    let state = AppState::new(config.clone(), VideoRepository::new());
    let app = routes::setup_routes(&config, state.clone()).expect("Failed to build router");
    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");
    TestApp { server, state }
}
