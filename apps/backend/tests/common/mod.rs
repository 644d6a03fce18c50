//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for building the router over a catalog
//! - Helper functions for creating test content

#![allow(dead_code)]

pub mod fixtures;

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use study_core::{DroppedBlockPolicy, ParseOptions};

use study_companion_backend::services::catalog::Catalog;
use study_companion_backend::{router, AppState};

/// Test context holding the router under test.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Context over the bundled sample catalog.
    pub fn new() -> Self {
        let catalog = Catalog::sample().expect("sample catalog should load");
        Self::with_catalog(catalog, ParseOptions::default())
    }

    /// Context over a catalog loaded from `dir`.
    pub async fn from_dir(dir: &Path) -> Self {
        let catalog = Catalog::load_dir(dir)
            .await
            .expect("content directory should load");
        Self::with_catalog(catalog, ParseOptions::default())
    }

    /// Context using the `unparsed` placeholder for dropped blocks.
    pub fn with_unparsed_placeholders() -> Self {
        let catalog = Catalog::sample().expect("sample catalog should load");
        Self::with_catalog(
            catalog,
            ParseOptions {
                dropped_block: DroppedBlockPolicy::Unparsed,
            },
        )
    }

    fn with_catalog(catalog: Catalog, parse_options: ParseOptions) -> Self {
        let state = AppState {
            catalog: Arc::new(catalog),
            parse_options,
        };
        Self {
            app: router(state),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start a test server over the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("test server should start")
    }
}
