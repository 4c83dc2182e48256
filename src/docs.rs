//! # API Documentation
//!
//! The OpenAPI document is assembled at startup from two sources:
//! - the base definition below (title, description, version)
//! - every `*.yaml` annotation file found under `DOCS_DIR`, recursively
//!
//! Each YAML file is a fragment that may hold `paths`, `components` and
//! `tags`. Fragments are merged in sorted path order, so the result does not
//! depend on directory iteration order.
//!
//! ## Example fragment
//! ```yaml
//! paths:
//!   /api/products:
//!     get:
//!       summary: List products
//!       tags: [Products]
//!       responses:
//!         "200":
//!           description: Product page
//! ```

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use utoipa::openapi::{path::Paths, tag::Tag, Components, OpenApiBuilder};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Path serving the Swagger UI
pub const DOCS_UI_PATH: &str = "/apidocs";

/// Path serving the raw OpenAPI JSON document
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(info(
    title = "E-commerce API Documentation",
    description = "E-commerce API documentation",
    version = "1.0.0"
))]
pub struct ApiDoc;

#[derive(Error, Debug)]
pub enum DocsError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid OpenAPI fragment in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// One annotation file; every section is optional
#[derive(Default, Deserialize)]
struct Fragment {
    #[serde(default)]
    paths: Option<Paths>,
    #[serde(default)]
    components: Option<Components>,
    #[serde(default)]
    tags: Option<Vec<Tag>>,
}

impl Fragment {
    fn into_openapi(self) -> utoipa::openapi::OpenApi {
        OpenApiBuilder::new()
            .paths(self.paths.unwrap_or_default())
            .components(self.components)
            .tags(self.tags)
            .build()
    }
}

/// Build the OpenAPI document from the base definition and `docs_dir`
///
/// A missing directory is not an error: the base definition is served and a
/// warning is logged. Unreadable or malformed files are.
pub fn build_openapi(docs_dir: &Path) -> Result<utoipa::openapi::OpenApi, DocsError> {
    let mut openapi = ApiDoc::openapi();

    if !docs_dir.is_dir() {
        tracing::warn!(
            docs_dir = %docs_dir.display(),
            "API docs directory not found, serving the base definition only"
        );
        return Ok(openapi);
    }

    let files = collect_yaml_files(docs_dir)?;
    for path in &files {
        let contents = fs::read_to_string(path).map_err(|source| DocsError::Io {
            path: path.clone(),
            source,
        })?;
        if contents.trim().is_empty() {
            continue;
        }
        let fragment: Fragment =
            serde_yaml::from_str(&contents).map_err(|source| DocsError::Parse {
                path: path.clone(),
                source,
            })?;
        openapi.merge(fragment.into_openapi());
    }

    tracing::info!(
        docs_dir = %docs_dir.display(),
        files = files.len(),
        "API documentation loaded"
    );
    Ok(openapi)
}

/// All `*.yaml` files under `dir`, recursively, sorted by path
fn collect_yaml_files(dir: &Path) -> Result<Vec<PathBuf>, DocsError> {
    let mut found = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        let entries = fs::read_dir(&current).map_err(|source| DocsError::Io {
            path: current.clone(),
            source,
        })?;
        for entry in entries {
            let path = entry
                .map_err(|source| DocsError::Io {
                    path: current.clone(),
                    source,
                })?
                .path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "yaml") {
                found.push(path);
            }
        }
    }

    found.sort();
    Ok(found)
}

/// Swagger UI mounted at `/apidocs`, serving `openapi`
pub fn swagger_ui(openapi: utoipa::openapi::OpenApi) -> SwaggerUi {
    SwaggerUi::new(DOCS_UI_PATH).url(OPENAPI_JSON_PATH, openapi)
}
