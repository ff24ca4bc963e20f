//! Typed model and shape validation for the networks registry.
//!
//! A registry document describes blockchain networks, the indexing services
//! each supports and related URLs. JSON text is checked against a declarative
//! shape table before it becomes a [`NetworksRegistry`]; every mismatch names
//! the path of the offending value.
//!
//! ```no_run
//! let registry = netreg_schema::load_registry(std::path::Path::new("registry.json"))?;
//! let json = netreg_schema::registry_to_json(&registry)?;
//! # Ok::<(), netreg_schema::SchemaError>(())
//! ```

pub mod config;
pub mod convert;
pub mod descriptor;
pub mod error;
pub mod integrity;
#[cfg(feature = "json-schema")]
pub mod json_schema;
pub mod load;
pub mod model;
pub mod shape;

pub use config::LoadConfig;
pub use convert::{
    parse_registry, parse_registry_slice, registry_from_value, registry_to_json, registry_to_value,
};
pub use error::{PathSegment, Result, SchemaError, ShapeError, ShapeErrorKind};
#[cfg(feature = "json-schema")]
pub use json_schema::{JsonSchemaCheck, SchemaCheckConfig};
pub use load::{load_registry, load_registry_with_config, read_document};
pub use model::{
    ApiUrl, ApiUrlKind, BytesEncoding, Firehose, Genesis, GraphNode, Icon, IndexerDocsUrl,
    Network, NetworkType, NetworksRegistry, Protocol, Relation, RelationKind, ServiceKind,
    Services, Web3Icons,
};
