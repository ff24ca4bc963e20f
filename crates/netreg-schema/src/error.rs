use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while loading, validating or emitting a registry.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The document does not match the registry shape.
    #[error("invalid registry document: {0}")]
    Shape(#[from] ShapeError),

    /// The input is not valid JSON.
    #[error("registry is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// A shape-valid value could not be converted into the typed model.
    #[error("failed to decode registry: {0}")]
    Decode(#[source] serde_json::Error),

    /// The typed model could not be converted into JSON.
    #[error("failed to encode registry: {0}")]
    Encode(#[source] serde_json::Error),

    /// Reading a file failed.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was rejected by the load policy.
    #[error("failed to load registry: {0}")]
    LoadFailed(String),

    /// A JSON Schema could not be compiled.
    #[error("failed to compile JSON Schema: {0}")]
    CompileFailed(String),

    /// The document failed JSON Schema validation.
    #[error("JSON Schema validation failed: {0}")]
    ValidationFailed(String),
}

pub type Result<T> = std::result::Result<T, SchemaError>;

/// A shape mismatch and where in the document it occurred.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}: {kind}", render_path(.path))]
pub struct ShapeError {
    /// Segments from the document root to the offending value.
    pub path: Vec<PathSegment>,
    pub kind: ShapeErrorKind,
}

impl ShapeError {
    pub fn new(kind: ShapeErrorKind) -> Self {
        Self {
            path: Vec::new(),
            kind,
        }
    }

    /// Prefix the path with an object field.
    pub fn in_field(mut self, name: impl Into<String>) -> Self {
        self.path.insert(0, PathSegment::Field(name.into()));
        self
    }

    /// Prefix the path with an array index.
    pub fn at_index(mut self, index: usize) -> Self {
        self.path.insert(0, PathSegment::Index(index));
        self
    }

    /// Rendered path, e.g. `$.networks[2].issuanceRewards`.
    pub fn path_string(&self) -> String {
        render_path(&self.path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, ".{name}"),
            PathSegment::Index(index) => write!(f, "[{index}]"),
        }
    }
}

fn render_path(path: &[PathSegment]) -> String {
    let mut out = String::from("$");
    for segment in path {
        out.push_str(&segment.to_string());
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeErrorKind {
    #[error("expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    #[error("expected one of {expected}, found {found}")]
    InvalidLiteral { expected: String, found: String },

    #[error("missing required field")]
    MissingField,

    #[error("unexpected field")]
    UnknownField,

    #[error("invalid date-time {0:?}")]
    InvalidDate(String),
}
