//! Declarative shape table for the registry document.
//!
//! Each JSON value is described by one of four descriptor kinds: a
//! primitive, a closed set of string literals, an object with a fixed set of
//! fields, or an array of a nested descriptor. Objects are closed: a key not
//! listed in `fields` is a shape error.

/// Shape of a single JSON value.
#[derive(Debug, Clone, Copy)]
pub enum TypeDescriptor {
    Primitive(Primitive),
    Literal(&'static LiteralSet),
    Object(&'static ObjectDescriptor),
    Array(&'static TypeDescriptor),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    String,
    Number,
    Boolean,
    /// RFC 3339 date-time string.
    DateTime,
}

impl Primitive {
    pub fn name(self) -> &'static str {
        match self {
            Primitive::String => "string",
            Primitive::Number => "number",
            Primitive::Boolean => "boolean",
            Primitive::DateTime => "date-time string",
        }
    }
}

/// Named set of accepted string literals.
#[derive(Debug)]
pub struct LiteralSet {
    pub name: &'static str,
    pub values: &'static [&'static str],
}

impl LiteralSet {
    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(&value)
    }
}

#[derive(Debug)]
pub struct ObjectDescriptor {
    pub name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl ObjectDescriptor {
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }
}

#[derive(Debug)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub ty: &'static TypeDescriptor,
    pub required: bool,
}

impl FieldDescriptor {
    pub const fn required(name: &'static str, ty: &'static TypeDescriptor) -> Self {
        Self {
            name,
            ty,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, ty: &'static TypeDescriptor) -> Self {
        Self {
            name,
            ty,
            required: false,
        }
    }
}

static STRING: TypeDescriptor = TypeDescriptor::Primitive(Primitive::String);
static NUMBER: TypeDescriptor = TypeDescriptor::Primitive(Primitive::Number);
static BOOLEAN: TypeDescriptor = TypeDescriptor::Primitive(Primitive::Boolean);
static DATE_TIME: TypeDescriptor = TypeDescriptor::Primitive(Primitive::DateTime);
static STRING_LIST: TypeDescriptor = TypeDescriptor::Array(&STRING);

// Literal sets

pub static NETWORK_TYPE: LiteralSet = LiteralSet {
    name: "NetworkType",
    values: &["mainnet", "testnet", "devnet"],
};

pub static API_URL_KIND: LiteralSet = LiteralSet {
    name: "ApiUrlKind",
    values: &["blockscout", "etherscan", "ethplorer", "subscan", "other"],
};

pub static BYTES_ENCODING: LiteralSet = LiteralSet {
    name: "BytesEncoding",
    values: &["hex", "0xhex", "base58", "base64", "other"],
};

pub static PROTOCOL: LiteralSet = LiteralSet {
    name: "Protocol",
    values: &["ethereum", "near", "arweave", "cosmos", "starknet", "other"],
};

pub static RELATION_KIND: LiteralSet = LiteralSet {
    name: "RelationKind",
    values: &[
        "beaconOf",
        "evmOf",
        "forkedFrom",
        "l2Of",
        "shardOf",
        "testnetOf",
        "other",
    ],
};

static NETWORK_TYPE_TY: TypeDescriptor = TypeDescriptor::Literal(&NETWORK_TYPE);
static API_URL_KIND_TY: TypeDescriptor = TypeDescriptor::Literal(&API_URL_KIND);
static BYTES_ENCODING_TY: TypeDescriptor = TypeDescriptor::Literal(&BYTES_ENCODING);
static PROTOCOL_TY: TypeDescriptor = TypeDescriptor::Literal(&PROTOCOL);
static RELATION_KIND_TY: TypeDescriptor = TypeDescriptor::Literal(&RELATION_KIND);

// Objects

pub static SERVICES: ObjectDescriptor = ObjectDescriptor {
    name: "Services",
    fields: &[
        FieldDescriptor::optional("firehose", &STRING_LIST),
        FieldDescriptor::optional("sps", &STRING_LIST),
        FieldDescriptor::optional("subgraphs", &STRING_LIST),
        FieldDescriptor::optional("substreams", &STRING_LIST),
    ],
};

pub static API_URL: ObjectDescriptor = ObjectDescriptor {
    name: "ApiUrl",
    fields: &[
        FieldDescriptor::required("kind", &API_URL_KIND_TY),
        FieldDescriptor::required("url", &STRING),
    ],
};

pub static FIREHOSE: ObjectDescriptor = ObjectDescriptor {
    name: "Firehose",
    fields: &[
        FieldDescriptor::required("blockType", &STRING),
        FieldDescriptor::required("bufUrl", &STRING),
        FieldDescriptor::required("bytesEncoding", &BYTES_ENCODING_TY),
        FieldDescriptor::optional("evmExtendedModel", &BOOLEAN),
    ],
};

pub static GENESIS: ObjectDescriptor = ObjectDescriptor {
    name: "Genesis",
    fields: &[
        FieldDescriptor::required("hash", &STRING),
        FieldDescriptor::required("height", &NUMBER),
    ],
};

pub static GRAPH_NODE: ObjectDescriptor = ObjectDescriptor {
    name: "GraphNode",
    fields: &[FieldDescriptor::optional("protocol", &PROTOCOL_TY)],
};

pub static WEB3_ICONS: ObjectDescriptor = ObjectDescriptor {
    name: "Web3Icons",
    fields: &[
        FieldDescriptor::required("name", &STRING),
        FieldDescriptor::optional("variants", &STRING_LIST),
    ],
};

pub static ICON: ObjectDescriptor = ObjectDescriptor {
    name: "Icon",
    fields: &[FieldDescriptor::optional("web3Icons", &WEB3_ICONS_TY)],
};

pub static INDEXER_DOCS_URL: ObjectDescriptor = ObjectDescriptor {
    name: "IndexerDocsUrl",
    fields: &[
        FieldDescriptor::optional("description", &STRING),
        FieldDescriptor::required("url", &STRING),
    ],
};

pub static RELATION: ObjectDescriptor = ObjectDescriptor {
    name: "Relation",
    fields: &[
        FieldDescriptor::required("kind", &RELATION_KIND_TY),
        FieldDescriptor::required("network", &STRING),
    ],
};

pub static NETWORK: ObjectDescriptor = ObjectDescriptor {
    name: "Network",
    fields: &[
        FieldDescriptor::optional("aliases", &STRING_LIST),
        FieldDescriptor::optional("apiUrls", &API_URL_LIST),
        FieldDescriptor::required("caip2Id", &STRING),
        FieldDescriptor::optional("docsUrl", &STRING),
        FieldDescriptor::optional("explorerUrls", &STRING_LIST),
        FieldDescriptor::optional("firehose", &FIREHOSE_TY),
        FieldDescriptor::required("fullName", &STRING),
        FieldDescriptor::optional("genesis", &GENESIS_TY),
        FieldDescriptor::optional("graphNode", &GRAPH_NODE_TY),
        FieldDescriptor::optional("icon", &ICON_TY),
        FieldDescriptor::required("id", &STRING),
        FieldDescriptor::optional("indexerDocsUrls", &INDEXER_DOCS_URL_LIST),
        FieldDescriptor::required("issuanceRewards", &BOOLEAN),
        FieldDescriptor::optional("nativeToken", &STRING),
        FieldDescriptor::required("networkType", &NETWORK_TYPE_TY),
        FieldDescriptor::optional("relations", &RELATION_LIST),
        FieldDescriptor::optional("rpcUrls", &STRING_LIST),
        FieldDescriptor::optional("secondName", &STRING),
        FieldDescriptor::required("services", &SERVICES_TY),
        FieldDescriptor::required("shortName", &STRING),
    ],
};

pub static REGISTRY: ObjectDescriptor = ObjectDescriptor {
    name: "NetworksRegistry",
    fields: &[
        FieldDescriptor::required("$schema", &STRING),
        FieldDescriptor::required("description", &STRING),
        FieldDescriptor::required("networks", &NETWORK_LIST),
        FieldDescriptor::required("title", &STRING),
        FieldDescriptor::required("updatedAt", &DATE_TIME),
        FieldDescriptor::required("version", &STRING),
    ],
};

static SERVICES_TY: TypeDescriptor = TypeDescriptor::Object(&SERVICES);
static FIREHOSE_TY: TypeDescriptor = TypeDescriptor::Object(&FIREHOSE);
static GENESIS_TY: TypeDescriptor = TypeDescriptor::Object(&GENESIS);
static GRAPH_NODE_TY: TypeDescriptor = TypeDescriptor::Object(&GRAPH_NODE);
static ICON_TY: TypeDescriptor = TypeDescriptor::Object(&ICON);
static WEB3_ICONS_TY: TypeDescriptor = TypeDescriptor::Object(&WEB3_ICONS);
static API_URL_TY: TypeDescriptor = TypeDescriptor::Object(&API_URL);
static API_URL_LIST: TypeDescriptor = TypeDescriptor::Array(&API_URL_TY);
static INDEXER_DOCS_URL_TY: TypeDescriptor = TypeDescriptor::Object(&INDEXER_DOCS_URL);
static INDEXER_DOCS_URL_LIST: TypeDescriptor = TypeDescriptor::Array(&INDEXER_DOCS_URL_TY);
static RELATION_TY: TypeDescriptor = TypeDescriptor::Object(&RELATION);
static RELATION_LIST: TypeDescriptor = TypeDescriptor::Array(&RELATION_TY);
static NETWORK_TY: TypeDescriptor = TypeDescriptor::Object(&NETWORK);
static NETWORK_LIST: TypeDescriptor = TypeDescriptor::Array(&NETWORK_TY);

/// Descriptor of a complete registry document.
pub static REGISTRY_TY: TypeDescriptor = TypeDescriptor::Object(&REGISTRY);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_fields_are_unique() {
        for object in [&NETWORK, &REGISTRY, &SERVICES, &FIREHOSE] {
            for (i, field) in object.fields.iter().enumerate() {
                assert!(
                    object.fields[i + 1..].iter().all(|f| f.name != field.name),
                    "{} lists {} twice",
                    object.name,
                    field.name
                );
            }
        }
    }

    #[test]
    fn registry_requires_top_level_keys() {
        let required: Vec<&str> = REGISTRY
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect();
        assert_eq!(
            required,
            vec!["$schema", "description", "networks", "title", "updatedAt", "version"]
        );
    }

    #[test]
    fn every_service_is_described() {
        for kind in crate::model::ServiceKind::ALL {
            let field = SERVICES.field(kind.as_str()).expect("service field");
            assert!(!field.required);
        }
    }
}
