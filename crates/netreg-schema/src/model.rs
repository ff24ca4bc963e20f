//! Typed model of a networks registry document.
//!
//! Field names follow the registry's JSON (camelCase). Optional fields are
//! omitted on output when absent.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The complete registry document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworksRegistry {
    /// Reference to the JSON Schema this document follows.
    #[serde(rename = "$schema")]
    pub schema: String,
    pub description: String,
    pub networks: Vec<Network>,
    pub title: String,
    /// Date and time of the last update.
    pub updated_at: DateTime<Utc>,
    /// Version of the registry.
    pub version: String,
}

impl NetworksRegistry {
    /// Find a network by id, falling back to the first network listing `key`
    /// as an alias.
    pub fn network(&self, key: &str) -> Option<&Network> {
        self.networks
            .iter()
            .find(|network| network.id == key)
            .or_else(|| self.networks.iter().find(|network| network.has_alias(key)))
    }
}

/// One blockchain network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    /// Established name of the network in The Graph ecosystem, e.g. `mainnet`.
    pub id: String,
    /// CAIP-2 chain id, e.g. `eip155:1`.
    pub caip2_id: String,
    /// Display name, e.g. `Ethereum Mainnet`.
    pub full_name: String,
    /// Short display name, e.g. `Ethereum`.
    pub short_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_name: Option<String>,
    pub network_type: NetworkType,
    pub services: Services,
    /// Issuance rewards on the Graph Network for this chain.
    pub issuance_rewards: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_urls: Option<Vec<ApiUrl>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explorer_urls: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firehose: Option<Firehose>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genesis: Option<Genesis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph_node: Option<GraphNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexer_docs_urls: Option<Vec<IndexerDocsUrl>>,
    /// Symbol of the native token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relations: Option<Vec<Relation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpc_urls: Option<Vec<String>>,
}

impl Network {
    pub fn is_testnet(&self) -> bool {
        self.network_type == NetworkType::Testnet
    }

    /// True when the network lists at least one endpoint for `kind`.
    pub fn supports(&self, kind: ServiceKind) -> bool {
        self.services.supports(kind)
    }

    pub fn aliases(&self) -> &[String] {
        self.aliases.as_deref().unwrap_or(&[])
    }

    pub fn relations(&self) -> &[Relation] {
        self.relations.as_deref().unwrap_or(&[])
    }

    fn has_alias(&self, alias: &str) -> bool {
        self.aliases().iter().any(|candidate| candidate == alias)
    }
}

/// Whether the network is a mainnet, testnet or devnet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    #[default]
    Mainnet,
    Testnet,
    Devnet,
}

impl NetworkType {
    pub fn as_str(self) -> &'static str {
        match self {
            NetworkType::Mainnet => "mainnet",
            NetworkType::Testnet => "testnet",
            NetworkType::Devnet => "devnet",
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed set of indexing services a network may offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ServiceKind {
    Subgraphs,
    Sps,
    Firehose,
    Substreams,
}

impl ServiceKind {
    /// All services, in display and counting order.
    pub const ALL: [ServiceKind; 4] = [
        ServiceKind::Subgraphs,
        ServiceKind::Sps,
        ServiceKind::Firehose,
        ServiceKind::Substreams,
    ];

    /// Key of the service inside the `services` object.
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceKind::Subgraphs => "subgraphs",
            ServiceKind::Sps => "sps",
            ServiceKind::Firehose => "firehose",
            ServiceKind::Substreams => "substreams",
        }
    }

    /// Human-facing label.
    pub fn label(self) -> &'static str {
        match self {
            ServiceKind::Subgraphs => "Subgraphs",
            ServiceKind::Sps => "SPS",
            ServiceKind::Firehose => "Firehose",
            ServiceKind::Substreams => "Substreams",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown service: {s}"))
    }
}

/// Services available for the network, keyed by service.
///
/// An absent list and an empty list both mean the service is unsupported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Services {
    /// Subgraph studio deployment URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subgraphs: Option<Vec<String>>,
    /// Substreams-based subgraph deployment URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sps: Option<Vec<String>>,
    /// Firehose gRPC endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firehose: Option<Vec<String>>,
    /// Substreams gRPC endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substreams: Option<Vec<String>>,
}

impl Services {
    /// Endpoints listed for `kind`; empty when the entry is absent.
    pub fn endpoints(&self, kind: ServiceKind) -> &[String] {
        let entry = match kind {
            ServiceKind::Subgraphs => &self.subgraphs,
            ServiceKind::Sps => &self.sps,
            ServiceKind::Firehose => &self.firehose,
            ServiceKind::Substreams => &self.substreams,
        };
        entry.as_deref().unwrap_or(&[])
    }

    pub fn supports(&self, kind: ServiceKind) -> bool {
        !self.endpoints(kind).is_empty()
    }

    /// Number of services with at least one endpoint.
    pub fn supported_count(&self) -> usize {
        ServiceKind::ALL
            .into_iter()
            .filter(|kind| self.supports(*kind))
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiUrl {
    pub kind: ApiUrlKind,
    /// `{CUSTOM_API_KEY}` marks where a private key goes.
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiUrlKind {
    Blockscout,
    Etherscan,
    Ethplorer,
    Subscan,
    Other,
}

/// Firehose block information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Firehose {
    /// Block type, e.g. `sf.ethereum.type.v2.Block`.
    pub block_type: String,
    /// Protobuf definitions on buf.build.
    pub buf_url: String,
    pub bytes_encoding: BytesEncoding,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evm_extended_model: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BytesEncoding {
    #[serde(rename = "hex")]
    Hex,
    #[serde(rename = "0xhex")]
    PrefixedHex,
    #[serde(rename = "base58")]
    Base58,
    #[serde(rename = "base64")]
    Base64,
    #[serde(rename = "other")]
    Other,
}

/// Genesis block information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genesis {
    /// 0x-prefixed hex or base58 hash.
    pub hash: String,
    /// Height of the genesis or first available block, kept as written
    /// (`0` stays an integer, `1e6` stays a float).
    pub height: serde_json::Number,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Protocol>,
}

/// Protocol name in graph-node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Ethereum,
    Near,
    Arweave,
    Cosmos,
    Starknet,
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Icon {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web3_icons: Option<Web3Icons>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Web3Icons {
    pub name: String,
    /// Available variants; none listed means all are available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexerDocsUrl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
}

/// Typed edge to another network in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    pub kind: RelationKind,
    /// Id of the related network.
    pub network: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationKind {
    BeaconOf,
    EvmOf,
    ForkedFrom,
    L2Of,
    ShardOf,
    TestnetOf,
    Other,
}

impl RelationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RelationKind::BeaconOf => "beaconOf",
            RelationKind::EvmOf => "evmOf",
            RelationKind::ForkedFrom => "forkedFrom",
            RelationKind::L2Of => "l2Of",
            RelationKind::ShardOf => "shardOf",
            RelationKind::TestnetOf => "testnetOf",
            RelationKind::Other => "other",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
