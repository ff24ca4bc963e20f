use netreg_schema::{Network, NetworksRegistry, ServiceKind};
use tracing::debug;

use crate::query::NetworkQuery;

/// What a toggle control switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleTarget {
    Testnets,
    Service(ServiceKind),
}

impl ToggleTarget {
    /// All toggles in the order they are presented.
    pub const ALL: [ToggleTarget; 5] = [
        ToggleTarget::Testnets,
        ToggleTarget::Service(ServiceKind::Subgraphs),
        ToggleTarget::Service(ServiceKind::Sps),
        ToggleTarget::Service(ServiceKind::Firehose),
        ToggleTarget::Service(ServiceKind::Substreams),
    ];

    /// Stable control id, e.g. `testnet-toggle`.
    pub fn id(self) -> &'static str {
        match self {
            ToggleTarget::Testnets => "testnet-toggle",
            ToggleTarget::Service(ServiceKind::Subgraphs) => "subgraphs-toggle",
            ToggleTarget::Service(ServiceKind::Sps) => "sps-toggle",
            ToggleTarget::Service(ServiceKind::Firehose) => "firehose-toggle",
            ToggleTarget::Service(ServiceKind::Substreams) => "substreams-toggle",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ToggleTarget::Testnets => "Testnets",
            ToggleTarget::Service(kind) => kind.label(),
        }
    }
}

/// A toggle control and its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleControl {
    pub target: ToggleTarget,
    pub id: &'static str,
    pub label: &'static str,
    pub checked: bool,
}

/// Transient state of a networks listing.
///
/// Defaults to an empty search, testnets hidden, no service toggles and no
/// selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub query: NetworkQuery,
    /// Id of the network shown in detail, if any.
    pub selected: Option<String>,
}

/// A network list together with the state that controls how it is shown.
#[derive(Debug, Clone, Default)]
pub struct NetworksView {
    networks: Vec<Network>,
    state: ViewState,
}

impl NetworksView {
    pub fn new(networks: Vec<Network>) -> Self {
        Self::with_state(networks, ViewState::default())
    }

    pub fn with_state(networks: Vec<Network>, state: ViewState) -> Self {
        Self { networks, state }
    }

    pub fn from_registry(registry: NetworksRegistry) -> Self {
        Self::new(registry.networks)
    }

    pub fn networks(&self) -> &[Network] {
        &self.networks
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn query(&self) -> &NetworkQuery {
        &self.state.query
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.state.query.search = search.into();
    }

    pub fn set_show_testnets(&mut self, show: bool) {
        self.state.query.show_testnets = show;
    }

    pub fn set_service_filter(&mut self, kind: ServiceKind, on: bool) {
        self.state.query.services.set(kind, on);
    }

    pub fn set_toggle(&mut self, target: ToggleTarget, checked: bool) {
        match target {
            ToggleTarget::Testnets => self.set_show_testnets(checked),
            ToggleTarget::Service(kind) => self.set_service_filter(kind, checked),
        }
    }

    /// Current state of every toggle control.
    pub fn toggles(&self) -> Vec<ToggleControl> {
        let query = &self.state.query;
        ToggleTarget::ALL
            .into_iter()
            .map(|target| ToggleControl {
                target,
                id: target.id(),
                label: target.label(),
                checked: match target {
                    ToggleTarget::Testnets => query.show_testnets,
                    ToggleTarget::Service(kind) => query.services.get(kind),
                },
            })
            .collect()
    }

    /// Networks to display under the current state, in display order.
    pub fn visible(&self) -> Vec<&Network> {
        self.state.query.apply(&self.networks)
    }

    /// Select the network with `id` for detail display.
    ///
    /// Selection is independent of the filters: a network stays selected
    /// even when the current query hides it. Returns `None`, leaving the
    /// previous selection unchanged, when no network has that id.
    pub fn select_network(&mut self, id: &str) -> Option<&Network> {
        let index = self.networks.iter().position(|n| n.id == id)?;
        debug!(network = id, "network selected");
        self.state.selected = Some(id.to_string());
        self.networks.get(index)
    }

    pub fn selected(&self) -> Option<&Network> {
        let id = self.state.selected.as_deref()?;
        self.networks.iter().find(|n| n.id == id)
    }

    pub fn clear_selection(&mut self) {
        self.state.selected = None;
    }
}
