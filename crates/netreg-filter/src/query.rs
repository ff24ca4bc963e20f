use netreg_schema::{Network, ServiceKind};

/// One on/off toggle per service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceFilters {
    pub subgraphs: bool,
    pub sps: bool,
    pub firehose: bool,
    pub substreams: bool,
}

impl ServiceFilters {
    /// Filters with every toggle in `kinds` switched on.
    pub fn requiring(kinds: impl IntoIterator<Item = ServiceKind>) -> Self {
        let mut filters = Self::default();
        for kind in kinds {
            filters.set(kind, true);
        }
        filters
    }

    pub fn get(&self, kind: ServiceKind) -> bool {
        match kind {
            ServiceKind::Subgraphs => self.subgraphs,
            ServiceKind::Sps => self.sps,
            ServiceKind::Firehose => self.firehose,
            ServiceKind::Substreams => self.substreams,
        }
    }

    pub fn set(&mut self, kind: ServiceKind, on: bool) {
        let slot = match kind {
            ServiceKind::Subgraphs => &mut self.subgraphs,
            ServiceKind::Sps => &mut self.sps,
            ServiceKind::Firehose => &mut self.firehose,
            ServiceKind::Substreams => &mut self.substreams,
        };
        *slot = on;
    }

    /// Services whose toggle is on.
    pub fn active(&self) -> impl Iterator<Item = ServiceKind> + '_ {
        ServiceKind::ALL.into_iter().filter(|kind| self.get(*kind))
    }

    pub fn any_active(&self) -> bool {
        self.active().next().is_some()
    }

    /// True when `network` lists endpoints for every active service.
    pub fn accepts(&self, network: &Network) -> bool {
        self.active().all(|kind| network.supports(kind))
    }
}

/// Search text, testnet visibility and service toggles, applied together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkQuery {
    /// Case-insensitive substring matched against full name, short name and id.
    pub search: String,
    pub show_testnets: bool,
    pub services: ServiceFilters,
}

impl NetworkQuery {
    pub fn new(search: impl Into<String>, show_testnets: bool, services: ServiceFilters) -> Self {
        Self {
            search: search.into(),
            show_testnets,
            services,
        }
    }

    /// True when `network` passes every predicate.
    pub fn matches(&self, network: &Network) -> bool {
        let search = self.search.to_lowercase();
        matches_search(network, &search)
            && (self.show_testnets || !network.is_testnet())
            && self.services.accepts(network)
    }

    /// Filtered and sorted view of `networks`.
    pub fn apply<'a>(&self, networks: &'a [Network]) -> Vec<&'a Network> {
        crate::select::select(networks, &self.search, self.show_testnets, &self.services)
    }
}

/// `search` must already be lower-cased; an empty search matches everything.
pub(crate) fn matches_search(network: &Network, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    [&network.full_name, &network.short_name, &network.id]
        .iter()
        .any(|field| field.to_lowercase().contains(search))
}
