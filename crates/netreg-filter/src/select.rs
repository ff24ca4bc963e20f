use std::cmp::Reverse;

use netreg_schema::Network;
use tracing::debug;

use crate::query::{matches_search, ServiceFilters};

/// Filter `networks` for display and order them by service coverage.
///
/// A network is kept when it matches `search` (case-insensitive substring of
/// full name, short name or id; empty matches all), is not a testnet unless
/// `show_testnets` is set, and lists endpoints for every service switched on
/// in `filters`. The result is sorted by [`supported_service_count`],
/// highest first; the sort is stable, so networks with equal counts keep
/// their input order. The input slice is not modified.
pub fn select<'a>(
    networks: &'a [Network],
    search: &str,
    show_testnets: bool,
    filters: &ServiceFilters,
) -> Vec<&'a Network> {
    let search = search.to_lowercase();

    let mut selected: Vec<&Network> = networks
        .iter()
        .filter(|network| matches_search(network, &search))
        .filter(|network| show_testnets || !network.is_testnet())
        .filter(|network| filters.accepts(network))
        .collect();
    selected.sort_by_key(|network| Reverse(supported_service_count(network)));

    debug!(
        total = networks.len(),
        selected = selected.len(),
        search = %search,
        show_testnets,
        "selected networks"
    );
    selected
}

/// Number of services (out of subgraphs, sps, firehose, substreams) with at
/// least one endpoint.
pub fn supported_service_count(network: &Network) -> usize {
    network.services.supported_count()
}
