use walletlink_config::ConnectConfig;
use walletlink_protocol::{Network, WalletSource};

/// The network and wallet source currently picked in the dialog.
///
/// Setters accept any member of the closed enums and never fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    network: Network,
    source: WalletSource,
}

/// One entry of a selection widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice<T> {
    pub value: T,
    pub label: &'static str,
    pub selected: bool,
}

impl SelectionState {
    pub fn new(network: Network, source: WalletSource) -> Self {
        Self { network, source }
    }

    /// Selection preset from `[connect]` defaults.
    pub fn from_config(config: &ConnectConfig) -> Self {
        Self::new(config.default_network(), config.default_source())
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn source(&self) -> WalletSource {
        self.source
    }

    pub fn set_network(&mut self, network: Network) {
        self.network = network;
    }

    pub fn set_source(&mut self, source: WalletSource) {
        self.source = source;
    }

    /// Restore both choices from `defaults`.
    pub fn reset(&mut self, defaults: SelectionState) {
        *self = defaults;
    }

    /// Options for the network dropdown.
    pub fn network_options(&self) -> Vec<Choice<Network>> {
        Network::ALL
            .into_iter()
            .map(|n| Choice {
                value: n,
                label: n.label(),
                selected: n == self.network,
            })
            .collect()
    }

    /// Options for the wallet source radio group.
    pub fn source_options(&self) -> Vec<Choice<WalletSource>> {
        WalletSource::ALL
            .into_iter()
            .map(|s| Choice {
                value: s,
                label: s.label(),
                selected: s == self.source,
            })
            .collect()
    }
}
