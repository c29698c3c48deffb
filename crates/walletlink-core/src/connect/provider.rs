use std::future::Future;

use futures::future::BoxFuture;
use walletlink_protocol::{Network, SessionCertificate, WalletSource};

/// Error returned by a wallet provider. Any shape is accepted.
pub type ProviderError = Box<dyn std::error::Error + Send + Sync>;

/// Asynchronous wallet handshake capability.
///
/// Implementations talk to the actual wallet (extension, mobile app, remote
/// signer). The returned future resolves once the user approved or rejected
/// the identification request.
pub trait WalletProvider: Send + Sync {
    fn connect(
        &self,
        source: WalletSource,
        network: Network,
    ) -> BoxFuture<'_, Result<SessionCertificate, ProviderError>>;
}

/// Provider backed by a closure returning a future.
pub struct FnProvider<F>(F);

/// Wrap a closure as a [`WalletProvider`].
pub fn provider_fn<F, Fut>(f: F) -> FnProvider<F>
where
    F: Fn(WalletSource, Network) -> Fut + Send + Sync,
    Fut: Future<Output = Result<SessionCertificate, ProviderError>> + Send + 'static,
{
    FnProvider(f)
}

impl<F, Fut> WalletProvider for FnProvider<F>
where
    F: Fn(WalletSource, Network) -> Fut + Send + Sync,
    Fut: Future<Output = Result<SessionCertificate, ProviderError>> + Send + 'static,
{
    fn connect(
        &self,
        source: WalletSource,
        network: Network,
    ) -> BoxFuture<'_, Result<SessionCertificate, ProviderError>> {
        Box::pin((self.0)(source, network))
    }
}
