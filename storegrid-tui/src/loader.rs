//! One-shot catalog loader.

use storegrid_lib::CatalogClient;
use storegrid_lib::error::ApiError;
use storegrid_lib::model::Product;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Spawns the single catalog fetch for this run and returns the channel the
/// result arrives on.
///
/// Failures degrade silently to an empty catalog; the error only goes to the
/// log. If the token fires first (app teardown), nothing is delivered at
/// all: the result is discarded rather than applied to dead state.
pub fn spawn_fetch(
    client: CatalogClient,
    cancel: CancellationToken,
) -> mpsc::Receiver<Vec<Product>> {
    let (tx, rx) = mpsc::channel(1);

    tokio::spawn(async move {
        let products = match client.products_with_cancel(cancel.clone()).await {
            Ok(products) => {
                log::info!("catalog loaded: {} products", products.len());
                products
            }
            Err(ApiError::Cancelled) => return,
            Err(e) => {
                log::warn!("catalog fetch failed: {e}");
                Vec::new()
            }
        };

        // The token may have fired while the response was in flight.
        if cancel.is_cancelled() {
            return;
        }
        let _ = tx.send(products).await;
    });

    rx
}
