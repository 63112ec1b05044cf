//! Relinks the canonical five-node chain and prints the result.
//!
//! Run with:
//!   NEXUS_LOG=trace cargo run -p nexus-chain --bin relink_fixture

use nexus_chain::{chain, fixture, relink, Buffer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing from the `NEXUS_LOG` environment variable.
///
/// Defaults to "info" if `NEXUS_LOG` is not set.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("NEXUS_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let (mut storage, head) = fixture::five_node_chain()?;
    let mut buffer = Buffer::with_capacity(fixture::FIVE_NAMES.len());

    for (idx, node) in chain::iter(&storage, head) {
        info!(index = idx, name = node.name(), "before");
    }

    let head = relink(&mut storage, &mut buffer, head, fixture::FIVE_NAMES.len())?;

    let mut names = Vec::with_capacity(buffer.len());
    for (idx, node) in chain::iter(&storage, head) {
        info!(index = idx, name = node.name(), "after");
        names.push(node.name());
    }

    let first = names.first().copied().unwrap_or("<none>");
    println!("result: {first}");
    println!("{}", names.join(" -> "));

    Ok(())
}
