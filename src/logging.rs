use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogFormat;

const DEFAULT_DIRECTIVES: &str = "snp_lens=info,tower_http=info";
const VERBOSE_DIRECTIVES: &str = "snp_lens=debug,tower_http=debug";

/// Install the global tracing subscriber. Logs go to stderr so stdout stays
/// clean for command output. `RUST_LOG` overrides the default directives.
pub fn init_tracing(verbose: bool, format: LogFormat) {
    let directives = if verbose {
        VERBOSE_DIRECTIVES
    } else {
        DEFAULT_DIRECTIVES
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| directives.into());

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}
