use env_logger::{Builder, Env};

/// Engine crates raised to `debug` by `--verbose`.  Dependencies stay at
/// `warn` so their chatter doesn't drown the per-edit lines.
const ENGINE_TARGETS: [&str; 6] = ["ant_core", "ant_grid", "ant_agent", "ant_sim", "ant_output", "headless"];

/// Default filter when `RUST_LOG` is unset.
fn fallback_filter(verbose: bool) -> String {
    if !verbose {
        return "info".to_owned();
    }
    let mut filter = String::from("warn");
    for target in ENGINE_TARGETS {
        filter.push(',');
        filter.push_str(target);
        filter.push_str("=debug");
    }
    filter
}

/// Install the global logger.  `RUST_LOG` overrides `--verbose`.
pub fn init(verbose: bool) {
    // A second call keeps whichever logger went in first.
    Builder::from_env(Env::default().default_filter_or(fallback_filter(verbose)))
        .format_timestamp_millis()
        .try_init()
        .ok();
}
