use cfg_if::cfg_if;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        pub fn init() {
            // Log to browser console via tracing-wasm
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"));

            let wasm_layer = tracing_wasm::WASMLayer::new(tracing_wasm::WASMLayerConfig::default());

            tracing_subscriber::registry()
                .with(filter)
                .with(wasm_layer)
                .init();

            // Panics with stacktrace
            #[cfg(feature = "console_error_panic_hook")]
            console_error_panic_hook::set_once();
        }
    } else {
        use std::io;
        use tracing_subscriber::fmt;

        /// Native init exists for test binaries and local tooling only.
        pub fn init() {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"));

            let console_layer = fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .compact();

            tracing_subscriber::registry()
                .with(filter)
                .with(console_layer)
                .init();
        }
    }
}
