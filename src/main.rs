use dotnet_dev::DotnetDev;

#[cfg(feature = "tracing_debug")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    // Standard output carries the value for the shell, so diagnostics go to standard error.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() {
    #[cfg(feature = "tracing_debug")]
    {
        init_tracing();
        tracing::debug!("Starting dotnet-dev.");
    }

    DotnetDev::process("dotnet-dev").run_process();
}
