use anyhow::Result;

fn main() -> Result<()> {
    // Initialize core (tracing goes to stderr; the TUI owns stdout)
    taskdeck_core::init()?;

    let config = taskdeck_core::Config::from_env()?;
    tracing::info!("taskdeck starting against {}", config.api_base_url);

    // The UI loop owns this thread; client calls run on the runtime's
    // workers and report back over a channel.
    let runtime = tokio::runtime::Runtime::new()?;
    taskdeck_ui::run(config, runtime.handle().clone())?;

    Ok(())
}
