fn main() -> anyhow::Result<()> {
    let config = stockroom_cli::Config::from_env();
    stockroom_observability::init_with(config.log_format);
    config.warn_fallbacks();

    let stdout = std::io::stdout();
    stockroom_cli::run(&config, &mut stdout.lock())?;
    Ok(())
}
