use anyhow::Result;
use flexi_logger::Logger;

pub fn configure_logging() -> Result<()> {
    Logger::try_with_env_or_str("info")?.log_to_stdout().start()?;
    Ok(())
}
