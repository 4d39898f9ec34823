use crate::cli::commands::open_admin;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_lenient;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let session = open_admin(cfg)?;
        ExportLogic::export(session.guests().all(), *format, file, *force)?;
        ttlog_lenient(
            &session.store().conn,
            "export",
            file,
            &format!("{} export", format.as_str()),
        );
    }
    Ok(())
}
