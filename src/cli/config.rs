//! Setup and configuration commands

use crate::config::{DebtPaths, Settings, Theme};
use crate::error::DebtResult;
use crate::storage::json_file_valid;

/// Write default settings unless a settings file already exists
pub fn handle_init_command(paths: &DebtPaths, settings: &Settings) -> DebtResult<()> {
    if paths.is_initialized() {
        println!(
            "Debt Machine is already initialized at: {}",
            paths.base_dir().display()
        );
        return Ok(());
    }

    println!("Initializing Debt Machine at: {}", paths.base_dir().display());
    settings.save(paths)?;
    println!("Wrote {}", paths.settings_file().display());
    println!();
    println!("Run 'debtm' to open the interactive interface.");
    Ok(())
}

/// Print paths and the effective settings
pub fn handle_config_command(paths: &DebtPaths, settings: &Settings) -> DebtResult<()> {
    let settings_file = paths.settings_file();
    let status = if !settings_file.exists() {
        "not created (defaults in use)"
    } else if json_file_valid(&settings_file) {
        "ok"
    } else {
        "invalid JSON"
    };

    println!("Debt Machine Configuration");
    println!("==========================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Settings file:  {} ({})", settings_file.display(), status);
    println!("Audit log:      {}", paths.audit_log().display());
    println!("Log file:       {}", paths.log_file().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:     {}", settings.currency_symbol);
    println!("  Date format:         {}", settings.date_format);
    println!("  Default person name: {}", settings.default_person_name);
    println!("  Loading delay:       {} ms", settings.loading_delay_ms);
    println!("  Log level:           {}", settings.log_level);
    println!("  Theme mode:          {:?}", settings.theme.mode);

    // Surface bad colors here rather than on TUI start
    Theme::from_settings(&settings.theme)?;
    Ok(())
}
