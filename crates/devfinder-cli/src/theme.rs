//! Handlers for the `theme` subcommands.

use devfinder_core::{AppConfig, FilePreferenceStore, Theme, ThemeController};

fn controller(config: &AppConfig) -> ThemeController<FilePreferenceStore> {
    ThemeController::new(
        FilePreferenceStore::new(&config.theme_path),
        config.system_theme,
    )
}

fn print_state(controller: &ThemeController<FilePreferenceStore>) -> anyhow::Result<()> {
    let displayed = controller.displayed()?;
    let switcher = controller.switcher()?;
    let source = match controller.override_theme()? {
        Some(_) => "override",
        None => "system",
    };
    println!("theme: {displayed} ({source}, system is {})", controller.system());
    println!(
        "root class: {}",
        controller.root_class()?.unwrap_or("(none)")
    );
    println!(
        "switcher: [{}] {} ({})",
        if switcher.checked { "x" } else { " " },
        switcher.label,
        switcher.icon
    );
    Ok(())
}

/// # Errors
///
/// Returns an error if the preference file cannot be read.
pub(crate) fn run_theme_show(config: &AppConfig) -> anyhow::Result<()> {
    print_state(&controller(config))
}

/// # Errors
///
/// Returns an error if the preference file cannot be read or written.
pub(crate) fn run_theme_toggle(config: &AppConfig) -> anyhow::Result<()> {
    let mut controller = controller(config);
    controller.toggle()?;
    print_state(&controller)
}

/// Feeds a system color-scheme change through the controller and shows
/// the outcome. The system preference itself is not persisted.
///
/// # Errors
///
/// Returns an error if the preference file cannot be read.
pub(crate) fn run_theme_system(config: &AppConfig, system: Theme) -> anyhow::Result<()> {
    let mut controller = controller(config);
    controller.system_changed(system)?;
    print_state(&controller)
}
