//! blockpal-headless - load a category tree and print the toolbox state

use std::process::ExitCode;

use blockpal::{AppConfig, Flyout, FlyoutOptions, StackFlyout, Toolbox, ToolboxTree};

fn main() -> ExitCode {
    let config = AppConfig::load_from_default_path().unwrap_or_default();

    env_logger::Builder::new()
        .filter_level(config.preferences.log_level.to_level_filter())
        .parse_default_env()
        .init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("Usage: blockpal-headless <toolbox.xml>");
        return ExitCode::FAILURE;
    };

    match run(&config, &path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &AppConfig, path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let xml = std::fs::read_to_string(path)?;
    let tree = ToolboxTree::parse(&xml)?;

    let flyout = StackFlyout::new(FlyoutOptions::from(&config.workspace));
    let mut toolbox = Toolbox::new(config.workspace.clone(), flyout);
    toolbox.init(&tree)?;
    toolbox.resize(config.workspace.viewport);

    println!("Categories ({}):", toolbox.category_menu().len());
    for pos in toolbox.flyout().category_scroll_positions() {
        println!(
            "  {:<16} {:<24} at {:>8.1}  length {:>8.1}",
            pos.category_id, pos.category_name, pos.position, pos.length
        );
    }
    println!(
        "Selected: {}",
        toolbox.get_selected_category_id().unwrap_or("<none>")
    );

    for _ in 0..2 {
        let state = if toolbox.is_flyout_hidden() {
            "hidden"
        } else {
            "shown"
        };
        match toolbox.get_deletion_rect() {
            Some(rect) => println!(
                "Delete area (flyout {}): x={} y={} w={} h={}",
                state, rect.x, rect.y, rect.width, rect.height
            ),
            None => println!("Delete area (flyout {}): none", state),
        }
        toolbox.toggle_flyout_visibility();
    }

    Ok(())
}
