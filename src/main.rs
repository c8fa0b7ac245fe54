//! Terminal UI (TUI) for browsing and reserving last-minute local deals
//!
//! Businesses post short-lived discounts on surplus inventory or open
//! appointment slots. LastCall lists them, lets you narrow the list by
//! category or free-text search, pick a quantity and reserve.
//!
//! # Features:
//!
//! - Filter deals by category (Food, Fitness, Beauty)
//! - Case-insensitive search across business, description and details
//! - Reserve any number of items and see the total up front
//! - Load your own deal catalog from a YAML file
//! - Four color themes, remembered between runs
//!
//! # Examples
//!
//! ```bash
//! # show help menu
//! lastcall --help
//!
//! # launch application
//! lastcall
//!
//! # start on fitness deals with debug logs written to the config directory
//! lastcall --category fitness --debug
//! ```
use clap::Parser;
use color_eyre::eyre::{Context, Result, eyre};
use directories::ProjectDirs;
use log::*;
use ratatui::{Terminal, prelude::CrosstermBackend};
use std::{cell::RefCell, fs, io, path::Path, rc::Rc};

use crate::{
    catalog::{Catalog, Category, StaticCatalog},
    config::ConfigManager,
    renderer::Renderer,
    store::{Dispatcher, Store, action::Action, reducer::StoreReducer, state::State},
    ui::colors::Theme,
};

#[doc(hidden)]
mod catalog;
#[doc(hidden)]
mod config;
#[doc(hidden)]
mod renderer;
#[doc(hidden)]
mod store;
#[doc(hidden)]
mod ui;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Write debug logs to lastcall.log in the config directory
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Color theme for this run (Blue, Emerald, Indigo, Red)
    #[arg(short, long)]
    theme: Option<Theme>,

    /// YAML file to load deals from instead of the built in catalog
    #[arg(short, long)]
    catalog: Option<String>,

    /// Start with the list filtered to a category
    #[arg(long)]
    category: Option<Category>,
}

#[doc(hidden)]
fn initialize_logger(args: &Args, config_dir: &Path) -> Result<()> {
    if args.debug {
        // the terminal belongs to the UI so logs go to a file
        let log_file = fs::File::create(config_dir.join("lastcall.log"))?;
        simplelog::WriteLogger::init(
            simplelog::LevelFilter::Debug,
            simplelog::Config::default(),
            log_file,
        )?;
    } else {
        simplelog::SimpleLogger::init(simplelog::LevelFilter::Off, simplelog::Config::default())?;
    }

    Ok(())
}

#[doc(hidden)]
fn get_project_config_dir() -> Result<std::path::PathBuf> {
    let project_dir = ProjectDirs::from("", "", "lastcall")
        .ok_or(eyre!("failed to get project directory"))?;

    let config_dir = project_dir.config_dir();

    fs::create_dir_all(config_dir)?;

    Ok(config_dir.to_path_buf())
}

#[doc(hidden)]
fn get_config_file_path(config_dir: &Path) -> Result<String> {
    let config_file_path = config_dir
        .join("config.yml")
        .to_str()
        .ok_or(eyre!("unable to construct config file path"))?
        .to_string();

    Ok(config_file_path)
}

#[doc(hidden)]
fn load_catalog(path: Option<&str>) -> Result<StaticCatalog> {
    match path {
        Some(path) => StaticCatalog::from_yaml_file(Path::new(path))
            .wrap_err_with(|| format!("failed to load deal catalog from {path}")),
        None => Ok(StaticCatalog::seeded()),
    }
}

#[doc(hidden)]
fn is_true_color_supported() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some_and(|level| level.has_16m)
}

#[doc(hidden)]
fn init(args: &Args, config_path: String, true_color: bool) -> Result<Store> {
    let config_manager = ConfigManager::builder().path(config_path).build()?;
    let config = config_manager.get().clone();

    // command line flags win over the config file
    let theme = args
        .theme
        .unwrap_or_else(|| Theme::from_string(&config.theme));
    let catalog_path = args.catalog.as_deref().or(config.catalog.as_deref());

    let catalog = Rc::new(load_catalog(catalog_path)?);
    info!("loaded {} deals", catalog.all().len());

    let state = State::new(catalog.all(), theme, true_color);
    let mut store = Store::new(state, StoreReducer::boxed(catalog));

    if let Some(category) = args.category {
        store.dispatch(Action::ToggleCategory(category));
    }

    let config_manager = RefCell::new(config_manager);

    store.set_effect_fn(move |action, _state| {
        if let Action::SetTheme(theme) = action
            && let Err(e) = config_manager.borrow_mut().update_theme(*theme)
        {
            error!("failed to persist theme: {e}");
        }
    });

    Ok(store)
}

#[doc(hidden)]
fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let config_dir = get_project_config_dir()?;

    initialize_logger(&args, &config_dir)?;

    let config_path = get_config_file_path(&config_dir)?;
    let store = Rc::new(init(&args, config_path, is_true_color_supported())?);

    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    let renderer = Renderer::new(terminal, store);

    renderer.start_render_loop()
}

#[cfg(test)]
#[path = "./main_tests.rs"]
mod tests;
