use indoc::indoc;
use tempfile::TempDir;

use crate::store::{StateGetter, state::ViewID};

use super::*;

fn default_args() -> Args {
    Args {
        debug: false,
        theme: None,
        catalog: None,
        category: None,
    }
}

fn config_path(dir: &TempDir) -> String {
    get_config_file_path(dir.path()).unwrap()
}

#[test]
fn parses_command_line() {
    let args = Args::try_parse_from([
        "lastcall",
        "--debug",
        "--theme",
        "Red",
        "--catalog",
        "deals.yml",
        "--category",
        "fitness",
    ])
    .unwrap();

    assert!(args.debug);
    assert_eq!(args.theme, Some(Theme::Red));
    assert_eq!(args.catalog.as_deref(), Some("deals.yml"));
    assert_eq!(args.category, Some(Category::Fitness));
}

#[test]
fn theme_flag_ignores_case() {
    let dir = tempfile::tempdir().unwrap();
    let args = Args::try_parse_from(["lastcall", "--theme", "red"]).unwrap();

    let store = init(&args, config_path(&dir), false).unwrap();
    assert_eq!(store.get_state().theme, Theme::Red);
}

#[test]
fn rejects_unknown_theme() {
    assert!(Args::try_parse_from(["lastcall", "--theme", "purple"]).is_err());
}

#[test]
fn rejects_unknown_category() {
    assert!(Args::try_parse_from(["lastcall", "--category", "pets"]).is_err());
}

#[test]
fn test_get_project_config_dir() {
    let p = get_project_config_dir().unwrap();
    assert!(p.ends_with("lastcall"));
}

#[test]
fn test_init_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = init(&default_args(), config_path(&dir), false).unwrap();
    let state = store.get_state();

    assert_eq!(state.theme, Theme::Blue);
    assert_eq!(state.deals.len(), 3);
    assert!(state.category.is_none());
    assert_eq!(state.screen.view_id(), ViewID::Deals);
}

#[test]
fn test_init_applies_flags() {
    let dir = tempfile::tempdir().unwrap();
    let args = Args {
        theme: Some(Theme::Indigo),
        category: Some(Category::Beauty),
        ..default_args()
    };

    let store = init(&args, config_path(&dir), true).unwrap();
    let state = store.get_state();

    assert_eq!(state.theme, Theme::Indigo);
    assert!(state.true_color_enabled);
    assert_eq!(state.category, Some(Category::Beauty));
    assert_eq!(state.deals.len(), 1);
}

#[test]
fn test_init_loads_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let catalog_path = dir.path().join("deals.yml");
    fs::write(
        &catalog_path,
        indoc! {r#"
            deals:
              - id: 7
                business: Corner Cafe
                category: Food
                description: Half price bagels
                details: Until we run out
                original_price: "$4"
                discounted_price: "$2"
                time_remaining: 20 mins
                distance: 0.1 mi
        "#},
    )
    .unwrap();

    let args = Args {
        catalog: Some(catalog_path.to_string_lossy().to_string()),
        ..default_args()
    };

    let store = init(&args, config_path(&dir), false).unwrap();
    let state = store.get_state();

    assert_eq!(state.deals.len(), 1);
    assert_eq!(state.deals[0].business, "Corner Cafe");
}

#[test]
fn test_init_fails_on_missing_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let args = Args {
        catalog: Some(dir.path().join("nope.yml").to_string_lossy().to_string()),
        ..default_args()
    };

    assert!(init(&args, config_path(&dir), false).is_err());
}

#[test]
fn test_theme_change_is_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = config_path(&dir);
    let store = init(&default_args(), path.clone(), false).unwrap();

    store.dispatch(Action::SetTheme(Theme::Red));

    let manager = ConfigManager::builder().path(path).build().unwrap();
    assert_eq!(manager.get().theme, "Red");
}
