//! CLI tests for `menu render` and `menu validate`.
//!
//! Spawns the menu binary against a temporary project and checks output and
//! exit codes.

use std::process::{Command, Output};

use menu::exit_codes;
use menu::model::Menu;
use menu::test_support::{TestProject, decode_slashes, item};

fn menu_cmd(project: &TestProject, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_menu"))
        .arg("--project-dir")
        .arg(project.path())
        .args(args)
        .output()
        .expect("run menu")
}

#[test]
fn render_prints_expanded_active_branch() {
    let project = TestProject::new().expect("project");

    let output = menu_cmd(&project, &["render", "main_menu", "--path", "/shop/shoes/"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));

    let html = decode_slashes(&String::from_utf8_lossy(&output.stdout));
    assert!(html.contains(r#"<a href="/shop/" class="active">Shop</a>"#));
    assert!(html.contains(r#"<a href="/shop/shoes/" class="active">Shoes</a>"#));
    assert!(html.contains(r#"<a href="/about/" class="">About</a>"#));
}

#[test]
fn render_json_reports_flags() {
    let project = TestProject::new().expect("project");

    let output = menu_cmd(
        &project,
        &["render", "main_menu", "--path", "/about/", "--format", "json"],
    );
    assert_eq!(output.status.code(), Some(exit_codes::OK));

    let forest: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    let about = &forest[2];
    assert_eq!(about["item"]["title"], "About");
    assert_eq!(about["is_active"], true);
    assert_eq!(forest[1]["show_children"], false);
}

#[test]
fn render_unknown_menu_exits_with_unknown_menu_code() {
    let project = TestProject::new().expect("project");

    let output = menu_cmd(&project, &["render", "sidebar"]);
    assert_eq!(output.status.code(), Some(exit_codes::UNKNOWN_MENU));
    assert!(String::from_utf8_lossy(&output.stderr).contains("menu 'sidebar' not found"));
}

#[test]
fn validate_flags_broken_menu() {
    let project = TestProject::new().expect("project");
    project
        .write_menus(vec![Menu {
            name: "main_menu".to_string(),
            items: vec![item(1, None, "Home", "/"), item(2, Some(2), "Self", "/self")],
        }])
        .expect("write menus");

    let output = menu_cmd(&project, &["validate"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(String::from_utf8_lossy(&output.stdout).contains("- item 2 is its own parent"));
}

#[test]
fn list_prints_menu_names() {
    let project = TestProject::new().expect("project");

    let output = menu_cmd(&project, &["list"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "main_menu\n");
}
