use assert_cmd::cargo::cargo_bin_cmd;
use biodata_testing::TestWorld;
use predicates::prelude::*;

#[test]
fn test_show_home_text() {
    let world = TestWorld::new();
    let result = world.run(&["show", "home"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    insta::assert_snapshot!(result.stdout(), @r"
    [Home]  Profile  Edit

    Home - Biodata
      Name   Shruti
      Age    14
      Grade  10
      Roll   2315022
      Email  shruti@example.com
    ");
}

#[test]
fn test_show_accepts_route_paths() {
    let mut cmd = cargo_bin_cmd!("biodata");
    cmd.env_remove("RUST_LOG")
        .args(["show", "/profile"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Home  [Profile]  Edit\n"))
        .stdout(predicate::str::contains(
            "Picture  https://via.placeholder.com/150",
        ))
        .stdout(predicate::str::contains("This is a short about me paragraph."));
}

#[test]
fn test_show_unknown_view_fails() {
    let mut cmd = cargo_bin_cmd!("biodata");
    cmd.args(["show", "settings"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown view"));
}

#[test]
fn test_show_edit_json_lists_all_inputs() {
    let world = TestWorld::new();
    let result = world.run(&["--format", "json", "show", "edit"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    let body = &json["content"]["body"];
    assert_eq!(body["view"], "edit");
    assert_eq!(body["state"], "clean");
    assert_eq!(body["error_count"], 0);

    let fields: Vec<&str> = body["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(
        fields,
        vec!["name", "age", "grade", "roll", "email", "profilePic", "about"]
    );
    assert_eq!(body["fields"][2]["placeholder"], "e.g. 10, 11th");
    assert_eq!(body["fields"][6]["multiline"], true);
}

#[test]
fn test_show_json_marks_active_nav_item() {
    let world = TestWorld::new();
    let result = world.run(&["--format", "json", "show", "profile"]).unwrap();
    let json = result.json().unwrap();

    let items = json["content"]["nav"]["items"].as_array().unwrap();
    let active: Vec<&str> = items
        .iter()
        .filter(|i| i["active"] == true)
        .map(|i| i["path"].as_str().unwrap())
        .collect();
    assert_eq!(active, vec!["/profile"]);
    assert!(json.get("badge").is_none());
}
