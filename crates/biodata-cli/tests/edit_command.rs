use biodata_testing::TestWorld;

#[test]
fn test_edit_commits_and_returns_home() {
    let world = TestWorld::new();
    let result = world
        .run(&[
            "--format",
            "json",
            "edit",
            "--set",
            "age=42",
            "--set",
            "email=new@school.test",
        ])
        .unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assert_eq!(json["badge"]["label"], "Saved");
    assert_eq!(json["content"]["body"]["view"], "home");

    let rows = json["content"]["body"]["rows"].as_array().unwrap();
    assert_eq!(rows[0]["value"], "Shruti");
    assert_eq!(rows[1]["value"], "42");
    assert_eq!(rows[4]["value"], "new@school.test");
}

#[test]
fn test_edit_rejects_and_shows_inline_errors() {
    let world = TestWorld::new();
    let result = world
        .run(&["edit", "--set", "email=not-an-email", "--set", "grade=9"])
        .unwrap();

    assert!(!result.success());
    let stdout = result.stdout();
    assert!(stdout.contains("2 field(s) need attention; nothing was saved"));
    assert!(stdout.contains("Home  Profile  [Edit]"));
    assert!(stdout.contains("    ! Valid email is required"));
    assert!(stdout.contains("biodata edit --set <FIELD>=<VALUE>"));
    assert!(result.stderr().contains("2 field(s) failed validation"));
}

#[test]
fn test_edit_without_changes_still_commits() {
    let world = TestWorld::new();
    let result = world.run(&["edit"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Saved"));
    assert!(result.stdout().contains("[Home]  Profile  Edit"));
}
