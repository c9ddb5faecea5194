use anyhow::Result;
use serde_json::Value;

use crate::CliTest;

fn setup_project(test: &CliTest) -> Result<()> {
    test.write_file(
        "package.json",
        r#"{ "name": "myapp", "version": "1.0.0" }"#,
    )
}

fn arb(test: &CliTest) -> Result<Value> {
    let content = test.read_file("messages/en.arb")?;
    Ok(serde_json::from_str(&content)?)
}

#[test]
fn test_extract_single_literal() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;
    test.write_file(
        "src/App.tsx",
        r#"export function App() {
    return <Text>Hello World</Text>;
}
"#,
    )?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Extracted 1 literal"), "stdout:\n{}", stdout);

    let arb = arb(&test)?;
    assert_eq!(arb["@@locale"], "en");
    assert_eq!(arb["helloWorld"], "Hello World");
    let description = arb["@helloWorld"]["description"].as_str().unwrap();
    assert!(description.contains("Text in App.tsx"), "{}", description);
    Ok(())
}

#[test]
fn test_extract_filters_non_ui_literals() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;
    test.write_file(
        "src/App.tsx",
        r#"export function App() {
    return (
        <Dialog>
            <Text>https://example.com</Text>
            <Text>123</Text>
            <Text>OK</Text>
            <Text>%s items</Text>
            <Text>Sign In</Text>
        </Dialog>
    );
}
"#,
    )?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(0));

    let arb = arb(&test)?;
    assert_eq!(arb["signIn"], "Sign In");
    let content_keys: Vec<&String> = arb
        .as_object()
        .unwrap()
        .keys()
        .filter(|k| !k.starts_with('@'))
        .collect();
    assert_eq!(content_keys, vec!["signIn"]);
    Ok(())
}

#[test]
fn test_extract_replace_duplicate_literals() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;
    test.write_file(
        "src/App.tsx",
        r#"import React from "react";

export function Toolbar() {
    return (
        <Dialog>
            <Text>Save</Text>
            <Button title="Save" />
        </Dialog>
    );
}
"#,
    )?;

    let output = test.extract_command().arg("--replace").output()?;
    assert_eq!(output.status.code(), Some(0));

    let arb = arb(&test)?;
    assert_eq!(arb["save"], "Save");
    assert_eq!(arb["save2"], "Save");

    // The second occurrence must target the second call site
    let content = test.read_file("src/App.tsx")?;
    let first = content.find("<Text>{t('save')}</Text>");
    let second = content.find("title={t('save2')}");
    assert!(first.is_some(), "content:\n{}", content);
    assert!(second.is_some(), "content:\n{}", content);
    assert!(first.unwrap() < second.unwrap());

    // Import inserted exactly once, after the existing import
    assert_eq!(content.matches("myapp/i18n").count(), 1);
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "import React from \"react\";");
    assert_eq!(lines[1], "import { t } from \"myapp/i18n\";");
    Ok(())
}

#[test]
fn test_extract_replace_is_idempotent_across_runs() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;
    test.write_file(
        "src/App.tsx",
        r#"export function App() {
    return <Text>Hello World</Text>;
}
"#,
    )?;

    let output = test.extract_command().arg("--replace").output()?;
    assert_eq!(output.status.code(), Some(0));
    let first_arb = test.read_file("messages/en.arb")?;
    let first_source = test.read_file("src/App.tsx")?;

    // Second run finds no literals: the source now references keys
    let output = test.extract_command().arg("--replace").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(test.read_file("messages/en.arb")?, first_arb);
    assert_eq!(test.read_file("src/App.tsx")?, first_source);
    Ok(())
}

#[test]
fn test_extract_preserves_existing_keys_and_order() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;
    test.write_file(
        "messages/en.arb",
        "{\n  \"@@locale\": \"en\",\n  \"welcome\": \"Welcome (reviewed)\"\n}\n",
    )?;
    test.write_file(
        "src/App.tsx",
        r#"export function App() {
    return <Text>Sign In</Text>;
}
"#,
    )?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(0));

    let arb = arb(&test)?;
    assert_eq!(arb["welcome"], "Welcome (reviewed)");
    let keys: Vec<&String> = arb.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["@@locale", "welcome", "signIn", "@signIn"]);
    Ok(())
}

#[test]
fn test_extract_dry_run_writes_nothing() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;
    test.write_file(
        "src/App.tsx",
        r#"export function App() {
    return <Text>Hello World</Text>;
}
"#,
    )?;

    let output = test.extract_command().arg("--dry-run").output()?;
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Dry run"), "stdout:\n{}", stdout);
    assert!(!test.has_file("messages/en.arb"));
    Ok(())
}

#[test]
fn test_extract_skips_unparsable_file() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;
    test.write_file("src/broken.tsx", "export function App( {\n")?;
    test.write_file(
        "src/Good.tsx",
        r#"export function Good() {
    return <Text>Hello World</Text>;
}
"#,
    )?;

    let output = test.extract_command().output()?;
    // Parse failures are warnings, not errors
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("parse-error"), "stdout:\n{}", stdout);

    let arb = arb(&test)?;
    assert_eq!(arb["helloWorld"], "Hello World");
    Ok(())
}

#[test]
fn test_extract_fails_on_malformed_resource_file() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;
    test.write_file("messages/en.arb", "not json {")?;
    test.write_file(
        "src/App.tsx",
        r#"export function App() {
    return <Text>Hello World</Text>;
}
"#,
    )?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Malformed resource file"), "stderr:\n{}", stderr);
    Ok(())
}

#[test]
fn test_extract_replace_without_manifest_skips_import() -> Result<()> {
    let test = CliTest::new()?;
    // No package.json at all
    test.write_file(
        "src/App.tsx",
        r#"export function App() {
    return <Text>Hello World</Text>;
}
"#,
    )?;

    let output = test.extract_command().arg("--replace").output()?;
    assert_eq!(output.status.code(), Some(0));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("warning:"), "stderr:\n{}", stderr);

    let content = test.read_file("src/App.tsx")?;
    assert!(content.contains("{t('helloWorld')}"));
    assert!(!content.contains("/i18n"));
    Ok(())
}

#[test]
fn test_extract_respects_config_overrides() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;
    test.write_file(
        ".harvestrc.json",
        r#"{
            "primaryLocale": "de",
            "messagesRoot": "./locales",
            "elements": ["Text"]
        }"#,
    )?;
    test.write_file(
        "src/App.tsx",
        r#"export function App() {
    return (
        <>
            <Text>Hello World</Text>
            <Button title="Ignored here" />
        </>
    );
}
"#,
    )?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(0));

    let content = test.read_file("locales/de.arb")?;
    let arb: Value = serde_json::from_str(&content)?;
    assert_eq!(arb["@@locale"], "de");
    assert_eq!(arb["helloWorld"], "Hello World");
    assert!(arb.get("ignoredHere").is_none());
    Ok(())
}

#[test]
fn test_extract_runs_post_command() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;
    test.write_file(
        ".harvestrc.json",
        r#"{ "postExtractCommand": ["touch", "post-ran"] }"#,
    )?;
    test.write_file(
        "src/App.tsx",
        r#"export function App() {
    return <Text>Hello World</Text>;
}
"#,
    )?;

    let mut cmd = test.extract_command();
    cmd.env("PATH", "/usr/bin:/bin");
    let output = cmd.output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(test.has_file("post-ran"));
    Ok(())
}

#[test]
fn test_extract_failing_post_command_is_a_warning() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;
    test.write_file(
        ".harvestrc.json",
        r#"{ "postExtractCommand": ["false"] }"#,
    )?;
    test.write_file(
        "src/App.tsx",
        r#"export function App() {
    return <Text>Hello World</Text>;
}
"#,
    )?;

    let mut cmd = test.extract_command();
    cmd.env("PATH", "/usr/bin:/bin");
    let output = cmd.output()?;
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("external-tool"), "stdout:\n{}", stdout);
    Ok(())
}
