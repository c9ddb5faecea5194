use anyhow::Result;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config_and_resource_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.init_command().output()?;
    assert_eq!(output.status.code(), Some(0));

    let config = test.read_file(".harvestrc.json")?;
    let parsed: Value = serde_json::from_str(&config)?;
    assert_eq!(parsed["primaryLocale"], "en");
    assert!(parsed["elements"].is_array());

    let arb = test.read_file("messages/en.arb")?;
    let parsed: Value = serde_json::from_str(&arb)?;
    assert_eq!(parsed["@@locale"], "en");
    Ok(())
}

#[test]
fn test_init_fails_when_config_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".harvestrc.json", "{}")?;

    let output = test.init_command().output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("already exists"), "stderr:\n{}", stderr);
    Ok(())
}

#[test]
fn test_init_keeps_existing_resource_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "messages/en.arb",
        r#"{"@@locale": "en", "welcome": "Welcome"}"#,
    )?;

    let output = test.init_command().output()?;
    assert_eq!(output.status.code(), Some(0));

    let arb = test.read_file("messages/en.arb")?;
    let parsed: Value = serde_json::from_str(&arb)?;
    assert_eq!(parsed["welcome"], "Welcome");
    Ok(())
}

#[test]
fn test_extract_works_after_init() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("package.json", r#"{ "name": "myapp" }"#)?;

    let output = test.init_command().output()?;
    assert_eq!(output.status.code(), Some(0));

    test.write_file(
        "src/App.tsx",
        r#"export function App() {
    return <Text>Hello World</Text>;
}
"#,
    )?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(0));

    let arb = test.read_file("messages/en.arb")?;
    let parsed: Value = serde_json::from_str(&arb)?;
    assert_eq!(parsed["helloWorld"], "Hello World");
    Ok(())
}
