use anyhow::Result;
use serde_json::Value;

use crate::CliTest;

fn write_template(test: &CliTest) -> Result<()> {
    test.write_file(
        "messages/en.arb",
        r#"{
  "@@locale": "en",
  "helloWorld": "Hello World",
  "@helloWorld": {
    "description": "Text in App.tsx"
  },
  "signIn": "Sign In",
  "@signIn": {
    "description": "Button.title in Login.tsx"
  }
}
"#,
    )
}

#[test]
fn test_add_locale_copies_key_set() -> Result<()> {
    let test = CliTest::new()?;
    write_template(&test)?;

    let output = test.add_locale_command("es").output()?;
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout)?;
    assert!(
        stdout.contains("Created locale 'es' with 2 keys"),
        "stdout:\n{}",
        stdout
    );

    let content = test.read_file("messages/es.arb")?;
    let arb: Value = serde_json::from_str(&content)?;
    assert_eq!(arb["@@locale"], "es");
    assert_eq!(arb["helloWorld"], "Hello World");
    assert_eq!(arb["signIn"], "Sign In");
    // Metadata stays in the template
    assert!(arb.get("@helloWorld").is_none());
    Ok(())
}

#[test]
fn test_add_locale_preserves_key_order() -> Result<()> {
    let test = CliTest::new()?;
    write_template(&test)?;

    let output = test.add_locale_command("fr").output()?;
    assert_eq!(output.status.code(), Some(0));

    let content = test.read_file("messages/fr.arb")?;
    let arb: Value = serde_json::from_str(&content)?;
    let keys: Vec<&String> = arb.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["@@locale", "helloWorld", "signIn"]);
    Ok(())
}

#[test]
fn test_add_locale_requires_template() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.add_locale_command("es").output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(
        stderr.contains("Primary resource file not found"),
        "stderr:\n{}",
        stderr
    );
    Ok(())
}

#[test]
fn test_add_locale_refuses_existing_target() -> Result<()> {
    let test = CliTest::new()?;
    write_template(&test)?;
    test.write_file("messages/es.arb", r#"{"@@locale": "es"}"#)?;

    let output = test.add_locale_command("es").output()?;
    assert_eq!(output.status.code(), Some(2));
    Ok(())
}

#[test]
fn test_add_locale_rejects_bad_locale_code() -> Result<()> {
    let test = CliTest::new()?;
    write_template(&test)?;

    let output = test.add_locale_command("es/../en").output()?;
    assert_eq!(output.status.code(), Some(2));
    Ok(())
}
