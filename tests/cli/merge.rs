use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_merge_preserves_existing_and_appends_new() -> Result<()> {
    let test = CliTest::with_file(
        "src/index.ts",
        "const a = process.env.A;\nconst b = process.env.B;\n",
    )?;
    test.write_file(".env.example", "A=1\n")?;

    let output = test.command().arg("--merge").output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file(".env.example")?, "A=1\nB=\n");
    Ok(())
}

#[test]
fn test_merge_keeps_existing_value_over_discovered_default() -> Result<()> {
    let test = CliTest::with_file(
        "src/index.ts",
        "const port = process.env.PORT || 3000;\n",
    )?;
    test.write_file(".env.example", "PORT=9999\n")?;

    let output = test.command().arg("--merge").output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file(".env.example")?, "PORT=9999\n");
    Ok(())
}

#[test]
fn test_merge_uses_discovered_default_for_new_keys() -> Result<()> {
    let test = CliTest::with_file(
        "src/index.ts",
        "const a = process.env.EXISTING;\nconst b = process.env.ADDED || 'fallback';\n",
    )?;
    test.write_file(".env.example", "EXISTING=kept\n")?;

    let output = test.command().arg("--merge").output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file(".env.example")?, "EXISTING=kept\nADDED=fallback\n");
    Ok(())
}

#[test]
fn test_merge_rerun_is_byte_identical() -> Result<()> {
    let test = CliTest::with_file(
        "src/index.ts",
        "const a = process.env.ALPHA || 'two words';\nconst b = process.env.BETA;\n",
    )?;
    test.write_file(".env.example", "CUSTOM=user value\n")?;

    assert!(test.command().arg("--merge").output()?.status.success());
    let first = test.read_file(".env.example")?;

    assert!(test.command().arg("--merge").output()?.status.success());
    let second = test.read_file(".env.example")?;

    assert_eq!(first, second);
    assert_eq!(
        second,
        "CUSTOM=\"user value\"\nALPHA=\"two words\"\nBETA=\n"
    );
    Ok(())
}

#[test]
fn test_merge_json_destination() -> Result<()> {
    let test = CliTest::with_file(
        "src/index.ts",
        "const a = process.env.A;\nconst b = process.env.B;\n",
    )?;
    test.write_file("env.json", "{\n  \"A\": \"custom\"\n}\n")?;

    let output = test
        .command()
        .arg("--merge")
        .arg("--out")
        .arg("env.json")
        .output()?;

    assert!(output.status.success());
    assert_eq!(
        test.read_file("env.json")?,
        "{\n  \"A\": \"custom\",\n  \"B\": \"\"\n}\n"
    );
    Ok(())
}

#[test]
fn test_merge_yml_destination() -> Result<()> {
    let test = CliTest::with_file(
        "src/index.ts",
        "const a = process.env.A;\nconst b = process.env.B;\n",
    )?;
    test.write_file("env.yaml", "A: custom\n")?;

    let output = test
        .command()
        .arg("--merge")
        .arg("--out")
        .arg("env.yaml")
        .output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("env.yaml")?, "A: custom\nB: ''\n");
    Ok(())
}

#[test]
fn test_without_merge_existing_values_are_replaced() -> Result<()> {
    let test = CliTest::with_file(
        "src/index.ts",
        "const port = process.env.PORT || 3000;\n",
    )?;
    test.write_file(".env.example", "PORT=9999\nSTALE=old\n")?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file(".env.example")?, "PORT=3000\n");
    Ok(())
}

#[test]
fn test_merge_preserves_existing_when_scan_finds_nothing() -> Result<()> {
    let test = CliTest::with_file("src/index.ts", "const x = 1;\n")?;
    test.write_file(".env.example", "KEPT=value\n")?;

    let output = test.command().arg("--merge").output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file(".env.example")?, "KEPT=value\n");
    Ok(())
}
