use std::fs;

use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_directory_out_gets_canonical_filename() -> Result<()> {
    let test = CliTest::with_file("src/index.ts", "const a = process.env.IN_DIR;\n")?;
    fs::create_dir(test.root().join("generated"))?;

    let output = test.command().arg("--out").arg("generated").output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("generated/.env.example")?, "IN_DIR=\n");
    Ok(())
}

#[test]
fn test_directory_out_with_json_format() -> Result<()> {
    let test = CliTest::with_file("src/index.ts", "const a = process.env.IN_DIR;\n")?;
    fs::create_dir(test.root().join("generated"))?;

    let output = test
        .command()
        .arg("--out")
        .arg("generated")
        .arg("--format")
        .arg("json")
        .output()?;

    assert!(output.status.success());
    assert!(test.file_exists("generated/env.json"));
    Ok(())
}

#[test]
fn test_nonexistent_nested_file_path_created() -> Result<()> {
    let test = CliTest::with_file("src/index.ts", "const a = process.env.NESTED;\n")?;

    let output = test
        .command()
        .arg("--out")
        .arg("deeply/nested/config.json")
        .output()?;

    assert!(output.status.success());
    assert_eq!(
        test.read_file("deeply/nested/config.json")?,
        "{\n  \"NESTED\": \"\"\n}\n"
    );
    Ok(())
}

#[test]
fn test_dotenv_basename_kept_for_env_format() -> Result<()> {
    let test = CliTest::with_file("src/index.ts", "const a = process.env.SAMPLED;\n")?;

    let output = test.command().arg("--out").arg(".env.sample").output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file(".env.sample")?, "SAMPLED=\n");
    Ok(())
}

#[test]
fn test_extensionless_out_defaults_to_directory() -> Result<()> {
    let test = CliTest::with_file("src/index.ts", "const a = process.env.AMBIGUOUS;\n")?;

    let output = test.command().arg("--out").arg("exports").output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("exports/.env.example")?, "AMBIGUOUS=\n");
    Ok(())
}

#[test]
fn test_trailing_separator_means_directory() -> Result<()> {
    let test = CliTest::with_file("src/index.ts", "const a = process.env.SLASHED;\n")?;

    let output = test.command().arg("--out").arg("exports/").output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("exports/.env.example")?, "SLASHED=\n");
    Ok(())
}

#[test]
fn test_empty_out_is_rejected() -> Result<()> {
    let test = CliTest::with_file("src/index.ts", "const a = process.env.NEVER_WRITTEN;\n")?;

    let output = test.command().arg("--out").arg("").output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid target path"));
    Ok(())
}

#[test]
fn test_missing_scan_directory_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--dir").arg("does-not-exist").output()?;

    assert_eq!(output.status.code(), Some(2));
    Ok(())
}
