use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_scan_discovers_static_keys() -> Result<()> {
    let test = CliTest::with_file(
        "src/index.ts",
        r#"
const url = process.env.DATABASE_URL;
const port = process.env.PORT || 3000;
"#,
    )?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file(".env.example")?, "DATABASE_URL=\nPORT=3000\n");
    Ok(())
}

#[test]
fn test_defaults_from_coalescing_and_ternary() -> Result<()> {
    let test = CliTest::with_file(
        "src/config.ts",
        r#"
const password = process.env.DB_PASSWORD || 'changeme';
const region = process.env.REGION ?? 'eu-west-1';
const host = process.env.HOST ? process.env.HOST : 'localhost';
"#,
    )?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert_eq!(
        test.read_file(".env.example")?,
        "DB_PASSWORD=changeme\nREGION=eu-west-1\nHOST=localhost\n"
    );
    Ok(())
}

#[test]
fn test_dynamic_keys_only_writes_nothing() -> Result<()> {
    let test = CliTest::with_file("src/index.ts", "const v = process.env[someVar];\n")?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert!(!test.file_exists(".env.example"));
    Ok(())
}

#[test]
fn test_empty_project_writes_nothing() -> Result<()> {
    let test = CliTest::with_file("src/index.ts", "const x = 1;\n")?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert!(!test.file_exists(".env.example"));
    Ok(())
}

#[test]
fn test_parse_error_file_is_skipped() -> Result<()> {
    let test = CliTest::with_file("src/broken.ts", "const = = definitely not valid(\n")?;
    test.write_file("src/good.ts", "const t = process.env.APP_NAME;\n")?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file(".env.example")?, "APP_NAME=\n");
    Ok(())
}

#[test]
fn test_first_default_wins_across_files() -> Result<()> {
    let test = CliTest::with_file(
        "src/a.ts",
        "const p = process.env.PORT || 3000;\n",
    )?;
    test.write_file("src/b.ts", "const p = process.env.PORT || 8080;\n")?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file(".env.example")?, "PORT=3000\n");
    Ok(())
}

#[test]
fn test_node_modules_ignored_by_default() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "const a = process.env.REAL_KEY;\n")?;
    test.write_file(
        "node_modules/pkg/index.js",
        "const b = process.env.VENDORED_KEY;\n",
    )?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file(".env.example")?, "REAL_KEY=\n");
    Ok(())
}

#[test]
fn test_custom_ignore_patterns() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "const a = process.env.KEPT;\n")?;
    test.write_file("generated/code.ts", "const b = process.env.SKIPPED;\n")?;

    let output = test
        .command()
        .arg("--ignore")
        .arg("**/generated/**")
        .output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file(".env.example")?, "KEPT=\n");
    Ok(())
}

#[test]
fn test_declaration_files_excluded() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "const a = process.env.FROM_SOURCE;\n")?;
    test.write_file(
        "src/env.d.ts",
        "declare const fromTypes: typeof process.env.FROM_TYPES;\n",
    )?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file(".env.example")?, "FROM_SOURCE=\n");
    Ok(())
}

#[test]
fn test_rerun_without_changes_is_byte_identical() -> Result<()> {
    let test = CliTest::with_file(
        "src/index.ts",
        "const a = process.env.ALPHA || 'one';\nconst b = process.env.BETA;\n",
    )?;

    assert!(test.command().output()?.status.success());
    let first = test.read_file(".env.example")?;

    assert!(test.command().output()?.status.success());
    let second = test.read_file(".env.example")?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_config_file_controls_output() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "const a = process.env.FROM_CONFIG;\n")?;
    test.write_file(
        ".spotenvrc.json",
        r#"{ "out": "config/env.json", "format": "json" }"#,
    )?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert_eq!(
        test.read_file("config/env.json")?,
        "{\n  \"FROM_CONFIG\": \"\"\n}\n"
    );
    Ok(())
}

#[test]
fn test_malformed_config_falls_back_to_defaults() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "const a = process.env.STILL_WORKS;\n")?;
    test.write_file(".spotenvrc.json", "{ this is not json")?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file(".env.example")?, "STILL_WORKS=\n");
    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--merge"));
    assert!(stdout.contains("--format"));
    Ok(())
}
