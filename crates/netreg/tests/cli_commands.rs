#![cfg(feature = "cli")]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const REGISTRY: &str = r#"{
  "$schema": "https://networks-registry.thegraph.com/TheGraphNetworksRegistrySchema_v0_6.json",
  "description": "Test registry",
  "title": "The Graph Networks Registry",
  "updatedAt": "2025-02-11T16:20:03Z",
  "version": "0.6.1",
  "networks": [
    {
      "id": "mainnet",
      "caip2Id": "eip155:1",
      "fullName": "Ethereum Mainnet",
      "shortName": "Ethereum",
      "aliases": ["ethereum", "eth"],
      "networkType": "mainnet",
      "issuanceRewards": true,
      "services": {
        "subgraphs": ["https://api.studio.thegraph.com/deploy/"],
        "sps": ["https://api.studio.thegraph.com/deploy/"],
        "firehose": ["eth.firehose.pinax.network:443"],
        "substreams": ["eth.substreams.pinax.network:443"]
      }
    },
    {
      "id": "sepolia",
      "caip2Id": "eip155:11155111",
      "fullName": "Ethereum Sepolia Testnet",
      "shortName": "Ethereum",
      "secondName": "Sepolia",
      "networkType": "testnet",
      "issuanceRewards": false,
      "services": { "subgraphs": ["https://api.studio.thegraph.com/deploy/"] },
      "relations": [{ "kind": "testnetOf", "network": "mainnet" }]
    },
    {
      "id": "btc",
      "caip2Id": "bip122:000000000019d6689c085ae165831e93",
      "fullName": "Bitcoin",
      "shortName": "Bitcoin",
      "networkType": "mainnet",
      "issuanceRewards": false,
      "services": { "firehose": [] }
    },
    {
      "id": "arbitrum-one",
      "caip2Id": "eip155:42161",
      "fullName": "Arbitrum One",
      "shortName": "Arbitrum",
      "networkType": "mainnet",
      "issuanceRewards": true,
      "services": {
        "subgraphs": ["https://api.studio.thegraph.com/deploy/"],
        "firehose": ["arbone.firehose.pinax.network:443"]
      },
      "relations": [{ "kind": "l2Of", "network": "mainnet" }]
    }
  ]
}"#;

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "netreg-cli-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn write_registry(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("registry.json");
    std::fs::write(&path, contents).expect("registry should be writable");
    path
}

fn netreg(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_netreg"))
        .env_remove("NETREG_REGISTRY")
        .env_remove("NETREG_LOG_LEVEL")
        .args(args)
        .output()
        .expect("netreg should run")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn validate_prints_summary() {
    let dir = unique_temp_dir("validate");
    let path = write_registry(&dir, REGISTRY);

    let output = netreg(&["--format", "json", "validate", path.to_str().unwrap()]);
    assert!(output.status.success());

    let summary: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("validate should emit json");
    assert_eq!(summary["valid"], true);
    assert_eq!(summary["networks"], 4);
    assert_eq!(summary["testnets"], 1);
    assert_eq!(summary["version"], "0.6.1");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn validate_names_offending_path() {
    let dir = unique_temp_dir("validate-bad");
    let corrupted = REGISTRY.replacen(
        "\"issuanceRewards\": false",
        "\"issuanceRewards\": \"no\"",
        1,
    );
    let path = write_registry(&dir, &corrupted);

    let output = netreg(&["validate", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(60));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("$.networks[1].issuanceRewards"), "{stderr}");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn validate_missing_file_fails() {
    let dir = unique_temp_dir("validate-missing");
    let output = netreg(&["validate", dir.join("absent.json").to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn validate_rejects_non_utf8_registry() {
    let dir = unique_temp_dir("validate-utf8");
    let path = dir.join("registry.json");
    std::fs::write(&path, b"{\"title\": \"\xff\"}").unwrap();

    let output = netreg(&["validate", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(60));

    let output = netreg(&["list", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(60));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn validate_against_json_schema() {
    let dir = unique_temp_dir("validate-schema");
    let path = write_registry(&dir, REGISTRY);
    let schema = dir.join("registry.schema.json");
    std::fs::write(
        &schema,
        r#"{
            "type": "object",
            "required": ["networks"],
            "properties": {
                "networks": { "type": "array", "maxItems": 3 }
            }
        }"#,
    )
    .unwrap();

    let output = netreg(&[
        "validate",
        path.to_str().unwrap(),
        "--schema",
        schema.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(60));

    let output = netreg(&[
        "validate",
        path.to_str().unwrap(),
        "--schema",
        schema.to_str().unwrap(),
        "--strict",
    ]);
    assert_eq!(output.status.code(), Some(60));

    std::fs::write(
        &schema,
        r#"{ "type": "object", "required": ["networks", "version"] }"#,
    )
    .unwrap();
    let output = netreg(&[
        "--format",
        "raw",
        "validate",
        path.to_str().unwrap(),
        "--schema",
        schema.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["valid"]);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn list_hides_testnets_and_orders_by_services() {
    let dir = unique_temp_dir("list");
    let path = write_registry(&dir, REGISTRY);
    let file = path.to_str().unwrap();

    let output = netreg(&["--format", "raw", "list", file]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["mainnet", "arbitrum-one", "btc"]);

    let output = netreg(&["--format", "raw", "list", file, "--testnets"]);
    assert_eq!(
        stdout_lines(&output),
        vec!["mainnet", "arbitrum-one", "sepolia", "btc"]
    );

    let output = netreg(&["--format", "raw", "list", file, "--search", "SEP"]);
    assert!(stdout_lines(&output).is_empty());

    let output = netreg(&[
        "--format", "raw", "list", file, "--search", "SEP", "--testnets",
    ]);
    assert_eq!(stdout_lines(&output), vec!["sepolia"]);

    let output = netreg(&["--format", "raw", "list", file, "--firehose"]);
    assert_eq!(stdout_lines(&output), vec!["mainnet", "arbitrum-one"]);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn list_json_reports_filters() {
    let dir = unique_temp_dir("list-json");
    let path = write_registry(&dir, REGISTRY);

    let output = netreg(&[
        "--format",
        "json",
        "list",
        path.to_str().unwrap(),
        "--sps",
    ]);
    assert!(output.status.success());

    let listing: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(listing["count"], 1);
    assert_eq!(listing["networks"][0]["id"], "mainnet");
    assert_eq!(listing["networks"][0]["serviceCount"], 4);
    assert_eq!(listing["filters"][2]["id"], "sps-toggle");
    assert_eq!(listing["filters"][2]["checked"], true);
    assert_eq!(listing["filters"][0]["checked"], false);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn list_reads_registry_from_env() {
    let dir = unique_temp_dir("list-env");
    let path = write_registry(&dir, REGISTRY);

    let output = Command::new(env!("CARGO_BIN_EXE_netreg"))
        .env("NETREG_REGISTRY", &path)
        .args(["--format", "raw", "list"])
        .output()
        .expect("netreg should run");
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output).len(), 3);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn show_resolves_aliases() {
    let dir = unique_temp_dir("show");
    let path = write_registry(&dir, REGISTRY);

    let output = netreg(&["--format", "json", "show", path.to_str().unwrap(), "eth"]);
    assert!(output.status.success());
    let network: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(network["id"], "mainnet");
    assert_eq!(network["caip2Id"], "eip155:1");

    let output = netreg(&["--format", "pretty", "show", path.to_str().unwrap(), "sepolia"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Ethereum Sepolia Testnet (Sepolia)"));
    assert!(stdout.contains("testnetOf mainnet"));

    let output = netreg(&["show", path.to_str().unwrap(), "solana"]);
    assert_eq!(output.status.code(), Some(1));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn fmt_output_is_canonical() {
    let dir = unique_temp_dir("fmt");
    let path = write_registry(&dir, REGISTRY);
    let canonical = dir.join("canonical.json");

    let output = netreg(&["fmt", path.to_str().unwrap(), "--check"]);
    assert_eq!(output.status.code(), Some(1));

    let output = netreg(&[
        "fmt",
        path.to_str().unwrap(),
        "--output",
        canonical.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let output = netreg(&["fmt", canonical.to_str().unwrap(), "--check"]);
    assert!(output.status.success());

    let output = netreg(&["fmt", path.to_str().unwrap()]);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        std::fs::read_to_string(&canonical).unwrap()
    );

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn check_fails_on_duplicate_ids() {
    let dir = unique_temp_dir("check");
    let path = write_registry(&dir, REGISTRY);

    let output = netreg(&["--format", "raw", "check", path.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["pass"]);

    let duplicated = REGISTRY.replace("\"id\": \"btc\"", "\"id\": \"mainnet\"");
    let path = write_registry(&dir, &duplicated);
    let output = netreg(&["--format", "json", "check", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(30));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["overall"], "fail");
    assert_eq!(report["errors"], 1);
    assert_eq!(report["findings"][0]["severity"], "error");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn version_reports_package_version() {
    let output = netreg(&["version"]);
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![format!("netreg {}", env!("CARGO_PKG_VERSION"))]
    );
}

#[test]
fn extended_version_describes_accepted_values() {
    let output = netreg(&["--format", "json", "version", "--extended"]);
    assert!(output.status.success());

    let info: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(info["name"], "netreg");
    assert_eq!(info["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(info["jsonSchema"], true);
    assert_eq!(
        info["networkTypes"],
        serde_json::json!(["mainnet", "testnet", "devnet"])
    );
    assert_eq!(
        info["services"],
        serde_json::json!(["subgraphs", "sps", "firehose", "substreams"])
    );
    assert!(info["relationKinds"]
        .as_array()
        .unwrap()
        .contains(&serde_json::json!("testnetOf")));
}
