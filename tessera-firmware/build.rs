//! Build script for tessera-firmware
//!
//! - Sets up linker search paths for memory.x and the linker scripts
//! - Validates panel.toml at compile time
//! - Generates `panel_config.rs` with the validated values

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Accepted tick period range (µs)
const TICK_PERIOD_RANGE: (i64, i64) = (100, 100_000);

/// Accepted idle timeout range (s)
const IDLE_TIMEOUT_RANGE: (i64, i64) = (1, 3600);

fn main() {
    setup_linker();
    let settings = validate_config();
    generate_config(&settings);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validated panel settings
struct Settings {
    tick_period_us: u32,
    idle_timeout_ms: u32,
    drop_oldest: bool,
}

/// Validate panel.toml configuration at compile time
fn validate_config() -> Settings {
    // Re-run if panel.toml changes
    println!("cargo:rerun-if-changed=panel.toml");

    let config_path = Path::new("panel.toml");

    // Check if config file exists
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: panel.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a panel.toml configuration file.          ║\n\
            ║  Please create one in the tessera-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    // Read the config file
    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read panel.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in panel.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    let tick_period_us = validate_timing(&config, "tick_period_us", TICK_PERIOD_RANGE, &mut errors);
    let idle_timeout_s = validate_timing(&config, "idle_timeout_s", IDLE_TIMEOUT_RANGE, &mut errors);
    let drop_oldest = validate_queue(&config, &mut errors);

    // Idle threshold must be at least one tick
    if errors.is_empty() && idle_timeout_s * 1_000_000 < tick_period_us {
        errors.push("[timing] idle_timeout_s must be longer than one tick".to_string());
    }

    if !errors.is_empty() {
        fail("Invalid panel configuration", &errors);
    }

    println!("cargo:warning=panel.toml validated successfully");

    Settings {
        tick_period_us: tick_period_us as u32,
        idle_timeout_ms: (idle_timeout_s * 1000) as u32,
        drop_oldest,
    }
}

/// Read an integer from [timing] and check its range
fn validate_timing(
    config: &toml::Value,
    key: &str,
    (min, max): (i64, i64),
    errors: &mut Vec<String>,
) -> i64 {
    match config.get("timing").and_then(|t| t.get(key)) {
        Some(toml::Value::Integer(value)) if (min..=max).contains(value) => *value,
        Some(toml::Value::Integer(_)) => {
            errors.push(format!("[timing] {} must be {}-{}", key, min, max));
            0
        }
        Some(_) => {
            errors.push(format!("[timing] {} must be an integer", key));
            0
        }
        None => {
            errors.push(format!("[timing] missing '{}'", key));
            0
        }
    }
}

/// Validate the [queue] section; returns whether the policy is drop-oldest
fn validate_queue(config: &toml::Value, errors: &mut Vec<String>) -> bool {
    match config.get("queue").and_then(|q| q.get("overflow")) {
        None => false,
        Some(toml::Value::String(policy)) => match policy.as_str() {
            "reject-new" => false,
            "drop-oldest" => true,
            _ => {
                errors.push("[queue] overflow must be 'reject-new' or 'drop-oldest'".to_string());
                false
            }
        },
        Some(_) => {
            errors.push("[queue] overflow must be a string".to_string());
            false
        }
    }
}

/// Write the validated settings as Rust constants
fn generate_config(settings: &Settings) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("panel_config.rs")).unwrap();
    writeln!(f, "/// Tick period from panel.toml (µs)").unwrap();
    writeln!(f, "pub const TICK_PERIOD_US: u32 = {};", settings.tick_period_us).unwrap();
    writeln!(f, "/// Idle timeout from panel.toml (ms)").unwrap();
    writeln!(f, "pub const IDLE_TIMEOUT_MS: u32 = {};", settings.idle_timeout_ms).unwrap();
    writeln!(f, "/// Queue overflow policy from panel.toml").unwrap();
    writeln!(f, "pub const OVERFLOW_DROP_OLDEST: bool = {};", settings.drop_oldest).unwrap();
}

/// Abort the build with a boxed list of errors
fn fail(title: &str, errors: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
