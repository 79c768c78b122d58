//! Build script for uvbox-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Parses and validates machine.toml at compile time
//! - Generates the embedded configuration constants

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use uvbox_core::config::MachineConfig;

fn main() {
    setup_linker();
    let config = load_config();
    generate_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = out_dir();

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

fn out_dir() -> PathBuf {
    PathBuf::from(env::var("OUT_DIR").unwrap())
}

/// Read, parse and validate machine.toml
fn load_config() -> MachineConfig {
    // Re-run if machine.toml changes
    println!("cargo:rerun-if-changed=machine.toml");

    let config_path = Path::new("machine.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: machine.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a machine.toml configuration file.        ║\n\
            ║  Please create one in the uvbox-firmware directory.              ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read machine.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: MachineConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid machine.toml                                     ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid configuration in machine.toml                    ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&format!("• {}", e))
        );
    }

    println!("cargo:warning=machine.toml validated successfully");
    config
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the validated configuration as Rust constants
fn generate_config(config: &MachineConfig) {
    let presets = config
        .presets
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let safety = &config.safety;

    let source = format!(
        "// Generated from machine.toml by build.rs\n\
        \n\
        /// Control cycle period (ms)\n\
        pub const CYCLE_MS: u16 = {cycle_ms};\n\
        \n\
        /// Exposure presets (seconds)\n\
        pub const PRESETS_S: &[u16] = &[{presets}];\n\
        \n\
        /// Settings at boot\n\
        pub const SAFETY: SafetyConfig = SafetyConfig {{\n\
        \x20   lid_required: {lid},\n\
        \x20   temperature_limit_c: {limit},\n\
        \x20   fan_policy: FanPolicy::{fan:?},\n\
        \x20   buzzer_pattern: BuzzerPattern::{buzzer:?},\n\
        }};\n",
        cycle_ms = config.cycle_ms,
        presets = presets,
        lid = safety.lid_required,
        limit = safety.temperature_limit_c,
        fan = safety.fan_policy,
        buzzer = safety.buzzer_pattern,
    );

    let path = out_dir().join("machine_config.rs");
    fs::write(&path, source).unwrap();
}
