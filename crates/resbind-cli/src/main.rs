#![forbid(unsafe_code)]

use std::error::Error;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

type CliResult = Result<(), Box<dyn Error>>;

#[derive(Debug, Parser)]
#[command(
    name = "resbind",
    about = "Build-command synthesis for the R.swift resource generator"
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Synthesize the generator build command for a target
    Plan {
        /// Path to the JSON target descriptor from the host build system
        #[arg(long)]
        target: PathBuf,
        /// Path to a resbind.toml (defaults to ./resbind.toml if present)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Pretty-print the emitted command descriptors
        #[arg(long)]
        pretty: bool,
    },
    /// Check generator and environment setup
    Doctor,
    /// Remove a target's staged output directory
    Clean {
        /// Target name whose staged outputs should be removed
        #[arg(long)]
        name: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Plan {
            target,
            config,
            pretty,
        } => cmd_plan(&target, config, pretty),
        Command::Doctor => cmd_doctor(),
        Command::Clean { name } => cmd_clean(&name),
    };

    if let Err(msg) = result {
        eprintln!("error: {msg}");
        process::exit(1);
    }
}

fn load_config(explicit: Option<PathBuf>) -> Result<resbind_config::Config, Box<dyn Error>> {
    match explicit {
        Some(path) => Ok(resbind_config::Config::from_path(&path)?),
        None => {
            let cwd = std::env::current_dir()?;
            Ok(resbind_config::Config::load_or_default(&cwd)?)
        }
    }
}

fn cmd_plan(target: &Path, config: Option<PathBuf>, pretty: bool) -> CliResult {
    let descriptor = resbind_engine::TargetDescriptor::from_path(target)?;
    let config = load_config(config)?;
    let env = resbind_engine::snapshot();
    let temp_root = std::env::temp_dir();

    let commands = resbind_engine::plan(&descriptor, &config, &env, &temp_root)?;

    // The host build system consumes this on stdout; everything else in
    // this binary writes to stderr.
    let json = if pretty {
        serde_json::to_string_pretty(&commands)?
    } else {
        serde_json::to_string(&commands)?
    };
    println!("{json}");

    Ok(())
}

fn cmd_doctor() -> CliResult {
    eprintln!("Checking environment...");
    eprintln!();

    let mut issues = 0u32;

    // Check for resbind.toml in the current directory.
    let cwd = std::env::current_dir()?;
    let config = if cwd.join("resbind.toml").exists() {
        match resbind_config::Config::from_path(&cwd.join("resbind.toml")) {
            Ok(config) => {
                eprintln!("  [ok] resbind.toml found");
                config
            }
            Err(e) => {
                eprintln!("  [!!] resbind.toml: {e}");
                issues = issues.saturating_add(1);
                resbind_config::Config::default()
            }
        }
    } else {
        eprintln!("  [--] No resbind.toml in current directory (defaults apply)");
        resbind_config::Config::default()
    };

    // Check the generator.
    match resbind_rswift::detect_rswift(config.generator.path.as_deref()) {
        Ok(info) => {
            eprintln!(
                "  [ok] rswift: {} ({})",
                info.version,
                info.path.display()
            );
            let short = info.fingerprint.get(..12).unwrap_or(&info.fingerprint);
            eprintln!("  [ok] fingerprint: {short}");

            if let Some(pin) = &config.generator.version {
                match resbind_rswift::verify_version(&info, pin) {
                    Ok(()) => eprintln!("  [ok] version pin: {pin}"),
                    Err(e) => {
                        eprintln!("  [!!] version pin: {e}");
                        issues = issues.saturating_add(1);
                    }
                }
            }
        }
        Err(e) => {
            eprintln!("  [!!] rswift: {e}");
            issues = issues.saturating_add(1);
        }
    }

    // Report how an Xcode build would classify this environment.
    let env = resbind_engine::snapshot();
    if resbind_engine::is_xcode_cloud(&env) {
        eprintln!("  [--] Environment: Xcode Cloud sandbox — outputs stage under the temp area");
    } else {
        eprintln!("  [ok] Environment: local");
    }

    eprintln!();
    if issues > 0 {
        eprintln!("{issues} issue(s) found — fix them before building");
        Err(format!("{issues} issue(s) found").into())
    } else {
        eprintln!("All checks passed");
        Ok(())
    }
}

fn cmd_clean(name: &str) -> CliResult {
    let staged = std::env::temp_dir().join(name);
    resbind_util::fs::remove_dir_all_if_exists(&staged)?;

    eprintln!("    Cleaned staged outputs for `{name}`");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;
    use clap::Parser;

    // ── Subcommand parsing ─────────────────────────────────────────

    #[test]
    fn parse_plan_with_target() {
        let cli = Cli::try_parse_from(["resbind", "plan", "--target", "target.json"]).unwrap();
        match cli.command {
            Command::Plan {
                target,
                config,
                pretty,
            } => {
                assert_eq!(target, PathBuf::from("target.json"));
                assert!(config.is_none());
                assert!(!pretty);
            }
            other => panic!("expected Plan, got {other:?}"),
        }
    }

    #[test]
    fn parse_plan_all_flags() {
        let cli = Cli::try_parse_from([
            "resbind",
            "plan",
            "--target",
            "target.json",
            "--config",
            "resbind.toml",
            "--pretty",
        ])
        .unwrap();
        match cli.command {
            Command::Plan {
                target,
                config,
                pretty,
            } => {
                assert_eq!(target, PathBuf::from("target.json"));
                assert_eq!(config, Some(PathBuf::from("resbind.toml")));
                assert!(pretty);
            }
            other => panic!("expected Plan, got {other:?}"),
        }
    }

    #[test]
    fn parse_plan_flag_order_independent() {
        let cli = Cli::try_parse_from([
            "resbind",
            "plan",
            "--pretty",
            "--target",
            "target.json",
        ])
        .unwrap();
        match cli.command {
            Command::Plan { pretty, .. } => assert!(pretty),
            other => panic!("expected Plan, got {other:?}"),
        }
    }

    #[test]
    fn parse_doctor() {
        let cli = Cli::try_parse_from(["resbind", "doctor"]).unwrap();
        assert!(matches!(cli.command, Command::Doctor));
    }

    #[test]
    fn parse_clean_with_name() {
        let cli = Cli::try_parse_from(["resbind", "clean", "--name", "Foo"]).unwrap();
        match cli.command {
            Command::Clean { name } => assert_eq!(name, "Foo"),
            other => panic!("expected Clean, got {other:?}"),
        }
    }

    // ── Invalid arguments ──────────────────────────────────────────

    #[test]
    fn error_no_subcommand() {
        let err = Cli::try_parse_from(["resbind"]).unwrap_err();
        let expected = ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand;
        assert_eq!(err.kind(), expected);
    }

    #[test]
    fn error_unknown_subcommand() {
        let err = Cli::try_parse_from(["resbind", "build"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
    }

    #[test]
    fn error_plan_requires_target() {
        let err = Cli::try_parse_from(["resbind", "plan"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn error_clean_requires_name() {
        let err = Cli::try_parse_from(["resbind", "clean"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn error_unknown_flag_on_plan() {
        let err = Cli::try_parse_from([
            "resbind",
            "plan",
            "--target",
            "t.json",
            "--force",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        let msg = err.to_string();
        assert!(msg.contains("--force"));
        assert!(msg.contains("Usage:"));
    }

    #[test]
    fn error_doctor_takes_no_args() {
        let err = Cli::try_parse_from(["resbind", "doctor", "--fix"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    // ── Help and version output ────────────────────────────────────

    #[test]
    fn help_flag_on_root() {
        let err = Cli::try_parse_from(["resbind", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        let output = err.to_string();
        assert!(output.contains("Build-command synthesis"));
        assert!(output.contains("Commands:"));
        assert!(output.contains("plan"));
        assert!(output.contains("doctor"));
    }

    #[test]
    fn help_flag_on_plan() {
        let err = Cli::try_parse_from(["resbind", "plan", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn version_flag() {
        let err = Cli::try_parse_from(["resbind", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn root_help_render_includes_all_subcommands() {
        let mut cmd = Cli::command();
        let help = cmd.render_help().to_string();
        for subcommand in ["plan", "doctor", "clean"] {
            assert!(help.contains(subcommand));
        }
    }

    // ── End-to-end plan on a descriptor file ───────────────────────

    #[test]
    fn cmd_plan_skipped_target_prints_empty_plan() {
        // A binary package target produces an empty plan without needing a
        // generator installed; exercise the full file-in path.
        let tmp = tempfile::tempdir().unwrap();
        let descriptor_path = tmp.path().join("target.json");
        std::fs::write(
            &descriptor_path,
            r#"{ "context": "package", "target": { "name": "Prebuilt", "kind": "binary" } }"#,
        )
        .unwrap();
        let config_path = tmp.path().join("resbind.toml");
        std::fs::write(&config_path, "").unwrap();

        cmd_plan(&descriptor_path, Some(config_path), false).unwrap();
    }
}
