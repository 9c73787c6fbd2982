//! Library integration tests.

use devstrap::DevstrapError;
use std::path::PathBuf;

#[test]
fn error_types_are_public() {
    let err = DevstrapError::ConfigNotFound {
        path: PathBuf::from("custom.yml"),
    };
    assert!(err.to_string().contains("custom.yml"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> devstrap::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use devstrap::cli::{ActionPlan, Cli};
    use clap::Parser;

    let cli = Cli::parse_from(["devstrap", "--health", "--port", "8000"]);
    let plan = ActionPlan::from_cli(&cli, 3000);
    assert!(plan.health);
    assert!(!plan.setup);
    assert_eq!(plan.port, 8000);
}

#[test]
fn ui_types_are_public() {
    use devstrap::ui::{MockUI, OutputMode, UserInterface};

    let mut ui = MockUI::with_mode(OutputMode::Quiet);
    ui.error("boom");
    assert_eq!(ui.output_mode(), OutputMode::Quiet);
    assert!(ui.has_error("boom"));
}

#[test]
fn platform_is_detected() {
    use devstrap::detection::Platform;

    let name = Platform::detect().name();
    assert!(["Windows", "macOS", "Linux", "Unknown"].contains(&name));
}
