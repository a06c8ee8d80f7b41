//! Tests for the currency-lookup commands

use clap::Parser;
use interface_cli::{run, Cli, CliError, Command};
use test_utils::{RegistryFixtures, TestCurrencyProvider};

fn execute(command: Command, json: bool) -> Result<String, CliError> {
    let registry = RegistryFixtures::test_only();
    let mut out = Vec::new();
    run(&command, json, &registry, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

mod parsing {
    use super::*;

    #[test]
    fn test_parse_code_command() {
        let cli = Cli::try_parse_from(["currency-lookup", "code", "CHF", "EUR"]).unwrap();
        assert!(!cli.json);
        assert!(matches!(cli.command, Command::Code { codes } if codes == vec!["CHF", "EUR"]));
    }

    #[test]
    fn test_code_command_requires_a_code() {
        assert!(Cli::try_parse_from(["currency-lookup", "code"]).is_err());
    }

    #[test]
    fn test_parse_context_rate_types_are_comma_delimited() {
        let cli = Cli::try_parse_from([
            "currency-lookup",
            "--json",
            "context",
            "--provider",
            "ECB",
            "--rate-type",
            "deferred,historic",
        ])
        .unwrap();

        assert!(cli.json);
        match cli.command {
            Command::Context { provider, rate_types } => {
                assert_eq!(provider.as_deref(), Some("ECB"));
                assert_eq!(rate_types.unwrap(), vec!["deferred", "historic"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}

mod lookups {
    use super::*;

    #[test]
    fn test_code_prints_tab_separated_row() {
        let output = execute(
            Command::Code {
                codes: vec![TestCurrencyProvider::CODE.to_string()],
            },
            false,
        )
        .unwrap();

        assert_eq!(output, "test1\t001\t2\ttest\n");
    }

    #[test]
    fn test_unknown_code_fails_with_exit_code_one() {
        let err = execute(
            Command::Code {
                codes: vec!["test1".to_string(), "USD".to_string()],
            },
            false,
        )
        .unwrap_err();

        assert!(err.to_string().contains("USD"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_locale_matches_region() {
        let output = execute(
            Command::Locale {
                locale: "_TEST1L".to_string(),
            },
            false,
        )
        .unwrap();

        assert!(output.starts_with("TEST1L\t"));
    }

    #[test]
    fn test_unknown_locale_prints_nothing() {
        let output = execute(
            Command::Locale {
                locale: "zh_CN".to_string(),
            },
            false,
        )
        .unwrap();

        assert!(output.is_empty());
    }

    #[test]
    fn test_malformed_locale_fails_with_exit_code_two() {
        let err = execute(
            Command::Locale {
                locale: "de_CH_variant".to_string(),
            },
            false,
        )
        .unwrap_err();

        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_list_as_json() {
        let output = execute(Command::List, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value[0]["code"], "test1");
        assert_eq!(value[0]["numeric_code"], 1);
        assert_eq!(value[0]["provider"], "test");
    }

    #[test]
    fn test_providers_in_chain_order() {
        assert_eq!(execute(Command::Providers, false).unwrap(), "test\n");
    }
}

mod context {
    use super::*;

    #[test]
    fn test_context_prints_display_form() {
        let output = execute(
            Command::Context {
                provider: Some("ECB".to_string()),
                rate_types: Some(vec!["historic".to_string(), "deferred".to_string()]),
            },
            false,
        )
        .unwrap();

        assert_eq!(output, "ProviderContext[provider=ECB, rateTypes=[DEFERRED, HISTORIC]]\n");
    }

    #[test]
    fn test_context_as_json() {
        let output = execute(
            Command::Context {
                provider: Some("ECB".to_string()),
                rate_types: Some(vec!["realtime".to_string()]),
            },
            true,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["provider"], "ECB");
        assert_eq!(value["rate_types"], serde_json::json!(["REALTIME"]));
    }

    #[test]
    fn test_missing_provider_is_an_argument_error() {
        let err = execute(
            Command::Context {
                provider: None,
                rate_types: Some(vec!["deferred".to_string()]),
            },
            false,
        )
        .unwrap_err();

        assert!(matches!(err, CliError::Core(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_missing_rate_types_is_an_argument_error() {
        let err = execute(
            Command::Context {
                provider: Some("ECB".to_string()),
                rate_types: None,
            },
            false,
        )
        .unwrap_err();

        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_unknown_rate_type_is_rejected() {
        let err = execute(
            Command::Context {
                provider: Some("ECB".to_string()),
                rate_types: Some(vec!["sometimes".to_string()]),
            },
            false,
        )
        .unwrap_err();

        assert!(matches!(err, CliError::RateType(_)));
        assert_eq!(err.exit_code(), 2);
    }
}
