use super::*;

mod test_helpers {
    use super::*;

    pub(super) fn parse_args(argv: &[&str]) -> Args {
        Args::try_parse_from(argv)
            .unwrap_or_else(|err| panic!("argv={argv:?} should parse successfully: {err}"))
    }

    pub(super) fn assert_optional_flag_value(
        actual: Option<&str>,
        expected: Option<&str>,
        flag_name: &str,
        argv: &[&str],
    ) {
        assert_eq!(
            actual, expected,
            "unexpected value for {flag_name} when parsing argv={argv:?}"
        );
    }
}

use test_helpers::{assert_optional_flag_value, parse_args};

#[test]
fn test_no_subcommand_defaults_to_chat() {
    let args = parse_args(&["insight-scout"]);
    assert!(args.command.is_none());
    assert!(args.responder.is_none());
    assert!(args.log.is_none());
}

#[test]
fn test_responder_flag_parsing() {
    let cases: [(&[&str], Option<ResponderKind>); 4] = [
        (&["insight-scout", "--responder", "webhook"], Some(ResponderKind::Webhook)),
        (&["insight-scout", "-r", "simulated"], Some(ResponderKind::Simulated)),
        (&["insight-scout", "chat", "-r", "local"], Some(ResponderKind::Simulated)),
        (&["insight-scout"], None),
    ];

    for (argv, expected) in cases {
        let args = parse_args(argv);
        assert_eq!(args.responder, expected, "argv={argv:?}");
    }
}

#[test]
fn test_unknown_responder_is_rejected() {
    assert!(Args::try_parse_from(["insight-scout", "--responder", "pigeon"]).is_err());
}

#[test]
fn test_endpoint_flag_parsing() {
    let cases: [(&[&str], Option<&str>); 3] = [
        (
            &["insight-scout", "--endpoint", "https://hooks.example.com/a"],
            Some("https://hooks.example.com/a"),
        ),
        (
            &["insight-scout", "-e", "http://localhost:5678", "say", "hi"],
            Some("http://localhost:5678"),
        ),
        (&["insight-scout"], None),
    ];

    for (argv, expected) in cases {
        let args = parse_args(argv);
        assert_optional_flag_value(args.endpoint.as_deref(), expected, "endpoint", argv);
    }
}

#[test]
fn test_log_flag_with_subcommand() {
    let args = parse_args(&["insight-scout", "onboard", "-l", "transcript.log"]);
    assert!(matches!(args.command, Some(Commands::Onboard)));
    assert_eq!(args.log, Some(PathBuf::from("transcript.log")));
}

#[test]
fn test_say_collects_prompt_words() {
    let args = parse_args(&["insight-scout", "say", "what", "is", "-trending", "now?"]);
    match args.command {
        Some(Commands::Say { prompt }) => {
            assert_eq!(prompt, vec!["what", "is", "-trending", "now?"]);
        }
        _ => panic!("expected say subcommand"),
    }
}

#[test]
fn test_dashboard_section_parsing() {
    let args = parse_args(&["insight-scout", "dashboard", "pain-points"]);
    assert!(matches!(
        args.command,
        Some(Commands::Dashboard {
            section: Some(DashboardSection::PainPoints)
        })
    ));

    let args = parse_args(&["insight-scout", "dashboard"]);
    assert!(matches!(
        args.command,
        Some(Commands::Dashboard { section: None })
    ));

    assert!(Args::try_parse_from(["insight-scout", "dashboard", "charts"]).is_err());
}

#[test]
fn test_set_and_unset_parsing() {
    let args = parse_args(&["insight-scout", "set", "log-level", "insight_scout=debug"]);
    match args.command {
        Some(Commands::Set { key, value }) => {
            assert_eq!(key.as_deref(), Some("log-level"));
            assert_eq!(value, Some(vec!["insight_scout=debug".to_string()]));
        }
        _ => panic!("expected set subcommand"),
    }

    let args = parse_args(&["insight-scout", "set"]);
    assert!(matches!(
        args.command,
        Some(Commands::Set {
            key: None,
            value: None
        })
    ));

    let args = parse_args(&["insight-scout", "unset", "endpoint"]);
    assert!(matches!(args.command, Some(Commands::Unset { key }) if key == "endpoint"));
}
