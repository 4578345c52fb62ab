#[cfg(test)]
mod tests {
    use crate::cli::validation::{parse_key_val, parse_type_name};
    use crate::cli::Cli;
    use clap::Parser;
    use cssdts::{ExportType, LogLevel, NameFormat, QuoteType};
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("cssdts").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_key_val() {
        assert_eq!(
            parse_key_val("~theme=theme"),
            Ok(("~theme".to_string(), "theme".to_string()))
        );
        assert_eq!(
            parse_key_val("a=b=c"),
            Ok(("a".to_string(), "b=c".to_string()))
        );
        assert_eq!(parse_key_val("@/="), Ok(("@/".to_string(), String::new())));
        assert!(parse_key_val("no-separator").is_err());
        assert!(parse_key_val("=value").is_err());
    }

    #[test]
    fn test_parse_type_name() {
        assert_eq!(parse_type_name("ClassNames"), Ok("ClassNames".to_string()));
        assert_eq!(parse_type_name("_Styles$2"), Ok("_Styles$2".to_string()));
        assert!(parse_type_name("").is_err());
        assert!(parse_type_name("2Styles").is_err());
        assert!(parse_type_name("class-names").is_err());
    }

    #[test]
    fn test_pattern_only_leaves_everything_unset() {
        let cli = parse(&["src/**/*.scss"]);
        assert_eq!(cli.pattern, "src/**/*.scss");
        assert!(cli.name_format.is_empty());
        assert_eq!(cli.export_type, None);
        assert_eq!(cli.watch, None);
        assert_eq!(cli.list_different, None);
        assert_eq!(cli.log_level, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_short_flags() {
        let cli = parse(&[
            "src", "-n", "kebab", "-n", "snake", "-e", "default", "-q", "double", "-w", "-u",
            "-o", "types", "-L", "info", "-i", "lib", "-a", "~theme=theme", "-d", "$c: red;",
            "-c", "custom.toml", "-v",
        ]);
        assert_eq!(cli.name_format, vec![NameFormat::Kebab, NameFormat::Snake]);
        assert_eq!(cli.export_type, Some(ExportType::Default));
        assert_eq!(cli.quote_type, Some(QuoteType::Double));
        assert_eq!(cli.watch, Some(true));
        assert_eq!(cli.update_stale_only, Some(true));
        assert_eq!(cli.output_folder, Some(PathBuf::from("types")));
        assert_eq!(cli.log_level, Some(LogLevel::Info));
        assert_eq!(cli.include_path, vec![PathBuf::from("lib")]);
        assert_eq!(cli.alias, vec![("~theme".to_string(), "theme".to_string())]);
        assert_eq!(cli.additional_data.as_deref(), Some("$c: red;"));
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_camel_case_aliases() {
        let cli = parse(&[
            "src",
            "--nameFormat",
            "all",
            "--exportType",
            "default",
            "--exportTypeName",
            "Names",
            "--listDifferent",
            "--aliasPrefix",
            "@/=src/",
        ]);
        assert_eq!(cli.name_format, vec![NameFormat::All]);
        assert_eq!(cli.export_type, Some(ExportType::Default));
        assert_eq!(cli.export_type_name.as_deref(), Some("Names"));
        assert_eq!(cli.list_different, Some(true));
        assert_eq!(cli.alias_prefix, vec![("@/".to_string(), "src/".to_string())]);
    }

    #[test]
    fn test_boolean_flag_does_not_swallow_pattern() {
        let cli = parse(&["--watch", "src/**/*.scss"]);
        assert_eq!(cli.watch, Some(true));
        assert_eq!(cli.pattern, "src/**/*.scss");
    }

    #[test]
    fn test_explicit_false() {
        let cli = parse(&["src", "--update-stale-only=false"]);
        assert_eq!(cli.update_stale_only, Some(false));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let bad = [
            vec!["src", "--name-format", "pascal"],
            vec!["src", "--export-type", "commonjs"],
            vec!["src", "--log-level", "debug"],
            vec!["src", "--export-type-name", "class-names"],
            vec!["src", "--alias", "novalue"],
        ];
        for args in bad {
            let argv = std::iter::once("cssdts").chain(args.iter().copied());
            assert!(Cli::try_parse_from(argv).is_err(), "accepted {:?}", args);
        }
    }

    #[test]
    fn test_pattern_is_required() {
        assert!(Cli::try_parse_from(["cssdts"]).is_err());
    }
}
