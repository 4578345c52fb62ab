use crate::cli::parse_type_name;
use crate::error::{ConfigError, Result};
use cssdts::ConfigOptions;

/// Reject option combinations the engine cannot honor.
pub fn validate(options: &ConfigOptions) -> Result<()> {
    if options.watch && options.list_different {
        return Err(ConfigError::ConflictingOptions(
            "--watch and --list-different".to_string(),
        )
        .into());
    }

    // Flags are checked by clap; these may come from a config file.
    for (field, value) in [
        ("exportTypeName", &options.export_type_name),
        ("exportTypeInterface", &options.export_type_interface),
    ] {
        if let Err(hint) = parse_type_name(value) {
            return Err(ConfigError::InvalidValue {
                field: field.to_string(),
                value: value.clone(),
                hint,
            }
            .into());
        }
    }

    if options.ignore_initial && !options.watch {
        tracing::debug!("ignoreInitial has no effect without watch");
    }

    Ok(())
}
