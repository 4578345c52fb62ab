use super::types::{OneOrMany, PartialOptions};
use crate::cli::Cli;

/// Repeatable flags that were never given stay `None`.
fn non_empty<T>(items: Vec<T>) -> Option<OneOrMany<T>> {
    (!items.is_empty()).then(|| items.into())
}

impl From<&Cli> for PartialOptions {
    fn from(cli: &Cli) -> Self {
        let pairs = |pairs: &[(String, String)]| {
            (!pairs.is_empty()).then(|| pairs.iter().cloned().collect())
        };

        Self {
            name_format: non_empty(cli.name_format.clone()),
            export_type: cli.export_type,
            export_type_name: cli.export_type_name.clone(),
            export_type_interface: cli.export_type_interface.clone(),
            quote_type: cli.quote_type,
            banner: cli.banner.clone(),
            allow_arbitrary_extensions: cli.allow_arbitrary_extensions,
            watch: cli.watch,
            ignore_initial: cli.ignore_initial,
            list_different: cli.list_different,
            update_stale_only: cli.update_stale_only,
            output_folder: cli.output_folder.clone(),
            ignore: non_empty(cli.ignore.clone()),
            log_level: cli.log_level,
            aliases: pairs(&cli.alias),
            alias_prefixes: pairs(&cli.alias_prefix),
            include_paths: non_empty(cli.include_path.clone()),
            additional_data: cli.additional_data.clone(),
        }
    }
}
