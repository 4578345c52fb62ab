use super::types::PartialOptions;
use cssdts::ConfigOptions;

/// Resolve every option: command line first, then config, then default.
///
/// Lists and maps are taken whole from one source, never concatenated.
pub fn merge_options(cli: PartialOptions, config: PartialOptions) -> ConfigOptions {
    let defaults = ConfigOptions::default();

    ConfigOptions {
        name_format: cli
            .name_format
            .or(config.name_format)
            .map(|formats| formats.into_vec())
            .unwrap_or(defaults.name_format),
        export_type: cli
            .export_type
            .or(config.export_type)
            .unwrap_or(defaults.export_type),
        export_type_name: cli
            .export_type_name
            .or(config.export_type_name)
            .unwrap_or(defaults.export_type_name),
        export_type_interface: cli
            .export_type_interface
            .or(config.export_type_interface)
            .unwrap_or(defaults.export_type_interface),
        quote_type: cli
            .quote_type
            .or(config.quote_type)
            .unwrap_or(defaults.quote_type),
        banner: cli.banner.or(config.banner).unwrap_or(defaults.banner),
        allow_arbitrary_extensions: cli
            .allow_arbitrary_extensions
            .or(config.allow_arbitrary_extensions)
            .unwrap_or(defaults.allow_arbitrary_extensions),
        watch: cli.watch.or(config.watch).unwrap_or(defaults.watch),
        ignore_initial: cli
            .ignore_initial
            .or(config.ignore_initial)
            .unwrap_or(defaults.ignore_initial),
        list_different: cli
            .list_different
            .or(config.list_different)
            .unwrap_or(defaults.list_different),
        update_stale_only: cli
            .update_stale_only
            .or(config.update_stale_only)
            .unwrap_or(defaults.update_stale_only),
        output_folder: cli.output_folder.or(config.output_folder).or(defaults.output_folder),
        ignore: cli
            .ignore
            .or(config.ignore)
            .map(|globs| globs.into_vec())
            .unwrap_or(defaults.ignore),
        log_level: cli.log_level.or(config.log_level).unwrap_or(defaults.log_level),
        aliases: cli.aliases.or(config.aliases).unwrap_or(defaults.aliases),
        alias_prefixes: cli
            .alias_prefixes
            .or(config.alias_prefixes)
            .unwrap_or(defaults.alias_prefixes),
        include_paths: cli
            .include_paths
            .or(config.include_paths)
            .map(|paths| paths.into_vec())
            .unwrap_or(defaults.include_paths),
        additional_data: cli
            .additional_data
            .or(config.additional_data)
            .or(defaults.additional_data),
    }
}
