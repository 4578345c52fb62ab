/// Parse a `KEY=VALUE` pair for alias options.
///
/// Only the first `=` separates; the value may contain more. The key must
/// not be empty.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    if key.is_empty() {
        return Err(format!("alias key cannot be empty: '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Validate a TypeScript type name for `--export-type-name` and
/// `--export-type-interface`.
///
/// - Must start with a letter, underscore, or dollar sign
/// - Can contain letters, numbers, underscores, or dollar signs
/// - Cannot be empty
pub fn parse_type_name(s: &str) -> Result<String, String> {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return Err("Type name cannot be empty".to_string());
    };

    if !first.is_alphabetic() && first != '_' && first != '$' {
        return Err(format!(
            "Type name must start with a letter, underscore, or dollar sign: '{}'",
            s
        ));
    }

    if chars.any(|c| !c.is_alphanumeric() && c != '_' && c != '$') {
        return Err(format!(
            "Type name can only contain letters, numbers, underscores, or dollar signs: '{}'",
            s
        ));
    }

    Ok(s.to_string())
}
