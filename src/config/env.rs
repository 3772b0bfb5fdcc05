//! Environment variable overrides.

use toml::{Table, Value};

/// Merges every `{prefix}{separator}...` variable into `table`.
///
/// `STOREFRONT__FORMAT__CURRENCY_SYMBOL=€` with prefix `STOREFRONT` and
/// separator `__` lands at `format.currency_symbol`. Variables are applied in
/// name order so nested overrides are deterministic. Variables that are not
/// valid UTF-8 are skipped.
pub(crate) fn load_env_vars(table: &mut Table, prefix: &str, separator: &str) {
    if separator.is_empty() {
        tracing::warn!(prefix, "ignoring environment overrides with an empty separator");
        return;
    }

    let prefix_with_sep = format!("{prefix}{separator}");
    let mut vars: Vec<(String, String)> = std::env::vars_os()
        .filter_map(|(key, value)| {
            let lossy_key = key.to_string_lossy();
            if !lossy_key.starts_with(&prefix_with_sep) {
                return None;
            }
            match (key.to_str(), value.to_str()) {
                (Some(key), Some(value)) => Some((key.to_string(), value.to_string())),
                _ => {
                    tracing::warn!(key = %lossy_key, "skipping environment override that is not valid UTF-8");
                    None
                }
            }
        })
        .collect();
    vars.sort();

    for (key, value) in vars {
        let path_str = &key[prefix_with_sep.len()..];
        if path_str.is_empty() {
            continue;
        }

        let path: Vec<String> = path_str
            .split(separator)
            .map(|s| s.to_lowercase())
            .collect();
        if path.iter().any(String::is_empty) {
            tracing::warn!(%key, "skipping environment override with an empty path segment");
            continue;
        }

        tracing::trace!(%key, path = %path.join("."), "applying environment override");
        insert_at_path(table, &path, coerce_value(&value));
    }
}

fn insert_at_path(table: &mut Table, path: &[String], value: Value) {
    let Some((first, rest)) = path.split_first() else {
        return;
    };

    if rest.is_empty() {
        table.insert(first.clone(), value);
        return;
    }

    if !matches!(table.get(first), Some(Value::Table(_))) {
        table.insert(first.clone(), Value::Table(Table::new()));
    }

    if let Some(Value::Table(nested)) = table.get_mut(first) {
        insert_at_path(nested, rest, value);
    }
}

fn coerce_value(s: &str) -> Value {
    if s.eq_ignore_ascii_case("true") {
        return Value::Boolean(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return Value::Boolean(false);
    }

    if looks_like_integer(s) {
        if let Ok(i) = s.parse::<i64>() {
            return Value::Integer(i);
        }
    }

    if s.contains('.') {
        if let Ok(f) = s.parse::<f64>() {
            return Value::Float(f);
        }
    }

    Value::String(s.to_string())
}

fn looks_like_integer(s: &str) -> bool {
    let s = s.strip_prefix('-').unwrap_or(s);
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_value() {
        assert_eq!(coerce_value("TRUE"), Value::Boolean(true));
        assert_eq!(coerce_value("false"), Value::Boolean(false));
        assert_eq!(coerce_value("-12"), Value::Integer(-12));
        assert_eq!(coerce_value("2.5"), Value::Float(2.5));
        assert_eq!(coerce_value("€"), Value::String("€".into()));
        assert_eq!(coerce_value("-"), Value::String("-".into()));
    }

    #[test]
    fn test_load_env_vars_nested() {
        std::env::set_var("SFK_ENV_TEST_A__FORMAT__CURRENCY_SYMBOL", "€");
        std::env::set_var("SFK_ENV_TEST_A__FORMAT__DECIMALS", "3");
        std::env::set_var("SFK_ENV_TEST_A__DEVTOOLS__ENABLED", "false");

        let mut table: Table = toml::from_str("[format]\ndecimals = 2\n").unwrap();
        load_env_vars(&mut table, "SFK_ENV_TEST_A", "__");

        assert_eq!(table["format"]["currency_symbol"].as_str(), Some("€"));
        assert_eq!(table["format"]["decimals"].as_integer(), Some(3));
        assert_eq!(table["devtools"]["enabled"].as_bool(), Some(false));
    }

    #[test]
    fn test_load_env_vars_ignores_other_prefixes() {
        std::env::set_var("SFK_ENV_TEST_B_OTHER__UI__PRIMARY", "red");

        let mut table = Table::new();
        load_env_vars(&mut table, "SFK_ENV_TEST_B", "__");

        assert!(table.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_load_env_vars_skips_non_utf8_variables() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        std::env::set_var("SFK_ENV_TEST_D_UNRELATED", OsStr::from_bytes(b"\xff\xfe"));
        std::env::set_var("SFK_ENV_TEST_D__UI__GRAY", OsStr::from_bytes(b"\xff"));
        std::env::set_var("SFK_ENV_TEST_D__UI__PRIMARY", "amber");

        let mut table = Table::new();
        load_env_vars(&mut table, "SFK_ENV_TEST_D", "__");

        assert_eq!(table["ui"]["primary"].as_str(), Some("amber"));
        assert!(table["ui"].get("gray").is_none());
    }

    #[test]
    fn test_load_env_vars_replaces_scalar_with_table() {
        std::env::set_var("SFK_ENV_TEST_C__UI__PRIMARY", "blue");

        let mut table: Table = toml::from_str("ui = \"flat\"\n").unwrap();
        load_env_vars(&mut table, "SFK_ENV_TEST_C", "__");

        assert_eq!(table["ui"]["primary"].as_str(), Some("blue"));
    }
}
