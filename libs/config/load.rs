use std::collections::HashMap;
use std::path::Path;

use crate::credentials::{Credentials, ANON_KEY, SERVICE_ROLE_KEY, URL_KEY};

/// Parse a `KEY=VALUE` per-line env file. Lines without a `=` are
/// skipped; keys and values are trimmed and surrounding quotes on the
/// value are stripped.
pub fn parse_env_file(content: &str) -> HashMap<String, String> {
    let mut values = HashMap::new();

    for line in content.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        let key = key.trim();
        if key.is_empty() {
            continue;
        }

        let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
        values.insert(key.to_string(), value.to_string());
    }

    values
}

/// Load credentials from the given env files, earlier paths taking
/// precedence. Process environment variables override file values, the
/// same way the web app's own tooling resolves them.
pub fn load_from(paths: &[&Path]) -> eyre::Result<Credentials> {
    load_from_with(paths, |key| std::env::var(key).ok())
}

fn load_from_with(
    paths: &[&Path],
    env: impl Fn(&str) -> Option<String>,
) -> eyre::Result<Credentials> {
    let mut file_values: HashMap<String, String> = HashMap::new();

    for path in paths {
        if let Some(content) = read_file_content_if_exist(path)? {
            for (key, value) in parse_env_file(&content) {
                file_values.entry(key).or_insert(value);
            }
        }
    }

    resolve_credentials(|key| env(key).or_else(|| file_values.get(key).cloned()))
}

/// Load credentials from `.env.local` then `.env` in the working
/// directory, falling back to process environment variables.
pub fn load() -> eyre::Result<Credentials> {
    load_from(&[Path::new(".env.local"), Path::new(".env")])
}

/// Build credentials from any key lookup. Both required values must be
/// present; this is checked before any network handle is opened.
pub(crate) fn resolve_credentials(
    lookup: impl Fn(&str) -> Option<String>,
) -> eyre::Result<Credentials> {
    let url = lookup(URL_KEY)
        .ok_or_else(|| eyre::eyre!("missing backend credential '{URL_KEY}'"))?;
    let anon_key = lookup(ANON_KEY)
        .ok_or_else(|| eyre::eyre!("missing backend credential '{ANON_KEY}'"))?;

    Ok(Credentials {
        url,
        anon_key,
        service_role_key: lookup(SERVICE_ROLE_KEY),
    })
}

fn read_file_content_if_exist(path: &Path) -> eyre::Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)?;
    Ok(Some(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_key_value_lines() {
        let parsed = parse_env_file(
            "NEXT_PUBLIC_SUPABASE_URL=https://example.supabase.co\n\
             \n\
             NEXT_PUBLIC_SUPABASE_ANON_KEY=\"sb_publishable_abc\"\n\
             not a key value line\n\
             SUPABASE_SERVICE_ROLE_KEY='sb_secret_def'  \n",
        );

        assert_eq!(
            parsed.get(URL_KEY).map(String::as_str),
            Some("https://example.supabase.co")
        );
        assert_eq!(
            parsed.get(ANON_KEY).map(String::as_str),
            Some("sb_publishable_abc")
        );
        assert_eq!(
            parsed.get(SERVICE_ROLE_KEY).map(String::as_str),
            Some("sb_secret_def")
        );
        assert_eq!(parsed.len(), 3);
    }

    #[test]
    fn resolves_when_both_required_keys_present() {
        let credentials = resolve_credentials(|key| match key {
            URL_KEY => Some("https://example.supabase.co".to_string()),
            ANON_KEY => Some("anon".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(credentials.url, "https://example.supabase.co");
        assert_eq!(credentials.anon_key, "anon");
        assert_eq!(credentials.service_role_key, None);
        assert_eq!(credentials.admin_key(), "anon");
    }

    #[test]
    fn admin_key_prefers_service_role() {
        let credentials = resolve_credentials(|key| match key {
            URL_KEY => Some("https://example.supabase.co".to_string()),
            ANON_KEY => Some("anon".to_string()),
            SERVICE_ROLE_KEY => Some("service".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(credentials.admin_key(), "service");
    }

    #[test]
    fn fails_without_url() {
        let result = resolve_credentials(|key| match key {
            ANON_KEY => Some("anon".to_string()),
            _ => None,
        });

        let message = result.unwrap_err().to_string();
        assert!(message.contains(URL_KEY));
    }

    #[test]
    fn fails_without_anon_key() {
        let result = resolve_credentials(|key| match key {
            URL_KEY => Some("https://example.supabase.co".to_string()),
            _ => None,
        });

        let message = result.unwrap_err().to_string();
        assert!(message.contains(ANON_KEY));
    }

    #[test]
    fn earlier_env_file_wins_over_later() {
        let dir = tempfile::tempdir().unwrap();

        let local = dir.path().join(".env.local");
        let mut file = std::fs::File::create(&local).unwrap();
        writeln!(file, "NEXT_PUBLIC_SUPABASE_URL=https://local.supabase.co").unwrap();
        writeln!(file, "NEXT_PUBLIC_SUPABASE_ANON_KEY=local-anon").unwrap();

        let shared = dir.path().join(".env");
        let mut file = std::fs::File::create(&shared).unwrap();
        writeln!(file, "NEXT_PUBLIC_SUPABASE_URL=https://shared.supabase.co").unwrap();

        let credentials =
            load_from_with(&[local.as_path(), shared.as_path()], |_| None).unwrap();
        assert_eq!(credentials.url, "https://local.supabase.co");
        assert_eq!(credentials.anon_key, "local-anon");
    }

    #[test]
    fn environment_overrides_file_values() {
        let dir = tempfile::tempdir().unwrap();

        let local = dir.path().join(".env.local");
        let mut file = std::fs::File::create(&local).unwrap();
        writeln!(file, "NEXT_PUBLIC_SUPABASE_URL=https://file.supabase.co").unwrap();
        writeln!(file, "NEXT_PUBLIC_SUPABASE_ANON_KEY=file-anon").unwrap();

        let credentials = load_from_with(&[local.as_path()], |key| match key {
            URL_KEY => Some("https://env.supabase.co".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(credentials.url, "https://env.supabase.co");
        assert_eq!(credentials.anon_key, "file-anon");
    }
}
