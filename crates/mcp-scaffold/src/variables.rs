//! Template variable handling
//!
//! Provides variable substitution using {{PLACEHOLDER}} syntax.
//! Placeholders are upper-case; unknown ones are left untouched.

use chrono::Local;
use regex::Regex;
use scaffold_core::{format, Config};
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{Result, ScaffoldError};

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\{\{([A-Z_][A-Z0-9_]*)\}\}").expect("placeholder pattern compiles")
    })
}

fn is_variable_name(key: &str) -> bool {
    let mut chars = key.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase() || c == '_')
        && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// Template variables container
#[derive(Debug, Clone)]
pub struct Variables {
    /// Variable name -> value mapping
    vars: HashMap<String, String>,
}

impl Variables {
    /// Create a new Variables container with the standard variables populated
    pub fn new(project_name: &str, config: &Config) -> Self {
        let mut vars = HashMap::new();
        let now = Local::now();

        vars.insert("NAME".to_string(), project_name.to_string());
        vars.insert("PROJECT_DIR".to_string(), project_name.to_string());
        vars.insert("TITLE".to_string(), format::display_title(project_name));
        vars.insert("DESCRIPTION".to_string(), config.description.clone());
        vars.insert("AUTHOR".to_string(), config.author.clone());
        vars.insert("LICENSE".to_string(), config.license.clone());
        vars.insert("VERSION".to_string(), config.version.clone());
        vars.insert("MCP_VERSION".to_string(), config.mcp_version.clone());
        vars.insert("HOST".to_string(), config.server.host.clone());
        vars.insert("PORT".to_string(), config.server.port.to_string());
        vars.insert("ENDPOINT".to_string(), config.server.endpoint());
        vars.insert("CORS_ORIGINS".to_string(), Self::cors_list(config));
        vars.insert("DATE".to_string(), now.format("%Y-%m-%d").to_string());
        vars.insert("YEAR".to_string(), now.format("%Y").to_string());

        Self { vars }
    }

    /// Markdown bullet list of the allowed CORS origins
    fn cors_list(config: &Config) -> String {
        let server = &config.server;
        if !server.cors_enabled || server.cors_origins.is_empty() {
            return "- none (CORS is disabled in `fastmcp.json`)".to_string();
        }

        server
            .cors_origins
            .iter()
            .map(|origin| {
                if origin.client.is_empty() {
                    format!("- `{}`", origin.url)
                } else {
                    format!("- {}: `{}`", origin.client, origin.url)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Set a variable value
    pub fn set(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_uppercase(), value.to_string());
    }

    /// Get a variable value
    pub fn get(&self, key: &str) -> Option<&String> {
        self.vars.get(&key.to_uppercase())
    }

    /// Parse KEY=VALUE strings and add them as variables
    pub fn add_from_pairs(&mut self, pairs: &[String]) -> Result<()> {
        for pair in pairs {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| ScaffoldError::InvalidVariable(pair.clone()))?;

            let key = key.trim().to_uppercase();
            if !is_variable_name(&key) {
                return Err(ScaffoldError::InvalidVariable(pair.clone()));
            }
            self.set(&key, value.trim());
        }
        Ok(())
    }

    /// Replace all {{PLACEHOLDER}} patterns in a string
    pub fn substitute(&self, content: &str) -> String {
        placeholder_re()
            .replace_all(content, |caps: &regex::Captures| {
                let key = &caps[1];
                self.vars
                    .get(key)
                    .cloned()
                    .unwrap_or_else(|| format!("{{{{{}}}}}", key))
            })
            .to_string()
    }

    /// Find all variables used in a string
    pub fn find_used_variables(content: &str) -> Vec<String> {
        let mut vars: Vec<String> = placeholder_re()
            .captures_iter(content)
            .map(|cap| cap[1].to_string())
            .collect();

        vars.sort();
        vars.dedup();
        vars
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scaffold_core::CorsOrigin;

    #[test]
    fn test_substitute_basic() {
        let mut vars = Variables::new("my_server", &Config::default());
        vars.set("CUSTOM", "custom_value");

        let input = "Project: {{NAME}} ({{TITLE}}), Custom: {{CUSTOM}}";
        let output = vars.substitute(input);

        assert_eq!(output, "Project: my_server (My Server), Custom: custom_value");
    }

    #[test]
    fn test_substitute_missing_var() {
        let vars = Variables::new("test", &Config::default());

        let output = vars.substitute("Value: {{UNKNOWN}}");

        // Unknown variables should be left as-is
        assert_eq!(output, "Value: {{UNKNOWN}}");
    }

    #[test]
    fn test_single_braces_untouched() {
        let vars = Variables::new("test", &Config::default());
        let input = r#"json={"a": a, "b": b} and f"{host}:{port}""#;
        assert_eq!(vars.substitute(input), input);
    }

    #[test]
    fn test_server_variables_follow_config() {
        let mut config = Config::default();
        config.server.host = "0.0.0.0".to_string();
        config.server.port = 9100;

        let vars = Variables::new("test", &config);
        assert_eq!(vars.get("HOST"), Some(&"0.0.0.0".to_string()));
        assert_eq!(vars.get("port"), Some(&"9100".to_string()));
        assert_eq!(
            vars.get("ENDPOINT"),
            Some(&"http://0.0.0.0:9100/mcp".to_string())
        );
    }

    #[test]
    fn test_cors_list() {
        let mut config = Config::default();
        let vars = Variables::new("test", &config);
        let list = vars.get("CORS_ORIGINS").unwrap();
        assert_eq!(list.lines().count(), 5);
        assert!(list.starts_with("- React: `http://localhost:3000`"));

        config.server.cors_origins = vec![CorsOrigin::new("", "https://app.example.com")];
        let vars = Variables::new("test", &config);
        assert_eq!(
            vars.get("CORS_ORIGINS"),
            Some(&"- `https://app.example.com`".to_string())
        );

        config.server.cors_enabled = false;
        let vars = Variables::new("test", &config);
        assert!(vars.get("CORS_ORIGINS").unwrap().contains("disabled"));
    }

    #[test]
    fn test_find_used_variables() {
        let content = "Name: {{NAME}}, Port: {{PORT}}, Name again: {{NAME}}";
        let vars = Variables::find_used_variables(content);

        assert_eq!(vars, vec!["NAME".to_string(), "PORT".to_string()]);
    }

    #[test]
    fn test_add_from_pairs() {
        let mut vars = Variables::new("test", &Config::default());
        vars.add_from_pairs(&["foo=bar".to_string(), "BAZ = qux".to_string()])
            .unwrap();

        assert_eq!(vars.get("FOO"), Some(&"bar".to_string()));
        assert_eq!(vars.get("BAZ"), Some(&"qux".to_string()));
    }

    #[test]
    fn test_add_from_pairs_rejects_malformed() {
        let mut vars = Variables::new("test", &Config::default());
        assert!(matches!(
            vars.add_from_pairs(&["NOEQUALS".to_string()]),
            Err(ScaffoldError::InvalidVariable(_))
        ));
        assert!(matches!(
            vars.add_from_pairs(&["9LIVES=cat".to_string()]),
            Err(ScaffoldError::InvalidVariable(_))
        ));
    }
}
