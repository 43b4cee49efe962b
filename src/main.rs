use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dialpad::config::Config;
use dialpad::resource::{
    execute_action, get_all_resource_keys, get_resource, Action, ActionRequest,
};
use dialpad::{DialpadClient, Error};
use serde_json::{Map, Value};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Command line client for the Dialpad API
#[derive(Parser, Debug)]
#[command(name = "dialpad", version, about, long_about = None)]
struct Args {
    /// API base URL (overrides DIALPAD_API_BASE_URL and the config file)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Bearer token (overrides DIALPAD_API_TOKEN and the config file)
    #[arg(long, global = true)]
    token: Option<String>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off", global = true)]
    log_level: LogLevel,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json", global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List one page of a resource
    List {
        resource: String,
        /// Cursor from a previous page
        #[arg(long)]
        cursor: Option<String>,
        /// Query parameter, repeatable: --param state=active
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// Retrieve one entity by id
    Get { resource: String, id: String },
    /// Create an entity from a JSON body (or @file)
    Create { resource: String, body: String },
    /// Update an entity from a JSON body (or @file)
    Update {
        resource: String,
        id: String,
        body: String,
    },
    /// Delete an entity by id
    Delete { resource: String, id: String },
    /// Hang up an active call
    Hangup { id: String },
    /// Create or replace a contact keyed by its uid
    Upsert { body: String },
    /// Show the available resources and their actions
    Resources,
    /// Persist connection settings to the config file
    Configure {
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn as_filter(self) -> Option<&'static str> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some("error"),
            LogLevel::Warn => Some("warn"),
            LogLevel::Info => Some("info"),
            LogLevel::Debug => Some("debug"),
            LogLevel::Trace => Some("trace"),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.to_string()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| format!("expected key=value, got {:?}", s))
}

fn setup_logging(level: LogLevel) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(filter) = level.as_filter() else {
        return Ok(None);
    };

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {:?}", log_path))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("dialpad started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Ok(Some(guard))
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("dialpad").join("dialpad.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".dialpad").join("dialpad.log");
    }
    PathBuf::from("dialpad.log")
}

/// Parse a JSON body argument; `@path` reads the body from a file
fn parse_body(arg: &str) -> Result<Value> {
    let content = match arg.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read body file {:?}", path))?,
        None => arg.to_string(),
    };

    let body: Value = serde_json::from_str(&content).context("Body is not valid JSON")?;
    if !body.is_object() {
        bail!("Body must be a JSON object");
    }
    Ok(body)
}

/// User-facing message for a library error
fn describe_error(error: &Error) -> String {
    match error.status() {
        Some(401) => format!("{} (authentication failed, check DIALPAD_API_TOKEN)", error),
        Some(403) => format!("{} (permission denied for this token)", error),
        Some(404) => format!("{} (resource not found)", error),
        Some(429) => format!("{} (rate limit exceeded, try again later)", error),
        _ => error.to_string(),
    }
}

fn print_value(value: &Value, format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    println!("{}", rendered.trim_end());
    Ok(())
}

fn print_resources() {
    for key in get_all_resource_keys() {
        let Some(def) = get_resource(key) else {
            continue;
        };
        let actions: Vec<&str> = def.actions.iter().map(|a| a.as_str()).collect();
        println!("{:<16} {:<28} {}", key, def.display_name, actions.join(", "));
    }
}

/// Resolve a command to (resource key, action, request)
fn build_request(command: Command) -> Result<(String, Action, ActionRequest)> {
    let mut request = ActionRequest::default();

    let (resource, action) = match command {
        Command::List {
            resource,
            cursor,
            params,
        } => {
            let mut query: Map<String, Value> = Map::new();
            for (key, value) in params {
                query.insert(key, Value::String(value));
            }
            if let Some(cursor) = cursor {
                query.insert("cursor".to_string(), Value::String(cursor));
            }
            request.params = Value::Object(query);
            (resource, Action::List)
        },
        Command::Get { resource, id } => {
            request.id = Some(id);
            (resource, Action::Get)
        },
        Command::Create { resource, body } => {
            request.body = parse_body(&body)?;
            (resource, Action::Create)
        },
        Command::Update { resource, id, body } => {
            request.id = Some(id);
            request.body = parse_body(&body)?;
            (resource, Action::Update)
        },
        Command::Delete { resource, id } => {
            request.id = Some(id);
            (resource, Action::Delete)
        },
        Command::Hangup { id } => {
            request.id = Some(id);
            ("calls".to_string(), Action::Hangup)
        },
        Command::Upsert { body } => {
            request.body = parse_body(&body)?;
            ("contacts".to_string(), Action::Upsert)
        },
        Command::Resources | Command::Configure { .. } => {
            bail!("not a resource action")
        },
    };

    let Some(def) = get_resource(&resource) else {
        bail!(
            "Unknown resource {:?}. Available: {}",
            resource,
            get_all_resource_keys().join(", ")
        );
    };
    if !def.supports(action) {
        bail!("{} does not support {}", def.display_name, action);
    }

    Ok((resource, action, request))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level)?;

    let mut config = Config::load();

    match args.command {
        Command::Resources => {
            print_resources();
            return Ok(());
        },
        Command::Configure { timeout_secs } => {
            if let Some(base_url) = &args.base_url {
                config.base_url = Some(base_url.clone());
            }
            if let Some(token) = &args.token {
                config.token = Some(token.clone());
            }
            if timeout_secs.is_some() {
                config.timeout_secs = timeout_secs;
            }
            config.save().context("Failed to save configuration")?;
            if let Some(path) = Config::config_path() {
                println!("Saved {}", path.display());
            }
            return Ok(());
        },
        _ => {},
    }

    let client_config = config.client_config(args.base_url.as_deref(), args.token.as_deref());
    tracing::info!("Using {:?}", client_config);
    let client = DialpadClient::new(client_config).context("Failed to create Dialpad client")?;

    let (resource, action, request) = build_request(args.command)?;

    match execute_action(&client, &resource, action, request).await {
        Ok(value) => print_value(&value, args.output),
        Err(e) => bail!(describe_error(&e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_param() {
        assert_eq!(
            parse_param("state=active"),
            Ok(("state".to_string(), "active".to_string()))
        );
        assert_eq!(
            parse_param("q=a=b"),
            Ok(("q".to_string(), "a=b".to_string()))
        );
        assert!(parse_param("novalue").is_err());
        assert!(parse_param("=x").is_err());
    }

    #[test]
    fn test_parse_body_requires_object() {
        assert!(parse_body(r#"{"name": "x"}"#).is_ok());
        assert!(parse_body("[1, 2]").is_err());
        assert!(parse_body("not json").is_err());
    }

    #[test]
    fn test_build_request_rejects_unsupported_action() {
        let err = build_request(Command::Delete {
            resource: "calls".to_string(),
            id: "1".to_string(),
        })
        .unwrap_err();
        assert!(err.to_string().contains("does not support delete"));
    }

    #[test]
    fn test_build_request_list_params() {
        let (resource, action, request) = build_request(Command::List {
            resource: "users".to_string(),
            cursor: Some("abc".to_string()),
            params: vec![("state".to_string(), "active".to_string())],
        })
        .unwrap();
        assert_eq!(resource, "users");
        assert_eq!(action, Action::List);
        assert_eq!(request.params["cursor"], "abc");
        assert_eq!(request.params["state"], "active");
    }

    #[test]
    fn test_describe_error_adds_hint() {
        let err = Error::Api {
            status: 401,
            body: "Unauthorized".to_string(),
        };
        assert!(describe_error(&err).starts_with("401 - Unauthorized"));
    }

    #[test]
    fn test_cli_parses() {
        let args = Args::parse_from(["dialpad", "--output", "yaml", "get", "users", "42"]);
        assert!(matches!(args.output, OutputFormat::Yaml));
        assert!(matches!(args.command, Command::Get { .. }));
    }
}
