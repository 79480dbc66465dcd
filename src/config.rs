use clap::{Args, Parser, ValueEnum};
use ipnetwork::IpNetwork;

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Which store and notifier implementation to wire in
    #[arg(long, env = "FOLIO_BACKEND", value_enum, default_value_t = Backend::Aws)]
    pub backend: Backend,

    #[command(flatten)]
    pub server: ServerConfig,

    #[command(flatten)]
    pub cors: CorsConfig,

    #[command(flatten)]
    pub aws: AwsConfig,

    #[command(flatten)]
    pub telemetry: TelemetryConfig,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// `DynamoDB` table plus SNS topic
    #[default]
    Aws,
    /// Process-local store and notifier, for local runs
    Memory,
}

#[derive(Clone, Debug, Args)]
pub struct ServerConfig {
    /// Host to listen on when running outside Lambda
    #[arg(long, env = "FOLIO_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on when running outside Lambda
    #[arg(long, env = "FOLIO_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Path the contact form posts to
    #[arg(long, env = "FOLIO_ROUTE_PATH", default_value = "/contact")]
    pub route_path: String,

    /// Maximum accepted request body size in bytes
    #[arg(long, env = "FOLIO_MAX_BODY_BYTES", default_value_t = 65_536)]
    pub max_body_bytes: usize,

    /// Comma-separated list of CIDRs to trust for X-Forwarded-For IP extraction
    #[arg(
        long,
        env = "FOLIO_TRUSTED_PROXIES",
        default_value = "10.0.0.0/8,172.16.0.0/12,192.168.0.0/16,127.0.0.1/32",
        value_delimiter = ','
    )]
    pub trusted_proxies: Vec<IpNetwork>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            route_path: "/contact".to_string(),
            max_body_bytes: 65_536,
            trusted_proxies: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct CorsConfig {
    /// Origin allowed to post to the contact endpoint
    #[arg(long, env = "ALLOWED_ORIGIN")]
    pub allowed_origin: String,
}

#[derive(Clone, Debug, Default, Args)]
pub struct AwsConfig {
    /// `DynamoDB` table submissions are written to
    #[arg(long, env = "DYNAMODB_TABLE_NAME")]
    pub table_name: Option<String>,

    /// SNS topic new submissions are announced on
    #[arg(long, env = "SNS_TOPIC_ARN")]
    pub topic_arn: Option<String>,

    /// AWS region, defaults to the provider chain's region
    #[arg(long, env = "FOLIO_AWS_REGION")]
    pub region: Option<String>,

    /// Custom AWS endpoint (useful for LocalStack)
    #[arg(long, env = "FOLIO_AWS_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Static access key, used together with the secret key
    #[arg(long, env = "FOLIO_AWS_ACCESS_KEY")]
    pub access_key: Option<String>,

    /// Static secret key, used together with the access key
    #[arg(long, env = "FOLIO_AWS_SECRET_KEY")]
    pub secret_key: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, Default, Args)]
pub struct TelemetryConfig {
    /// Log output format
    #[arg(long, env = "FOLIO_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// OTLP collector base URL; telemetry export is disabled when unset
    #[arg(long, env = "FOLIO_OTLP_ENDPOINT")]
    pub otlp_endpoint: Option<String>,
}

impl Config {
    #[must_use]
    pub fn load() -> Self {
        Self::parse()
    }
}
