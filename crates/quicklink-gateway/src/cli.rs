use clap::{Parser, ValueEnum};
use quicklink_registry::{
    CustomCodePolicy, ExpiryPolicy, RegistrySettings, DEFAULT_VALIDITY_MINUTES,
};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "QUICKLINK_LISTEN_ADDR";
pub const PUBLIC_BASE_URL_ENV: &str = "QUICKLINK_PUBLIC_BASE_URL";
pub const DEFAULT_VALIDITY_ENV: &str = "QUICKLINK_DEFAULT_VALIDITY_MINUTES";
pub const MAX_BATCH_SIZE_ENV: &str = "QUICKLINK_MAX_BATCH_SIZE";
pub const CUSTOM_CODES_ENV: &str = "QUICKLINK_CUSTOM_CODES";
pub const EXPIRY_ENV: &str = "QUICKLINK_EXPIRY";
pub const GENERATOR_ENV: &str = "QUICKLINK_GENERATOR";
pub const GENERATOR_PREFIX_ENV: &str = "QUICKLINK_GENERATOR_PREFIX";
pub const LOG_FORMAT_ENV: &str = "QUICKLINK_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_GENERATOR_PREFIX: &str = "ql";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CustomCodesArg {
    /// Accept custom codes as given
    #[value(name = "verbatim")]
    Verbatim,
    /// Validate custom codes and reject duplicates
    #[value(name = "checked")]
    Checked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExpiryArg {
    /// Expired codes keep redirecting
    #[value(name = "lenient")]
    Lenient,
    /// Expired codes redirect home
    #[value(name = "strict")]
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GeneratorArg {
    #[value(name = "random")]
    Random,
    #[value(name = "sequential")]
    Sequential,
}

impl Display for GeneratorArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorArg::Random => write!(f, "random"),
            GeneratorArg::Sequential => write!(f, "sequential"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "pretty")]
    Pretty,
    #[value(name = "json")]
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "quicklink-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Base used to build the short URLs returned to clients
    #[arg(long, env = PUBLIC_BASE_URL_ENV, default_value = DEFAULT_PUBLIC_BASE_URL)]
    pub public_base_url: String,

    #[arg(long, env = DEFAULT_VALIDITY_ENV, default_value_t = DEFAULT_VALIDITY_MINUTES)]
    pub default_validity_minutes: u32,

    #[arg(
        long,
        env = MAX_BATCH_SIZE_ENV,
        default_value_t = crate::state::DEFAULT_MAX_BATCH_SIZE,
    )]
    pub max_batch_size: usize,

    #[arg(long, env = CUSTOM_CODES_ENV, value_enum, default_value_t = CustomCodesArg::Verbatim)]
    pub custom_codes: CustomCodesArg,

    #[arg(long, env = EXPIRY_ENV, value_enum, default_value_t = ExpiryArg::Lenient)]
    pub expiry: ExpiryArg,

    #[arg(long, env = GENERATOR_ENV, value_enum, default_value_t = GeneratorArg::Random)]
    pub generator: GeneratorArg,

    /// Prefix for the sequential generator
    #[arg(long, env = GENERATOR_PREFIX_ENV, default_value = DEFAULT_GENERATOR_PREFIX)]
    pub generator_prefix: String,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormatArg::Pretty)]
    pub log_format: LogFormatArg,
}

impl CLI {
    pub fn registry_settings(&self) -> RegistrySettings {
        RegistrySettings::builder()
            .default_validity_minutes(self.default_validity_minutes)
            .custom_codes(match self.custom_codes {
                CustomCodesArg::Verbatim => CustomCodePolicy::Verbatim,
                CustomCodesArg::Checked => CustomCodePolicy::Checked,
            })
            .expiry(match self.expiry {
                ExpiryArg::Lenient => ExpiryPolicy::Lenient,
                ExpiryArg::Strict => ExpiryPolicy::Strict,
            })
            .build()
    }
}
