use clap::Parser;
use color_eyre::eyre::Result;
use scm_metadata::{
    compute_properties, init_logging, parse_level, sorted_entries, InspectorRegistry, LogConfig,
    MetadataError, RemoteMetadata, ScmConnection,
};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use tracing::debug;

const TYPE_AUTO: &str = "auto";
const TYPE_NONE: &str = "none";

/// Computes source-control metadata (revision, branch, dirty state, remote
/// path segments) and prints it as named build properties.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// SCM connection string, e.g. "scm:git:https://example.com/org/repo.git"
    #[arg(short, long, env = "SCM_METADATA_CONNECTION")]
    connection: Option<String>,

    /// Directory to start the repository search in; parent directories are
    /// checked until a repository is discovered
    #[arg(short, long, env = "SCM_METADATA_DIRECTORY", default_value = ".")]
    directory: PathBuf,

    /// SCM implementation: "auto" derives it from the connection string,
    /// "none" disables metadata generation, any other value names a provider
    #[arg(long = "type", env = "SCM_METADATA_TYPE", default_value = TYPE_AUTO)]
    scm_type: String,

    /// Skip metadata generation entirely
    #[arg(long, default_value = "false")]
    skip: bool,

    /// Prefix applied to every property name before rename lookup
    #[arg(long, env = "SCM_METADATA_PREFIX", default_value = "scm.metadata.")]
    prefix: String,

    /// Maximum length of the derived short revision
    #[arg(long, env = "SCM_METADATA_SHORT_REVISION_LENGTH", default_value = "7")]
    short_revision_length: usize,

    /// Comma-separated remote path segment notations: NONE, ARRAY, PROPERTY
    #[arg(long, env = "SCM_METADATA_NOTATION", default_value = "")]
    notation: String,

    /// Rename a computed property, as <prefixed-name>=<replacement>; repeatable
    #[arg(long, value_parser = parse_rename)]
    rename: Vec<(String, String)>,

    /// Print a JSON report (metadata and properties) instead of key=value lines
    #[arg(long, default_value = "false")]
    json: bool,

    /// Enable JSON log format
    #[arg(long, env = "SCM_METADATA_LOG_JSON", default_value = "false")]
    log_json: bool,

    /// Default log level when RUST_LOG is not set
    #[arg(long, env = "SCM_METADATA_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

fn parse_rename(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .ok_or_else(|| format!("expected <prefixed-name>=<replacement>, got \"{raw}\""))
}

#[derive(Serialize)]
struct MetadataReport<'a> {
    metadata: &'a RemoteMetadata,
    properties: BTreeMap<&'a str, &'a str>,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&LogConfig {
        log_level: parse_level(&args.log_level),
        json_format: args.log_json,
    })?;

    if args.skip {
        debug!("skip requested, not computing SCM metadata");
        return Ok(());
    }

    if args.scm_type.eq_ignore_ascii_case(TYPE_NONE) {
        debug!("type set to \"{}\", not computing SCM metadata", args.scm_type);
        return Ok(());
    }

    let raw = args.connection.as_deref().ok_or_else(|| {
        MetadataError::MalformedConnectionString("connection string is absent".to_string())
    })?;
    let connection = ScmConnection::parse(raw)?;

    let provider = if args.scm_type.eq_ignore_ascii_case(TYPE_AUTO) {
        connection.provider().to_string()
    } else {
        args.scm_type.clone()
    };
    debug!("resolving metadata through SCM provider \"{provider}\"");

    let registry = InspectorRegistry::default();
    let metadata = registry.resolve(&provider, &args.directory, connection.specific_part())?;

    let rename: HashMap<String, String> = args.rename.iter().cloned().collect();
    let properties = compute_properties(
        raw,
        args.short_revision_length,
        &args.notation,
        &args.prefix,
        &rename,
        &metadata,
    )?;

    if args.json {
        let report = MetadataReport {
            metadata: &metadata,
            properties: sorted_entries(&properties).into_iter().collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for (key, value) in sorted_entries(&properties) {
            println!("{key}={value}");
        }
    }

    Ok(())
}
