#[derive(Clone, Copy, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable summary
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}
