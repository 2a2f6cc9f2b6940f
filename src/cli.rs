use std::path::PathBuf;

use clap::Parser;

/// Requesting metadata and sampleinfo datasets from the sampleinfo service and exporting
/// them as csv or json, either to the console or into a file.
#[derive(Parser)]
#[clap(version)]
pub(crate) struct Cli {
  /// Type of data to be requested. Expected values:
  /// `metadata_stats` (no parameters) lists the available metadata datasets,
  /// `sampleinfo_stats` (no parameters) lists the available sampleinfo datasets,
  /// `metadata` (requires --study_id or --center_id) returns the metadata of a study, or of
  /// the default study of a center,
  /// `sampleinfo` (requires --center_ids, optionally --dataset_type_id) returns the sampleinfo
  /// dataset of the given centers.
  #[clap(long, short, default_value = "metadata_stats")]
  pub(crate) data_type: String,
  /// Study id of the requested metadata. Takes precedence over --center_id.
  #[clap(long = "study_id", short = 's', visible_alias = "study-id", default_value = "")]
  pub(crate) study_id: String,
  /// Center id of the requested metadata. Ignored when --study_id is given.
  #[clap(long = "center_id", short = 'c', visible_alias = "center-id", default_value = "")]
  pub(crate) center_id: String,
  /// Center ids of the requested sampleinfo dataset; multiple comma delimited values can be
  /// provided.
  #[clap(long = "center_ids", short = 'C', visible_alias = "center-ids", default_value = "")]
  pub(crate) center_ids: String,
  /// Dataset type id of the requested sampleinfo dataset. If omitted, the server uses the
  /// default `manifest` type (1).
  #[clap(
    long = "dataset_type_id",
    short = 't',
    visible_alias = "dataset-type-id",
    default_value = ""
  )]
  pub(crate) dataset_type_id: String,
  /// Path of the file to store the result in. Csv output replaces the file, json output is
  /// appended to it. Without it the result is printed.
  #[clap(long, short)]
  pub(crate) out_file: Option<PathBuf>,
  /// Format of the output: `csv` (comma delimited) or `json`.
  #[clap(long, short = 'f', default_value = "csv")]
  pub(crate) output_format: String,
  /// Root url of the sampleinfo service.
  #[clap(long, env = "SAMPLEINFO_CLI_URL")]
  pub(crate) server_url: Option<String>,
}
