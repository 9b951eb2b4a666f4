use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use libgraphql_validation::Diagnostic;
use libgraphql_validation::Pipeline;
use libgraphql_validation::PipelineOptions;
use libgraphql_validation::Schema;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;
use walkdir::WalkDir;

#[derive(Clone, Copy, Debug, Default, PartialEq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    Json,
    #[default]
    Text,
}

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_value_t=OutputFormat::Text,
        help="How to print the diagnostics that were found.",
        long,
        value_enum,
    )]
    format: OutputFormat,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Name of the operation to treat as the current operation in \
             documents that define more than one.",
        long,
    )]
    operation_name: Option<String>,

    #[arg(
        help="Path to the schema (SDL) file to validate documents against.",
        long,
        required=true,
    )]
    schema: PathBuf,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be validated.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// A diagnostic along with the file it was found in.
#[derive(Debug, serde::Serialize)]
pub(crate) struct FileDiagnostic<'a> {
    pub path: &'a Path,

    #[serde(flatten)]
    pub diagnostic: &'a Diagnostic,
}
impl std::fmt::Display for FileDiagnostic<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.diagnostic.locations().first() {
            Some(loc) => write!(f, "{}:{loc}: {}", self.path.display(), self.diagnostic),
            None => write!(f, "{}: {}", self.path.display(), self.diagnostic),
        }
    }
}

impl ValidateCmd {
    /// Finds all GraphQL files recursively located at or under each path
    /// passed as an arg.
    fn collect_file_paths(&self) -> anyhow::Result<Vec<PathBuf>> {
        let graphql_file_exts: HashSet<&str> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.'))
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = entry?;
                let path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {path:#?}.");
                    continue;
                }

                let has_graphql_ext =
                    path.extension()
                        .map(|ext| ext.to_string_lossy())
                        .is_some_and(|ext| graphql_file_exts.contains(ext.as_ref()));
                if has_graphql_ext {
                    log::trace!("Found GraphQL file at {path:#?}.");
                    file_paths.push(std::fs::canonicalize(path)?);
                }
            }
        }

        // If the user specifies a single file path as an argument, presume the
        // user explicitly wants that file validated as a GraphQL document even
        // if its file extension doesn't match one of `graphql_file_exts`.
        if file_paths.is_empty()
            && let [first_arg_path] = self.file_or_dir_paths.as_slice()
            && first_arg_path.is_file() {
            let canonicalized_first_arg_path = std::fs::canonicalize(first_arg_path)?;
            log::warn!(
                "Proceeding to validate {canonicalized_first_arg_path:#?} even \
                though it doesn't match any of the --graphql-file-exts \
                ({}).",
                self.graphql_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(canonicalized_first_arg_path);
        }

        Ok(file_paths)
    }

    fn pipeline_options(&self) -> PipelineOptions {
        match &self.operation_name {
            Some(operation_name) =>
                PipelineOptions::default().with_operation_name(operation_name),
            None => PipelineOptions::default(),
        }
    }
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let schema_sdl = match tokio::fs::read_to_string(&self.schema).await {
            Ok(sdl) => sdl,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Failed to read schema file {:#?}: {e}",
                output_utils::RED_X,
                self.schema,
            )),
        };
        let schema = match Schema::parse(&schema_sdl) {
            Ok(schema) => schema,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {}: {e}",
                output_utils::RED_X,
                self.schema.display(),
            )),
        };
        log::debug!(
            "Loaded a schema with {} types from {:#?}.",
            schema.type_names().count(),
            self.schema,
        );

        let file_paths = match self.collect_file_paths() {
            Ok(file_paths) => file_paths,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Failed to collect GraphQL files: {e:#}",
                output_utils::RED_X,
            )),
        };
        log::debug!(
            "Found {} GraphQL files to be validated.",
            file_paths.len(),
        );

        let pipeline = Pipeline::for_document(&schema, self.pipeline_options());
        let mut blueprints = Vec::with_capacity(file_paths.len());
        for path in &file_paths {
            let source = match tokio::fs::read_to_string(path).await {
                Ok(source) => source,
                Err(e) => return CommandResult::stderr(format_args!(
                    "{} Failed to read {path:#?}: {e}",
                    output_utils::RED_X,
                )),
            };
            log::trace!("Validating {path:#?}...");
            blueprints.push(pipeline.run(&source).into_blueprint());
        }

        let mut diagnostics = vec![];
        for (path, blueprint) in file_paths.iter().zip(&blueprints) {
            blueprint.root().prewalk(&mut |node| {
                diagnostics.extend(node.errors().iter().map(|diagnostic| FileDiagnostic {
                    path: path.as_path(),
                    diagnostic,
                }));
            });
        }

        match self.format {
            OutputFormat::Json => match serde_json::to_string_pretty(&diagnostics) {
                Ok(json) if diagnostics.is_empty() =>
                    CommandResult::stdout(format_args!("{json}")),
                Ok(json) =>
                    CommandResult::stdout(format_args!("{json}"))
                        .with_exit_code(ExitCode::FAILURE),
                Err(e) => CommandResult::stderr(format_args!(
                    "{} Failed to serialize diagnostics: {e}",
                    output_utils::RED_X,
                )),
            },

            OutputFormat::Text if diagnostics.is_empty() => CommandResult::stdout(format_args!(
                "{} All GraphQL validated successfully:\n  * Validated {} files.",
                output_utils::GREEN_CHECK,
                file_paths.len(),
            )),

            OutputFormat::Text => CommandResult::stdout(format_args!(
                "{}\n\n{} Found {} GraphQL validation errors.",
                diagnostics.iter()
                    .map(|diagnostic| diagnostic.to_string())
                    .collect::<Vec<_>>()
                    .join("\n"),
                output_utils::RED_X,
                diagnostics.len(),
            )).with_exit_code(ExitCode::FAILURE),
        }
    }
}
