//! CLI route: single route table and run context. Dispatches to domain services and presentation.

use crate::config::{ConfigLoader, SynthConfig};
use crate::error::SynthError;
use crate::mutate::{MutationPlan, Mutator};
use crate::progress::{Reporter, TracingReporter};
use crate::snapshot::Snapshot;
use crate::spec::{parse_date, DateRange, DatasetSpec, SizeGauge, SizeValue, SpecFile};
use crate::tree::builder::{BuildOptions, DatasetBuilder};
use crate::tree::walker::Scanner;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use crate::cli::parse::{BuildArgs, Commands};
use crate::cli::presentation::{
    format_build_summary, format_estimate, format_mutation_report, format_scan_summary,
    format_scan_table,
};

/// Runtime context for CLI execution: effective config, seed and progress sink.
pub struct RunContext {
    config: SynthConfig,
    seed: Option<u64>,
    reporter: Arc<dyn Reporter>,
}

impl RunContext {
    /// Create run context from an optional config path. Uses ConfigLoader only.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, SynthError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => {
                let cwd = std::env::current_dir().map_err(|e| SynthError::io(".", e))?;
                ConfigLoader::load(&cwd)?
            }
        };
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: SynthConfig) -> Self {
        let seed = config.build.seed;
        Self {
            config,
            seed,
            reporter: Arc::new(TracingReporter),
        }
    }

    /// Override the configured seed; `None` keeps it.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    /// Execute a command and return its rendered output.
    pub fn execute(&self, command: &Commands) -> Result<String, SynthError> {
        match command {
            Commands::Build(args) => self.handle_build(args),
            Commands::Scan {
                root,
                output,
                pretty,
                format,
            } => self.handle_scan(root, output.as_deref(), *pretty, format),
            Commands::Mutate {
                root,
                perc_files,
                perc_data,
                backdate,
                snapshot,
            } => self.handle_mutate(
                root,
                *perc_files,
                *perc_data,
                backdate.as_deref(),
                snapshot.as_deref(),
            ),
            Commands::Config => self.config.to_toml(),
        }
    }

    fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => {
                debug!(seed, "Using seeded random source");
                SmallRng::seed_from_u64(seed)
            }
            None => SmallRng::from_entropy(),
        }
    }

    fn handle_build(&self, args: &BuildArgs) -> Result<String, SynthError> {
        let spec = self.resolve_spec(args)?;
        let date_range = match (&args.min_date, &args.max_date) {
            (Some(min), Some(max)) => {
                Some(DateRange::from_dates(parse_date(min)?, parse_date(max)?)?)
            }
            (None, None) => None,
            _ => {
                return Err(SynthError::InvalidSpec(
                    "--min-date and --max-date must be given together".to_string(),
                ))
            }
        };
        let options = BuildOptions {
            estimate_only: args.estimate,
            fill_to_max: args.fill,
            date_range,
            write_chunk_size: self.config.build.write_chunk_size,
        };

        let mut builder = DatasetBuilder::new(args.root.clone(), spec)
            .with_options(options)
            .with_reporter(Arc::clone(&self.reporter));
        let report = builder.build(&mut self.rng())?;
        info!(
            total_size = report.total_size,
            file_count = report.file_count,
            estimate_only = report.estimate_only,
            "Build command finished"
        );

        if args.estimate {
            Ok(format_estimate(&report))
        } else {
            Ok(format_build_summary(&report))
        }
    }

    /// Merge the spec file with inline flags, inline flags winning.
    ///
    /// A gauge comes from `--gauge`, else from the config's default gauge
    /// when no file size bound was given anywhere.
    fn resolve_spec(&self, args: &BuildArgs) -> Result<DatasetSpec, SynthError> {
        let mut raw = match args.spec {
            Some(ref path) => SpecFile::from_path(path)?,
            None => SpecFile::default(),
        };
        if args.width.is_some() {
            raw.folders_width = args.width;
        }
        if args.depth.is_some() {
            raw.folders_depth = args.depth;
        }
        if args.max_files.is_some() {
            raw.max_files_per_dir = args.max_files;
        }
        if let Some(ref min) = args.min_size {
            raw.min_file_size = Some(SizeValue::Text(min.clone()));
        }
        if let Some(ref max) = args.max_size {
            raw.max_file_size = Some(SizeValue::Text(max.clone()));
        }

        let gauge = match args.gauge {
            Some(ref name) => Some(name.parse::<SizeGauge>()?),
            None if raw.min_file_size.is_none() && raw.max_file_size.is_none() => {
                self.config.build.default_gauge
            }
            None => None,
        };
        DatasetSpec::resolve(&raw, gauge)
    }

    fn handle_scan(
        &self,
        root: &Path,
        output: Option<&Path>,
        pretty: bool,
        format: &str,
    ) -> Result<String, SynthError> {
        if format != "text" && format != "json" {
            return Err(SynthError::ConfigError(format!(
                "Invalid output format: {} (must be 'text' or 'json')",
                format
            )));
        }
        let snapshot = Scanner::new(root)?
            .with_placeholder(self.config.scan.placeholder.clone())
            .scan()?;
        if let Some(path) = output {
            snapshot.save(path)?;
            info!(path = %path.display(), "Snapshot saved");
        }

        if format == "json" {
            return serde_json::to_string_pretty(&snapshot).map_err(SynthError::from);
        }
        let summary = snapshot.summary();
        if pretty {
            Ok(format_scan_table(&summary))
        } else {
            Ok(format_scan_summary(&summary, output))
        }
    }

    fn handle_mutate(
        &self,
        root: &Path,
        perc_files: u32,
        perc_data: u32,
        backdate: Option<&str>,
        snapshot_path: Option<&Path>,
    ) -> Result<String, SynthError> {
        let mut plan = MutationPlan::new(perc_files, perc_data)?;
        if let Some(date) = backdate {
            let day = parse_date(date)?;
            plan = plan.with_backdate(day.and_time(chrono::NaiveTime::MIN).and_utc());
        }

        let snapshot = match snapshot_path {
            Some(path) => Snapshot::load(path)?,
            None => Scanner::new(root)?
                .with_placeholder(self.config.scan.placeholder.clone())
                .scan()?,
        };
        let report = Mutator::new(plan)
            .with_reporter(Arc::clone(&self.reporter))
            .with_write_chunk_size(self.config.build.write_chunk_size)
            .apply(&snapshot, root, &mut self.rng())?;
        Ok(format_mutation_report(&report))
    }
}
