use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version, about = "Balanced k-means via network-simplex assignment", long_about = None)]
pub struct Cli {
    /// Input point-matrix file: one point per line, comma or whitespace
    /// separated, no header.
    pub input: String,

    /// Number of clusters.
    #[arg(short = 'k', long = "clusters")]
    pub clusters: usize,

    /// Clustering variant.
    #[arg(short = 't', long = "type", value_enum, default_value_t = RunType::Hard)]
    pub run_type: RunType,

    /// Initialization method.
    #[arg(short = 'i', long = "init", value_enum, default_value_t = InitArg::Forgy)]
    pub init: InitArg,

    /// Disable warm-starting the simplex across outer iterations. Ignored by lasso.
    #[arg(long = "no-warm-start")]
    pub no_warm_start: bool,

    /// Worker threads for the cost-matrix builder; -1 or "auto" means hardware concurrency.
    #[arg(short = 'j', long = "threads", default_value = "1")]
    pub threads: String,

    /// RNG seed.
    #[arg(short = 's', long = "seed", default_value_t = 0)]
    pub seed: u64,

    /// Size-penalty coefficient; used when type is soft or lasso.
    #[arg(short = 'l', long = "lambda", default_value_t = 0.0)]
    pub lambda: f64,

    /// Number of independent runs. Run i uses seed + i - 1.
    #[arg(short = 'r', long = "runs", default_value_t = 1)]
    pub runs: u64,

    /// Lower bound on cluster size. Hard variant only; requires --upper.
    #[arg(long = "lower")]
    pub lower: Option<usize>,

    /// Upper bound on cluster size. Hard variant only; requires --lower.
    #[arg(long = "upper")]
    pub upper: Option<usize>,

    /// Assignment output path; defaults to "<input>.assignment.csv".
    #[arg(short = 'a', long = "assignment")]
    pub assignment: Option<String>,

    /// Cluster-center output path; defaults to "<input>.centers.csv".
    #[arg(short = 'c', long = "centers")]
    pub centers: Option<String>,

    /// Append-only run summary path.
    #[arg(short = 'o', long = "summary", default_value = "summary.csv")]
    pub summary: String,

    /// Logging verbosity.
    #[arg(long = "log-level", default_value = "info")]
    pub log_level: tracing::Level,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunType {
    Hard,
    Soft,
    Lasso,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitArg {
    Forgy,
    Rp,
}

impl From<InitArg> for bkc_core::InitMethod {
    fn from(value: InitArg) -> Self {
        match value {
            InitArg::Forgy => bkc_core::InitMethod::Forgy,
            InitArg::Rp => bkc_core::InitMethod::RandomPartition,
        }
    }
}
