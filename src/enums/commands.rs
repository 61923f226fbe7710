use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Create a sample configuration file
    Init,
    /// Analyze every changed file of a pull request
    AnalyzePr {
        owner: String,
        repo: String,
        pr_number: u32,
    },
    /// Analyze a single local file
    AnalyzeFile {
        path: String,
        #[clap(short, long)]
        language: Option<String>,
    },
    /// Print the aggregated summary for a stored analysis
    Summary {
        analysis_id: String,
    },
    /// List stored analyses
    List {
        #[clap(long)]
        owner: Option<String>,
        #[clap(long)]
        repo: Option<String>,
        #[clap(long)]
        status: Option<String>,
        #[clap(long, default_value_t = 0)]
        page: usize,
        #[clap(long, default_value_t = 20)]
        size: usize,
    },
}
