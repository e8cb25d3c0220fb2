use crate::{
    config::app_config::{load_config, AppConfig, AppConfigBuilder},
    error::CliError,
    logging::init_logging,
};
use clap::{Parser, Subcommand, ValueEnum};
use netmetrics::{
    algorithms::{
        centrality::closeness_centrality::closeness_centrality,
        metrics::degree::count_nodes_with_degree,
        motifs::rectangle_count::rectangle_count,
    },
    graph_loader::source::{adj_loader::AdjLoader, edge_list_loader::EdgeListLoader},
    io::{
        report::{write_closeness, write_degree_report, write_rectangle_count},
        tee::TeeWriter,
    },
    prelude::*,
};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    time::Instant,
};
use tracing::info;

#[derive(Parser)]
#[command(about = "Compute social network metrics over a dataset")]
struct Args {
    /// TOML, JSON or YAML file with `[logging]` and `[paths]` sections
    #[arg(long, env = "NETMETRICS_CONFIG")]
    config: Option<PathBuf>,

    #[arg(long, env = "NETMETRICS_LOG_LEVEL")]
    log_level: Option<String>,

    #[arg(long, env = "NETMETRICS_DATASET_DIR")]
    dataset_dir: Option<PathBuf>,

    /// Also write the report to this file (truncated first)
    #[arg(long, env = "NETMETRICS_OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Print the closeness centrality of every node of an adjacency dataset")]
    Closeness { dataset: PathBuf },
    #[command(about = "Print the number of rectangles (4-cycles) of an adjacency dataset")]
    Rectangles { dataset: PathBuf },
    #[command(about = "Print the degree summary and distribution of a dataset")]
    Degrees {
        dataset: PathBuf,
        #[arg(long, value_enum, default_value_t = DatasetFormat::EdgeList)]
        format: DatasetFormat,
        /// Also report how many nodes have exactly this degree
        #[arg(long)]
        degree: Option<usize>,
        /// Remove every node whose id is a multiple of this number first
        #[arg(long)]
        drop_multiples_of: Option<NonZeroUsize>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum DatasetFormat {
    /// `<V>,<E>` header followed by `<u>,<v>,<w>` lines
    Adj,
    /// SNAP style whitespace separated pairs
    EdgeList,
}

impl Args {
    fn app_config(&self) -> Result<AppConfig, CliError> {
        let loaded = load_config(None, self.config.clone())?;
        let mut builder = AppConfigBuilder::from(loaded);
        if let Some(log_level) = &self.log_level {
            builder = builder.with_log_level(log_level.clone());
        }
        if let Some(dataset_dir) = &self.dataset_dir {
            builder = builder.with_dataset_dir(dataset_dir.clone());
        }
        if self.output.is_some() {
            builder = builder.with_output(self.output.clone());
        }
        Ok(builder.build())
    }
}

pub(crate) fn cli() -> Result<(), CliError> {
    let args = Args::parse();
    let config = args.app_config()?;
    init_logging(&config.logging)?;

    let mut sink = open_sink(config.paths.output.as_deref())?;
    match args.command {
        Commands::Closeness { dataset } => {
            let graph = load(&config.paths.resolve_dataset(&dataset), DatasetFormat::Adj)?;
            let now = Instant::now();
            let scores = closeness_centrality(graph.graph());
            info!("Closeness centrality took {:?}", now.elapsed());
            write_closeness(&mut sink, &scores)?;
        }
        Commands::Rectangles { dataset } => {
            let graph = load(&config.paths.resolve_dataset(&dataset), DatasetFormat::Adj)?;
            let now = Instant::now();
            let count = rectangle_count(graph.graph());
            info!("Rectangle count took {:?}", now.elapsed());
            write_rectangle_count(&mut sink, count)?;
        }
        Commands::Degrees {
            dataset,
            format,
            degree,
            drop_multiples_of,
        } => {
            let network = load(&config.paths.resolve_dataset(&dataset), format)?;
            let filtered =
                drop_multiples_of.map(|m| network.filter_nodes(|v| v.index() % m.get() != 0));
            write_degree_report(&mut sink, &network, filtered.as_ref())?;
            if let Some(k) = degree {
                let analysed = filtered.as_ref().unwrap_or(&network);
                writeln!(
                    sink,
                    "nodes_with_degree {} {}",
                    k,
                    count_nodes_with_degree(analysed.graph(), k)
                )?;
            }
        }
    }
    sink.flush()?;
    Ok(())
}

/// Loads a dataset; the result maps its dense ids back to the ids in the file.
fn load(path: &Path, format: DatasetFormat) -> Result<NodeSubgraph, CliError> {
    let now = Instant::now();
    let dataset: NodeSubgraph = match format {
        DatasetFormat::Adj => AdjLoader::new(path).load()?.into(),
        DatasetFormat::EdgeList => EdgeListLoader::new(path).load()?,
    };
    info!("Loading {} took {:?}", path.display(), now.elapsed());
    Ok(dataset)
}

fn open_sink(output: Option<&Path>) -> Result<Box<dyn Write>, CliError> {
    let stdout = io::stdout().lock();
    let sink: Box<dyn Write> = match output {
        Some(path) => {
            let file = BufWriter::new(File::create(path)?);
            Box::new(TeeWriter::new(stdout, file))
        }
        None => Box::new(stdout),
    };
    Ok(sink)
}
