use chromatic::graph::Graph;
use chromatic::solve::color_graph_with_progress;
use chromatic::validate::verify_coloring;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Finds a minimum vertex-coloring of an undirected graph via forward checking.", long_about = None)]
struct Cli {
    /// Number of nodes in the generated graph (1-64)
    #[clap(
        short,
        long,
        value_parser = clap::value_parser!(u8).range(1..=64),
        required_unless_present = "input",
        conflicts_with = "input"
    )]
    nodes: Option<u8>,

    /// Create a fully connected graph (without self-loops)
    #[clap(short, long, group = "mode", conflicts_with = "input")]
    full: bool,

    /// Create a graph with random connections (default)
    #[clap(short, long, group = "mode", conflicts_with = "input")]
    random: bool,

    /// Create an empty graph (no connections)
    #[clap(short, long, group = "mode", conflicts_with = "input")]
    empty: bool,

    /// Edge probability for random generation
    #[clap(short, long, default_value_t = 0.5)]
    probability: f64,

    /// Base seed for reproducible random generation
    #[clap(long, conflicts_with = "input")]
    seed: Option<u64>,

    /// Color an adjacency matrix loaded from FILE instead of generating one
    #[clap(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Only print the resulting colors
    #[clap(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    let graph = match build_graph(&cli) {
        Ok(g) => g,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(2);
        }
    };

    if !cli.quiet {
        println!("Number of nodes: {}", graph.order());
        println!("Matrix:");
        print!("{graph}");
        println!("Please wait, this could take a while...");
    }

    let coloring = color_graph_with_progress(&graph, |budget| {
        if !cli.quiet {
            println!("No coloring with {budget} color(s), trying {}", budget + 1);
        }
    });

    if let Err(msg) = verify_coloring(&graph, &coloring) {
        eprintln!("internal error: solver produced an invalid coloring: {msg}");
        std::process::exit(1);
    }

    let colors: Vec<String> = coloring.colors().iter().map(u8::to_string).collect();
    println!("Colors: {}", colors.join(" "));
    if !cli.quiet {
        println!("Used {} color(s)", coloring.color_count());
    }
}

fn build_graph(cli: &Cli) -> Result<Graph, String> {
    if let Some(path) = &cli.input {
        return Graph::load_from_file(path).map_err(|e| format!("{}: {e}", path.display()));
    }

    // clap guarantees --nodes is present when --input is absent.
    let Some(n) = cli.nodes else {
        return Err("--nodes is required".to_owned());
    };
    let n = n as usize;

    if cli.full {
        Ok(Graph::complete(n))
    } else if cli.empty {
        Ok(Graph::empty(n))
    } else {
        if !(0.0..=1.0).contains(&cli.probability) {
            return Err(format!(
                "edge probability must be in [0, 1], got {}",
                cli.probability
            ));
        }
        let mut rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Graph::random(&mut rng, n, cli.probability))
    }
}
