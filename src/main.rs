use std::process;

use balance::{efficient, iterative, naive, Balance, ParseError, Tree};
use clap::{ArgAction, Parser, ValueEnum};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Checked when no trees are given on the command line.
const SAMPLE_TREES: [&str; 2] = [
    //      1
    //     / \
    //    2   3
    //   / \
    //  4   5
    "[1,2,3,4,5]",
    //        1
    //       /
    //      2
    //     /
    //    3
    //   /
    //  4
    "[1,2,null,3,null,4]",
];

/// Checks whether binary trees are height-balanced.
#[derive(Parser, Debug)]
#[command(name = "balance", version, about)]
struct Cli {
    /// Trees in level order, e.g. "[1,2,null,3]". Two sample trees are checked when none are
    /// given.
    trees: Vec<String>,

    /// Which checker to run
    #[arg(short, long, value_enum, default_value_t = Method::All)]
    method: Method,

    /// Turn debugging information on (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count)]
    debug: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Method {
    /// Recomputes heights at every node
    Naive,
    /// Single recursive pass
    Efficient,
    /// Single pass with an explicit stack
    Iterative,
    /// All of the above
    All,
}

impl Method {
    fn expand(self) -> &'static [Method] {
        match self {
            Method::Naive => &[Method::Naive],
            Method::Efficient => &[Method::Efficient],
            Method::Iterative => &[Method::Iterative],
            Method::All => &[Method::Naive, Method::Efficient, Method::Iterative],
        }
    }

    fn name(self) -> &'static str {
        match self {
            Method::Naive => "naive",
            Method::Efficient => "efficient",
            Method::Iterative => "iterative",
            Method::All => "all",
        }
    }

    fn check<V>(self, tree: &Tree<V>) -> Balance {
        match self {
            Method::Naive if naive::is_balanced(tree) => Balance::Balanced(naive::height(tree)),
            Method::Naive => Balance::Unbalanced,
            Method::Efficient => efficient::check(tree),
            Method::Iterative | Method::All => iterative::check(tree),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), ParseError> {
    let inputs: Vec<&str> = if cli.trees.is_empty() {
        info!("no trees given, checking the samples");
        SAMPLE_TREES.to_vec()
    } else {
        cli.trees.iter().map(String::as_str).collect()
    };

    let trees = inputs
        .iter()
        .map(|input| input.parse::<Tree<i64>>())
        .collect::<Result<Vec<_>, _>>()?;

    for tree in &trees {
        debug!(nodes = tree.len(), "checking tree");
        for method in cli.method.expand() {
            let verdict = match method.check(tree) {
                Balance::Balanced(height) => format!("balanced (height {})", height),
                Balance::Unbalanced => "unbalanced".to_string(),
            };
            println!("{} {}: {}", tree, method.name(), verdict);
        }
    }

    Ok(())
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(filter),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["balance", "-m", "naive", "-dd", "[1,2]", "[1]"]).unwrap();

        assert_eq!(cli.method, Method::Naive);
        assert_eq!(cli.debug, 2);
        assert_eq!(cli.trees, vec!["[1,2]", "[1]"]);
    }

    #[test]
    fn test_samples() {
        let balanced: Tree<i64> = SAMPLE_TREES[0].parse().unwrap();
        let unbalanced: Tree<i64> = SAMPLE_TREES[1].parse().unwrap();

        for method in Method::All.expand() {
            assert_eq!(method.check(&balanced), Balance::Balanced(2));
            assert_eq!(method.check(&unbalanced), Balance::Unbalanced);
        }
    }

    #[test]
    fn test_invalid_tree_is_an_error() {
        let cli = Cli::try_parse_from(["balance", "[1,oops]"]).unwrap();
        assert!(run(&cli).is_err());
    }
}
