use clap::{Parser, ValueEnum};
use foil::{binding::BindingStrategy, Config};
use std::{
    path::PathBuf,
    process::ExitCode,
    time::{Duration, Instant},
};

/// Learn a single Horn clause for a target predicate from ground facts.
///
/// Input: a fact count `n`, `n` lines of `Predicate(a, b, ...)`, then the
/// target predicate name. Output: the learned rule on one line.
#[derive(Parser)]
#[command(name = "foil", version)]
struct Cli {
    /// Input file; standard input when absent
    input: Option<PathBuf>,
    /// How rule bodies are matched against the facts
    #[arg(long, value_enum, default_value_t = Binding::Greedy)]
    binding: Binding,
    /// Score candidate literals in parallel
    #[arg(long)]
    parallel: bool,
    /// Stop growing the rule body at this many literals
    #[arg(long)]
    max_body_literals: Option<usize>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Binding {
    /// First matching fact per literal, no backtracking
    Greedy,
    /// Full search for a consistent grounding
    Backtracking,
}

impl From<Binding> for BindingStrategy {
    fn from(binding: Binding) -> Self {
        match binding {
            Binding::Greedy => BindingStrategy::Greedy,
            Binding::Backtracking => BindingStrategy::Backtracking,
        }
    }
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            binding: self.binding.into(),
            parallel: self.parallel,
            max_body_literals: self.max_body_literals.unwrap_or(usize::MAX),
        }
    }
}

fn stdin_to_string() -> std::io::Result<String> {
    use std::io::Read as _;
    let mut buffer = String::new();
    std::io::stdin().lock().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn timed<R>(func: impl FnOnce() -> R) -> (Duration, R) {
    let start = Instant::now();
    let r = func();
    (start.elapsed(), r)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = cli.config();
    log::info!("run config: {config:?}");

    let source = match &cli.input {
        Some(path) => std::fs::read_to_string(path),
        None => stdin_to_string(),
    };
    let source = match source {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: {}", foil::Error::from(err));
            return ExitCode::FAILURE;
        }
    };

    let (dur, result) = timed(|| foil::run(&source, &config));
    log::info!("learning took {dur:?}");
    match result {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn config(args: &[&str]) -> Config {
        Cli::try_parse_from(std::iter::once("foil").chain(args.iter().copied())).unwrap().config()
    }

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_flags_is_the_default_config() {
        assert_eq!(config(&[]), Config::default());
    }

    #[test]
    fn flags_reach_the_config() {
        let got = config(&["--binding", "backtracking", "--parallel", "--max-body-literals", "2", "in.txt"]);
        assert_eq!(got.binding, BindingStrategy::Backtracking);
        assert!(got.parallel);
        assert_eq!(got.max_body_literals, 2);
    }

    #[test]
    fn unknown_binding_is_refused() {
        assert!(Cli::try_parse_from(["foil", "--binding", "lazy"]).is_err());
    }
}
