//! Drive a dungeon episode from the command line.
//!
//! Prints the screen after every step along with the reward.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::Rng;
use serde_json::Value;

use rg_env::{ACTION_COUNT, Action, ConfigSource, RogueEnv, action_meanings};

/// Play the dungeon through the RL environment interface
#[derive(Parser, Debug)]
#[command(name = "rogue-env")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RNG seed for the first episode
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON engine configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Keys to play, one step per key (e.g. "hjkl>")
    #[arg(short, long, conflicts_with_all = ["random", "json_actions"])]
    actions: Option<String>,

    /// Send all of `--actions` as a single composite step
    #[arg(long, requires = "actions")]
    composite: bool,

    /// Play this many random numeric actions
    #[arg(short, long, conflicts_with = "json_actions")]
    random: Option<usize>,

    /// JSON array of actions, integers or key strings (e.g. '[0, "hh>", 8]')
    #[arg(long)]
    json_actions: Option<String>,

    /// Only print the final screen
    #[arg(short, long)]
    quiet: bool,

    /// List the numeric actions and exit
    #[arg(long)]
    list_actions: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.list_actions {
        for (index, (key, meaning)) in action_meanings().enumerate() {
            println!("{index}: {key} {meaning}");
        }
        return Ok(());
    }

    let source = args
        .config
        .clone()
        .map(ConfigSource::from)
        .unwrap_or_default();
    let mut env = RogueEnv::new(args.seed, source).context("failed to start the environment")?;
    let actions = plan(&args)?;

    if !args.quiet {
        println!("{}\n", env.render());
    }

    let mut total = 0;
    for action in actions {
        let outcome = env
            .step(&action)
            .with_context(|| format!("step {action:?} failed"))?;
        total += outcome.reward;
        let done = outcome.done;
        if !args.quiet {
            println!("{action:?} reward={}\n{}\n", outcome.reward, outcome.result);
        }
        if done {
            println!("episode finished");
            break;
        }
    }

    if args.quiet {
        println!("{}", env.render());
    }
    println!("steps={} total reward={total}", env.steps());
    Ok(())
}

/// Actions requested on the command line, in order
fn plan(args: &Args) -> Result<Vec<Action>> {
    if let Some(keys) = &args.actions {
        return Ok(if args.composite {
            vec![Action::from(keys.as_str())]
        } else {
            keys.chars().map(Action::from).collect()
        });
    }
    if let Some(count) = args.random {
        let mut rng = rand::thread_rng();
        return Ok((0..count)
            .map(|_| Action::Index(rng.gen_range(0..ACTION_COUNT)))
            .collect());
    }
    if let Some(text) = &args.json_actions {
        let value: Value = serde_json::from_str(text).context("--json-actions is not JSON")?;
        let Value::Array(items) = value else {
            bail!("--json-actions must be a JSON array");
        };
        return items
            .iter()
            .map(|item| Action::try_from(item).map_err(anyhow::Error::from))
            .collect();
    }
    Ok(Vec::new())
}
