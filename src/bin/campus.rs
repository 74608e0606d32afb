/// Campus route finder
///
/// Finds the cheapest route between two labelled places of a campus map.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anstream::eprintln;
use anstream::println;
use clap::Parser;
use clap::ValueEnum;
use owo_colors::OwoColorize;

use campus::algorithms::best_first::BestFirstSearch;
use campus::algorithms::best_first::Outcome;
use campus::algorithms::best_first::ScoreRule;
use campus::algorithms::best_first::SearchLimits;
use campus::problem::Problem;
use campus::problems::campus::CampusAction;
use campus::problems::campus::CampusCost;
use campus::problems::campus::CampusHeuristicPlanar;
use campus::problems::campus::CampusMap;
use campus::problems::campus::CampusProblem;
use campus::problems::campus::CampusSpace;
use campus::problems::campus::CampusState;
use campus::space::Space;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

const DEMO_CAMPUS: &str = include_str!("../../data/campus/demo.txt");

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Score {
    /// Accumulate the heuristic of every ancestor
    Compounding,
    /// Plain A*, f = g + h
    Additive,
}

impl From<Score> for ScoreRule {
    fn from(s: Score) -> Self {
        match s {
            Score::Compounding => ScoreRule::Compounding,
            Score::Additive => ScoreRule::Additive,
        }
    }
}

/// Command line arguments
#[derive(Parser, Debug)]
#[clap(long_version = campus::build::CLAP_LONG_VERSION)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Map file. Uses the bundled demo campus when missing.
    #[arg(env = "CAMPUS_MAP")]
    pub map: Option<PathBuf>,

    #[arg(long, default_value = "B30")]
    pub start: String,
    #[arg(long, default_value_t = 0i64, allow_negative_numbers = true)]
    pub start_floor: i64,

    #[arg(long, default_value = "B37")]
    pub goal: String,
    #[arg(long, default_value_t = 2i64, allow_negative_numbers = true)]
    pub goal_floor: i64,

    #[arg(long, value_enum, env = "CAMPUS_SCORE", default_value_t = Score::Compounding)]
    score: Score,

    /// Give up after this many heap pops
    #[arg(long, env = "CAMPUS_MAX_POPS")]
    pub max_pops: Option<usize>,

    /// Also write an org-mode report here
    #[arg(short, long, env = "CAMPUS_REPORT")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    color: colorchoice_clap::Color,
}

fn write_report<W: Write>(
    out: &mut BufWriter<W>,
    problem: &CampusProblem,
    search: &BestFirstSearch<
        '_,
        CampusHeuristicPlanar,
        CampusProblem,
        CampusSpace,
        CampusState,
        CampusAction,
        CampusCost,
    >,
    outcome: &Outcome<CampusState, CampusAction, CampusCost>,
) -> std::io::Result<()> {
    writeln!(out, "* Campus")?;
    writeln!(out, ":PROPERTIES:")?;
    writeln!(out, ":VERSION: {:?}", campus::build::PKG_VERSION)?;
    writeln!(out, ":SCORE_RULE: {}", search.rule())?;
    writeln!(out, ":END:")?;
    writeln!(out, "** Problem")?;
    writeln!(out, "#+begin_quote\n{problem}\n#+end_quote")?;
    writeln!(out, "** Search")?;
    writeln!(out, "#+begin_src ron\n{search:?}\n#+end_src")?;
    writeln!(out, "#+begin_example")?;
    search.write_stats(&mut *out)?;
    writeln!(out, "#+end_example")?;
    writeln!(out, "** Path")?;
    match outcome.path() {
        Some(path) => {
            writeln!(out, "- Score: {}", outcome.score())?;
            writeln!(out, "- Travel cost: {}", problem.space().path_cost(path))?;
            for s in path.states() {
                writeln!(out, "  - {s}")?;
            }
            writeln!(out, "#+begin_quote\n{}#+end_quote", problem.render_path(path))?;
        }
        None => writeln!(out, "No path ({outcome:?}), score {}", outcome.score())?,
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    args.color.write_global();

    let map = match &args.map {
        Some(p) => CampusMap::try_from(p.as_path()),
        None => CampusMap::try_from(DEMO_CAMPUS),
    };
    let map = match map {
        Ok(map) => map,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            return ExitCode::FAILURE;
        }
    };

    let problem = match CampusProblem::new(
        &map,
        (args.start.as_str(), args.start_floor),
        (args.goal.as_str(), args.goal_floor),
    ) {
        Ok(problem) => problem,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            return ExitCode::FAILURE;
        }
    };
    println!("{problem}");

    let mut search = BestFirstSearch::<
        CampusHeuristicPlanar,
        CampusProblem,
        CampusSpace,
        CampusState,
        CampusAction,
        CampusCost,
    >::new(&problem)
    .with_rule(args.score.into())
    .with_limits(SearchLimits {
        max_pops: args.max_pops,
    });
    let outcome = search.find_path();

    match outcome.path() {
        Some(path) => {
            println!("{}", problem.render_path(path));
            let states: Vec<String> = path.states().iter().map(|s| s.to_string()).collect();
            println!("{} {}", "Path:".green().bold(), states.join(" "));
            println!("{} {}", "Score:".green().bold(), outcome.score().yellow());
            println!(
                "{} {}",
                "Travel cost:".green().bold(),
                problem.space().path_cost(path).yellow()
            );
        }
        None => {
            println!(
                "{} from {} to {} ({:?}), score {}",
                "No path".red().bold(),
                problem.start(),
                problem.goal(),
                outcome,
                outcome.score().yellow()
            );
        }
    }

    if let Some(output) = &args.output {
        println!("Writing report to {:?}", output.yellow());
        let written = File::create(output).and_then(|file| {
            let mut out = BufWriter::new(file);
            write_report(&mut out, &problem, &search, &outcome)?;
            out.flush()
        });
        if let Err(e) = written {
            eprintln!("{} {e}", "error:".red().bold());
            return ExitCode::FAILURE;
        }
    }

    if outcome.is_found() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
