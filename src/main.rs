//! Word Puzzle Solver
//!
//! Solves an 8x6 letter-grid puzzle, where dictionary words are traced
//! through adjacent cells and the best non-overlapping set of them is
//! reported, and a seven-letter bank puzzle, where words are spelled from
//! the bank around a mandatory core letter. The dictionary comes from a
//! plain word list or from one packed onto this executable with `pack`.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use env_logger::Env;

use strandbee::bee::{self, BeeSolutions, LetterBank};
use strandbee::config::{Capacities, PUZZLE_SIZE};
use strandbee::dictionary;
use strandbee::grid::{self, Grid};
use strandbee::trie::Trie;
use strandbee::{Error, GridReport};

/// Solves letter-grid and letter-bank word puzzles against a dictionary.
#[derive(Parser)]
#[command(name = "strandbee")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Word list to search, one word per line. Defaults to the list packed
    /// onto this executable.
    #[arg(short, long, global = true)]
    dict: Option<PathBuf>,

    /// Most grid combinations to hold before giving up.
    #[arg(long, global = true)]
    max_combinations: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find the words in an 8x6 grid file and the best non-overlapping set.
    Strands {
        /// File holding eight lines of six letters.
        file: PathBuf,
        /// Show each word's cell mask.
        #[arg(short, long)]
        masks: bool,
        /// List every non-overlapping combination, not just the best.
        #[arg(short, long)]
        all: bool,
    },
    /// Find the words spelled from seven letters; the first is the core.
    Bee {
        /// Seven distinct letters.
        letters: String,
        /// Show only pangrams, marked '!' when perfect and '*' otherwise.
        #[arg(short = 'p', long = "pangrams", visible_alias = "pangram")]
        pangrams: bool,
        /// Mark pangrams in the full word list.
        #[arg(short, long)]
        mark: bool,
    },
    /// Pack a word list onto an executable for use without --dict.
    Pack {
        executable: PathBuf,
        dictionary: PathBuf,
    },
}

/// What the grid report includes besides the word list and best cover.
#[derive(Clone, Copy, Default)]
struct GridDisplay {
    masks: bool,
    all: bool,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum BeeDisplay {
    Plain,
    Marked,
    PangramsOnly,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // help and version go to stdout and are not failures
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Arena limits for this run; `--max-combinations` also widens the member
/// arena behind it.
fn capacities(cli: &Cli) -> Capacities {
    match cli.max_combinations {
        Some(limit) => Capacities::default().with_combination_limit(limit),
        None => Capacities::default(),
    }
}

fn run(cli: Cli) -> strandbee::Result<()> {
    let capacities = capacities(&cli);

    match cli.command {
        Command::Strands { file, masks, all } => run_strands(
            &file,
            cli.dict.as_deref(),
            &capacities,
            GridDisplay { masks, all },
        ),
        Command::Bee {
            letters,
            pangrams,
            mark,
        } => {
            let display = if pangrams {
                BeeDisplay::PangramsOnly
            } else if mark {
                BeeDisplay::Marked
            } else {
                BeeDisplay::Plain
            };
            run_bee(&letters, cli.dict.as_deref(), &capacities, display)
        }
        Command::Pack {
            executable,
            dictionary,
        } => run_pack(&executable, &dictionary),
    }
}

/// Loads the word list from `dict`, or from this executable's packed payload.
fn load_trie(dict: Option<&Path>, capacities: &Capacities) -> strandbee::Result<Trie> {
    let words = match dict {
        Some(path) => dictionary::read_file(path)?,
        None => dictionary::read_embedded()?,
    };
    Ok(Trie::build(&words, capacities.trie_nodes)?)
}

/// Validates the grid, solves it and prints the report.
fn run_strands(
    file: &Path,
    dict: Option<&Path>,
    capacities: &Capacities,
    display: GridDisplay,
) -> strandbee::Result<()> {
    let text = std::fs::read_to_string(file).map_err(|source| Error::Puzzle {
        path: file.to_path_buf(),
        source,
    })?;
    let grid = Grid::parse(&text)?;
    let trie = load_trie(dict, capacities)?;

    let report = strandbee::solve_grid(&trie, &grid, capacities)?;
    print!("{}", format_grid_report(&report, display));
    Ok(())
}

/// Validates the bank, solves it and prints the words.
fn run_bee(
    letters: &str,
    dict: Option<&Path>,
    capacities: &Capacities,
    display: BeeDisplay,
) -> strandbee::Result<()> {
    let bank = LetterBank::parse(letters)?;
    let trie = load_trie(dict, capacities)?;

    let found = bee::solve(&trie, &bank, capacities)?;
    print!("{}", format_bee_words(&found, display));
    Ok(())
}

/// Packs a word list onto an executable.
fn run_pack(executable: &Path, words: &Path) -> strandbee::Result<()> {
    let words = dictionary::read_file(words)?;
    dictionary::append_payload(executable, &words)?;
    println!("Packed {} bytes of words", words.len());
    Ok(())
}

/// Formats found words, combination count and best cover.
fn format_grid_report(report: &GridReport, display: GridDisplay) -> String {
    let solutions = &report.solutions;
    let mut output = String::new();

    output.push_str(&format!("Solutions: {}\n", solutions.len()));
    for solution in solutions.iter() {
        if display.masks {
            output.push_str(&format!("{} ({})\n", solutions.word(solution), solution.cell_mask));
        } else {
            output.push_str(&format!("{}\n", solutions.word(solution)));
        }
    }

    output.push_str(&format!("Combinations: {}\n", report.combinations.len()));
    if display.all {
        for combination in report.combinations.iter() {
            for &member in combination {
                output.push_str(&format!("{}\n", solutions.word(&solutions.as_slice()[member as usize])));
            }
            output.push_str("====\n");
        }
    }

    if let Some(best) = report.best {
        output.push_str(&format!("Best cover: {}/{} cells\n", best.cells(), PUZZLE_SIZE));
        let members = report.combinations.get(best.index);
        let masks: Vec<u64> = members
            .iter()
            .map(|&member| solutions.as_slice()[member as usize].cell_mask)
            .collect();
        for &member in members {
            output.push_str(&format!("{}\n", solutions.word(&solutions.as_slice()[member as usize])));
        }
        output.push_str(&grid::format_cover(&masks));
    }

    output
}

/// Formats letter-bank words, one per line.
fn format_bee_words(found: &BeeSolutions, display: BeeDisplay) -> String {
    let mut output = String::new();
    for solution in found.iter() {
        let word = found.word(solution);
        match display {
            BeeDisplay::Plain => output.push_str(&format!("{word}\n")),
            BeeDisplay::Marked => output.push_str(&format!("{} {word}\n", solution.marker())),
            BeeDisplay::PangramsOnly if solution.is_pangram() => {
                output.push_str(&format!("{} {word}\n", solution.marker()))
            }
            BeeDisplay::PangramsOnly => {}
        }
    }
    output
}
