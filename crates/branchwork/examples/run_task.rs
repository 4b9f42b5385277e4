//! Runs a single branchwork exercise from the command line.
//!
//! Each exercise is a subcommand that takes the function's inputs as
//! arguments and prints the result.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example run_task -- roman 26
//! cargo run --example run_task -- queen e4 h7
//! cargo run --example run_task -- shuffle qwerty 3
//! cargo run --example run_task -- sort -- 2 9 -5 3
//! cargo run --example run_task -- spiral 5
//! ```
//!
//! Set `RUST_LOG=trace` to see the library's internal logging:
//!
//! ```sh
//! RUST_LOG=trace cargo run --example run_task -- shuffle "the quick brown fox" 1000000
//! ```

use std::process;

use branchwork::{Digit, Position, SquareMatrix};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    task: Task,
}

#[derive(Debug, Subcommand)]
enum Task {
    /// Check whether a number is zero or positive.
    Positive {
        #[arg(allow_hyphen_values = true)]
        number: f64,
    },
    /// Print the greatest of three numbers.
    Max {
        #[arg(allow_hyphen_values = true)]
        a: f64,
        #[arg(allow_hyphen_values = true)]
        b: f64,
        #[arg(allow_hyphen_values = true)]
        c: f64,
    },
    /// Check whether a digit occurs in a number.
    ContainsDigit {
        #[arg(allow_hyphen_values = true)]
        number: i64,
        #[arg(value_parser = parse_digit)]
        digit: Digit,
    },
    /// Classify three side lengths as an isosceles triangle.
    Isosceles { a: f64, b: f64, c: f64 },
    /// Check whether a queen attacks a king (squares in algebraic notation, e.g. `e4`).
    Queen { queen: Position, king: Position },
    /// Convert 1-39 to Roman numerals.
    Roman { number: u8 },
    /// Spell out a number string digit by digit.
    Words {
        #[arg(allow_hyphen_values = true)]
        number: String,
    },
    /// Check whether a string is a palindrome.
    Palindrome { text: String },
    /// Find the first index of a character in a string.
    IndexOf { text: String, letter: char },
    /// Apply the odd/even interleave shuffle.
    Shuffle { text: String, iterations: usize },
    /// Find the balance index of a list of numbers.
    Balance {
        #[arg(allow_hyphen_values = true)]
        values: Vec<i64>,
    },
    /// Sort numbers ascending.
    Sort {
        #[arg(allow_hyphen_values = true)]
        values: Vec<i64>,
    },
    /// Find the next greater arrangement of a number's digits.
    NextBigger { number: u64 },
    /// Print a clockwise spiral matrix.
    Spiral { size: usize },
    /// Rotate the spiral matrix of the given size clockwise.
    Rotate {
        size: usize,
        /// Number of quarter turns.
        #[arg(long, default_value_t = 1)]
        turns: usize,
    },
}

fn parse_digit(s: &str) -> Result<Digit, String> {
    let mut chars = s.chars();
    match (chars.next().and_then(Digit::from_char), chars.next()) {
        (Some(digit), None) => Ok(digit),
        _ => Err(format!("expected a single digit 0-9, got {s:?}")),
    }
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    log::debug!("running {:?}", args.task);

    match args.task {
        Task::Positive { number } => println!("{}", branchwork::is_positive(number)),
        Task::Max { a, b, c } => println!("{}", branchwork::max_of_three(a, b, c)),
        Task::ContainsDigit { number, digit } => {
            println!("{}", branchwork::contains_digit(number, digit));
        }
        Task::Isosceles { a, b, c } => {
            println!("{}", branchwork::is_isosceles_triangle(a, b, c));
        }
        Task::Queen { queen, king } => {
            println!("{}", branchwork::can_queen_capture_king(queen, king));
        }
        Task::Roman { number } => match branchwork::to_roman_numeral(number) {
            Ok(numeral) => println!("{numeral}"),
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
        Task::Words { number } => println!("{}", branchwork::number_to_words(&number)),
        Task::Palindrome { text } => println!("{}", branchwork::is_palindrome(&text)),
        Task::IndexOf { text, letter } => print_index(branchwork::index_of(&text, letter)),
        Task::Shuffle { text, iterations } => {
            println!("{}", branchwork::shuffle_chars(&text, iterations));
        }
        Task::Balance { values } => print_index(branchwork::balance_index(&values)),
        Task::Sort { mut values } => {
            let sorted = branchwork::sort_ascending(&mut values);
            println!("{sorted:?}");
        }
        Task::NextBigger { number } => println!("{}", branchwork::next_bigger(number)),
        Task::Spiral { size } => print_matrix(&branchwork::spiral_matrix(size)),
        Task::Rotate { size, turns } => {
            let mut matrix = branchwork::spiral_matrix(size);
            for _ in 0..turns % 4 {
                branchwork::rotate_clockwise(&mut matrix);
            }
            print_matrix(&matrix);
        }
    }
}

fn print_index(index: Option<usize>) {
    match index {
        Some(index) => println!("{index}"),
        None => println!("not found"),
    }
}

fn print_matrix(matrix: &SquareMatrix<usize>) {
    if !matrix.is_empty() {
        println!("{matrix}");
    }
}
