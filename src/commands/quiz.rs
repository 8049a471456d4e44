//! ecobrand quiz コマンド
//!
//! 3問のクイズに答えて採点する。`--answers` を渡すと非対話で採点する。

use crate::learn::{grade, parse_answers, QuizQuestion, QuizResult, QUIZ};
use clap::Parser;
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};

#[derive(Debug, Parser)]
pub struct Args {
    /// Answers as 1-based option numbers, e.g. "4,1,2" ("-" skips a question)
    #[arg(long, value_name = "LIST")]
    pub answers: Option<String>,
}

pub fn run(args: Args) -> Result<(), String> {
    let chosen = match args.answers {
        Some(list) => parse_answers(&list)?,
        None => ask_all(&QUIZ)?,
    };
    let result = grade(&QUIZ, &chosen);
    print_result(&QUIZ, &result);
    Ok(())
}

fn ask_all(questions: &[QuizQuestion]) -> Result<Vec<Option<usize>>, String> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut chosen = Vec::with_capacity(questions.len());

    for (i, question) in questions.iter().enumerate() {
        println!("{} {}", format!("Q{}.", i + 1).bold(), question.question);
        for (n, option) in question.options.iter().enumerate() {
            println!("  {}) {}", n + 1, option);
        }
        print!("Your answer (1-{}, Enter to skip): ", question.options.len());
        io::stdout()
            .flush()
            .map_err(|e| format!("Failed to flush stdout: {}", e))?;

        let line = match lines.next() {
            Some(line) => line.map_err(|e| format!("Failed to read input: {}", e))?,
            None => String::new(),
        };
        chosen.push(read_choice(&line));
        println!();
    }
    Ok(chosen)
}

/// 1始まりの番号を0始まりに。解釈できない入力は未回答。
fn read_choice(line: &str) -> Option<usize> {
    line.trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
}

fn print_result(questions: &[QuizQuestion], result: &QuizResult) {
    for (answer, question) in result.answers.iter().zip(questions) {
        let mark = if answer.correct {
            "✓".green().to_string()
        } else {
            "✗".red().to_string()
        };
        let picked = answer
            .chosen
            .and_then(|idx| question.options.get(idx))
            .copied()
            .unwrap_or("(no answer)");
        println!("{} {}", mark, question.question);
        println!("    your answer: {}", picked);
        if !answer.correct {
            println!("    correct:     {}", question.correct.green());
        }
    }
    println!();
    println!("Score: {}/{}", result.score(), result.total());
}
