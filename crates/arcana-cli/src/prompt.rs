//! Interactive questions asked when the spread is not given on the command line.

use std::io::{self, BufRead, Write};

/// What the querent answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    /// Spread name as typed. Empty input falls back to `single`.
    pub spread: String,
    /// Whether reversals were accepted.
    pub allow_reversals: bool,
    /// The question, if one was typed.
    pub question: Option<String>,
}

/// Ask for spread, reversals and question, one line each.
///
/// End of input counts as an empty answer.
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Answers> {
    let spread = ask_line(
        input,
        output,
        "Choose a spread: single, three, five, or celtic cross: ",
    )?;
    let reversals = ask_line(input, output, "Allow reversals? (yes/no): ")?;
    let question = ask_line(input, output, "What is your question? (optional): ")?;

    Ok(Answers {
        spread: if spread.is_empty() {
            "single".to_string()
        } else {
            spread
        },
        allow_reversals: is_yes(&reversals),
        question: (!question.is_empty()).then_some(question),
    })
}

fn ask_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "yes" | "y")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(script: &str) -> (Answers, String) {
        let mut input = script.as_bytes();
        let mut output = Vec::new();
        let answers = ask(&mut input, &mut output).unwrap();
        (answers, String::from_utf8(output).unwrap())
    }

    #[test]
    fn full_answers() {
        let (answers, prompts) = run("three\nyes\nShould I move?\n");
        assert_eq!(answers.spread, "three");
        assert!(answers.allow_reversals);
        assert_eq!(answers.question.as_deref(), Some("Should I move?"));
        assert!(prompts.contains("Choose a spread"));
        assert!(prompts.contains("Allow reversals?"));
    }

    #[test]
    fn anything_but_yes_means_no() {
        assert!(!run("five\nno\n\n").0.allow_reversals);
        assert!(!run("five\nmaybe\n\n").0.allow_reversals);
        assert!(run("five\nY\n\n").0.allow_reversals);
        assert!(run("five\nYES\n\n").0.allow_reversals);
    }

    #[test]
    fn end_of_input_uses_defaults() {
        let (answers, _) = run("");
        assert_eq!(answers.spread, "single");
        assert!(!answers.allow_reversals);
        assert_eq!(answers.question, None);
    }

    #[test]
    fn spread_is_passed_through_verbatim() {
        let (answers, _) = run("  celtic cross  \n");
        assert_eq!(answers.spread, "celtic cross");
    }
}
