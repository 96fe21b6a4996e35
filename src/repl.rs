use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::display::{self, display_categories, display_results, LIST_ALL_LIMIT, RESULT_LIMIT};
use crate::query::{SearchEngine, DEFAULT_MIN_SCORE};

const TITLE: &str = " UDEMY FREE COURSES SEARCH TOOL ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Search,
    KeywordSearch,
    BrowseCategories,
    ListAll,
    Exit,
}

impl Command {
    pub fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Command::Search),
            "2" => Some(Command::KeywordSearch),
            "3" => Some(Command::BrowseCategories),
            "4" => Some(Command::ListAll),
            "5" => Some(Command::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Interactive menu over any reader/writer pair. Returns when the user
/// picks exit or the input runs dry.
pub fn run<R: BufRead, W: Write>(
    engine: &SearchEngine,
    mut input: R,
    mut out: W,
) -> io::Result<()> {
    writeln!(out, "\n{}", display::rule('=', 100))?;
    writeln!(out, "{TITLE:^100}")?;
    writeln!(out, "{}", display::rule('=', 100))?;

    loop {
        print_menu(&mut out)?;
        let Some(choice) = prompt(&mut input, &mut out, "\nEnter your choice (1-5): ")? else {
            debug!("input closed, leaving menu");
            return Ok(());
        };

        let flow = match Command::parse(&choice) {
            Some(command) => dispatch(engine, command, &mut input, &mut out)?,
            None => {
                writeln!(out, "\nInvalid choice. Please try again.")?;
                Flow::Continue
            }
        };

        if flow == Flow::Exit {
            return Ok(());
        }
    }
}

pub fn dispatch<R: BufRead, W: Write>(
    engine: &SearchEngine,
    command: Command,
    input: &mut R,
    out: &mut W,
) -> io::Result<Flow> {
    debug!(?command, "menu command");
    match command {
        Command::Search => {
            let Some(query) = prompt(input, out, "\nEnter search term: ")? else {
                return Ok(Flow::Exit);
            };
            if !query.is_empty() {
                let results = engine.search(&query, DEFAULT_MIN_SCORE);
                display_results(out, &results, RESULT_LIMIT)?;
            }
        }
        Command::KeywordSearch => {
            let Some(keywords) = prompt(input, out, "\nEnter keywords (comma-separated): ")? else {
                return Ok(Flow::Exit);
            };
            if !keywords.is_empty() {
                let results = engine.search_by_keywords(&keywords);
                display_results(out, &results, RESULT_LIMIT)?;
            }
        }
        Command::BrowseCategories => {
            display_categories(out, &engine.search_by_category())?;
        }
        Command::ListAll => {
            writeln!(out, "\nTotal courses: {}", engine.len())?;
            display_results(out, &engine.all_results(), LIST_ALL_LIMIT)?;
        }
        Command::Exit => {
            writeln!(out, "\nGoodbye!")?;
            return Ok(Flow::Exit);
        }
    }
    Ok(Flow::Continue)
}

fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nOptions:")?;
    writeln!(out, "1. Search by keyword/name")?;
    writeln!(out, "2. Search by multiple keywords (comma-separated)")?;
    writeln!(out, "3. Browse by category")?;
    writeln!(out, "4. Show all courses")?;
    writeln!(out, "5. Exit")
}

// None once the input is exhausted
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(out, "{message}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::Course;

    fn engine() -> SearchEngine {
        SearchEngine::new(vec![
            Course::new("Complete Python Bootcamp", "https://example.com/python", "1 May"),
            Course::new("Excel for Beginners", "https://example.com/excel", "1 May"),
            Course::new("Knitting", "https://example.com/knit", "Unknown"),
        ])
    }

    fn session(script: &str) -> String {
        let mut out = Vec::new();
        run(&engine(), script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_menu_choices() {
        assert_eq!(Command::parse("1"), Some(Command::Search));
        assert_eq!(Command::parse(" 3 \n"), Some(Command::BrowseCategories));
        assert_eq!(Command::parse("5"), Some(Command::Exit));
        assert_eq!(Command::parse("6"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn search_then_exit() {
        let text = session("1\npython\n5\n");
        assert!(text.contains("UDEMY FREE COURSES SEARCH TOOL"));
        assert!(text.contains("1. Complete Python Bootcamp\n   Match: 100.0%"));
        assert!(text.trim_end().ends_with("Goodbye!"));
    }

    #[test]
    fn invalid_choice_reprompts() {
        let text = session("9\n5\n");
        assert!(text.contains("Invalid choice. Please try again."));
        assert_eq!(text.matches("Enter your choice (1-5): ").count(), 2);
    }

    #[test]
    fn empty_query_computes_nothing() {
        let text = session("1\n\n2\n   \n5\n");
        assert!(!text.contains("Found"));
        assert!(!text.contains("No courses found"));
        assert_eq!(text.matches("Enter your choice (1-5): ").count(), 3);
    }

    #[test]
    fn keyword_search_and_categories() {
        let text = session("2\nexcel, beginners\n3\n5\n");
        assert!(text.contains("1. Excel for Beginners\n   Match: 100.0%"));
        assert!(text.contains("COURSES BY CATEGORY"));
        assert!(text.contains("Python (1 courses)"));
        assert!(text.contains("Other (1 courses)"));
    }

    #[test]
    fn list_all_shows_total() {
        let text = session("4\n5\n");
        assert!(text.contains("Total courses: 3"));
        assert!(text.contains("Found 3 courses (showing top 3)"));
    }

    #[test]
    fn end_of_input_stops_quietly() {
        let text = session("4\n");
        assert!(text.contains("Total courses: 3"));
        assert!(!text.contains("Goodbye!"));
    }

    #[test]
    fn dispatch_reports_exit() {
        let engine = engine();
        let mut out = Vec::new();
        let mut input: &[u8] = b"";
        let flow = dispatch(&engine, Command::Exit, &mut input, &mut out).unwrap();
        assert_eq!(flow, Flow::Exit);
        let flow = dispatch(&engine, Command::BrowseCategories, &mut input, &mut out).unwrap();
        assert_eq!(flow, Flow::Continue);
    }
}
