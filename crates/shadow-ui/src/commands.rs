//! Parsing of the interactive prompt.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a card for this city
    Search(String),
    /// Remove a card; zero-based index
    Clear(usize),
    ToggleTheme,
    Locate,
    List,
    Help,
    Quit,
    Empty,
    Invalid(String),
}

/// Parse one input line. Anything that is not a known keyword is a search.
pub fn parse(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }

    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match (head.to_lowercase().as_str(), rest) {
        ("quit" | "exit" | "q", "") => Command::Quit,
        ("help" | "?", "") => Command::Help,
        ("theme", "") => Command::ToggleTheme,
        ("locate", "") => Command::Locate,
        ("list" | "ls", "") => Command::List,
        ("search", city) => Command::Search(city.to_string()),
        ("clear", "") => Command::Invalid("usage: clear <n>".into()),
        ("clear", n) => match n.parse::<usize>() {
            Ok(n) if n >= 1 => Command::Clear(n - 1),
            _ => Command::Invalid(format!("not a card number: {}", n)),
        },
        _ => Command::Search(line.to_string()),
    }
}
