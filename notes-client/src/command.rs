#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Delete(usize),
    Refresh,
    Help,
    Quit,
    Unknown(String),
}

pub const HELP: &str = "\
Commands:
  add <text>   add a note
  del <n>      delete note number n
  ls           reload notes
  help         show this message
  quit         exit";

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        match word {
            "add" | "a" => Self::Add(rest.to_string()),
            "del" | "d" | "rm" => rest
                .trim()
                .parse()
                .map_or_else(|_| Self::Unknown(line.to_string()), Self::Delete),
            "ls" | "" => Self::Refresh,
            "help" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            _ => Self::Unknown(line.to_string()),
        }
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse("add Buy milk"), Command::Add("Buy milk".to_string()));
        assert_eq!(Command::parse("add"), Command::Add(String::new()));
        assert_eq!(Command::parse(" del 2 "), Command::Delete(2));
        assert_eq!(Command::parse("ls"), Command::Refresh);
        assert_eq!(Command::parse("q"), Command::Quit);
    }

    #[test]
    fn bad_index_is_unknown() {
        assert_eq!(Command::parse("del x"), Command::Unknown("del x".to_string()));
        assert_eq!(Command::parse("frob"), Command::Unknown("frob".to_string()));
    }

    #[test]
    fn only_explicit_yes_confirms() {
        assert!(is_yes("y"));
        assert!(is_yes(" YES\n"));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
    }
}
