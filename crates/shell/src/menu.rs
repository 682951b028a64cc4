//! Menu vocabulary: what the user can pick and what each trade prints.

pub const MENU_TEXT: &str = "Please choose an option:\n\
                             1) List Products\n\
                             2) Buy Product\n\
                             3) Cancel Purchase\n\
                             4) Exit\n";

pub const PROMPT: &str = "> ";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    List,
    Trade(Trade),
    Exit,
}

impl MenuChoice {
    /// Match a trimmed menu line; `None` for anything unrecognized.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "1" => Some(Self::List),
            "2" => Some(Self::Trade(Trade::Buy)),
            "3" => Some(Self::Trade(Trade::Cancel)),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// A stock-moving menu action.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Trade {
    Buy,
    Cancel,
}

impl Trade {
    pub fn id_prompt(self) -> &'static str {
        match self {
            Trade::Buy => "Enter product ID to buy: ",
            Trade::Cancel => "Enter product ID to cancel: ",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Trade::Buy => "Purchase successful!",
            Trade::Cancel => "Cancellation successful!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn recognizes_menu_numbers_with_whitespace() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::List));
        assert_eq!(MenuChoice::parse(" 2\n"), Some(MenuChoice::Trade(Trade::Buy)));
        assert_eq!(MenuChoice::parse("3 "), Some(MenuChoice::Trade(Trade::Cancel)));
        assert_eq!(MenuChoice::parse("\t4"), Some(MenuChoice::Exit));
    }

    #[test]
    fn rejects_everything_else() {
        for line in ["", "0", "5", "list", "1 2", "-1"] {
            assert_eq!(MenuChoice::parse(line), None, "line {line:?}");
        }
    }

    #[test]
    fn menu_text_lists_all_options() {
        for label in ["List Products", "Buy Product", "Cancel Purchase", "Exit"] {
            assert!(MENU_TEXT.contains(label));
        }
    }

    proptest! {
        /// Property: only the four menu digits (modulo surrounding whitespace)
        /// are ever recognized.
        #[test]
        fn arbitrary_lines_never_match_unless_menu_digit(line in ".{0,12}") {
            let recognized = MenuChoice::parse(&line).is_some();
            let is_digit = matches!(line.trim(), "1" | "2" | "3" | "4");
            prop_assert_eq!(recognized, is_digit);
        }
    }
}
