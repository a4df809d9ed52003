//! Line-based terminal input: commands start with `:`, anything else is the
//! new contents of the search box.

use sources_core::{ActivationKey, Msg};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Msg(Msg),
    Quit,
}

pub fn parse_line(line: &str) -> Input {
    let line = line.trim_end_matches(['\r', '\n']);
    match line.trim() {
        ":next" | ":n" => Input::Msg(Msg::NextPage),
        ":prev" | ":p" => Input::Msg(Msg::PreviousPage),
        ":toggle" | ":t" => Input::Msg(Msg::ViewModeToggled),
        ":enter" => Input::Msg(Msg::ViewModeKey(ActivationKey::Enter)),
        ":space" => Input::Msg(Msg::ViewModeKey(ActivationKey::Space)),
        ":quit" | ":q" => Input::Quit,
        _ => Input::Msg(Msg::SearchInput(line.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_are_recognized() {
        assert_eq!(parse_line(":next\n"), Input::Msg(Msg::NextPage));
        assert_eq!(parse_line(" :p "), Input::Msg(Msg::PreviousPage));
        assert_eq!(
            parse_line(":space"),
            Input::Msg(Msg::ViewModeKey(ActivationKey::Space))
        );
        assert_eq!(parse_line(":q"), Input::Quit);
    }

    #[test]
    fn other_lines_are_search_text() {
        assert_eq!(
            parse_line("alpha beta\r\n"),
            Input::Msg(Msg::SearchInput("alpha beta".to_string()))
        );
        assert_eq!(parse_line(""), Input::Msg(Msg::SearchInput(String::new())));
    }
}
