use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Action {
  HideHelp,
  NavigateTo(usize),
  NextFilter,
  NextPage,
  None,
  OpenCurrentInBrowser,
  PreviousFilter,
  PreviousPage,
  Quit,
  Refresh,
  SelectFirst,
  SelectLast,
  SelectNext,
  SelectPrevious,
  ShowHelp,
}

impl Action {
  pub(crate) fn for_key(key: KeyEvent) -> Self {
    if key.code == KeyCode::Char('c')
      && key.modifiers.contains(KeyModifiers::CONTROL)
    {
      return Action::Quit;
    }

    match key.code {
      KeyCode::Char('q' | 'Q') | KeyCode::Esc => Action::Quit,
      KeyCode::Char('?') => Action::ShowHelp,
      KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => {
        Action::PreviousFilter
      }
      KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Action::NextFilter,
      KeyCode::Char(digit @ '1'..='9') => digit
        .to_digit(10)
        .and_then(|number| usize::try_from(number).ok())
        .map_or(Action::None, |number| Action::NavigateTo(number - 1)),
      KeyCode::Char('p') | KeyCode::PageUp => Action::PreviousPage,
      KeyCode::Char('n') | KeyCode::PageDown => Action::NextPage,
      KeyCode::Char('r') => Action::Refresh,
      KeyCode::Down | KeyCode::Char('j') => Action::SelectNext,
      KeyCode::Up | KeyCode::Char('k') => Action::SelectPrevious,
      KeyCode::Home => Action::SelectFirst,
      KeyCode::End => Action::SelectLast,
      KeyCode::Enter | KeyCode::Char('o' | 'O') => {
        Action::OpenCurrentInBrowser
      }
      _ => Action::None,
    }
  }
}
