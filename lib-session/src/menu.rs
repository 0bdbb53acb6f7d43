#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuOption {
    #[default]
    Food,
    Friends,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    StartGame,
    RequestExit,
}

/// The two-option title menu. Exactly one option is selected at all
/// times; left and right both flip the selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    selected: MenuOption,
}

impl MenuState {
    pub fn new() -> MenuState {
        MenuState::default()
    }

    pub fn selected(&self) -> MenuOption {
        self.selected
    }

    pub fn toggle(&mut self) {
        self.selected = match self.selected {
            MenuOption::Food => MenuOption::Friends,
            MenuOption::Friends => MenuOption::Food,
        };
    }

    pub fn confirm(&self) -> MenuAction {
        match self.selected {
            MenuOption::Food => MenuAction::StartGame,
            MenuOption::Friends => MenuAction::RequestExit,
        }
    }

    pub fn cancel(&self) -> MenuAction {
        MenuAction::RequestExit
    }
}
