use lib_session::{MenuAction, MenuOption, MenuState};

#[test]
fn starts_on_food() {
    let menu = MenuState::new();

    assert_eq!(menu.selected(), MenuOption::Food);
}

#[test]
fn toggle_is_an_involution() {
    let mut menu = MenuState::new();

    menu.toggle();
    assert_eq!(menu.selected(), MenuOption::Friends);

    menu.toggle();
    assert_eq!(menu.selected(), MenuOption::Food);
}

#[test]
fn confirm_follows_the_selection() {
    let mut menu = MenuState::new();

    assert_eq!(menu.confirm(), MenuAction::StartGame);

    // The toggle history does not matter, only the final selection.
    for _ in 0..3 {
        menu.toggle();
    }
    assert_eq!(menu.selected(), MenuOption::Friends);
    assert_eq!(menu.confirm(), MenuAction::RequestExit);

    menu.toggle();
    assert_eq!(menu.confirm(), MenuAction::StartGame);
}

#[test]
fn cancel_always_exits() {
    let mut menu = MenuState::new();

    assert_eq!(menu.cancel(), MenuAction::RequestExit);

    menu.toggle();
    assert_eq!(menu.cancel(), MenuAction::RequestExit);
}
