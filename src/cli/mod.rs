mod handlers;
mod input;
mod table;

pub use self::input::{Prompter, StdPrompter, read_choice};
pub use self::table::{print_rowset, render};

#[cfg(test)]
pub(crate) use self::input::ScriptedPrompter;

use crate::{di::DependenciesInject, session::Session};
use anyhow::Result;
use tracing::debug;

/// The two menu loops plus the terminal state. Transitions depend only
/// on the decoded choice, not on how input is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Main,
    User,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    CreateUser,
    LogIn,
    Exit,
    Unrecognized,
}

impl MainChoice {
    pub fn from_input(choice: i32) -> Self {
        match choice {
            1 => MainChoice::CreateUser,
            2 => MainChoice::LogIn,
            9 => MainChoice::Exit,
            _ => MainChoice::Unrecognized,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserChoice {
    Menu,
    UpdateProfile,
    PlaceOrder,
    UpdateOrder,
    OrderHistory,
    LogOut,
    Unrecognized,
}

impl UserChoice {
    pub fn from_input(choice: i32) -> Self {
        match choice {
            1 => UserChoice::Menu,
            2 => UserChoice::UpdateProfile,
            3 => UserChoice::PlaceOrder,
            4 => UserChoice::UpdateOrder,
            5 => UserChoice::OrderHistory,
            9 => UserChoice::LogOut,
            _ => UserChoice::Unrecognized,
        }
    }
}

pub fn greeting() {
    println!(
        "\n\n*******************************************************\n\
         \x20             Cafe Ordering System                     \n\
         *******************************************************\n"
    );
}

/// Drives the interactive session until the user selects Exit or the
/// input stream ends.
pub async fn run(di: &DependenciesInject, prompter: &mut dyn Prompter) -> Result<()> {
    greeting();

    let mut session = Session::new();
    let mut state = MenuState::Main;

    loop {
        state = match state {
            MenuState::Main => main_menu(di, &mut session, prompter).await?,
            MenuState::User => user_menu(di, &mut session, prompter).await?,
            MenuState::Exit => break,
        };
        debug!("menu state: {state:?}");
    }

    Ok(())
}

async fn main_menu(
    di: &DependenciesInject,
    session: &mut Session,
    prompter: &mut dyn Prompter,
) -> Result<MenuState> {
    println!("MAIN MENU");
    println!("---------");
    println!("1. Create user");
    println!("2. Log in");
    println!("9. < EXIT");

    match MainChoice::from_input(read_choice(prompter)?) {
        MainChoice::CreateUser => {
            handlers::create_user(di, prompter).await?;
            Ok(MenuState::Main)
        }
        MainChoice::LogIn => {
            if let Some(login) = handlers::log_in(di, prompter).await? {
                session.authorize(login);
                Ok(MenuState::User)
            } else {
                Ok(MenuState::Main)
            }
        }
        MainChoice::Exit => Ok(MenuState::Exit),
        MainChoice::Unrecognized => {
            println!("Unrecognized choice!");
            Ok(MenuState::Main)
        }
    }
}

async fn user_menu(
    di: &DependenciesInject,
    session: &mut Session,
    prompter: &mut dyn Prompter,
) -> Result<MenuState> {
    println!("MAIN MENU");
    println!("---------");
    println!("1. Goto Menu");
    println!("2. Update Profile");
    println!("3. Place a Order");
    println!("4. Update a Order");
    println!("5. Order History");
    println!(".........................");
    println!("9. Log out");

    match UserChoice::from_input(read_choice(prompter)?) {
        UserChoice::Menu => {
            handlers::browse_menu(di, session, prompter).await?;
            Ok(MenuState::User)
        }
        UserChoice::UpdateProfile => {
            handlers::update_profile(di, session, prompter).await?;
            Ok(MenuState::User)
        }
        UserChoice::PlaceOrder => {
            handlers::place_order(di, session, prompter).await?;
            Ok(MenuState::User)
        }
        UserChoice::UpdateOrder => {
            handlers::update_order(di, prompter).await?;
            Ok(MenuState::User)
        }
        UserChoice::OrderHistory => {
            handlers::order_history(di, session).await?;
            Ok(MenuState::User)
        }
        UserChoice::LogOut => {
            session.clear();
            Ok(MenuState::Main)
        }
        UserChoice::Unrecognized => {
            println!("Unrecognized choice!");
            Ok(MenuState::User)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MainChoice, UserChoice};

    #[test]
    fn main_menu_choices_decode() {
        assert_eq!(MainChoice::from_input(1), MainChoice::CreateUser);
        assert_eq!(MainChoice::from_input(2), MainChoice::LogIn);
        assert_eq!(MainChoice::from_input(9), MainChoice::Exit);
        assert_eq!(MainChoice::from_input(3), MainChoice::Unrecognized);
        assert_eq!(MainChoice::from_input(-7), MainChoice::Unrecognized);
    }

    #[test]
    fn user_menu_choices_decode() {
        assert_eq!(UserChoice::from_input(1), UserChoice::Menu);
        assert_eq!(UserChoice::from_input(2), UserChoice::UpdateProfile);
        assert_eq!(UserChoice::from_input(3), UserChoice::PlaceOrder);
        assert_eq!(UserChoice::from_input(4), UserChoice::UpdateOrder);
        assert_eq!(UserChoice::from_input(5), UserChoice::OrderHistory);
        assert_eq!(UserChoice::from_input(9), UserChoice::LogOut);
        assert_eq!(UserChoice::from_input(0), UserChoice::Unrecognized);
        assert_eq!(UserChoice::from_input(6), UserChoice::Unrecognized);
    }
}
