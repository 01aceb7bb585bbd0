use anyhow::Result;
use derive_more::Display;
use inquire::{Select, Text};
use log::info;
use sesame::feedback::verdict_line;
use sesame::rules::{MIN_LENGTH, SPECIAL_CHARS};
use sesame::Password;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

const LOG_FILE: &str = "./sesame.log";

type MenuExit = Option<()>;
const MENU_EXIT: MenuExit = None;
const MENU_LOOP: MenuExit = Some(());

/// A looping text menu
trait Menu {
    /// Body of the menu. Returns None to leave,
    /// or Some(()) to show the menu again.
    fn enter(&mut self) -> Result<MenuExit>;

    /// Runs the menu until it asks to leave,
    /// intercepting errors along the way.
    fn enter_loop(&mut self) {
        while let Some(result) = self.enter().transpose() {
            if let Err(error) = result {
                eprintln!("Error: {error}");
            }
        }
    }
}

struct App;

impl App {
    fn start(&mut self) {
        println!("Welcome! Pick a password that satisfies the house rules.");
        self.enter_loop();
    }
}

impl Menu for App {
    fn enter(&mut self) -> Result<MenuExit> {
        #[derive(EnumIter, Display)]
        enum Choice {
            #[display("Check a password")]
            Check,
            #[display("Show the rules")]
            Rules,
            #[display("Quit")]
            Exit,
        }

        let choice = Select::new("What do you want to do?", Choice::iter().collect()).prompt()?;

        match choice {
            Choice::Check => {
                let candidate = Password::new(Text::new("Password to check:").prompt()?);

                // Log the verdict, never the candidate itself
                info!(
                    "Checked a {}-character candidate: {}",
                    candidate.as_str().chars().count(),
                    if candidate.is_valid() {
                        "valid"
                    } else {
                        "not valid"
                    }
                );

                println!("{}", verdict_line(&candidate));
                Ok(MENU_LOOP)
            }

            Choice::Rules => {
                let specials: String = SPECIAL_CHARS.iter().collect();
                println!("A password is accepted when it:");
                println!("- is at least {MIN_LENGTH} characters long");
                println!("- contains at least one lowercase letter");
                println!("- contains at least one uppercase letter");
                println!("- contains at least one digit");
                println!("- contains at least one of: {specials}");
                Ok(MENU_LOOP)
            }

            Choice::Exit => Ok(MENU_EXIT),
        }
    }
}

fn main() -> Result<()> {
    simple_logging::log_to_file(LOG_FILE, log::LevelFilter::Info)?;
    info!("Starting the password check demo");
    App.start();
    Ok(())
}
