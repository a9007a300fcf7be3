use crate::core::address_book::{AddressBook, Deletion};
use crate::core::birthdays::DEFAULT_WINDOW_DAYS;
use crate::domain::{PhoneEdit, PhoneRemoval, Record};
use crate::utils::error::{ContactError, Result};
use chrono::{Local, NaiveDate};

pub const HELP_TEXT: &str = "\
Available commands:
  hello                              greet the assistant
  add <name> <phone>                 create a contact with one phone
  change <name> <old> <new>          replace a phone number
  remove-phone <name> <phone>        remove a phone number
  phone <name>                       show the first phone of a contact
  all                                list every contact
  add-birthday <name> <DD.MM.YYYY>   set a birthday
  show-birthday <name>               show a birthday
  birthdays                          birthdays in the coming week
  delete <name>                      delete a contact
  help                               show this list
  close | exit                       leave the assistant";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, old: String, new: String },
    RemovePhone { name: String, phone: String },
    Phone { name: String },
    All,
    AddBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    Birthdays,
    Delete { name: String },
    Help,
    Exit,
}

/// What the REPL should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Continue(String),
    Exit,
}

/// 拆出指令字與參數；空白行回傳 None
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();
    Some((command, args))
}

fn expect_args<const N: usize>(command: &str, args: &[String]) -> Result<[String; N]> {
    <[String; N]>::try_from(args.to_vec()).map_err(|_| ContactError::ArityError {
        command: command.to_string(),
        expected: N,
        actual: args.len(),
    })
}

impl Command {
    pub fn parse(command: &str, args: &[String]) -> Result<Self> {
        let parsed = match command {
            "hello" => {
                expect_args::<0>(command, args)?;
                Self::Hello
            }
            "add" => {
                let [name, phone] = expect_args(command, args)?;
                Self::Add { name, phone }
            }
            "change" => {
                let [name, old, new] = expect_args(command, args)?;
                Self::Change { name, old, new }
            }
            "remove-phone" => {
                let [name, phone] = expect_args(command, args)?;
                Self::RemovePhone { name, phone }
            }
            "phone" => {
                let [name] = expect_args(command, args)?;
                Self::Phone { name }
            }
            "all" => {
                expect_args::<0>(command, args)?;
                Self::All
            }
            "add-birthday" | "birthday" => {
                let [name, birthday] = expect_args(command, args)?;
                Self::AddBirthday { name, birthday }
            }
            "show-birthday" => {
                let [name] = expect_args(command, args)?;
                Self::ShowBirthday { name }
            }
            "birthdays" | "show-all-birthdays" => {
                expect_args::<0>(command, args)?;
                Self::Birthdays
            }
            "delete" => {
                let [name] = expect_args(command, args)?;
                Self::Delete { name }
            }
            "help" => {
                expect_args::<0>(command, args)?;
                Self::Help
            }
            "close" | "exit" => Self::Exit,
            _ => {
                return Err(ContactError::UnknownCommand {
                    command: command.to_string(),
                })
            }
        };
        Ok(parsed)
    }
}

/// Turns one line of user input into one store operation and its reply.
pub struct Dispatcher<'a> {
    book: &'a mut AddressBook,
    window_days: u32,
    today: Option<NaiveDate>,
}

impl<'a> Dispatcher<'a> {
    pub fn new(book: &'a mut AddressBook) -> Self {
        Self {
            book,
            window_days: DEFAULT_WINDOW_DAYS,
            today: None,
        }
    }

    pub fn with_window_days(mut self, window_days: u32) -> Self {
        self.window_days = window_days;
        self
    }

    /// Pins the reference date used by `birthdays` instead of the local date.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        let (command, args) = parse_input(line)?;
        tracing::debug!("Dispatching '{}' with {} argument(s)", command, args.len());

        let reply = match Command::parse(&command, &args) {
            Ok(Command::Exit) => Reply::Exit,
            Ok(parsed) => match self.execute(parsed) {
                Ok(output) => Reply::Continue(output),
                Err(e) => Reply::Continue(Self::report(&e)),
            },
            Err(e) => Reply::Continue(Self::report(&e)),
        };
        Some(reply)
    }

    fn report(error: &ContactError) -> String {
        tracing::info!("{} (Category: {:?})", error, error.category());
        tracing::debug!("💡 Suggestion: {}", error.recovery_suggestion());
        error.user_friendly_message()
    }

    fn record_mut(&mut self, name: &str) -> Result<&mut Record> {
        self.book.find_mut(name).ok_or_else(|| ContactError::NotFound {
            name: name.to_string(),
        })
    }

    fn record(&self, name: &str) -> Result<&Record> {
        self.book.find(name).ok_or_else(|| ContactError::NotFound {
            name: name.to_string(),
        })
    }

    pub fn execute(&mut self, command: Command) -> Result<String> {
        match command {
            Command::Hello => Ok("How can I help you?".to_string()),
            Command::Add { name, phone } => {
                let mut record = Record::new(&name)?;
                record.add_phone(&phone)?;
                self.book.add_record(record);
                tracing::info!("Contact {} added", name);
                Ok("Contact added.".to_string())
            }
            Command::Change { name, old, new } => {
                match self.record_mut(&name)?.edit_phone(&old, &new)? {
                    PhoneEdit::Changed => Ok("Contact updated.".to_string()),
                    PhoneEdit::NotFound => Ok("Phone not found.".to_string()),
                }
            }
            Command::RemovePhone { name, phone } => {
                match self.record_mut(&name)?.remove_phone(&phone) {
                    PhoneRemoval::Removed => Ok("Phone removed.".to_string()),
                    PhoneRemoval::NotFound => Ok("Phone not found.".to_string()),
                }
            }
            Command::Phone { name } => Ok(self
                .record(&name)?
                .first_phone()
                .map(ToString::to_string)
                .unwrap_or_else(|| "No phones recorded.".to_string())),
            Command::All => {
                if self.book.is_empty() {
                    return Ok("No contacts saved.".to_string());
                }
                let lines: Vec<String> = self.book.iter().map(ToString::to_string).collect();
                Ok(lines.join("\n"))
            }
            Command::AddBirthday { name, birthday } => {
                self.record_mut(&name)?.add_birthday(&birthday)?;
                Ok("Birthday added.".to_string())
            }
            Command::ShowBirthday { name } => Ok(self
                .record(&name)?
                .show_birthday()
                .map(ToString::to_string)
                .unwrap_or_else(|| "Birthday not set.".to_string())),
            Command::Birthdays => {
                let upcoming = match self.today {
                    Some(today) => self.book.upcoming_birthdays(today, self.window_days),
                    None if self.window_days == DEFAULT_WINDOW_DAYS => {
                        self.book.birthdays_in_next_week()
                    }
                    None => self
                        .book
                        .upcoming_birthdays(Local::now().date_naive(), self.window_days),
                };
                if upcoming.is_empty() && self.window_days == DEFAULT_WINDOW_DAYS {
                    Ok("No birthdays in the next week.".to_string())
                } else if upcoming.is_empty() {
                    Ok(format!("No birthdays in the next {} days.", self.window_days))
                } else {
                    Ok(upcoming.to_string())
                }
            }
            Command::Delete { name } => match self.book.delete(&name) {
                Deletion::Deleted => Ok("Contact deleted.".to_string()),
                Deletion::NotFound => Err(ContactError::NotFound { name }),
            },
            Command::Help => Ok(HELP_TEXT.to_string()),
            Command::Exit => Ok(String::new()),
        }
    }
}
