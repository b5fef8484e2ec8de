use crate::facility::errors::CommandError;

/// One parsed line of the textual command protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create(u32),
    Park { registration: String, color: String },
    Leave(u32),
    Status,
    RegistrationsByColor(String),
    SlotsByColor(String),
    SlotByRegistration(String),
    Exit,
}

impl Command {
    /// Parses one input line into a command. Blank lines parse to `None`.
    /// A wrong token count is rejected as `InvalidFormat` without touching
    /// the engine, an unknown verb as `CommandNotFound`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&verb, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let command = match verb {
            "create_parking_lot" => Command::Create(single_arg(args)?.parse()?),
            "park" => match args {
                [registration, color] => Command::Park {
                    registration: (*registration).to_string(),
                    color: (*color).to_string(),
                },
                _ => return Err(CommandError::InvalidFormat),
            },
            "leave" => Command::Leave(single_arg(args)?.parse()?),
            "status" => {
                no_args(args)?;
                Command::Status
            }
            "registration_numbers_for_cars_with_colour" => {
                Command::RegistrationsByColor(single_arg(args)?.to_string())
            }
            "slot_numbers_for_cars_with_colour" => {
                Command::SlotsByColor(single_arg(args)?.to_string())
            }
            "slot_number_for_registration_number" => {
                Command::SlotByRegistration(single_arg(args)?.to_string())
            }
            "exit" => {
                no_args(args)?;
                Command::Exit
            }
            _ => return Err(CommandError::CommandNotFound),
        };
        Ok(Some(command))
    }
}

fn single_arg<'a>(args: &[&'a str]) -> Result<&'a str, CommandError> {
    match args {
        [arg] => Ok(arg),
        _ => Err(CommandError::InvalidFormat),
    }
}

fn no_args(args: &[&str]) -> Result<(), CommandError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(CommandError::InvalidFormat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_verb() {
        assert_eq!(
            Some(Command::Create(6)),
            Command::parse("create_parking_lot 6").unwrap()
        );
        assert_eq!(
            Some(Command::Park {
                registration: "KA-01-HH-2701".to_string(),
                color: "White".to_string()
            }),
            Command::parse("park KA-01-HH-2701 White").unwrap()
        );
        assert_eq!(Some(Command::Leave(4)), Command::parse("leave 4").unwrap());
        assert_eq!(Some(Command::Status), Command::parse("status").unwrap());
        assert_eq!(
            Some(Command::RegistrationsByColor("White".to_string())),
            Command::parse("registration_numbers_for_cars_with_colour White").unwrap()
        );
        assert_eq!(
            Some(Command::SlotsByColor("White".to_string())),
            Command::parse("slot_numbers_for_cars_with_colour White").unwrap()
        );
        assert_eq!(
            Some(Command::SlotByRegistration("KA-01-HH-2701".to_string())),
            Command::parse("slot_number_for_registration_number KA-01-HH-2701").unwrap()
        );
        assert_eq!(Some(Command::Exit), Command::parse("exit").unwrap());
    }

    #[test]
    fn blank_lines_parse_to_none() {
        assert_eq!(None, Command::parse("").unwrap());
        assert_eq!(None, Command::parse("   \t ").unwrap());
    }

    #[test]
    fn wrong_token_count_is_invalid_format() {
        assert!(matches!(
            Command::parse("create_parking_lot"),
            Err(CommandError::InvalidFormat)
        ));
        assert!(matches!(
            Command::parse("park KA-01-HH-2701"),
            Err(CommandError::InvalidFormat)
        ));
        assert!(matches!(
            Command::parse("park KA-01-HH-2701 White extra"),
            Err(CommandError::InvalidFormat)
        ));
        assert!(matches!(
            Command::parse("leave 1 2"),
            Err(CommandError::InvalidFormat)
        ));
        assert!(matches!(
            Command::parse("status now"),
            Err(CommandError::InvalidFormat)
        ));
    }

    #[test]
    fn unknown_verb_is_command_not_found() {
        assert!(matches!(
            Command::parse("unpark KA-01-HH-2701"),
            Err(CommandError::CommandNotFound)
        ));
    }

    #[test]
    fn non_numeric_arguments_are_rejected() {
        assert!(matches!(
            Command::parse("create_parking_lot six"),
            Err(CommandError::InvalidNumber(_))
        ));
        assert!(matches!(
            Command::parse("leave -1"),
            Err(CommandError::InvalidNumber(_))
        ));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(
            Some(Command::Leave(2)),
            Command::parse("  leave   2  ").unwrap()
        );
    }
}
