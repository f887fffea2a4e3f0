use crate::error::CommandError;

/// A parsed command line, ready to run against the dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a member to a key
    Add { key: String, value: String },
    /// List all keys
    Keys,
    /// List the members of a key
    Members { key: String },
    /// Remove one member from a key
    Remove { key: String, value: String },
    /// Remove a key and all of its members
    RemoveAll { key: String },
    /// Remove everything
    Clear,
    /// Check whether a key exists
    KeyExists { key: String },
    /// Check whether a member exists within a key
    MemberExists { key: String, value: String },
    /// List the members of every key
    AllMembers,
    /// List every key and member pair
    Items,
    /// Leave the session
    Exit,
}

impl Command {
    /// Parses one input line.
    ///
    /// Returns `Ok(None)` for a blank line. The command name is matched
    /// case-insensitively; arguments are kept as typed.
    ///
    /// # Errors
    ///
    /// `CommandError::Unknown` for an unrecognised name, `CommandError::Usage`
    /// when the argument count does not match.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();

        let command = match name.to_uppercase().as_str() {
            "ADD" => {
                let [key, value] = expect_args::<2>(&args, "ADD key value")?;
                Command::Add { key, value }
            },
            "KEYS" => {
                expect_no_args(&args, "KEYS")?;
                Command::Keys
            },
            "MEMBERS" => {
                let [key] = expect_args::<1>(&args, "MEMBERS key")?;
                Command::Members { key }
            },
            "REMOVE" => {
                let [key, value] = expect_args::<2>(&args, "REMOVE key value")?;
                Command::Remove { key, value }
            },
            "REMOVEALL" => {
                let [key] = expect_args::<1>(&args, "REMOVEALL key")?;
                Command::RemoveAll { key }
            },
            "CLEAR" => {
                expect_no_args(&args, "CLEAR")?;
                Command::Clear
            },
            "KEYEXISTS" => {
                let [key] = expect_args::<1>(&args, "KEYEXISTS key")?;
                Command::KeyExists { key }
            },
            "MEMBEREXISTS" => {
                let [key, value] = expect_args::<2>(&args, "MEMBEREXISTS key value")?;
                Command::MemberExists { key, value }
            },
            "ALLMEMBERS" => {
                expect_no_args(&args, "ALLMEMBERS")?;
                Command::AllMembers
            },
            "ITEMS" => {
                expect_no_args(&args, "ITEMS")?;
                Command::Items
            },
            "EXIT" => {
                expect_no_args(&args, "EXIT")?;
                Command::Exit
            },
            _ => return Err(CommandError::Unknown(name.to_owned())),
        };

        Ok(Some(command))
    }

    /// Whether running this command can change the dictionary.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Command::Add { .. } | Command::Remove { .. } | Command::RemoveAll { .. } | Command::Clear
        )
    }
}

fn expect_no_args(args: &[&str], usage: &'static str) -> Result<(), CommandError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(CommandError::Usage(usage))
    }
}

/// Checks the argument count and hands the arguments back as owned strings.
fn expect_args<const N: usize>(
    args: &[&str],
    usage: &'static str,
) -> Result<[String; N], CommandError> {
    let args: [&str; N] = args.try_into().map_err(|_| CommandError::Usage(usage))?;
    Ok(args.map(str::to_owned))
}
