use crate::config::GymConfig;
use crate::member::Members;
use crate::member::import_from_file::load_members;
use crate::notification::error::NotificationError;
use crate::notification::error::NotificationError::NoMembersLoaded;
use std::io::Write;

pub mod error;
pub mod reminders;
pub mod report;

type Result<T, E = NotificationError> = std::result::Result<T, E>;

/// Load members afresh for an action.
/// An unreadable file is reported onto the console, then handled as an empty one.
fn load_members_for_action<W: Write>(config: &GymConfig, output: &mut W) -> Result<Members> {
    let members = match load_members(config.members_file()) {
        Ok(members) => members,
        Err(e) => {
            log::warn!("{e:?}");
            writeln!(output, "{e}")?;
            Members::default()
        }
    };

    if members.is_empty() {
        return Err(NoMembersLoaded);
    }

    Ok(members)
}
