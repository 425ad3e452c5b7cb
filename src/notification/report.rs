use crate::config::GymConfig;
use crate::member::Members;
use crate::member::due_date::DueStatus::{DueIn, DueToday, Overdue};
use crate::member::due_date::{DueDate, DueStatus};
use crate::notification::{Result, load_members_for_action};
use crate::tools::clock::Clock;
use chrono::NaiveDate;
use std::io::Write;

/// List every membership expiring within the display window, or already expired.
/// Returns how many members have been listed.
pub fn show_upcoming<W: Write>(
    config: &GymConfig,
    clock: &dyn Clock,
    output: &mut W,
) -> Result<usize> {
    let members = load_members_for_action(config, output)?;
    write_upcoming(&members, clock.today(), config, output)
}

fn write_upcoming<W: Write>(
    members: &Members,
    today: NaiveDate,
    config: &GymConfig,
    output: &mut W,
) -> Result<usize> {
    writeln!(output, "\nVencimientos próximos:\n")?;

    let mut listed = 0;
    for member in members.iter() {
        let due_date = DueDate::compute(member, *config.plan_days(), today);
        if due_date.is_within(*config.display_days()) {
            writeln!(
                output,
                "- {} | {} | {}",
                member.display_name(),
                describe_status(due_date.status()),
                due_date.expiration()
            )?;
            listed += 1;
        }
    }

    if listed == 0 {
        writeln!(output, "No hay vencimientos próximos.")?;
    }

    Ok(listed)
}

fn describe_status(status: DueStatus) -> String {
    match status {
        Overdue(days) => format!("VENCIDO hace {days} días"),
        DueToday => "VENCE HOY".to_owned(),
        DueIn(days) => format!("Vence en {days} días"),
    }
}
