use crate::config::GymConfig;
use crate::member::Members;
use crate::member::due_date::DueStatus::{DueIn, DueToday, Overdue};
use crate::member::due_date::{DueDate, DueStatus};
use crate::notification::{Result, load_members_for_action};
use crate::tools::clock::Clock;
use crate::tools::email::{Mailer, SmtpConfig, connect};
use chrono::NaiveDate;
use std::io::Write;

const REMINDER_SUBJECT: &str = "Recordatorio de cuota";

/// Email every member whose membership is about to expire, or has expired.
/// Returns how many emails have been sent.
///
/// Nothing is remembered between two runs:
/// a member still late tomorrow gets reminded again tomorrow.
pub fn send_reminders<W: Write>(
    config: &GymConfig,
    clock: &dyn Clock,
    output: &mut W,
) -> Result<usize> {
    let smtp_config = SmtpConfig::from_env()?;
    let members = load_members_for_action(config, output)?;
    let today = clock.today();

    let mut mailer = connect(&smtp_config)?;
    let sent = notify_expiring(&members, today, config, &mut mailer, output)?;
    mailer.quit();

    Ok(sent)
}

/// Send a reminder to each member expiring within the warning threshold.
/// A failed email doesn't stop the others from being sent.
pub fn notify_expiring<W: Write>(
    members: &Members,
    today: NaiveDate,
    config: &GymConfig,
    mailer: &mut dyn Mailer,
    output: &mut W,
) -> Result<usize> {
    let mut sent = 0;

    for member in members.iter() {
        let due_date = DueDate::compute(member, *config.plan_days(), today);
        if !due_date.is_within(*config.warning_days()) {
            continue;
        }

        let name = member.display_name();
        let Some(email) = member.email() else {
            log::debug!("No email address for {name}, skipping");
            continue;
        };

        let body = create_email_body(&name, due_date.status());
        match mailer.send(email, REMINDER_SUBJECT, &body) {
            Ok(()) => {
                writeln!(output, "Correo enviado a {name} ({email})")?;
                sent += 1;
            }
            Err(e) => writeln!(output, "Error enviando correo a {name}: {e}")?,
        }
    }

    if sent == 0 {
        writeln!(output, "No hay vencimientos para avisar.")?;
    } else {
        log::info!("{sent} reminder(s) sent");
    }

    Ok(sent)
}

fn describe_status(status: DueStatus) -> String {
    match status {
        Overdue(days) => format!("Tu cuota está vencida desde hace {days} días."),
        DueToday => "Tu cuota vence hoy.".to_owned(),
        DueIn(days) => format!("Te quedan {days} días para renovar tu cuota."),
    }
}

fn create_email_body(name: &str, status: DueStatus) -> String {
    format!(
        "Hola {name},\n\n{}\n\nPara seguir entrenando sin interrupciones, pasa por el gimnasio a renovar.\n\nMuchas gracias.\n",
        describe_status(status)
    )
}
