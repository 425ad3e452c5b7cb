use crate::config::GymConfig;
use crate::error::Result;
use crate::menu::Command::{Exit, SendReminders, ShowUpcoming};
use crate::notification::error::NotificationError;
use crate::notification::reminders::send_reminders;
use crate::notification::report::show_upcoming;
use crate::tools::clock::Clock;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SendReminders,
    ShowUpcoming,
    Exit,
}

impl Command {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(SendReminders),
            "2" => Some(ShowUpcoming),
            "0" => Some(Exit),
            _ => None,
        }
    }
}

/// Prompt the operator for actions until they leave, or input is over.
/// A failing action is reported, then the menu shows up again.
pub fn run<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    config: &GymConfig,
    clock: &dyn Clock,
) -> Result<()> {
    let mut lines = input.lines();

    loop {
        write_menu(output, config)?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };

        match Command::parse(&line?) {
            Some(SendReminders) => {
                let result = send_reminders(config, clock, output);
                report_failure(result, output)?;
            }
            Some(ShowUpcoming) => {
                let result = show_upcoming(config, clock, output);
                report_failure(result, output)?;
            }
            Some(Exit) => break,
            None => writeln!(output, "Opción inválida.")?,
        }
    }

    writeln!(output, "Hasta luego.")?;
    Ok(())
}

fn write_menu<W: Write>(output: &mut W, config: &GymConfig) -> Result<()> {
    writeln!(output, "\n===== SISTEMA DE GIMNASIO =====")?;
    writeln!(
        output,
        "1 - Enviar correos (vencen en {} días o menos)",
        config.warning_days()
    )?;
    writeln!(output, "2 - Mostrar vencimientos próximos")?;
    writeln!(output, "0 - Salir")?;
    write!(output, "Opción: ")?;
    output.flush()?;

    Ok(())
}

/// Only a broken console stops the menu.
fn report_failure<T, W: Write>(
    result: std::result::Result<T, NotificationError>,
    output: &mut W,
) -> Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(e @ NotificationError::Output(_)) => Err(e.into()),
        Err(e) => {
            log::warn!("Action aborted: {e:?}");
            writeln!(output, "{e}")?;
            Ok(())
        }
    }
}
