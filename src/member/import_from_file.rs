use crate::member::error::LoaderError;
use crate::member::error::LoaderError::{
    CantOpenFile, MalformedHeader, MissingFile, MissingPaymentDateColumn,
};
use crate::member::{MemberRow, Members, PAYMENT_DATE_COLUMN};
use crate::tools::log_message_and_return;
use csv::Trim;
use std::fs::File;
use std::io::Read;
use std::path::Path;

type Result<T, E = LoaderError> = std::result::Result<T, E>;

/// Load every member from the given CSV file.
/// Lines without a valid payment date are left aside.
pub fn load_members(path: &Path) -> Result<Members> {
    let filename = path.display().to_string();
    if !path.exists() {
        return Err(MissingFile(filename));
    }

    let file = File::open(path).map_err(log_message_and_return(
        &format!("Can't open members file `{filename}`."),
        CantOpenFile(filename.clone()),
    ))?;
    let members = read_members(file, &filename)?;
    log::info!("{} member(s) loaded from `{filename}`", members.len());

    Ok(members)
}

fn read_members<R: Read>(reader: R, filename: &str) -> Result<Members> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader.headers().map_err(log_message_and_return(
        &format!("Can't read headers of `{filename}`."),
        MalformedHeader(filename.to_owned()),
    ))?;
    if !headers.iter().any(|header| header == PAYMENT_DATE_COLUMN) {
        return Err(MissingPaymentDateColumn);
    }

    let members = reader
        .deserialize()
        .filter_map(|result: csv::Result<MemberRow>| match result {
            Ok(row) => {
                let member = row.into_member();
                if member.is_none() {
                    log::debug!("Skipping line without a valid payment date");
                }
                member
            }
            Err(e) => {
                log::warn!("Error while reading member\n{e:#?}");
                None
            }
        })
        .collect::<Vec<_>>();

    Ok(Members::from(members))
}
