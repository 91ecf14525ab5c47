use std::io;

use anyhow::Result;
use compliance::ProfileReference;

use super::Session;

pub fn cmd_execute(
    mut session: Session,
    profile: &ProfileReference,
    raise_if_not_present: bool,
) -> Result<()> {
    if raise_if_not_present {
        session.config.audit.raise_if_not_present = true;
    }

    let runner = session.runner()?;
    let outcome = runner.execute(profile)?;

    let mut out = io::stdout().lock();
    session.renderer().execute(&mut out, &profile.slug(), &outcome)?;
    Ok(())
}
