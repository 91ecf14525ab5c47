use std::io;

use anyhow::Result;
use compliance::ProfileReference;

use super::Session;

pub fn cmd_fetch(
    mut session: Session,
    profile: &ProfileReference,
    raise_if_unreachable: bool,
    insecure: bool,
) -> Result<()> {
    if raise_if_unreachable {
        session.config.audit.raise_if_unreachable = true;
    }
    if insecure {
        session.config.catalog.insecure_skip_verify = true;
    }

    let runner = session.runner()?;
    let outcome = runner.fetch(profile)?;

    let mut out = io::stdout().lock();
    session.renderer().fetch(&mut out, &profile.slug(), &outcome)?;
    Ok(())
}
