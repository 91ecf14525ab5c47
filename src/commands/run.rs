use std::io;

use anyhow::{bail, Result};
use compliance::ProfileReference;

use super::Session;

/// Profiles named on the command line, else the configured ones.
fn select_profiles(session: &Session, names: &[String]) -> Vec<ProfileReference> {
    if names.is_empty() {
        session.config.profile_references()
    } else {
        names.iter().map(ProfileReference::new).collect()
    }
}

pub fn cmd_run(
    mut session: Session,
    names: &[String],
    raise_if_unreachable: bool,
    raise_if_not_present: bool,
    insecure: bool,
) -> Result<()> {
    if raise_if_unreachable {
        session.config.audit.raise_if_unreachable = true;
    }
    if raise_if_not_present {
        session.config.audit.raise_if_not_present = true;
    }
    if insecure {
        session.config.catalog.insecure_skip_verify = true;
    }

    let profiles = select_profiles(&session, names);
    if profiles.is_empty() {
        bail!("no profiles given and none configured (add [[profiles]] to the config)");
    }

    let runner = session.runner()?;
    let runs = runner.run_all(&profiles)?;

    let renderer = session.renderer();
    let mut out = io::stdout().lock();
    for run in &runs {
        renderer.run(&mut out, run)?;
    }
    Ok(())
}
