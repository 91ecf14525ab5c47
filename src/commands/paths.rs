use std::io;

use anyhow::Result;
use compliance::presentation::output::ProfilePaths;
use compliance::ProfileReference;

use super::Session;

pub fn cmd_paths(session: Session, profile: &ProfileReference) -> Result<()> {
    let paths = ProfilePaths::for_profile(profile, &session.config.cache_root);

    let mut out = io::stdout().lock();
    session.renderer().paths(&mut out, &paths)?;
    Ok(())
}
