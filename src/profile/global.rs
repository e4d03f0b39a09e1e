//! Process-wide selected profile
//!
//! Kept for code that cannot receive a [`ProfileContext`] explicitly. Reads
//! are thread-safe; writes only happen through [`apply_profile`] and
//! [`set_framework_available`], and both are rejected once [`freeze`] has
//! been called at the end of bootstrap.

use super::context::{FrameworkProbe, ProfileContext};
use crate::error::{Result, TvbError};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

struct GlobalState {
    context: ProfileContext,
    frozen: bool,
}

static GLOBAL: RwLock<GlobalState> = RwLock::new(GlobalState {
    context: ProfileContext::new(false),
    frozen: false,
});

fn read() -> RwLockReadGuard<'static, GlobalState> {
    GLOBAL.read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, GlobalState> {
    GLOBAL.write().unwrap_or_else(PoisonError::into_inner)
}

/// Record framework availability as reported by `probe`
pub fn install_probe(probe: &dyn FrameworkProbe) -> Result<()> {
    set_framework_available(probe.framework_available())
}

/// Record framework availability decided by the caller
pub fn set_framework_available(available: bool) -> Result<()> {
    let mut state = write();
    if state.frozen {
        tracing::warn!("Ignoring framework availability change after freeze");
        return Err(TvbError::config("process profile is frozen"));
    }
    state.context.set_framework_available(available);
    Ok(())
}

/// Select the process-wide profile from `script_argv`.
///
/// Same semantics as [`ProfileContext::apply_profile`]. After [`freeze`],
/// re-applying the profile already in effect succeeds; a different one is an
/// error and leaves both the state and the arguments intact.
pub fn apply_profile(
    script_argv: &mut Vec<String>,
    remove_from_args: bool,
) -> Result<Option<String>> {
    let mut state = write();
    if state.frozen {
        let requested = match super::find_profile(script_argv.as_slice()) {
            Some(requested) => requested.to_string(),
            None => return Ok(None),
        };
        if state.context.selected() != Some(requested.as_str()) {
            tracing::warn!("Rejected profile {} after freeze", requested);
            return Err(TvbError::ProfileFrozen {
                current: state.context.selected().map(str::to_string),
                requested,
            });
        }
        super::take_profile(script_argv, remove_from_args);
        return Ok(Some(requested));
    }
    Ok(state
        .context
        .apply_profile(script_argv, remove_from_args)
        .map(str::to_string))
}

/// Seal the process-wide profile; later writes are rejected
pub fn freeze() {
    let mut state = write();
    if !state.frozen {
        tracing::debug!("Process profile frozen at {:?}", state.context.selected());
        state.frozen = true;
    }
}

/// Whether [`freeze`] has been called
pub fn is_frozen() -> bool {
    read().frozen
}

/// Currently selected profile name
pub fn selected() -> Option<String> {
    read().context.selected().map(str::to_string)
}

/// Process-wide library mode query
pub fn is_library_mode() -> bool {
    read().context.is_library_mode()
}

/// Copy of the process-wide context, for handing to components explicitly
pub fn snapshot() -> ProfileContext {
    read().context.clone()
}
