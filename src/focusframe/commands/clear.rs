use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SessionStore;
use tracing::info;

pub fn run<S: SessionStore>(store: &mut S) -> Result<CmdResult> {
    let removed = store.load();
    store.clear()?;
    info!(removed = removed.len(), location = %store.location(), "cleared sessions");

    let mut result = CmdResult::default().with_affected_sessions(removed);
    result.add_message(CmdMessage::success("All sessions cleared successfully!"));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::store_with_durations;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn clears_everything() {
        let mut store = store_with_durations([25i64, 50]);
        let result = run(&mut store).unwrap();
        assert_eq!(result.affected_sessions.len(), 2);
        assert!(store.load().is_empty());
    }

    #[test]
    fn clearing_corrupt_store_repairs_it() {
        let mut store = InMemoryStore::with_content("garbage");
        run(&mut store).unwrap();
        assert_eq!(store.content(), Some("[]"));
    }

    #[test]
    fn write_failure_propagates() {
        let mut store = store_with_durations([25i64]);
        store.set_simulate_write_error(true);
        assert!(run(&mut store).is_err());
        assert_eq!(store.load().len(), 1);
    }
}
