use crate::config::{RunConfig, RunMode};
use crate::target::types::SessionTarget;

/// Expand a run config into the ordered list of session targets.
///
/// Pure and deterministic: the same config always yields the same list, and
/// no driver or network interaction happens here. Launch order equals list
/// order.
pub fn expand_targets(config: &RunConfig) -> Vec<SessionTarget> {
    match config.mode {
        RunMode::SingleRoom => (0..config.clients_per_room)
            .map(|ordinal| {
                SessionTarget::new(
                    config.base_room_address.clone(),
                    &config.identity_prefix,
                    0,
                    ordinal,
                )
            })
            .collect(),
        RunMode::MultiRoom => {
            let mut targets =
                Vec::with_capacity((config.room_count * config.clients_per_room) as usize);
            for room_index in 0..config.room_count {
                // Bare concatenation, no separator: "roomA" -> "roomA0", "roomA1", ...
                let room_address = format!("{}{}", config.base_room_address, room_index);
                for ordinal in 0..config.clients_per_room {
                    targets.push(SessionTarget::new(
                        room_address.clone(),
                        &config.identity_prefix,
                        room_index,
                        ordinal,
                    ));
                }
            }
            targets
        }
    }
}
