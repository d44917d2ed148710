use super::direction::Direction;

/// Gatekeeper for direction changes: at most one change is accepted between
/// consecutive ticks, and a change that would reverse the snake straight into
/// its own neck is refused.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(super) struct InputMapper {
    /// Set once a direction change has been accepted during the current tick
    locked: bool,
}

impl InputMapper {
    pub(super) fn new() -> InputMapper {
        InputMapper::default()
    }

    /// Decide whether the snake, currently moving in `current`, may turn to
    /// `requested`.  Returns the direction to adopt, taking effect on the very
    /// next step.
    pub(super) fn request(&mut self, current: Direction, requested: Direction) -> Option<Direction> {
        if self.locked || requested == current.reverse() {
            return None;
        }
        self.locked = true;
        Some(requested)
    }

    /// Called at the start of each tick
    pub(super) fn unlock(&mut self) {
        self.locked = false;
    }

    #[cfg(test)]
    pub(super) fn locked(self) -> bool {
        self.locked
    }
}
