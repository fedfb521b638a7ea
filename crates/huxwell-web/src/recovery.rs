// What to do after the renderer reports a lost context. Plain state, no
// web-sys types, so it tests on the host.

/// Rebuilds allowed in a row before the canvas is left dark.
pub const MAX_REBUILD_ATTEMPTS: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecoveryAction {
    /// The surface went stale but the device is alive; reconfigure it.
    Reconfigure,
    /// The device is gone; drop every GPU object and build them again.
    Rebuild,
    /// Nothing to start this frame.
    Wait,
}

/// Tracks device loss and rebuild attempts across frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GpuRecovery {
    /// Between `webglcontextlost` and `webglcontextrestored`.
    suspended: bool,
    needs_rebuild: bool,
    rebuilding: bool,
    failed_attempts: u32,
}

impl GpuRecovery {
    /// A render call failed with a lost context.
    pub fn on_context_lost(&mut self, device_lost: bool) -> RecoveryAction {
        if device_lost {
            self.needs_rebuild = true;
        }
        if self.needs_rebuild {
            self.poll()
        } else {
            RecoveryAction::Reconfigure
        }
    }

    /// The browser took the canvas context away.
    pub fn suspend(&mut self) {
        self.suspended = true;
        self.needs_rebuild = true;
    }

    /// The browser handed the canvas context back.
    pub fn resume(&mut self) {
        self.suspended = false;
    }

    /// Whether a rebuild should start now. Called once per frame while the
    /// renderer is missing.
    pub fn poll(&mut self) -> RecoveryAction {
        if !self.needs_rebuild
            || self.suspended
            || self.rebuilding
            || self.failed_attempts >= MAX_REBUILD_ATTEMPTS
        {
            return RecoveryAction::Wait;
        }
        self.rebuilding = true;
        RecoveryAction::Rebuild
    }

    pub fn rebuild_finished(&mut self, ok: bool) {
        self.rebuilding = false;
        if ok {
            self.needs_rebuild = false;
            self.failed_attempts = 0;
        } else {
            self.failed_attempts += 1;
        }
    }

    /// The current renderer, if any, must be dropped.
    pub fn needs_rebuild(&self) -> bool {
        self.needs_rebuild
    }

    pub fn is_rebuilding(&self) -> bool {
        self.rebuilding
    }

    pub fn gave_up(&self) -> bool {
        self.needs_rebuild && self.failed_attempts >= MAX_REBUILD_ATTEMPTS
    }
}
