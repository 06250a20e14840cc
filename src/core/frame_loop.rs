/// Source of display-refresh callbacks (`requestAnimationFrame` on the web).
pub trait FrameHost {
    type Handle: Copy + PartialEq + std::fmt::Debug;

    /// Ask for one more frame callback. `None` means the host refused.
    fn request_frame(&mut self) -> Option<Self::Handle>;
    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Work done once per frame.
pub trait FrameEffect {
    fn frame(&mut self, now_sec: f64);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Disposed,
}

/// Owns an effect and keeps exactly one frame request outstanding while
/// running. After [`FrameLoop::dispose`] the pending request is cancelled and
/// neither frames nor input reach the effect again.
pub struct FrameLoop<H: FrameHost, E: FrameEffect> {
    host: H,
    effect: E,
    state: LoopState,
    pending: Option<H::Handle>,
    frames: u64,
}

impl<H: FrameHost, E: FrameEffect> FrameLoop<H, E> {
    pub fn new(host: H, effect: E) -> Self {
        Self {
            host,
            effect,
            state: LoopState::Idle,
            pending: None,
            frames: 0,
        }
    }

    pub fn start(&mut self) {
        if self.state != LoopState::Idle {
            return;
        }
        self.state = LoopState::Running;
        self.pending = self.host.request_frame();
        if self.pending.is_none() {
            log::warn!("[loop] host refused the first frame request");
        }
    }

    /// Deliver a frame callback. Returns false (and does nothing) unless the
    /// loop is running.
    pub fn on_frame(&mut self, now_sec: f64) -> bool {
        if self.state != LoopState::Running {
            return false;
        }
        self.pending = None;
        self.effect.frame(now_sec);
        self.frames += 1;
        self.pending = self.host.request_frame();
        true
    }

    pub fn dispose(&mut self) {
        if self.state == LoopState::Disposed {
            return;
        }
        if let Some(handle) = self.pending.take() {
            self.host.cancel_frame(handle);
        }
        self.state = LoopState::Disposed;
        log::info!("[loop] disposed after {} frame(s)", self.frames);
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    #[inline]
    pub fn pending(&self) -> Option<H::Handle> {
        self.pending
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Read access stays available after dispose (for a last inspection).
    pub fn effect(&self) -> &E {
        &self.effect
    }

    /// Mutable access for input handlers; `None` once disposed.
    pub fn effect_mut(&mut self) -> Option<&mut E> {
        match self.state {
            LoopState::Disposed => None,
            _ => Some(&mut self.effect),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}
