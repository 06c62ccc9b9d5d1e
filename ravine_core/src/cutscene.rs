use serde::Serialize;

/// Host-side cutscene timer.
///
/// `frames` only advances while a cutscene is running. It wraps like the
/// 16-bit counter it stands in for.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct CutsceneContext {
    pub active: bool,
    pub frames: u16,
}

impl CutsceneContext {
    pub fn start(&mut self) {
        self.active = true;
        self.frames = 0;
    }

    pub fn stop(&mut self) {
        self.active = false;
    }

    pub fn advance(&mut self) {
        if self.active {
            self.frames = self.frames.wrapping_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CutsceneContext;

    #[test]
    fn frames_only_advance_while_active() {
        let mut cs = CutsceneContext::default();
        cs.advance();
        assert_eq!(cs.frames, 0);

        cs.start();
        cs.advance();
        cs.advance();
        assert_eq!(cs.frames, 2);

        cs.stop();
        cs.advance();
        assert_eq!(cs.frames, 2);
    }

    #[test]
    fn frames_wrap() {
        let mut cs = CutsceneContext {
            active: true,
            frames: u16::MAX,
        };
        cs.advance();
        assert_eq!(cs.frames, 0);
    }
}
