use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub enum OutputBlock {
    /// A rendered map frame, printed verbatim; it carries its own line
    /// breaks (including the trailing blank line after a non-empty frame).
    Frame(String),
    /// A one-line message.
    Text(String),
}

#[derive(Default, Debug, Serialize)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    pub fn frame(&mut self, s: impl Into<String>) {
        let s = s.into();
        // A fully-fogged frame renders to nothing at all.
        if !s.is_empty() {
            self.blocks.push(OutputBlock::Frame(s));
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn blank_messages_are_dropped() {
        let mut out = Output::new();
        out.say("");
        out.say("   ");
        out.say("hello");
        assert_eq!(out.blocks.len(), 1);
    }

    #[test]
    fn empty_frames_are_dropped() {
        let mut out = Output::new();
        out.frame("");
        assert!(out.blocks.is_empty());
        out.frame("@\n\n");
        assert_eq!(out.blocks.len(), 1);
    }
}
